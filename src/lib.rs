//! RMSSD across floating-point precisions
//!
//! This crate computes the Root Mean Square of Successive Differences (RMSSD) of RR intervals
//! in single, double and extended precision, with optional decimal rounding of the samples.
//! Every step from parsing to the square root runs in the selected width, which makes the
//! differences between precisions visible in the results.
//!
//! # Example
//!
//! ```rust
//! use rmssd_precision::driver::{evaluate, Combination};
//! use rmssd_precision::precision::Representation;
//! use rmssd_precision::preprocessing::loader::LoadOptions;
//! use rmssd_precision::preprocessing::rounding::RoundingPolicy;
//! use rmssd_precision::preprocessing::source::MemorySource;
//!
//! let source = MemorySource::from_lines("example", &["1000", "1020", "1000", "1050"]);
//! let combination = Combination::new(Representation::Narrow, RoundingPolicy::places(3));
//! let value = evaluate(&source, &combination, &LoadOptions::default()).unwrap();
//! println!("{combination}: {}", value.to_fixed(20));
//! ```

pub mod analysis;
pub mod driver;
pub mod error;
pub mod precision;
pub mod preprocessing;
