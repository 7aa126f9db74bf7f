//! This module contains the steps that turn raw sample text into a sample sequence.
//!
//! The `source` submodule abstracts where sample lines are read from.
//! The `rounding` submodule provides the decimal rounding policy applied to each sample.
//! The `loader` submodule parses lines into a `SampleSequence` of the requested precision.
pub mod loader;
pub mod rounding;
pub mod source;
