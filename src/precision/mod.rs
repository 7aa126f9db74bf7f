//! Floating-point representations the RMSSD pipeline can run in.
//!
//! Every step of a calculation goes through the [`Precision`] trait, so a
//! value never leaves its width between parsing and the final square root.
//! Three implementations are provided:
//!
//! - `f32`: IEEE-754 binary32 ([`Representation::Narrow`])
//! - `f64`: IEEE-754 binary64 ([`Representation::Standard`])
//! - [`ExtendedFloat`]: 64-bit significand, the x87 extended format's
//!   precision, backed by MPFR ([`Representation::Extended`])

mod extended;
mod native;

pub use extended::ExtendedFloat;

use crate::error::SampleFault;
use nalgebra::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arithmetic of a single floating-point width.
///
/// Implementors must perform each operation in their own width; none of the
/// methods may compute through a wider type and narrow afterwards.
pub trait Precision: Scalar {
    /// Storage width in bits, as reported to the user.
    const BITS: u32;
    /// Significand precision in bits, including the implicit bit.
    const SIGNIFICAND_BITS: u32;
    const REPRESENTATION: Representation;

    fn zero() -> Self;
    /// Converts an element count for use as a divisor.
    fn from_count(count: usize) -> Self;
    fn add(self, rhs: &Self) -> Self;
    fn sub(self, rhs: &Self) -> Self;
    fn mul(self, rhs: &Self) -> Self;
    fn div(self, rhs: &Self) -> Self;
    fn sqrt(self) -> Self;
    /// Rounds to the nearest integer, half-way cases away from zero.
    fn round_half_away(self) -> Self;
    /// `10^exponent`, computed in this width.
    fn ten_to_the(exponent: u32) -> Self;
    fn is_finite(&self) -> bool;
    /// Parses a trimmed decimal literal straight into this width.
    fn parse_sample(text: &str) -> Result<Self, SampleFault>;
    /// Formats with exactly `places` digits after the decimal point.
    fn to_fixed(&self, places: usize) -> String;

    /// Rounds to `places` decimal places as `round(x * 10^n) / 10^n`.
    ///
    /// Returns the value unchanged when the multiplier or the scaled value
    /// overflows the width.
    fn round_to_places(self, places: u32) -> Self {
        let multiplier = Self::ten_to_the(places);
        if !multiplier.is_finite() {
            return self;
        }
        let scaled = self.clone().mul(&multiplier);
        if !scaled.is_finite() {
            return self;
        }
        scaled.round_half_away().div(&multiplier)
    }
}

/// Selects the floating-point width of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// 32-bit IEEE-754 (`float`).
    Narrow,
    /// 64-bit IEEE-754 (`double`).
    Standard,
    /// 64-bit significand extended precision (`long double` on x87).
    Extended,
}

impl Representation {
    pub const ALL: [Representation; 3] = [
        Representation::Narrow,
        Representation::Standard,
        Representation::Extended,
    ];

    pub fn bits(self) -> u32 {
        match self {
            Representation::Narrow => <f32 as Precision>::BITS,
            Representation::Standard => <f64 as Precision>::BITS,
            Representation::Extended => ExtendedFloat::BITS,
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit float", self.bits())
    }
}

impl FromStr for Representation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "narrow" | "float" | "f32" | "single" => Ok(Representation::Narrow),
            "standard" | "double" | "f64" => Ok(Representation::Standard),
            "extended" | "long-double" | "f80" => Ok(Representation::Extended),
            other => Err(format!(
                "unknown representation '{other}' (expected narrow, standard or extended)"
            )),
        }
    }
}
