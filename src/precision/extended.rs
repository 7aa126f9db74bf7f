use super::{Precision, Representation};
use crate::error::SampleFault;
use rug::ops::Pow;
use rug::float::Special;
use rug::{Float, Integer};

/// Significand bits of the x87 extended format.
const PRECISION: u32 = 64;
/// Largest binary exponent (MPFR convention, significand in [0.5, 1)) that
/// still fits the x87 extended range.
const MAX_EXPONENT: i32 = 16384;

/// Replaces results at or beyond 2^16384 with a signed infinity, the way an
/// x87 register overflows. MPFR's own exponent range is much wider.
fn saturate(value: Float) -> Float {
    match value.get_exp() {
        Some(exp) if exp > MAX_EXPONENT => {
            let infinity = Float::with_val(PRECISION, Special::Infinity);
            if value.is_sign_negative() {
                -infinity
            } else {
                infinity
            }
        }
        _ => value,
    }
}

/// Extended precision float with a 64-bit significand.
///
/// Every operation is correctly rounded to 64 bits, so results are the same
/// on every platform, unlike `long double`.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct ExtendedFloat(Float);

impl ExtendedFloat {
    pub fn as_float(&self) -> &Float {
        &self.0
    }

    /// Nearest `f64`, for comparisons against the narrower widths.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }
}

impl Precision for ExtendedFloat {
    const BITS: u32 = 80;
    const SIGNIFICAND_BITS: u32 = PRECISION;
    const REPRESENTATION: Representation = Representation::Extended;

    fn zero() -> Self {
        ExtendedFloat(Float::new(PRECISION))
    }

    fn from_count(count: usize) -> Self {
        ExtendedFloat(Float::with_val(PRECISION, count as u64))
    }

    fn add(self, rhs: &Self) -> Self {
        ExtendedFloat(saturate(self.0 + &rhs.0))
    }

    fn sub(self, rhs: &Self) -> Self {
        ExtendedFloat(saturate(self.0 - &rhs.0))
    }

    fn mul(self, rhs: &Self) -> Self {
        ExtendedFloat(saturate(self.0 * &rhs.0))
    }

    fn div(self, rhs: &Self) -> Self {
        ExtendedFloat(saturate(self.0 / &rhs.0))
    }

    fn sqrt(self) -> Self {
        ExtendedFloat(self.0.sqrt())
    }

    fn round_half_away(self) -> Self {
        ExtendedFloat(self.0.round())
    }

    fn ten_to_the(exponent: u32) -> Self {
        ExtendedFloat(saturate(Float::with_val(PRECISION, 10u32).pow(exponent)))
    }

    fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    fn parse_sample(text: &str) -> Result<Self, SampleFault> {
        // MPFR skips inner whitespace and '_' separators; hold the text to
        // the same literal grammar as the native widths first.
        text.parse::<f64>().map_err(|e| SampleFault::Invalid(e.to_string()))?;
        let parsed = Float::parse(text).map_err(|e| SampleFault::Invalid(e.to_string()))?;
        let value = Float::with_val(PRECISION, parsed);
        if value.is_nan() {
            return Err(SampleFault::Invalid("NaN is not a sample".into()));
        }
        let too_large = value.is_infinite() || value.get_exp().is_some_and(|e| e > MAX_EXPONENT);
        if too_large {
            return Err(SampleFault::OutOfRange(Self::BITS));
        }
        Ok(ExtendedFloat(value))
    }

    fn to_fixed(&self, places: usize) -> String {
        if !self.0.is_finite() {
            return self.0.to_string();
        }
        // Scale by 10^places at a precision wide enough to hold the product
        // exactly, then round once to an integer.
        let digits = u32::try_from(places).unwrap_or(u32::MAX);
        let scale = Integer::from(Integer::u_pow_u(10, digits));
        let exact = Float::with_val(
            self.0.prec().saturating_add(digits.saturating_mul(4)).saturating_add(8),
            &self.0,
        ) * &scale;
        let Some(scaled) = exact.to_integer() else {
            return self.0.to_string();
        };

        let mut magnitude = scaled.abs().to_string();
        if magnitude.len() <= places {
            magnitude = format!("{}{}", "0".repeat(places + 1 - magnitude.len()), magnitude);
        }
        let split = magnitude.len() - places;
        let sign = if self.0.is_sign_negative() { "-" } else { "" };
        if places == 0 {
            format!("{sign}{magnitude}")
        } else {
            format!("{sign}{}.{}", &magnitude[..split], &magnitude[split..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extended(text: &str) -> ExtendedFloat {
        ExtendedFloat::parse_sample(text).unwrap()
    }

    #[test]
    fn test_parse_is_not_widened_from_double() {
        let direct = extended("0.1");
        let widened = Float::with_val(PRECISION, 0.1f64);
        assert_ne!(direct.as_float(), &widened);
        assert_eq!(direct.as_float().prec(), PRECISION);
    }

    #[test]
    fn test_parse_rejects_garbage_and_overflow() {
        assert!(matches!(
            ExtendedFloat::parse_sample("abc"),
            Err(SampleFault::Invalid(_))
        ));
        assert!(matches!(
            ExtendedFloat::parse_sample("nan"),
            Err(SampleFault::Invalid(_))
        ));
        assert_eq!(
            ExtendedFloat::parse_sample("1e5000"),
            Err(SampleFault::OutOfRange(80))
        );
        // beyond f64 but inside the x87 range
        assert!(ExtendedFloat::parse_sample("1e400").is_ok());
    }

    #[test]
    fn test_parse_rejects_inner_separators() {
        for text in ["1_000", "10 20", "1000 1020", "8\t12"] {
            assert!(
                matches!(ExtendedFloat::parse_sample(text), Err(SampleFault::Invalid(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_overflow_saturates_like_x87() {
        let big = extended("1e3000");
        let square = big.clone().mul(&big);
        assert!(!square.is_finite());
        let negative = extended("-1e3000").mul(&big);
        assert!(!negative.is_finite());
        assert!(negative.as_float().is_sign_negative());
        // inside the range nothing changes
        assert!(extended("1e2000").mul(&extended("1e2000")).is_finite());

        assert!(!ExtendedFloat::ten_to_the(5000).is_finite());
        let value = extended("812.34187");
        assert_eq!(value.clone().round_to_places(5000), value);
    }

    #[test]
    fn test_arithmetic_keeps_precision() {
        let third = ExtendedFloat::from_count(1).div(&ExtendedFloat::from_count(3));
        assert_eq!(third.as_float().prec(), PRECISION);
        let root = ExtendedFloat::from_count(1100).sqrt();
        assert_eq!(root.as_float().prec(), PRECISION);
        assert_eq!(root.to_fixed(12), "33.166247903554");
    }

    #[test]
    fn test_round_to_places() {
        assert_eq!(extended("2.5").round_to_places(0), extended("3"));
        assert_eq!(extended("-2.5").round_to_places(0), extended("-3"));
        let once = extended("812.34187").round_to_places(3);
        assert_eq!(once.to_fixed(3), "812.342");
        assert_eq!(once.clone().round_to_places(3), once);
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(extended("1.5").to_fixed(3), "1.500");
        assert_eq!(extended("-0.25").to_fixed(2), "-0.25");
        assert_eq!(extended("0.001").to_fixed(5), "0.00100");
        assert_eq!(ExtendedFloat::zero().to_fixed(2), "0.00");
        assert_eq!(extended("2.4").to_fixed(0), "2");

        let third = ExtendedFloat::from_count(1).div(&ExtendedFloat::from_count(3));
        let text = third.to_fixed(80);
        assert_eq!(text.len(), 82);
        assert!(text.starts_with("0.333333333333333333"));
    }
}
