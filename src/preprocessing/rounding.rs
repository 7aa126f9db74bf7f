//! Decimal rounding applied to samples right after parsing.

use crate::precision::Precision;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places every sample is rounded to, or none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundingPolicy(Option<u32>);

impl RoundingPolicy {
    pub const NONE: RoundingPolicy = RoundingPolicy(None);

    pub fn places(places: u32) -> Self {
        RoundingPolicy(Some(places))
    }

    pub fn decimal_places(&self) -> Option<u32> {
        self.0
    }

    /// Rounds `value` in its own width, or returns it untouched.
    pub fn apply<T: Precision>(&self, value: T) -> T {
        match self.0 {
            Some(places) => value.round_to_places(places),
            None => value,
        }
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(1) => write!(f, "rounded to 1 decimal place"),
            Some(places) => write!(f, "rounded to {places} decimal places"),
            None => write!(f, "not rounded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::ExtendedFloat;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_none_is_identity() {
        assert_eq!(RoundingPolicy::NONE.apply(812.34187f64), 812.34187);
        assert_eq!(RoundingPolicy::default(), RoundingPolicy::NONE);
    }

    #[test]
    fn test_places() {
        let policy = RoundingPolicy::places(3);
        assert_eq!(policy.apply(812.34187f64), 812.342);
        assert_eq!(policy.apply(-0.0005f64), -0.001);
        assert_eq!(policy.decimal_places(), Some(3));
    }

    #[test]
    fn test_rounding_is_idempotent() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for places in 0..4 {
            let policy = RoundingPolicy::places(places);
            for _ in 0..200 {
                let value: f64 = rng.gen_range(300.0..2000.0);
                let once = policy.apply(value);
                assert_eq!(policy.apply(once), once, "f64 {value} at {places}");

                let narrow = value as f32;
                let once = policy.apply(narrow);
                assert_eq!(policy.apply(once), once, "f32 {narrow} at {places}");

                let text = format!("{value}");
                let wide = ExtendedFloat::parse_sample(&text).unwrap();
                let once = policy.apply(wide);
                assert_eq!(policy.apply(once.clone()), once, "extended {text} at {places}");
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(RoundingPolicy::places(3).to_string(), "rounded to 3 decimal places");
        assert_eq!(RoundingPolicy::places(1).to_string(), "rounded to 1 decimal place");
        assert_eq!(RoundingPolicy::NONE.to_string(), "not rounded");
    }
}
