use super::{Precision, Representation};
use crate::error::SampleFault;

macro_rules! impl_native_precision {
    ($ty:ident, $bits:expr, $significand:expr, $repr:expr) => {
        impl Precision for $ty {
            const BITS: u32 = $bits;
            const SIGNIFICAND_BITS: u32 = $significand;
            const REPRESENTATION: Representation = $repr;

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn from_count(count: usize) -> Self {
                count as $ty
            }

            #[inline]
            fn add(self, rhs: &Self) -> Self {
                self + *rhs
            }

            #[inline]
            fn sub(self, rhs: &Self) -> Self {
                self - *rhs
            }

            #[inline]
            fn mul(self, rhs: &Self) -> Self {
                self * *rhs
            }

            #[inline]
            fn div(self, rhs: &Self) -> Self {
                self / *rhs
            }

            #[inline]
            fn sqrt(self) -> Self {
                $ty::sqrt(self)
            }

            #[inline]
            fn round_half_away(self) -> Self {
                $ty::round(self)
            }

            fn ten_to_the(exponent: u32) -> Self {
                let exponent = i32::try_from(exponent).unwrap_or(i32::MAX);
                (10.0 as $ty).powi(exponent)
            }

            #[inline]
            fn is_finite(&self) -> bool {
                $ty::is_finite(*self)
            }

            fn parse_sample(text: &str) -> Result<Self, SampleFault> {
                // str::parse rounds the decimal literal directly to this width
                let value = text
                    .parse::<$ty>()
                    .map_err(|e| SampleFault::Invalid(e.to_string()))?;
                if value.is_nan() {
                    Err(SampleFault::Invalid("NaN is not a sample".into()))
                } else if value.is_infinite() {
                    Err(SampleFault::OutOfRange($bits))
                } else {
                    Ok(value)
                }
            }

            fn to_fixed(&self, places: usize) -> String {
                format!("{:.*}", places, self)
            }
        }
    };
}

impl_native_precision!(f32, 32, 24, Representation::Narrow);
impl_native_precision!(f64, 64, 53, Representation::Standard);
