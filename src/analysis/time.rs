//! This module provides functions to calculate time-domain measures of heart rate variability (HRV).
//!
//! Currently the following metric can be calculated:
//! - Root Mean Square of Successive Differences (RMSSD)
//!
//! All arithmetic runs in the sample type `T`, including the accumulator of
//! the sum and the final square root, so the result reflects the rounding
//! behaviour of that precision only.

use crate::error::{RmssdError, RmssdResult};
use crate::precision::Precision;
use crate::preprocessing::loader::{load_samples, LoadOptions, SampleSequence};
use crate::preprocessing::rounding::RoundingPolicy;
use crate::preprocessing::source::SampleSource;
use log::debug;
use nalgebra::DVector;

/// Returns `data[i] - data[i - 1]` for every `i` in `1..data.len()`.
pub fn successive_differences<T: Precision>(data: &[T]) -> DVector<T> {
    DVector::from_fn(data.len().saturating_sub(1), |i, _| {
        data[i + 1].clone().sub(&data[i])
    })
}

/// Calculates the Root Mean Square of Successive Differences (RMSSD) from a slice of RR intervals.
///
/// RMSSD is a time-domain measure of heart rate variability, which is the square root of the mean
/// of the squares of the successive differences between adjacent RR intervals.
///
/// The differences are squared in place, summed strictly left to right starting from zero,
/// divided by their count and passed to the square root of `T`.
///
/// # Arguments
///
/// * `data` - A slice of RR intervals in the precision the calculation should use.
///
/// # Returns
///
/// * `RmssdResult<T>` - The RMSSD value, in the same precision as the input.
///
/// # Errors
///
/// Returns [`RmssdError::InsufficientSamples`] if the input slice contains fewer than two elements.
pub fn calc_rmssd<T: Precision>(data: &[T]) -> RmssdResult<T> {
    if data.len() < 2 {
        return Err(RmssdError::InsufficientSamples { found: data.len() });
    }
    debug!("{}-bit float", T::BITS);

    let mut diffs = successive_differences(data);
    diffs.apply(|diff| {
        let squared = diff.clone().mul(diff);
        *diff = squared;
    });

    let sum = diffs.iter().fold(T::zero(), |acc, squared| acc.add(squared));
    let mean = sum.div(&T::from_count(diffs.len()));
    Ok(mean.sqrt())
}

/// Calculates RMSSD over a loaded [`SampleSequence`].
pub fn calc_rmssd_sequence<T: Precision>(samples: &SampleSequence<T>) -> RmssdResult<T> {
    calc_rmssd(samples.as_slice())
}

/// Loads `source` as `T`, applies `rounding` and calculates RMSSD.
pub fn rmssd_from_source<T: Precision>(
    source: &dyn SampleSource,
    rounding: RoundingPolicy,
    options: &LoadOptions,
) -> RmssdResult<T> {
    let samples = load_samples::<T>(source, rounding, options)?;
    calc_rmssd_sequence(&samples)
}
