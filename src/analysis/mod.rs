/// This module contains the heart rate variability (HRV) statistics.
///
/// The available submodules are:
///
/// - `time`: Provides time-domain analysis methods for HRV, generic over the floating-point precision.
pub mod time;
