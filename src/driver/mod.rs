//! Evaluates a [`RunPlan`] against one sample source and reports each outcome.
//!
//! Combinations run one after another in plan order. Each one loads the
//! source afresh and its result is written before the next one starts, so a
//! failing combination is reported and skipped without affecting the rest.

pub mod plan;

pub use plan::{Combination, RunPlan};

use crate::analysis::time::rmssd_from_source;
use crate::error::RmssdResult;
use crate::precision::{ExtendedFloat, Precision, Representation};
use crate::preprocessing::loader::LoadOptions;
use crate::preprocessing::source::SampleSource;
use log::{debug, warn};
use std::io::{self, Write};

/// Fractional digits printed for every result.
pub const REPORT_DIGITS: usize = 80;

/// An RMSSD result tagged with the precision it was computed in.
#[derive(Debug, Clone, PartialEq)]
pub enum RmssdValue {
    Narrow(f32),
    Standard(f64),
    Extended(ExtendedFloat),
}

impl RmssdValue {
    pub fn representation(&self) -> Representation {
        match self {
            RmssdValue::Narrow(_) => Representation::Narrow,
            RmssdValue::Standard(_) => Representation::Standard,
            RmssdValue::Extended(_) => Representation::Extended,
        }
    }

    /// Fixed-point text with `places` fractional digits, exact for the
    /// stored value.
    pub fn to_fixed(&self, places: usize) -> String {
        match self {
            RmssdValue::Narrow(value) => value.to_fixed(places),
            RmssdValue::Standard(value) => value.to_fixed(places),
            RmssdValue::Extended(value) => value.to_fixed(places),
        }
    }

    /// Nearest `f64`, for comparing widths.
    pub fn to_f64(&self) -> f64 {
        match self {
            RmssdValue::Narrow(value) => f64::from(*value),
            RmssdValue::Standard(value) => *value,
            RmssdValue::Extended(value) => value.to_f64(),
        }
    }
}

/// Counts of the combinations evaluated by [`run_plan`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Loads `source` in the combination's precision and calculates RMSSD.
pub fn evaluate(
    source: &dyn SampleSource,
    combination: &Combination,
    options: &LoadOptions,
) -> RmssdResult<RmssdValue> {
    let rounding = combination.rounding;
    match combination.representation {
        Representation::Narrow => {
            rmssd_from_source::<f32>(source, rounding, options).map(RmssdValue::Narrow)
        }
        Representation::Standard => {
            rmssd_from_source::<f64>(source, rounding, options).map(RmssdValue::Standard)
        }
        Representation::Extended => {
            rmssd_from_source::<ExtendedFloat>(source, rounding, options).map(RmssdValue::Extended)
        }
    }
}

/// Evaluates every combination of `plan` in order.
///
/// Results go to `out` as a label line, the value with [`REPORT_DIGITS`]
/// fractional digits and a blank line. Failures go to `err` as
/// `ERROR: <label>: <message>` and processing continues.
///
/// # Errors
///
/// Only failures to write to `out` or `err` are returned.
pub fn run_plan<W: Write, E: Write>(
    source: &dyn SampleSource,
    plan: &RunPlan,
    out: &mut W,
    err: &mut E,
) -> io::Result<RunSummary> {
    let options = plan.load_options();
    let mut summary = RunSummary::default();
    for combination in &plan.combinations {
        debug!("evaluating {} on {}", combination, source.name());
        match evaluate(source, combination, &options) {
            Ok(value) => {
                writeln!(out, "{combination}")?;
                writeln!(out, "{}", value.to_fixed(REPORT_DIGITS))?;
                writeln!(out)?;
                out.flush()?;
                summary.succeeded += 1;
            }
            Err(error) => {
                warn!("{} failed: {}", combination, error);
                writeln!(err, "ERROR: {combination}: {error}")?;
                err.flush()?;
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
