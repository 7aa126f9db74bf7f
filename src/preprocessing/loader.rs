//! Loads RR interval samples from a [`SampleSource`] into a chosen precision.

use super::rounding::RoundingPolicy;
use super::source::SampleSource;
use crate::error::{RmssdError, RmssdResult, SampleFault};
use crate::precision::Precision;
use log::{debug, trace};
use nalgebra::DVector;
use std::io::BufRead;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Options for line handling that are independent of the precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Skip empty and whitespace-only lines instead of rejecting them.
    pub skip_blank_lines: bool,
}

/// Ordered RR interval samples of one precision, in input line order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSequence<T: Precision> {
    values: DVector<T>,
}

impl<T: Precision> SampleSequence<T> {
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            values: DVector::from_vec(values),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        self.values.as_slice()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

/// Opens `source` once and parses every line as a sample of type `T`.
///
/// # Errors
///
/// - [`RmssdError::SourceUnavailable`] if the source cannot be opened or read.
/// - [`RmssdError::MalformedSample`] for the first line that is not valid
///   UTF-8 or not a finite decimal number in range for `T`.
pub fn load_samples<T: Precision>(
    source: &dyn SampleSource,
    rounding: RoundingPolicy,
    options: &LoadOptions,
) -> RmssdResult<SampleSequence<T>> {
    let origin = source.name();
    let reader = source
        .open()
        .map_err(|source| RmssdError::SourceUnavailable {
            origin: origin.clone(),
            source,
        })?;
    read_samples(reader, &origin, rounding, options)
}

/// Parses samples from an already opened reader.
///
/// `origin` is only used to label error locations.
pub fn read_samples<T: Precision, R: BufRead>(
    reader: R,
    origin: &str,
    rounding: RoundingPolicy,
    options: &LoadOptions,
) -> RmssdResult<SampleSequence<T>> {
    let mut values = Vec::new();
    for (index, bytes) in reader.split(b'\n').enumerate() {
        let mut bytes = bytes.map_err(|source| RmssdError::SourceUnavailable {
            origin: origin.to_owned(),
            source,
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let location = || format!("{}:{}", origin, index + 1);
        let line = String::from_utf8(bytes).map_err(|e| RmssdError::MalformedSample {
            location: location(),
            content: String::from_utf8_lossy(e.as_bytes()).into_owned(),
            fault: SampleFault::Invalid(e.utf8_error().to_string()),
        })?;

        let mut text = line.trim();
        if index == 0 {
            text = text.trim_start_matches(BYTE_ORDER_MARK).trim_start();
        }

        if text.is_empty() && options.skip_blank_lines {
            trace!("{}: skipping blank line", location());
            continue;
        }

        let value = T::parse_sample(text).map_err(|fault| RmssdError::MalformedSample {
            location: location(),
            content: line.clone(),
            fault,
        })?;
        values.push(rounding.apply(value));
    }

    debug!(
        "loaded {} samples from {} as {} ({})",
        values.len(),
        origin,
        T::REPRESENTATION,
        rounding
    );
    Ok(SampleSequence::from_vec(values))
}
