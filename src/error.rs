//! Error types shared by the loader, the calculator and the driver.

use std::io;

/// Why a single line could not be turned into a sample.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleFault {
    /// The text is not a decimal literal, or it denotes NaN.
    #[error("not a valid decimal number ({0})")]
    Invalid(String),
    /// The literal parses but exceeds the range of the target width.
    #[error("value out of range for {0}-bit float")]
    OutOfRange(u32),
}

/// Failure of one RMSSD calculation.
#[derive(thiserror::Error, Debug)]
pub enum RmssdError {
    #[error("could not read sample source {origin}: {source}")]
    SourceUnavailable {
        origin: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed sample at {location} ({content:?}): {fault}")]
    MalformedSample {
        location: String,
        content: String,
        #[source]
        fault: SampleFault,
    },
    #[error("too few RR intervals to calculate RMSSD (found {found}, need at least 2)")]
    InsufficientSamples { found: usize },
}

/// Discriminant of [`RmssdError`] without its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    SourceUnavailable,
    MalformedSample,
    InsufficientSamples,
}

impl RmssdError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RmssdError::SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
            RmssdError::MalformedSample { .. } => ErrorKind::MalformedSample,
            RmssdError::InsufficientSamples { .. } => ErrorKind::InsufficientSamples,
        }
    }
}

pub type RmssdResult<T> = Result<T, RmssdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let err = RmssdError::InsufficientSamples { found: 1 };
        assert_eq!(err.kind(), ErrorKind::InsufficientSamples);

        let err = RmssdError::SourceUnavailable {
            origin: "missing.txt".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
    }

    #[test]
    fn test_malformed_message_names_line() {
        let err = RmssdError::MalformedSample {
            location: "rr.txt:3".into(),
            content: "abc".into(),
            fault: SampleFault::Invalid("invalid float literal".into()),
        };
        let message = err.to_string();
        assert!(message.contains("rr.txt:3"), "got: {message}");
        assert!(message.contains("\"abc\""), "got: {message}");
        assert_eq!(err.kind(), ErrorKind::MalformedSample);
    }
}
