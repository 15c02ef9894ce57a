//! Error types for duration arithmetic.

use thiserror::Error;

/// Operations that are ill-defined for durations and always refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidOperation {
    /// Ordering two durations needs an anchor point, since "1 month" and
    /// "30 days" compare differently depending on the month.
    #[error(
        "durations cannot be ordered without an anchor point; use `compare` with an explicit anchor"
    )]
    ComparisonWithoutAnchor,

    /// A point in time cannot be subtracted from a duration.
    #[error("cannot subtract a point in time from a duration")]
    SubtractPointFromDuration,
}

/// Errors produced by the duration core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// A forbidden operation was attempted.
    #[error(transparent)]
    InvalidOperation(#[from] InvalidOperation),

    /// An end-of-month mode name was not one of `wrap`, `limit`, `preserve`.
    #[error("invalid end-of-month mode: {value} (expected wrap, limit or preserve)")]
    InvalidEndOfMonthMode { value: String },

    /// Applying a duration left the range a point type can represent.
    #[error("{what} is out of range")]
    OutOfRange { what: &'static str },
}

/// Error type for unknown unit names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown duration unit: {0}")]
pub struct UnknownUnit(pub(crate) String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_operation() {
        let err = DurationError::from(InvalidOperation::ComparisonWithoutAnchor);
        assert!(err.to_string().contains("anchor point"));

        let err = DurationError::from(InvalidOperation::SubtractPointFromDuration);
        assert_eq!(
            err.to_string(),
            "cannot subtract a point in time from a duration"
        );
    }

    #[test]
    fn invalid_mode_message() {
        let err = DurationError::InvalidEndOfMonthMode {
            value: "clamp".to_string(),
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"invalid end-of-month mode: clamp (expected wrap, limit or preserve)"
        );
    }
}
