//! End-of-month resolution policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DurationError;

/// How a point-in-time resolves a month offset that lands on a day the
/// target month does not have (e.g. adding one month to January 31st).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfMonthMode {
    /// Overflowing days spill into the following month (Jan 31 + 1 month = Mar 3).
    Wrap,
    /// Clamp to the last day of the target month (Jan 31 + 1 month = Feb 28).
    Limit,
    /// Clamp like `Limit`, and keep a last-day-of-month start on the last day.
    Preserve,
}

impl EndOfMonthMode {
    /// Mode used when none is given: `Preserve` for negative month offsets,
    /// `Wrap` otherwise.
    #[must_use]
    pub const fn default_for(months: i64) -> Self {
        if months < 0 { Self::Preserve } else { Self::Wrap }
    }

    /// String representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wrap => "wrap",
            Self::Limit => "limit",
            Self::Preserve => "preserve",
        }
    }
}

impl fmt::Display for EndOfMonthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EndOfMonthMode {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wrap" => Ok(Self::Wrap),
            "limit" => Ok(Self::Limit),
            "preserve" => Ok(Self::Preserve),
            _ => Err(DurationError::InvalidEndOfMonthMode {
                value: s.to_string(),
            }),
        }
    }
}
