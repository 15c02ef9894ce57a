//! Unit enum as the single source of truth for unit names.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownUnit;

/// Human units a duration can be decomposed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Nanoseconds,
}

impl Unit {
    /// Every unit, coarsest first.
    pub const ALL: [Self; 8] = [
        Self::Years,
        Self::Months,
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
        Self::Nanoseconds,
    ];

    /// Canonical (plural, lowercase) name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Months => "months",
            Self::Weeks => "weeks",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Nanoseconds => "nanoseconds",
        }
    }

    /// Whether the unit is subject to calendar ambiguity.
    #[must_use]
    pub const fn is_calendar(&self) -> bool {
        matches!(self, Self::Years | Self::Months | Self::Weeks | Self::Days)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "years" | "year" => Ok(Self::Years),
            "months" | "month" => Ok(Self::Months),
            "weeks" | "week" => Ok(Self::Weeks),
            "days" | "day" => Ok(Self::Days),
            "hours" | "hour" => Ok(Self::Hours),
            "minutes" | "minute" => Ok(Self::Minutes),
            "seconds" | "second" => Ok(Self::Seconds),
            "nanoseconds" | "nanosecond" => Ok(Self::Nanoseconds),
            _ => Err(UnknownUnit(s.to_string())),
        }
    }
}
