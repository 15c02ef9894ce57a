//! Non-finite markers carried by the clock-second pair of a duration.

use std::fmt;

/// An opaque non-finite marker. Durations produced against infinite points
/// in time carry one of these instead of a meaningful second count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonFinite {
    PositiveInfinity,
    NegativeInfinity,
    NotANumber,
}

impl NonFinite {
    /// The marker after negating the quantity it stands for.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::PositiveInfinity => Self::NegativeInfinity,
            Self::NegativeInfinity => Self::PositiveInfinity,
            Self::NotANumber => Self::NotANumber,
        }
    }

    /// Marker resulting from adding two (possibly finite) quantities.
    ///
    /// Opposite infinities cancel into `NotANumber`, which absorbs everything.
    #[must_use]
    pub fn sum(lhs: Option<Self>, rhs: Option<Self>) -> Option<Self> {
        match (lhs, rhs) {
            (None, other) | (other, None) => other,
            (Some(Self::NotANumber), _) | (_, Some(Self::NotANumber)) => Some(Self::NotANumber),
            (Some(a), Some(b)) if a == b => Some(a),
            (Some(_), Some(_)) => Some(Self::NotANumber),
        }
    }

    /// Marker resulting from multiplying by an integer scalar.
    #[must_use]
    pub const fn scale(self, scalar: i64) -> Self {
        match self {
            Self::NotANumber => Self::NotANumber,
            _ if scalar == 0 => Self::NotANumber,
            _ if scalar < 0 => self.negate(),
            _ => self,
        }
    }

    /// Whether the marker stands for a strictly positive quantity.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::PositiveInfinity)
    }

    /// Whether the marker stands for a strictly negative quantity.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::NegativeInfinity)
    }
}

impl fmt::Display for NonFinite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PositiveInfinity => "inf",
            Self::NegativeInfinity => "-inf",
            Self::NotANumber => "nan",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::NonFinite::{NegativeInfinity, NotANumber, PositiveInfinity};

    #[test]
    fn sum_follows_float_rules() {
        assert_eq!(NonFinite::sum(None, None), None);
        assert_eq!(
            NonFinite::sum(Some(PositiveInfinity), None),
            Some(PositiveInfinity)
        );
        assert_eq!(
            NonFinite::sum(None, Some(NegativeInfinity)),
            Some(NegativeInfinity)
        );
        assert_eq!(
            NonFinite::sum(Some(PositiveInfinity), Some(PositiveInfinity)),
            Some(PositiveInfinity)
        );
        assert_eq!(
            NonFinite::sum(Some(PositiveInfinity), Some(NegativeInfinity)),
            Some(NotANumber)
        );
        assert_eq!(
            NonFinite::sum(Some(NotANumber), Some(PositiveInfinity)),
            Some(NotANumber)
        );
    }

    #[test]
    fn scale_by_zero_is_nan() {
        assert_eq!(PositiveInfinity.scale(0), NotANumber);
        assert_eq!(PositiveInfinity.scale(-2), NegativeInfinity);
        assert_eq!(NegativeInfinity.scale(5), NegativeInfinity);
        assert_eq!(NotANumber.scale(-1), NotANumber);
    }
}
