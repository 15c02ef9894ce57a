//! Arithmetic on durations.
//!
//! The `&mut self` methods mutate in place and return `&mut Self` so calls
//! can be chained. The value-returning forms (`plus`, `minus`, `scaled_by`
//! and the operator traits) leave their operands untouched.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{Duration, DurationParams};
use crate::end_of_month::EndOfMonthMode;
use crate::error::{DurationError, InvalidOperation};
use crate::non_finite::NonFinite;
use crate::point::TimePoint;

/// Right-hand operand of [`Duration::plus`] and [`Duration::minus`]: either
/// another duration or a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand<P> {
    Duration(Duration),
    Point(P),
}

impl<P> From<Duration> for Operand<P> {
    fn from(duration: Duration) -> Self {
        Self::Duration(duration)
    }
}

impl Duration {
    /// Every stored unit negated. The end-of-month mode is resolved as for a
    /// freshly built duration: the default for the negated month count.
    pub fn inverse(&self) -> Self {
        self.negated(None)
    }

    /// Every stored unit negated, with an explicit end-of-month mode.
    pub fn inverse_with_mode(&self, end_of_month: EndOfMonthMode) -> Self {
        self.negated(Some(end_of_month))
    }

    fn negated(&self, end_of_month: Option<EndOfMonthMode>) -> Self {
        // Stored units are already normalized and stay so under negation.
        let months = -self.months;
        Self {
            months,
            days: -self.days,
            minutes: -self.minutes,
            seconds: -self.seconds,
            nanoseconds: -self.nanoseconds,
            non_finite: self.non_finite.map(NonFinite::negate),
            end_of_month: end_of_month.unwrap_or_else(|| EndOfMonthMode::default_for(months)),
        }
    }

    /// Adds `other`'s stored units to this duration's. The end-of-month mode
    /// of `self` is kept.
    pub fn add_duration(&mut self, other: &Self) -> &mut Self {
        self.months += other.months;
        self.days += other.days;
        self.minutes += other.minutes;
        self.non_finite = NonFinite::sum(self.non_finite, other.non_finite);
        if self.absorb_into_non_finite() {
            return self;
        }

        self.seconds += other.seconds;
        self.nanoseconds += other.nanoseconds;
        if self.nanoseconds != 0 {
            self.normalize_nanoseconds();
        }
        self
    }

    /// Adds a duration built from `params`.
    pub fn add_units(&mut self, params: DurationParams) -> &mut Self {
        self.add_duration(&Self::new(params))
    }

    pub fn subtract_duration(&mut self, other: &Self) -> &mut Self {
        self.add_duration(&other.inverse())
    }

    /// Subtracts a duration built from `params`.
    pub fn subtract_units(&mut self, params: DurationParams) -> &mut Self {
        self.subtract_duration(&Self::new(params))
    }

    /// Multiplies every stored unit by `scalar`.
    pub fn multiply(&mut self, scalar: i64) -> &mut Self {
        self.months *= scalar;
        self.days *= scalar;
        self.minutes *= scalar;
        self.non_finite = self.non_finite.map(|kind| kind.scale(scalar));
        if self.absorb_into_non_finite() {
            return self;
        }

        self.seconds *= scalar;
        self.nanoseconds *= scalar;
        if self.nanoseconds != 0 {
            self.normalize_nanoseconds();
        }
        self
    }

    /// Sum with another duration, or the point in time this duration lands on.
    pub fn plus<P: TimePoint>(&self, rhs: Operand<P>) -> Result<Operand<P>, DurationError> {
        match rhs {
            Operand::Duration(other) => {
                let mut sum = self.clone();
                sum.add_duration(&other);
                Ok(Operand::Duration(sum))
            }
            Operand::Point(point) => point.add_duration(self).map(Operand::Point),
        }
    }

    /// Difference with another duration. Subtracting a point in time from a
    /// duration is refused.
    pub fn minus<P>(&self, rhs: Operand<P>) -> Result<Self, DurationError> {
        match rhs {
            Operand::Duration(other) => {
                let mut difference = self.clone();
                difference.subtract_duration(&other);
                Ok(difference)
            }
            Operand::Point(_) => Err(InvalidOperation::SubtractPointFromDuration.into()),
        }
    }

    /// A new duration with every unit multiplied by `scalar`.
    pub fn scaled_by(&self, scalar: i64) -> Self {
        let mut scaled = self.clone();
        scaled.multiply(scalar);
        scaled
    }

    /// Direct ordering between durations is ill-defined and always refused.
    ///
    /// Use [`Duration::compare`] with an anchor point instead.
    pub fn try_cmp(&self, _other: &Self) -> Result<Ordering, DurationError> {
        Err(InvalidOperation::ComparisonWithoutAnchor.into())
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverse()
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.add_duration(&rhs);
        self
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.add_duration(&rhs);
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self.subtract_duration(&rhs);
        self
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract_duration(&rhs);
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(mut self, rhs: i64) -> Self {
        self.multiply(rhs);
        self
    }
}

impl Mul<Duration> for i64 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Duration {
        rhs * self
    }
}

impl MulAssign<i64> for Duration {
    fn mul_assign(&mut self, rhs: i64) {
        self.multiply(rhs);
    }
}
