//! Points in time that durations are applied to.
//!
//! Calendar units have no fixed length, so the only sanctioned way to order
//! two durations is to apply both to the same anchor point and compare the
//! results. The anchor is always explicit; there is no ambient clock.
//!
//! # Applying a duration
//!
//! The chrono adapters apply the stored units in this order:
//!
//! 1. `days`
//! 2. `months`, resolving missing days-of-month with the duration's
//!    [`EndOfMonthMode`]
//! 3. `minutes`, `seconds`, `nanoseconds` as fixed-length time

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeDelta, Utc};

use crate::duration::Duration;
use crate::end_of_month::EndOfMonthMode;
use crate::error::DurationError;

/// A point in time a [`Duration`] can be applied to.
///
/// This trait lets comparison work with different point representations
/// (chrono types, or test fixtures).
pub trait TimePoint: Ord + Clone {
    /// Returns the point reached by applying `duration` to `self`.
    fn add_duration(&self, duration: &Duration) -> Result<Self, DurationError>;
}

impl Duration {
    /// Orders two durations by applying each to `anchor`.
    ///
    /// "1 month" and "30 days" compare differently depending on the month the
    /// anchor falls in.
    pub fn compare<P: TimePoint>(
        lhs: &Self,
        rhs: &Self,
        anchor: &P,
    ) -> Result<Ordering, DurationError> {
        let left = anchor.add_duration(lhs)?;
        let right = anchor.add_duration(rhs)?;
        let ordering = left.cmp(&right);
        tracing::debug!(%lhs, %rhs, ?ordering, "compared durations at anchor");
        Ok(ordering)
    }
}

const fn out_of_range(what: &'static str) -> DurationError {
    DurationError::OutOfRange { what }
}

/// Moves `date` by `months`, clamping to the last day of a shorter month.
fn shift_months(date: NaiveDate, months: i64) -> Result<NaiveDate, DurationError> {
    let count = u32::try_from(months.unsigned_abs()).map_err(|_| out_of_range("months"))?;
    let count = Months::new(count);
    let shifted = if months < 0 {
        date.checked_sub_months(count)
    } else {
        date.checked_add_months(count)
    };
    shifted.ok_or(out_of_range("date"))
}

/// Moves `date` by `months` calendar months.
fn add_months(
    date: NaiveDate,
    months: i64,
    mode: EndOfMonthMode,
) -> Result<NaiveDate, DurationError> {
    if months == 0 {
        return Ok(date);
    }

    match mode {
        EndOfMonthMode::Wrap => {
            // Day 1 of the target month, then let extra days spill over.
            let first = shift_months(date.with_day(1).ok_or(out_of_range("date"))?, months)?;
            first
                .checked_add_days(Days::new(u64::from(date.day0())))
                .ok_or(out_of_range("date"))
        }
        EndOfMonthMode::Limit => shift_months(date, months),
        EndOfMonthMode::Preserve => {
            let shifted = shift_months(date, months)?;
            if date.day() == u32::from(date.num_days_in_month()) {
                shifted
                    .with_day(u32::from(shifted.num_days_in_month()))
                    .ok_or(out_of_range("date"))
            } else {
                Ok(shifted)
            }
        }
    }
}

/// Fixed-length clock part of a duration.
fn clock_delta(duration: &Duration) -> Result<TimeDelta, DurationError> {
    let minutes = TimeDelta::try_minutes(duration.delta_minutes()).ok_or(out_of_range("minutes"))?;
    let seconds = TimeDelta::try_seconds(duration.delta_seconds()).ok_or(out_of_range("seconds"))?;
    minutes
        .checked_add(&seconds)
        .and_then(|delta| delta.checked_add(&TimeDelta::nanoseconds(duration.delta_nanoseconds())))
        .ok_or(out_of_range("clock units"))
}

impl TimePoint for NaiveDateTime {
    fn add_duration(&self, duration: &Duration) -> Result<Self, DurationError> {
        if !duration.is_finite() {
            return Err(out_of_range("non-finite duration"));
        }

        let days = TimeDelta::try_days(duration.delta_days()).ok_or(out_of_range("days"))?;
        let date = self
            .date()
            .checked_add_signed(days)
            .ok_or(out_of_range("date"))?;
        let date = add_months(
            date,
            duration.delta_months(),
            duration.end_of_month_mode(),
        )?;

        date.and_time(self.time())
            .checked_add_signed(clock_delta(duration)?)
            .ok_or(out_of_range("datetime"))
    }
}

impl TimePoint for DateTime<Utc> {
    fn add_duration(&self, duration: &Duration) -> Result<Self, DurationError> {
        self.naive_utc()
            .add_duration(duration)
            .map(|naive| naive.and_utc())
    }
}
