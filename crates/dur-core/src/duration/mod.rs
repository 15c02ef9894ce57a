//! The duration value type.
//!
//! A [`Duration`] stores five signed quantities:
//!
//! - `months` (years are folded in as 12 months)
//! - `days` (weeks are folded in as 7 days)
//! - `minutes` (hours are folded in as 60 minutes)
//! - `seconds`
//! - `nanoseconds`, kept below one second in magnitude and co-signed with `seconds`
//!
//! Calendar units (months, days) have no fixed length, so a duration only
//! has a magnitude relative to a concrete point in time. See
//! [`Duration::compare`].

mod arithmetic;

use std::fmt;

use crate::end_of_month::EndOfMonthMode;
use crate::error::DurationError;
use crate::non_finite::NonFinite;
use crate::unit::Unit;

pub use arithmetic::Operand;

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

const MONTHS_PER_YEAR: i64 = 12;
const DAYS_PER_WEEK: i64 = 7;
const MINUTES_PER_HOUR: i64 = 60;

/// Named quantities accepted by [`Duration::new`].
///
/// Every quantity defaults to zero. No range checks are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationParams {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub nanoseconds: i64,
    /// Explicit end-of-month mode. When `None` the mode follows the sign of
    /// the resulting month count.
    pub end_of_month: Option<EndOfMonthMode>,
}

/// The five raw stored units of a duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Deltas {
    pub months: i64,
    pub days: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub nanoseconds: i64,
}

/// A calendar/clock offset.
///
/// Durations are not ordered: use [`Duration::compare`] with an anchor point.
/// Equality is structural over the stored units and the end-of-month mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Duration {
    months: i64,
    days: i64,
    minutes: i64,
    seconds: i64,
    nanoseconds: i64,
    /// Set when the clock-second pair holds a non-finite marker.
    non_finite: Option<NonFinite>,
    end_of_month: EndOfMonthMode,
}

impl Default for Duration {
    fn default() -> Self {
        Self::new(DurationParams::default())
    }
}

impl From<DurationParams> for Duration {
    fn from(params: DurationParams) -> Self {
        Self::new(params)
    }
}

/// Carries whole seconds out of `nanoseconds`, returning the combined second
/// count and a remainder below one second, co-signed with the total.
fn carry_nanoseconds(seconds: i64, nanoseconds: i64) -> (i128, i64) {
    let nanos_per_second = i128::from(NANOS_PER_SECOND);
    let combined = i128::from(seconds) * nanos_per_second + i128::from(nanoseconds);

    // `/` truncates toward zero; the remainder starts out non-negative.
    let mut remainder = nanoseconds.rem_euclid(NANOS_PER_SECOND);
    if combined < 0 && remainder != 0 {
        remainder -= NANOS_PER_SECOND;
    }
    (combined / nanos_per_second, remainder)
}

impl Duration {
    /// Builds a duration, folding years into months, weeks into days and
    /// hours into minutes. Nanoseconds are carried into seconds.
    ///
    /// Folding uses plain `i64` arithmetic; see [`Duration::try_new`] for
    /// untrusted input.
    pub fn new(params: DurationParams) -> Self {
        let months = params.years * MONTHS_PER_YEAR + params.months;
        let end_of_month = params
            .end_of_month
            .unwrap_or_else(|| EndOfMonthMode::default_for(months));

        let mut duration = Self {
            months,
            days: params.weeks * DAYS_PER_WEEK + params.days,
            minutes: params.hours * MINUTES_PER_HOUR + params.minutes,
            seconds: params.seconds,
            nanoseconds: params.nanoseconds,
            non_finite: None,
            end_of_month,
        };
        if duration.nanoseconds != 0 {
            duration.normalize_nanoseconds();
        }
        duration
    }

    /// Like [`Duration::new`], but reports a stored unit that would not fit
    /// in an `i64` instead of overflowing.
    pub fn try_new(params: DurationParams) -> Result<Self, DurationError> {
        let fold = |coarse: i64, factor: i64, fine: i64, what: &'static str| {
            coarse
                .checked_mul(factor)
                .and_then(|folded| folded.checked_add(fine))
                .ok_or(DurationError::OutOfRange { what })
        };

        let months = fold(params.years, MONTHS_PER_YEAR, params.months, "months")?;
        let days = fold(params.weeks, DAYS_PER_WEEK, params.days, "days")?;
        let minutes = fold(params.hours, MINUTES_PER_HOUR, params.minutes, "minutes")?;
        let (seconds, nanoseconds) = carry_nanoseconds(params.seconds, params.nanoseconds);
        let seconds =
            i64::try_from(seconds).map_err(|_| DurationError::OutOfRange { what: "seconds" })?;

        Ok(Self {
            months,
            days,
            minutes,
            seconds,
            nanoseconds,
            non_finite: None,
            end_of_month: params
                .end_of_month
                .unwrap_or_else(|| EndOfMonthMode::default_for(months)),
        })
    }

    /// Builds a duration whose clock-second pair is the given non-finite marker.
    pub const fn non_finite(kind: NonFinite) -> Self {
        Self {
            months: 0,
            days: 0,
            minutes: 0,
            seconds: 0,
            nanoseconds: 0,
            non_finite: Some(kind),
            end_of_month: EndOfMonthMode::Wrap,
        }
    }

    /// Keeps `|nanoseconds| < 1s` and co-signed with `seconds`, carrying the
    /// overflow into `seconds`. Non-finite pairs are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the carried second count no longer fits in an `i64`.
    fn normalize_nanoseconds(&mut self) {
        if let Some(kind) = self.non_finite {
            tracing::trace!(%kind, "skipping normalization of non-finite seconds");
            return;
        }

        let (seconds, nanoseconds) = carry_nanoseconds(self.seconds, self.nanoseconds);
        self.seconds = i64::try_from(seconds).expect("normalized seconds overflowed i64");
        self.nanoseconds = nanoseconds;
    }

    /// Replaces the clock-second pair with the marker, if one is set.
    ///
    /// The marker stands for the whole pair, so no finite seconds survive
    /// next to it.
    fn absorb_into_non_finite(&mut self) -> bool {
        if self.non_finite.is_none() {
            return false;
        }
        self.seconds = 0;
        self.nanoseconds = 0;
        true
    }

    // ========== Decomposition ==========

    /// Expresses the duration in exactly the requested units, returned in the
    /// order they were requested.
    ///
    /// Carrying always runs coarsest first, independent of the requested
    /// order. Requesting `Seconds` together with `Nanoseconds` yields
    /// disjoint values; requesting `Nanoseconds` alone re-expresses the whole
    /// second count in nanoseconds.
    ///
    /// Clock-second values of a non-finite duration read as zero; check
    /// [`Duration::non_finite_kind`] first.
    ///
    /// # Panics
    ///
    /// Panics if a requested value does not fit in an `i64`, which only
    /// happens for `Nanoseconds` without `Seconds` beyond roughly 292 years.
    /// Use [`Duration::checked_in_units`] to get an error instead.
    pub fn in_units(&self, units: &[Unit]) -> Vec<i64> {
        match self.checked_in_units(units) {
            Ok(values) => values,
            Err(err) => panic!("cannot decompose {self}: {err}"),
        }
    }

    /// [`Duration::in_units`] reporting an unrepresentable value as
    /// [`DurationError::OutOfRange`].
    pub fn checked_in_units(&self, units: &[Unit]) -> Result<Vec<i64>, DurationError> {
        let wants = |unit: Unit| units.contains(&unit);
        let mut values = [0_i64; Unit::ALL.len()];

        let mut months = self.months;
        let mut days = self.days;
        let mut minutes = self.minutes;
        let mut seconds = self.seconds;

        if wants(Unit::Years) {
            let years = months / MONTHS_PER_YEAR;
            months -= years * MONTHS_PER_YEAR;
            values[Unit::Years as usize] = years;
        }
        if wants(Unit::Months) {
            values[Unit::Months as usize] = months;
        }
        if wants(Unit::Weeks) {
            let weeks = days / DAYS_PER_WEEK;
            days -= weeks * DAYS_PER_WEEK;
            values[Unit::Weeks as usize] = weeks;
        }
        if wants(Unit::Days) {
            values[Unit::Days as usize] = days;
        }
        if wants(Unit::Hours) {
            let hours = minutes / MINUTES_PER_HOUR;
            minutes -= hours * MINUTES_PER_HOUR;
            values[Unit::Hours as usize] = hours;
        }
        if wants(Unit::Minutes) {
            values[Unit::Minutes as usize] = minutes;
        }
        if wants(Unit::Seconds) {
            values[Unit::Seconds as usize] = seconds;
            seconds = 0;
        }
        if wants(Unit::Nanoseconds) {
            let nanoseconds = i128::from(seconds) * i128::from(NANOS_PER_SECOND)
                + i128::from(self.nanoseconds);
            values[Unit::Nanoseconds as usize] = i64::try_from(nanoseconds)
                .map_err(|_| DurationError::OutOfRange {
                    what: "nanoseconds",
                })?;
        }

        Ok(units.iter().map(|unit| values[*unit as usize]).collect())
    }

    /// Signed value of a single unit, with no finer unit requested alongside.
    pub fn in_unit(&self, unit: Unit) -> i64 {
        self.in_units(&[unit])[0]
    }

    /// Absolute whole years.
    pub fn years(&self) -> i64 {
        self.in_unit(Unit::Years).abs()
    }

    /// Absolute months left after removing whole years.
    pub fn months(&self) -> i64 {
        self.in_units(&[Unit::Months, Unit::Years])[0].abs()
    }

    /// Absolute whole weeks.
    pub fn weeks(&self) -> i64 {
        self.in_unit(Unit::Weeks).abs()
    }

    /// Absolute days left after removing whole weeks.
    pub fn days(&self) -> i64 {
        self.in_units(&[Unit::Days, Unit::Weeks])[0].abs()
    }

    /// Absolute whole hours.
    pub fn hours(&self) -> i64 {
        self.in_unit(Unit::Hours).abs()
    }

    /// Absolute minutes left after removing whole hours.
    pub fn minutes(&self) -> i64 {
        self.in_units(&[Unit::Minutes, Unit::Hours])[0].abs()
    }

    /// Absolute whole seconds.
    pub fn seconds(&self) -> i64 {
        self.in_unit(Unit::Seconds).abs()
    }

    /// Absolute nanoseconds left after removing whole seconds.
    pub fn nanoseconds(&self) -> i64 {
        self.in_units(&[Unit::Nanoseconds, Unit::Seconds])[0].abs()
    }

    // ========== Raw stored units ==========

    pub const fn delta_months(&self) -> i64 {
        self.months
    }

    pub const fn delta_days(&self) -> i64 {
        self.days
    }

    pub const fn delta_minutes(&self) -> i64 {
        self.minutes
    }

    pub const fn delta_seconds(&self) -> i64 {
        self.seconds
    }

    pub const fn delta_nanoseconds(&self) -> i64 {
        self.nanoseconds
    }

    /// All five stored units at once.
    pub const fn deltas(&self) -> Deltas {
        Deltas {
            months: self.months,
            days: self.days,
            minutes: self.minutes,
            seconds: self.seconds,
            nanoseconds: self.nanoseconds,
        }
    }

    /// The non-finite marker held by the clock-second pair, if any.
    pub const fn non_finite_kind(&self) -> Option<NonFinite> {
        self.non_finite
    }

    pub const fn is_finite(&self) -> bool {
        self.non_finite.is_none()
    }

    const fn units(&self) -> [i64; 5] {
        [
            self.months,
            self.days,
            self.minutes,
            self.seconds,
            self.nanoseconds,
        ]
    }

    // ========== Sign queries ==========

    /// True iff every stored unit is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.is_finite() && self.units().iter().all(|unit| *unit == 0)
    }

    fn has_positive(&self) -> bool {
        self.units().iter().any(|unit| *unit > 0)
            || self.non_finite.is_some_and(NonFinite::is_positive)
    }

    fn has_negative(&self) -> bool {
        self.units().iter().any(|unit| *unit < 0)
            || self.non_finite.is_some_and(NonFinite::is_negative)
    }

    /// True when some unit is positive and none is negative.
    pub fn is_positive(&self) -> bool {
        self.has_positive() && !self.has_negative()
    }

    /// True when some unit is negative and none is positive.
    pub fn is_negative(&self) -> bool {
        !self.has_positive() && self.has_negative()
    }

    // ========== Calendar/clock splits ==========

    /// Copy holding only the calendar units (months, days).
    pub fn calendar_duration(&self) -> Self {
        Self::new(DurationParams {
            months: self.months,
            days: self.days,
            end_of_month: Some(self.end_of_month),
            ..DurationParams::default()
        })
    }

    /// Copy holding only the clock units (minutes, seconds, nanoseconds).
    pub const fn clock_duration(&self) -> Self {
        Self {
            months: 0,
            days: 0,
            minutes: self.minutes,
            seconds: self.seconds,
            nanoseconds: self.nanoseconds,
            non_finite: self.non_finite,
            end_of_month: self.end_of_month,
        }
    }

    // ========== End-of-month mode ==========

    pub const fn end_of_month_mode(&self) -> EndOfMonthMode {
        self.end_of_month
    }

    pub const fn is_wrap_mode(&self) -> bool {
        matches!(self.end_of_month, EndOfMonthMode::Wrap)
    }

    pub const fn is_limit_mode(&self) -> bool {
        matches!(self.end_of_month, EndOfMonthMode::Limit)
    }

    pub const fn is_preserve_mode(&self) -> bool {
        matches!(self.end_of_month, EndOfMonthMode::Preserve)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "months={} days={} minutes={} ",
            self.months, self.days, self.minutes
        )?;
        match self.non_finite {
            Some(kind) => write!(f, "seconds={kind}")?,
            None => write!(
                f,
                "seconds={} nanoseconds={}",
                self.seconds, self.nanoseconds
            )?,
        }
        write!(f, " eom={}", self.end_of_month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DurationParams {
        DurationParams::default()
    }

    #[test]
    fn positive_nanoseconds_carry_into_seconds() {
        let d = Duration::new(DurationParams {
            nanoseconds: 1_500_000_000,
            ..params()
        });
        assert_eq!(d.delta_seconds(), 1);
        assert_eq!(d.delta_nanoseconds(), 500_000_000);
        assert_eq!(d.seconds(), 1);
        assert_eq!(d.nanoseconds(), 500_000_000);
    }

    #[test]
    fn negative_nanoseconds_carry_into_seconds() {
        let d = Duration::new(DurationParams {
            nanoseconds: -1_500_000_000,
            ..params()
        });
        assert_eq!(d.delta_seconds(), -1);
        assert_eq!(d.delta_nanoseconds(), -500_000_000);
    }

    #[test]
    fn mixed_sign_seconds_and_nanoseconds_are_cosigned() {
        let d = Duration::new(DurationParams {
            seconds: 2,
            nanoseconds: -500_000_000,
            ..params()
        });
        assert_eq!((d.delta_seconds(), d.delta_nanoseconds()), (1, 500_000_000));

        let d = Duration::new(DurationParams {
            seconds: -3,
            nanoseconds: 200_000_000,
            ..params()
        });
        assert_eq!(
            (d.delta_seconds(), d.delta_nanoseconds()),
            (-2, -800_000_000)
        );

        let d = Duration::new(DurationParams {
            seconds: -1,
            nanoseconds: 300_000_000,
            ..params()
        });
        assert_eq!((d.delta_seconds(), d.delta_nanoseconds()), (0, -700_000_000));
    }

    #[test]
    fn negative_whole_second_carry_leaves_zero_nanoseconds() {
        let d = Duration::new(DurationParams {
            seconds: -2,
            nanoseconds: NANOS_PER_SECOND,
            ..params()
        });
        assert_eq!((d.delta_seconds(), d.delta_nanoseconds()), (-1, 0));
    }

    #[test]
    fn normalization_invariant_holds_over_grid() {
        let seconds = [-7, -1, 0, 1, 42];
        let nanos = [
            -9_999_999_999,
            -2_000_000_000,
            -1_000_000_001,
            -999_999_999,
            -1,
            1,
            999_999_999,
            1_000_000_000,
            3_250_000_000,
            9_999_999_999,
        ];
        for s in seconds {
            for n in nanos {
                let d = Duration::new(DurationParams {
                    seconds: s,
                    nanoseconds: n,
                    ..params()
                });
                let ns = d.delta_nanoseconds();
                assert!(ns.abs() < NANOS_PER_SECOND, "s={s} n={n} -> {d}");
                if ns != 0 && d.delta_seconds() != 0 {
                    assert_eq!(ns.signum(), d.delta_seconds().signum(), "s={s} n={n} -> {d}");
                }
                let total = i128::from(d.delta_seconds()) * 1_000_000_000 + i128::from(ns);
                assert_eq!(total, i128::from(s) * 1_000_000_000 + i128::from(n));
            }
        }
    }

    #[test]
    fn years_weeks_and_hours_fold_into_stored_units() {
        let d = Duration::new(DurationParams {
            years: 2,
            months: 3,
            weeks: 1,
            days: 2,
            hours: 1,
            minutes: 30,
            ..params()
        });
        assert_eq!(
            d.deltas(),
            Deltas {
                months: 27,
                days: 9,
                minutes: 90,
                seconds: 0,
                nanoseconds: 0,
            }
        );
    }

    #[test]
    fn months_decompose_into_years() {
        let d = Duration::new(DurationParams {
            months: 14,
            ..params()
        });
        assert_eq!(d.years(), 1);
        assert_eq!(d.months(), 2);
        assert_eq!(d.delta_months(), 14);
    }

    #[test]
    fn hours_and_minutes_decompose() {
        let d = Duration::new(DurationParams {
            hours: 1,
            minutes: 30,
            ..params()
        });
        assert_eq!(d.delta_minutes(), 90);
        assert_eq!(d.hours(), 1);
        assert_eq!(d.minutes(), 30);
    }

    #[test]
    fn accessors_report_absolute_remainders() {
        let d = Duration::new(DurationParams {
            months: -14,
            days: -10,
            minutes: -125,
            ..params()
        });
        assert_eq!((d.years(), d.months()), (1, 2));
        assert_eq!((d.weeks(), d.days()), (1, 3));
        assert_eq!((d.hours(), d.minutes()), (2, 5));
        assert_eq!(d.in_units(&[Unit::Years, Unit::Months]), vec![-1, -2]);
    }

    #[test]
    fn in_units_preserves_requested_order() {
        let d = Duration::new(DurationParams {
            months: 27,
            days: 17,
            ..params()
        });
        assert_eq!(
            d.in_units(&[Unit::Days, Unit::Months, Unit::Weeks, Unit::Years]),
            vec![3, 3, 2, 2]
        );
        assert_eq!(d.in_units(&[Unit::Months]), vec![27]);
    }

    #[test]
    fn decomposition_conserves_months() {
        for months in [-30, -13, -12, -1, 0, 1, 11, 12, 25] {
            let d = Duration::new(DurationParams { months, ..params() });
            let parts = d.in_units(&[Unit::Months, Unit::Years]);
            assert_eq!(parts[1] * 12 + parts[0], months);
            assert!(parts.iter().all(|p| *p == 0 || p.signum() == months.signum()));
        }
    }

    #[test]
    fn seconds_and_nanoseconds_requested_together_are_disjoint() {
        let d = Duration::new(DurationParams {
            seconds: 3,
            nanoseconds: 250,
            ..params()
        });
        assert_eq!(
            d.in_units(&[Unit::Seconds, Unit::Nanoseconds]),
            vec![3, 250]
        );
        assert_eq!(d.in_unit(Unit::Nanoseconds), 3_000_000_250);
    }

    #[test]
    fn zero_and_sign_queries() {
        assert!(Duration::default().is_zero());
        assert!(!Duration::default().is_positive());
        assert!(!Duration::default().is_negative());

        let mixed = Duration::new(DurationParams {
            months: 1,
            days: -1,
            ..params()
        });
        assert!(!mixed.is_zero());
        assert!(!mixed.is_positive());
        assert!(!mixed.is_negative());

        let negative = Duration::new(DurationParams {
            seconds: -1,
            ..params()
        });
        assert!(negative.is_negative());
        assert!(!negative.is_positive());
    }

    #[test]
    fn default_end_of_month_mode_follows_month_sign() {
        let forward = Duration::new(DurationParams {
            months: 1,
            ..params()
        });
        assert!(forward.is_wrap_mode());

        let backward = Duration::new(DurationParams {
            years: -1,
            months: 3,
            ..params()
        });
        assert!(backward.is_preserve_mode());

        let explicit = Duration::new(DurationParams {
            months: -1,
            end_of_month: Some(EndOfMonthMode::Limit),
            ..params()
        });
        assert!(explicit.is_limit_mode());
        assert_eq!(explicit.end_of_month_mode(), EndOfMonthMode::Limit);
    }

    #[test]
    fn calendar_and_clock_splits() {
        let d = Duration::new(DurationParams {
            months: 2,
            days: 3,
            minutes: 4,
            seconds: 5,
            nanoseconds: 6,
            end_of_month: Some(EndOfMonthMode::Limit),
            ..params()
        });

        let calendar = d.calendar_duration();
        assert_eq!(
            calendar.deltas(),
            Deltas {
                months: 2,
                days: 3,
                ..Deltas::default()
            }
        );
        assert!(calendar.is_limit_mode());

        let clock = d.clock_duration();
        assert_eq!(
            clock.deltas(),
            Deltas {
                minutes: 4,
                seconds: 5,
                nanoseconds: 6,
                ..Deltas::default()
            }
        );
        assert!(clock.is_limit_mode());
    }

    #[test]
    fn non_finite_durations_skip_normalization() {
        let d = Duration::non_finite(NonFinite::PositiveInfinity);
        assert!(!d.is_finite());
        assert!(!d.is_zero());
        assert!(d.is_positive());
        assert_eq!(d.clock_duration().non_finite_kind(), Some(NonFinite::PositiveInfinity));
        assert_eq!(d.calendar_duration().non_finite_kind(), None);

        let nan = Duration::non_finite(NonFinite::NotANumber);
        assert!(!nan.is_zero());
        assert!(!nan.is_positive());
        assert!(!nan.is_negative());
    }

    #[test]
    fn try_new_matches_new_in_range() {
        let p = DurationParams {
            years: -1,
            weeks: 2,
            hours: 3,
            seconds: 5,
            nanoseconds: -1_500_000_000,
            ..params()
        };
        assert_eq!(Duration::try_new(p).unwrap(), Duration::new(p));
    }

    #[test]
    fn try_new_reports_overflowing_units() {
        let err = Duration::try_new(DurationParams {
            years: 1_000_000_000_000_000_000,
            ..params()
        })
        .unwrap_err();
        assert_eq!(err, DurationError::OutOfRange { what: "months" });

        let err = Duration::try_new(DurationParams {
            seconds: i64::MAX,
            nanoseconds: NANOS_PER_SECOND,
            ..params()
        })
        .unwrap_err();
        assert_eq!(err, DurationError::OutOfRange { what: "seconds" });
    }

    #[test]
    fn checked_in_units_reports_nanosecond_overflow() {
        let d = Duration::new(DurationParams {
            seconds: 20_000_000_000,
            ..params()
        });
        assert_eq!(
            d.checked_in_units(&[Unit::Nanoseconds]),
            Err(DurationError::OutOfRange {
                what: "nanoseconds"
            })
        );
        assert_eq!(
            d.checked_in_units(&[Unit::Seconds, Unit::Nanoseconds]),
            Ok(vec![20_000_000_000, 0])
        );
        assert_eq!(d.nanoseconds(), 0);
    }

    #[test]
    fn display_lists_stored_units() {
        let d = Duration::new(DurationParams {
            years: 1,
            hours: 2,
            nanoseconds: 1_500_000_000,
            ..params()
        });
        insta::assert_snapshot!(
            d.to_string(),
            @"months=12 days=0 minutes=120 seconds=1 nanoseconds=500000000 eom=wrap"
        );
        insta::assert_snapshot!(
            Duration::non_finite(NonFinite::NegativeInfinity).to_string(),
            @"months=0 days=0 minutes=0 seconds=-inf eom=wrap"
        );
    }
}
