//! Shared utilities for CLI commands.

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use dur_core::{Duration, DurationParams, EndOfMonthMode, Unit};

/// Output format for datetimes.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// One `AMOUNT:UNIT` argument, e.g. `14:months` or `-90:minutes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub amount: i64,
    pub unit: Unit,
}

impl FromStr for Term {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((amount, unit)) = s.split_once(':') else {
            bail!("Invalid term: {s}. Use AMOUNT:UNIT (e.g., 14:months, -90:minutes)");
        };
        let amount = amount
            .trim()
            .parse()
            .with_context(|| format!("invalid amount in term: {s}"))?;
        let unit = unit.trim().parse()?;
        Ok(Self { amount, unit })
    }
}

/// Builds a duration from terms. Repeated units are summed.
pub fn duration_from_terms(
    terms: &[Term],
    end_of_month: Option<EndOfMonthMode>,
) -> Result<Duration> {
    let mut params = DurationParams {
        end_of_month,
        ..DurationParams::default()
    };
    for term in terms {
        let field = match term.unit {
            Unit::Years => &mut params.years,
            Unit::Months => &mut params.months,
            Unit::Weeks => &mut params.weeks,
            Unit::Days => &mut params.days,
            Unit::Hours => &mut params.hours,
            Unit::Minutes => &mut params.minutes,
            Unit::Seconds => &mut params.seconds,
            Unit::Nanoseconds => &mut params.nanoseconds,
        };
        let Some(total) = field.checked_add(term.amount) else {
            bail!("Duration too large: {} {} overflows", term.amount, term.unit);
        };
        *field = total;
    }
    Duration::try_new(params).context("Duration too large")
}

/// Parse a datetime as a naive ISO 8601 datetime, RFC 3339 (converted to
/// UTC), or a bare date at midnight.
///
/// Supports:
/// - "2026-01-15T10:30:00"
/// - "2026-01-15T10:30:00Z", "2026-01-15T10:30:00+02:00"
/// - "2026-01-15"
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    if let Ok(naive) = s.parse::<NaiveDateTime>() {
        return Ok(naive);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    if let Ok(date) = s.parse::<NaiveDate>() {
        return Ok(date.and_time(NaiveTime::default()));
    }
    bail!("Invalid datetime: {s}. Use ISO 8601 (e.g., 2026-01-15T10:30:00) or a date (2026-01-15)")
}

/// Human label for the overall sign of a duration.
pub fn sign_label(duration: &Duration) -> &'static str {
    if duration.is_zero() {
        "zero"
    } else if duration.is_positive() {
        "positive"
    } else if duration.is_negative() {
        "negative"
    } else {
        "mixed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_terms() {
        let term: Term = "14:months".parse().unwrap();
        assert_eq!(
            term,
            Term {
                amount: 14,
                unit: Unit::Months
            }
        );

        let term: Term = "-90:minute".parse().unwrap();
        assert_eq!(term.amount, -90);
        assert_eq!(term.unit, Unit::Minutes);
    }

    #[test]
    fn rejects_malformed_terms() {
        let err = "14months".parse::<Term>().unwrap_err();
        assert!(err.to_string().contains("AMOUNT:UNIT"));

        let err = "x:days".parse::<Term>().unwrap_err();
        assert!(err.to_string().contains("invalid amount"));

        let err = "3:fortnights".parse::<Term>().unwrap_err();
        assert_eq!(err.to_string(), "unknown duration unit: fortnights");
    }

    #[test]
    fn terms_fold_into_duration() {
        let terms: Vec<Term> = ["1:years", "2:months", "1:years", "90:minutes"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let duration = duration_from_terms(&terms, None).unwrap();
        assert_eq!(duration.delta_months(), 26);
        assert_eq!(duration.delta_minutes(), 90);
        assert!(duration.is_wrap_mode());

        let limited = duration_from_terms(&terms, Some(EndOfMonthMode::Limit)).unwrap();
        assert!(limited.is_limit_mode());
    }

    #[test]
    fn oversized_terms_are_rejected() {
        let parse = |items: &[&str]| -> Vec<Term> {
            items.iter().map(|s| s.parse().unwrap()).collect()
        };

        let err = duration_from_terms(&parse(&["1000000000000000000:years"]), None).unwrap_err();
        assert_eq!(format!("{err:#}"), "Duration too large: months is out of range");

        let err = duration_from_terms(
            &parse(&["9223372036854775807:days", "1:days"]),
            None,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Duration too large: 1 days overflows");
    }

    #[test]
    fn parses_datetimes() {
        let expected = NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(parse_datetime("2026-01-15T10:30:00").unwrap(), expected);
        assert_eq!(parse_datetime("2026-01-15T12:30:00+02:00").unwrap(), expected);
        assert_eq!(
            parse_datetime("2026-01-15").unwrap(),
            expected.date().and_time(NaiveTime::default())
        );
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn sign_labels() {
        let terms = |items: &[&str]| -> Duration {
            let parsed: Vec<Term> = items.iter().map(|s| s.parse().unwrap()).collect();
            duration_from_terms(&parsed, None).unwrap()
        };
        assert_eq!(sign_label(&terms(&[])), "zero");
        assert_eq!(sign_label(&terms(&["1:days"])), "positive");
        assert_eq!(sign_label(&terms(&["-1:days"])), "negative");
        assert_eq!(sign_label(&terms(&["1:months", "-1:days"])), "mixed");
    }
}
