//! Units command for decomposing a duration into human units.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use dur_core::{Duration, EndOfMonthMode, Unit};
use serde::Serialize;

use super::util::{Term, duration_from_terms, sign_label};
use crate::Config;

#[derive(Debug, Args)]
pub struct UnitsArgs {
    /// Duration term as AMOUNT:UNIT (repeatable).
    #[arg(
        short,
        long = "term",
        value_name = "AMOUNT:UNIT",
        allow_hyphen_values = true
    )]
    pub terms: Vec<Term>,

    /// Unit to decompose into (repeatable). Defaults to every unit.
    #[arg(long = "in", value_name = "UNIT")]
    pub units: Vec<Unit>,

    /// End-of-month mode (wrap, limit, preserve).
    #[arg(long = "eom", value_name = "MODE")]
    pub end_of_month: Option<EndOfMonthMode>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// One decomposed unit.
#[derive(Debug, Serialize)]
pub struct UnitValue {
    pub unit: String,
    pub value: i64,
    /// Length depends on where the duration is applied.
    pub calendar: bool,
}

/// Raw stored units.
#[derive(Debug, Serialize)]
pub struct StoredUnits {
    pub months: i64,
    pub days: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub nanoseconds: i64,
}

/// Computed decomposition.
#[derive(Debug, Serialize)]
pub struct UnitsReport {
    pub stored: StoredUnits,
    pub units: Vec<UnitValue>,
    pub sign: &'static str,
    pub end_of_month: EndOfMonthMode,
}

impl UnitsReport {
    pub fn new(duration: &Duration, units: &[Unit]) -> Result<Self> {
        let deltas = duration.deltas();
        let values = duration
            .checked_in_units(units)
            .with_context(|| format!("cannot express {duration} in {units:?}"))?;
        Ok(Self {
            stored: StoredUnits {
                months: deltas.months,
                days: deltas.days,
                minutes: deltas.minutes,
                seconds: deltas.seconds,
                nanoseconds: deltas.nanoseconds,
            },
            units: units
                .iter()
                .zip(values)
                .map(|(unit, value)| UnitValue {
                    unit: unit.to_string(),
                    value,
                    calendar: unit.is_calendar(),
                })
                .collect(),
            sign: sign_label(duration),
            end_of_month: duration.end_of_month_mode(),
        })
    }
}

fn write_human<W: Write>(writer: &mut W, report: &UnitsReport) -> Result<()> {
    let stored = &report.stored;
    writeln!(
        writer,
        "Stored: {} months, {} days, {} minutes, {} seconds, {} nanoseconds",
        stored.months, stored.days, stored.minutes, stored.seconds, stored.nanoseconds
    )?;
    for value in &report.units {
        writeln!(writer, "  {:<12} {}", value.unit, value.value)?;
    }
    writeln!(writer, "Sign: {}", report.sign)?;
    writeln!(writer, "End of month: {}", report.end_of_month)?;
    Ok(())
}

pub fn run<W: Write>(writer: &mut W, args: &UnitsArgs, config: &Config) -> Result<()> {
    let duration = duration_from_terms(&args.terms, args.end_of_month.or(config.end_of_month))?;
    let units = if args.units.is_empty() {
        Unit::ALL.to_vec()
    } else {
        args.units.clone()
    };
    tracing::debug!(%duration, ?units, "decomposing duration");

    let report = UnitsReport::new(&duration, &units)?;
    if args.json || config.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write_human(writer, &report)?;
    }
    Ok(())
}
