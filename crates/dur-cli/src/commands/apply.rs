//! Apply command for moving a datetime by a duration.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Args;
use dur_core::{EndOfMonthMode, TimePoint};
use serde::Serialize;

use super::util::{DATETIME_FORMAT, Term, duration_from_terms, parse_datetime};
use crate::Config;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Starting datetime (e.g., 2024-01-31T09:00:00 or 2024-01-31).
    #[arg(long, value_parser = parse_datetime)]
    pub at: NaiveDateTime,

    /// Duration term as AMOUNT:UNIT (repeatable).
    #[arg(
        short,
        long = "term",
        value_name = "AMOUNT:UNIT",
        allow_hyphen_values = true
    )]
    pub terms: Vec<Term>,

    /// End-of-month mode (wrap, limit, preserve).
    #[arg(long = "eom", value_name = "MODE")]
    pub end_of_month: Option<EndOfMonthMode>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ApplyOutput {
    start: String,
    end: String,
    end_of_month: EndOfMonthMode,
}

pub fn run<W: Write>(writer: &mut W, args: &ApplyArgs, config: &Config) -> Result<()> {
    let duration = duration_from_terms(&args.terms, args.end_of_month.or(config.end_of_month))?;
    let end = args
        .at
        .add_duration(&duration)
        .with_context(|| format!("failed to apply {duration} to {}", args.at))?;
    tracing::debug!(start = %args.at, %end, %duration, "applied duration");

    let output = ApplyOutput {
        start: args.at.format(DATETIME_FORMAT).to_string(),
        end: end.format(DATETIME_FORMAT).to_string(),
        end_of_month: duration.end_of_month_mode(),
    };
    if args.json || config.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(writer, "{}", output.end)?;
    }
    Ok(())
}
