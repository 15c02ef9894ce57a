//! Compare command for ordering two durations at an anchor datetime.

use std::cmp::Ordering;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Args;
use dur_core::{Duration, EndOfMonthMode};
use serde::Serialize;

use super::util::{DATETIME_FORMAT, Term, duration_from_terms, parse_datetime};
use crate::Config;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Left duration term as AMOUNT:UNIT (repeatable).
    #[arg(long, value_name = "AMOUNT:UNIT", allow_hyphen_values = true)]
    pub left: Vec<Term>,

    /// Right duration term as AMOUNT:UNIT (repeatable).
    #[arg(long, value_name = "AMOUNT:UNIT", allow_hyphen_values = true)]
    pub right: Vec<Term>,

    /// Anchor datetime. Defaults to the configured anchor, then the current UTC time.
    #[arg(long, value_parser = parse_datetime)]
    pub anchor: Option<NaiveDateTime>,

    /// End-of-month mode for both durations (wrap, limit, preserve).
    #[arg(long = "eom", value_name = "MODE")]
    pub end_of_month: Option<EndOfMonthMode>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CompareOutput {
    anchor: String,
    left: String,
    right: String,
    ordering: &'static str,
}

const fn ordering_label(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

/// Runs the comparison. `now` is the anchor of last resort.
pub fn run<W: Write>(
    writer: &mut W,
    args: &CompareArgs,
    config: &Config,
    now: NaiveDateTime,
) -> Result<()> {
    let end_of_month = args.end_of_month.or(config.end_of_month);
    let left = duration_from_terms(&args.left, end_of_month)?;
    let right = duration_from_terms(&args.right, end_of_month)?;
    let anchor = args.anchor.or(config.anchor).unwrap_or(now);

    let ordering = Duration::compare(&left, &right, &anchor)
        .with_context(|| format!("failed to compare durations at {anchor}"))?;

    let output = CompareOutput {
        anchor: anchor.format(DATETIME_FORMAT).to_string(),
        left: left.to_string(),
        right: right.to_string(),
        ordering: ordering_label(ordering),
    };
    if args.json || config.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(writer, "{}", output.ordering)?;
    }
    Ok(())
}
