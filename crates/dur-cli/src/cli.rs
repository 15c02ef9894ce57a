//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{apply::ApplyArgs, compare::CompareArgs, units::UnitsArgs};

/// Calendar/clock duration calculator.
///
/// Builds durations from `AMOUNT:UNIT` terms (e.g. `14:months`), decomposes
/// them into human units, applies them to datetimes and compares them at an
/// anchor.
#[derive(Debug, Parser)]
#[command(name = "dur", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decompose a duration into units.
    Units(UnitsArgs),

    /// Apply a duration to a datetime.
    Apply(ApplyArgs),

    /// Compare two durations at an anchor datetime.
    Compare(CompareArgs),
}
