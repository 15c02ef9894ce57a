//! CLI subcommand implementations.

pub mod apply;
pub mod compare;
pub mod units;
pub mod util;
