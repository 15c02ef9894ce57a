//! Calendar/clock duration value type.
//!
//! This crate contains:
//! - [`Duration`]: an offset in mixed calendar and clock units, with
//!   lossless nanosecond normalization and unit decomposition
//! - Arithmetic: add, subtract, scale, invert
//! - Anchored comparison through the [`TimePoint`] trait, with chrono adapters

mod duration;
pub mod end_of_month;
pub mod error;
pub mod non_finite;
pub mod point;
pub mod unit;

pub use duration::{Deltas, Duration, DurationParams, NANOS_PER_SECOND, Operand};
pub use end_of_month::EndOfMonthMode;
pub use error::{DurationError, InvalidOperation, UnknownUnit};
pub use non_finite::NonFinite;
pub use point::TimePoint;
pub use unit::Unit;
