//! Time: the measure in which events can be ordered from the past into the
//! future.
//!
//! Canonical unit: the second. Every rate quantity in the catalogue carries
//! its denominators in these units.

use std::fmt;

use mensura_core::{Absolute, Delta, NegativeValueError, UnitOfMeasure};
use serde::{Deserialize, Serialize};

/// A time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Millisecond,
    Microsecond,
}

impl UnitOfMeasure for Unit {
    const KIND: &'static str = "Time";
    const DELTA_KIND: &'static str = "TimeDelta";
    const CANONICAL: Self = Unit::Second;

    fn name(self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Millisecond => "millisecond",
            Unit::Microsecond => "microsecond",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            Unit::Second => "s",
            Unit::Minute => "min",
            Unit::Hour => "h",
            Unit::Millisecond => "ms",
            Unit::Microsecond => "us",
        }
    }

    fn units_per_canonical(self) -> f64 {
        match self {
            Unit::Second => 1.0,
            Unit::Minute => 1.0 / 60.0,
            Unit::Hour => 1.0 / (60.0 * 60.0),
            Unit::Millisecond => 1e3,
            Unit::Microsecond => 1e6,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// The measure in which events can be ordered from the past into the future.
pub type Time = Absolute<Unit>;

/// The difference between two times.
pub type TimeDelta = Delta<Unit>;

/// Error returned when a time would be less than 0 s.
pub type NegativeTimeValueError = NegativeValueError<Unit>;

/// A time of zero.
pub const ZERO: Time = Time::zero(Unit::Second);
