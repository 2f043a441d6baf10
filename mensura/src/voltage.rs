//! Voltage: the difference in electric potential between two points.
//!
//! Canonical unit: the volt. A voltage is already a difference, so it is
//! signed, carries the delta arithmetic contract directly, and has no
//! separate delta type.

use std::fmt;

use mensura_core::{Delta, UnitOfMeasure};
use serde::{Deserialize, Serialize};

/// A voltage unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Volt,
    Millivolt,
    Microvolt,
}

impl UnitOfMeasure for Unit {
    const KIND: &'static str = "Voltage";
    const DELTA_KIND: &'static str = "Voltage";
    const CANONICAL: Self = Unit::Volt;

    fn name(self) -> &'static str {
        match self {
            Unit::Volt => "volt",
            Unit::Millivolt => "millivolt",
            Unit::Microvolt => "microvolt",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            Unit::Volt => "V",
            Unit::Millivolt => "mV",
            Unit::Microvolt => "uV",
        }
    }

    fn units_per_canonical(self) -> f64 {
        match self {
            Unit::Volt => 1.0,
            Unit::Millivolt => 1_000.0,
            Unit::Microvolt => 1_000_000.0,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// The difference in electric potential between two points.
pub type Voltage = Delta<Unit>;

/// A voltage of zero.
pub const ZERO: Voltage = Voltage::zero(Unit::Volt);
