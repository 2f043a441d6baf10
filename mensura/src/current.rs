//! Current: the flow of charged particles through an electrical conductor.
//!
//! Canonical unit: the ampere. Current is signed — conventional current can
//! flow either way — so it carries the delta arithmetic contract directly
//! and has no separate delta type.

use std::fmt;

use mensura_core::{Delta, UnitOfMeasure};
use serde::{Deserialize, Serialize};

/// A current unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Ampere,
    Milliampere,
    Microampere,
}

impl UnitOfMeasure for Unit {
    const KIND: &'static str = "Current";
    const DELTA_KIND: &'static str = "Current";
    const CANONICAL: Self = Unit::Ampere;

    fn name(self) -> &'static str {
        match self {
            Unit::Ampere => "ampere",
            Unit::Milliampere => "milliampere",
            Unit::Microampere => "microampere",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            Unit::Ampere => "A",
            Unit::Milliampere => "mA",
            Unit::Microampere => "uA",
        }
    }

    fn units_per_canonical(self) -> f64 {
        match self {
            Unit::Ampere => 1.0,
            Unit::Milliampere => 1_000.0,
            Unit::Microampere => 1_000_000.0,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// The flow of charged particles through an electrical conductor.
pub type Current = Delta<Unit>;

/// A current of zero.
pub const ZERO: Current = Current::zero(Unit::Ampere);
