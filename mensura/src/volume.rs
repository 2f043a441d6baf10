//! Volume: the measure of a three-dimensional space.
//!
//! Canonical unit: the cubic metre.

use std::fmt;

use mensura_core::{Absolute, Delta, NegativeValueError, RateUnit, UnitOfMeasure};
use serde::{Deserialize, Serialize};

/// A volume unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    CubicMetre,
    Litre,
    Millilitre,
    Microlitre,
}

impl UnitOfMeasure for Unit {
    const KIND: &'static str = "Volume";
    const DELTA_KIND: &'static str = "VolumeDelta";
    const CANONICAL: Self = Unit::CubicMetre;

    fn name(self) -> &'static str {
        match self {
            Unit::CubicMetre => "cubic metre",
            Unit::Litre => "litre",
            Unit::Millilitre => "millilitre",
            Unit::Microlitre => "microlitre",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            Unit::CubicMetre => "m^3",
            Unit::Litre => "L",
            Unit::Millilitre => "mL",
            Unit::Microlitre => "uL",
        }
    }

    fn units_per_canonical(self) -> f64 {
        match self {
            Unit::CubicMetre => 1.0,
            Unit::Litre => 1_000.0,
            Unit::Millilitre => 1_000_000.0,
            Unit::Microlitre => 1_000_000_000.0,
        }
    }
}

impl RateUnit for Unit {
    fn rate_kind(_axes: usize) -> &'static str {
        "VolumetricFlowRate"
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// The measure of a three-dimensional space.
pub type Volume = Absolute<Unit>;

/// The difference between two volumes.
pub type VolumeDelta = Delta<Unit>;

/// Error returned when a volume would be less than 0 m^3.
pub type NegativeVolumeValueError = NegativeValueError<Unit>;

/// A volume of zero.
pub const ZERO: Volume = Volume::zero(Unit::CubicMetre);
