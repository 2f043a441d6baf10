//! Pressure: force applied perpendicular to a surface, per unit area.
//!
//! Canonical unit: the pascal.

use std::fmt;

use mensura_core::{Absolute, Delta, NegativeValueError, UnitOfMeasure};
use serde::{Deserialize, Serialize};

/// One standard atmosphere, in pascals.
pub const STANDARD_ATMOSPHERIC_PRESSURE_AS_PASCAL: f64 = 101_325.0;

/// A pressure unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Pascal,
    Kilopascal,
    Bar,
    Millibar,
    PoundPerSquareInch,
    Atmosphere,
    MillimetreOfMercury,
}

impl UnitOfMeasure for Unit {
    const KIND: &'static str = "Pressure";
    const DELTA_KIND: &'static str = "PressureDelta";
    const CANONICAL: Self = Unit::Pascal;

    fn name(self) -> &'static str {
        match self {
            Unit::Pascal => "pascal",
            Unit::Kilopascal => "kilopascal",
            Unit::Bar => "bar",
            Unit::Millibar => "millibar",
            Unit::PoundPerSquareInch => "pound-per-square-inch",
            Unit::Atmosphere => "atmosphere",
            Unit::MillimetreOfMercury => "millimetre-of-mercury",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            Unit::Pascal => "Pa",
            Unit::Kilopascal => "kPa",
            Unit::Bar => "bar",
            Unit::Millibar => "mbar",
            Unit::PoundPerSquareInch => "PSI",
            Unit::Atmosphere => "atm",
            Unit::MillimetreOfMercury => "mmHg",
        }
    }

    fn units_per_canonical(self) -> f64 {
        match self {
            Unit::Pascal => 1.0,
            Unit::Kilopascal => 1.0 / 1_000.0,
            Unit::Bar => 1.0 / 100_000.0,
            Unit::Millibar => 1.0 / 100.0,
            Unit::PoundPerSquareInch => 0.00014503773773,
            Unit::Atmosphere => 1.0 / STANDARD_ATMOSPHERIC_PRESSURE_AS_PASCAL,
            Unit::MillimetreOfMercury => 1.0 / 133.322387415,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Force applied perpendicular to a surface, per unit area.
pub type Pressure = Absolute<Unit>;

/// The difference between two pressures.
pub type PressureDelta = Delta<Unit>;

/// Error returned when a pressure would be less than 0 Pa.
pub type NegativePressureValueError = NegativeValueError<Unit>;

/// A perfect vacuum.
pub const ZERO: Pressure = Pressure::zero(Unit::Pascal);

/// Standard atmospheric pressure at sea level.
pub const STANDARD_ATMOSPHERE: Pressure =
    Pressure::new_const(STANDARD_ATMOSPHERIC_PRESSURE_AS_PASCAL, Unit::Pascal);
