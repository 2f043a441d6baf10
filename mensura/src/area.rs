//! Area: the measure of a two-dimensional space.
//!
//! Canonical unit: the square metre. Each unit is the square of a distance
//! unit, so the conversion ratios are derived from the length registry
//! rather than entered twice.

use std::fmt;

use mensura_core::{Absolute, Delta, NegativeValueError, UnitOfMeasure};
use serde::{Deserialize, Serialize};

use crate::length;

/// An area unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    SquareMetre,
    SquareCentimetre,
    SquareMillimetre,
    SquareYard,
    SquareFoot,
    SquareInch,
}

impl Unit {
    /// The distance unit this area unit is the square of.
    fn side(self) -> length::Unit {
        match self {
            Unit::SquareMetre => length::Unit::Metre,
            Unit::SquareCentimetre => length::Unit::Centimetre,
            Unit::SquareMillimetre => length::Unit::Millimetre,
            Unit::SquareYard => length::Unit::Yard,
            Unit::SquareFoot => length::Unit::Foot,
            Unit::SquareInch => length::Unit::Inch,
        }
    }
}

impl UnitOfMeasure for Unit {
    const KIND: &'static str = "Area";
    const DELTA_KIND: &'static str = "AreaDelta";
    const CANONICAL: Self = Unit::SquareMetre;

    fn name(self) -> &'static str {
        match self {
            Unit::SquareMetre => "square metre",
            Unit::SquareCentimetre => "square centimetre",
            Unit::SquareMillimetre => "square millimetre",
            Unit::SquareYard => "square yard",
            Unit::SquareFoot => "square foot",
            Unit::SquareInch => "square inch",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            Unit::SquareMetre => "m^2",
            Unit::SquareCentimetre => "cm^2",
            Unit::SquareMillimetre => "mm^2",
            Unit::SquareYard => "yd^2",
            Unit::SquareFoot => "ft^2",
            Unit::SquareInch => "in^2",
        }
    }

    fn units_per_canonical(self) -> f64 {
        self.side().units_per_canonical().powi(2)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// The measure of a two-dimensional space.
pub type Area = Absolute<Unit>;

/// The difference between two areas.
pub type AreaDelta = Delta<Unit>;

/// Error returned when an area would be less than 0 m^2.
pub type NegativeAreaValueError = NegativeValueError<Unit>;

/// An area of zero.
pub const ZERO: Area = Area::zero(Unit::SquareMetre);
