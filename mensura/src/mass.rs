//! Mass: the measure of an object's resistance to acceleration.
//!
//! Canonical unit: the kilogram.

use std::fmt;

use mensura_core::{Absolute, Delta, NegativeValueError, RateUnit, UnitOfMeasure};
use serde::{Deserialize, Serialize};

/// A mass unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Kilogram,
    Gram,
    Milligram,
    Pound,
    Ounce,
}

impl UnitOfMeasure for Unit {
    const KIND: &'static str = "Mass";
    const DELTA_KIND: &'static str = "MassDelta";
    const CANONICAL: Self = Unit::Kilogram;

    fn name(self) -> &'static str {
        match self {
            Unit::Kilogram => "kilogram",
            Unit::Gram => "gram",
            Unit::Milligram => "milligram",
            Unit::Pound => "pound",
            Unit::Ounce => "ounce",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            Unit::Kilogram => "kg",
            Unit::Gram => "g",
            Unit::Milligram => "mg",
            Unit::Pound => "lb",
            Unit::Ounce => "oz",
        }
    }

    fn units_per_canonical(self) -> f64 {
        match self {
            Unit::Kilogram => 1.0,
            Unit::Gram => 1_000.0,
            Unit::Milligram => 1_000_000.0,
            Unit::Pound => 2.20462262185,
            Unit::Ounce => 35.2739619496,
        }
    }
}

impl RateUnit for Unit {
    fn rate_kind(_axes: usize) -> &'static str {
        "MassFlowRate"
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// The measure of an object's resistance to acceleration.
pub type Mass = Absolute<Unit>;

/// The difference between two masses.
pub type MassDelta = Delta<Unit>;

/// Error returned when a mass would be less than 0 kg.
pub type NegativeMassValueError = NegativeValueError<Unit>;

/// A mass of zero.
pub const ZERO: Mass = Mass::zero(Unit::Kilogram);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_create_negative_mass_fails() {
        let error = Mass::new(-1.0, Unit::Kilogram).unwrap_err();
        assert_eq!(-1.0, error.value());
        assert_eq!("Mass value [-1] cannot be negative.", error.to_string());
    }

    #[test]
    fn test_get_mass_value_as_unit() {
        let mass = Mass::new(1.0, Unit::Kilogram).unwrap();

        for (unit, expected_value) in [
            (Unit::Kilogram, 1.0),
            (Unit::Gram, 1_000.0),
            (Unit::Milligram, 1_000_000.0),
            (Unit::Pound, 2.20462262185),
            (Unit::Ounce, 35.2739619496),
        ] {
            assert_relative_eq!(expected_value, mass.as_unit(unit));
        }
    }

    #[test]
    fn test_mass_delta_subtraction() {
        let first = MassDelta::new(3.0, Unit::Kilogram);
        let second = MassDelta::new(2.0, Unit::Kilogram);
        assert_relative_eq!(1.0, (first - second).as_unit(Unit::Kilogram));
    }

    #[test]
    fn test_mass_minus_mass_is_delta() {
        let first = Mass::new(1.0, Unit::Kilogram).unwrap();
        let second = Mass::new(250.0, Unit::Gram).unwrap();
        assert_relative_eq!(0.75, (first - second).as_unit(Unit::Kilogram));
    }

    #[test]
    fn test_grams_equal_kilograms() {
        let grams = Mass::new(500.0, Unit::Gram).unwrap();
        let kilograms = Mass::new(0.5, Unit::Kilogram).unwrap();
        assert_eq!(grams, kilograms);
    }

    #[test]
    fn test_string_representations() {
        let mass = Mass::new(2.0, Unit::Pound).unwrap();
        assert_eq!("2 lb", mass.to_string());
        assert_eq!("Mass(2, pound)", format!("{mass:?}"));
    }
}
