//! Length: the measure of distance.
//!
//! Canonical unit: the metre.

use std::fmt;

use mensura_core::{Absolute, Delta, NegativeValueError, RateUnit, UnitOfMeasure};
use serde::{Deserialize, Serialize};

/// A distance unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Metre,
    Centimetre,
    Millimetre,
    Yard,
    Foot,
    Inch,
}

impl UnitOfMeasure for Unit {
    const KIND: &'static str = "Length";
    const DELTA_KIND: &'static str = "LengthDelta";
    const CANONICAL: Self = Unit::Metre;

    fn name(self) -> &'static str {
        match self {
            Unit::Metre => "metre",
            Unit::Centimetre => "centimetre",
            Unit::Millimetre => "millimetre",
            Unit::Yard => "yard",
            Unit::Foot => "foot",
            Unit::Inch => "inch",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            Unit::Metre => "m",
            Unit::Centimetre => "cm",
            Unit::Millimetre => "mm",
            Unit::Yard => "yd",
            Unit::Foot => "ft",
            Unit::Inch => "in",
        }
    }

    fn units_per_canonical(self) -> f64 {
        match self {
            Unit::Metre => 1.0,
            Unit::Centimetre => 100.0,
            Unit::Millimetre => 1_000.0,
            Unit::Yard => 1.09361329834,
            Unit::Foot => 3.28083989501,
            Unit::Inch => 39.3700787402,
        }
    }
}

impl RateUnit for Unit {
    fn rate_kind(axes: usize) -> &'static str {
        match axes {
            1 => "Velocity",
            2 => "Acceleration",
            _ => "Jerk",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// The measure of distance.
pub type Length = Absolute<Unit>;

/// The difference between two lengths.
pub type LengthDelta = Delta<Unit>;

/// Error returned when a length would be less than 0 m.
pub type NegativeLengthValueError = NegativeValueError<Unit>;

/// A length of zero.
pub const ZERO: Length = Length::zero(Unit::Metre);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_create_length() {
        assert!(Length::new(1.0, Unit::Metre).is_ok());
    }

    #[test]
    fn test_create_negative_length_fails() {
        let error = Length::new(-1.0, Unit::Metre).unwrap_err();
        assert_eq!(-1.0, error.value());
        assert_eq!("Length value [-1] cannot be negative.", error.to_string());
    }

    #[test]
    fn test_get_length_value_as_unit() {
        let length = Length::new(1.0, Unit::Metre).unwrap();

        for (unit, expected_value) in [
            (Unit::Metre, 1.0),
            (Unit::Centimetre, 100.0),
            (Unit::Millimetre, 1_000.0),
            (Unit::Yard, 1.09361329834),
            (Unit::Foot, 3.28083989501),
            (Unit::Inch, 39.3700787402),
        ] {
            assert_relative_eq!(expected_value, length.as_unit(unit));
        }
    }

    #[test]
    fn test_equal_lengths_across_units() {
        let centimetres = Length::new(100.0, Unit::Centimetre).unwrap();
        let metres = Length::new(1.0, Unit::Metre).unwrap();
        assert_eq!(centimetres, metres);
    }

    #[test]
    fn test_length_arithmetic_closure() {
        let first = Length::new(3.0, Unit::Metre).unwrap();
        let second = Length::new(2.0, Unit::Metre).unwrap();

        let delta = first - second;
        assert_relative_eq!(1.0, delta.as_unit(Unit::Metre));
        assert_eq!(first, second.try_add(delta).unwrap());
    }

    #[test]
    fn test_subtract_delta_below_zero_fails() {
        let length = Length::new(1.0, Unit::Metre).unwrap();
        let delta = LengthDelta::new(2.0, Unit::Metre);
        assert!(length.try_sub(delta).is_err());
    }

    #[test]
    fn test_length_delta_scaling_and_ratio() {
        let delta = LengthDelta::new(2.0, Unit::Metre);
        assert_relative_eq!(6.0, (delta * 3.0).as_unit(Unit::Metre));
        assert_relative_eq!(4.0, delta / LengthDelta::new(50.0, Unit::Centimetre));
    }

    #[test]
    fn test_zero_constant() {
        assert_relative_eq!(0.0, ZERO.as_unit(Unit::Millimetre));
    }

    #[test]
    fn test_string_representations() {
        let length = Length::new(1.5, Unit::Centimetre).unwrap();
        assert_eq!("1.5 cm", length.to_string());
        assert_eq!("Length(1.5, centimetre)", format!("{length:?}"));

        let delta = LengthDelta::new(-2.0, Unit::Foot);
        assert_eq!("-2 ft", delta.to_string());
        assert_eq!("LengthDelta(-2, foot)", format!("{delta:?}"));
    }
}
