//! Temperature: quantitatively expresses the attribute of hotness or
//! coldness.
//!
//! Temperature is the one affine kind in the catalogue: converting an
//! absolute temperature needs both a scale factor and an offset, because
//! the kelvin-vs-unit line has a non-zero intercept for Celsius and
//! Fahrenheit. A temperature *difference* is translation-invariant, so
//! [`TemperatureDelta`] converts with the scale factor alone. Keeping those
//! two rules separate is what makes delta round-trips come out right.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::helpers::{div_rem, hashable_bits};

/// Absolute zero, expressed in kelvin.
pub const ABSOLUTE_ZERO_AS_KELVIN: f64 = 0.0;

/// A temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

/// Parameters of the kelvin-vs-unit line:
/// `value_in_unit = value_in_kelvin * units_per_kelvin + absolute_zero_offset`.
#[derive(Debug, Clone, Copy)]
struct ConversionParameters {
    /// The gradient of the line: degrees of this unit per kelvin.
    units_per_kelvin: f64,
    /// The y-intercept: the temperature in this unit at absolute zero.
    absolute_zero_offset: f64,
}

impl Unit {
    fn conversion_parameters(self) -> ConversionParameters {
        match self {
            Unit::Kelvin => ConversionParameters {
                units_per_kelvin: 1.0,
                absolute_zero_offset: 0.0,
            },
            Unit::Celsius => ConversionParameters {
                units_per_kelvin: 1.0,
                absolute_zero_offset: -273.15,
            },
            Unit::Fahrenheit => ConversionParameters {
                units_per_kelvin: 9.0 / 5.0,
                absolute_zero_offset: -459.67,
            },
        }
    }

    /// The full name of the unit.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Kelvin => "kelvin",
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
        }
    }

    /// The abbreviation of the unit.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Unit::Kelvin => "K",
            Unit::Celsius => "C",
            Unit::Fahrenheit => "F",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Error returned when a temperature would be less than absolute zero.
///
/// Carries both the magnitude and the unit, since "below zero" only
/// displays meaningfully alongside the unit it was given in.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Temperature [{value} {unit}] cannot exist, as this would be less than absolute zero (0 K).")]
pub struct BelowAbsoluteZeroError {
    /// The temperature magnitude that caused the error.
    pub value: f64,
    /// The unit the magnitude was expressed in.
    pub unit: Unit,
}

/// Wire shape of a temperature; deserialization goes through it so the
/// absolute-zero invariant is re-checked on the way in.
#[derive(Deserialize)]
struct RawTemperature {
    value: f64,
    unit: Unit,
}

/// Quantitatively expresses the attribute of hotness or coldness.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawTemperature")]
pub struct Temperature {
    value: f64,
    unit: Unit,
}

impl Temperature {
    /// Create a new temperature.
    ///
    /// # Errors
    ///
    /// Returns [`BelowAbsoluteZeroError`] if the kelvin equivalent of the
    /// magnitude is below absolute zero.
    pub fn new(value: f64, unit: Unit) -> Result<Self, BelowAbsoluteZeroError> {
        let parameters = unit.conversion_parameters();
        let value_as_kelvin = (value - parameters.absolute_zero_offset) / parameters.units_per_kelvin;
        if value_as_kelvin < ABSOLUTE_ZERO_AS_KELVIN {
            return Err(BelowAbsoluteZeroError { value, unit });
        }

        Ok(Self { value, unit })
    }

    /// The temperature, expressed as the given unit.
    pub fn as_unit(self, unit: Unit) -> f64 {
        let internal = self.unit.conversion_parameters();
        let value_as_kelvin = (self.value - internal.absolute_zero_offset) / internal.units_per_kelvin;

        let external = unit.conversion_parameters();
        external.units_per_kelvin * value_as_kelvin + external.absolute_zero_offset
    }

    /// The sum of the temperature and a difference.
    ///
    /// # Errors
    ///
    /// Returns [`BelowAbsoluteZeroError`] if the sum is below absolute zero.
    pub fn try_add(self, delta: TemperatureDelta) -> Result<Self, BelowAbsoluteZeroError> {
        let sum = self.as_unit(Unit::Kelvin) + delta.as_unit(Unit::Kelvin);
        Self::new(sum, Unit::Kelvin)
    }

    /// The temperature less a difference.
    ///
    /// # Errors
    ///
    /// Returns [`BelowAbsoluteZeroError`] if the result is below absolute
    /// zero.
    pub fn try_sub(self, delta: TemperatureDelta) -> Result<Self, BelowAbsoluteZeroError> {
        self.try_add(-delta)
    }
}

impl TryFrom<RawTemperature> for Temperature {
    type Error = BelowAbsoluteZeroError;

    fn try_from(raw: RawTemperature) -> Result<Self, Self::Error> {
        Self::new(raw.value, raw.unit)
    }
}

/// The difference between two temperatures: `Temperature - Temperature`.
impl Sub for Temperature {
    type Output = TemperatureDelta;

    fn sub(self, other: Self) -> TemperatureDelta {
        let difference = self.as_unit(Unit::Kelvin) - other.as_unit(Unit::Kelvin);
        TemperatureDelta::new(difference, Unit::Kelvin)
    }
}

impl PartialEq for Temperature {
    fn eq(&self, other: &Self) -> bool {
        self.as_unit(Unit::Kelvin) == other.as_unit(Unit::Kelvin)
    }
}

impl PartialOrd for Temperature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_unit(Unit::Kelvin)
            .partial_cmp(&other.as_unit(Unit::Kelvin))
    }
}

/// Hashes the kelvin magnitude, so equal temperatures hash equally. The
/// usual caution around hashing floating point values applies.
impl Hash for Temperature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hashable_bits(self.as_unit(Unit::Kelvin)));
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbreviation())
    }
}

impl fmt::Debug for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Temperature({}, {})", self.value, self.unit.name())
    }
}

/// The difference between two temperatures.
///
/// Deltas are translation-invariant, so conversion uses only the scale
/// factor — no offset term.
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct TemperatureDelta {
    value: f64,
    unit: Unit,
}

impl TemperatureDelta {
    /// Create a new temperature difference. Any sign is permitted.
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// The difference, expressed as the given unit.
    pub fn as_unit(self, unit: Unit) -> f64 {
        let internal = self.unit.conversion_parameters();
        let value_as_kelvin = self.value / internal.units_per_kelvin;

        let external = unit.conversion_parameters();
        external.units_per_kelvin * value_as_kelvin
    }

    /// The absolute version of the difference.
    pub fn abs(self) -> Self {
        Self::new(self.value.abs(), self.unit)
    }

    /// The floored ratio between two differences.
    pub fn div_floor(self, other: Self) -> f64 {
        let (quotient, _) = self.div_rem(other);
        quotient
    }

    /// The floored quotient and remainder of the ratio between two
    /// differences, in kelvin.
    pub fn div_rem(self, other: Self) -> (f64, f64) {
        div_rem(self.as_unit(Unit::Kelvin), other.as_unit(Unit::Kelvin))
    }
}

impl Add for TemperatureDelta {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let sum = self.as_unit(Unit::Kelvin) + other.as_unit(Unit::Kelvin);
        Self::new(sum, Unit::Kelvin)
    }
}

impl Sub for TemperatureDelta {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl Neg for TemperatureDelta {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

/// A difference scaled by a value.
impl Mul<f64> for TemperatureDelta {
    type Output = Self;

    fn mul(self, value: f64) -> Self {
        Self::new(self.value * value, self.unit)
    }
}

/// A difference scaled by a value.
impl Mul<TemperatureDelta> for f64 {
    type Output = TemperatureDelta;

    fn mul(self, delta: TemperatureDelta) -> TemperatureDelta {
        delta * self
    }
}

/// A difference scaled by the inverse of a value.
impl Div<f64> for TemperatureDelta {
    type Output = Self;

    fn div(self, value: f64) -> Self {
        Self::new(self.value / value, self.unit)
    }
}

/// The dimensionless ratio between two differences. Division by a zero
/// difference is not guarded.
impl Div for TemperatureDelta {
    type Output = f64;

    fn div(self, other: Self) -> f64 {
        self.as_unit(Unit::Kelvin) / other.as_unit(Unit::Kelvin)
    }
}

/// The remainder of the ratio between two differences, in kelvin.
impl Rem for TemperatureDelta {
    type Output = f64;

    fn rem(self, other: Self) -> f64 {
        let (_, remainder) = self.div_rem(other);
        remainder
    }
}

impl PartialEq for TemperatureDelta {
    fn eq(&self, other: &Self) -> bool {
        self.as_unit(Unit::Kelvin) == other.as_unit(Unit::Kelvin)
    }
}

impl PartialOrd for TemperatureDelta {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_unit(Unit::Kelvin)
            .partial_cmp(&other.as_unit(Unit::Kelvin))
    }
}

/// Hashes the kelvin magnitude, so equal differences hash equally.
impl Hash for TemperatureDelta {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hashable_bits(self.as_unit(Unit::Kelvin)));
    }
}

impl fmt::Display for TemperatureDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbreviation())
    }
}

impl fmt::Debug for TemperatureDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TemperatureDelta({}, {})", self.value, self.unit.name())
    }
}

/// The coldest possible temperature.
pub const ABSOLUTE_ZERO: Temperature = Temperature {
    value: ABSOLUTE_ZERO_AS_KELVIN,
    unit: Unit::Kelvin,
};
