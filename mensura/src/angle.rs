//! Angle: the opening between two lines in the same plane that meet at a
//! point.
//!
//! Canonical unit: the radian. [`Angle`] lives on the unit circle, wrapped
//! into [0, 2π); [`AngleDelta`] is the signed difference between two
//! angles, wrapped into [−π, π). Wrapping happens at construction and
//! nowhere else — arithmetic builds its results through the constructors,
//! so the invariant is inherited rather than re-applied.
//!
//! The unwrapped signed angular quantity is
//! [`Displacement`](crate::angular_motion::Displacement).

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use mensura_core::{RateUnit, UnitOfMeasure};
use serde::{Deserialize, Serialize};

use crate::helpers::{div_rem, hashable_bits};

/// An angle unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Radian,
    Degree,
    Revolution,
}

impl UnitOfMeasure for Unit {
    const KIND: &'static str = "Angle";
    // Delta<Unit> over angle units is the unwrapped angular displacement.
    const DELTA_KIND: &'static str = "Displacement";
    const CANONICAL: Self = Unit::Radian;

    fn name(self) -> &'static str {
        match self {
            Unit::Radian => "radian",
            Unit::Degree => "degree",
            Unit::Revolution => "revolution",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            Unit::Radian => "rad",
            Unit::Degree => "deg",
            Unit::Revolution => "rev",
        }
    }

    fn units_per_canonical(self) -> f64 {
        match self {
            Unit::Radian => 1.0,
            Unit::Degree => 180.0 / PI,
            Unit::Revolution => 1.0 / (2.0 * PI),
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

/// Map a magnitude to [0, 2π) radians, expressed in the unit's own scale.
fn wrap_to_circle(value: f64, unit: Unit) -> f64 {
    let period = 2.0 * PI * unit.units_per_canonical();
    value.rem_euclid(period)
}

/// Map a magnitude to [−π, π) radians, expressed in the unit's own scale.
fn wrap_to_half_circle(value: f64, unit: Unit) -> f64 {
    let period = 2.0 * PI * unit.units_per_canonical();
    let wrapped = value.rem_euclid(period);
    if wrapped >= period / 2.0 {
        wrapped - period
    } else {
        wrapped
    }
}

/// Wire shape of an angle; deserialization re-wraps through the
/// constructor.
#[derive(Deserialize)]
struct RawAngle {
    value: f64,
    unit: Unit,
}

/// The opening between two lines in the same plane that meet at a point.
///
/// Always in the range [0, 2π) radians; magnitudes outside the range are
/// mapped into it:
///
/// | Range  | Construction               | Equivalent to             |
/// |--------|----------------------------|---------------------------|
/// | Within | `Angle::new(185.0, Degree)`| `Angle::new(185.0, Degree)` |
/// | Below  | `Angle::new(-3.0 * PI, Radian)` | `Angle::new(PI, Radian)` |
/// | Above  | `Angle::new(4.0, Revolution)` | `Angle::new(0.0, Revolution)` |
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(from = "RawAngle")]
pub struct Angle {
    value: f64,
    unit: Unit,
}

impl Angle {
    /// Create a new angle, wrapped onto the unit circle.
    pub fn new(value: f64, unit: Unit) -> Self {
        Self {
            value: wrap_to_circle(value, unit),
            unit,
        }
    }

    /// The angle, expressed as the given unit.
    pub fn as_unit(self, unit: Unit) -> f64 {
        let value_as_radian = self.value / self.unit.units_per_canonical();
        unit.units_per_canonical() * value_as_radian
    }
}

impl From<RawAngle> for Angle {
    fn from(raw: RawAngle) -> Self {
        Self::new(raw.value, raw.unit)
    }
}

/// The sum of the angle and a difference, wrapped back onto the circle.
impl Add<AngleDelta> for Angle {
    type Output = Self;

    fn add(self, delta: AngleDelta) -> Self {
        let sum = self.as_unit(Unit::Radian) + delta.as_unit(Unit::Radian);
        Self::new(sum, Unit::Radian)
    }
}

/// The angle less a difference, wrapped back onto the circle.
impl Sub<AngleDelta> for Angle {
    type Output = Self;

    fn sub(self, delta: AngleDelta) -> Self {
        self + (-delta)
    }
}

/// The difference between two angles: `Angle - Angle -> AngleDelta`.
impl Sub for Angle {
    type Output = AngleDelta;

    fn sub(self, other: Self) -> AngleDelta {
        let difference = self.as_unit(Unit::Radian) - other.as_unit(Unit::Radian);
        AngleDelta::new(difference, Unit::Radian)
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.as_unit(Unit::Radian) == other.as_unit(Unit::Radian)
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_unit(Unit::Radian)
            .partial_cmp(&other.as_unit(Unit::Radian))
    }
}

/// Hashes the radian magnitude. The usual caution around a hash of a
/// floating point number applies.
impl Hash for Angle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hashable_bits(self.as_unit(Unit::Radian)));
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbreviation())
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({}, {})", self.value, self.unit.name())
    }
}

/// The difference between two angles.
///
/// Always in the range [−π, π) radians; magnitudes outside the range are
/// mapped into it, so a three-quarter turn one way is a quarter turn the
/// other.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(from = "RawAngle")]
pub struct AngleDelta {
    value: f64,
    unit: Unit,
}

impl AngleDelta {
    /// Create a new angle difference, wrapped into the half-open half
    /// circle.
    pub fn new(value: f64, unit: Unit) -> Self {
        Self {
            value: wrap_to_half_circle(value, unit),
            unit,
        }
    }

    /// The difference, expressed as the given unit.
    pub fn as_unit(self, unit: Unit) -> f64 {
        let value_as_radian = self.value / self.unit.units_per_canonical();
        unit.units_per_canonical() * value_as_radian
    }

    /// The floored ratio between two differences.
    pub fn div_floor(self, other: Self) -> f64 {
        let (quotient, _) = self.div_rem(other);
        quotient
    }

    /// The floored quotient and remainder of the ratio between two
    /// differences, in radians.
    pub fn div_rem(self, other: Self) -> (f64, f64) {
        div_rem(self.as_unit(Unit::Radian), other.as_unit(Unit::Radian))
    }
}

impl From<RawAngle> for AngleDelta {
    fn from(raw: RawAngle) -> Self {
        Self::new(raw.value, raw.unit)
    }
}

impl Add for AngleDelta {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let sum = self.as_unit(Unit::Radian) + other.as_unit(Unit::Radian);
        Self::new(sum, Unit::Radian)
    }
}

impl Sub for AngleDelta {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

/// The inverse of the difference. Negating −π wraps back to −π, the other
/// end of the range being open.
impl Neg for AngleDelta {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

/// A difference scaled by a value, wrapped back into range.
impl Mul<f64> for AngleDelta {
    type Output = Self;

    fn mul(self, value: f64) -> Self {
        Self::new(self.value * value, self.unit)
    }
}

/// A difference scaled by a value, wrapped back into range.
impl Mul<AngleDelta> for f64 {
    type Output = AngleDelta;

    fn mul(self, delta: AngleDelta) -> AngleDelta {
        delta * self
    }
}

/// A difference scaled by the inverse of a value.
impl Div<f64> for AngleDelta {
    type Output = Self;

    fn div(self, value: f64) -> Self {
        Self::new(self.value / value, self.unit)
    }
}

/// The dimensionless ratio between two differences. Division by a zero
/// difference is not guarded.
impl Div for AngleDelta {
    type Output = f64;

    fn div(self, other: Self) -> f64 {
        self.as_unit(Unit::Radian) / other.as_unit(Unit::Radian)
    }
}

/// The remainder of the ratio between two differences, in radians.
impl Rem for AngleDelta {
    type Output = f64;

    fn rem(self, other: Self) -> f64 {
        let (_, remainder) = self.div_rem(other);
        remainder
    }
}

impl PartialEq for AngleDelta {
    fn eq(&self, other: &Self) -> bool {
        self.as_unit(Unit::Radian) == other.as_unit(Unit::Radian)
    }
}

impl PartialOrd for AngleDelta {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_unit(Unit::Radian)
            .partial_cmp(&other.as_unit(Unit::Radian))
    }
}

/// Hashes the radian magnitude, so equal differences hash equally.
impl Hash for AngleDelta {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hashable_bits(self.as_unit(Unit::Radian)));
    }
}

impl fmt::Display for AngleDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbreviation())
    }
}

impl fmt::Debug for AngleDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AngleDelta({}, {})", self.value, self.unit.name())
    }
}

/// An angle of zero.
pub const ZERO: Angle = Angle {
    value: 0.0,
    unit: Unit::Radian,
};

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_angle_within_range_is_kept() {
        let angle = Angle::new(185.0, Unit::Degree);
        assert_relative_eq!(185.0, angle.as_unit(Unit::Degree), epsilon = 1e-9);
    }

    #[test]
    fn test_angle_wraps_above() {
        let angle = Angle::new(2.5 * PI, Unit::Radian);
        assert_relative_eq!(0.5 * PI, angle.as_unit(Unit::Radian), epsilon = 1e-9);

        let revolutions = Angle::new(4.0, Unit::Revolution);
        assert_relative_eq!(0.0, revolutions.as_unit(Unit::Revolution), epsilon = 1e-9);
    }

    #[test]
    fn test_angle_wraps_below() {
        let angle = Angle::new(-0.5 * PI, Unit::Radian);
        assert_relative_eq!(1.5 * PI, angle.as_unit(Unit::Radian), epsilon = 1e-9);

        let angle = Angle::new(-3.0 * PI, Unit::Radian);
        assert_relative_eq!(PI, angle.as_unit(Unit::Radian), epsilon = 1e-9);
    }

    #[test]
    fn test_angle_unit_conversions() {
        let angle = Angle::new(PI, Unit::Radian);
        assert_relative_eq!(180.0, angle.as_unit(Unit::Degree), epsilon = 1e-9);
        assert_relative_eq!(0.5, angle.as_unit(Unit::Revolution), epsilon = 1e-9);
    }

    #[test]
    fn test_angle_delta_wraps_into_half_circle() {
        let delta = AngleDelta::new(3.0 * PI, Unit::Radian);
        assert_relative_eq!(-PI, delta.as_unit(Unit::Radian), epsilon = 1e-9);

        let delta = AngleDelta::new(-40.0, Unit::Degree);
        assert_relative_eq!(-40.0, delta.as_unit(Unit::Degree), epsilon = 1e-9);

        let delta = AngleDelta::new(3.75, Unit::Revolution);
        assert_relative_eq!(-0.25, delta.as_unit(Unit::Revolution), epsilon = 1e-9);
    }

    #[test]
    fn test_angle_plus_delta_wraps() {
        let angle = Angle::new(1.75 * PI, Unit::Radian);
        let delta = AngleDelta::new(0.5 * PI, Unit::Radian);
        assert_relative_eq!(0.25 * PI, (angle + delta).as_unit(Unit::Radian), epsilon = 1e-9);
    }

    #[test]
    fn test_angle_minus_angle_is_delta() {
        let first = Angle::new(0.25 * PI, Unit::Radian);
        let second = Angle::new(1.75 * PI, Unit::Radian);
        // The short way round: half a pi forwards, not 1.5 pi back.
        let delta = first - second;
        assert_relative_eq!(0.5 * PI, delta.as_unit(Unit::Radian), epsilon = 1e-9);
    }

    #[test]
    fn test_angle_minus_delta() {
        let angle = Angle::new(0.25 * PI, Unit::Radian);
        let delta = AngleDelta::new(0.5 * PI, Unit::Radian);
        assert_relative_eq!(1.75 * PI, (angle - delta).as_unit(Unit::Radian), epsilon = 1e-9);
    }

    #[test]
    fn test_delta_negation_wraps_at_open_end() {
        let delta = AngleDelta::new(-PI, Unit::Radian);
        assert_relative_eq!(-PI, (-delta).as_unit(Unit::Radian), epsilon = 1e-9);
    }

    #[test]
    fn test_delta_scaling_wraps() {
        let delta = AngleDelta::new(0.5 * PI, Unit::Radian);
        assert_relative_eq!(-PI, (delta * 2.0).as_unit(Unit::Radian), epsilon = 1e-9);
        assert_relative_eq!(0.25 * PI, (delta / 2.0).as_unit(Unit::Radian), epsilon = 1e-9);
    }

    #[test]
    fn test_delta_ratio() {
        let first = AngleDelta::new(0.5 * PI, Unit::Radian);
        let second = AngleDelta::new(45.0, Unit::Degree);
        assert_relative_eq!(2.0, first / second, epsilon = 1e-9);
    }

    #[test]
    fn test_equal_angles_modulo_full_turns() {
        let wrapped = Angle::new(4.25, Unit::Revolution);
        let plain = Angle::new(0.25, Unit::Revolution);
        assert_eq!(wrapped, plain);
    }

    #[test]
    fn test_equal_angles_across_units() {
        let degrees = Angle::new(180.0, Unit::Degree);
        let radians = Angle::new(PI, Unit::Radian);
        assert_relative_eq!(
            degrees.as_unit(Unit::Radian),
            radians.as_unit(Unit::Radian),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_constant() {
        assert_relative_eq!(0.0, ZERO.as_unit(Unit::Degree), epsilon = 1e-9);
    }

    #[test]
    fn test_string_representations() {
        let angle = Angle::new(90.0, Unit::Degree);
        assert_eq!("90 deg", angle.to_string());
        assert_eq!("Angle(90, degree)", format!("{angle:?}"));

        let delta = AngleDelta::new(-0.25, Unit::Revolution);
        assert_eq!("-0.25 rev", delta.to_string());
        assert_eq!("AngleDelta(-0.25, revolution)", format!("{delta:?}"));
    }

    #[test]
    fn test_serde_re_wraps_on_the_way_in() {
        let decoded: Angle = serde_json::from_str(r#"{"value":540.0,"unit":"Degree"}"#).unwrap();
        assert_relative_eq!(180.0, decoded.as_unit(Unit::Degree), epsilon = 1e-9);
    }
}
