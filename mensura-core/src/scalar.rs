//! Scalar quantities: the shared absolute/delta arithmetic contract.
//!
//! [`Absolute`] models quantities with a physical zero floor (a mass, a
//! length); [`Delta`] models the signed difference between two absolutes.
//! Both store the raw `(magnitude, unit)` pair as given and convert lazily;
//! binary operations convert both operands to the kind's canonical unit,
//! operate there, and build the result in the canonical unit, which makes
//! results independent of the operands' unit choices.
//!
//! Mixed arithmetic that can fall below the floor is exposed as
//! [`Absolute::try_add`] / [`Absolute::try_sub`]; everything that cannot
//! fail is a plain operator.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use serde::{Deserialize, Serialize};

use crate::helpers::{div_floor, div_rem, hashable_bits};
use crate::unit::UnitOfMeasure;

/// Wire shape of a scalar quantity; deserialization goes through it so the
/// floor invariant is re-checked on the way in.
#[derive(Deserialize)]
struct RawScalar<U> {
    value: f64,
    unit: U,
}

/// Error returned when an absolute quantity would fall below its zero floor.
#[derive(Clone, Copy, PartialEq)]
pub struct NegativeValueError<U> {
    value: f64,
    kind: PhantomData<U>,
}

impl<U: UnitOfMeasure> NegativeValueError<U> {
    pub(crate) fn new(value: f64) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    /// The offending magnitude, as passed by the caller.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl<U: UnitOfMeasure> fmt::Display for NegativeValueError<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} value [{}] cannot be negative.", U::KIND, self.value)
    }
}

impl<U: UnitOfMeasure> fmt::Debug for NegativeValueError<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NegativeValueError")
            .field("kind", &U::KIND)
            .field("value", &self.value)
            .finish()
    }
}

impl<U: UnitOfMeasure> std::error::Error for NegativeValueError<U> {}

/// A quantity with a natural zero floor, e.g. a mass or a length.
///
/// Absolutes support no scaling, negation, or absolute value; those only
/// make sense on [`Delta`].
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawScalar<U>")]
#[serde(bound(deserialize = "U: UnitOfMeasure"))]
pub struct Absolute<U: UnitOfMeasure> {
    value: f64,
    unit: U,
}

impl<U: UnitOfMeasure> Absolute<U> {
    /// Create a new absolute quantity.
    ///
    /// # Errors
    ///
    /// Returns [`NegativeValueError`] if the magnitude is below zero in the
    /// kind's canonical unit.
    pub fn new(value: f64, unit: U) -> Result<Self, NegativeValueError<U>> {
        let value_as_canonical = value / unit.units_per_canonical();
        if value_as_canonical < 0.0 {
            return Err(NegativeValueError::new(value));
        }

        Ok(Self { value, unit })
    }

    /// The zero quantity, expressed in the given unit.
    pub const fn zero(unit: U) -> Self {
        Self { value: 0.0, unit }
    }

    /// Create an absolute quantity in const context, for compile-time
    /// constants.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative — at compile time that surfaces as a
    /// build error. Registry ratios are positive, so a raw negative
    /// magnitude is below the floor regardless of the unit.
    pub const fn new_const(value: f64, unit: U) -> Self {
        if value < 0.0 {
            panic!("absolute quantity constant cannot be negative");
        }

        Self { value, unit }
    }

    /// The magnitude, expressed as the given unit.
    pub fn as_unit(self, unit: U) -> f64 {
        let value_as_canonical = self.value / self.unit.units_per_canonical();
        unit.units_per_canonical() * value_as_canonical
    }

    /// The sum of the quantity and a difference.
    ///
    /// # Errors
    ///
    /// Returns [`NegativeValueError`] if the sum falls below the floor.
    pub fn try_add(self, delta: Delta<U>) -> Result<Self, NegativeValueError<U>> {
        let sum = self.as_unit(U::CANONICAL) + delta.as_unit(U::CANONICAL);
        Self::new(sum, U::CANONICAL)
    }

    /// The quantity less a difference.
    ///
    /// # Errors
    ///
    /// Returns [`NegativeValueError`] if the result falls below the floor.
    pub fn try_sub(self, delta: Delta<U>) -> Result<Self, NegativeValueError<U>> {
        self.try_add(-delta)
    }
}

impl<U: UnitOfMeasure> TryFrom<RawScalar<U>> for Absolute<U> {
    type Error = NegativeValueError<U>;

    fn try_from(raw: RawScalar<U>) -> Result<Self, Self::Error> {
        Self::new(raw.value, raw.unit)
    }
}

/// The difference between two absolutes: `Absolute - Absolute -> Delta`.
impl<U: UnitOfMeasure> Sub for Absolute<U> {
    type Output = Delta<U>;

    fn sub(self, other: Self) -> Delta<U> {
        let difference = self.as_unit(U::CANONICAL) - other.as_unit(U::CANONICAL);
        Delta::new(difference, U::CANONICAL)
    }
}

impl<U: UnitOfMeasure> PartialEq for Absolute<U> {
    fn eq(&self, other: &Self) -> bool {
        self.as_unit(U::CANONICAL) == other.as_unit(U::CANONICAL)
    }
}

impl<U: UnitOfMeasure> PartialOrd for Absolute<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_unit(U::CANONICAL)
            .partial_cmp(&other.as_unit(U::CANONICAL))
    }
}

/// Hashes the canonical magnitude, so equal quantities hash equally. The
/// usual caution around hashing floating point values applies.
impl<U: UnitOfMeasure> Hash for Absolute<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hashable_bits(self.as_unit(U::CANONICAL)));
    }
}

impl<U: UnitOfMeasure> fmt::Display for Absolute<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbreviation())
    }
}

impl<U: UnitOfMeasure> fmt::Debug for Absolute<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", U::KIND, self.value, self.unit.name())
    }
}

/// The signed difference between two absolute quantities of one kind.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(bound(deserialize = "U: UnitOfMeasure"))]
pub struct Delta<U: UnitOfMeasure> {
    value: f64,
    unit: U,
}

impl<U: UnitOfMeasure> Delta<U> {
    /// Create a new difference. Any sign is permitted.
    pub const fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// The zero difference, expressed in the given unit.
    pub const fn zero(unit: U) -> Self {
        Self { value: 0.0, unit }
    }

    /// The magnitude, expressed as the given unit.
    pub fn as_unit(self, unit: U) -> f64 {
        let value_as_canonical = self.value / self.unit.units_per_canonical();
        unit.units_per_canonical() * value_as_canonical
    }

    /// The absolute version of the difference.
    pub fn abs(self) -> Self {
        Self::new(self.value.abs(), self.unit)
    }

    /// The floored ratio between two differences.
    pub fn div_floor(self, other: Self) -> f64 {
        div_floor(self.as_unit(U::CANONICAL), other.as_unit(U::CANONICAL))
    }

    /// The floored quotient and remainder of the ratio between two
    /// differences, in canonical units.
    pub fn div_rem(self, other: Self) -> (f64, f64) {
        div_rem(self.as_unit(U::CANONICAL), other.as_unit(U::CANONICAL))
    }
}

impl<U: UnitOfMeasure> Add for Delta<U> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let sum = self.as_unit(U::CANONICAL) + other.as_unit(U::CANONICAL);
        Self::new(sum, U::CANONICAL)
    }
}

impl<U: UnitOfMeasure> Sub for Delta<U> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl<U: UnitOfMeasure> Neg for Delta<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

/// A difference scaled by a value.
impl<U: UnitOfMeasure> Mul<f64> for Delta<U> {
    type Output = Self;

    fn mul(self, value: f64) -> Self {
        Self::new(self.value * value, self.unit)
    }
}

/// A difference scaled by a value.
impl<U: UnitOfMeasure> Mul<Delta<U>> for f64 {
    type Output = Delta<U>;

    fn mul(self, delta: Delta<U>) -> Delta<U> {
        delta * self
    }
}

/// A difference scaled by the inverse of a value.
impl<U: UnitOfMeasure> Div<f64> for Delta<U> {
    type Output = Self;

    fn div(self, value: f64) -> Self {
        Self::new(self.value / value, self.unit)
    }
}

/// The dimensionless ratio between two differences.
///
/// Division by a zero difference is not guarded; it yields the usual IEEE
/// infinity or NaN.
impl<U: UnitOfMeasure> Div for Delta<U> {
    type Output = f64;

    fn div(self, other: Self) -> f64 {
        self.as_unit(U::CANONICAL) / other.as_unit(U::CANONICAL)
    }
}

/// The remainder of the ratio between two differences, in canonical units.
impl<U: UnitOfMeasure> Rem for Delta<U> {
    type Output = f64;

    fn rem(self, other: Self) -> f64 {
        let (_, remainder) = self.div_rem(other);
        remainder
    }
}

impl<U: UnitOfMeasure> PartialEq for Delta<U> {
    fn eq(&self, other: &Self) -> bool {
        self.as_unit(U::CANONICAL) == other.as_unit(U::CANONICAL)
    }
}

impl<U: UnitOfMeasure> PartialOrd for Delta<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_unit(U::CANONICAL)
            .partial_cmp(&other.as_unit(U::CANONICAL))
    }
}

/// Hashes the canonical magnitude, so equal differences hash equally.
impl<U: UnitOfMeasure> Hash for Delta<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hashable_bits(self.as_unit(U::CANONICAL)));
    }
}

impl<U: UnitOfMeasure> fmt::Display for Delta<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbreviation())
    }
}

impl<U: UnitOfMeasure> fmt::Debug for Delta<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", U::DELTA_KIND, self.value, self.unit.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use approx::assert_relative_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    enum TestUnit {
        Base,
        Centi,
    }

    impl UnitOfMeasure for TestUnit {
        const KIND: &'static str = "Test";
        const DELTA_KIND: &'static str = "TestDelta";
        const CANONICAL: Self = TestUnit::Base;

        fn name(self) -> &'static str {
            match self {
                TestUnit::Base => "base",
                TestUnit::Centi => "centibase",
            }
        }

        fn abbreviation(self) -> &'static str {
            match self {
                TestUnit::Base => "b",
                TestUnit::Centi => "cb",
            }
        }

        fn units_per_canonical(self) -> f64 {
            match self {
                TestUnit::Base => 1.0,
                TestUnit::Centi => 100.0,
            }
        }
    }

    fn hash_of(value: impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_create_absolute() {
        assert!(Absolute::new(1.0, TestUnit::Base).is_ok());
    }

    #[test]
    fn test_create_negative_absolute_fails() {
        let error = Absolute::new(-1.0, TestUnit::Base).unwrap_err();
        assert_eq!(-1.0, error.value());
        assert_eq!("Test value [-1] cannot be negative.", error.to_string());
    }

    #[test]
    fn test_as_unit_converts_through_canonical() {
        let quantity = Absolute::new(2.0, TestUnit::Base).unwrap();
        assert_relative_eq!(200.0, quantity.as_unit(TestUnit::Centi));

        let quantity = Absolute::new(50.0, TestUnit::Centi).unwrap();
        assert_relative_eq!(0.5, quantity.as_unit(TestUnit::Base));
    }

    #[test]
    fn test_equality_is_unit_independent() {
        let metres = Absolute::new(1.0, TestUnit::Base).unwrap();
        let centis = Absolute::new(100.0, TestUnit::Centi).unwrap();
        assert_eq!(metres, centis);
        assert_eq!(hash_of(metres), hash_of(centis));
    }

    #[test]
    fn test_compare_absolutes() {
        let smaller = Absolute::new(99.0, TestUnit::Centi).unwrap();
        let larger = Absolute::new(1.0, TestUnit::Base).unwrap();
        assert!(smaller < larger);
        assert!(smaller <= larger);
        assert!(larger > smaller);
        assert!(larger >= smaller);
        assert!(smaller != larger);
    }

    #[test]
    fn test_absolute_minus_absolute_is_delta() {
        let first = Absolute::new(3.0, TestUnit::Base).unwrap();
        let second = Absolute::new(2.0, TestUnit::Base).unwrap();
        let delta = first - second;
        assert_relative_eq!(1.0, delta.as_unit(TestUnit::Base));

        // Closure: second + (first - second) == first
        assert_eq!(first, second.try_add(first - second).unwrap());
    }

    #[test]
    fn test_try_add_below_floor_fails() {
        let quantity = Absolute::new(1.0, TestUnit::Base).unwrap();
        let delta = Delta::new(-2.0, TestUnit::Base);
        let error = quantity.try_add(delta).unwrap_err();
        assert_eq!(-1.0, error.value());
    }

    #[test]
    fn test_try_sub_delta_round_trips() {
        let quantity = Absolute::new(5.0, TestUnit::Base).unwrap();
        let delta = Delta::new(2.0, TestUnit::Base);
        let shifted = quantity.try_add(delta).unwrap();
        assert_eq!(quantity, shifted.try_sub(delta).unwrap());
    }

    #[test]
    fn test_zero() {
        const ZERO: Absolute<TestUnit> = Absolute::zero(TestUnit::Base);
        assert_relative_eq!(0.0, ZERO.as_unit(TestUnit::Centi));
    }

    #[test]
    fn test_delta_addition_and_subtraction() {
        let first = Delta::new(3.0, TestUnit::Base);
        let second = Delta::new(2.0, TestUnit::Base);
        assert_relative_eq!(5.0, (first + second).as_unit(TestUnit::Base));
        assert_relative_eq!(1.0, (first - second).as_unit(TestUnit::Base));
    }

    #[test]
    fn test_delta_scaling() {
        let delta = Delta::new(2.0, TestUnit::Base);
        assert_relative_eq!(6.0, (delta * 3.0).as_unit(TestUnit::Base));
        assert_relative_eq!(6.0, (3.0 * delta).as_unit(TestUnit::Base));
        assert_relative_eq!(1.0, (delta / 2.0).as_unit(TestUnit::Base));
    }

    #[test]
    fn test_delta_negation_and_abs() {
        let delta = Delta::new(2.0, TestUnit::Base);
        assert_relative_eq!(-2.0, (-delta).as_unit(TestUnit::Base));
        assert_relative_eq!(2.0, (-delta).abs().as_unit(TestUnit::Base));
    }

    #[test]
    fn test_delta_ratio() {
        let first = Delta::new(1.0, TestUnit::Base);
        let second = Delta::new(50.0, TestUnit::Centi);
        assert_relative_eq!(2.0, first / second);
    }

    #[test]
    fn test_delta_floored_division() {
        let first = Delta::new(7.0, TestUnit::Base);
        let second = Delta::new(2.0, TestUnit::Base);
        assert_relative_eq!(3.0, first.div_floor(second));
        assert_relative_eq!(1.0, first % second);

        let (quotient, remainder) = first.div_rem(second);
        assert_relative_eq!(3.0, quotient);
        assert_relative_eq!(1.0, remainder);
    }

    #[test]
    fn test_delta_floored_division_negative_dividend() {
        let first = Delta::new(-5.0, TestUnit::Base);
        let second = Delta::new(2.0, TestUnit::Base);
        let (quotient, remainder) = first.div_rem(second);
        assert_relative_eq!(-3.0, quotient);
        assert_relative_eq!(1.0, remainder);
    }

    #[test]
    fn test_delta_division_by_zero_is_unguarded() {
        let first = Delta::new(1.0, TestUnit::Base);
        let zero = Delta::zero(TestUnit::Base);
        assert!((first / zero).is_infinite());
    }

    #[test]
    fn test_display_uses_raw_value_and_abbreviation() {
        let quantity = Absolute::new(50.0, TestUnit::Centi).unwrap();
        assert_eq!("50 cb", quantity.to_string());

        let delta = Delta::new(-1.5, TestUnit::Base);
        assert_eq!("-1.5 b", delta.to_string());
    }

    #[test]
    fn test_debug_uses_kind_and_unit_name() {
        let quantity = Absolute::new(1.0, TestUnit::Base).unwrap();
        assert_eq!("Test(1, base)", format!("{quantity:?}"));

        let delta = Delta::new(1.0, TestUnit::Centi);
        assert_eq!("TestDelta(1, centibase)", format!("{delta:?}"));
    }

    #[test]
    fn test_serde_round_trip() {
        let quantity = Absolute::new(2.5, TestUnit::Centi).unwrap();
        let encoded = serde_json::to_string(&quantity).unwrap();
        let decoded: Absolute<TestUnit> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(quantity, decoded);
    }

    #[test]
    fn test_serde_rejects_below_floor_payload() {
        let result: Result<Absolute<TestUnit>, _> =
            serde_json::from_str(r#"{"value":-1.0,"unit":"Base"}"#);
        assert!(result.is_err());
    }
}
