//! Compound-rate quantities: a numerator axis over one or more denominator
//! axes, e.g. metres per second or cubic metres per second.
//!
//! A rate stores one magnitude plus an independent unit tag per axis.
//! Conversion composes the per-axis canonical ratios, with the denominator
//! ratios inverted relative to the numerator's: halving a denominator unit
//! doubles the rate. Rates carry no floor; the whole surface is signed, so
//! every operation is a plain operator.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::helpers::{div_floor, div_rem, hashable_bits};
use crate::scalar::Delta;
use crate::unit::{RateUnit, UnitOfMeasure};

/// Error returned when constructing a rate from quantities over a zero
/// interval, which would produce an infinite rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Time interval over which the quantity changes cannot be zero.")]
pub struct ZeroTimeIntervalDivisionError;

/// A quantity of numerator unit `U` per `N` denominator units `T`.
///
/// `N` is 1 for velocities and flow rates, 2 for accelerations and 3 for
/// jerks. The catalogue crates alias concrete combinations; this type is
/// not normally named directly.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(bound(
    serialize = "[T; N]: serde::Serialize",
    deserialize = "[T; N]: serde::Deserialize<'de>"
))]
pub struct Rate<U: UnitOfMeasure, T: UnitOfMeasure, const N: usize> {
    value: f64,
    unit: U,
    per: [T; N],
}

impl<U: UnitOfMeasure, T: UnitOfMeasure, const N: usize> Rate<U, T, N> {
    /// The magnitude in canonical numerator units per canonical denominator
    /// units. Denominator ratios invert: their units sit under the line.
    fn as_canonical(self) -> f64 {
        let mut to_canonical_factor = 1.0 / self.unit.units_per_canonical();
        for per in self.per {
            to_canonical_factor *= per.units_per_canonical();
        }
        to_canonical_factor * self.value
    }

    /// The magnitude, expressed as the given units.
    fn as_units(self, unit: U, per: [T; N]) -> f64 {
        let mut from_canonical_factor = unit.units_per_canonical();
        for per in per {
            from_canonical_factor /= per.units_per_canonical();
        }
        from_canonical_factor * self.as_canonical()
    }

    /// The rate in fully-canonical units, the form binary operators
    /// construct their results in.
    fn canonicalized(value: f64) -> Self {
        Self {
            value,
            unit: U::CANONICAL,
            per: [T::CANONICAL; N],
        }
    }

    /// The absolute version of the rate.
    pub fn abs(self) -> Self {
        Self {
            value: self.value.abs(),
            ..self
        }
    }

    /// The floored ratio between two rates.
    pub fn div_floor(self, other: Self) -> f64 {
        div_floor(self.as_canonical(), other.as_canonical())
    }

    /// The floored quotient and remainder of the ratio between two rates,
    /// in canonical units.
    pub fn div_rem(self, other: Self) -> (f64, f64) {
        div_rem(self.as_canonical(), other.as_canonical())
    }
}

impl<U: UnitOfMeasure, T: UnitOfMeasure> Rate<U, T, 1> {
    /// Create a new rate, e.g. `new(5.0, Metre, Second)` for 5 m/s.
    pub fn new(value: f64, unit: U, per: T) -> Self {
        Self {
            value,
            unit,
            per: [per],
        }
    }

    /// Construct a rate by dividing a change in quantity by the interval it
    /// happened over.
    ///
    /// This is the one place a zero divisor is intercepted rather than left
    /// to float semantics: an instantaneous change has no finite rate.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroTimeIntervalDivisionError`] if `interval` is zero in
    /// canonical units.
    pub fn from_quantities(
        amount: Delta<U>,
        interval: Delta<T>,
    ) -> Result<Self, ZeroTimeIntervalDivisionError> {
        let interval_as_canonical = interval.as_unit(T::CANONICAL);
        if interval_as_canonical == 0.0 {
            return Err(ZeroTimeIntervalDivisionError);
        }

        Ok(Self::new(
            amount.as_unit(U::CANONICAL) / interval_as_canonical,
            U::CANONICAL,
            T::CANONICAL,
        ))
    }

    /// The magnitude, expressed as the given units.
    pub fn as_unit(self, unit: U, per: T) -> f64 {
        self.as_units(unit, [per])
    }
}

impl<U: UnitOfMeasure, T: UnitOfMeasure> Rate<U, T, 2> {
    /// Create a new two-denominator rate, e.g. an acceleration.
    ///
    /// If the second denominator unit is not provided, the first is reused.
    pub fn new(value: f64, unit: U, first: T, second: Option<T>) -> Self {
        let second = second.unwrap_or(first);
        Self {
            value,
            unit,
            per: [first, second],
        }
    }

    /// The magnitude, expressed as the given units.
    ///
    /// If the second denominator unit is not provided, the first is reused.
    pub fn as_unit(self, unit: U, first: T, second: Option<T>) -> f64 {
        let second = second.unwrap_or(first);
        self.as_units(unit, [first, second])
    }
}

impl<U: UnitOfMeasure, T: UnitOfMeasure> Rate<U, T, 3> {
    /// Create a new three-denominator rate, e.g. a jerk.
    ///
    /// If the second denominator unit is not provided, the first is reused;
    /// if the third is not provided, the second is reused (or the first, if
    /// the second is also not provided).
    pub fn new(value: f64, unit: U, first: T, second: Option<T>, third: Option<T>) -> Self {
        let second = second.unwrap_or(first);
        let third = third.unwrap_or(second);
        Self {
            value,
            unit,
            per: [first, second, third],
        }
    }

    /// The magnitude, expressed as the given units, with the same trailing
    /// defaults as `new`.
    pub fn as_unit(self, unit: U, first: T, second: Option<T>, third: Option<T>) -> f64 {
        let second = second.unwrap_or(first);
        let third = third.unwrap_or(second);
        self.as_units(unit, [first, second, third])
    }
}

impl<U: UnitOfMeasure, T: UnitOfMeasure, const N: usize> Add for Rate<U, T, N> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::canonicalized(self.as_canonical() + other.as_canonical())
    }
}

impl<U: UnitOfMeasure, T: UnitOfMeasure, const N: usize> Sub for Rate<U, T, N> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::canonicalized(self.as_canonical() - other.as_canonical())
    }
}

impl<U: UnitOfMeasure, T: UnitOfMeasure, const N: usize> Neg for Rate<U, T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        -1.0 * self
    }
}

/// A rate scaled by a value.
impl<U: UnitOfMeasure, T: UnitOfMeasure, const N: usize> Mul<f64> for Rate<U, T, N> {
    type Output = Self;

    fn mul(self, value: f64) -> Self {
        Self {
            value: self.value * value,
            ..self
        }
    }
}

/// A rate scaled by a value.
impl<U: UnitOfMeasure, T: UnitOfMeasure, const N: usize> Mul<Rate<U, T, N>> for f64 {
    type Output = Rate<U, T, N>;

    fn mul(self, rate: Rate<U, T, N>) -> Rate<U, T, N> {
        rate * self
    }
}

/// A rate scaled by the inverse of a value.
impl<U: UnitOfMeasure, T: UnitOfMeasure, const N: usize> Div<f64> for Rate<U, T, N> {
    type Output = Self;

    fn div(self, value: f64) -> Self {
        (1.0 / value) * self
    }
}

/// The dimensionless ratio between two rates. Division by a zero rate is
/// not guarded; it yields the usual IEEE infinity or NaN.
impl<U: UnitOfMeasure, T: UnitOfMeasure, const N: usize> Div for Rate<U, T, N> {
    type Output = f64;

    fn div(self, other: Self) -> f64 {
        self.as_canonical() / other.as_canonical()
    }
}

/// The remainder of the ratio between two rates, in canonical units.
impl<U: UnitOfMeasure, T: UnitOfMeasure, const N: usize> Rem for Rate<U, T, N> {
    type Output = f64;

    fn rem(self, other: Self) -> f64 {
        let (_, remainder) = self.div_rem(other);
        remainder
    }
}

impl<U: UnitOfMeasure, T: UnitOfMeasure, const N: usize> PartialEq for Rate<U, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_canonical() == other.as_canonical()
    }
}

impl<U: UnitOfMeasure, T: UnitOfMeasure, const N: usize> PartialOrd for Rate<U, T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_canonical().partial_cmp(&other.as_canonical())
    }
}

/// Hashes the canonical magnitude, so equal rates hash equally.
impl<U: UnitOfMeasure, T: UnitOfMeasure, const N: usize> Hash for Rate<U, T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hashable_bits(self.as_canonical()));
    }
}

impl<U: UnitOfMeasure, T: UnitOfMeasure, const N: usize> fmt::Display for Rate<U, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbreviation())?;
        for per in self.per {
            write!(f, "/{}", per.abbreviation())?;
        }
        Ok(())
    }
}

impl<U: RateUnit, T: UnitOfMeasure, const N: usize> fmt::Debug for Rate<U, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {}", U::rate_kind(N), self.value, self.unit.name())?;
        for per in self.per {
            write!(f, ", {}", per.name())?;
        }
        write!(f, ")")
    }
}
