//! The per-kind unit contract.
//!
//! Every quantity kind (length, mass, time, ...) defines a closed enum of
//! unit tags and implements [`UnitOfMeasure`] for it. All conversion is
//! mediated through the kind's canonical unit: a unit is described entirely
//! by how many of it make up one canonical unit (the gradient of the
//! canonical-vs-unit graph). Keeping a single shared axis per kind keeps the
//! registry linear in the number of units rather than quadratic in pairs.

use std::fmt;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A ratio-scale unit tag: a member of one quantity kind's closed unit set.
///
/// Implementations are exhaustive `match`es over the enum, so adding a unit
/// variant without its metadata is a compile error rather than a runtime
/// lookup failure.
pub trait UnitOfMeasure:
    Copy + PartialEq + Eq + Hash + fmt::Debug + Serialize + DeserializeOwned
{
    /// Type name used by `Debug` output of the kind's absolute quantity,
    /// e.g. `"Mass"`.
    const KIND: &'static str;

    /// Type name used by `Debug` output of the kind's delta quantity,
    /// e.g. `"MassDelta"`.
    const DELTA_KIND: &'static str;

    /// The unit all conversions for this kind are mediated through.
    const CANONICAL: Self;

    /// The full name of the unit, e.g. `"kilogram"`.
    fn name(self) -> &'static str;

    /// The abbreviation of the unit, e.g. `"kg"`.
    fn abbreviation(self) -> &'static str;

    /// How many of this unit make up one canonical unit, e.g. 100 for
    /// centimetres per metre.
    fn units_per_canonical(self) -> f64;
}

/// Debug labels for rate quantities built over this numerator unit.
pub trait RateUnit: UnitOfMeasure {
    /// Type name of an `axes`-denominator rate over this numerator,
    /// e.g. `"Velocity"` for one time axis over a length unit.
    fn rate_kind(axes: usize) -> &'static str;
}
