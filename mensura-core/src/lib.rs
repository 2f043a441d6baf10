//! Mensura Core - Quantity Machinery
//!
//! The generic building blocks the `mensura` catalogue is assembled from:
//!
//! - [`UnitOfMeasure`]: the per-kind unit contract (canonical unit, names,
//!   ratio to canonical)
//! - [`Absolute`] / [`Delta`]: scalar quantities with and without a zero
//!   floor, sharing one arithmetic contract
//! - [`Rate`]: compound quantities with denominator axes (velocities,
//!   accelerations, jerks, flow rates)
//!
//! Each quantity kind implements the unit contract once; all operator
//! semantics, conversion, comparison, hashing, and formatting live here.

mod helpers;
mod rate;
mod scalar;
mod unit;

pub use rate::{Rate, ZeroTimeIntervalDivisionError};
pub use scalar::{Absolute, Delta, NegativeValueError};
pub use unit::{RateUnit, UnitOfMeasure};
