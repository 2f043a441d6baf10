//! Mensura - Unit-Aware Physical Quantity Types
//!
//! A catalogue of small immutable value types for physical quantities, each
//! parameterized by a unit and supporting unit-aware arithmetic, comparison,
//! and conversion. Conversion is always mediated through each kind's
//! canonical unit.
//!
//! Kinds:
//! - Length (m, cm, mm, yd, ft, in)
//! - Mass (kg, g, mg, lb, oz)
//! - Time (s, min, h, ms, us)
//! - Temperature (K, C, F) — the affine kind
//! - Area (m², down to in²)
//! - Volume (m³, L, mL, uL)
//! - Pressure (Pa, kPa, bar, mbar, PSI, atm, mmHg)
//! - Angle (rad, deg, rev) — wrapped onto the unit circle
//! - Current (A, mA, uA) and Voltage (V, mV, uV) — signed
//! - Linear and angular motion (displacement, velocity, acceleration, jerk)
//! - Flow rates (mass and volumetric)
//!
//! Quantities with a physical floor (`Mass`, `Length`, ...) are paired with
//! signed difference types (`MassDelta`, `LengthDelta`, ...): subtracting
//! two absolutes yields a delta, and shifting an absolute by a delta yields
//! an absolute again, failing if the result would dip below the floor.
//!
//! ```
//! use mensura::{Mass, MassDelta, MassUnit};
//!
//! # fn main() -> Result<(), mensura::NegativeMassValueError> {
//! let before = Mass::new(80.0, MassUnit::Kilogram)?;
//! let after = Mass::new(78.5, MassUnit::Kilogram)?;
//!
//! let lost: MassDelta = before - after;
//! assert_eq!(1_500.0, lost.as_unit(MassUnit::Gram));
//! assert_eq!(before, after.try_add(lost)?);
//! # Ok(())
//! # }
//! ```

pub mod angle;
pub mod angular_motion;
pub mod area;
pub mod current;
pub mod flow_rate;
mod helpers;
pub mod length;
pub mod linear_motion;
pub mod mass;
pub mod pressure;
pub mod temperature;
pub mod time;
pub mod voltage;
pub mod volume;

pub use mensura_core::{
    Absolute, Delta, NegativeValueError, Rate, RateUnit, UnitOfMeasure,
    ZeroTimeIntervalDivisionError,
};

pub use angle::Unit as AngleUnit;
pub use angle::{Angle, AngleDelta};
pub use area::Unit as AreaUnit;
pub use area::{Area, AreaDelta, NegativeAreaValueError};
pub use current::Current;
pub use current::Unit as CurrentUnit;
pub use flow_rate::{MassFlowRate, VolumetricFlowRate};
pub use length::Unit as LengthUnit;
pub use length::{Length, LengthDelta, NegativeLengthValueError};
pub use mass::Unit as MassUnit;
pub use mass::{Mass, MassDelta, NegativeMassValueError};
pub use pressure::Unit as PressureUnit;
pub use pressure::{NegativePressureValueError, Pressure, PressureDelta};
pub use temperature::Unit as TemperatureUnit;
pub use temperature::{BelowAbsoluteZeroError, Temperature, TemperatureDelta};
pub use time::Unit as TimeUnit;
pub use time::{NegativeTimeValueError, Time, TimeDelta};
pub use voltage::Unit as VoltageUnit;
pub use voltage::Voltage;
pub use volume::Unit as VolumeUnit;
pub use volume::{NegativeVolumeValueError, Volume, VolumeDelta};
