//! Flow rates: the amount of matter that flows in a certain amount of
//! time.

use mensura_core::Rate;
pub use mensura_core::ZeroTimeIntervalDivisionError;

use crate::{mass, time, volume};

/// The mass of material that flows in a certain amount of time.
pub type MassFlowRate = Rate<mass::Unit, time::Unit, 1>;

/// The volume of a gas or liquid that flows in a certain amount of time.
///
/// `VolumetricFlowRate::from_quantities` builds one from a change in volume
/// over an interval of time, rejecting a zero interval with
/// [`ZeroTimeIntervalDivisionError`].
pub type VolumetricFlowRate = Rate<volume::Unit, time::Unit, 1>;
