//! Linear motion: displacement and its successive time derivatives.

use mensura_core::Rate;

use crate::{length, time};

/// The difference between the final and initial position of a trajectory.
///
/// A displacement is a length difference by another name; the two are the
/// same type.
pub type Displacement = length::LengthDelta;

/// The speed in a certain direction of linear motion.
pub type Velocity = Rate<length::Unit, time::Unit, 1>;

/// The rate of change of the velocity of an object with respect to time.
pub type Acceleration = Rate<length::Unit, time::Unit, 2>;

/// The rate of change of the acceleration of an object with respect to
/// time.
pub type Jerk = Rate<length::Unit, time::Unit, 3>;
