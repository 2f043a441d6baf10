//! Angular motion: angular displacement and its successive time
//! derivatives.
//!
//! Unlike [`Angle`](crate::angle::Angle), an angular displacement is not
//! wrapped: three full turns of displacement stay three full turns.

use mensura_core::{Delta, Rate};

use crate::{angle, time};

/// The difference between the final and initial position of an angular
/// trajectory.
pub type Displacement = Delta<angle::Unit>;

/// The speed in a certain direction of angular motion.
pub type Velocity = Rate<angle::Unit, time::Unit, 1>;

/// The rate of change of the angular velocity of an object with respect to
/// time.
pub type Acceleration = Rate<angle::Unit, time::Unit, 2>;

/// The rate of change of the angular acceleration of an object with
/// respect to time.
pub type Jerk = Rate<angle::Unit, time::Unit, 3>;
