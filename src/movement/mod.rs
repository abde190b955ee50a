//! Movement domain: locomotion state, input intent and ground sensing.

mod components;
mod motion;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Facing, GameLayer, GroundSensor, MotionState, Player};
pub use motion::{
    HorizontalControl, INPUT_DEAD_ZONE, MotionOutcome, compute_velocity, resolve_motion,
};
pub use resources::{Acceleration, InputIntent, MovementTuning};

pub(crate) use systems::{clear_input_edges, read_input};

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::movement::systems::detect_ground;

/// Keyboard sampling into the shared `InputIntent` resource.
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputIntent>()
            .add_systems(Update, read_input);
    }
}

/// Ground contact from avian2d ray casts. Requires `PhysicsPlugins`.
pub struct GroundProbePlugin;

impl Plugin for GroundProbePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, detect_ground.in_set(SimulationSet::Sense));
    }
}
