//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Hazards and enemy hitboxes
    Hazard,
    /// Checkpoints and pickups - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Whether the actor is touching ground this tick.
///
/// Filled by the ground probe when physics is running, or written directly by
/// whoever drives the simulation.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GroundSensor {
    pub grounded: bool,
}

/// Locomotion state carried between ticks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    pub velocity: Vec2,
    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
    pub facing: Facing,
    /// Set when a jump executes; cleared when the early-release cut fires.
    pub jump_cut_armed: bool,
}

impl MotionState {
    pub fn facing(facing: Facing) -> Self {
        Self {
            facing,
            ..default()
        }
    }

    pub fn can_jump(&self) -> bool {
        self.coyote_timer > 0.0 && self.jump_buffer_timer > 0.0
    }

    /// Drop all motion, keep facing.
    pub fn reset(&mut self) {
        *self = Self::facing(self.facing);
    }
}
