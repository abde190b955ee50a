//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Optional horizontal ramp. Without it horizontal velocity snaps to the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Acceleration {
    /// Units per second squared while input is held
    pub accel: f32,
    /// Units per second squared while input is released
    pub decel: f32,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_force: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Multiplier applied once to upward velocity when jump is released early.
    /// `None` disables variable jump height.
    pub jump_cut_multiplier: Option<f32>,
    pub acceleration: Option<Acceleration>,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            jump_force: 12.0,
            coyote_time: 0.12,
            jump_buffer_time: 0.12,
            jump_cut_multiplier: Some(0.5),
            acceleration: None,
        }
    }
}

impl MovementTuning {
    /// Apex height of a single jump under constant `gravity`: h = v^2 / (2g)
    pub fn single_jump_height(&self, gravity: f32) -> f32 {
        if gravity <= 0.0 {
            return 0.0;
        }
        self.jump_force * self.jump_force / (2.0 * gravity)
    }

    /// Horizontal distance covered at full speed while airborne for a full
    /// jump arc that lands back at take-off height.
    pub fn max_jump_distance(&self, gravity: f32) -> f32 {
        if gravity <= 0.0 {
            return 0.0;
        }
        let airtime = 2.0 * self.jump_force / gravity;
        self.move_speed * airtime
    }
}

/// One tick of player intent, produced by whatever reads the input device.
///
/// `jump_pressed` is edge-triggered: true only on the tick the button went down.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputIntent {
    pub horizontal: f32,
    pub jump_pressed: bool,
    pub jump_held: bool,
}

impl InputIntent {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(horizontal: f32) -> Self {
        Self {
            horizontal,
            ..default()
        }
    }

    /// Jump pressed this tick (and therefore held).
    pub fn jump() -> Self {
        Self {
            jump_pressed: true,
            jump_held: true,
            ..default()
        }
    }

    pub fn with_horizontal(mut self, horizontal: f32) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn holding_jump(mut self) -> Self {
        self.jump_held = true;
        self
    }

    /// Horizontal axis clamped to [-1, 1]; NaN and infinities read as no input.
    pub fn clamped_horizontal(&self) -> f32 {
        if self.horizontal.is_finite() {
            self.horizontal.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}
