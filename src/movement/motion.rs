//! Movement domain: per-tick horizontal, jump and facing resolution.

use bevy::prelude::*;

use crate::movement::{Acceleration, Facing, InputIntent, MotionState, MovementTuning};

/// Horizontal input below this magnitude neither moves facing nor counts as held.
pub const INPUT_DEAD_ZONE: f32 = 0.1;

/// Who owns the horizontal component this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalControl {
    /// Player input drives horizontal velocity and facing
    #[default]
    Input,
    /// Knockback or hit-stun owns horizontal velocity; input and facing are ignored
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionOutcome {
    pub velocity: Vec2,
    pub state: MotionState,
    pub jumped: bool,
}

/// Resolve one tick of locomotion under player control.
pub fn compute_velocity(
    current: &MotionState,
    input: &InputIntent,
    grounded: bool,
    dt: f32,
    tuning: &MovementTuning,
) -> (Vec2, MotionState) {
    let outcome = resolve_motion(
        current,
        input,
        grounded,
        dt,
        tuning,
        HorizontalControl::Input,
    );
    (outcome.velocity, outcome.state)
}

/// Resolve one tick of locomotion.
///
/// A tick with `dt <= 0` (or NaN) returns the current state untouched.
pub fn resolve_motion(
    current: &MotionState,
    input: &InputIntent,
    grounded: bool,
    dt: f32,
    tuning: &MovementTuning,
    control: HorizontalControl,
) -> MotionOutcome {
    if dt.is_nan() || dt <= 0.0 {
        return MotionOutcome {
            velocity: current.velocity,
            state: *current,
            jumped: false,
        };
    }

    let mut next = *current;
    let horizontal = input.clamped_horizontal();

    if control == HorizontalControl::Input {
        let target_vx = horizontal * tuning.move_speed;
        next.velocity.x = match tuning.acceleration {
            None => target_vx,
            Some(ramp) => ramp_toward(current.velocity.x, target_vx, horizontal, ramp, dt),
        };
    }

    // Coyote time: full while grounded, drains once airborne
    if grounded {
        next.coyote_timer = tuning.coyote_time;
    } else {
        next.coyote_timer = (next.coyote_timer - dt).max(0.0);
    }

    // Jump buffer: full on press, drains otherwise
    if input.jump_pressed {
        next.jump_buffer_timer = tuning.jump_buffer_time;
    } else {
        next.jump_buffer_timer = (next.jump_buffer_timer - dt).max(0.0);
    }

    let jumped = next.can_jump();
    if jumped {
        next.velocity.y = tuning.jump_force;
        next.coyote_timer = 0.0;
        next.jump_buffer_timer = 0.0;
        next.jump_cut_armed = true;
        debug!(
            "Jump: grounded={}, velocity=({:.2}, {:.2})",
            grounded, next.velocity.x, next.velocity.y
        );
    } else if next.jump_cut_armed {
        if next.velocity.y <= 0.0 {
            // Apex passed without a release
            next.jump_cut_armed = false;
        } else if !input.jump_held {
            if let Some(multiplier) = tuning.jump_cut_multiplier {
                next.velocity.y *= multiplier;
            }
            next.jump_cut_armed = false;
        }
    }

    if control == HorizontalControl::Input && horizontal.abs() > INPUT_DEAD_ZONE {
        next.facing = if horizontal > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        };
    }

    MotionOutcome {
        velocity: next.velocity,
        state: next,
        jumped,
    }
}

fn ramp_toward(vx: f32, target_vx: f32, horizontal: f32, ramp: Acceleration, dt: f32) -> f32 {
    if horizontal.abs() > INPUT_DEAD_ZONE {
        let step = ramp.accel * dt;
        if vx < target_vx {
            (vx + step).min(target_vx)
        } else {
            (vx - step).max(target_vx)
        }
    } else {
        let step = ramp.decel * dt;
        if vx > 0.0 {
            (vx - step).max(0.0)
        } else {
            (vx + step).min(0.0)
        }
    }
}
