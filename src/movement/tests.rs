//! Movement domain: unit tests for coyote time, jump buffering and facing.

use bevy::prelude::Vec2;

use super::{
    Acceleration, Facing, HorizontalControl, InputIntent, MotionState, MovementTuning,
    compute_velocity, resolve_motion,
};

const DT: f32 = 1.0 / 60.0;

fn tuning() -> MovementTuning {
    MovementTuning {
        move_speed: 8.0,
        jump_force: 12.0,
        coyote_time: 0.1,
        jump_buffer_time: 0.1,
        jump_cut_multiplier: None,
        acceleration: None,
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

/// Run one tick and report whether a jump executed.
fn tick(
    state: &mut MotionState,
    input: InputIntent,
    grounded: bool,
    tuning: &MovementTuning,
) -> bool {
    let outcome = resolve_motion(state, &input, grounded, DT, tuning, HorizontalControl::Input);
    *state = outcome.state;
    outcome.jumped
}

// -----------------------------------------------------------------------------
// Coyote time
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_tick_refills_coyote_timer() {
    let tuning = tuning();
    let starts = [
        MotionState::default(),
        MotionState {
            coyote_timer: 0.03,
            ..Default::default()
        },
        MotionState {
            coyote_timer: 0.1,
            velocity: Vec2::new(3.0, -2.0),
            ..Default::default()
        },
    ];

    for start in starts {
        let (_, next) = compute_velocity(&start, &InputIntent::idle(), true, DT, &tuning);
        assert_eq!(next.coyote_timer, tuning.coyote_time);
    }
}

#[test]
fn test_coyote_timer_drains_and_floors_at_zero() {
    let tuning = tuning();
    let mut state = MotionState::default();

    tick(&mut state, InputIntent::idle(), true, &tuning);
    tick(&mut state, InputIntent::idle(), false, &tuning);
    assert!(approx(state.coyote_timer, 0.1 - DT));

    let mut previous = state.coyote_timer;
    for _ in 0..20 {
        tick(&mut state, InputIntent::idle(), false, &tuning);
        assert!(state.coyote_timer <= previous);
        assert!(state.coyote_timer >= 0.0);
        previous = state.coyote_timer;
    }
    assert_eq!(state.coyote_timer, 0.0);
}

#[test]
fn test_jump_within_coyote_time_after_leaving_ground() {
    let tuning = tuning();
    let mut state = MotionState::default();

    tick(&mut state, InputIntent::idle(), true, &tuning);
    for _ in 0..3 {
        assert!(!tick(&mut state, InputIntent::idle(), false, &tuning));
    }

    // 4 airborne ticks total (~0.067s) < 0.1s coyote window
    assert!(tick(&mut state, InputIntent::jump(), false, &tuning));
    assert_eq!(state.velocity.y, tuning.jump_force);
}

#[test]
fn test_no_jump_after_coyote_time_expires() {
    let tuning = tuning();
    let mut state = MotionState::default();

    tick(&mut state, InputIntent::idle(), true, &tuning);
    for _ in 0..10 {
        tick(&mut state, InputIntent::idle(), false, &tuning);
    }

    assert!(!tick(&mut state, InputIntent::jump(), false, &tuning));
    assert_eq!(state.velocity.y, 0.0);
    // The press is still buffered for a later landing
    assert_eq!(state.jump_buffer_timer, tuning.jump_buffer_time);
}

// -----------------------------------------------------------------------------
// Jump buffering
// -----------------------------------------------------------------------------

#[test]
fn test_buffered_press_jumps_on_landing() {
    let tuning = tuning();
    let mut state = MotionState::default();

    assert!(!tick(&mut state, InputIntent::jump(), false, &tuning));
    for _ in 0..4 {
        assert!(!tick(&mut state, InputIntent::idle(), false, &tuning));
    }

    assert!(tick(&mut state, InputIntent::idle(), true, &tuning));
    assert_eq!(state.velocity.y, tuning.jump_force);
}

#[test]
fn test_buffered_press_expires_before_landing() {
    let tuning = tuning();
    let mut state = MotionState::default();

    tick(&mut state, InputIntent::jump(), false, &tuning);
    for _ in 0..10 {
        tick(&mut state, InputIntent::idle(), false, &tuning);
    }

    assert!(!tick(&mut state, InputIntent::idle(), true, &tuning));
    assert_eq!(state.velocity.y, 0.0);
}

#[test]
fn test_jump_consumes_both_timers() {
    let tuning = tuning();
    let state = MotionState {
        coyote_timer: 0.1,
        jump_buffer_timer: 0.1,
        ..Default::default()
    };

    let (velocity, next) = compute_velocity(&state, &InputIntent::jump(), true, DT, &tuning);

    assert_eq!(velocity.y, tuning.jump_force);
    assert_eq!(next.coyote_timer, 0.0);
    assert_eq!(next.jump_buffer_timer, 0.0);
}

#[test]
fn test_one_press_yields_exactly_one_jump() {
    let tuning = tuning();
    let mut state = MotionState::default();

    assert!(tick(&mut state, InputIntent::jump(), true, &tuning));

    // Still grounded (e.g. ceiling bonk) and still holding: no second jump
    let mut jumps = 0;
    for _ in 0..10 {
        if tick(&mut state, InputIntent::idle().holding_jump(), true, &tuning) {
            jumps += 1;
        }
    }
    assert_eq!(jumps, 0);
}

#[test]
fn test_jump_overrides_vertical_velocity() {
    let tuning = tuning();
    let state = MotionState {
        velocity: Vec2::new(0.0, -7.5),
        ..Default::default()
    };

    let (velocity, _) = compute_velocity(&state, &InputIntent::jump(), true, DT, &tuning);
    assert_eq!(velocity.y, tuning.jump_force);
}

// -----------------------------------------------------------------------------
// Horizontal and facing
// -----------------------------------------------------------------------------

#[test]
fn test_zero_input_stops_horizontal_in_one_tick() {
    let tuning = tuning();
    let state = MotionState {
        velocity: Vec2::new(8.0, 0.0),
        ..Default::default()
    };

    let (velocity, _) = compute_velocity(&state, &InputIntent::idle(), true, DT, &tuning);
    assert_eq!(velocity.x, 0.0);
}

#[test]
fn test_horizontal_input_is_clamped() {
    let tuning = tuning();
    let state = MotionState::default();

    let (right, _) = compute_velocity(&state, &InputIntent::moving(3.0), true, DT, &tuning);
    let (left, _) = compute_velocity(&state, &InputIntent::moving(-7.0), true, DT, &tuning);
    let (nan, _) = compute_velocity(&state, &InputIntent::moving(f32::NAN), true, DT, &tuning);

    assert_eq!(right.x, 8.0);
    assert_eq!(left.x, -8.0);
    assert_eq!(nan.x, 0.0);
}

#[test]
fn test_facing_is_sticky_on_zero_input() {
    let tuning = tuning();
    let mut state = MotionState::facing(Facing::Left);

    for i in 0..10 {
        let horizontal = if i % 2 == 0 { 1.0 } else { 0.0 };
        tick(&mut state, InputIntent::moving(horizontal), true, &tuning);
        assert_eq!(state.facing, Facing::Right);
    }

    tick(&mut state, InputIntent::moving(-1.0), true, &tuning);
    for _ in 0..5 {
        tick(&mut state, InputIntent::idle(), true, &tuning);
        assert_eq!(state.facing, Facing::Left);
    }
}

#[test]
fn test_dead_zone_input_does_not_turn() {
    let tuning = tuning();
    let mut state = MotionState::facing(Facing::Right);

    tick(&mut state, InputIntent::moving(-0.05), true, &tuning);
    assert_eq!(state.facing, Facing::Right);
}

#[test]
fn test_locked_control_keeps_horizontal_and_facing() {
    let tuning = tuning();
    let state = MotionState {
        velocity: Vec2::new(-3.0, 0.0),
        facing: Facing::Right,
        ..Default::default()
    };

    let outcome = resolve_motion(
        &state,
        &InputIntent::moving(1.0),
        true,
        DT,
        &tuning,
        HorizontalControl::Locked,
    );

    assert_eq!(outcome.velocity.x, -3.0);
    assert_eq!(outcome.state.facing, Facing::Right);
}

#[test]
fn test_acceleration_ramps_toward_target() {
    let tuning = MovementTuning {
        acceleration: Some(Acceleration {
            accel: 60.0,
            decel: 40.0,
        }),
        ..tuning()
    };
    let mut state = MotionState::default();

    let step = |state: &mut MotionState, input: InputIntent| {
        let outcome = resolve_motion(state, &input, true, 0.1, &tuning, HorizontalControl::Input);
        *state = outcome.state;
        outcome.velocity.x
    };

    assert!(approx(step(&mut state, InputIntent::moving(1.0)), 6.0));
    assert!(approx(step(&mut state, InputIntent::moving(1.0)), 8.0));
    assert!(approx(step(&mut state, InputIntent::idle()), 4.0));
    assert!(approx(step(&mut state, InputIntent::idle()), 0.0));
    assert!(approx(step(&mut state, InputIntent::idle()), 0.0));
}

// -----------------------------------------------------------------------------
// Variable jump height
// -----------------------------------------------------------------------------

#[test]
fn test_jump_cut_applies_once_per_release() {
    let tuning = MovementTuning {
        jump_cut_multiplier: Some(0.5),
        ..tuning()
    };
    let mut state = MotionState::default();

    assert!(tick(&mut state, InputIntent::jump(), true, &tuning));
    tick(&mut state, InputIntent::idle().holding_jump(), false, &tuning);
    assert_eq!(state.velocity.y, 12.0);

    tick(&mut state, InputIntent::idle(), false, &tuning);
    assert_eq!(state.velocity.y, 6.0);

    tick(&mut state, InputIntent::idle(), false, &tuning);
    assert_eq!(state.velocity.y, 6.0);
    assert!(!state.jump_cut_armed);
}

#[test]
fn test_jump_cut_skips_the_jump_tick() {
    let tuning = MovementTuning {
        jump_cut_multiplier: Some(0.5),
        ..tuning()
    };
    let tap = InputIntent {
        jump_pressed: true,
        jump_held: false,
        ..Default::default()
    };

    let (velocity, next) = compute_velocity(&MotionState::default(), &tap, true, DT, &tuning);
    assert_eq!(velocity.y, 12.0);
    assert!(next.jump_cut_armed);
}

#[test]
fn test_jump_cut_disarms_after_apex() {
    let tuning = MovementTuning {
        jump_cut_multiplier: Some(0.5),
        ..tuning()
    };
    let mut state = MotionState::default();

    tick(&mut state, InputIntent::jump(), true, &tuning);
    // Gravity collaborator brings the body past the apex
    state.velocity.y = -1.0;
    tick(&mut state, InputIntent::idle().holding_jump(), false, &tuning);
    assert!(!state.jump_cut_armed);

    state.velocity.y = 4.0;
    tick(&mut state, InputIntent::idle(), false, &tuning);
    assert_eq!(state.velocity.y, 4.0);
}

// -----------------------------------------------------------------------------
// Degenerate ticks and reach
// -----------------------------------------------------------------------------

#[test]
fn test_non_positive_dt_is_a_no_op() {
    let tuning = tuning();
    let state = MotionState {
        velocity: Vec2::new(2.0, 1.0),
        coyote_timer: 0.05,
        jump_buffer_timer: 0.04,
        facing: Facing::Left,
        jump_cut_armed: false,
    };

    for dt in [0.0, -0.016, f32::NAN] {
        let (velocity, next) = compute_velocity(&state, &InputIntent::jump(), true, dt, &tuning);
        assert_eq!(velocity, state.velocity);
        assert_eq!(next, state);
    }
}

#[test]
fn test_reach_figures() {
    let tuning = tuning();

    assert!(approx(tuning.single_jump_height(30.0), 2.4));
    assert!(approx(tuning.max_jump_distance(30.0), 6.4));
    assert_eq!(tuning.single_jump_height(0.0), 0.0);
    assert_eq!(tuning.max_jump_distance(-1.0), 0.0);
}
