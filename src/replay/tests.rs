//! Replay domain: unit tests for scripts and traces.

use bevy::prelude::Vec2;

use super::*;
use crate::actor::{ActorConfig, PlatformerActor};
use crate::combat::{ActorEvent, CombatTuning, DamageRequest};
use crate::content::ConfigError;
use crate::movement::{InputIntent, MovementTuning};

const DT: f32 = 0.02;

fn actor() -> PlatformerActor {
    let config = ActorConfig {
        movement: MovementTuning {
            move_speed: 8.0,
            jump_force: 12.0,
            coyote_time: 0.1,
            jump_buffer_time: 0.1,
            jump_cut_multiplier: None,
            acceleration: None,
        },
        combat: CombatTuning {
            max_health: 3,
            ..Default::default()
        },
    };
    PlatformerActor::new(config, Vec2::ZERO).unwrap()
}

fn run_and_gun() -> InputScript {
    let mut frames = vec![InputFrame::new(
        DT,
        InputIntent::jump().with_horizontal(1.0),
        true,
    )];
    for _ in 0..5 {
        frames.push(InputFrame::new(DT, InputIntent::moving(1.0).holding_jump(), false));
    }
    frames.push(
        InputFrame::new(DT, InputIntent::moving(1.0), false)
            .with_vertical_velocity(-2.0)
            .with_damage(
                DamageRequest::new(1)
                    .with_knockback(Vec2::new(-4.0, 3.0))
                    .with_hit_stun(0.05)
                    .with_invulnerability(0.5),
            ),
    );
    for _ in 0..5 {
        frames.push(InputFrame::new(DT, InputIntent::moving(1.0), true));
    }
    InputScript { frames }
}

#[test]
fn test_first_two_ticks() {
    let script = InputScript {
        frames: vec![
            InputFrame::new(DT, InputIntent::jump().with_horizontal(1.0), true),
            InputFrame::new(DT, InputIntent::idle(), false),
        ],
    };

    let trace = run_script(&mut actor(), &script);

    assert_eq!(trace[0].velocity, Vec2::new(8.0, 12.0));
    assert_eq!(trace[1].velocity.x, 0.0);
    assert_eq!(trace[1].tick, 1);
    assert!((trace[1].sim_time - 2.0 * DT).abs() < 1e-6);
}

#[test]
fn test_same_script_same_trace() {
    let script = run_and_gun();

    let first = trace_to_json(&run_script(&mut actor(), &script)).unwrap();
    let second = trace_to_json(&run_script(&mut actor(), &script)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_hit_lands_on_its_frame() {
    let trace = run_script(&mut actor(), &run_and_gun());

    let hit = &trace[6];
    assert_eq!(hit.health, 2);
    assert_eq!(hit.velocity, Vec2::new(-4.0, 1.0));
    assert_eq!(
        hit.events,
        vec![
            ActorEvent::HealthChanged { current: 2, max: 3 },
            ActorEvent::KnockbackApplied {
                impulse: Vec2::new(-4.0, 3.0)
            },
        ]
    );

    // Stunned for the next couple of frames, then input takes over again
    assert_eq!(trace[7].velocity.x, -4.0);
    assert_eq!(trace[10].velocity.x, 8.0);
}

#[test]
fn test_script_from_json() {
    let contents = r#"{
        "frames": [
            { "dt": 0.02, "input": { "horizontal": 1.0, "jump_pressed": true }, "grounded": true },
            { "dt": 0.02 },
            { "dt": 0.0, "damage": { "amount": 1 } },
            { "dt": 0.02, "checkpoint": [4.0, 2.0] }
        ]
    }"#;

    let script = InputScript::from_json(contents, "script.json").unwrap();

    assert_eq!(script.frames.len(), 4);
    assert_eq!(script.frames[0].input.horizontal, 1.0);
    assert!(!script.frames[0].input.jump_held);
    assert!(!script.frames[1].grounded);
    assert_eq!(script.frames[2].damage, Some(DamageRequest::new(1)));
    assert_eq!(script.frames[3].checkpoint, Some(Vec2::new(4.0, 2.0)));
    assert!((script.duration() - 0.06).abs() < 1e-6);
}

#[test]
fn test_bad_script_is_a_parse_error() {
    let err = InputScript::from_json("{\"frames\": [{}]}", "script.json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_stalled_frame_defers_events() {
    let script = InputScript {
        frames: vec![
            InputFrame::new(0.0, InputIntent::idle(), true).with_damage(DamageRequest::new(1)),
            InputFrame::new(DT, InputIntent::idle(), true),
        ],
    };

    let trace = run_script(&mut actor(), &script);

    assert!(trace[0].events.is_empty());
    assert_eq!(trace[0].health, 2);
    assert_eq!(trace[0].sim_time, 0.0);
    assert_eq!(trace[1].events.len(), 2);
}

#[test]
fn test_death_cycle_trace() {
    let mut frames = Vec::new();
    for _ in 0..3 {
        frames.push(
            InputFrame::new(DT, InputIntent::idle(), true)
                .with_damage(DamageRequest::new(1).with_invulnerability(0.1)),
        );
        for _ in 0..5 {
            frames.push(InputFrame::new(DT, InputIntent::idle(), true));
        }
    }
    frames[12] = frames[12].with_checkpoint(Vec2::new(9.0, 1.0));

    let trace = run_script(&mut actor(), &InputScript { frames });
    let deaths: Vec<_> = trace
        .iter()
        .filter(|r| r.events.contains(&ActorEvent::Died))
        .map(|r| r.tick)
        .collect();

    assert_eq!(deaths, vec![12]);
    assert_eq!(trace[12].health, 3);
    assert!(trace[12].events.contains(&ActorEvent::Respawned {
        point: Vec2::new(9.0, 1.0)
    }));
}
