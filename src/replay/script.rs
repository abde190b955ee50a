//! Replay domain: recorded per-tick inputs and the traces they produce.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::actor::PlatformerActor;
use crate::combat::{ActorEvent, DamageRequest};
use crate::content::ConfigError;
use crate::movement::InputIntent;

/// Everything the outside world feeds the actor on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    pub dt: f32,
    #[serde(default)]
    pub input: InputIntent,
    #[serde(default)]
    pub grounded: bool,
    /// Body velocity.y after the physics step, written back before this tick
    #[serde(default)]
    pub vertical_velocity: Option<f32>,
    /// Hit received before this tick's motion
    #[serde(default)]
    pub damage: Option<DamageRequest>,
    /// Checkpoint touched before this tick
    #[serde(default)]
    pub checkpoint: Option<Vec2>,
}

impl InputFrame {
    pub fn new(dt: f32, input: InputIntent, grounded: bool) -> Self {
        Self {
            dt,
            input,
            grounded,
            vertical_velocity: None,
            damage: None,
            checkpoint: None,
        }
    }

    pub fn with_damage(mut self, damage: DamageRequest) -> Self {
        self.damage = Some(damage);
        self
    }

    pub fn with_checkpoint(mut self, point: Vec2) -> Self {
        self.checkpoint = Some(point);
        self
    }

    pub fn with_vertical_velocity(mut self, vy: f32) -> Self {
        self.vertical_velocity = Some(vy);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub frames: Vec<InputFrame>,
}

impl InputScript {
    pub fn from_json(contents: &str, file: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(|e| ConfigError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file_name = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            file: file_name.clone(),
            message: e.to_string(),
        })?;
        Self::from_json(&contents, &file_name)
    }

    /// Total simulated seconds, counting only ticks that advance time.
    pub fn duration(&self) -> f32 {
        self.frames.iter().map(|f| f.dt).filter(|dt| *dt > 0.0).sum()
    }
}

/// What one tick produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u64,
    pub sim_time: f32,
    pub velocity: Vec2,
    pub health: u32,
    pub events: Vec<ActorEvent>,
}

/// Run a script against `actor`, returning one record per frame.
///
/// Sim time advances by each frame's `dt` before the frame resolves; frames
/// with a non-positive `dt` do not move the clock.
pub fn run_script(actor: &mut PlatformerActor, script: &InputScript) -> Vec<TickRecord> {
    let mut elapsed = 0.0_f64;
    let mut records = Vec::with_capacity(script.frames.len());

    for (tick, frame) in script.frames.iter().enumerate() {
        // Same accumulation as `SimClock`, so app and direct runs agree
        if frame.dt > 0.0 {
            elapsed += f64::from(frame.dt);
        }
        let sim_time = elapsed as f32;

        if let Some(vy) = frame.vertical_velocity {
            let vx = actor.velocity().x;
            actor.sync_velocity(Vec2::new(vx, vy));
        }
        if let Some(point) = frame.checkpoint {
            actor.set_respawn_point(point);
        }
        if let Some(damage) = frame.damage {
            actor.apply_damage(&damage, sim_time);
        }

        let output = actor.advance(frame.dt, &frame.input, frame.grounded, sim_time);
        records.push(TickRecord {
            tick: tick as u64,
            sim_time,
            velocity: output.velocity,
            health: actor.health(),
            events: output.events,
        });
    }

    records
}

/// Pretty JSON for a trace, as written by the headless driver.
pub fn trace_to_json(records: &[TickRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
