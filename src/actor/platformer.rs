//! Actor domain: one platformer actor composing locomotion and combat behind a single step.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::{ActorEvent, CombatState, CombatTuning, DamageRequest};
use crate::content::{ConfigError, validate_actor_config};
use crate::movement::{
    Facing, HorizontalControl, InputIntent, MotionState, MovementTuning, resolve_motion,
};

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    pub movement: MovementTuning,
    pub combat: CombatTuning,
}

impl ActorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let errors = validate_actor_config(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}

/// Result of one `advance` call.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutput {
    /// Velocity the physics collaborator should write into the body
    pub velocity: Vec2,
    /// Everything emitted since the previous step, in emission order
    pub events: Vec<ActorEvent>,
}

/// Player (or player-like) actor.
///
/// Damage, heals and checkpoints may arrive at any time between steps; their
/// events are queued and handed out by the next `advance`. Within a tick,
/// damage is resolved before motion: a pending knockback owns the horizontal
/// component for that tick while jump resolution still owns the vertical one.
#[derive(Component, Debug, Clone)]
pub struct PlatformerActor {
    config: ActorConfig,
    motion: MotionState,
    combat: CombatState,
    pending_knockback: Option<Vec2>,
    pending_events: Vec<ActorEvent>,
}

impl PlatformerActor {
    pub fn new(config: ActorConfig, spawn_point: Vec2) -> Result<Self, ConfigError> {
        config.validate()?;
        let combat = CombatState::from_tuning(&config.combat, spawn_point)?;

        Ok(Self {
            config,
            motion: MotionState::default(),
            combat,
            pending_knockback: None,
            pending_events: Vec::new(),
        })
    }

    pub fn config(&self) -> &ActorConfig {
        &self.config
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn combat(&self) -> &CombatState {
        &self.combat
    }

    pub fn velocity(&self) -> Vec2 {
        self.motion.velocity
    }

    pub fn facing(&self) -> Facing {
        self.motion.facing
    }

    pub fn health(&self) -> u32 {
        self.combat.current_health()
    }

    pub fn pending_knockback(&self) -> Option<Vec2> {
        self.pending_knockback
    }

    /// Write back the velocity the physics body actually ended the frame with
    /// (gravity, collisions) so the next step starts from it.
    pub fn sync_velocity(&mut self, velocity: Vec2) {
        self.motion.velocity = velocity;
    }

    /// Apply a hit at `sim_time`. Returns false when the hit was ignored.
    pub fn apply_damage(&mut self, request: &DamageRequest, sim_time: f32) -> bool {
        let events = self.combat.apply_damage(request, sim_time);
        if events.is_empty() {
            return false;
        }

        for event in &events {
            match *event {
                ActorEvent::KnockbackApplied { impulse } => {
                    self.pending_knockback = Some(impulse);
                }
                ActorEvent::Respawned { .. } => {
                    self.motion.reset();
                }
                ActorEvent::HealthChanged { .. } | ActorEvent::Died => {}
            }
        }

        self.pending_events.extend(events);
        true
    }

    /// Returns false when already at full health.
    pub fn heal(&mut self, amount: u32) -> bool {
        match self.combat.heal(amount) {
            Some(event) => {
                self.pending_events.push(event);
                true
            }
            None => false,
        }
    }

    pub fn set_respawn_point(&mut self, point: Vec2) {
        self.combat.set_respawn_point(point);
    }

    /// Invulnerability power-up lasting `seconds` from `sim_time`.
    pub fn grant_invulnerability(&mut self, seconds: f32, sim_time: f32) {
        self.combat.grant_invulnerability(sim_time + seconds.max(0.0));
    }

    /// Hand out queued events without stepping.
    pub fn take_events(&mut self) -> Vec<ActorEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Advance one tick.
    ///
    /// A tick with `dt <= 0` (or NaN) changes nothing: the current velocity is
    /// returned and queued events stay queued.
    pub fn advance(
        &mut self,
        dt: f32,
        input: &InputIntent,
        grounded: bool,
        sim_time: f32,
    ) -> StepOutput {
        if dt.is_nan() || dt <= 0.0 {
            return StepOutput {
                velocity: self.motion.velocity,
                events: Vec::new(),
            };
        }

        let mut control = if self.combat.is_hit_stunned(sim_time) {
            HorizontalControl::Locked
        } else {
            HorizontalControl::Input
        };

        // Zero then impulse: knockback replaces horizontal velocity outright
        if let Some(impulse) = self.pending_knockback.take() {
            self.motion.velocity.x = impulse.x;
            self.motion.velocity.y += impulse.y;
            self.motion.jump_cut_armed = false;
            control = HorizontalControl::Locked;
            debug!(
                "Knockback ({:.2}, {:.2}) -> velocity ({:.2}, {:.2})",
                impulse.x, impulse.y, self.motion.velocity.x, self.motion.velocity.y
            );
        }

        let outcome = resolve_motion(
            &self.motion,
            input,
            grounded,
            dt,
            &self.config.movement,
            control,
        );
        self.motion = outcome.state;

        StepOutput {
            velocity: outcome.velocity,
            events: self.take_events(),
        }
    }
}
