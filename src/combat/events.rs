//! Combat domain: damage requests and the notifications an actor emits.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One hit from a hazard, enemy or projectile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageRequest {
    pub amount: u32,
    pub knockback: Vec2,
    pub hit_stun: f32,
    pub invulnerability: f32,
}

impl DamageRequest {
    pub fn new(amount: u32) -> Self {
        Self {
            amount,
            ..default()
        }
    }

    pub fn with_knockback(mut self, knockback: Vec2) -> Self {
        self.knockback = knockback;
        self
    }

    pub fn with_hit_stun(mut self, seconds: f32) -> Self {
        self.hit_stun = seconds;
        self
    }

    pub fn with_invulnerability(mut self, seconds: f32) -> Self {
        self.invulnerability = seconds;
        self
    }
}

/// Notifications for rendering, audio and HUD collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActorEvent {
    HealthChanged { current: u32, max: u32 },
    Died,
    Respawned { point: Vec2 },
    KnockbackApplied { impulse: Vec2 },
}

/// A hit aimed at a specific actor entity
#[derive(Debug)]
pub struct DamageMessage {
    pub target: Entity,
    pub request: DamageRequest,
}

impl Message for DamageMessage {}

/// Checkpoint touched: future respawns happen at `point`
#[derive(Debug)]
pub struct CheckpointReached {
    pub target: Entity,
    pub point: Vec2,
}

impl Message for CheckpointReached {}

/// An `ActorEvent` tagged with the entity that emitted it
#[derive(Debug, Clone)]
pub struct ActorEventMessage {
    pub entity: Entity,
    pub event: ActorEvent,
}

impl Message for ActorEventMessage {}
