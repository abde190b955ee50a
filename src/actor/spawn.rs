//! Actor domain: spawn helpers for the player actor.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::actor::{ActorConfig, PlatformerActor};
use crate::content::ConfigError;
use crate::movement::{GameLayer, GroundSensor, Player};

/// Player collider size in world units
pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.6);

/// Simulation components only: the actor, its ground contact, position and
/// velocity. Enough for headless runs where the driver reports ground contact.
pub fn actor_bundle(
    config: ActorConfig,
    spawn_point: Vec2,
) -> Result<impl Bundle, ConfigError> {
    let actor = PlatformerActor::new(config, spawn_point)?;

    Ok((
        actor,
        GroundSensor::default(),
        Transform::from_xyz(spawn_point.x, spawn_point.y, 0.0),
        LinearVelocity::default(),
    ))
}

/// Everything a player entity needs, positioned at `spawn_point`.
pub fn player_bundle(
    config: ActorConfig,
    spawn_point: Vec2,
) -> Result<impl Bundle, ConfigError> {
    Ok((
        Player,
        actor_bundle(config, spawn_point)?,
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            Friction::new(0.0),
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Hazard, GameLayer::Sensor],
            ),
        ),
    ))
}
