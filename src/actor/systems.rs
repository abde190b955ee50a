//! Actor domain: fixed-step systems routing collaborator messages into actors.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::actor::{ActorIntent, PlatformerActor};
use crate::combat::{ActorEvent, ActorEventMessage, CheckpointReached, DamageMessage};
use crate::core::SimClock;
use crate::movement::{GroundSensor, InputIntent};

/// Pull the velocity the physics body ended the last frame with into each actor.
/// Runs before damage so a respawn's motion reset is not overwritten.
pub(crate) fn sync_body_velocity(
    mut actors: Query<(&mut PlatformerActor, &LinearVelocity)>,
) {
    for (mut actor, velocity) in &mut actors {
        actor.sync_velocity(velocity.0);
    }
}

pub(crate) fn route_checkpoints(
    mut checkpoints: MessageReader<CheckpointReached>,
    mut actors: Query<&mut PlatformerActor>,
) {
    for message in checkpoints.read() {
        if let Ok(mut actor) = actors.get_mut(message.target) {
            actor.set_respawn_point(message.point);
            debug!(
                "{:?} respawn point set to ({:.2}, {:.2})",
                message.target, message.point.x, message.point.y
            );
        }
    }
}

/// Damage resolves before motion so a hit this tick shapes this tick's velocity.
pub(crate) fn route_damage(
    clock: Res<SimClock>,
    mut damage: MessageReader<DamageMessage>,
    mut actors: Query<&mut PlatformerActor>,
) {
    for message in damage.read() {
        let Ok(mut actor) = actors.get_mut(message.target) else {
            continue;
        };
        if !actor.apply_damage(&message.request, clock.now()) {
            debug!("{:?} ignored damage while invulnerable", message.target);
        }
    }
}

pub(crate) fn advance_actors(
    clock: Res<SimClock>,
    shared_input: Res<InputIntent>,
    mut actor_events: MessageWriter<ActorEventMessage>,
    mut actors: Query<(
        Entity,
        &mut PlatformerActor,
        &GroundSensor,
        &mut LinearVelocity,
        &mut Transform,
        Option<&ActorIntent>,
    )>,
) {
    for (entity, mut actor, sensor, mut velocity, mut transform, intent) in &mut actors {
        let input = intent.map_or(*shared_input, |intent| intent.0);

        let output = actor.advance(clock.step, &input, sensor.grounded, clock.now());
        velocity.0 = output.velocity;

        for event in output.events {
            if let ActorEvent::Respawned { point } = event {
                transform.translation.x = point.x;
                transform.translation.y = point.y;
            }
            actor_events.write(ActorEventMessage { entity, event });
        }
    }
}

#[cfg(feature = "dev-tools")]
pub(crate) fn log_actor_events(mut actor_events: MessageReader<ActorEventMessage>) {
    for message in actor_events.read() {
        info!("{:?}: {:?}", message.entity, message.event);
    }
}
