//! Replay domain: feeding a script through a running app one fixed tick at a time.

use avian2d::prelude::LinearVelocity;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::actor::PlatformerActor;
use crate::combat::{ActorEventMessage, CheckpointReached, DamageMessage};
use crate::core::SimClock;
use crate::movement::{GroundSensor, InputIntent};
use crate::replay::{InputScript, TickRecord};

/// Drive `actor` through `script` inside `app`, stepping `FixedUpdate` once
/// per frame.
///
/// Each frame sets the clock step, shared input and ground contact, writes any
/// vertical velocity, checkpoint or damage for that frame, then steps. Actor
/// events are drained from the message queue into the frame's record.
pub fn drive_app(app: &mut App, actor: Entity, script: &InputScript) -> Vec<TickRecord> {
    let mut records = Vec::with_capacity(script.frames.len());

    for (tick, frame) in script.frames.iter().enumerate() {
        let world = app.world_mut();

        world.resource_mut::<SimClock>().step = frame.dt;
        *world.resource_mut::<InputIntent>() = frame.input;
        if let Some(mut sensor) = world.get_mut::<GroundSensor>(actor) {
            sensor.grounded = frame.grounded;
        }
        if let Some(vy) = frame.vertical_velocity {
            if let Some(mut velocity) = world.get_mut::<LinearVelocity>(actor) {
                velocity.0.y = vy;
            }
        }
        if let Some(point) = frame.checkpoint {
            world.write_message(CheckpointReached {
                target: actor,
                point,
            });
        }
        if let Some(request) = frame.damage {
            world.write_message(DamageMessage {
                target: actor,
                request,
            });
        }

        crate::step_fixed(app);

        let world = app.world_mut();
        let events = world
            .resource_mut::<Messages<ActorEventMessage>>()
            .drain()
            .filter(|message| message.entity == actor)
            .map(|message| message.event)
            .collect();
        let velocity = world
            .get::<LinearVelocity>(actor)
            .map(|v| v.0)
            .unwrap_or_default();
        let health = world
            .get::<PlatformerActor>(actor)
            .map(PlatformerActor::health)
            .unwrap_or_default();

        records.push(TickRecord {
            tick: tick as u64,
            sim_time: world.resource::<SimClock>().now(),
            velocity,
            health,
            events,
        });
    }

    records
}
