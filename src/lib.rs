//! WWIII platformer simulation.
//!
//! Deterministic motion and combat for 2D platformer actors: coyote time,
//! jump buffering, knockback, invulnerability and hit-stun windows, and
//! instant respawn. The pure step lives in [`actor::PlatformerActor`]; the
//! plugins wire it into a Bevy app on a fixed step driven by [`core::SimClock`].

pub mod actor;
pub mod collectibles;
pub mod combat;
pub mod content;
pub mod core;
pub mod layout;
pub mod movement;
pub mod replay;

use bevy::ecs::message::{Message, Messages};
use bevy::prelude::*;

use crate::actor::PlatformerPlugin;
use crate::collectibles::{CollectiblesPlugin, PickupCollected};
use crate::combat::{ActorEventMessage, CheckpointReached, DamageMessage};
use crate::movement::MovementPlugin;

/// Input sampling, the actor step and pickups. Add `movement::GroundProbePlugin`
/// alongside avian2d's `PhysicsPlugins` for ray-cast ground contact.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((MovementPlugin, PlatformerPlugin, CollectiblesPlugin));
    }
}

/// Bevy app without rendering or physics, for drivers and tests that feed
/// ground contact and inputs themselves.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, SimulationPlugin));
    app
}

/// Run exactly one fixed simulation tick, independent of wall-clock time.
///
/// The main schedule never runs here, so message buffers are swapped after
/// the tick. Messages survive one extra tick, as they would under `App::run`.
pub fn step_fixed(app: &mut App) {
    let world = app.world_mut();
    world.run_schedule(FixedUpdate);

    swap_message_buffers::<DamageMessage>(world);
    swap_message_buffers::<CheckpointReached>(world);
    swap_message_buffers::<ActorEventMessage>(world);
    swap_message_buffers::<PickupCollected>(world);
}

fn swap_message_buffers<M: Message>(world: &mut World) {
    if let Some(mut messages) = world.get_resource_mut::<Messages<M>>() {
        messages.update();
    }
}
