//! Actor domain: platformer actor composition and fixed-step plugin wiring.

mod components;
mod platformer;
mod spawn;
mod systems;


pub use components::ActorIntent;
pub use platformer::{ActorConfig, PlatformerActor, StepOutput};
pub use spawn::{PLAYER_SIZE, actor_bundle, player_bundle};

use bevy::prelude::*;

use crate::actor::systems::{
    advance_actors, route_checkpoints, route_damage, sync_body_velocity,
};
use crate::combat::{ActorEventMessage, CheckpointReached, DamageMessage};
use crate::core::{SIMULATION_HZ, SimClock, SimulationSet, tick_clock};
use crate::movement::{InputIntent, clear_input_edges};

pub struct PlatformerPlugin;

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        // Physics and the actor step share one fixed rate
        app.insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            .init_resource::<SimClock>()
            .init_resource::<InputIntent>()
            .add_message::<DamageMessage>()
            .add_message::<CheckpointReached>()
            .add_message::<ActorEventMessage>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Sense,
                    SimulationSet::Step,
                    SimulationSet::React,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    tick_clock,
                    sync_body_velocity,
                    route_checkpoints,
                    route_damage,
                    advance_actors,
                    clear_input_edges,
                )
                    .chain()
                    .in_set(SimulationSet::Step),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            FixedUpdate,
            systems::log_actor_events.in_set(SimulationSet::React),
        );
    }
}
