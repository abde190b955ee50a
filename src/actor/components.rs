//! Actor domain: per-entity intent for actors not driven by the shared input.

use bevy::prelude::*;

use crate::movement::InputIntent;

/// Intent for an actor driven by something other than the local player
/// (scripted hazards, AI, replays). Actors without it read the `InputIntent`
/// resource.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct ActorIntent(pub InputIntent);
