//! Collectibles domain: coins, level collectibles and power-up pickups.

mod counters;
mod pickups;


pub use counters::{CoinCounter, CollectibleCounter};
pub use pickups::{Pickup, PickupCollected, PickupOutcome, PickupTargets, collect_pickup};

use bevy::prelude::*;

use crate::collectibles::pickups::process_pickups;
use crate::core::SimulationSet;

pub struct CollectiblesPlugin;

impl Plugin for CollectiblesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CoinCounter>()
            .init_resource::<CollectibleCounter>()
            .add_message::<PickupCollected>()
            .add_systems(FixedUpdate, process_pickups.in_set(SimulationSet::React));
    }
}
