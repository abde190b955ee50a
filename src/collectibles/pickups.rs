//! Collectibles domain: pickup kinds and how they apply to counters and actors.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actor::PlatformerActor;
use crate::collectibles::{CoinCounter, CollectibleCounter};
use crate::core::SimClock;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Pickup {
    Coin { value: u32 },
    Collectible,
    Health { amount: u32 },
    /// Temporary damage immunity power-up
    Invulnerability { seconds: f32 },
}

/// What a pickup changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupOutcome {
    CoinsAdded(u32),
    CollectibleRecorded,
    Healed,
    /// Health pickup at full health; left untouched
    AlreadyFull,
    Invulnerable,
}

/// Everything a pickup may touch, borrowed for the duration of one pickup.
pub struct PickupTargets<'a> {
    pub coins: &'a mut CoinCounter,
    pub collectibles: &'a mut CollectibleCounter,
    pub actor: &'a mut PlatformerActor,
}

pub fn collect_pickup(
    pickup: Pickup,
    targets: &mut PickupTargets<'_>,
    sim_time: f32,
) -> PickupOutcome {
    match pickup {
        Pickup::Coin { value } => {
            targets.coins.add(value);
            PickupOutcome::CoinsAdded(value)
        }
        Pickup::Collectible => {
            targets.collectibles.record();
            PickupOutcome::CollectibleRecorded
        }
        Pickup::Health { amount } => {
            if targets.actor.heal(amount) {
                PickupOutcome::Healed
            } else {
                PickupOutcome::AlreadyFull
            }
        }
        Pickup::Invulnerability { seconds } => {
            targets.actor.grant_invulnerability(seconds, sim_time);
            PickupOutcome::Invulnerable
        }
    }
}

/// Event fired when an actor touches a pickup
#[derive(Debug)]
pub struct PickupCollected {
    pub collector: Entity,
    pub pickup: Pickup,
}

impl Message for PickupCollected {}

pub(crate) fn process_pickups(
    clock: Res<SimClock>,
    mut pickups: MessageReader<PickupCollected>,
    mut coins: ResMut<CoinCounter>,
    mut collectibles: ResMut<CollectibleCounter>,
    mut actors: Query<&mut PlatformerActor>,
) {
    for message in pickups.read() {
        let Ok(mut actor) = actors.get_mut(message.collector) else {
            continue;
        };

        let mut targets = PickupTargets {
            coins: &mut coins,
            collectibles: &mut collectibles,
            actor: &mut actor,
        };
        let outcome = collect_pickup(message.pickup, &mut targets, clock.now());

        info!(
            "{:?} collected {:?}: {:?}. Coins: {}, collectibles: {}/{}",
            message.collector,
            message.pickup,
            outcome,
            coins.coins,
            collectibles.collected,
            collectibles.total
        );
    }
}
