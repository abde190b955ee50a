//! Collectibles domain: explicitly owned coin and collectible counters.

use bevy::prelude::*;

/// Coins picked up by the player
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct CoinCounter {
    pub coins: u32,
}

impl CoinCounter {
    pub fn add(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    pub fn spend(&mut self, amount: u32) -> bool {
        if self.coins >= amount {
            self.coins -= amount;
            true
        } else {
            false
        }
    }

    pub fn can_afford(&self, amount: u32) -> bool {
        self.coins >= amount
    }
}

/// Level collectibles found out of the level's total
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectibleCounter {
    pub collected: u32,
    pub total: u32,
}

impl CollectibleCounter {
    pub fn with_total(total: u32) -> Self {
        Self {
            collected: 0,
            total,
        }
    }

    /// Count one pickup. Never exceeds `total` when a total is known.
    pub fn record(&mut self) {
        if self.total == 0 || self.collected < self.total {
            self.collected += 1;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.collected >= self.total
    }

    pub fn reset(&mut self, total: u32) {
        self.collected = 0;
        self.total = total;
    }
}
