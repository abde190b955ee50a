//! Combat domain: tuning for health, respawn and killing-blow handling.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// What a hit that drops health to zero still does before the respawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KillingBlowPolicy {
    /// Hit-stun and knockback apply even on the killing blow
    #[default]
    ApplyStun,
    /// The killing blow skips hit-stun and knockback
    SkipStun,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub max_health: u32,
    /// Invulnerability granted at the respawn point so hazards there can't chain-kill
    pub respawn_grace: f32,
    pub killing_blow: KillingBlowPolicy,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            max_health: 3,
            respawn_grace: 1.0,
            killing_blow: KillingBlowPolicy::ApplyStun,
        }
    }
}
