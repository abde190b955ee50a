//! Combat domain: damage, invulnerability, hit-stun and respawn.

mod events;
mod resources;
mod state;


pub use events::{ActorEvent, ActorEventMessage, CheckpointReached, DamageMessage, DamageRequest};
pub use resources::{CombatTuning, KillingBlowPolicy};
pub use state::{CombatState, CombatStatus};
