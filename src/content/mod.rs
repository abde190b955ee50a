//! Content domain: actor profiles loaded from RON and their validation.

mod data;
mod loader;
mod registry;
mod validation;


pub use data::{ActorProfile, DataFile};
pub use loader::{ConfigError, load_actor_profiles, parse_actor_profiles};
pub use registry::ActorProfiles;
pub use validation::{
    ValidationError, validate_actor_config, validate_combat_tuning, validate_movement_tuning,
};
