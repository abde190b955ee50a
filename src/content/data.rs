//! Data definitions for actor profile RON files.
//!
//! These structs mirror the structure in assets/data/actors.ron and are used
//! for deserialization. `ActorProfiles` provides lookup by id.

use serde::{Deserialize, Serialize};

use crate::actor::ActorConfig;

/// Common wrapper for RON files with schema_version and items
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

/// A named actor configuration.
///
/// Variants of the player controller (different knockback or jump-cut rules)
/// are separate profiles rather than separate code paths.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActorProfile {
    pub id: String,
    #[serde(default)]
    pub config: ActorConfig,
}
