//! ActorProfiles resource providing lookup of loaded actor configurations by id.

use bevy::prelude::*;
use std::collections::HashMap;

use super::loader::ConfigError;
use crate::actor::ActorConfig;

#[derive(Resource, Debug, Default, Clone)]
pub struct ActorProfiles {
    pub profiles: HashMap<String, ActorConfig>,
}

impl ActorProfiles {
    pub fn get(&self, id: &str) -> Result<&ActorConfig, ConfigError> {
        self.profiles
            .get(id)
            .ok_or_else(|| ConfigError::MissingProfile(id.to_string()))
    }

    pub fn insert(&mut self, id: impl Into<String>, config: ActorConfig) {
        self.profiles.insert(id.into(), config);
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile ids in sorted order, for stable log output.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
