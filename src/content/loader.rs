//! Loader for actor profile RON files.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{ActorProfile, DataFile};
use super::registry::ActorProfiles;
use super::validation::{ValidationError, validate_actor_config};

/// Error type for configuration loading and validation failures.
#[derive(Debug)]
pub enum ConfigError {
    Io { file: String, message: String },
    Parse { file: String, message: String },
    MissingProfile(String),
    Invalid(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { file, message } => write!(f, "Failed to read {}: {}", file, message),
            ConfigError::Parse { file, message } => {
                write!(f, "Failed to parse {}: {}", file, message)
            }
            ConfigError::MissingProfile(id) => write!(f, "No actor profile named '{}'", id),
            ConfigError::Invalid(errors) => {
                write!(f, "Invalid configuration ({} problems)", errors.len())?;
                for error in errors {
                    write!(f, "; {}", error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse profile RON text. `file` only labels errors.
pub fn parse_actor_profiles(contents: &str, file: &str) -> Result<ActorProfiles, ConfigError> {
    let data: DataFile<ActorProfile> =
        ron_options()
            .from_str(contents)
            .map_err(|e| ConfigError::Parse {
                file: file.to_string(),
                message: e.to_string(),
            })?;

    let mut profiles = ActorProfiles::default();
    let mut errors = Vec::new();

    for profile in data.items {
        let problems = validate_actor_config(&profile.config);
        if problems.is_empty() {
            profiles.insert(profile.id, profile.config);
        } else {
            warn!(
                "Actor profile '{}' in {} rejected with {} problems",
                profile.id,
                file,
                problems.len()
            );
            errors.extend(problems);
        }
    }

    if errors.is_empty() {
        Ok(profiles)
    } else {
        Err(ConfigError::Invalid(errors))
    }
}

/// Load and validate every profile in a RON file.
pub fn load_actor_profiles(path: &Path) -> Result<ActorProfiles, ConfigError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        file: file_name.clone(),
        message: e.to_string(),
    })?;

    let profiles = parse_actor_profiles(&contents, &file_name)?;
    info!(
        "Loaded {} actor profiles from {}: {:?}",
        profiles.len(),
        file_name,
        profiles.ids()
    );
    Ok(profiles)
}
