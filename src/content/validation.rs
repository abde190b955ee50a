//! Validation for actor tuning values.

use crate::actor::ActorConfig;
use crate::combat::CombatTuning;
use crate::movement::MovementTuning;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' = {} {}", self.field, self.value, self.reason)
    }
}

/// Helper macro for checking a float field against a predicate
macro_rules! check_f32 {
    ($errors:expr, $field:expr, $value:expr, $ok:expr, $reason:expr) => {
        let value: f32 = $value;
        if !value.is_finite() || !$ok(value) {
            $errors.push(ValidationError {
                field: $field,
                value: value.to_string(),
                reason: $reason,
            });
        }
    };
}

/// Validate movement tuning.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_movement_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_f32!(
        errors,
        "movement.move_speed",
        tuning.move_speed,
        |v| v >= 0.0,
        "must be a non-negative number"
    );
    check_f32!(
        errors,
        "movement.jump_force",
        tuning.jump_force,
        |v| v >= 0.0,
        "must be a non-negative number"
    );
    // A zero window would make every jump impossible
    check_f32!(
        errors,
        "movement.coyote_time",
        tuning.coyote_time,
        |v| v > 0.0,
        "must be a positive number of seconds"
    );
    check_f32!(
        errors,
        "movement.jump_buffer_time",
        tuning.jump_buffer_time,
        |v| v > 0.0,
        "must be a positive number of seconds"
    );
    if let Some(multiplier) = tuning.jump_cut_multiplier {
        check_f32!(
            errors,
            "movement.jump_cut_multiplier",
            multiplier,
            |v| (0.0..=1.0).contains(&v),
            "must be within [0, 1]"
        );
    }
    if let Some(ramp) = tuning.acceleration {
        check_f32!(
            errors,
            "movement.acceleration.accel",
            ramp.accel,
            |v| v > 0.0,
            "must be positive"
        );
        check_f32!(
            errors,
            "movement.acceleration.decel",
            ramp.decel,
            |v| v > 0.0,
            "must be positive"
        );
    }

    errors
}

/// Validate combat tuning.
pub fn validate_combat_tuning(tuning: &CombatTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if tuning.max_health == 0 {
        errors.push(ValidationError {
            field: "combat.max_health",
            value: tuning.max_health.to_string(),
            reason: "must be at least 1",
        });
    }
    check_f32!(
        errors,
        "combat.respawn_grace",
        tuning.respawn_grace,
        |v| v >= 0.0,
        "must be a non-negative number of seconds"
    );

    errors
}

pub fn validate_actor_config(config: &ActorConfig) -> Vec<ValidationError> {
    let mut errors = validate_movement_tuning(&config.movement);
    errors.extend(validate_combat_tuning(&config.combat));
    errors
}
