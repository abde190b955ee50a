//! Combat domain: health, invulnerability, hit-stun and respawn bookkeeping.

use bevy::prelude::*;

use crate::combat::{ActorEvent, CombatTuning, DamageRequest, KillingBlowPolicy};
use crate::content::{ConfigError, validate_combat_tuning};

/// Which time-boxed sub-states of "alive" are active at a given sim time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CombatStatus {
    pub invulnerable: bool,
    pub hit_stunned: bool,
}

impl CombatStatus {
    pub fn is_healthy(&self) -> bool {
        !self.invulnerable && !self.hit_stunned
    }
}

/// Health and damage windows for one actor.
///
/// Death is never observable as a resting state: the hit that empties health
/// respawns the actor at `respawn_point` with full health in the same call.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatState {
    current_health: u32,
    max_health: u32,
    invulnerable_until: f32,
    hit_stun_until: f32,
    respawn_point: Vec2,
    respawn_grace: f32,
    killing_blow: KillingBlowPolicy,
}

impl CombatState {
    pub fn new(max_health: u32, respawn_point: Vec2) -> Result<Self, ConfigError> {
        let tuning = CombatTuning {
            max_health,
            ..default()
        };
        Self::from_tuning(&tuning, respawn_point)
    }

    pub fn from_tuning(tuning: &CombatTuning, respawn_point: Vec2) -> Result<Self, ConfigError> {
        let errors = validate_combat_tuning(tuning);
        if !errors.is_empty() {
            return Err(ConfigError::Invalid(errors));
        }

        Ok(Self {
            current_health: tuning.max_health,
            max_health: tuning.max_health,
            invulnerable_until: f32::NEG_INFINITY,
            hit_stun_until: f32::NEG_INFINITY,
            respawn_point,
            respawn_grace: tuning.respawn_grace,
            killing_blow: tuning.killing_blow,
        })
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn invulnerable_until(&self) -> f32 {
        self.invulnerable_until
    }

    pub fn hit_stun_until(&self) -> f32 {
        self.hit_stun_until
    }

    pub fn respawn_point(&self) -> Vec2 {
        self.respawn_point
    }

    pub fn is_invulnerable(&self, sim_time: f32) -> bool {
        sim_time < self.invulnerable_until
    }

    pub fn is_hit_stunned(&self, sim_time: f32) -> bool {
        sim_time < self.hit_stun_until
    }

    pub fn status(&self, sim_time: f32) -> CombatStatus {
        CombatStatus {
            invulnerable: self.is_invulnerable(sim_time),
            hit_stunned: self.is_hit_stunned(sim_time),
        }
    }

    /// Apply one hit at `sim_time`.
    ///
    /// Ignored entirely (no events, no stun, no knockback) while invulnerable.
    /// Otherwise emits, in order: `HealthChanged`, `KnockbackApplied`, and on a
    /// killing blow `Died` followed by `Respawned`.
    pub fn apply_damage(&mut self, request: &DamageRequest, sim_time: f32) -> Vec<ActorEvent> {
        if self.is_invulnerable(sim_time) {
            debug!(
                "Damage {} ignored: invulnerable until {:.3} (t={:.3})",
                request.amount, self.invulnerable_until, sim_time
            );
            return Vec::new();
        }

        let mut events = Vec::with_capacity(4);

        self.current_health = self.current_health.saturating_sub(request.amount);
        events.push(ActorEvent::HealthChanged {
            current: self.current_health,
            max: self.max_health,
        });

        let killing_blow = self.current_health == 0;
        let stun_applies = !killing_blow || self.killing_blow == KillingBlowPolicy::ApplyStun;

        // Negative or NaN windows collapse to "no window"
        self.invulnerable_until = sim_time + request.invulnerability.max(0.0);
        if stun_applies {
            self.hit_stun_until = sim_time + request.hit_stun.max(0.0);
            events.push(ActorEvent::KnockbackApplied {
                impulse: request.knockback,
            });
        }

        debug!(
            "Hit for {}: health {}/{}, invulnerable until {:.3}",
            request.amount, self.current_health, self.max_health, self.invulnerable_until
        );

        if killing_blow {
            events.push(ActorEvent::Died);
            self.respawn(sim_time);
            events.push(ActorEvent::Respawned {
                point: self.respawn_point,
            });
        }

        events
    }

    /// Restore up to `amount` health. No event when nothing changes.
    pub fn heal(&mut self, amount: u32) -> Option<ActorEvent> {
        let healed = self.current_health.saturating_add(amount).min(self.max_health);
        if healed == self.current_health {
            return None;
        }

        self.current_health = healed;
        Some(ActorEvent::HealthChanged {
            current: self.current_health,
            max: self.max_health,
        })
    }

    pub fn set_respawn_point(&mut self, point: Vec2) {
        self.respawn_point = point;
    }

    /// Extend invulnerability to at least `until`; never shortens an active window.
    pub fn grant_invulnerability(&mut self, until: f32) {
        if until > self.invulnerable_until {
            self.invulnerable_until = until;
        }
    }

    fn respawn(&mut self, sim_time: f32) {
        self.current_health = self.max_health;
        self.grant_invulnerability(sim_time + self.respawn_grace);
        if self.killing_blow == KillingBlowPolicy::SkipStun {
            self.hit_stun_until = f32::NEG_INFINITY;
        }
        debug!(
            "Respawned at ({:.2}, {:.2}) with {} health",
            self.respawn_point.x, self.respawn_point.y, self.current_health
        );
    }
}
