//! Core domain: monotonic simulation clock.

use bevy::prelude::*;

/// Fixed simulation rate. `PlatformerPlugin` sets Bevy's `Time<Fixed>` to it so
/// the actor step and the physics step agree.
pub const SIMULATION_HZ: f64 = 60.0;

/// Fixed-step simulation clock.
///
/// Advanced once per `FixedUpdate` tick by `tick_clock`. All timers in the
/// simulation compare against `now()`, never against wall-clock time, so two
/// runs fed the same inputs produce the same results.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SimClock {
    /// Seconds advanced per tick
    pub step: f32,
    /// Total simulated seconds. Accumulated in f64 so long runs keep advancing.
    pub elapsed: f64,
    /// Number of ticks advanced so far
    pub tick: u64,
}

impl SimClock {
    pub fn from_hz(hz: f64) -> Self {
        let step = if hz > 0.0 { (1.0 / hz) as f32 } else { 0.0 };
        Self {
            step,
            elapsed: 0.0,
            tick: 0,
        }
    }

    /// Sim time as seen by actor timers.
    pub fn now(&self) -> f32 {
        self.elapsed as f32
    }

    /// Advance by one step. A non-positive step leaves the clock untouched.
    pub fn advance(&mut self) {
        if self.step > 0.0 {
            self.elapsed += f64::from(self.step);
            self.tick += 1;
        }
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::from_hz(SIMULATION_HZ)
    }
}

pub(crate) fn tick_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}
