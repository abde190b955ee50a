//! Core domain: simulation clock and schedule ordering shared by every other domain.

mod clock;


pub use clock::{SIMULATION_HZ, SimClock};
pub(crate) use clock::tick_clock;

use bevy::prelude::*;

/// Ordering of the fixed-step simulation.
///
/// Sensors fill per-entity inputs (ground contact) before the actor step reads
/// them; anything reacting to emitted events runs after.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Sense,
    Step,
    React,
}
