//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

/// Notable per-tick occurrences, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A cell caught fire (spread, spontaneous, or external ignition).
    Ignited { row: usize, col: usize },
    /// A boid put out a burning cell.
    Extinguished { row: usize, col: usize },
    /// The population controller grew the swarm.
    BoidsSpawned { count: usize },
    /// The population controller marked a boid for return-then-retirement.
    RetirementOrdered,
    /// A retiring boid arrived home and was removed from the swarm.
    BoidRetired,
}
