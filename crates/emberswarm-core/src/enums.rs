//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Lifecycle state of one fire-grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Fuel intact, eligible for ignition.
    #[default]
    Unburnt,
    /// On fire; spreads to neighbors and counts toward fire load.
    Burning,
    /// Burned out on its own; inert forever.
    Burnt,
    /// Put out by a boid; inert forever.
    Extinguished,
}

/// What a boid is currently trying to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoidMode {
    /// Hunting for burning cells (section bias + nearest-fire steering).
    #[default]
    Seeking,
    /// Heading to the nearest home target to refill energy.
    Returning,
}

/// Whether the tick loop is advancing the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    Paused,
}
