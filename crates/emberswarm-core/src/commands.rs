//! Commands sent from collaborators to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Rate limiting
//! (e.g. of ignition requests) is the collaborator's responsibility.

use serde::{Deserialize, Serialize};

/// All possible external actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Force the cell containing world coordinate (x, y) to start burning.
    /// Out-of-bounds coordinates are silently ignored.
    IgniteAt { x: f32, y: f32 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
