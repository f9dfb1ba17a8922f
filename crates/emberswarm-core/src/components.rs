//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Simulation logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::BoidMode;

/// World-space position, as a component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// World-space velocity (world units per tick), as a component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Depletable energy reserve. Drains by flown distance each tick and refills
/// to MAX_ENERGY on arrival at a home target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Energy {
    pub level: f32,
}

/// Behavioral state of a boid.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BoidState {
    pub mode: BoidMode,
    /// Set by the population controller. The boid finishes one last home trip
    /// and is despawned by the cleanup sweep after arrival — never mid-flight.
    pub pending_retirement: bool,
}

/// Marks an entity as a swarm member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Boid;
