//! Simulation snapshot: the complete visible state handed to collaborators
//! (renderers, recorders) after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete simulation state produced by every tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub boids: Vec<BoidView>,
    pub grid: GridView,
    pub sections: SectionView,
    /// Configured home targets, for marker rendering.
    pub home_targets: Vec<Vec2>,
    pub stats: SwarmStats,
    /// Events since the previous snapshot.
    pub events: Vec<SimEvent>,
}

/// One boid as drawn on screen (color/shape selected from mode and flags).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoidView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mode: BoidMode,
    pub pending_retirement: bool,
    pub energy: f32,
}

/// The fire grid for color mapping, row-major.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridView {
    pub width: usize,
    pub height: usize,
    pub cell_size: f32,
    pub cells: Vec<CellState>,
}

/// Section intensity scores for debug overlays, row-major.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionView {
    pub columns: usize,
    pub rows: usize,
    pub scores: Vec<f32>,
}

/// Aggregate counters for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SwarmStats {
    /// Live boids this tick.
    pub population: usize,
    /// Burning cells after this tick's spread.
    pub burning: usize,
    /// Running totals since simulation start.
    pub fires_extinguished: u64,
    pub fires_burned_out: u64,
    pub boids_spawned: u64,
    pub boids_retired: u64,
}
