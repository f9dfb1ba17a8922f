//! Simulation engine for emberswarm.
//!
//! Owns the hecs ECS world, the fire grid, and the section intensity map,
//! runs systems in a fixed order each tick, and produces SimSnapshots for
//! rendering collaborators. Completely headless, enabling deterministic
//! testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use emberswarm_core as core;
pub use engine::{SimConfig, SimulationEngine, SpreadModel};
