//! Boid behavior math for emberswarm.
//!
//! Pure functions that compute flocking and goal-seeking steering forces.
//! No ECS dependency — operates on plain data, so the force model can be
//! tested in isolation from the engine.

pub mod flocking;
pub mod steering;

pub use flocking::BoidSnapshot;
