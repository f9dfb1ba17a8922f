//! All simulation systems, run in a fixed order each tick by the engine.

pub mod behavior;
pub mod cleanup;
pub mod containment;
pub mod intensity;
pub mod movement;
pub mod population;
pub mod snapshot;
