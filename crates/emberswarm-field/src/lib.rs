//! The environment for emberswarm: the wildfire cellular automaton and the
//! section-based task-allocation intensity map.

pub mod grid;
pub mod section;

pub use grid::FireGrid;
pub use section::SectionMap;

#[cfg(test)]
mod tests;
