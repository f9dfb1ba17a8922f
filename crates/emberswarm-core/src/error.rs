//! Configuration error type.

use thiserror::Error;

/// Rejected `SimConfig` values. Construction-time only; the running
/// simulation has no fallible operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("world dimensions must be positive, got {width}x{height}")]
    BadWorldSize { width: f32, height: f32 },

    #[error("cell size {cell_size} does not fit at least one cell in the world")]
    BadCellSize { cell_size: f32 },

    #[error("section counts must be nonzero, got {x}x{y}")]
    BadSectionCount { x: usize, y: usize },

    #[error("at least one home target is required")]
    NoHomeTargets,

    #[error("home target {index} at ({x}, {y}) lies outside the world")]
    HomeTargetOutOfBounds { index: usize, x: f32, y: f32 },

    #[error("population bounds inverted: min {min} > max {max}")]
    BadPopulationBounds { min: usize, max: usize },
}
