//! Simulation constants and tuning parameters.

// --- World ---

/// Simulation world width in world units.
pub const WORLD_WIDTH: f32 = 1800.0;

/// Simulation world height in world units.
pub const WORLD_HEIGHT: f32 = 1020.0;

/// Side length of one fire-grid cell in world units.
pub const CELL_SIZE: f32 = 6.0;

// --- Flocking ---

/// Neighbor radius for the separation force.
pub const SEPARATION_RADIUS: f32 = 5.0;

/// Neighbor radius for the alignment force.
pub const ALIGNMENT_RADIUS: f32 = 17.0;

/// Neighbor radius for the cohesion force.
pub const COHESION_RADIUS: f32 = 17.0;

/// Magnitude cap for the separation steering force.
pub const MAX_SEPARATION_FORCE: f32 = 0.3;

/// Magnitude cap for the alignment steering force.
pub const MAX_ALIGNMENT_FORCE: f32 = 0.05;

/// Magnitude cap for the cohesion steering force.
pub const MAX_COHESION_FORCE: f32 = 0.05;

// --- Goal steering ---

/// Magnitude cap for fire-target and home-target steering.
pub const MAX_TARGET_FORCE: f32 = 0.6;

/// Magnitude cap for the section-intensity steering force.
pub const MAX_SECTION_FORCE: f32 = 0.3;

/// Magnitude cap for the wall-containment steering force.
pub const MAX_WALL_FORCE: f32 = 0.3;

/// Distance from a world edge at which containment starts pushing inward.
pub const WALL_MARGIN: f32 = 30.0;

/// Speed bounds enforced after each flocking force application.
pub const MAX_SPEED: f32 = 6.0;
pub const MIN_SPEED: f32 = 2.0;

/// How far a boid scans for burning cells.
pub const SEARCH_RADIUS: f32 = 200.0;

/// Arrival radius for both fire targets and home targets.
pub const TARGET_REACHED_RADIUS: f32 = 10.0;

// --- Energy ---

/// Energy reserve a boid starts with and refills to at a home target.
pub const MAX_ENERGY: f32 = 2000.0;

/// At or below this reserve a boid turns for home.
pub const MIN_ENERGY: f32 = 100.0;

// --- Population ---

/// Desired boids per burning cell; drives both growth and shrink decisions.
pub const SPAWN_FACTOR: f32 = 3.0;

/// Population floor the controller never goes below.
pub const MIN_BOID_NUM: usize = 200;

/// Population ceiling the controller never exceeds.
pub const MAX_BOID_NUM: usize = 1000;

// --- Fire spread ---

/// Spread probability at high fire load (MAX_SPREAD_FREQ_COUNT burning cells).
pub const MIN_SPREAD_PROBABILITY: f32 = 0.02;

/// Spread probability at low fire load (MIN_SPREAD_FREQ_COUNT burning cells).
pub const MAX_SPREAD_PROBABILITY: f32 = 0.1;

/// Burning-cell count at which spread probability bottoms out.
pub const MAX_SPREAD_FREQ_COUNT: usize = 900;

/// Burning-cell count at which spread probability tops out.
pub const MIN_SPREAD_FREQ_COUNT: usize = 200;

/// Per-tick probability of one spontaneous ignition somewhere on the grid.
pub const RANDOM_IGNITION_PROB: f32 = 0.007;

/// Ticks a cell burns before turning to Burnt.
pub const BURNING_DURATION: u32 = 50;

/// Cells of border excluded from spontaneous ignition.
pub const IGNITION_BORDER_MARGIN: usize = 5;

// --- Section intensity ---

/// Default section partition of the world.
pub const NUM_SECTIONS_X: usize = 10;
pub const NUM_SECTIONS_Y: usize = 6;

/// Scales normalized fire density so fire dominates agent-count terms.
pub const FIRE_INTENSITY_BIAS_FACTOR: f32 = 5000.0;

/// Distance floor when weighting section scores by inverse distance.
pub const MIN_SECTION_DISTANCE: f32 = 10.0;
