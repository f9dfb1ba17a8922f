//! Simulation engine, the core of the firefight.
//!
//! `SimulationEngine` owns the hecs ECS world, the fire grid, and the
//! section intensity map, processes queued commands, and runs all systems
//! once per tick. All randomness flows through one seeded RNG, so the same
//! seed replays the same simulation.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use emberswarm_core::commands::SimCommand;
use emberswarm_core::constants::*;
use emberswarm_core::enums::SimPhase;
use emberswarm_core::error::ConfigError;
use emberswarm_core::events::SimEvent;
use emberswarm_core::state::SimSnapshot;
use emberswarm_core::types::{SimTime, WorldBounds};
use emberswarm_field::grid::adaptive_spread_probability;
use emberswarm_field::{FireGrid, SectionMap};

use crate::systems;
use crate::world_setup;

/// How the per-tick spread probability is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpreadModel {
    /// Derived each tick from the previous tick's burning-cell count,
    /// interpolating between MAX_SPREAD_PROBABILITY and
    /// MIN_SPREAD_PROBABILITY.
    Adaptive,
    /// A constant probability (useful for tests and scripted scenarios).
    Fixed(f32),
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// World extent in world units.
    pub world_width: f32,
    pub world_height: f32,
    /// Side length of one fire-grid cell.
    pub cell_size: f32,
    /// Section partition of the world for the intensity map.
    pub sections_x: usize,
    pub sections_y: usize,
    /// Fixed home targets where boids refuel and where growth spawns.
    pub home_targets: Vec<Vec2>,
    /// Boids placed at random positions at startup (clamped into the
    /// population bounds).
    pub initial_population: usize,
    /// Population bounds the controller never crosses.
    pub min_population: usize,
    pub max_population: usize,
    /// Spread probability model.
    pub spread: SpreadModel,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            cell_size: CELL_SIZE,
            sections_x: NUM_SECTIONS_X,
            sections_y: NUM_SECTIONS_Y,
            home_targets: vec![
                Vec2::new(100.0, 100.0),
                Vec2::new(1700.0, 100.0),
                Vec2::new(100.0, 920.0),
                Vec2::new(1700.0, 920.0),
            ],
            initial_population: MIN_BOID_NUM,
            min_population: MIN_BOID_NUM,
            max_population: MAX_BOID_NUM,
            spread: SpreadModel::Adaptive,
        }
    }
}

impl SimConfig {
    /// World rectangle implied by the configured dimensions.
    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.world_width, self.world_height)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(ConfigError::BadWorldSize {
                width: self.world_width,
                height: self.world_height,
            });
        }
        if self.cell_size <= 0.0
            || self.cell_size > self.world_width
            || self.cell_size > self.world_height
        {
            return Err(ConfigError::BadCellSize {
                cell_size: self.cell_size,
            });
        }
        if self.sections_x == 0 || self.sections_y == 0 {
            return Err(ConfigError::BadSectionCount {
                x: self.sections_x,
                y: self.sections_y,
            });
        }
        if self.home_targets.is_empty() {
            return Err(ConfigError::NoHomeTargets);
        }
        let bounds = self.bounds();
        for (index, target) in self.home_targets.iter().enumerate() {
            if !bounds.contains(*target) {
                return Err(ConfigError::HomeTargetOutOfBounds {
                    index,
                    x: target.x,
                    y: target.y,
                });
            }
        }
        if self.min_population > self.max_population {
            return Err(ConfigError::BadPopulationBounds {
                min: self.min_population,
                max: self.max_population,
            });
        }
        Ok(())
    }
}

/// Running totals since simulation start, for display.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningTotals {
    pub fires_extinguished: u64,
    pub fires_burned_out: u64,
    pub boids_spawned: u64,
    pub boids_retired: u64,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    grid: FireGrid,
    sections: SectionMap,
    time: SimTime,
    phase: SimPhase,
    rng: ChaCha8Rng,
    config: SimConfig,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
    totals: RunningTotals,
    /// Burning-cell count from the previous tick, drives adaptive spread.
    last_burning: usize,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. A rejected
    /// config never leaves a half-constructed engine behind.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let bounds = config.bounds();
        let grid = FireGrid::new(bounds, config.cell_size);
        let sections = SectionMap::new(bounds, config.sections_x, config.sections_y);
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut world = World::new();

        let initial = config
            .initial_population
            .clamp(config.min_population, config.max_population);
        world_setup::populate(&mut world, &mut rng, bounds, initial);

        Ok(Self {
            world,
            grid,
            sections,
            time: SimTime::default(),
            phase: SimPhase::Running,
            rng,
            config,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            totals: RunningTotals::default(),
            last_burning: 0,
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.grid,
            &self.sections,
            &self.time,
            self.phase,
            &self.config.home_targets,
            &self.totals,
            events,
        )
    }

    /// Get the current simulation phase.
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Number of live boids.
    pub fn population(&self) -> usize {
        self.world
            .query::<&emberswarm_core::components::Boid>()
            .iter()
            .count()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the fire grid.
    pub fn grid(&self) -> &FireGrid {
        &self.grid
    }

    /// Mutable world access for scenario setup in tests.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable grid access for scenario setup in tests.
    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut FireGrid {
        &mut self.grid
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::IgniteAt { x, y } => {
                // Out-of-bounds requests are silently ignored.
                if let Some((row, col)) = self.grid.ignite_at(Vec2::new(x, y)) {
                    tracing::debug!(row, col, "external ignition");
                    self.events.push(SimEvent::Ignited { row, col });
                }
            }
            SimCommand::Pause => {
                if self.phase == SimPhase::Running {
                    self.phase = SimPhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Running;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Fire spread (copy-then-mutate cellular automaton).
        let spread_probability = match self.config.spread {
            SpreadModel::Adaptive => adaptive_spread_probability(self.last_burning),
            SpreadModel::Fixed(p) => p,
        };
        let report = self.grid.advance(&mut self.rng, spread_probability);
        self.totals.fires_burned_out += report.burned_out as u64;
        for &(row, col) in &report.ignited {
            self.events.push(SimEvent::Ignited { row, col });
        }
        self.last_burning = report.burning;

        // 2. Section intensity map, from the post-spread grid.
        systems::intensity::run(&mut self.sections, &self.grid, &self.world);

        // 3. Population controller: grow or mark for retirement.
        systems::population::run(
            &mut self.world,
            &mut self.rng,
            report.burning,
            &self.config,
            &mut self.events,
            &mut self.totals,
        );

        // 4. Wall containment, before behavior.
        systems::containment::run(&mut self.world, self.config.bounds());

        // 5. Flocking + steering state machine (may extinguish cells).
        systems::behavior::run(
            &mut self.world,
            &mut self.grid,
            &self.sections,
            &self.config.home_targets,
            &mut self.events,
            &mut self.totals,
        );

        // 6. Kinematic integration and energy drain.
        systems::movement::run(&mut self.world);

        // 7. Cleanup: despawn retirees that completed their last home trip.
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            self.config.min_population,
            &mut self.events,
            &mut self.totals,
        );
    }
}
