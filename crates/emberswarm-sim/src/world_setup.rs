//! Boid spawn factories for setting up and growing the swarm.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use emberswarm_core::components::*;
use emberswarm_core::constants::*;
use emberswarm_core::types::{clamp_length, WorldBounds};

/// Spawn the initial swarm at random positions across the world.
pub fn populate(world: &mut World, rng: &mut ChaCha8Rng, bounds: WorldBounds, count: usize) {
    for _ in 0..count {
        spawn_boid_random(world, rng, bounds);
    }
}

/// Spawn one boid at a random position with a random velocity.
pub fn spawn_boid_random(world: &mut World, rng: &mut ChaCha8Rng, bounds: WorldBounds) -> hecs::Entity {
    let position = Vec2::new(
        rng.gen_range(0.0..bounds.width),
        rng.gen_range(0.0..bounds.height),
    );
    spawn_boid(world, position, random_velocity(rng))
}

/// Spawn one boid at a home target (population growth).
pub fn spawn_boid_at(world: &mut World, rng: &mut ChaCha8Rng, position: Vec2) -> hecs::Entity {
    spawn_boid(world, position, random_velocity(rng))
}

/// Spawn a boid with full energy, seeking, not retiring.
pub fn spawn_boid(world: &mut World, position: Vec2, velocity: Vec2) -> hecs::Entity {
    world.spawn((
        Boid,
        Position(position),
        Velocity(velocity),
        Energy { level: MAX_ENERGY },
        BoidState::default(),
    ))
}

/// Random heading with speed already inside [MIN_SPEED, MAX_SPEED], so the
/// speed invariant holds from the very first tick.
fn random_velocity(rng: &mut ChaCha8Rng) -> Vec2 {
    let raw = Vec2::new(
        rng.gen_range(-MAX_SPEED..MAX_SPEED),
        rng.gen_range(-MAX_SPEED..MAX_SPEED),
    );
    if raw == Vec2::ZERO {
        Vec2::new(MIN_SPEED, 0.0)
    } else {
        clamp_length(raw, MIN_SPEED, MAX_SPEED)
    }
}
