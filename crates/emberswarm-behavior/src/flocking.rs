//! Classic three-force flocking: alignment, cohesion, separation.
//!
//! Neighbors are read from a frozen per-tick snapshot so the result does not
//! depend on the order boids are updated in. All boids are scanned once per
//! call, brute-force O(n²) per tick across the swarm; worlds with many
//! thousands of boids would want a spatial index here.

use glam::Vec2;

use emberswarm_core::constants::*;
use emberswarm_core::types::clamp_length;

/// Pre-tick view of one boid, the unit of the flocking snapshot.
#[derive(Debug, Clone, Copy)]
pub struct BoidSnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Apply the three flocking forces to `velocity` for the boid at
/// `self_index` in the snapshot.
///
/// Each force: average the accumulated sum, optionally subtract own position
/// (cohesion) or rescale to MAX_SPEED (alignment, separation), subtract the
/// current velocity, clamp to the force-specific maximum, add to velocity,
/// then re-clamp speed into [MIN_SPEED, MAX_SPEED]. The re-clamp after every
/// force keeps a strong separation burst from exceeding the speed envelope.
pub fn apply_flocking(self_index: usize, boids: &[BoidSnapshot], velocity: &mut Vec2) {
    let position = boids[self_index].position;

    let mut align_sum = Vec2::ZERO;
    let mut cohesion_sum = Vec2::ZERO;
    let mut separation_sum = Vec2::ZERO;
    let mut align_total = 0usize;
    let mut cohesion_total = 0usize;
    let mut separation_total = 0usize;

    for (index, other) in boids.iter().enumerate() {
        if index == self_index {
            continue;
        }

        let offset = other.position - position;
        let dist = offset.length();

        if dist < ALIGNMENT_RADIUS {
            align_sum += other.velocity;
            align_total += 1;
        }

        if dist < COHESION_RADIUS {
            cohesion_sum += other.position;
            cohesion_total += 1;
        }

        // Coincident boids have no repulsion direction; skip them.
        if dist < SEPARATION_RADIUS && dist != 0.0 {
            separation_sum += -offset / dist;
            separation_total += 1;
        }
    }

    apply_force(
        position,
        velocity,
        align_sum,
        align_total,
        MAX_ALIGNMENT_FORCE,
        true,
        false,
    );
    apply_force(
        position,
        velocity,
        cohesion_sum,
        cohesion_total,
        MAX_COHESION_FORCE,
        false,
        true,
    );
    apply_force(
        position,
        velocity,
        separation_sum,
        separation_total,
        MAX_SEPARATION_FORCE,
        true,
        false,
    );
}

fn apply_force(
    position: Vec2,
    velocity: &mut Vec2,
    sum: Vec2,
    total: usize,
    max_force: f32,
    rescale_to_max_speed: bool,
    subtract_position: bool,
) {
    if total == 0 {
        return;
    }

    let mut steer = sum / total as f32;

    if subtract_position {
        steer -= position;
    }

    if rescale_to_max_speed {
        let len = steer.length();
        if len > 0.0 {
            steer *= MAX_SPEED / len;
        }
    }

    steer -= *velocity;
    steer = emberswarm_core::types::limit_length(steer, max_force);

    *velocity += steer;
    *velocity = clamp_length(*velocity, MIN_SPEED, MAX_SPEED);
}
