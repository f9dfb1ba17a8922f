//! Goal-directed steering forces.

use glam::Vec2;

use emberswarm_core::constants::*;
use emberswarm_core::types::{desired_velocity, limit_length, WorldBounds};

/// Steering force toward `target`: desired velocity (to-target direction at
/// MAX_SPEED, zero if already there) minus current velocity, clamped to
/// `max_force`. The caller adds this to velocity; unlike flocking, seek
/// steering is not re-clamped into the speed envelope.
pub fn seek(position: Vec2, velocity: Vec2, target: Vec2, max_force: f32) -> Vec2 {
    let desired = desired_velocity(position, target, MAX_SPEED);
    limit_length(desired - velocity, max_force)
}

/// Soft wall repulsion. Within WALL_MARGIN of an edge the push is an inward
/// unit direction scaled to MAX_SPEED, converted to a steering correction
/// against the current velocity and clamped to MAX_WALL_FORCE. Zero away
/// from the edges.
pub fn containment(position: Vec2, velocity: Vec2, bounds: WorldBounds) -> Vec2 {
    let mut push = Vec2::ZERO;

    if position.x < WALL_MARGIN {
        push.x = MAX_SPEED;
    } else if position.x > bounds.width - WALL_MARGIN {
        push.x = -MAX_SPEED;
    }

    if position.y < WALL_MARGIN {
        push.y = MAX_SPEED;
    } else if position.y > bounds.height - WALL_MARGIN {
        push.y = -MAX_SPEED;
    }

    let len = push.length();
    if len == 0.0 {
        return Vec2::ZERO;
    }

    let correction = push * (MAX_SPEED / len) - velocity;
    limit_length(correction, MAX_WALL_FORCE)
}
