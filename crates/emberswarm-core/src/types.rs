//! Fundamental geometric and simulation types.
//!
//! Positions and velocities are `glam::Vec2` in world units; the helpers here
//! add the zero-length guards the steering math relies on. A zero vector is
//! never normalized or scaled; it passes through unchanged, so no force
//! computation can produce NaN.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World extent. The origin is the top-left corner; x grows right, y grows
/// down (matching grid row/column order).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a point lies inside the world rectangle.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Clamp a vector's magnitude to at most `max`. Zero vectors pass through.
pub fn limit_length(v: Vec2, max: f32) -> Vec2 {
    let len = v.length();
    if len > max && len > 0.0 {
        v * (max / len)
    } else {
        v
    }
}

/// Clamp a vector's magnitude into `[min, max]`. Zero vectors pass through
/// (there is no direction to scale along).
pub fn clamp_length(v: Vec2, min: f32, max: f32) -> Vec2 {
    let len = v.length();
    if len == 0.0 {
        v
    } else if len > max {
        v * (max / len)
    } else if len < min {
        v * (min / len)
    } else {
        v
    }
}

/// Normalize toward a target point and scale to `speed`; zero if already there.
pub fn desired_velocity(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    let delta = to - from;
    let len = delta.length();
    if len > 0.0 {
        delta * (speed / len)
    } else {
        Vec2::ZERO
    }
}
