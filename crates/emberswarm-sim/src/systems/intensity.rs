//! Section intensity system: recomputes the task-allocation scores from the
//! post-spread grid and the positions of actively seeking boids.

use hecs::World;

use emberswarm_core::components::{Boid, BoidState, Position};
use emberswarm_core::enums::BoidMode;
use emberswarm_field::{FireGrid, SectionMap};

/// Recompute all section scores. Boids heading home or marked for
/// retirement do not count as coverage; they are about to leave the area.
pub fn run(sections: &mut SectionMap, grid: &FireGrid, world: &World) {
    let active_positions: Vec<glam::Vec2> = world
        .query::<(&Boid, &Position, &BoidState)>()
        .iter()
        .filter(|(_, (_, _, state))| {
            state.mode == BoidMode::Seeking && !state.pending_retirement
        })
        .map(|(_, (_, pos, _))| pos.0)
        .collect();

    let section_count = sections.columns() * sections.rows();
    let ideal_per_section = active_positions.len() as f32 / section_count as f32;

    sections.recompute(grid, &active_positions, ideal_per_section);
}
