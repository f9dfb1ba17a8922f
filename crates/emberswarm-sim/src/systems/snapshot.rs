//! Snapshot builder: turns the live world into the serializable view handed
//! out after each tick.

use glam::Vec2;
use hecs::World;

use emberswarm_core::components::{Boid, BoidState, Energy, Position, Velocity};
use emberswarm_core::enums::SimPhase;
use emberswarm_core::events::SimEvent;
use emberswarm_core::state::{BoidView, GridView, SectionView, SimSnapshot, SwarmStats};
use emberswarm_core::types::SimTime;
use emberswarm_field::{FireGrid, SectionMap};

use crate::engine::RunningTotals;

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    grid: &FireGrid,
    sections: &SectionMap,
    time: &SimTime,
    phase: SimPhase,
    home_targets: &[Vec2],
    totals: &RunningTotals,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    // Sort by entity id so a snapshot serializes identically for identical
    // world states, independent of archetype iteration order.
    let mut boid_rows: Vec<(u64, BoidView)> = world
        .query::<(&Boid, &Position, &Velocity, &BoidState, &Energy)>()
        .iter()
        .map(|(entity, (_, pos, vel, state, energy))| {
            (
                entity.to_bits().get(),
                BoidView {
                    position: pos.0,
                    velocity: vel.0,
                    mode: state.mode,
                    pending_retirement: state.pending_retirement,
                    energy: energy.level,
                },
            )
        })
        .collect();
    boid_rows.sort_unstable_by_key(|(bits, _)| *bits);
    let boids: Vec<BoidView> = boid_rows.into_iter().map(|(_, view)| view).collect();

    let grid_view = GridView {
        width: grid.width(),
        height: grid.height(),
        cell_size: grid.cell_size(),
        cells: grid.cells().iter().map(|c| c.state).collect(),
    };

    let section_view = SectionView {
        columns: sections.columns(),
        rows: sections.rows(),
        scores: sections.scores().to_vec(),
    };

    let stats = SwarmStats {
        population: boids.len(),
        burning: grid.burning_count(),
        fires_extinguished: totals.fires_extinguished,
        fires_burned_out: totals.fires_burned_out,
        boids_spawned: totals.boids_spawned,
        boids_retired: totals.boids_retired,
    };

    SimSnapshot {
        time: *time,
        phase,
        boids,
        grid: grid_view,
        sections: section_view,
        home_targets: home_targets.to_vec(),
        stats,
        events,
    }
}
