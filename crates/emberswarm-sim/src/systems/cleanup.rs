//! Cleanup sweep: despawns boids that finished their retirement trip.
//!
//! A retiree is identified by the pending flag plus the Seeking mode the
//! behavior pass sets on home arrival. The despawn goes through the engine's
//! buffer so entity removal never happens inside a query.

use hecs::{Entity, World};

use emberswarm_core::components::{Boid, BoidState};
use emberswarm_core::enums::BoidMode;
use emberswarm_core::events::SimEvent;

use crate::engine::RunningTotals;

pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    min_population: usize,
    events: &mut Vec<SimEvent>,
    totals: &mut RunningTotals,
) {
    let mut population = world.query::<(&Boid, &BoidState)>().iter().count();

    let arrived: Vec<Entity> = world
        .query::<(&Boid, &BoidState)>()
        .iter()
        .filter(|(_, (_, state))| {
            state.pending_retirement && state.mode == BoidMode::Seeking
        })
        .map(|(entity, _)| entity)
        .collect();

    for entity in arrived {
        if population > min_population {
            despawn_buffer.push(entity);
            population -= 1;
        } else if let Ok(state) = world.query_one_mut::<&mut BoidState>(entity) {
            // The floor moved under this retiree. Put it back to work.
            state.pending_retirement = false;
        }
    }

    for entity in despawn_buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            totals.boids_retired += 1;
            events.push(SimEvent::BoidRetired);
            tracing::debug!("boid retired");
        }
    }
}
