//! Population controller: grows the swarm with fire load and shrinks it by
//! marking boids for return-then-retirement.
//!
//! Shrinking never removes a flying boid. A marked boid finishes one last
//! trip home and is despawned by the cleanup sweep after arrival.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use emberswarm_core::components::{Boid, BoidState};
use emberswarm_core::constants::SPAWN_FACTOR;
use emberswarm_core::enums::BoidMode;
use emberswarm_core::events::SimEvent;

use crate::engine::{RunningTotals, SimConfig};
use crate::world_setup;

/// Compare fire load against population and grow or shrink accordingly.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    burning: usize,
    config: &SimConfig,
    events: &mut Vec<SimEvent>,
    totals: &mut RunningTotals,
) {
    let population = world.query::<(&Boid, &BoidState)>().iter().count();
    let demand = burning as f32 * SPAWN_FACTOR;

    if demand > population as f32 && population < config.max_population {
        // Bulk growth: one boid per home target, stopping exactly at the cap.
        let mut spawned = 0usize;
        for &target in &config.home_targets {
            if population + spawned >= config.max_population {
                break;
            }
            world_setup::spawn_boid_at(world, rng, target);
            spawned += 1;
        }
        if spawned > 0 {
            totals.boids_spawned += spawned as u64;
            events.push(SimEvent::BoidsSpawned { count: spawned });
            tracing::debug!(
                spawned,
                population = population + spawned,
                burning,
                "swarm growth"
            );
        }
    } else if population as f32 > demand && population > config.min_population {
        // Shrink: mark one uniformly random unmarked boid. At most one per
        // tick, so the swarm winds down gradually.
        let candidates: Vec<hecs::Entity> = world
            .query::<(&Boid, &BoidState)>()
            .iter()
            .filter(|(_, (_, state))| !state.pending_retirement)
            .map(|(entity, _)| entity)
            .collect();

        if !candidates.is_empty() {
            let pick = candidates[rng.gen_range(0..candidates.len())];
            if let Ok(state) = world.query_one_mut::<&mut BoidState>(pick) {
                state.pending_retirement = true;
                state.mode = BoidMode::Returning;
                events.push(SimEvent::RetirementOrdered);
                tracing::debug!(population, burning, "retirement ordered");
            }
        }
    }
}
