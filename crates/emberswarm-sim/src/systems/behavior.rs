//! Boid behavior system: flocking plus the Seeking/Returning steering state
//! machine.
//!
//! Flocking reads a snapshot of positions and velocities frozen at the start
//! of the pass, so no boid observes another boid's in-progress update.
//! Extinguishing writes to the live grid immediately; when two boids reach
//! the same cell in one tick, the first claimant wins.

use glam::Vec2;
use hecs::{Entity, World};

use emberswarm_behavior::flocking::{apply_flocking, BoidSnapshot};
use emberswarm_behavior::steering::seek;
use emberswarm_core::components::{Boid, BoidState, Energy, Position, Velocity};
use emberswarm_core::constants::*;
use emberswarm_core::enums::BoidMode;
use emberswarm_core::events::SimEvent;
use emberswarm_core::types::clamp_length;
use emberswarm_field::{FireGrid, SectionMap};

use crate::engine::RunningTotals;

pub fn run(
    world: &mut World,
    grid: &mut FireGrid,
    sections: &SectionMap,
    home_targets: &[Vec2],
    events: &mut Vec<SimEvent>,
    totals: &mut RunningTotals,
) {
    // Freeze the swarm as it stands after containment. Every boid flocks
    // against this view regardless of update order.
    let frozen: Vec<(Entity, BoidSnapshot)> = world
        .query::<(&Boid, &Position, &Velocity)>()
        .iter()
        .map(|(entity, (_, pos, vel))| {
            (
                entity,
                BoidSnapshot {
                    position: pos.0,
                    velocity: vel.0,
                },
            )
        })
        .collect();
    let snapshots: Vec<BoidSnapshot> = frozen.iter().map(|(_, snap)| *snap).collect();

    for (index, &(entity, snap)) in frozen.iter().enumerate() {
        let Ok((vel, energy, state)) =
            world.query_one_mut::<(&mut Velocity, &mut Energy, &mut BoidState)>(entity)
        else {
            continue;
        };

        let position = snap.position;
        let mut velocity = vel.0;

        apply_flocking(index, &snapshots, &mut velocity);

        // Running low forces a home trip whatever the boid was doing.
        if energy.level <= MIN_ENERGY {
            state.mode = BoidMode::Returning;
        }

        if state.mode == BoidMode::Seeking && !state.pending_retirement {
            // Bias toward the most underserved / most intense section.
            if let Some(center) = sections.best_target(position) {
                velocity += seek(position, velocity, center, MAX_SECTION_FORCE);
            }

            // Chase the nearest visible fire; extinguish on arrival.
            if let Some(fire) = grid.nearest_burning_within(position, SEARCH_RADIUS) {
                velocity += seek(position, velocity, fire.center, MAX_TARGET_FORCE);
                if fire.distance < TARGET_REACHED_RADIUS && grid.extinguish(fire.row, fire.col) {
                    state.mode = BoidMode::Returning;
                    totals.fires_extinguished += 1;
                    events.push(SimEvent::Extinguished {
                        row: fire.row,
                        col: fire.col,
                    });
                }
            }
        } else {
            // Returning, or retiring, which overrides Seeking entirely.
            if let Some((target, distance)) = nearest_home(position, home_targets) {
                velocity += seek(position, velocity, target, MAX_TARGET_FORCE);
                if distance < TARGET_REACHED_RADIUS {
                    // Arrival: refuel and go back out. A retiree also flips
                    // here and is despawned by this tick's cleanup sweep.
                    state.mode = BoidMode::Seeking;
                    energy.level = MAX_ENERGY;
                }
            }
        }

        // Final clamp: whatever the steering forces added up to, the boid
        // leaves this pass inside the speed envelope.
        vel.0 = clamp_length(velocity, MIN_SPEED, MAX_SPEED);
    }
}

/// Nearest configured home target and the distance to it.
fn nearest_home(position: Vec2, home_targets: &[Vec2]) -> Option<(Vec2, f32)> {
    home_targets
        .iter()
        .map(|&target| (target, position.distance(target)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
