//! Wall containment system: soft inward push near world edges, applied to
//! every boid before the behavior pass.

use hecs::World;

use emberswarm_behavior::steering;
use emberswarm_core::components::{Boid, Position, Velocity};
use emberswarm_core::types::WorldBounds;

pub fn run(world: &mut World, bounds: WorldBounds) {
    for (_entity, (_boid, pos, vel)) in world.query_mut::<(&Boid, &Position, &mut Velocity)>() {
        vel.0 += steering::containment(pos.0, vel.0, bounds);
    }
}
