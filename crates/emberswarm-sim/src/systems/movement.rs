//! Movement integration: velocity into position, one unit timestep, and the
//! matching energy drain.

use hecs::World;

use emberswarm_core::components::{Boid, Energy, Position, Velocity};

pub fn run(world: &mut World) {
    for (_entity, (_boid, pos, vel, energy)) in
        world.query_mut::<(&Boid, &mut Position, &Velocity, &mut Energy)>()
    {
        pos.0 += vel.0;
        energy.level = (energy.level - vel.0.length()).max(0.0);
    }
}
