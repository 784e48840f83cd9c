use hecs::World;
use std::f32::consts::TAU;

use crate::components::*;
use crate::config::Config;
use crate::resources::*;
use crate::systems::update_lasers;

/// Integrate the ship one frame: thrust or friction, lasers, turn, move, wrap.
/// An exploding ship is left where it is.
pub fn move_ship(world: &mut World, arena: &Arena, config: &Config) {
    let budget = config.laser_budget(arena.width, arena.height);
    for (_entity, (body, velocity, ship, magazine)) in
        world.query_mut::<(&mut Body, &mut Velocity, &Ship, &mut Magazine)>()
    {
        if ship.exploding {
            continue;
        }

        if ship.thrusting {
            velocity.vel += body.heading() * config.thrust_per_frame(ship.thrust);
        } else {
            velocity.vel -= velocity.vel * (config.ship_friction / config.fps);
        }

        update_lasers(magazine, arena, budget);

        body.a = (body.a + ship.rot).rem_euclid(TAU);
        body.pos += velocity.vel;
        arena.wrap(body);
    }
}

/// Drift a body by its velocity and wrap it
pub fn drift(body: &mut Body, velocity: &Velocity, arena: &Arena) {
    body.pos += velocity.vel;
    arena.wrap(body);
}

/// Wrap every body in the world, ship and asteroids alike
pub fn wrap_all(world: &mut World, arena: &Arena) {
    for (_entity, body) in world.query_mut::<&mut Body>() {
        arena.wrap(body);
    }
}
