use hecs::{Entity, World};

use crate::components::*;
use crate::config::Config;
use crate::geometry::distance;
use crate::params::Params;
use crate::resources::*;
use crate::systems::{destroy_asteroid, find_ship, ordered_asteroids};

/// Fire from the ship's nose along its heading
pub fn fire_laser(
    world: &mut World,
    entity: Entity,
    config: &Config,
    events: &mut Events,
) -> FireOutcome {
    let Ok((body, ship, magazine)) = world.query_one_mut::<(&Body, &Ship, &mut Magazine)>(entity)
    else {
        return FireOutcome::Disabled;
    };
    if !ship.laser_enabled || ship.exploding {
        return FireOutcome::Disabled;
    }

    let laser = Laser {
        pos: body.ahead(Params::SHIP_NOSE),
        vel: body.heading() * config.laser_speed_per_frame(),
        travelled: 0.0,
    };
    let outcome = magazine.fire(laser, config.laser_max);
    events.lasers_fired += 1;
    if outcome == FireOutcome::Overheated {
        events.overheated = true;
        tracing::debug!("laser magazine overheated");
    }
    outcome
}

/// Advance lasers one frame.
///
/// Travel is accounted before the move: a laser past `budget` fizzles where
/// it is, and one that then crosses the canvas edge is dropped.
pub fn update_lasers(magazine: &mut Magazine, arena: &Arena, budget: f32) {
    magazine.lasers.retain_mut(|laser| {
        laser.travelled += laser.vel.length();
        laser.travelled <= budget
    });
    magazine.lasers.retain_mut(|laser| {
        laser.pos += laser.vel;
        arena.contains(laser.pos)
    });
}

/// Resolve laser hits against the field.
///
/// Asteroids are visited in creation order; each takes the oldest laser within
/// `π/2 · r` of its centre. Fragments spawned here are not hit until the next frame.
pub fn laser_collisions(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    field: &mut FieldState,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let Some(ship) = find_ship(world) else {
        return;
    };
    let mut lasers = match world.get::<&Magazine>(ship) {
        Ok(magazine) if !magazine.is_empty() => magazine.lasers.clone(),
        _ => return,
    };

    let mut hits = Vec::new();
    for (entity, body) in ordered_asteroids(world) {
        let hit = lasers
            .iter()
            .position(|laser| distance(laser.pos, body.pos) < Params::LASER_HIT_FACTOR * body.r);
        if let Some(i) = hit {
            lasers.remove(i);
            hits.push(entity);
        }
    }
    if hits.is_empty() {
        return;
    }

    if let Ok(magazine) = world.query_one_mut::<&mut Magazine>(ship) {
        magazine.lasers = lasers;
    }
    for entity in hits {
        destroy_asteroid(world, entity, config, score, field, rng, events);
    }
}
