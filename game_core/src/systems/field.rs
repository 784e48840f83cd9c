use glam::Vec2;
use hecs::{Entity, World};

use crate::components::*;
use crate::config::Config;
use crate::create_asteroid;
use crate::geometry::{distance, random_int};
use crate::params::Params;
use crate::resources::*;
use crate::systems::find_ship;

/// Live asteroids in creation order
pub fn ordered_asteroids(world: &World) -> Vec<(Entity, Body)> {
    let mut asteroids: Vec<(Entity, Body, u64)> = world
        .query::<(&Body, &Asteroid)>()
        .iter()
        .map(|(entity, (body, asteroid))| (entity, *body, asteroid.serial))
        .collect();
    asteroids.sort_by_key(|(_, _, serial)| *serial);
    asteroids
        .into_iter()
        .map(|(entity, body, _)| (entity, body))
        .collect()
}

/// Replace the field with `count` fresh asteroids, keeping them clear of the ship
pub fn spawn_field(
    world: &mut World,
    count: usize,
    arena: &Arena,
    config: &Config,
    field: &mut FieldState,
    rng: &mut GameRng,
) {
    let existing: Vec<Entity> = ordered_asteroids(world)
        .into_iter()
        .map(|(entity, _)| entity)
        .collect();
    for entity in existing {
        let _ = world.despawn(entity);
    }

    let ship = find_ship(world).and_then(|e| world.get::<&Body>(e).ok().map(|b| *b));
    let (w, h) = (arena.width as i32, arena.height as i32);

    for index in 0..count {
        let mut pos = Vec2::new(random_int(rng, 0, w) as f32, random_int(rng, 0, h) as f32);
        let r = random_int(rng, config.asteroid_radius.0, config.asteroid_radius.1) as f32;
        if let Some(ship) = ship {
            pos = clear_of_ship(pos, &ship, arena, config, rng);
        }
        create_asteroid(world, pos, r, index, config, field, rng);
    }
    tracing::debug!(count, "asteroid field spawned");
}

/// Move a spawn point out of the buffer around the ship
fn clear_of_ship(
    mut pos: Vec2,
    ship: &Body,
    arena: &Arena,
    config: &Config,
    rng: &mut GameRng,
) -> Vec2 {
    let buffer = config.spawn_buffer(ship.r);
    let offset = Vec2::splat(ship.r + Params::SPAWN_NUDGE) + ship.pos;
    let (w, h) = (arena.width as i32, arena.height as i32);

    for _ in 0..Params::SPAWN_ATTEMPTS {
        if distance(pos, ship.pos) > buffer {
            return pos;
        }
        pos = Vec2::new(
            (random_int(rng, 0, w) as f32 + offset.x).rem_euclid(arena.width.max(1.0)),
            (random_int(rng, 0, h) as f32 + offset.y).rem_euclid(arena.height.max(1.0)),
        );
    }
    if distance(pos, ship.pos) > buffer {
        return pos;
    }

    let away = (pos - ship.pos).try_normalize().unwrap_or(Vec2::X);
    ship.pos + away * (buffer + 1.0)
}

/// Destroy one asteroid: award its points and split it when large enough
pub fn destroy_asteroid(
    world: &mut World,
    entity: Entity,
    config: &Config,
    score: &mut Score,
    field: &mut FieldState,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let Ok((body, index)) = world
        .query_one_mut::<(&Body, &Asteroid)>(entity)
        .map(|(body, asteroid)| (*body, asteroid.index))
    else {
        return;
    };
    let tier = Asteroid::tier(&body);

    score.award(tier.award());
    let _ = world.despawn(entity);
    if tier.splits() {
        create_asteroid(world, body.pos, body.r / 2.0, index + 1, config, field, rng);
        create_asteroid(world, body.pos, body.r / 2.0, index + 2, config, field, rng);
    }

    events.destroyed.push(DestroyedAsteroid {
        pos: body.pos,
        r: body.r,
        tier,
        index,
    });
    tracing::debug!(r = body.r, ?tier, score = score.current, "asteroid destroyed");
}

/// Respawn a whole field once the last asteroid is gone
pub fn refill_field(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    field: &mut FieldState,
    rng: &mut GameRng,
    events: &mut Events,
) {
    if world.query::<&Asteroid>().iter().next().is_some() {
        return;
    }
    let count = random_int(rng, config.field_size.0, config.field_size.1).max(0) as usize;
    spawn_field(world, count, arena, config, field, rng);
    events.field_respawned = true;
}
