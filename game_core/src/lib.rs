pub mod components;
pub mod config;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use snapshot::*;

use glam::Vec2;
use hecs::World;
use systems::*;

use crate::geometry::{random_f32, random_int, random_sign, random_unit, to_radians};

/// Advance a session by one display frame
pub fn step(session: &mut Session) {
    if session.status == Status::Over {
        return;
    }

    // Clear events at start of frame
    session.events.clear();

    // 1. Timers from earlier explosions
    dispatch_scheduled(
        &mut session.world,
        &mut session.scheduler,
        &session.time,
        session.generation,
        &session.arena,
        &session.config,
        session.settings.thrust,
        &mut session.events,
    );

    // 2. Player intents
    ingest_intents(
        &mut session.world,
        &mut session.intents,
        &session.config,
        &mut session.events,
    );

    // 3. Ship movement and laser hits, or explosion bookkeeping
    let exploding = find_ship(&session.world)
        .and_then(|e| session.world.get::<&Ship>(e).ok().map(|s| s.exploding));
    match exploding {
        Some(false) => {
            move_ship(&mut session.world, &session.arena, &session.config);
            laser_collisions(
                &mut session.world,
                &session.config,
                &mut session.score,
                &mut session.field,
                &mut session.rng,
                &mut session.events,
            );
        }
        Some(true) => explode_tick(
            &mut session.world,
            &mut session.lives,
            &mut session.scheduler,
            &session.time,
            &session.config,
            session.generation,
        ),
        None => {}
    }

    // 4. Empty field gets a fresh one
    refill_field(
        &mut session.world,
        &session.arena,
        &session.config,
        &mut session.field,
        &mut session.rng,
        &mut session.events,
    );

    // 5. Asteroid pass: repel, ship hit, drift, wrap
    update_asteroids(
        &mut session.world,
        &session.arena,
        &session.config,
        &mut session.events,
    );

    // 6. Terminal condition
    if check_game_over(&session.lives, &session.score, &mut session.events) {
        session.status = Status::Over;
    }

    session.time.advance();
}

/// Helper to create a ship at the arena centre
pub fn create_ship(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    thrust: f32,
    life: u32,
    immune: bool,
) -> hecs::Entity {
    let mut ship = Ship::new(thrust, life);
    ship.immune = immune;
    world.spawn((
        Body::new(
            arena.center(),
            config.ship_size,
            to_radians(config.ship_heading_deg),
        ),
        Velocity::default(),
        ship,
        Magazine::new(),
    ))
}

/// Helper to create an asteroid with a fresh random heading, velocity and outline
pub fn create_asteroid(
    world: &mut World,
    pos: Vec2,
    r: f32,
    index: usize,
    config: &Config,
    field: &mut FieldState,
    rng: &mut GameRng,
) -> hecs::Entity {
    let (min_speed, max_speed) = config.asteroid_speed;
    let a = random_f32(rng) * std::f32::consts::TAU;
    let vel = Vec2::new(
        random_int(rng, min_speed, max_speed) as f32 / config.fps * random_sign(rng),
        random_int(rng, min_speed, max_speed) as f32 / config.fps * random_sign(rng),
    );

    let (min_vertices, max_vertices) = Params::ASTEROID_VERTICES;
    let vertices = (random_int(rng, min_vertices, max_vertices)
        + random_int(rng, min_vertices, max_vertices)) as usize;
    let jaggedness = random_unit(rng);
    let offsets = (0..vertices)
        .map(|_| random_f32(rng) * jaggedness * 2.0 + 1.0 - jaggedness)
        .collect();

    world.spawn((
        Body::new(pos, r, a),
        Velocity::new(vel),
        Asteroid {
            vertices,
            jaggedness,
            offsets,
            index,
            serial: field.next(),
        },
    ))
}
