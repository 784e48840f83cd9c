use glam::Vec2;
use hecs::{Entity, World};

use crate::components::*;
use crate::config::Config;
use crate::geometry::{circle_gap, distance};
use crate::resources::*;
use crate::systems::{drift, find_ship, ordered_asteroids};

/// Edge gap below which two asteroids push each other apart
pub fn nudge_threshold(a: &Body, b: &Body) -> f32 {
    a.r.max(b.r)
}

/// Per-asteroid pass in creation order: repel close neighbours, test the
/// ship, then drift and wrap.
pub fn update_asteroids(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    let order: Vec<Entity> = ordered_asteroids(world)
        .into_iter()
        .map(|(entity, _)| entity)
        .collect();
    let ship = find_ship(world);

    for (i, &entity) in order.iter().enumerate() {
        asteroid_to_asteroid(world, entity, &order[i + 1..], config.fps);
        if let Some(ship) = ship {
            asteroid_to_ship(world, entity, ship, events);
        }
        if let Ok((body, velocity)) = world.query_one_mut::<(&mut Body, &Velocity)>(entity) {
            drift(body, velocity, arena);
        }
    }
}

/// Nudge `entity` and every later asteroid that is close to it.
///
/// Each pair is visited once, from its earlier member.
pub fn asteroid_to_asteroid(world: &mut World, entity: Entity, later: &[Entity], fps: f32) {
    let Ok(body) = world.get::<&Body>(entity).map(|b| *b) else {
        return;
    };
    for &other in later {
        let Ok(other_body) = world.get::<&Body>(other).map(|b| *b) else {
            continue;
        };
        let gap = circle_gap(body.pos, body.r, other_body.pos, other_body.r);
        if gap < nudge_threshold(&body, &other_body) {
            nudge(world, entity, fps);
            nudge(world, other, fps);
        }
    }
}

/// Damp the velocity toward zero and add a unit push derived from the heading
fn nudge(world: &mut World, entity: Entity, fps: f32) {
    if let Ok((body, velocity)) = world.query_one_mut::<(&Body, &mut Velocity)>(entity) {
        velocity.vel = velocity.vel / (fps / 2.0) + Vec2::new((-body.a).sin(), (-body.a).cos());
    }
}

/// Flag the ship as exploding when this asteroid overlaps it.
/// Immune ships are untouched; the asteroid itself survives.
pub fn asteroid_to_ship(
    world: &mut World,
    asteroid: Entity,
    ship_entity: Entity,
    events: &mut Events,
) {
    let Ok(rock) = world.get::<&Body>(asteroid).map(|b| *b) else {
        return;
    };
    let Ok((body, ship)) = world.query_one_mut::<(&Body, &mut Ship)>(ship_entity) else {
        return;
    };
    if ship.immune || ship.exploding {
        return;
    }
    if distance(rock.pos, body.pos) < body.r + rock.r {
        ship.exploding = true;
        events.ship_exploded = true;
        tracing::info!(life = ship.life, "ship hit by asteroid");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_asteroid, create_ship};

    struct Setup {
        world: World,
        arena: Arena,
        config: Config,
        field: FieldState,
        rng: GameRng,
        events: Events,
    }

    fn setup_world() -> Setup {
        Setup {
            world: World::new(),
            arena: Arena::new(800.0, 600.0),
            config: Config::new(),
            field: FieldState::default(),
            rng: GameRng::new(42),
            events: Events::new(),
        }
    }

    fn rock(s: &mut Setup, x: f32, y: f32, r: f32) -> Entity {
        create_asteroid(
            &mut s.world,
            Vec2::new(x, y),
            r,
            0,
            &s.config,
            &mut s.field,
            &mut s.rng,
        )
    }

    #[test]
    fn test_close_asteroids_are_nudged() {
        let mut s = setup_world();
        let a = rock(&mut s, 100.0, 100.0, 40.0);
        let b = rock(&mut s, 190.0, 100.0, 40.0); // gap 10 < 40
        let heading_a = s.world.get::<&Body>(a).unwrap().a;
        let vel_a = s.world.get::<&Velocity>(a).unwrap().vel;

        asteroid_to_asteroid(&mut s.world, a, &[b], s.config.fps);

        let expected = vel_a / 30.0 + Vec2::new((-heading_a).sin(), (-heading_a).cos());
        let got = s.world.get::<&Velocity>(a).unwrap().vel;
        assert!((got - expected).length() < 1e-5);
        assert!((s.world.get::<&Velocity>(b).unwrap().vel.length() - 1.0).abs() < 0.2);
    }

    #[test]
    fn test_each_close_pair_nudged_once_per_pass() {
        let mut s = setup_world();
        // A-B and B-C are 10 px apart at the edges, A-C is 80 px apart
        let a = rock(&mut s, 100.0, 300.0, 30.0);
        let b = rock(&mut s, 170.0, 300.0, 30.0);
        let c = rock(&mut s, 240.0, 300.0, 30.0);
        for entity in [a, b, c] {
            s.world.get::<&mut Body>(entity).unwrap().a = 0.0;
            s.world.get::<&mut Velocity>(entity).unwrap().vel = Vec2::ZERO;
        }

        update_asteroids(&mut s.world, &s.arena, &s.config, &mut s.events);

        // One nudge from rest gives (0, 1); a second adds 1 to the damped value
        let once = Vec2::new(0.0, 1.0);
        let twice = Vec2::new(0.0, 1.0 / 30.0 + 1.0);
        let vel = |e: Entity| s.world.get::<&Velocity>(e).unwrap().vel;
        assert!((vel(a) - once).length() < 1e-5, "A: {:?}", vel(a));
        assert!((vel(b) - twice).length() < 1e-5, "B: {:?}", vel(b));
        assert!((vel(c) - once).length() < 1e-5, "C: {:?}", vel(c));
        assert_eq!(s.world.get::<&Body>(a).unwrap().pos, Vec2::new(100.0, 301.0));
    }

    #[test]
    fn test_distant_asteroids_are_untouched() {
        let mut s = setup_world();
        let a = rock(&mut s, 100.0, 100.0, 40.0);
        let b = rock(&mut s, 400.0, 100.0, 40.0); // gap 220
        let before_a = s.world.get::<&Velocity>(a).unwrap().vel;
        let before_b = s.world.get::<&Velocity>(b).unwrap().vel;

        asteroid_to_asteroid(&mut s.world, a, &[b], s.config.fps);

        assert_eq!(s.world.get::<&Velocity>(a).unwrap().vel, before_a);
        assert_eq!(s.world.get::<&Velocity>(b).unwrap().vel, before_b);
    }

    #[test]
    fn test_overlap_explodes_ship() {
        let mut s = setup_world();
        let ship = create_ship(&mut s.world, &s.arena, &s.config, 2.0, 0, false);
        let a = rock(&mut s, 400.0, 350.0, 30.0); // 50 < 30 + 30

        asteroid_to_ship(&mut s.world, a, ship, &mut s.events);

        assert!(s.world.get::<&Ship>(ship).unwrap().exploding);
        assert!(s.events.ship_exploded);
        assert!(s.world.get::<&Asteroid>(a).is_ok(), "Asteroid survives");
    }

    #[test]
    fn test_immune_ship_never_explodes() {
        let mut s = setup_world();
        let ship = create_ship(&mut s.world, &s.arena, &s.config, 2.0, 1, true);
        let a = rock(&mut s, 400.0, 300.0, 60.0);

        for _ in 0..10 {
            asteroid_to_ship(&mut s.world, a, ship, &mut s.events);
        }

        assert!(!s.world.get::<&Ship>(ship).unwrap().exploding);
        assert!(!s.events.ship_exploded);
    }

    #[test]
    fn test_touching_is_not_overlap() {
        let mut s = setup_world();
        let ship = create_ship(&mut s.world, &s.arena, &s.config, 2.0, 0, false);
        let a = rock(&mut s, 400.0, 360.0, 30.0); // exactly r + r apart

        asteroid_to_ship(&mut s.world, a, ship, &mut s.events);

        assert!(!s.world.get::<&Ship>(ship).unwrap().exploding);
    }

    #[test]
    fn test_update_asteroids_moves_and_wraps() {
        let mut s = setup_world();
        let a = rock(&mut s, 845.0, 300.0, 40.0);
        s.world.get::<&mut Velocity>(a).unwrap().vel = Vec2::new(0.1, 0.0);

        update_asteroids(&mut s.world, &s.arena, &s.config, &mut s.events);

        let body = *s.world.get::<&Body>(a).unwrap();
        assert_eq!(body.pos.x, -40.0);
    }

    #[test]
    fn test_update_asteroids_without_ship() {
        let mut s = setup_world();
        rock(&mut s, 100.0, 100.0, 40.0);

        update_asteroids(&mut s.world, &s.arena, &s.config, &mut s.events);

        assert!(!s.events.ship_exploded);
    }
}
