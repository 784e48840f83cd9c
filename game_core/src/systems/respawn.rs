use glam::Vec2;
use hecs::{Entity, World};

use crate::components::*;
use crate::config::Config;
use crate::create_ship;
use crate::resources::*;

/// The current ship, if one exists
pub fn find_ship(world: &World) -> Option<Entity> {
    world.query::<&Ship>().iter().next().map(|(entity, _)| entity)
}

/// Explosion bookkeeping for one frame.
///
/// The ship is held in place with its lasers disabled while lives drain by
/// `1 / fps`. Respawn and immunity timers are scheduled on the first frame.
pub fn explode_tick(
    world: &mut World,
    lives: &mut Lives,
    scheduler: &mut Scheduler,
    time: &Time,
    config: &Config,
    generation: u32,
) {
    let Some(entity) = find_ship(world) else {
        return;
    };
    let Ok((velocity, ship)) = world.query_one_mut::<(&mut Velocity, &mut Ship)>(entity) else {
        return;
    };
    if !ship.exploding {
        return;
    }

    if !ship.immune {
        velocity.vel = Vec2::ZERO;
    }
    ship.laser_enabled = false;

    if ship.explosion_frames == 0 {
        scheduler.schedule(ScheduledEvent {
            due_frame: time.frame + config.frames(config.respawn_delay),
            generation,
            life: ship.life,
            kind: ScheduledKind::Respawn,
        });
        scheduler.schedule(ScheduledEvent {
            due_frame: time.frame + config.frames(config.immunity_duration),
            generation,
            life: ship.life + 1,
            kind: ScheduledKind::ClearImmunity,
        });
    }
    ship.explosion_frames += 1;
    lives.drain(1.0 / config.fps);
}

/// Apply every scheduled event that has come due for this generation
#[allow(clippy::too_many_arguments)]
pub fn dispatch_scheduled(
    world: &mut World,
    scheduler: &mut Scheduler,
    time: &Time,
    generation: u32,
    arena: &Arena,
    config: &Config,
    thrust: f32,
    events: &mut Events,
) {
    for event in scheduler.take_due(time.frame, generation) {
        let Some(entity) = find_ship(world) else {
            continue;
        };
        let Ok(ship) = world.get::<&Ship>(entity).map(|s| *s) else {
            continue;
        };
        if ship.life != event.life {
            continue;
        }

        match event.kind {
            ScheduledKind::Respawn => {
                if !ship.exploding {
                    continue;
                }
                let _ = world.despawn(entity);
                create_ship(world, arena, config, thrust, ship.life + 1, true);
                events.ship_respawned = true;
                tracing::info!(life = ship.life + 1, "ship respawned");
            }
            ScheduledKind::ClearImmunity => {
                if let Ok(ship) = world.query_one_mut::<&mut Ship>(entity) {
                    ship.immune = false;
                }
                events.immunity_ended = true;
            }
        }
    }
}
