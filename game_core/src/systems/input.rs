use hecs::World;

use crate::components::*;
use crate::config::Config;
use crate::resources::*;
use crate::systems::{find_ship, fire_laser};

/// Apply queued player intents to the ship. Without a ship they are dropped.
pub fn ingest_intents(
    world: &mut World,
    intents: &mut IntentQueue,
    config: &Config,
    events: &mut Events,
) {
    let pending = intents.drain();
    let Some(entity) = find_ship(world) else {
        return;
    };

    for intent in pending {
        match intent {
            Intent::Rotate(rotation) => {
                if let Ok(ship) = world.query_one_mut::<&mut Ship>(entity) {
                    ship.rot = match rotation {
                        Rotation::Left => config.turn_rate(),
                        Rotation::Right => -config.turn_rate(),
                        Rotation::Stop => 0.0,
                    };
                }
            }
            Intent::Thrust(on) => {
                if let Ok(ship) = world.query_one_mut::<&mut Ship>(entity) {
                    ship.thrusting = on;
                }
            }
            Intent::Fire => {
                fire_laser(world, entity, config, events);
            }
        }
    }
}
