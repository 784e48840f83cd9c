//! Drawing adapter between a session snapshot and a 2D canvas

use glam::Vec2;

use crate::components::Body;
use crate::session::Session;
use crate::snapshot::{EntityView, ShipView};

pub const IMMUNE_COLOUR: &str = "gold";
pub const ASTEROID_COLOUR: &str = "#BADA55";
pub const FLAME_STROKE: &str = "yellow";
pub const FLAME_FILL: &str = "red";

/// Explosion rings, outermost first: (extra radius, colour)
pub const EXPLOSION_RINGS: [(f32, &str); 3] = [
    (10.0, "#db4200"),
    (5.0, "#f26900"),
    (2.0, "#f29d00"),
];

/// A canvas the host owns. Sizes are in device-adjusted pixels.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn clear(&mut self);
    fn polygon(&mut self, points: &[Vec2], stroke: &str, fill: Option<&str>);
    fn circle(&mut self, centre: Vec2, r: f32, colour: &str);
}

/// Outer hull triangle: nose, rear left, rear right
pub fn hull(body: &Body) -> [Vec2; 3] {
    let (sin, cos) = body.a.sin_cos();
    let Body { pos, r, .. } = *body;
    [
        pos + Vec2::new(4.0 / 3.0 * r * cos, -4.0 / 3.0 * r * sin),
        pos + Vec2::new(-r * (2.0 / 3.0 * cos + sin), r * (2.0 / 3.0 * sin - cos)),
        pos + Vec2::new(-r * (2.0 / 3.0 * cos - sin), r * (2.0 / 3.0 * sin + cos)),
    ]
}

fn inner_rear(body: &Body) -> [Vec2; 2] {
    let (sin, cos) = body.a.sin_cos();
    let Body { pos, r, .. } = *body;
    [
        pos + Vec2::new(-r * (2.0 / 3.0 * cos + 0.75 * sin), r * (2.0 / 3.0 * sin - 0.75 * cos)),
        pos + Vec2::new(-r * (2.0 / 3.0 * cos - 0.75 * sin), r * (2.0 / 3.0 * sin + 0.75 * cos)),
    ]
}

/// Filled cockpit triangle inside the hull
pub fn cockpit(body: &Body, ship_size: f32) -> [Vec2; 3] {
    let (sin, cos) = body.a.sin_cos();
    let reach = body.r / 5.0 - ship_size;
    let [left, right] = inner_rear(body);
    [body.pos + Vec2::new(-reach * cos, reach * sin), left, right]
}

/// Exhaust flame behind the ship
pub fn flame(body: &Body) -> [Vec2; 3] {
    let (sin, cos) = body.a.sin_cos();
    let [left, right] = inner_rear(body);
    [
        body.pos + Vec2::new(-5.0 / 3.0 * body.r * cos, 5.0 / 3.0 * body.r * sin),
        left,
        right,
    ]
}

/// Resize the session when the host surface has changed size
pub fn sync_to_surface(session: &mut Session, surface: &impl Surface) {
    let (width, height) = (surface.width(), surface.height());
    if width != session.arena.width || height != session.arena.height {
        tracing::debug!(width, height, "surface resized");
        session.resize(width, height);
    }
}

/// Draw the current state of `session`
pub fn draw_frame(session: &Session, surface: &mut impl Surface) {
    let snapshot = session.snapshot();
    let settings = &session.settings;
    let laser_r = session.config.ship_size / 8.0;

    surface.clear();
    for entity in &snapshot.entities {
        match entity {
            EntityView::Ship(ship) => {
                draw_ship(ship, session, surface);
                for laser in &ship.lasers {
                    surface.circle(*laser, laser_r, &settings.color_laser);
                }
            }
            EntityView::Asteroid(asteroid) => {
                surface.polygon(&asteroid.outline, ASTEROID_COLOUR, None);
            }
        }
    }
}

fn draw_ship(ship: &ShipView, session: &Session, surface: &mut impl Surface) {
    let body = &ship.body;
    if ship.exploding {
        for (extra, colour) in EXPLOSION_RINGS {
            surface.circle(body.pos, body.r + extra, colour);
        }
        return;
    }

    let (stroke, fill) = if ship.immune {
        (IMMUNE_COLOUR, IMMUNE_COLOUR)
    } else {
        (
            session.settings.color_stroke.as_str(),
            session.settings.color_fill.as_str(),
        )
    };
    surface.polygon(&hull(body), stroke, None);
    surface.polygon(&cockpit(body, session.config.ship_size), stroke, Some(fill));
    if ship.thrusting {
        surface.polygon(&flame(body), FLAME_STROKE, Some(FLAME_FILL));
    }
}
