//! Read-only view of a session after a step, for the render collaborator

use glam::Vec2;

use crate::components::Body;

pub const NEW_HIGH_SCORE_LABEL: &str = "NEW HIGH SCORE";

#[derive(Debug, Clone, PartialEq)]
pub struct ShipView {
    pub body: Body,
    pub immune: bool,
    pub exploding: bool,
    pub thrusting: bool,
    pub lasers: Vec<Vec2>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidView {
    pub body: Body,
    pub outline: Vec<Vec2>,
    pub index: usize,
}

/// Anything drawn on the field
#[derive(Debug, Clone, PartialEq)]
pub enum EntityView {
    Ship(ShipView),
    Asteroid(AsteroidView),
}

impl EntityView {
    pub fn body(&self) -> &Body {
        match self {
            EntityView::Ship(ship) => &ship.body,
            EntityView::Asteroid(asteroid) => &asteroid.body,
        }
    }
}

/// Heads-up display values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub lives: u32,
    /// `NEW HIGH SCORE` once beaten, otherwise the previous best
    pub high_score_label: String,
}

impl Hud {
    pub fn new(score: u32, previous_high: u32, lives: u32) -> Self {
        let high_score_label = if score > previous_high {
            NEW_HIGH_SCORE_LABEL.to_string()
        } else {
            previous_high.to_string()
        };
        Self {
            score,
            lives,
            high_score_label,
        }
    }
}

/// Everything on screen after one step. The ship, when present, comes first.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub width: f32,
    pub height: f32,
    pub entities: Vec<EntityView>,
    pub hud: Hud,
}

impl Snapshot {
    pub fn ship(&self) -> Option<&ShipView> {
        self.entities.iter().find_map(|entity| match entity {
            EntityView::Ship(ship) => Some(ship),
            _ => None,
        })
    }

    pub fn asteroids(&self) -> impl Iterator<Item = &AsteroidView> {
        self.entities.iter().filter_map(|entity| match entity {
            EntityView::Asteroid(asteroid) => Some(asteroid),
            _ => None,
        })
    }
}
