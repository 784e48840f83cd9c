use glam::Vec2;

use crate::params::Params;

/// Spatial state shared by the ship and every asteroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub r: f32, // collision and drawing extent
    pub a: f32, // heading, radians
}

impl Body {
    pub fn new(pos: Vec2, r: f32, a: f32) -> Self {
        Self { pos, r, a }
    }

    /// Unit vector along the heading in screen space (y grows downward)
    pub fn heading(&self) -> Vec2 {
        Vec2::new(self.a.cos(), -self.a.sin())
    }

    /// Point `radii` radii ahead of the centre along the heading
    pub fn ahead(&self, radii: f32) -> Vec2 {
        self.pos + self.heading() * (radii * self.r)
    }
}

/// Per-frame displacement in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity {
    pub vel: Vec2,
}

impl Velocity {
    pub fn new(vel: Vec2) -> Self {
        Self { vel }
    }
}

/// Player ship state
#[derive(Debug, Clone, Copy)]
pub struct Ship {
    pub rot: f32, // radians per frame
    pub thrust: f32, // thrust setting captured at creation
    pub thrusting: bool,
    pub immune: bool,
    pub laser_enabled: bool,
    pub exploding: bool,
    pub explosion_frames: u32,
    pub life: u32, // which life this ship belongs to
}

impl Ship {
    pub fn new(thrust: f32, life: u32) -> Self {
        Self {
            rot: 0.0,
            thrust,
            thrusting: false,
            immune: false,
            laser_enabled: true,
            exploding: false,
            explosion_frames: 0,
            life,
        }
    }
}

/// A laser bolt in flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laser {
    pub pos: Vec2,
    pub vel: Vec2,
    pub travelled: f32,
}

/// What a trigger pull did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    Fired,
    /// One last shot at the cap; the whole magazine was dumped
    Overheated,
    Disabled,
}

/// Lasers in flight, oldest first
#[derive(Debug, Clone, Default)]
pub struct Magazine {
    pub lasers: Vec<Laser>,
}

impl Magazine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lasers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lasers.is_empty()
    }

    /// Append a laser, or overheat when already holding `max`
    pub fn fire(&mut self, laser: Laser, max: usize) -> FireOutcome {
        if self.lasers.len() < max {
            self.lasers.push(laser);
            FireOutcome::Fired
        } else {
            self.lasers.push(laser);
            self.lasers.clear();
            FireOutcome::Overheated
        }
    }
}

/// Size class of an asteroid, by radius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Large,
    Medium,
    Small,
}

impl SizeTier {
    pub fn from_radius(r: f32) -> Self {
        if r > Params::LARGE_MIN_RADIUS {
            SizeTier::Large
        } else if r > Params::MEDIUM_MIN_RADIUS {
            SizeTier::Medium
        } else {
            SizeTier::Small
        }
    }

    /// Points for hitting an asteroid of this size
    pub fn award(self) -> u32 {
        match self {
            SizeTier::Large => Params::SCORE_LARGE,
            SizeTier::Medium => Params::SCORE_MEDIUM,
            SizeTier::Small => Params::SCORE_SMALL,
        }
    }

    pub fn splits(self) -> bool {
        !matches!(self, SizeTier::Small)
    }
}

/// Procedural asteroid shape. Fixed at creation and never regenerated.
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub vertices: usize,
    pub jaggedness: f32,
    pub offsets: Vec<f32>,
    pub index: usize, // creation index, for debugging
    pub serial: u64, // processing order
}

impl Asteroid {
    pub fn tier(body: &Body) -> SizeTier {
        SizeTier::from_radius(body.r)
    }

    /// Polygon points of the silhouette around `body`
    pub fn outline(&self, body: &Body) -> Vec<Vec2> {
        let step = std::f32::consts::TAU / self.vertices as f32;
        self.offsets
            .iter()
            .enumerate()
            .map(|(i, offset)| {
                let angle = body.a + i as f32 * step;
                body.pos + Vec2::new(angle.cos(), angle.sin()) * (offset * body.r)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laser() -> Laser {
        Laser {
            pos: Vec2::ZERO,
            vel: Vec2::X,
            travelled: 0.0,
        }
    }

    #[test]
    fn test_heading_points_up_at_ninety_degrees() {
        let body = Body::new(Vec2::new(100.0, 100.0), 30.0, std::f32::consts::FRAC_PI_2);
        let heading = body.heading();
        assert!(heading.x.abs() < 1e-6);
        assert!((heading.y + 1.0).abs() < 1e-6, "Up is negative y");
    }

    #[test]
    fn test_nose_is_four_thirds_radius_ahead() {
        let body = Body::new(Vec2::new(100.0, 100.0), 30.0, 0.0);
        let nose = body.ahead(Params::SHIP_NOSE);
        assert!((nose.x - 140.0).abs() < 1e-4);
        assert!((nose.y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_magazine_fills_to_cap() {
        let mut magazine = Magazine::new();
        for _ in 0..Params::LASER_MAX {
            assert_eq!(magazine.fire(laser(), Params::LASER_MAX), FireOutcome::Fired);
        }
        assert_eq!(magazine.len(), Params::LASER_MAX);
    }

    #[test]
    fn test_magazine_overheats_at_cap() {
        let mut magazine = Magazine::new();
        for _ in 0..Params::LASER_MAX {
            magazine.fire(laser(), Params::LASER_MAX);
        }
        let outcome = magazine.fire(laser(), Params::LASER_MAX);
        assert_eq!(outcome, FireOutcome::Overheated);
        assert!(magazine.is_empty(), "Overheat should dump every laser");
    }

    #[test]
    fn test_size_tiers() {
        assert_eq!(SizeTier::from_radius(100.0), SizeTier::Large);
        assert_eq!(SizeTier::from_radius(50.5), SizeTier::Large);
        assert_eq!(SizeTier::from_radius(50.0), SizeTier::Medium);
        assert_eq!(SizeTier::from_radius(25.5), SizeTier::Medium);
        assert_eq!(SizeTier::from_radius(25.0), SizeTier::Small);
        assert_eq!(SizeTier::from_radius(12.0), SizeTier::Small);
    }

    #[test]
    fn test_awards() {
        assert_eq!(SizeTier::Large.award(), 20);
        assert_eq!(SizeTier::Medium.award(), 50);
        assert_eq!(SizeTier::Small.award(), 100);
        assert!(SizeTier::Large.splits());
        assert!(SizeTier::Medium.splits());
        assert!(!SizeTier::Small.splits());
    }

    #[test]
    fn test_outline_has_one_point_per_vertex() {
        let asteroid = Asteroid {
            vertices: 4,
            jaggedness: 0.0,
            offsets: vec![1.0; 4],
            index: 0,
            serial: 0,
        };
        let body = Body::new(Vec2::new(10.0, 10.0), 5.0, 0.0);
        let points = asteroid.outline(&body);
        assert_eq!(points.len(), 4);
        assert!((points[0] - Vec2::new(15.0, 10.0)).length() < 1e-4);
        assert!((points[1] - Vec2::new(10.0, 15.0)).length() < 1e-4);
    }
}
