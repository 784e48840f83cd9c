use crate::geometry::to_radians;
use crate::params::Params;

/// Device class the host is running on; selects sizes and spawn counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayClass {
    #[default]
    Desktop,
    /// Coarse-pointer device
    Mobile,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub fps: f32,
    pub ship_size: f32,
    pub ship_heading_deg: f32,
    pub ship_turn_deg: f32,
    pub ship_friction: f32,
    pub laser_speed: f32,
    pub laser_max: usize,
    pub laser_range: f32,
    pub display: DisplayClass,
    pub asteroid_radius: (i32, i32),
    pub asteroid_speed: (i32, i32),
    pub field_size: (i32, i32),
    pub opening_field: usize,
    pub starting_lives: f32,
    pub respawn_delay: f32,
    pub immunity_duration: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_display(DisplayClass::Desktop)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_display(display: DisplayClass) -> Self {
        let mobile = display == DisplayClass::Mobile;

        Self {
            fps: Params::FPS,
            ship_size: if mobile {
                Params::SHIP_SIZE_MOBILE
            } else {
                Params::SHIP_SIZE_DESKTOP
            },
            ship_heading_deg: Params::SHIP_HEADING_DEG,
            ship_turn_deg: Params::SHIP_TURN_DEG,
            ship_friction: Params::SHIP_FRICTION,
            laser_speed: Params::LASER_SPEED,
            laser_max: Params::LASER_MAX,
            laser_range: Params::LASER_RANGE,
            display,
            asteroid_radius: if mobile {
                Params::ASTEROID_RADIUS_MOBILE
            } else {
                Params::ASTEROID_RADIUS_DESKTOP
            },
            asteroid_speed: Params::ASTEROID_SPEED,
            field_size: if mobile {
                Params::FIELD_SIZE_MOBILE
            } else {
                Params::FIELD_SIZE_DESKTOP
            },
            opening_field: if mobile {
                Params::OPENING_FIELD_MOBILE
            } else {
                Params::OPENING_FIELD_DESKTOP
            },
            starting_lives: Params::STARTING_LIVES,
            respawn_delay: Params::RESPAWN_DELAY,
            immunity_duration: Params::IMMUNITY_DURATION,
        }
    }

    /// Whole frames in `secs` of simulated time
    pub fn frames(&self, secs: f32) -> u64 {
        (secs * self.fps).round().max(0.0) as u64
    }

    /// Rotation rate (radians per frame) while a turn is held
    pub fn turn_rate(&self) -> f32 {
        to_radians(self.ship_turn_deg) / self.fps
    }

    /// Velocity added per thrusting frame for a given thrust setting
    pub fn thrust_per_frame(&self, thrust: f32) -> f32 {
        thrust / self.fps / 2.0
    }

    pub fn laser_speed_per_frame(&self) -> f32 {
        self.laser_speed / self.fps
    }

    /// Distance a laser may travel before it fizzles out.
    ///
    /// Mobile devices held in portrait measure against the height; the
    /// orientation is read from the current arena on every call.
    pub fn laser_budget(&self, width: f32, height: f32) -> f32 {
        let reference = if self.display == DisplayClass::Mobile && height > width {
            height
        } else {
            width
        };
        self.laser_range * reference
    }

    /// Clear radius kept around the ship when seeding asteroids
    pub fn spawn_buffer(&self, ship_r: f32) -> f32 {
        ship_r * Params::SPAWN_BUFFER_RADII + ship_r
    }
}
