/// Game tuning parameters for Asteroids
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Timing
    pub const FPS: f32 = 60.0; // nominal display refresh

    // Ship
    pub const SHIP_SIZE_DESKTOP: f32 = 30.0;
    pub const SHIP_SIZE_MOBILE: f32 = 15.0;
    pub const SHIP_HEADING_DEG: f32 = 90.0; // nose up
    pub const SHIP_TURN_DEG: f32 = 360.0; // degrees per second
    pub const SHIP_FRICTION: f32 = 0.5;
    pub const SHIP_NOSE: f32 = 4.0 / 3.0; // nose distance in radii

    // Lasers
    pub const LASER_SPEED: f32 = 300.0; // px per second
    pub const LASER_MAX: usize = 25;
    pub const LASER_RANGE: f32 = 0.5; // fraction of the reference dimension
    pub const LASER_HIT_FACTOR: f32 = std::f32::consts::FRAC_PI_2;

    // Asteroids (integer ranges are max-exclusive)
    pub const ASTEROID_RADIUS_DESKTOP: (i32, i32) = (60, 100);
    pub const ASTEROID_RADIUS_MOBILE: (i32, i32) = (30, 50);
    pub const ASTEROID_SPEED: (i32, i32) = (5, 10); // px per second per axis
    pub const ASTEROID_VERTICES: (i32, i32) = (2, 8); // drawn twice and summed
    pub const LARGE_MIN_RADIUS: f32 = 50.0;
    pub const MEDIUM_MIN_RADIUS: f32 = 25.0;

    // Score
    pub const SCORE_LARGE: u32 = 20;
    pub const SCORE_MEDIUM: u32 = 50;
    pub const SCORE_SMALL: u32 = 100;

    // Field
    pub const FIELD_SIZE_DESKTOP: (i32, i32) = (5, 10);
    pub const FIELD_SIZE_MOBILE: (i32, i32) = (2, 6);
    pub const OPENING_FIELD_DESKTOP: usize = 5;
    pub const OPENING_FIELD_MOBILE: usize = 2;
    pub const SPAWN_BUFFER_RADII: f32 = 5.0; // plus one more ship radius
    pub const SPAWN_NUDGE: f32 = 20.0;
    pub const SPAWN_ATTEMPTS: u32 = 20;

    // Lives
    pub const STARTING_LIVES: f32 = 3.0;
    pub const RESPAWN_DELAY: f32 = 1.0; // seconds after explosion start
    pub const IMMUNITY_DURATION: f32 = 5.0; // seconds after explosion start
    pub const LIVES_EPSILON: f32 = 1e-3;
}
