use glam::Vec2;

use crate::components::{Body, SizeTier};
use crate::params::Params;

/// Frame clock. The host calls `step` once per display refresh.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32, // seconds per frame
    pub now: f32, // total simulated seconds
    pub frame: u64, // frames completed
}

impl Time {
    pub fn new(fps: f32) -> Self {
        Self {
            dt: 1.0 / fps,
            now: 0.0,
            frame: 0,
        }
    }

    pub fn advance(&mut self) {
        self.frame += 1;
        self.now += self.dt;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new(Params::FPS)
    }
}

/// Drawing surface bounds; the field wraps at these edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Teleport a body that has fully left one edge to just outside the opposite one
    pub fn wrap(&self, body: &mut Body) {
        if body.pos.x < -body.r {
            body.pos.x = self.width + body.r;
        } else if body.pos.x > self.width + body.r {
            body.pos.x = -body.r;
        }
        if body.pos.y < -body.r {
            body.pos.y = self.height + body.r;
        } else if body.pos.y > self.height + body.r {
            body.pos.y = -body.r;
        }
    }

    /// Inside the visible canvas, edges included
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }
}

/// Score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub current: u32,
    pub previous_high: u32, // best stored score when the session began
}

impl Score {
    pub fn new(previous_high: u32) -> Self {
        Self {
            current: 0,
            previous_high,
        }
    }

    pub fn award(&mut self, points: u32) {
        self.current = self.current.saturating_add(points);
    }

    pub fn is_new_high(&self) -> bool {
        self.current > self.previous_high
    }
}

/// Remaining lives. Drains continuously while the ship is exploding.
#[derive(Debug, Clone, Copy)]
pub struct Lives {
    pub remaining: f32,
}

impl Lives {
    pub fn new(remaining: f32) -> Self {
        Self { remaining }
    }

    pub fn drain(&mut self, amount: f32) {
        self.remaining -= amount;
    }

    /// Whole lives as shown on the HUD
    pub fn display(&self) -> u32 {
        self.remaining.round().max(0.0) as u32
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining <= Params::LIVES_EPSILON
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Creation order of asteroids; the field is always processed in this order
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldState {
    pub next_serial: u64,
}

impl FieldState {
    pub fn next(&mut self) -> u64 {
        let serial = self.next_serial;
        self.next_serial += 1;
        serial
    }
}

/// An asteroid removed by a laser this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestroyedAsteroid {
    pub pos: Vec2,
    pub r: f32,
    pub tier: SizeTier,
    pub index: usize,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub destroyed: Vec<DestroyedAsteroid>,
    pub lasers_fired: u32,
    pub overheated: bool,
    pub ship_exploded: bool,
    pub ship_respawned: bool,
    pub immunity_ended: bool,
    pub field_respawned: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.destroyed.clear();
        self.lasers_fired = 0;
        self.overheated = false;
        self.ship_exploded = false;
        self.ship_respawned = false;
        self.immunity_ended = false;
        self.field_respawned = false;
        self.game_over = false;
    }
}

/// Turn direction requested by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
    Stop,
}

/// Device-independent player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Rotate(Rotation),
    Thrust(bool),
    Fire,
}

/// Intents received since the last step
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    pub intents: Vec<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.intents.clear();
    }

    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub fn drain(&mut self) -> Vec<Intent> {
        std::mem::take(&mut self.intents)
    }
}

/// Deferred ship lifecycle action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledKind {
    /// Replace the exploded ship with a fresh, immune one
    Respawn,
    /// End the respawned ship's immunity
    ClearImmunity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub due_frame: u64,
    pub generation: u32, // session generation that scheduled it
    pub life: u32, // ship life the event applies to
    pub kind: ScheduledKind,
}

/// Pending timed events, tagged with the session generation that owns them
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<ScheduledEvent>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, event: ScheduledEvent) {
        self.pending.push(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> &[ScheduledEvent] {
        &self.pending
    }

    /// Drop every event owned by `generation`; returns how many were dropped
    pub fn cancel_generation(&mut self, generation: u32) -> usize {
        let before = self.pending.len();
        self.pending.retain(|e| e.generation != generation);
        before - self.pending.len()
    }

    /// Remove and return events due by `frame`, in scheduling order.
    /// Events from any other generation are discarded, never returned.
    pub fn take_due(&mut self, frame: u64, generation: u32) -> Vec<ScheduledEvent> {
        self.pending.retain(|e| e.generation == generation);
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|e| e.due_frame <= frame);
        self.pending = waiting;
        due
    }
}
