use hecs::World;
use records::{HighScore, HighScores, Settings};

use crate::components::*;
use crate::config::Config;
use crate::resources::*;
use crate::snapshot::*;
use crate::systems::{find_ship, ordered_asteroids, spawn_field, wrap_all};
use crate::create_ship;

/// Whether the session still accepts steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Over,
}

/// One game: the world plus every resource a step touches
pub struct Session {
    pub world: World,
    pub time: Time,
    pub arena: Arena,
    pub config: Config,
    pub settings: Settings,
    pub score: Score,
    pub lives: Lives,
    pub field: FieldState,
    pub events: Events,
    pub intents: IntentQueue,
    pub scheduler: Scheduler,
    pub rng: GameRng,
    pub generation: u32,
    pub status: Status,
}

impl Session {
    /// Start a game with the first ship at the centre and the opening field around it
    pub fn new(
        config: Config,
        settings: Settings,
        width: f32,
        height: f32,
        previous_high: u32,
        seed: u64,
    ) -> Self {
        let mut session = Self {
            world: World::new(),
            time: Time::new(config.fps),
            arena: Arena::new(width, height),
            lives: Lives::new(config.starting_lives),
            config,
            settings: settings.validated(),
            score: Score::new(previous_high),
            field: FieldState::default(),
            events: Events::new(),
            intents: IntentQueue::new(),
            scheduler: Scheduler::new(),
            rng: GameRng::new(seed),
            generation: 0,
            status: Status::Playing,
        };
        session.populate();
        tracing::info!(width, height, previous_high, "session started");
        session
    }

    fn populate(&mut self) {
        create_ship(
            &mut self.world,
            &self.arena,
            &self.config,
            self.settings.thrust,
            0,
            false,
        );
        spawn_field(
            &mut self.world,
            self.config.opening_field,
            &self.arena,
            &self.config,
            &mut self.field,
            &mut self.rng,
        );
    }

    /// Start over in place. Timers from the old game are cancelled and the
    /// best score seen so far becomes the high score to beat.
    pub fn reset(&mut self) {
        let cancelled = self.scheduler.cancel_generation(self.generation);
        self.generation += 1;

        let previous_high = self.score.previous_high.max(self.score.current);
        self.world.clear();
        self.time = Time::new(self.config.fps);
        self.score = Score::new(previous_high);
        self.lives = Lives::new(self.config.starting_lives);
        self.field = FieldState::default();
        self.events.clear();
        self.intents.clear();
        self.status = Status::Playing;
        self.populate();

        tracing::info!(generation = self.generation, cancelled, "session reset");
    }

    /// Move the wrap boundary, pulling anything now out of bounds back in
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena = Arena::new(width, height);
        wrap_all(&mut self.world, &self.arena);
    }

    /// New settings take effect from the next ship
    pub fn apply_settings(&mut self, settings: Settings) {
        self.settings = settings.validated();
    }

    pub fn push_intent(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub fn rotate(&mut self, rotation: Rotation) {
        self.push_intent(Intent::Rotate(rotation));
    }

    pub fn set_thrusting(&mut self, on: bool) {
        self.push_intent(Intent::Thrust(on));
    }

    pub fn fire(&mut self) {
        self.push_intent(Intent::Fire);
    }

    pub fn step(&mut self) {
        crate::step(self);
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }

    pub fn ship(&self) -> Option<Ship> {
        find_ship(&self.world).and_then(|e| self.world.get::<&Ship>(e).ok().map(|s| *s))
    }

    pub fn asteroid_count(&self) -> usize {
        self.world.query::<&Asteroid>().iter().count()
    }

    /// Entities and HUD as they stand after the last step
    pub fn snapshot(&self) -> Snapshot {
        let mut entities = Vec::new();

        if let Some(entity) = find_ship(&self.world) {
            if let Ok(mut query) = self.world.query_one::<(&Body, &Ship, &Magazine)>(entity) {
                if let Some((body, ship, magazine)) = query.get() {
                    entities.push(EntityView::Ship(ShipView {
                        body: *body,
                        immune: ship.immune,
                        exploding: ship.exploding,
                        thrusting: ship.thrusting,
                        lasers: magazine.lasers.iter().map(|l| l.pos).collect(),
                    }));
                }
            }
        }

        for (entity, body) in ordered_asteroids(&self.world) {
            if let Ok(asteroid) = self.world.get::<&Asteroid>(entity) {
                entities.push(EntityView::Asteroid(AsteroidView {
                    body,
                    outline: asteroid.outline(&body),
                    index: asteroid.index,
                }));
            }
        }

        Snapshot {
            width: self.arena.width,
            height: self.arena.height,
            entities,
            hud: Hud::new(
                self.score.current,
                self.score.previous_high,
                self.lives.display(),
            ),
        }
    }

    /// Record the final score in `table`. Returns true if it made the table.
    pub fn submit_score(&self, name: &str, table: &mut HighScores) -> bool {
        let placed = table.insert(HighScore::new(name, self.score.current));
        tracing::info!(name, score = self.score.current, placed, "score submitted");
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_session() -> Session {
        Session::new(Config::new(), Settings::default(), 800.0, 600.0, 0, 42)
    }

    #[test]
    fn test_new_session_has_ship_and_opening_field() {
        let session = setup_session();
        let ship = session.ship().unwrap();
        assert!(!ship.immune);
        assert_eq!(ship.thrust, Settings::THRUST_DEFAULT);
        assert_eq!(session.asteroid_count(), 5);
        assert_eq!(session.status, Status::Playing);
    }

    #[test]
    fn test_mobile_opening_field() {
        let config = Config::for_display(crate::config::DisplayClass::Mobile);
        let session = Session::new(config, Settings::default(), 400.0, 800.0, 0, 1);
        assert_eq!(session.asteroid_count(), 2);
    }

    #[test]
    fn test_intents_queue_until_step() {
        let mut session = setup_session();
        session.set_thrusting(true);
        assert!(!session.ship().unwrap().thrusting);

        session.step();

        assert!(session.ship().unwrap().thrusting);
    }

    #[test]
    fn test_resize_rewraps_entities() {
        let mut session = setup_session();
        session.resize(200.0, 150.0);

        for (_, body) in ordered_asteroids(&session.world) {
            assert!(body.pos.x >= -body.r && body.pos.x <= 200.0 + body.r);
            assert!(body.pos.y >= -body.r && body.pos.y <= 150.0 + body.r);
        }
        assert_eq!(session.arena, Arena::new(200.0, 150.0));
    }

    #[test]
    fn test_rotating_to_landscape_restores_width_range() {
        let config = Config::for_display(crate::config::DisplayClass::Mobile);
        let mut session = Session::new(config, Settings::default(), 400.0, 800.0, 0, 11);
        assert_eq!(session.config.laser_budget(400.0, 800.0), 400.0);

        session.resize(800.0, 400.0);
        assert_eq!(
            session.config.laser_budget(session.arena.width, session.arena.height),
            400.0
        );

        let rocks: Vec<_> = ordered_asteroids(&session.world)
            .into_iter()
            .map(|(e, _)| e)
            .collect();
        for rock in rocks {
            session.world.despawn(rock).unwrap();
        }
        let ship = find_ship(&session.world).unwrap();
        session.world.get::<&mut Magazine>(ship).unwrap().lasers.push(Laser {
            pos: glam::Vec2::new(400.0, 200.0),
            vel: glam::Vec2::new(1.0, 0.0),
            travelled: 250.0,
        });

        session.step();

        let magazine = session.world.get::<&Magazine>(ship).unwrap();
        assert_eq!(magazine.len(), 1, "A quarter-width laser is still in range");
        assert_eq!(magazine.lasers[0].travelled, 251.0);
    }

    #[test]
    fn test_reset_starts_new_generation() {
        let mut session = setup_session();
        session.score.award(120);
        for _ in 0..10 {
            session.step();
        }

        session.reset();

        assert_eq!(session.generation, 1);
        assert_eq!(session.score.current, 0);
        assert_eq!(session.score.previous_high, 120);
        assert_eq!(session.lives.remaining, 3.0);
        assert_eq!(session.time.frame, 0);
        assert_eq!(session.asteroid_count(), 5);
        assert!(session.ship().is_some());
    }

    #[test]
    fn test_snapshot_lists_ship_first() {
        let session = setup_session();
        let snapshot = session.snapshot();

        assert!(matches!(snapshot.entities[0], EntityView::Ship(_)));
        assert_eq!(snapshot.asteroids().count(), 5);
        assert_eq!(snapshot.hud.lives, 3);
        assert_eq!(snapshot.hud.high_score_label, "0");
    }

    #[test]
    fn test_submit_score() {
        let mut session = setup_session();
        session.score.award(70);
        let mut table = HighScores::new();

        assert!(session.submit_score("ACE", &mut table));
        assert_eq!(table.top_score(), 70);
    }

    #[test]
    fn test_submit_score_tied_with_last_row_misses_table() {
        let mut session = setup_session();
        session.score.award(100);
        let mut table = HighScores::from_entries(vec![
            HighScore::new("A", 500),
            HighScore::new("B", 400),
            HighScore::new("C", 300),
            HighScore::new("D", 200),
            HighScore::new("ACE", 100),
        ]);
        let before = table.clone();

        assert!(!session.submit_score("ACE", &mut table));
        assert_eq!(table, before, "Earlier equal score keeps its place");
    }

    #[test]
    fn test_apply_settings_clamps() {
        let mut session = setup_session();
        session.apply_settings(Settings {
            thrust: 9.0,
            ..Settings::default()
        });
        assert_eq!(session.settings.thrust, Settings::THRUST_MAX);
    }
}
