//! Persisted record shapes for the Asteroids game
//!
//! High-score tables and user settings are stored as JSON strings under
//! fixed keys in whatever key/value medium the host provides.

pub mod error;
pub mod scores;
pub mod settings;
pub mod store;

pub use error::RecordError;
pub use scores::{HighScore, HighScores};
pub use settings::Settings;
pub use store::{MemoryStore, Store};
