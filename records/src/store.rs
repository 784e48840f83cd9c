use std::collections::HashMap;

use crate::{HighScores, RecordError, Settings};

pub const HIGH_SCORES_KEY: &str = "highScores";
pub const SETTINGS_KEY: &str = "userSettings";

/// Key/value medium the host persists records in
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn clear(&mut self);
}

/// In-process store, used by tests and headless hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

/// Load the high-score table; unreadable data counts as an empty table
pub fn load_high_scores(store: &impl Store) -> HighScores {
    let Some(raw) = store.get(HIGH_SCORES_KEY) else {
        return HighScores::new();
    };
    match HighScores::from_json(&raw) {
        Ok(table) => table,
        Err(err) => {
            tracing::warn!("discarding stored high scores: {err}");
            HighScores::new()
        }
    }
}

pub fn save_high_scores(store: &mut impl Store, table: &HighScores) -> Result<(), RecordError> {
    store.set(HIGH_SCORES_KEY, table.to_json()?);
    Ok(())
}

/// Load saved settings. `None` when nothing usable is stored.
pub fn load_settings(store: &impl Store) -> Option<Settings> {
    let raw = store.get(SETTINGS_KEY)?;
    match Settings::from_json(&raw) {
        Ok(settings) => Some(settings),
        Err(err) => {
            tracing::warn!("discarding stored settings: {err}");
            None
        }
    }
}

pub fn save_settings(store: &mut impl Store, settings: &Settings) -> Result<(), RecordError> {
    store.set(SETTINGS_KEY, settings.to_json()?);
    Ok(())
}

/// Erase every saved score and setting
pub fn reset_game_data(store: &mut impl Store) {
    tracing::info!("clearing all stored game data");
    store.clear();
}
