use serde::{Deserialize, Serialize};

use crate::RecordError;

/// One row of the high-score table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub name: String,
    pub score: u32,
}

impl HighScore {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Best scores, highest first, capped at [`HighScores::MAX_ENTRIES`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores {
    entries: Vec<HighScore>,
}

impl HighScores {
    pub const MAX_ENTRIES: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from arbitrary rows, restoring order and the size cap
    pub fn from_entries(entries: Vec<HighScore>) -> Self {
        let mut table = Self { entries };
        table.normalize();
        table
    }

    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score to beat: the top entry, or 0 for an empty table
    pub fn top_score(&self) -> u32 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }

    /// Add a finished game. Ties keep the earlier entry ahead.
    ///
    /// Returns whether the new row survived the cut to [`Self::MAX_ENTRIES`].
    pub fn insert(&mut self, record: HighScore) -> bool {
        let rank = self.entries.iter().filter(|e| e.score >= record.score).count();
        self.entries.push(record);
        self.normalize();
        rank < Self::MAX_ENTRIES
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let entries: Vec<HighScore> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    fn normalize(&mut self) {
        // Stable sort keeps insertion order between equal scores
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(Self::MAX_ENTRIES);
    }
}
