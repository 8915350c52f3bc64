//! High-score table.

use serde::{Deserialize, Serialize};

use crate::constants::HIGH_SCORE_SLOTS;

/// Where finished runs are recorded. Persistence is up to the host.
pub trait ScoreBoard: Send + Sync {
    /// Entries, best first
    fn scores(&self) -> Vec<u32>;
    /// Insert `score` if it places. Returns whether it did.
    fn record(&mut self, score: u32) -> bool;
}

/// Fixed-size table kept in memory, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopScores {
    entries: [u32; HIGH_SCORE_SLOTS],
}

impl Default for TopScores {
    fn default() -> Self {
        Self {
            entries: [0; HIGH_SCORE_SLOTS],
        }
    }
}

impl TopScores {
    pub fn from_entries(mut entries: [u32; HIGH_SCORE_SLOTS]) -> Self {
        entries.sort_unstable_by(|a, b| b.cmp(a));
        Self { entries }
    }

    pub fn best(&self) -> u32 {
        self.entries[0]
    }
}

impl ScoreBoard for TopScores {
    fn scores(&self) -> Vec<u32> {
        self.entries.to_vec()
    }

    /// A score equal to an entry takes its place and pushes the rest down.
    fn record(&mut self, score: u32) -> bool {
        let Some(pos) = self.entries.iter().position(|entry| score >= *entry) else {
            return false;
        };
        self.entries[pos..].rotate_right(1);
        self.entries[pos] = score;
        true
    }
}
