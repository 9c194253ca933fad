//! High score persistence boundary
//!
//! The game only needs an integer key-value store. `ScoreStore` is the seam a
//! platform backs with whatever it has; `MemoryStore` is the in-process
//! implementation used by tests and the demo binary, with JSON round-tripping
//! so a caller can park it on disk.
//!
//! The store is touched exactly twice per session: one read at startup and
//! one write when a run ends with a new record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const HIGH_SCORE_KEY: &str = "high_score";

/// Integer key-value persistence the platform provides
pub trait ScoreStore {
    fn get(&self, key: &str) -> Option<i64>;
    fn set(&mut self, key: &str, value: i64);
}

/// In-memory store, JSON serializable
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MemoryStore {
    values: HashMap<String, i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
    }
}

/// Session-best tracking over a [`ScoreStore`]
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// Read the stored record once at session start. Negative or missing
    /// stored values read as zero.
    pub fn load(store: &dyn ScoreStore) -> Self {
        let best = store
            .get(HIGH_SCORE_KEY)
            .unwrap_or(0)
            .try_into()
            .unwrap_or(0);
        log::debug!("loaded high score {best}");
        Self { best }
    }

    /// Offer a finished run's score. Persists and returns true only on a new
    /// record.
    pub fn submit(&mut self, score: u64, store: &mut dyn ScoreStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        store.set(HIGH_SCORE_KEY, score.min(i64::MAX as u64) as i64);
        log::info!("new high score: {score}");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_record_loads_as_zero() {
        let store = MemoryStore::new();
        assert_eq!(HighScore::load(&store).best, 0);
    }

    #[test]
    fn corrupt_negative_record_loads_as_zero() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, -5);
        assert_eq!(HighScore::load(&store).best, 0);
    }

    #[test]
    fn submit_persists_only_new_records() {
        let mut store = MemoryStore::new();
        let mut hs = HighScore::load(&store);

        assert!(hs.submit(1200, &mut store));
        assert_eq!(store.get(HIGH_SCORE_KEY), Some(1200));

        // A lower or equal score changes nothing
        assert!(!hs.submit(900, &mut store));
        assert!(!hs.submit(1200, &mut store));
        assert_eq!(store.get(HIGH_SCORE_KEY), Some(1200));

        assert!(hs.submit(1500, &mut store));
        assert_eq!(hs.best, 1500);
    }

    #[test]
    fn memory_store_round_trips_through_json() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, 777);
        let json = store.to_json().expect("serialize");
        let restored = MemoryStore::from_json(&json).expect("deserialize");
        assert_eq!(restored.get(HIGH_SCORE_KEY), Some(777));
    }
}
