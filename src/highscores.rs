//! High score ratchet
//!
//! The best score only ever goes up, and the store is written exactly once
//! per game that beats it.

use crate::persistence::HighScoreStore;

/// Best score backed by a durable store
#[derive(Debug)]
pub struct HighScore<S: HighScoreStore> {
    store: S,
    best: u64,
}

impl<S: HighScoreStore> HighScore<S> {
    /// Read the stored value once
    pub fn load(store: S) -> Self {
        let best = store.load();
        log::info!("Loaded high score {}", best);
        Self { store, best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Re-read the stored value (a new page visit or view toggle)
    pub fn reload(&mut self) -> u64 {
        self.best = self.best.max(self.store.load());
        self.best
    }

    /// Offer a finished game's score. Persists and returns true only when it
    /// beats the current best.
    pub fn submit(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        self.store.save(score);
        log::info!("New high score: {}", score);
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;

    #[test]
    fn test_load_reads_store() {
        let high = HighScore::load(MemoryStore::with_score(90));
        assert_eq!(high.best(), 90);
    }

    #[test]
    fn test_submit_only_persists_records() {
        let store = MemoryStore::with_score(100);
        let mut high = HighScore::load(store.clone());

        assert!(!high.submit(60));
        assert!(!high.submit(100));
        assert_eq!(store.writes(), 0);

        assert!(high.submit(130));
        assert_eq!(store.score(), 130);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_zero_score_never_written() {
        let store = MemoryStore::new();
        let mut high = HighScore::load(store.clone());
        assert!(!high.submit(0));
        assert_eq!(store.writes(), 0);
    }

    proptest! {
        #[test]
        fn prop_best_is_running_max(scores in proptest::collection::vec(0u64..5000, 0..40)) {
            let store = MemoryStore::new();
            let mut high = HighScore::load(store.clone());
            let mut max = 0;
            for score in scores {
                let before = high.best();
                high.submit(score);
                prop_assert!(high.best() >= before);
                max = max.max(score);
                prop_assert_eq!(high.best(), max);
                prop_assert_eq!(store.score(), max);
            }
        }
    }
}
