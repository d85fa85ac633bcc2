use std::cell::Cell;
use std::rc::Rc;

use super::HighScoreStore;

/// In-memory store. Clones share the same slot, so a test can keep a handle
/// and inspect what the controller wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Rc<Cell<u64>>,
    writes: Rc<Cell<u32>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u64) -> Self {
        let store = Self::default();
        store.value.set(score);
        store
    }

    pub fn score(&self) -> u64 {
        self.value.get()
    }

    /// Number of `save` calls so far
    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        self.value.get()
    }

    fn save(&mut self, score: u64) {
        self.value.set(score);
        self.writes.set(self.writes.get() + 1);
    }
}
