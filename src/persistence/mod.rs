//! High score persistence
//!
//! A single integer survives between sessions. On the web it lives in
//! LocalStorage under the key the page has always used; elsewhere it is kept
//! in memory.

mod memory;
#[cfg(target_arch = "wasm32")]
mod local_storage;

pub use memory::MemoryStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// LocalStorage key holding the best score
pub const HIGH_SCORE_KEY: &str = "carGameHighScore";

/// Durable home of the high score
pub trait HighScoreStore {
    /// Stored value, 0 when missing or unreadable
    fn load(&self) -> u64;
    fn save(&mut self, score: u64);
}

/// Parse a stored value. The page historically wrote bare integers, which are
/// also valid JSON numbers.
pub fn decode_score(raw: &str) -> Option<u64> {
    serde_json::from_str::<u64>(raw.trim()).ok()
}

pub fn encode_score(score: u64) -> String {
    serde_json::to_string(&score).unwrap_or_else(|_| score.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_score() {
        assert_eq!(decode_score("120"), Some(120));
        assert_eq!(decode_score(" 40\n"), Some(40));
        assert_eq!(decode_score("-5"), None);
        assert_eq!(decode_score("abc"), None);
        assert_eq!(decode_score(""), None);
    }

    #[test]
    fn test_encode_is_bare_integer() {
        assert_eq!(encode_score(350), "350");
        assert_eq!(decode_score(&encode_score(350)), Some(350));
    }
}
