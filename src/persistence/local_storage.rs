use web_sys::Storage;

use super::{HIGH_SCORE_KEY, HighScoreStore, decode_score, encode_score};

/// High score kept in the browser's LocalStorage
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, high score will not persist");
        }
        Self { storage }
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load(&self) -> u64 {
        let Some(storage) = &self.storage else {
            return 0;
        };
        match storage.get_item(HIGH_SCORE_KEY) {
            Ok(Some(raw)) => decode_score(&raw).unwrap_or_else(|| {
                log::warn!("Ignoring unreadable high score {:?}", raw);
                0
            }),
            _ => 0,
        }
    }

    fn save(&mut self, score: u64) {
        if let Some(storage) = &self.storage {
            if storage.set_item(HIGH_SCORE_KEY, &encode_score(score)).is_err() {
                log::warn!("Failed to save high score");
            } else {
                log::info!("High score saved ({})", score);
            }
        }
    }
}
