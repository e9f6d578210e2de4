//! High score persistence
//!
//! A single best score, persisted to LocalStorage on the web build.
//! Storage failures are logged and swallowed; they never reach gameplay
//! state.

use serde::{Deserialize, Serialize};

/// Persisted best-score record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "tilesnake_highscore";

    /// Load the best score from LocalStorage (WASM only); 0 if absent or
    /// unreadable.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(record) = serde_json::from_str::<HighScore>(&json) {
                    log::info!("Loaded high score: {}", record.best);
                    return record;
                }
            }
        }

        log::info!("No high score found, starting fresh");
        Self::default()
    }

    /// Persist `score` if it beats the stored best; returns the record now
    /// in effect.
    ///
    /// The comparison runs against the value currently in storage, not a
    /// cached copy, so another session's better score survives.
    #[cfg(target_arch = "wasm32")]
    pub fn save_if_best(score: u32) -> Self {
        let current = Self::load();
        if score <= current.best {
            return current;
        }
        let record = Self { best: score };
        record.save();
        record
    }

    #[cfg(target_arch = "wasm32")]
    fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High score saved: {}", self.best);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    /// Same contract as the wasm path, minus the storage write
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_if_best(score: u32) -> Self {
        let current = Self::load();
        Self {
            best: current.best.max(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_if_best_never_lowers_the_record() {
        // The record in effect is always max(stored best, ending score);
        // natively the stored best is the empty default.
        let stored = HighScore::load();
        assert_eq!(HighScore::save_if_best(40).best, stored.best.max(40));
        assert_eq!(HighScore::save_if_best(0).best, stored.best);
    }
}
