use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to encode settings: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write settings file: {0}")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Whether the native window-frame controls are currently hidden.
    #[serde(default)]
    pub controls_hidden: bool,
    /// When enabled the plugin initialises its logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
}

/// Raw on-disk shape. Older releases persisted the flag under `active`,
/// and the oldest under `visible` with the opposite polarity (it stored
/// whether the controls were *shown*). Reads accept all three layouts;
/// writes always produce the current one.
#[derive(Deserialize)]
struct StoredSettings {
    controls_hidden: Option<bool>,
    active: Option<bool>,
    visible: Option<bool>,
    #[serde(default)]
    debug_logging: bool,
}

impl Settings {
    /// Read settings from `path`. Never fails: a missing, empty or
    /// unreadable file yields the defaults, and missing fields are
    /// defaulted individually.
    pub fn load(path: &str) -> Self {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<StoredSettings>(&content) {
            Ok(stored) => Settings {
                controls_hidden: stored
                    .controls_hidden
                    .or(stored.active)
                    .or_else(|| stored.visible.map(|shown| !shown))
                    .unwrap_or(false),
                debug_logging: stored.debug_logging,
            },
            Err(err) => {
                tracing::warn!(error = %err, path, "settings file unreadable, using defaults");
                Self::default()
            }
        }
    }

    /// Overwrite the file wholesale. A failed save leaves the visual
    /// state and the on-disk preference out of sync until the next
    /// successful write; callers log the error and carry on.
    pub fn save(&self, path: &str) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(self).map_err(PersistenceError::Encode)?;
        std::fs::write(path, json).map_err(PersistenceError::Write)?;
        Ok(())
    }
}
