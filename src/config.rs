//! Game configuration (TOML)
//!
//! Every field is optional in the file; missing fields fall back to the
//! crate constants.
//!
//! ```toml
//! required_stability = 2
//! history_capacity = 15
//! stale_history_len = 8
//! result_display_ms = 2000
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{GameError, Result};
use crate::{HISTORY_CAPACITY, REQUIRED_STABILITY, RESULT_DISPLAY_MS, STALE_HISTORY_LEN};

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_required_stability")]
    pub required_stability: usize,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    #[serde(default = "default_stale_history_len")]
    pub stale_history_len: usize,
    #[serde(default = "default_result_display_ms")]
    pub result_display_ms: u64,
    /// Seed for reproducible computer moves; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_required_stability() -> usize {
    REQUIRED_STABILITY
}

fn default_history_capacity() -> usize {
    HISTORY_CAPACITY
}

fn default_stale_history_len() -> usize {
    STALE_HISTORY_LEN
}

fn default_result_display_ms() -> u64 {
    RESULT_DISPLAY_MS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            required_stability: default_required_stability(),
            history_capacity: default_history_capacity(),
            stale_history_len: default_stale_history_len(),
            result_display_ms: default_result_display_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GameError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse config from TOML text and check it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| GameError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.required_stability == 0 {
            return Err(GameError::Config("required_stability must be at least 1".into()));
        }
        if self.history_capacity < self.required_stability {
            return Err(GameError::Config(format!(
                "history_capacity ({}) must not be smaller than required_stability ({})",
                self.history_capacity, self.required_stability
            )));
        }
        Ok(())
    }
}
