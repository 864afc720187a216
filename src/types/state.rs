//! Tracker and game phase definitions

use serde::{Deserialize, Serialize};

/// Debounce state of a gesture tracker
///
/// IDLE → ACCUMULATING on the first non-`none` label,
/// ACCUMULATING → CONFIRMED when the validator returns a label,
/// CONFIRMED → IDLE once history is cleared (next frame).
/// ACCUMULATING → IDLE on a staleness reset or when the hand leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackerState {
    /// History empty, nothing being tracked
    Idle,
    /// Collecting labels toward a stable gesture
    Accumulating,
    /// A stable gesture was emitted on this frame
    Confirmed,
}

impl TrackerState {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            TrackerState::Idle => "\x1b[90m",         // Gray
            TrackerState::Accumulating => "\x1b[33m", // Yellow
            TrackerState::Confirmed => "\x1b[32m",    // Green
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            TrackerState::Idle => "👀",
            TrackerState::Accumulating => "⏳",
            TrackerState::Confirmed => "✅",
        }
    }
}

impl std::fmt::Display for TrackerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TrackerState::Idle => "IDLE",
            TrackerState::Accumulating => "ACCUMULATING",
            TrackerState::Confirmed => "CONFIRMED",
        };
        write!(f, "{}", name)
    }
}

/// Round phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Ready for the player's gesture
    Waiting,
    /// A round was just played; gestures are ignored until the display time runs out
    ShowingResult,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Waiting => write!(f, "waiting"),
            GamePhase::ShowingResult => write!(f, "showing_result"),
        }
    }
}
