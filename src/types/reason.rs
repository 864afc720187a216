//! Reason codes for per-frame tracker decisions

use serde::{Deserialize, Serialize};

/// Which validator rule confirmed a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StabilityRule {
    /// Last `required` labels all equal
    StrictWindow,
    /// Last two labels of the recent window equal
    Pairwise,
    /// One label holds ≥ 60% of the recent window
    Majority,
}

impl std::fmt::Display for StabilityRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StabilityRule::StrictWindow => "strict_window",
            StabilityRule::Pairwise => "pairwise",
            StabilityRule::Majority => "majority",
        };
        write!(f, "{}", name)
    }
}

/// Reason codes for everything the tracker does with a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // G001: Input
    // =========================================================================
    /// No hand in frame, history cleared
    G001_NO_HAND,
    /// Frame did not carry exactly 21 finite keypoints
    G001_MALFORMED_FRAME,

    // =========================================================================
    // G002: History
    // =========================================================================
    /// Label appended, not enough history to validate
    G002_LABEL_APPENDED,
    /// Classified as none, history untouched
    G002_NONE_IGNORED,
    /// Classified as none with stale history, history cleared
    G002_STALE_RESET,

    // =========================================================================
    // G003: Stability
    // =========================================================================
    /// Validator consulted, no stable gesture yet
    G003_STABILITY_ACCUMULATING,
    /// Confirmed by the strict window check
    G003_CONFIRMED_STRICT,
    /// Confirmed by the pairwise check
    G003_CONFIRMED_PAIRWISE,
    /// Confirmed by the majority vote
    G003_CONFIRMED_MAJORITY,
    /// Tracker inactive (result on screen), frame not classified
    G003_INACTIVE,
}

impl ReasonCode {
    /// Reason code for a confirmation by `rule`
    pub fn confirmed_by(rule: StabilityRule) -> Self {
        match rule {
            StabilityRule::StrictWindow => Self::G003_CONFIRMED_STRICT,
            StabilityRule::Pairwise => Self::G003_CONFIRMED_PAIRWISE,
            StabilityRule::Majority => Self::G003_CONFIRMED_MAJORITY,
        }
    }

    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::G001_NO_HAND => "G001_NO_HAND",
            Self::G001_MALFORMED_FRAME => "G001_MALFORMED_FRAME",
            Self::G002_LABEL_APPENDED => "G002_LABEL_APPENDED",
            Self::G002_NONE_IGNORED => "G002_NONE_IGNORED",
            Self::G002_STALE_RESET => "G002_STALE_RESET",
            Self::G003_STABILITY_ACCUMULATING => "G003_STABILITY_ACCUMULATING",
            Self::G003_CONFIRMED_STRICT => "G003_CONFIRMED_STRICT",
            Self::G003_CONFIRMED_PAIRWISE => "G003_CONFIRMED_PAIRWISE",
            Self::G003_CONFIRMED_MAJORITY => "G003_CONFIRMED_MAJORITY",
            Self::G003_INACTIVE => "G003_INACTIVE",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::G001_NO_HAND => "No hand detected",
            Self::G001_MALFORMED_FRAME => "Malformed keypoints",
            Self::G002_LABEL_APPENDED => "Gesture recorded",
            Self::G002_NONE_IGNORED => "No recognizable gesture",
            Self::G002_STALE_RESET => "Stale history cleared",
            Self::G003_STABILITY_ACCUMULATING => "Gesture not stable yet",
            Self::G003_CONFIRMED_STRICT => "Stable gesture (consecutive frames)",
            Self::G003_CONFIRMED_PAIRWISE => "Stable gesture (last two frames)",
            Self::G003_CONFIRMED_MAJORITY => "Stable gesture (majority vote)",
            Self::G003_INACTIVE => "Showing result, frame skipped",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
