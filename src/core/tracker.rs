//! Gesture tracker: per-frame debounce loop around classifier + validator
//!
//! Frame handling:
//! - no hand → history cleared (IDLE)
//! - malformed keypoints → ignored, history kept
//! - classified none → ignored; history longer than 8 is dropped (stale reset)
//! - move → appended; once history ≥ required, the validator is consulted.
//!   A stable gesture is emitted and history cleared.
//!
//! While inactive (a result is on screen) frames skip detection entirely:
//! nothing is classified, appended or cleared.

use crate::config::GameConfig;
use crate::core::classifier::GestureClassifier;
use crate::core::validator::validate_with_rule;
use crate::types::{
    FrameOutput, Gesture, GestureHistory, Keypoint, ReasonCode, TrackerState, HAND_KEYPOINT_COUNT,
};

/// Debounced gesture tracker, one per camera stream
#[derive(Debug, Clone)]
pub struct GestureTracker {
    classifier: GestureClassifier,
    history: GestureHistory,
    required_stability: usize,
    stale_history_len: usize,
    state: TrackerState,
    frames_seen: u64,
    confirmations: u64,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTracker {
    /// Create tracker with the default thresholds
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            classifier: GestureClassifier::new(),
            history: GestureHistory::with_capacity(config.history_capacity),
            required_stability: config.required_stability.max(1),
            stale_history_len: config.stale_history_len,
            state: TrackerState::Idle,
            frames_seen: 0,
            confirmations: 0,
        }
    }

    /// Feed one frame. `frame` is `None` when no hand was detected.
    /// `active` gates whether a stable gesture may be emitted.
    pub fn observe(&mut self, frame: Option<&[Keypoint]>, active: bool) -> FrameOutput {
        if !active {
            return self.skip_inactive();
        }

        let Some(keypoints) = frame else {
            return self.observe_label(None, active);
        };

        if keypoints.len() != HAND_KEYPOINT_COUNT || !keypoints.iter().all(Keypoint::is_finite) {
            self.frames_seen += 1;
            tracing::debug!(points = keypoints.len(), "malformed frame ignored");
            return self.output(Gesture::None, ReasonCode::G001_MALFORMED_FRAME);
        }

        let gesture = self.classifier.classify(keypoints);
        self.observe_label(Some(gesture), active)
    }

    /// Feed an already classified frame (`None` = no hand).
    pub fn observe_label(&mut self, label: Option<Gesture>, active: bool) -> FrameOutput {
        if !active {
            return self.skip_inactive();
        }
        self.frames_seen += 1;

        let Some(gesture) = label else {
            if !self.history.is_empty() {
                tracing::debug!(len = self.history.len(), "hand left the frame, clearing history");
            }
            self.history.clear();
            return self.output(Gesture::None, ReasonCode::G001_NO_HAND);
        };

        if !self.history.push(gesture) {
            if self.history.exceeds(self.stale_history_len) {
                tracing::debug!(len = self.history.len(), "stale history cleared");
                self.history.clear();
                return self.output(gesture, ReasonCode::G002_STALE_RESET);
            }
            return self.output(gesture, ReasonCode::G002_NONE_IGNORED);
        }

        if self.history.len() < self.required_stability {
            return self.output(gesture, ReasonCode::G002_LABEL_APPENDED);
        }

        let required = self.required_stability;
        match validate_with_rule(self.history.as_slice(), required) {
            Some((stable, rule)) => {
                tracing::debug!(%stable, %rule, len = self.history.len(), "stable gesture");
                self.history.clear();
                self.confirmations += 1;
                self.state = TrackerState::Confirmed;
                let reason = ReasonCode::confirmed_by(rule);
                FrameOutput::new(gesture, TrackerState::Confirmed, 0, reason)
                    .with_confirmation(stable, rule)
            }
            None => self.output(gesture, ReasonCode::G003_STABILITY_ACCUMULATING),
        }
    }

    /// Frame arriving while inactive: counted, never classified
    fn skip_inactive(&mut self) -> FrameOutput {
        self.frames_seen += 1;
        tracing::trace!("tracker inactive, frame skipped");
        self.output(Gesture::None, ReasonCode::G003_INACTIVE)
    }

    /// Output for a frame that did not confirm anything
    fn output(&mut self, gesture: Gesture, reason: ReasonCode) -> FrameOutput {
        self.state = if self.history.is_empty() {
            TrackerState::Idle
        } else {
            TrackerState::Accumulating
        };
        FrameOutput::new(gesture, self.state, self.history.len(), reason)
    }

    /// State after the last frame
    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn history(&self) -> &GestureHistory {
        &self.history
    }

    pub fn required_stability(&self) -> usize {
        self.required_stability
    }

    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }

    /// Number of gestures emitted so far
    pub fn confirmations(&self) -> u64 {
        self.confirmations
    }

    /// Drop history and return to IDLE, keeping thresholds
    pub fn reset(&mut self) {
        self.history.clear();
        self.state = TrackerState::Idle;
    }
}

// =============================================================================
// TESTS
// =============================================================================
