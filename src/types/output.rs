//! Per-frame tracker output

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{Gesture, ReasonCode, StabilityRule, TrackerState};

/// Output structure for each observed frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Label classified from this frame
    pub gesture: Gesture,
    /// Tracker state after this frame
    pub state: TrackerState,
    /// History length after this frame
    pub history_len: usize,
    /// Stable gesture emitted on this frame, if any
    pub confirmed: Option<Gesture>,
    /// Validator rule behind the stable gesture
    pub rule: Option<StabilityRule>,
    /// Reason for this output
    pub reason: ReasonCode,
}

impl FrameOutput {
    pub fn new(
        gesture: Gesture,
        state: TrackerState,
        history_len: usize,
        reason: ReasonCode,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            gesture,
            state,
            history_len,
            confirmed: None,
            rule: None,
            reason,
        }
    }

    /// Attach a confirmation
    pub fn with_confirmation(mut self, gesture: Gesture, rule: StabilityRule) -> Self {
        self.confirmed = Some(gesture);
        self.rule = Some(rule);
        self
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.state.color_code();
        let reset = TrackerState::color_reset();

        format!(
            "{}{} gesture={} {} | state={} | history={} | {}{}",
            color,
            self.state.emoji(),
            self.gesture,
            self.gesture.emoji(),
            self.state,
            self.history_len,
            self.reason.code(),
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let confirmed = self.confirmed.map(|g| g.name()).unwrap_or("-");
        format!(
            "gesture={} | state={} | history={} | confirmed={} | reason={}",
            self.gesture,
            self.state,
            self.history_len,
            confirmed,
            self.reason.code()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parseable_without_confirmation() {
        let reason = ReasonCode::G002_LABEL_APPENDED;
        let out = FrameOutput::new(Gesture::Rock, TrackerState::Accumulating, 1, reason);
        assert_eq!(
            out.to_parseable_string(),
            "gesture=rock | state=ACCUMULATING | history=1 | confirmed=- | reason=G002_LABEL_APPENDED"
        );
    }

    #[test]
    fn test_parseable_with_confirmation() {
        let reason = ReasonCode::G003_CONFIRMED_STRICT;
        let out = FrameOutput::new(Gesture::Paper, TrackerState::Confirmed, 0, reason)
            .with_confirmation(Gesture::Paper, StabilityRule::StrictWindow);
        assert!(out.to_parseable_string().contains("confirmed=paper"));
        assert_eq!(out.rule, Some(StabilityRule::StrictWindow));
    }
}
