//! Frame input parsing (JSON lines recordings, API bodies)
//!
//! Accepted per-frame forms:
//! - `null`                                  → no hand
//! - `[{"x":..,"y":..,"z":..}, ...]`         → keypoints
//! - `{"keypoints": [...] | null}`           → keypoints / no hand
//! - `"rock"` / `{"label": "rock"}`          → pre-classified label
//! - `rock` (bare word, any case)            → pre-classified label
//!
//! Blank lines and lines starting with `#` are skipped.

use std::io::BufRead;
use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::core::game::{FrameReport, GameSession};
use crate::error::{GameError, Result};
use crate::types::{Gesture, Keypoint};

/// One frame of input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrameInput {
    /// No hand in view
    NoHand,
    Keypoints(Vec<Keypoint>),
    Label(Gesture),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFrame {
    Keypoints(Vec<Keypoint>),
    Label(Gesture),
    Object {
        #[serde(default)]
        keypoints: Option<Vec<Keypoint>>,
        #[serde(default)]
        label: Option<Gesture>,
    },
}

impl FrameInput {
    /// Feed this frame to a session
    pub fn apply(&self, session: &mut GameSession) -> FrameReport {
        match self {
            FrameInput::NoHand => session.process_frame(None),
            FrameInput::Keypoints(points) => session.process_frame(Some(points.as_slice())),
            FrameInput::Label(gesture) => session.process_label(Some(*gesture)),
        }
    }
}

/// Parse one JSON frame
pub fn parse_frame(text: &str) -> Result<FrameInput> {
    if let Ok(gesture) = text.parse::<Gesture>() {
        return Ok(FrameInput::Label(gesture));
    }

    let raw: Option<RawFrame> = serde_json::from_str(text)?;
    let frame = match raw {
        None => FrameInput::NoHand,
        Some(RawFrame::Keypoints(points)) => FrameInput::Keypoints(points),
        Some(RawFrame::Label(gesture)) => FrameInput::Label(gesture),
        Some(RawFrame::Object { keypoints, label }) => match (keypoints, label) {
            (Some(_), Some(_)) => {
                return Err(GameError::InvalidFrame("frame has both keypoints and label".into()))
            }
            (Some(points), None) => FrameInput::Keypoints(points),
            (None, Some(gesture)) => FrameInput::Label(gesture),
            (None, None) => FrameInput::NoHand,
        },
    };
    Ok(frame)
}

/// Parse a JSON lines recording
pub fn parse_frames(reader: impl BufRead) -> Result<Vec<FrameInput>> {
    let mut frames = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let frame = parse_frame(line)
            .map_err(|e| GameError::InvalidFrame(format!("line {}: {}", n + 1, e)))?;
        frames.push(frame);
    }
    Ok(frames)
}

/// Read a JSON lines recording from disk
pub fn read_frames(path: &Path) -> Result<Vec<FrameInput>> {
    let file = std::fs::File::open(path)?;
    parse_frames(std::io::BufReader::new(file))
}
