//! Gesture classifier: 21 hand keypoints → rock / paper / scissors / none
//!
//! Finger extension is geometric:
//! - index..pinky: |tip − wrist| > 1.05 × |base − wrist|
//! - thumb: |tip − index MCP| > 0.85 × |thumb MCP − index MCP|, or tip above base
//!
//! The label comes from an ordered rule list; first match wins.

use serde::{Deserialize, Serialize};
use crate::{FINGER_EXTENSION_RATIO, THUMB_SPREAD_RATIO};
use crate::types::{Finger, Gesture, Keypoint, HAND_KEYPOINT_COUNT, INDEX_MCP, WRIST};

/// Extension flags for the five fingers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    pub fn get(&self, finger: Finger) -> bool {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }

    /// Extended fingers among index, middle, ring, pinky (0-4)
    pub fn non_thumb(&self) -> usize {
        Finger::NON_THUMB.iter().filter(|f| self.get(**f)).count()
    }

    /// Extended fingers including the thumb (0-5)
    pub fn total(&self) -> usize {
        Finger::ALL.iter().filter(|f| self.get(**f)).count()
    }
}

/// A classification rule: when the predicate holds, the hand shows `gesture`
pub struct Rule {
    pub name: &'static str,
    pub predicate: fn(&FingerStates) -> bool,
    pub gesture: Gesture,
}

/// Rules in precedence order. Broader rules sit below narrower ones they
/// would otherwise shadow.
pub const RULES: &[Rule] = &[
    Rule {
        name: "closed_fist",
        predicate: |f| f.non_thumb() <= 1,
        gesture: Gesture::Rock,
    },
    Rule {
        name: "open_hand",
        predicate: |f| f.total() >= 3 || f.non_thumb() >= 3,
        gesture: Gesture::Paper,
    },
    Rule {
        name: "index_middle",
        predicate: |f| f.index && f.middle && f.non_thumb() == 2,
        gesture: Gesture::Scissors,
    },
    // Same condition as "index_middle"; never reached while that rule precedes it.
    Rule {
        name: "two_finger_index_middle",
        predicate: |f| f.non_thumb() == 2 && f.index && f.middle,
        gesture: Gesture::Scissors,
    },
    Rule {
        name: "two_finger_transition",
        predicate: |f| f.non_thumb() == 2,
        gesture: Gesture::Paper,
    },
    Rule {
        name: "lenient_open",
        predicate: |f| f.total() >= 2,
        gesture: Gesture::Paper,
    },
];

/// Full classification result for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub gesture: Gesture,
    /// Finger extension flags (all false for malformed frames)
    pub fingers: FingerStates,
    pub non_thumb: usize,
    pub total: usize,
    /// Name of the rule that matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,
}

impl Classification {
    fn unrecognized() -> Self {
        Self {
            gesture: Gesture::None,
            fingers: FingerStates::default(),
            non_thumb: 0,
            total: 0,
            rule: None,
        }
    }
}

/// Keypoint gesture classifier
#[derive(Debug, Default, Clone, Copy)]
pub struct GestureClassifier;

impl GestureClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify keypoints and return the finger breakdown
    pub fn analyze(&self, keypoints: &[Keypoint]) -> Classification {
        if keypoints.len() != HAND_KEYPOINT_COUNT || !keypoints.iter().all(Keypoint::is_finite) {
            tracing::debug!(points = keypoints.len(), "malformed keypoints, classifying as none");
            return Classification::unrecognized();
        }

        let fingers = finger_states(keypoints);
        let non_thumb = fingers.non_thumb();
        let total = fingers.total();

        let matched = RULES.iter().find(|rule| (rule.predicate)(&fingers));
        let gesture = matched.map(|r| r.gesture).unwrap_or(Gesture::None);

        tracing::trace!(
            ?fingers,
            non_thumb,
            total,
            rule = matched.map(|r| r.name).unwrap_or("-"),
            %gesture,
            "classified frame"
        );

        Classification {
            gesture,
            fingers,
            non_thumb,
            total,
            rule: matched.map(|r| r.name),
        }
    }

    /// Classify keypoints to a label
    pub fn classify(&self, keypoints: &[Keypoint]) -> Gesture {
        self.analyze(keypoints).gesture
    }
}

/// Extension flags for a well-formed 21-point hand
fn finger_states(keypoints: &[Keypoint]) -> FingerStates {
    FingerStates {
        thumb: is_thumb_extended(keypoints),
        index: is_finger_extended(keypoints, Finger::Index),
        middle: is_finger_extended(keypoints, Finger::Middle),
        ring: is_finger_extended(keypoints, Finger::Ring),
        pinky: is_finger_extended(keypoints, Finger::Pinky),
    }
}

fn is_finger_extended(keypoints: &[Keypoint], finger: Finger) -> bool {
    let wrist = &keypoints[WRIST];
    let tip_to_wrist = keypoints[finger.tip()].distance(wrist);
    let base_to_wrist = keypoints[finger.base()].distance(wrist);
    tip_to_wrist > base_to_wrist * FINGER_EXTENSION_RATIO
}

// The thumb swings sideways, so it is measured against the index MCP.
fn is_thumb_extended(keypoints: &[Keypoint]) -> bool {
    let tip = &keypoints[Finger::Thumb.tip()];
    let base = &keypoints[Finger::Thumb.base()];
    let index_base = &keypoints[INDEX_MCP];

    let spread = tip.distance(index_base) > base.distance(index_base) * THUMB_SPREAD_RATIO;
    let raised = tip.y < base.y; // smaller y = higher in the image
    spread || raised
}

// =============================================================================
// TESTS
// =============================================================================
