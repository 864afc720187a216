//! Synthetic hands shared by the integration tests
//!
//! Upright hand in normalized image coordinates, wrist at the bottom.

#![allow(dead_code)]

use rps_hand::types::*;

/// 21-point hand with the given fingers extended
pub fn hand(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> Vec<Keypoint> {
    let mut kp = vec![Keypoint::default(); HAND_KEYPOINT_COUNT];
    kp[WRIST] = Keypoint::flat(0.50, 0.90);
    kp[THUMB_CMC] = Keypoint::flat(0.36, 0.85);
    kp[THUMB_MCP] = Keypoint::flat(0.30, 0.80);
    kp[THUMB_IP] = Keypoint::flat(0.28, 0.76);
    kp[THUMB_TIP] = if thumb {
        Keypoint::flat(0.12, 0.70)
    } else {
        Keypoint::flat(0.41, 0.805)
    };

    for (mcp, x, extended) in [
        (INDEX_MCP, 0.42, index),
        (MIDDLE_MCP, 0.50, middle),
        (RING_MCP, 0.58, ring),
        (PINKY_MCP, 0.66, pinky),
    ] {
        kp[mcp] = Keypoint::flat(x, 0.65);
        kp[mcp + 1] = Keypoint::flat(x, 0.60);
        kp[mcp + 2] = if extended { Keypoint::flat(x, 0.45) } else { Keypoint::flat(x, 0.66) };
        kp[mcp + 3] = if extended { Keypoint::flat(x, 0.30) } else { Keypoint::flat(x, 0.70) };
    }
    kp
}

pub fn rock() -> Vec<Keypoint> {
    hand(false, false, false, false, false)
}

pub fn paper() -> Vec<Keypoint> {
    hand(true, true, true, true, true)
}

pub fn scissors() -> Vec<Keypoint> {
    hand(false, true, true, false, false)
}

/// Same hand in pixel coordinates of a 640x480 frame
pub fn to_pixels(points: &[Keypoint]) -> Vec<Keypoint> {
    points
        .iter()
        .map(|p| Keypoint::new(p.x * 640.0, p.y * 480.0, p.z))
        .collect()
}

/// Keypoints as a JSON frame line
pub fn frame_json(points: &[Keypoint]) -> String {
    serde_json::to_string(points).expect("keypoints serialize")
}
