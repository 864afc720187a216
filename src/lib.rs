//! rps-hand: camera rock-paper-scissors
//!
//! Frame path: 21 hand keypoints → GestureClassifier → GestureHistory →
//! stability validator → GameSession round.

pub mod config;
pub mod core;
pub mod error;
pub mod types;

// =============================================================================
// CLASSIFIER THRESHOLDS
// =============================================================================

/// A finger is extended when tip→wrist exceeds base→wrist by this factor
pub const FINGER_EXTENSION_RATIO: f64 = 1.05;

/// Thumb is extended when tip→index base exceeds thumb base→index base by this factor
pub const THUMB_SPREAD_RATIO: f64 = 0.85;

// =============================================================================
// STABILITY
// =============================================================================

/// Consecutive identical labels needed for the strict window check
pub const REQUIRED_STABILITY: usize = 2;

/// Size of the window used by the pairwise and majority checks
pub const RECENT_WINDOW: usize = 3;

/// Share of the recent window the majority label must reach
pub const MAJORITY_FRACTION: f64 = 0.6;

/// Maximum number of labels kept in the gesture history
pub const HISTORY_CAPACITY: usize = 15;

/// History longer than this is dropped when a `none` frame arrives
pub const STALE_HISTORY_LEN: usize = 8;

// =============================================================================
// GAME
// =============================================================================

/// How long a round result stays on screen before the next round (milliseconds)
pub const RESULT_DISPLAY_MS: u64 = 2000;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
