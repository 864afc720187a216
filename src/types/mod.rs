//! Core types for rps-hand

mod keypoint;
mod gesture;
mod history;
mod state;
mod reason;
mod output;
mod outcome;

pub use keypoint::*;
pub use gesture::Gesture;
pub use history::GestureHistory;
pub use state::{TrackerState, GamePhase};
pub use reason::{ReasonCode, StabilityRule};
pub use output::FrameOutput;
pub use outcome::{Outcome, RoundResult, Scoreboard};
