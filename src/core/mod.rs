//! Core modules for rps-hand

pub mod classifier;
pub mod validator;
pub mod tracker;
pub mod game;
pub mod frames;
pub mod api;

pub use classifier::{GestureClassifier, Classification, FingerStates, Rule, RULES};
pub use validator::{validate_stable_gesture, validate_with_rule};
pub use tracker::GestureTracker;
pub use game::{
    determine_winner, ComputerPlayer, FixedComputer, FrameReport, GameSession, RandomComputer,
    SeededComputer, SessionStatus,
};
pub use frames::{parse_frame, parse_frames, read_frames, FrameInput};
pub use api::{create_router, run_server};
