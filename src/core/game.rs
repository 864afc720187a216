//! Game layer: computer moves, round outcome, per-session score
//!
//! A `GameSession` owns everything one player needs: tracker, computer,
//! scoreboard and round phase. Sessions share nothing.

use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::config::GameConfig;
use crate::core::tracker::GestureTracker;
use crate::types::{FrameOutput, GamePhase, Gesture, Keypoint, Outcome, RoundResult, Scoreboard};

/// Outcome of `player` against `computer`
pub fn determine_winner(player: Gesture, computer: Gesture) -> Outcome {
    if player == computer {
        Outcome::Draw
    } else if player.beats(computer) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

// =============================================================================
// COMPUTER PLAYERS
// =============================================================================

/// Source of the computer's moves
pub trait ComputerPlayer: std::fmt::Debug + Send + Sync {
    /// Pick the next move (never `Gesture::None`)
    fn next_move(&mut self) -> Gesture;

    fn name(&self) -> &'static str;
}

/// Uniformly random moves
#[derive(Debug)]
pub struct RandomComputer {
    rng: StdRng,
}

impl RandomComputer {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }
}

impl Default for RandomComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerPlayer for RandomComputer {
    fn next_move(&mut self) -> Gesture {
        Gesture::MOVES.choose(&mut self.rng).copied().unwrap_or(Gesture::Rock)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Reproducible moves: SHA-256(seed ‖ round) picks each move
#[derive(Debug, Clone)]
pub struct SeededComputer {
    seed: u64,
    round: u64,
}

impl SeededComputer {
    pub fn new(seed: u64) -> Self {
        Self { seed, round: 0 }
    }

    /// Move for a given round without advancing
    pub fn move_for_round(seed: u64, round: u64) -> Gesture {
        let mut hasher = Sha256::new();
        hasher.update(seed.to_le_bytes());
        hasher.update(round.to_le_bytes());
        let digest: [u8; 32] = hasher.finalize().into();
        Gesture::MOVES[digest[0] as usize % Gesture::MOVES.len()]
    }
}

impl ComputerPlayer for SeededComputer {
    fn next_move(&mut self) -> Gesture {
        let g = Self::move_for_round(self.seed, self.round);
        self.round += 1;
        g
    }

    fn name(&self) -> &'static str {
        "seeded"
    }
}

/// Always plays the same move
#[derive(Debug, Clone, Copy)]
pub struct FixedComputer(pub Gesture);

impl ComputerPlayer for FixedComputer {
    fn next_move(&mut self) -> Gesture {
        self.0
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Everything produced by one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub frame: FrameOutput,
    pub phase: GamePhase,
    /// Round played on this frame, if the gesture was confirmed
    pub round: Option<RoundResult>,
    pub score: Scoreboard,
}

/// Serializable snapshot of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub phase: GamePhase,
    pub tracker_state: crate::types::TrackerState,
    pub history: Vec<Gesture>,
    pub score: Scoreboard,
    pub win_rate: u32,
    pub last_result: Option<RoundResult>,
    pub frames_seen: u64,
    pub computer: &'static str,
}

/// One player's game
#[derive(Debug)]
pub struct GameSession {
    tracker: GestureTracker,
    computer: Box<dyn ComputerPlayer>,
    score: Scoreboard,
    phase: GamePhase,
    phase_since: Instant,
    result_display: Duration,
    last_result: Option<RoundResult>,
}

impl GameSession {
    /// Session from config: seeded computer when `seed` is set, random otherwise
    pub fn new(config: &GameConfig) -> Self {
        let computer: Box<dyn ComputerPlayer> = match config.seed {
            Some(seed) => Box::new(SeededComputer::new(seed)),
            None => Box::new(RandomComputer::new()),
        };
        Self::with_computer(config, computer)
    }

    pub fn with_computer(config: &GameConfig, computer: Box<dyn ComputerPlayer>) -> Self {
        Self {
            tracker: GestureTracker::from_config(config),
            computer,
            score: Scoreboard::default(),
            phase: GamePhase::Waiting,
            phase_since: Instant::now(),
            result_display: Duration::from_millis(config.result_display_ms),
            last_result: None,
        }
    }

    /// Run one camera frame (`None` = no hand) through the session
    pub fn process_frame(&mut self, frame: Option<&[Keypoint]>) -> FrameReport {
        self.refresh_phase();
        let active = self.phase == GamePhase::Waiting;
        let output = self.tracker.observe(frame, active);
        self.finish_frame(output)
    }

    /// Same as `process_frame` for an already classified label
    pub fn process_label(&mut self, label: Option<Gesture>) -> FrameReport {
        self.refresh_phase();
        let active = self.phase == GamePhase::Waiting;
        let output = self.tracker.observe_label(label, active);
        self.finish_frame(output)
    }

    fn finish_frame(&mut self, output: FrameOutput) -> FrameReport {
        let round = output.confirmed.map(|g| self.play_round(g));
        FrameReport {
            frame: output,
            phase: self.phase,
            round,
            score: self.score,
        }
    }

    /// Play one round with `player` as the player's move
    pub fn play_round(&mut self, player: Gesture) -> RoundResult {
        let computer = self.computer.next_move();
        let outcome = determine_winner(player, computer);
        let result = RoundResult::new(player, computer, outcome);

        tracing::info!(%player, %computer, %outcome, "round played");

        self.score.record(outcome);
        self.last_result = Some(result.clone());
        self.phase = GamePhase::ShowingResult;
        self.phase_since = Instant::now();
        result
    }

    /// Return to WAITING once the result has been shown long enough
    fn refresh_phase(&mut self) {
        if self.phase == GamePhase::ShowingResult
            && self.phase_since.elapsed() >= self.result_display
        {
            tracing::debug!("result display finished, waiting for next gesture");
            self.phase = GamePhase::Waiting;
            self.phase_since = Instant::now();
            self.last_result = None;
        }
    }

    /// Clear score and round state
    pub fn reset(&mut self) {
        self.score = Scoreboard::default();
        self.phase = GamePhase::Waiting;
        self.phase_since = Instant::now();
        self.last_result = None;
        self.tracker.reset();
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> Scoreboard {
        self.score
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            phase: self.phase,
            tracker_state: self.tracker.state(),
            history: self.tracker.history().to_vec(),
            score: self.score,
            win_rate: self.score.win_rate(),
            last_result: self.last_result.clone(),
            frames_seen: self.tracker.frames_seen(),
            computer: self.computer.name(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn instant_config() -> GameConfig {
        GameConfig { result_display_ms: 0, ..GameConfig::default() }
    }

    fn versus(config: &GameConfig, computer: Gesture) -> GameSession {
        GameSession::with_computer(config, Box::new(FixedComputer(computer)))
    }

    #[test]
    fn test_determine_winner_table() {
        use Gesture::*;
        assert_eq!(determine_winner(Rock, Scissors), Outcome::Win);
        assert_eq!(determine_winner(Paper, Rock), Outcome::Win);
        assert_eq!(determine_winner(Scissors, Paper), Outcome::Win);
        assert_eq!(determine_winner(Scissors, Rock), Outcome::Lose);
        assert_eq!(determine_winner(Rock, Paper), Outcome::Lose);
        assert_eq!(determine_winner(Paper, Scissors), Outcome::Lose);
        for g in Gesture::MOVES {
            assert_eq!(determine_winner(g, g), Outcome::Draw);
        }
    }

    #[test]
    fn test_seeded_computer_is_reproducible() {
        let mut a = SeededComputer::new(42);
        let mut b = SeededComputer::new(42);
        let first: Vec<_> = (0..20).map(|_| a.next_move()).collect();
        let second: Vec<_> = (0..20).map(|_| b.next_move()).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|g| g.is_move()));
        assert_eq!(first[3], SeededComputer::move_for_round(42, 3));
    }

    #[test]
    fn test_random_computer_only_plays_moves() {
        let mut c = RandomComputer::new();
        for _ in 0..50 {
            assert!(c.next_move().is_move());
        }
    }

    #[test]
    fn test_confirmed_label_plays_round() {
        let mut session = versus(&instant_config(), Gesture::Rock);
        let report = session.process_label(Some(Gesture::Paper));
        assert!(report.round.is_none());

        let report = session.process_label(Some(Gesture::Paper));
        let round = report.round.expect("round played");
        assert_eq!(round.outcome, Outcome::Win);
        assert_eq!(report.phase, GamePhase::ShowingResult);
        assert_eq!(report.score.wins, 1);
    }

    #[test]
    fn test_gestures_ignored_while_showing_result() {
        let config = GameConfig { result_display_ms: 60_000, ..GameConfig::default() };
        let mut session = versus(&config, Gesture::Paper);
        session.play_round(Gesture::Rock);
        assert_eq!(session.phase(), GamePhase::ShowingResult);

        for _ in 0..4 {
            let report = session.process_label(Some(Gesture::Scissors));
            assert!(report.round.is_none());
        }
        assert_eq!(session.score().total(), 1);
    }

    #[test]
    fn test_returns_to_waiting_after_display() {
        let config = GameConfig { result_display_ms: 30, ..GameConfig::default() };
        let mut session = versus(&config, Gesture::Paper);
        session.play_round(Gesture::Rock);
        assert!(session.last_result().is_some());

        sleep(Duration::from_millis(60));
        let report = session.process_label(None);
        assert_eq!(report.phase, GamePhase::Waiting);
        assert!(session.last_result().is_none());
    }

    #[test]
    fn test_reset_clears_score() {
        let mut session = versus(&instant_config(), Gesture::Rock);
        session.play_round(Gesture::Paper);
        session.play_round(Gesture::Scissors);
        assert_eq!(session.score().total(), 2);

        session.reset();
        assert_eq!(session.score(), Scoreboard::default());
        assert_eq!(session.phase(), GamePhase::Waiting);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = versus(&instant_config(), Gesture::Rock);
        let b = versus(&instant_config(), Gesture::Rock);
        a.process_label(Some(Gesture::Paper));
        a.process_label(Some(Gesture::Paper));
        assert_eq!(a.score().wins, 1);
        assert_eq!(b.score().total(), 0);
        assert!(b.tracker().history().is_empty());
    }

    #[test]
    fn test_status_snapshot() {
        let mut session = GameSession::new(&GameConfig { seed: Some(9), ..instant_config() });
        session.process_label(Some(Gesture::Rock));
        let status = session.status();
        assert_eq!(status.computer, "seeded");
        assert_eq!(status.history, vec![Gesture::Rock]);
        assert_eq!(status.frames_seen, 1);
        assert!(serde_json::to_string(&status).unwrap().contains("\"phase\":\"waiting\""));
    }
}
