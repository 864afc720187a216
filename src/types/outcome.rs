//! Round outcomes and score bookkeeping

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::types::Gesture;

/// Result of one round from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Win => "You Win! 🎉",
            Outcome::Lose => "You Lose! 😢",
            Outcome::Draw => "It's a Draw! 🤝",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
        };
        write!(f, "{}", name)
    }
}

/// One played round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundResult {
    pub player: Gesture,
    pub computer: Gesture,
    pub outcome: Outcome,
    pub timestamp: DateTime<Utc>,
}

impl RoundResult {
    pub fn new(player: Gesture, computer: Gesture, outcome: Outcome) -> Self {
        Self {
            player,
            computer,
            outcome,
            timestamp: Utc::now(),
        }
    }

    pub fn to_terminal_string(&self) -> String {
        format!(
            "You {} {} vs Computer {} {} → {}",
            self.player.emoji(),
            self.player,
            self.computer.emoji(),
            self.computer,
            self.outcome.message()
        )
    }
}

/// Win/loss/draw counters for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Win rate in whole percent, 0 when nothing was played
    pub fn win_rate(&self) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.wins as f64 / total as f64 * 100.0).round() as u32
    }
}
