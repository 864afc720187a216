//! Gesture labels and the beats-table

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GameError;

/// Discrete hand shape recognized from one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    /// No recognizable shape
    None,
}

impl Gesture {
    /// The three playable moves
    pub const MOVES: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    /// Is this a playable move (not `None`)?
    pub fn is_move(&self) -> bool {
        !matches!(self, Gesture::None)
    }

    /// Does `self` beat `other`? Rock > scissors, paper > rock, scissors > paper.
    pub fn beats(&self, other: Gesture) -> bool {
        matches!(
            (self, other),
            (Gesture::Rock, Gesture::Scissors)
                | (Gesture::Paper, Gesture::Rock)
                | (Gesture::Scissors, Gesture::Paper)
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Rock => "rock",
            Gesture::Paper => "paper",
            Gesture::Scissors => "scissors",
            Gesture::None => "none",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Gesture::Rock => "✊",
            Gesture::Paper => "✋",
            Gesture::Scissors => "✌️",
            Gesture::None => "❓",
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Gesture {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Gesture::Rock),
            "paper" => Ok(Gesture::Paper),
            "scissors" => Ok(Gesture::Scissors),
            "none" => Ok(Gesture::None),
            other => Err(GameError::InvalidFrame(format!("unknown gesture '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_table() {
        assert!(Gesture::Rock.beats(Gesture::Scissors));
        assert!(Gesture::Paper.beats(Gesture::Rock));
        assert!(Gesture::Scissors.beats(Gesture::Paper));

        assert!(!Gesture::Scissors.beats(Gesture::Rock));
        assert!(!Gesture::Rock.beats(Gesture::Paper));
        assert!(!Gesture::Paper.beats(Gesture::Scissors));
    }

    #[test]
    fn test_nothing_beats_itself_or_none() {
        for g in Gesture::MOVES {
            assert!(!g.beats(g));
            assert!(!g.beats(Gesture::None));
            assert!(!Gesture::None.beats(g));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Gesture::Scissors).unwrap(), "\"scissors\"");
        let g: Gesture = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(g, Gesture::None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Paper".parse::<Gesture>().unwrap(), Gesture::Paper);
        assert!("lizard".parse::<Gesture>().is_err());
    }
}
