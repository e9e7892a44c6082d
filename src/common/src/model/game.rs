use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    /// Text shown to the player once the round is resolved.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Win => "You won",
            Outcome::Loss => "You lost",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{input:?} is not a valid move code")]
pub struct ParseMoveError {
    pub input: String,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Single-character code the player types to pick this move.
    pub fn code(&self) -> char {
        match self {
            Move::Rock => 'a',
            Move::Paper => 'b',
            Move::Scissors => 'c',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    // None on a tie
    pub fn beats(&self, other: &Move) -> Option<bool> {
        if self == other {
            None
        } else {
            Some(matches!(
                (self, other),
                (Move::Rock, Move::Scissors)
                    | (Move::Scissors, Move::Paper)
                    | (Move::Paper, Move::Rock)
            ))
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Accepts a move code, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Move::ALL
            .into_iter()
            .find(|m| code.len() == 1 && code.starts_with(m.code()))
            .ok_or_else(|| ParseMoveError {
                input: s.to_owned(),
            })
    }
}

/// Outcome of a round from the player's perspective.
pub fn resolve(player: Move, opponent: Move) -> Outcome {
    match player.beats(&opponent) {
        None => Outcome::Draw,
        Some(true) => Outcome::Win,
        Some(false) => Outcome::Loss,
    }
}
