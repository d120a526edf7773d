use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{core::BoxColor, engine::player::PlayerId};

/// Final scores of both players.
///
/// # Example
///
/// ```
/// use boxscore_engine::{FinalScores, PlayerId};
///
/// let scores = FinalScores { player_a: 13.0, player_b: 25.0 };
/// assert_eq!(scores.winner(), Some(PlayerId::B));
/// assert_eq!(scores.as_pair(), (13.0, 25.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinalScores {
    pub player_a: f64,
    pub player_b: f64,
}

impl FinalScores {
    #[must_use]
    pub const fn score_of(&self, player: PlayerId) -> f64 {
        match player {
            PlayerId::A => self.player_a,
            PlayerId::B => self.player_b,
        }
    }

    #[must_use]
    pub const fn as_pair(&self) -> (f64, f64) {
        (self.player_a, self.player_b)
    }

    /// Returns the player with the higher score, or `None` on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.player_a.partial_cmp(&self.player_b)? {
            Ordering::Greater => Some(PlayerId::A),
            Ordering::Less => Some(PlayerId::B),
            Ordering::Equal => None,
        }
    }
}

/// What happened in one turn of a game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (0-indexed, one per input token)
    pub turn: usize,
    pub player: PlayerId,
    /// Index of the box that absorbed the token
    pub box_index: usize,
    pub box_color: BoxColor,
    pub token_weight: f64,
    /// Score awarded to `player` for this turn
    pub score: f64,
    /// Weight of the chosen box after absorbing the token
    pub box_weight: f64,
}
