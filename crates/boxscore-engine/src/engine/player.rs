use serde::{Deserialize, Serialize};

use crate::{TurnError, core::ScoringBox, engine::selection::select_target_box};

/// Identity of one of the two players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum PlayerId {
    #[display("A")]
    A,
    #[display("B")]
    B,
}

impl PlayerId {
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Returns the player who takes the given 0-indexed turn.
    ///
    /// Player A takes even turns and starts the game.
    #[must_use]
    pub const fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 { Self::A } else { Self::B }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// Box choice and score of a single turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnOutcome {
    pub box_index: usize,
    pub score: f64,
}

/// A player accumulating turn scores.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    id: PlayerId,
    score: f64,
}

impl Player {
    #[must_use]
    pub const fn new(id: PlayerId) -> Self {
        Self { id, score: 0.0 }
    }

    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Lets the lightest box absorb `token_weight` and adds its score.
    ///
    /// The player only borrows the boxes for the duration of the turn.
    pub fn take_turn(
        &mut self,
        token_weight: f64,
        boxes: &mut [ScoringBox],
    ) -> Result<TurnOutcome, TurnError> {
        let box_index = select_target_box(boxes)?;
        let target = &mut boxes[box_index];
        target.absorb(token_weight);
        let score = target.score_on_absorb()?;
        self.score += score;
        Ok(TurnOutcome { box_index, score })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoBoxError;

    #[test]
    fn test_turn_order_alternates() {
        assert_eq!(PlayerId::for_turn(0), PlayerId::A);
        assert_eq!(PlayerId::for_turn(1), PlayerId::B);
        assert_eq!(PlayerId::for_turn(2), PlayerId::A);
        assert_eq!(PlayerId::for_turn(7), PlayerId::B);
    }

    #[test]
    fn test_new_player_has_zero_score() {
        let player = Player::new(PlayerId::B);
        assert_eq!(player.id(), PlayerId::B);
        assert_eq!(player.score(), 0.0);
    }

    #[test]
    fn test_take_turn_accumulates_score() {
        let mut boxes = [ScoringBox::green(0.0), ScoringBox::blue(0.2)];
        let mut player = Player::new(PlayerId::A);

        let first = player.take_turn(3.0, &mut boxes).unwrap();
        assert_eq!(first, TurnOutcome { box_index: 0, score: 9.0 });
        assert_eq!(player.score(), 9.0);

        // green box now weighs 3.0, so the blue box is lighter
        let second = player.take_turn(1.0, &mut boxes).unwrap();
        assert_eq!(second, TurnOutcome { box_index: 1, score: 4.0 });
        assert_eq!(player.score(), 13.0);
        assert_eq!(boxes[1].history(), &[1.0]);
    }

    #[test]
    fn test_take_turn_without_boxes() {
        let mut player = Player::new(PlayerId::A);
        assert_eq!(
            player.take_turn(1.0, &mut []),
            Err(TurnError::NoBox(NoBoxError))
        );
        assert_eq!(player.score(), 0.0);
    }
}
