use serde::{Deserialize, Serialize};

use crate::{EmptyHistoryError, core::box_color::BoxColor};

/// A box that absorbs token weights and scores each absorption.
///
/// The box keeps every absorbed weight in insertion order. Its current weight
/// is always the initial weight plus the sum of that history, and its colour
/// never changes after construction.
///
/// # Example
///
/// ```
/// use boxscore_engine::ScoringBox;
///
/// let mut scoring_box = ScoringBox::green(0.1);
/// scoring_box.absorb(1.0);
/// scoring_box.absorb(8.0);
///
/// assert_eq!(scoring_box.history(), &[1.0, 8.0]);
/// assert_eq!(scoring_box.score_on_absorb().unwrap(), 20.25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringBox {
    color: BoxColor,
    initial_weight: f64,
    current_weight: f64,
    history: Vec<f64>,
}

impl ScoringBox {
    #[must_use]
    pub const fn new(color: BoxColor, initial_weight: f64) -> Self {
        Self {
            color,
            initial_weight,
            current_weight: initial_weight,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn green(initial_weight: f64) -> Self {
        Self::new(BoxColor::Green, initial_weight)
    }

    #[must_use]
    pub const fn blue(initial_weight: f64) -> Self {
        Self::new(BoxColor::Blue, initial_weight)
    }

    #[must_use]
    pub const fn color(&self) -> BoxColor {
        self.color
    }

    #[must_use]
    pub const fn initial_weight(&self) -> f64 {
        self.initial_weight
    }

    /// Returns the initial weight plus every weight absorbed so far.
    #[must_use]
    pub const fn current_weight(&self) -> f64 {
        self.current_weight
    }

    /// Returns the absorbed weights, oldest first.
    #[must_use]
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Returns the most recently absorbed weight.
    #[must_use]
    pub fn last_absorbed(&self) -> Option<f64> {
        self.history.last().copied()
    }

    /// Absorbs a token, adding it to the history and the current weight.
    ///
    /// Token weights are expected to be non-negative; this is not checked.
    pub fn absorb(&mut self, token_weight: f64) {
        self.history.push(token_weight);
        self.current_weight += token_weight;
        tracing::trace!(
            color = %self.color,
            token_weight,
            current_weight = self.current_weight,
            "box absorbed token"
        );
    }

    /// Scores the latest absorption from the updated history.
    ///
    /// Call this right after [`ScoringBox::absorb`].
    pub fn score_on_absorb(&self) -> Result<f64, EmptyHistoryError> {
        self.color.score(&self.history)
    }

    #[must_use]
    pub fn snapshot(&self) -> BoxSnapshot {
        BoxSnapshot {
            color: self.color,
            initial_weight: self.initial_weight,
            current_weight: self.current_weight,
            history: self.history.clone(),
        }
    }
}

/// Serializable view of a box at one point in the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSnapshot {
    pub color: BoxColor,
    pub initial_weight: f64,
    pub current_weight: f64,
    pub history: Vec<f64>,
}
