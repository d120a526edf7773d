//! Scoring engine for the four-box token game.
//!
//! Two players, A and B, take alternating turns over a finite list of token
//! weights. On each turn the current player lets the lightest box absorb the
//! next token, and the box answers with a score that is added to the player's
//! total.
//!
//! - [`core`] holds the boxes and their scoring rules.
//! - [`engine`] holds box selection, players and the game session.
//!
//! # Example
//!
//! ```
//! use boxscore_engine::play;
//!
//! let (score_a, score_b) = play(&[1, 1, 2, 3]).unwrap();
//! assert_eq!(score_a, 13.0);
//! assert_eq!(score_b, 25.0);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("box has not absorbed any token yet")]
pub struct EmptyHistoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no box available to absorb the token")]
pub struct NoBoxError;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum TurnError {
    #[display("failed to select a box: {_0}")]
    NoBox(NoBoxError),
    #[display("failed to score the absorption: {_0}")]
    EmptyHistory(EmptyHistoryError),
}
