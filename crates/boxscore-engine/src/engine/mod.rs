//! Game flow built on top of the boxes.
//!
//! - [`select_target_box`] - Chooses the lightest box for the next token
//! - [`Player`] - Takes turns and accumulates score
//! - [`GameSession`] - Owns the four boxes and alternates turns between players
//! - [`FinalScores`] / [`TurnRecord`] - Results of a game
//!
//! # Game Flow
//!
//! 1. [`GameSession::new`] creates the boxes green 0.0, green 0.1, blue 0.2, blue 0.3
//! 2. Each token goes to player A on even turns and player B on odd turns
//! 3. The player lets the lightest box absorb the token (first box wins ties)
//! 4. The box scores the absorption and the player adds it to their total
//! 5. When the tokens run out, [`GameSession::final_scores`] holds the result

pub use self::{game_result::*, game_session::*, player::*, selection::*};

mod game_result;
mod game_session;
mod player;
mod selection;
