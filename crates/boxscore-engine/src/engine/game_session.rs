use crate::{
    TurnError,
    core::{BoxColor, ScoringBox},
    engine::{
        game_result::{FinalScores, TurnRecord},
        player::{Player, PlayerId},
    },
};

/// Number of boxes in every game.
pub const BOX_COUNT: usize = 4;

/// Colour and initial weight of each box, in selection order.
pub const INITIAL_BOXES: [(BoxColor, f64); BOX_COUNT] = [
    (BoxColor::Green, 0.0),
    (BoxColor::Green, 0.1),
    (BoxColor::Blue, 0.2),
    (BoxColor::Blue, 0.3),
];

/// A single game: four boxes, two players and the turns played so far.
///
/// The session owns the boxes for the whole game; players only borrow them
/// while taking a turn. Each call to [`GameSession::play_turn`] consumes one
/// token, and players alternate starting with A.
///
/// # Example
///
/// ```
/// use boxscore_engine::{GameSession, PlayerId};
///
/// let mut session = GameSession::new();
/// let scores = session.play_all([3, 2, 1, 1]).unwrap();
///
/// assert_eq!(scores.as_pair(), (13.0, 8.0));
/// assert_eq!(scores.winner(), Some(PlayerId::A));
/// assert_eq!(session.turns().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    boxes: [ScoringBox; BOX_COUNT],
    players: [Player; 2],
    turns: Vec<TurnRecord>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            boxes: INITIAL_BOXES.map(|(color, weight)| ScoringBox::new(color, weight)),
            players: PlayerId::ALL.map(Player::new),
            turns: Vec::new(),
        }
    }

    #[must_use]
    pub fn boxes(&self) -> &[ScoringBox; BOX_COUNT] {
        &self.boxes
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[must_use]
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    /// Returns the player whose turn comes next.
    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        PlayerId::for_turn(self.turns.len())
    }

    #[must_use]
    pub fn final_scores(&self) -> FinalScores {
        FinalScores {
            player_a: self.player(PlayerId::A).score(),
            player_b: self.player(PlayerId::B).score(),
        }
    }

    /// Plays the next turn with the given token weight.
    pub fn play_turn(&mut self, token_weight: u32) -> Result<&TurnRecord, TurnError> {
        let turn = self.turns.len();
        let player_id = PlayerId::for_turn(turn);
        let token_weight = f64::from(token_weight);

        let outcome =
            self.players[player_id.index()].take_turn(token_weight, &mut self.boxes)?;
        let target = &self.boxes[outcome.box_index];
        let record = TurnRecord {
            turn,
            player: player_id,
            box_index: outcome.box_index,
            box_color: target.color(),
            token_weight,
            score: outcome.score,
            box_weight: target.current_weight(),
        };
        tracing::debug!(
            turn,
            player = %player_id,
            box_index = record.box_index,
            box_color = %record.box_color,
            token_weight,
            score = record.score,
            "turn played"
        );

        self.turns.push(record);
        Ok(&self.turns[turn])
    }

    /// Plays every token in order and returns the final scores.
    ///
    /// The first failing turn aborts the game and its error is returned.
    pub fn play_all<I>(&mut self, input_weights: I) -> Result<FinalScores, TurnError>
    where
        I: IntoIterator<Item = u32>,
    {
        for token_weight in input_weights {
            self.play_turn(token_weight)?;
        }
        let scores = self.final_scores();
        tracing::info!(
            turns = self.turns.len(),
            player_a = scores.player_a,
            player_b = scores.player_b,
            "game finished"
        );
        Ok(scores)
    }
}

/// Plays a fresh game over `input_weights` and returns `(score_a, score_b)`.
///
/// # Example
///
/// ```
/// use boxscore_engine::play;
///
/// assert_eq!(play(&[1, 1, 2, 3, 5, 8, 13, 21]).unwrap(), (155.0, 366.25));
/// ```
pub fn play(input_weights: &[u32]) -> Result<(f64, f64), TurnError> {
    let mut session = GameSession::new();
    let scores = session.play_all(input_weights.iter().copied())?;
    Ok(scores.as_pair())
}
