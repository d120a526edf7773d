use std::fmt;

use boxscore_engine::{BoxSnapshot, FinalScores, GameSession, PlayerId, ScoringBox, TurnRecord};
use serde::{Deserialize, Serialize};

/// Outcome of one game as printed by the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    /// Token weights in the order they were played
    pub inputs: Vec<u32>,
    pub final_scores: FinalScores,
    /// `None` when both players end with the same score
    pub winner: Option<PlayerId>,
    /// Final state of every box, in selection order
    pub boxes: Vec<BoxSnapshot>,
    pub turns: Vec<TurnRecord>,
}

impl GameReport {
    pub fn from_session(inputs: Vec<u32>, session: &GameSession) -> Self {
        let final_scores = session.final_scores();
        Self {
            inputs,
            final_scores,
            winner: final_scores.winner(),
            boxes: session.boxes().iter().map(ScoringBox::snapshot).collect(),
            turns: session.turns().to_vec(),
        }
    }

    /// Plain-text view of the report.
    ///
    /// The score line is always present; `show_turns` adds one line per turn
    /// and the final box weights.
    pub fn text(&self, show_turns: bool) -> TextReport<'_> {
        TextReport {
            report: self,
            show_turns,
        }
    }
}

/// [`GameReport`] rendered for the terminal.
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a> {
    report: &'a GameReport,
    show_turns: bool,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        if self.show_turns {
            for turn in &report.turns {
                writeln!(
                    f,
                    "Turn {}: player {} -> box {} ({}) absorbs {}, score {}, box weight {}",
                    turn.turn,
                    turn.player,
                    turn.box_index,
                    turn.box_color,
                    turn.token_weight,
                    turn.score,
                    turn.box_weight,
                )?;
            }
            for (index, snapshot) in report.boxes.iter().enumerate() {
                writeln!(
                    f,
                    "Box {index} ({}): weight {}, absorbed {:?}",
                    snapshot.color, snapshot.current_weight, snapshot.history,
                )?;
            }
        }
        let FinalScores { player_a, player_b } = report.final_scores;
        writeln!(f, "Scores: player A {player_a}, player B {player_b}")?;
        match report.winner {
            Some(player) => writeln!(f, "Winner: player {player}"),
            None => writeln!(f, "Draw"),
        }
    }
}
