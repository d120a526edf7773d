use serde::{Deserialize, Serialize};

use crate::{EmptyHistoryError, core::scoring};

/// Colour of a box, which fixes how it scores an absorption.
///
/// - **Green**: square of the mean of the (up to) three most recent tokens
/// - **Blue**: Cantor pairing of the smallest and largest token absorbed so far
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
#[serde(rename_all = "lowercase")]
pub enum BoxColor {
    #[display("green")]
    Green,
    #[display("blue")]
    Blue,
}

impl BoxColor {
    pub const ALL: [Self; 2] = [Self::Green, Self::Blue];

    /// Scores an absorption history with this colour's rule.
    ///
    /// `history` is ordered oldest first and must contain the token that was
    /// just absorbed.
    ///
    /// # Example
    ///
    /// ```
    /// use boxscore_engine::BoxColor;
    ///
    /// assert_eq!(BoxColor::Green.score(&[1.0, 5.0]).unwrap(), 9.0);
    /// assert_eq!(BoxColor::Blue.score(&[2.0, 13.0]).unwrap(), 133.0);
    /// ```
    pub fn score(self, history: &[f64]) -> Result<f64, EmptyHistoryError> {
        match self {
            Self::Green => scoring::green_score(history),
            Self::Blue => scoring::blue_score(history),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lowercase_tag() {
        assert_eq!(BoxColor::Green.to_string(), "green");
        assert_eq!(BoxColor::Blue.to_string(), "blue");
    }

    #[test]
    fn test_serde_uses_lowercase_tag() {
        assert_eq!(serde_json::to_string(&BoxColor::Green).unwrap(), "\"green\"");
        let color: BoxColor = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(color, BoxColor::Blue);
    }

    #[test]
    fn test_dispatch_matches_scoring_functions() {
        let history = [3.0, 1.0, 4.0, 1.0];
        assert_eq!(
            BoxColor::Green.score(&history),
            scoring::green_score(&history)
        );
        assert_eq!(BoxColor::Blue.score(&history), scoring::blue_score(&history));
    }

    #[test]
    fn test_empty_history_is_error_for_all_colors() {
        for color in BoxColor::ALL {
            assert_eq!(color.score(&[]), Err(EmptyHistoryError), "{color}");
        }
    }
}
