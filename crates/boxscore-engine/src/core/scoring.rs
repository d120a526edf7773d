//! Score functions for box absorptions.
//!
//! Every function takes the full absorption history of a box, oldest first,
//! and is pure: the same history always yields the same score. An empty
//! history has no defined score and is reported as [`EmptyHistoryError`].

use crate::EmptyHistoryError;

/// Number of most recent tokens averaged by [`green_score`].
pub const GREEN_WINDOW: usize = 3;

/// Square of the mean of the last [`GREEN_WINDOW`] tokens.
///
/// Histories shorter than the window use the mean of all tokens.
///
/// # Example
///
/// ```
/// use boxscore_engine::scoring::green_score;
///
/// assert_eq!(green_score(&[1.0, 8.0]).unwrap(), 20.25);
/// assert_eq!(green_score(&[100.0, 1.0, 2.0, 3.0]).unwrap(), 4.0);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn green_score(history: &[f64]) -> Result<f64, EmptyHistoryError> {
    if history.is_empty() {
        return Err(EmptyHistoryError);
    }
    let recent = &history[history.len().saturating_sub(GREEN_WINDOW)..];
    let mean = recent.iter().sum::<f64>() / recent.len() as f64;
    Ok(mean * mean)
}

/// Cantor pairing of the smallest and largest token absorbed so far.
///
/// The smaller value is always the first argument of the pairing, whatever
/// order the tokens arrived in.
///
/// # Example
///
/// ```
/// use boxscore_engine::scoring::blue_score;
///
/// assert_eq!(blue_score(&[3.0]).unwrap(), 24.0);
/// assert_eq!(blue_score(&[13.0, 2.0]).unwrap(), 133.0);
/// ```
pub fn blue_score(history: &[f64]) -> Result<f64, EmptyHistoryError> {
    let (smallest, largest) = min_max(history).ok_or(EmptyHistoryError)?;
    Ok(cantor_pairing(smallest, largest))
}

/// Cantor's pairing function `((a + b)(a + b + 1)) / 2 + b`.
///
/// Not symmetric: `cantor_pairing(0.0, 1.0) == 2.0` but
/// `cantor_pairing(1.0, 0.0) == 1.0`.
#[must_use]
pub fn cantor_pairing(a: f64, b: f64) -> f64 {
    let sum = a + b;
    sum * (sum + 1.0) / 2.0 + b
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    mod green {
        use super::*;

        #[test]
        fn test_single_token_is_squared() {
            assert_eq!(green_score(&[3.0]), Ok(9.0));
        }

        #[test]
        fn test_short_history_uses_all_tokens() {
            assert_eq!(green_score(&[1.0, 5.0]), Ok(9.0));
            assert_eq!(green_score(&[0.0, 0.0]), Ok(0.0));
        }

        #[test]
        fn test_exactly_three_tokens() {
            assert_eq!(green_score(&[0.0, 0.0, 3.0]), Ok(1.0));
        }

        #[test]
        fn test_long_history_uses_three_most_recent() {
            assert_eq!(green_score(&[1000.0, 2.0, 4.0, 6.0]), Ok(16.0));
            assert_eq!(green_score(&[9.0, 9.0, 1.0, 1.0, 1.0]), Ok(1.0));
        }

        #[test]
        fn test_empty_history() {
            assert_eq!(green_score(&[]), Err(EmptyHistoryError));
        }
    }

    mod blue {
        use super::*;

        #[test]
        fn test_single_token_pairs_with_itself() {
            // pairing(2, 2) = (4 * 5) / 2 + 2
            assert_eq!(blue_score(&[2.0]), Ok(12.0));
            assert_eq!(blue_score(&[0.0]), Ok(0.0));
        }

        #[test]
        fn test_smallest_and_largest_so_far() {
            // pairing(1, 7) = (8 * 9) / 2 + 7
            assert_eq!(blue_score(&[4.0, 7.0, 1.0, 5.0]), Ok(43.0));
        }

        #[test]
        fn test_empty_history() {
            assert_eq!(blue_score(&[]), Err(EmptyHistoryError));
        }
    }

    mod pairing {
        use super::*;

        #[test]
        fn test_reference_point() {
            assert_eq!(cantor_pairing(0.0, 1.0), 2.0);
        }

        #[test]
        fn test_argument_order_matters() {
            assert_eq!(cantor_pairing(1.0, 0.0), 1.0);
            assert_eq!(cantor_pairing(2.0, 13.0), 133.0);
            assert_eq!(cantor_pairing(13.0, 2.0), 122.0);
        }
    }

    proptest! {
        #[test]
        fn prop_blue_score_ignores_absorption_order(
            mut tokens in prop::collection::vec(0u32..10_000, 1..16)
        ) {
            let forward: Vec<f64> = tokens.iter().copied().map(f64::from).collect();
            tokens.reverse();
            let backward: Vec<f64> = tokens.iter().copied().map(f64::from).collect();
            prop_assert_eq!(blue_score(&forward), blue_score(&backward));
        }

        #[test]
        fn prop_green_score_depends_only_on_recent_tokens(
            prefix in prop::collection::vec(0u32..10_000, 0..8),
            recent in prop::collection::vec(0u32..10_000, GREEN_WINDOW..=GREEN_WINDOW),
        ) {
            let recent: Vec<f64> = recent.into_iter().map(f64::from).collect();
            let mut history: Vec<f64> = prefix.into_iter().map(f64::from).collect();
            history.extend_from_slice(&recent);
            prop_assert_eq!(green_score(&history), green_score(&recent));
            prop_assert_eq!(green_score(&history), green_score(&history));
        }
    }
}
