use crate::{NoBoxError, core::ScoringBox};

/// Returns the index of the box with the smallest current weight.
///
/// Ties go to the box that comes first, so among equally light boxes the
/// lowest index is chosen.
///
/// # Example
///
/// ```
/// use boxscore_engine::{ScoringBox, select_target_box};
///
/// let boxes = [ScoringBox::green(0.5), ScoringBox::blue(0.2), ScoringBox::blue(0.2)];
/// assert_eq!(select_target_box(&boxes).unwrap(), 1);
/// ```
pub fn select_target_box(boxes: &[ScoringBox]) -> Result<usize, NoBoxError> {
    let mut target: Option<(usize, f64)> = None;
    for (index, scoring_box) in boxes.iter().enumerate() {
        let weight = scoring_box.current_weight();
        // strict comparison keeps the first of equally light boxes
        if target.is_none_or(|(_, lightest)| weight < lightest) {
            target = Some((index, weight));
        }
    }
    target.map(|(index, _)| index).ok_or(NoBoxError)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn boxes_with_weights(weights: &[f64]) -> Vec<ScoringBox> {
        weights.iter().map(|&w| ScoringBox::green(w)).collect()
    }

    #[test]
    fn test_empty_slice_is_error() {
        assert_eq!(select_target_box(&[]), Err(NoBoxError));
    }

    #[test]
    fn test_single_box() {
        assert_eq!(select_target_box(&boxes_with_weights(&[7.0])), Ok(0));
    }

    #[test]
    fn test_picks_lightest() {
        let boxes = boxes_with_weights(&[1.0, 1.1, 0.2, 0.3]);
        assert_eq!(select_target_box(&boxes), Ok(2));
    }

    #[test]
    fn test_tie_goes_to_first() {
        let boxes = boxes_with_weights(&[0.5, 0.0, 0.3, 0.0]);
        assert_eq!(select_target_box(&boxes), Ok(1));
    }

    #[test]
    fn test_follows_absorption() {
        let mut boxes = vec![
            ScoringBox::green(0.0),
            ScoringBox::green(0.1),
            ScoringBox::blue(0.2),
            ScoringBox::blue(0.3),
        ];
        assert_eq!(select_target_box(&boxes), Ok(0));
        boxes[0].absorb(1.0);
        assert_eq!(select_target_box(&boxes), Ok(1));
        boxes[1].absorb(0.0);
        assert_eq!(select_target_box(&boxes), Ok(1));
    }

    proptest! {
        #[test]
        fn prop_selects_lowest_index_minimum(
            weights in prop::collection::vec(0u32..8, 1..12)
        ) {
            let boxes: Vec<ScoringBox> =
                weights.iter().map(|&w| ScoringBox::blue(f64::from(w))).collect();
            let index = select_target_box(&boxes).unwrap();
            let lightest = *weights.iter().min().unwrap();
            prop_assert_eq!(weights[index], lightest);
            prop_assert!(weights[..index].iter().all(|&w| w > lightest));
        }
    }
}
