//! Property tests for geometry primitives and suppression invariants

use proptest::prelude::*;
use tablegrid_core::projector::{Axis, LineCandidate};
use tablegrid_core::suppress::{select_column_lines, select_row_lines};
use tablegrid_core::Region;

fn region_strategy() -> impl Strategy<Value = Region> {
    (
        0.0f32..500.0,
        0.0f32..500.0,
        1.0f32..500.0,
        1.0f32..500.0,
    )
        .prop_map(|(l, t, w, h)| Region::new(l, t, l + w, t + h))
}

fn row_candidates_strategy() -> impl Strategy<Value = Vec<LineCandidate>> {
    prop::collection::vec((0.0f32..400.0, 1.0f32..80.0, 0.0f32..1.0), 0..40).prop_map(|strips| {
        strips
            .into_iter()
            .enumerate()
            .map(|(origin_index, (t, height, score))| LineCandidate {
                axis: Axis::Row,
                region: Region::new(0.0, t, 1000.0, t + height),
                origin_index,
                score,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn iou_with_self_is_one(a in region_strategy()) {
        prop_assert!((a.intersection_over_union(&a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn iou_is_symmetric(a in region_strategy(), b in region_strategy()) {
        let ab = a.intersection_over_union(&b);
        let ba = b.intersection_over_union(&a);
        prop_assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn iou_is_bounded(a in region_strategy(), b in region_strategy()) {
        let iou = a.intersection_over_union(&b);
        prop_assert!(iou >= 0.0);
        prop_assert!(iou <= 1.0 + 1e-6);
    }

    #[test]
    fn overlap_ratio_is_one_sided(a in region_strategy(), b in region_strategy()) {
        // intersection_over_self normalizes by its receiver's area only;
        // both directions still land in [0, 1].
        let ab = a.intersection_over_self(&b);
        let ba = b.intersection_over_self(&a);
        prop_assert!((0.0..=1.0 + 1e-6).contains(&ab));
        prop_assert!((0.0..=1.0 + 1e-6).contains(&ba));
    }

    #[test]
    fn suppression_output_never_grows(candidates in row_candidates_strategy()) {
        let kept = select_row_lines(&candidates, 0.1);
        prop_assert!(kept.len() <= candidates.len());
    }

    #[test]
    fn kept_lines_do_not_swallow_each_other(candidates in row_candidates_strategy()) {
        // Every lower-scoring kept line survived its check against every
        // higher-scoring kept line, so its swallowed fraction is within
        // the threshold. Score ties resolve to the later input index.
        let kept = select_row_lines(&candidates, 0.1);
        for a in &kept {
            for b in &kept {
                if a.origin_index == b.origin_index {
                    continue;
                }
                let (winner, loser) = if (a.score, a.origin_index) >= (b.score, b.origin_index) {
                    (a, b)
                } else {
                    (b, a)
                };
                let ratio = loser.region.intersection_over_self(&winner.region);
                prop_assert!(ratio <= 0.1 + 1e-6);
            }
        }
    }

    #[test]
    fn column_selection_sorted_left_to_right(candidates in row_candidates_strategy()) {
        // Reuse the strips as column candidates: output must be x-sorted
        let columns: Vec<LineCandidate> = candidates
            .iter()
            .map(|candidate| LineCandidate {
                axis: Axis::Column,
                region: Region::new(
                    candidate.region.t,
                    0.0,
                    candidate.region.b,
                    1000.0,
                ),
                origin_index: candidate.origin_index,
                score: candidate.score,
            })
            .collect();
        let kept = select_column_lines(&columns, 0.1);
        for pair in kept.windows(2) {
            prop_assert!(pair[0].region.l <= pair[1].region.l);
        }
    }
}
