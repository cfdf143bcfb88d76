//! Greedy line suppression
//!
//! Collapses near-duplicate strip candidates into the ordered row and
//! column line sets that define the grid. The overlap measure is
//! deliberately asymmetric: `intersection_area(kept, c) / area(c)` scores
//! how much of candidate `c` is swallowed by the kept strip, regardless
//! of the kept strip's own size. A symmetric-IoU variant selects
//! different representatives for ambiguous inputs; this module is the
//! single suppression contract in this workspace.

use ordered_float::OrderedFloat;

use crate::projector::LineCandidate;

/// Sort key treating NaN scores as the lowest possible score
///
/// A NaN confidence is never picked over any valid candidate; it can only
/// become a representative when nothing valid overlaps it.
#[inline]
fn score_key(score: f32) -> OrderedFloat<f32> {
    if score.is_nan() {
        OrderedFloat(f32::NEG_INFINITY)
    } else {
        OrderedFloat(score)
    }
}

/// Greedy suppression over one axis, returning kept candidate indices in
/// ascending input order
///
/// Repeatedly keeps the highest-scoring remaining candidate, then removes
/// every remaining candidate whose overlap ratio against it exceeds
/// `threshold`. Deterministic: score ties resolve to the later input
/// index (stable ascending sort, popped from the back). Empty input
/// yields empty output.
fn suppress(candidates: &[LineCandidate], threshold: f32) -> Vec<usize> {
    if candidates.is_empty() {
        return Vec::new();
    }

    // Ascending by score, NaN lowest; popping from the back takes the
    // best remaining candidate first.
    let mut remaining: Vec<usize> = (0..candidates.len()).collect();
    remaining.sort_by_key(|&i| score_key(candidates[i].score));

    let mut kept = Vec::new();
    while let Some(best) = remaining.pop() {
        kept.push(best);
        let kept_region = candidates[best].region;
        remaining
            .retain(|&i| candidates[i].region.intersection_over_self(&kept_region) <= threshold);
    }

    kept.sort_unstable();
    kept
}

/// Select row lines: kept candidates ordered by origin index ascending
///
/// Row order relies on the OCR engine's top-to-bottom emission order as a
/// proxy for geometry; nothing here sorts by `y0`. Columns are
/// geometry-sorted instead (see [`select_column_lines`]). A `y0` sort
/// would be the more robust choice if the emission-order assumption ever
/// breaks upstream.
#[must_use = "returns the kept row lines"]
pub fn select_row_lines(candidates: &[LineCandidate], threshold: f32) -> Vec<LineCandidate> {
    let mut kept: Vec<LineCandidate> = suppress(candidates, threshold)
        .into_iter()
        .map(|i| candidates[i])
        .collect();
    kept.sort_by_key(|candidate| candidate.origin_index);
    kept
}

/// Select column lines: kept candidates re-sorted left-to-right by strip
/// `x0`, independent of emission order
#[must_use = "returns the kept column lines"]
pub fn select_column_lines(candidates: &[LineCandidate], threshold: f32) -> Vec<LineCandidate> {
    let mut kept: Vec<LineCandidate> = suppress(candidates, threshold)
        .into_iter()
        .map(|i| candidates[i])
        .collect();
    kept.sort_by_key(|candidate| OrderedFloat(candidate.region.l));
    kept
}
