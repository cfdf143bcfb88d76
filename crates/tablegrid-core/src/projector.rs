//! Line-candidate projection
//!
//! Each fragment projects into two full-span strips: a row strip covering
//! the fragment's vertical extent across the whole table width, and a
//! column strip covering its horizontal extent across the whole table
//! height. Fragments sharing a row produce near-identical row strips,
//! which suppression collapses into a single row line; same for columns.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::fragment::Fragment;
use crate::geometry::Region;

/// Axis a line candidate belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal strip: a candidate table row
    Row,
    /// Vertical strip: a candidate table column
    Column,
}

/// A full-width or full-height strip derived from one fragment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineCandidate {
    /// Axis this strip belongs to
    pub axis: Axis,
    /// Strip geometry: spans the full table width (rows) or height (columns)
    pub region: Region,
    /// Index of the originating fragment in the input sequence
    pub origin_index: usize,
    /// Score inherited from the fragment's OCR confidence
    pub score: f32,
}

/// Project fragments into row and column line candidates
///
/// For a fragment box `(x0, y0, x2, y2)` on a `W×H` table image the row
/// strip is `(0, y0, W, y2)` and the column strip is `(x0, 0, x2, H)`.
/// Inverted fragment edges are normalized by swapping before use.
///
/// `max_per_axis` is a soft cap for pathological inputs: fragments past
/// the cap produce no candidates (with a warning) but still participate
/// in cell assembly.
///
/// # Errors
///
/// [`GridError::MalformedBox`] for non-finite fragment coordinates or a
/// fragment whose normalized box has no positive area.
pub fn project(
    fragments: &[Fragment],
    table_width: f32,
    table_height: f32,
    max_per_axis: usize,
) -> Result<(Vec<LineCandidate>, Vec<LineCandidate>)> {
    let capped = fragments.len().min(max_per_axis);
    if capped < fragments.len() {
        warn!(
            "candidate cap reached: projecting {capped} of {} fragments",
            fragments.len()
        );
    }

    let mut row_candidates = Vec::with_capacity(capped);
    let mut col_candidates = Vec::with_capacity(capped);

    for (index, fragment) in fragments.iter().take(capped).enumerate() {
        let bbox = normalized_bbox(fragment, index)?;

        row_candidates.push(LineCandidate {
            axis: Axis::Row,
            region: Region::new(0.0, bbox.t, table_width, bbox.b),
            origin_index: index,
            score: fragment.confidence,
        });
        col_candidates.push(LineCandidate {
            axis: Axis::Column,
            region: Region::new(bbox.l, 0.0, bbox.r, table_height),
            origin_index: index,
            score: fragment.confidence,
        });
    }

    Ok((row_candidates, col_candidates))
}

fn normalized_bbox(fragment: &Fragment, index: usize) -> Result<Region> {
    if !fragment.region.is_finite() {
        return Err(GridError::malformed(format!(
            "fragment {index} has non-finite coordinates"
        )));
    }
    let bbox = fragment.region.normalized();
    if bbox.area() <= 0.0 {
        return Err(GridError::malformed(format!(
            "fragment {index} has no positive-area box after edge normalization"
        )));
    }
    Ok(bbox)
}
