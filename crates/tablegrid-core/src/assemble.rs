//! Cell assembly: build the grid from ordered row and column lines
//!
//! The per-cell candidate rectangle combines the column strip's x-range
//! with the row strip's y-range. That shortcut equals the general
//! rectangle intersection *only* under the spanning invariant (row strips
//! span the full table width, column strips the full table height);
//! [`Region::intersect`] is the canonical primitive when the invariant
//! does not hold.

use log::debug;

use crate::fragment::Fragment;
use crate::geometry::Region;
use crate::grid::Grid;
use crate::projector::LineCandidate;

/// Build the `rows × cols` grid by matching every fragment against every
/// cell rectangle
///
/// The full fragment list participates, not just fragments whose
/// candidates survived suppression: a fragment whose row strip was
/// collapsed still lands in the surviving row's cells. A fragment is
/// assigned where `IoU(cell, fragment) > iou_threshold`; when several
/// fragments qualify for one cell, the last one in iteration order wins.
/// Each overwrite is logged and counted in the returned total.
#[must_use = "returns the assembled grid and the overwrite count"]
pub fn assemble(
    row_lines: &[LineCandidate],
    col_lines: &[LineCandidate],
    fragments: &[Fragment],
    iou_threshold: f32,
) -> (Grid, usize) {
    let mut grid = Grid::new(row_lines.len(), col_lines.len());
    let mut overwrites = 0;

    for (i, row) in row_lines.iter().enumerate() {
        for (j, col) in col_lines.iter().enumerate() {
            // Column x-range + row y-range: the spanning-invariant
            // shortcut for intersect(row.region, col.region).
            let cell = Region::new(col.region.l, row.region.t, col.region.r, row.region.b);

            for fragment in fragments {
                if cell.intersection_over_union(&fragment.region) > iou_threshold {
                    if grid.get(i, j).is_some_and(|text| !text.is_empty()) {
                        overwrites += 1;
                        debug!("cell ({i},{j}) overwritten by {:?}", fragment.text);
                    }
                    grid.set(i, j, fragment.text.clone());
                }
            }
        }
    }

    (grid, overwrites)
}
