//! Reconstruction driver
//!
//! Strict two-phase control flow over one table region: line selection
//! must complete for both axes before cell assembly begins, because the
//! kept row/column counts and their ordering define the grid that
//! assembly indexes into.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::assemble::assemble;
use crate::config::ReconstructorConfig;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::grid::Grid;
use crate::projector::project;
use crate::suppress::{select_column_lines, select_row_lines};

/// Counters describing one reconstruction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridStats {
    /// Fragments supplied by the OCR collaborator
    pub fragment_count: usize,
    /// Line candidates per axis after the soft cap
    pub candidates_per_axis: usize,
    /// Row lines kept by suppression (equals grid rows)
    pub kept_rows: usize,
    /// Column lines kept by suppression (equals grid cols)
    pub kept_cols: usize,
    /// Cells holding fragment text after assembly
    pub filled_cells: usize,
    /// Cells whose text was overwritten by a later qualifying fragment
    pub cell_overwrites: usize,
}

/// Result of reconstructing one table region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reconstruction {
    /// The reconstructed row-major grid
    pub grid: Grid,
    /// Counters for logging and diagnostics
    pub stats: GridStats,
}

/// Reconstructs a logical row/column grid from OCR text fragments
///
/// This is the primary entry point. The reconstructor is cheap to create,
/// holds only configuration, and takes `&self`: independent tables
/// (different pages, different OCR calls) may be reconstructed
/// concurrently from separate threads with no shared state.
///
/// # Examples
///
/// ```
/// use tablegrid_core::{Fragment, Region, TableReconstructor};
///
/// # fn main() -> tablegrid_core::Result<()> {
/// let fragments = vec![
///     Fragment::new(Region::new(0.0, 0.0, 50.0, 20.0), "name", 0.99),
///     Fragment::new(Region::new(60.0, 0.0, 110.0, 20.0), "qty", 0.97),
/// ];
///
/// let reconstructor = TableReconstructor::with_defaults();
/// let result = reconstructor.reconstruct(&fragments, 120.0, 60.0)?;
///
/// assert_eq!(result.grid.rows(), 1);
/// assert_eq!(result.grid.cols(), 2);
/// assert_eq!(result.grid.get(0, 0), Some("name"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TableReconstructor {
    config: ReconstructorConfig,
}

impl TableReconstructor {
    /// Create a reconstructor with the given configuration
    #[inline]
    #[must_use = "returns a new reconstructor instance"]
    pub const fn new(config: ReconstructorConfig) -> Self {
        Self { config }
    }

    /// Create a reconstructor with default thresholds
    #[inline]
    #[must_use = "returns a new reconstructor with default settings"]
    pub fn with_defaults() -> Self {
        Self::new(ReconstructorConfig::default())
    }

    /// The active configuration
    #[inline]
    #[must_use = "returns a reference to the active configuration"]
    pub const fn config(&self) -> &ReconstructorConfig {
        &self.config
    }

    /// Reconstruct the grid for one table region
    ///
    /// `table_width` and `table_height` are the cropped table image
    /// dimensions in pixels; fragments must be in OCR emission order.
    /// No fragments is not an error: the result carries the `0×0` grid
    /// and the caller skips emitting output for that table.
    ///
    /// # Errors
    ///
    /// [`crate::GridError::MalformedBox`] when a fragment's geometry is
    /// non-finite or has no positive area after edge normalization.
    pub fn reconstruct(
        &self,
        fragments: &[Fragment],
        table_width: f32,
        table_height: f32,
    ) -> Result<Reconstruction> {
        if fragments.is_empty() {
            debug!("no fragments, returning 0x0 grid");
            return Ok(Reconstruction {
                grid: Grid::default(),
                stats: GridStats::default(),
            });
        }

        // Phase 1: project and select lines on both axes.
        let (row_candidates, col_candidates) = project(
            fragments,
            table_width,
            table_height,
            self.config.max_candidates_per_axis,
        )?;
        let candidates_per_axis = row_candidates.len();

        let row_lines = select_row_lines(&row_candidates, self.config.suppression_threshold);
        let col_lines = select_column_lines(&col_candidates, self.config.suppression_threshold);
        trace!(
            "kept {} row lines and {} column lines from {candidates_per_axis} candidates per axis",
            row_lines.len(),
            col_lines.len()
        );

        // Phase 2: containment matching over the full fragment list.
        let (grid, cell_overwrites) = assemble(
            &row_lines,
            &col_lines,
            fragments,
            self.config.cell_iou_threshold,
        );

        let stats = GridStats {
            fragment_count: fragments.len(),
            candidates_per_axis,
            kept_rows: row_lines.len(),
            kept_cols: col_lines.len(),
            filled_cells: grid.filled_cells(),
            cell_overwrites,
        };
        debug!(
            "reconstructed {}x{} grid, {} filled cells, {} overwrites",
            stats.kept_rows, stats.kept_cols, stats.filled_cells, stats.cell_overwrites
        );

        Ok(Reconstruction { grid, stats })
    }
}
