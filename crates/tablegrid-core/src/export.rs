//! Grid export contract
//!
//! Serialization is the downstream consumer's concern; the core never
//! writes grids itself. The trait pins the wire contract: a rectangular
//! `rows × cols` table of strings, row-major, `""` for empty cells, no
//! header row implied. A `0×0` grid means the table produced no OCR
//! output and the consumer should emit nothing for it.

use crate::error::Result;
use crate::grid::Grid;

/// Receives a reconstructed grid for serialization
///
/// Implementations live with the consumer (CSV writer, document
/// assembler, test harness).
///
/// # Examples
///
/// ```
/// use tablegrid_core::{Grid, GridExporter, Result};
///
/// struct RowCounter(usize);
///
/// impl GridExporter for RowCounter {
///     fn export(&mut self, grid: &Grid) -> Result<()> {
///         self.0 += grid.rows();
///         Ok(())
///     }
/// }
///
/// let mut counter = RowCounter(0);
/// counter.export(&Grid::new(2, 3))?;
/// assert_eq!(counter.0, 2);
/// # Ok::<(), tablegrid_core::GridError>(())
/// ```
pub trait GridExporter {
    /// Write one grid to the exporter's backing output
    ///
    /// # Errors
    ///
    /// [`crate::GridError::Export`] when the backing writer fails.
    fn export(&mut self, grid: &Grid) -> Result<()>;
}
