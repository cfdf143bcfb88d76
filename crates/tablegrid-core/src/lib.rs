//! # tablegrid - Table-Grid Reconstruction from OCR Fragments
//!
//! Reconstructs the logical row/column grid of a table image from an
//! unordered set of OCR-recognized text fragments (bounding box + text +
//! confidence) and assigns each fragment's text to its cell.
//!
//! The algorithm is geometric and combinatorial:
//!
//! 1. **Projection**: every fragment becomes a full-width row strip and a
//!    full-height column strip ([`projector`]).
//! 2. **Suppression**: greedy, confidence-ordered suppression collapses
//!    near-duplicate strips into the ordered row and column line sets
//!    ([`suppress`]).
//! 3. **Assembly**: each `(row, col)` cell rectangle is matched against
//!    all fragments by IoU and takes the qualifying fragment's text
//!    ([`assemble`]).
//!
//! Table *detection*, OCR itself, image cropping and output serialization
//! are external collaborators; the [`GridExporter`] trait is the
//! downstream contract.
//!
//! ## Quick Start
//!
//! ```
//! use tablegrid_core::{Fragment, Region, TableReconstructor};
//!
//! # fn main() -> tablegrid_core::Result<()> {
//! // Fragments arrive in OCR emission order (top-to-bottom-ish)
//! let fragments = vec![
//!     Fragment::new(Region::new(0.0, 0.0, 50.0, 20.0), "item", 0.99),
//!     Fragment::new(Region::new(60.0, 0.0, 110.0, 20.0), "price", 0.98),
//!     Fragment::new(Region::new(0.0, 30.0, 50.0, 50.0), "apples", 0.97),
//!     Fragment::new(Region::new(60.0, 30.0, 110.0, 50.0), "3.50", 0.95),
//! ];
//!
//! let reconstructor = TableReconstructor::with_defaults();
//! let result = reconstructor.reconstruct(&fragments, 120.0, 60.0)?;
//!
//! assert_eq!(result.grid.rows(), 2);
//! assert_eq!(result.grid.cols(), 2);
//! assert_eq!(result.grid.get(1, 1), Some("3.50"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All public APIs return [`Result<T>`]. Malformed fragment geometry
//! fails fast with [`GridError::MalformedBox`]; an empty fragment list is
//! not an error and yields the `0×0` grid.
//!
//! ## Concurrency
//!
//! One reconstruction call is single-threaded, CPU-bound and
//! deterministic. [`TableReconstructor`] takes `&self` and owns all
//! transients, so independent tables may be reconstructed concurrently.

// Error types (public API)
pub mod error;

// Algorithm stages
pub mod assemble;
pub mod projector;
pub mod suppress;

// Data model
pub mod fragment;
pub mod geometry;
pub mod grid;

// Driver, configuration, downstream contract
pub mod config;
pub mod export;
pub mod reconstruct;

// ============================================================================
// Public API Exports
// ============================================================================

pub use error::{GridError, Result};

// Core reconstruction API
pub use config::{ReconstructorConfig, ReconstructorConfigBuilder};
pub use reconstruct::{GridStats, Reconstruction, TableReconstructor};

// Data structures used in inputs and outputs
pub use fragment::Fragment;
pub use geometry::Region;
pub use grid::Grid;
pub use projector::{Axis, LineCandidate};

// Downstream consumer contract
pub use export::GridExporter;
