//! OCR fragment data model and the upstream quad adapter
//!
//! Fragments are immutable inputs produced once per table region by the
//! OCR collaborator. Their sequence order matters: it approximates the
//! engine's top-to-bottom, left-to-right emission order, which row
//! ordering uses as a proxy (see [`crate::suppress::select_row_lines`]).

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::geometry::Region;

/// Number of corner points in an OCR quad
const QUAD_POINTS: usize = 4;

/// One OCR-recognized text span with bounding geometry and confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Axis-aligned bounding region in table-image pixel space
    pub region: Region,
    /// Recognized text content
    pub text: String,
    /// Recognition confidence score (0.0 to 1.0; NaN is tolerated and
    /// sorts below every valid score during suppression)
    pub confidence: f32,
}

impl Fragment {
    /// Create a fragment from an already axis-aligned region
    #[inline]
    #[must_use = "returns the constructed fragment"]
    pub fn new(region: Region, text: impl Into<String>, confidence: f32) -> Self {
        Self {
            region,
            text: text.into(),
            confidence,
        }
    }

    /// Derive a fragment from an OCR quad
    ///
    /// The axis-aligned region is taken from `points[0]` (top-left-ish)
    /// and `points[2]` (bottom-right-ish). This matches the clockwise
    /// point order emitted by the PaddleOCR family of engines; an OCR
    /// provider with a different corner ordering needs its own adapter.
    ///
    /// # Errors
    ///
    /// [`GridError::MalformedBox`] when fewer than four points are given,
    /// any used coordinate is non-finite, or edge swapping cannot recover
    /// a positive-area box.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablegrid_core::Fragment;
    ///
    /// let quad = [[10.0, 5.0], [60.0, 5.0], [60.0, 25.0], [10.0, 25.0]];
    /// let fragment = Fragment::from_quad(&quad, "total", 0.98)?;
    /// assert_eq!(fragment.region.l, 10.0);
    /// assert_eq!(fragment.region.b, 25.0);
    /// # Ok::<(), tablegrid_core::GridError>(())
    /// ```
    pub fn from_quad(points: &[[f32; 2]], text: impl Into<String>, confidence: f32) -> Result<Self> {
        if points.len() < QUAD_POINTS {
            return Err(GridError::malformed(format!(
                "quad has {} points, expected {QUAD_POINTS}",
                points.len()
            )));
        }

        let region = Region::new(points[0][0], points[0][1], points[2][0], points[2][1]);
        if !region.is_finite() {
            return Err(GridError::malformed("non-finite quad coordinates"));
        }

        let region = region.normalized();
        if region.area() <= 0.0 {
            return Err(GridError::malformed(
                "quad corners span no positive-area box",
            ));
        }

        Ok(Self {
            region,
            text: text.into(),
            confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_quad_uses_corners_zero_and_two() {
        // Slightly skewed quad: only corners 0 and 2 define the bbox
        let quad = [[10.0, 5.0], [61.0, 6.0], [60.0, 25.0], [9.0, 24.0]];
        let fragment = Fragment::from_quad(&quad, "cell", 0.9).unwrap();
        assert_eq!(fragment.region, Region::new(10.0, 5.0, 60.0, 25.0));
    }

    #[test]
    fn test_from_quad_normalizes_inverted_corners() {
        let quad = [[60.0, 25.0], [10.0, 25.0], [10.0, 5.0], [60.0, 5.0]];
        let fragment = Fragment::from_quad(&quad, "cell", 0.9).unwrap();
        assert_eq!(fragment.region, Region::new(10.0, 5.0, 60.0, 25.0));
    }

    #[test]
    fn test_from_quad_too_few_points() {
        let err = Fragment::from_quad(&[[0.0, 0.0], [1.0, 1.0]], "x", 0.5).unwrap_err();
        assert!(err.is_malformed_box());
        assert!(err.to_string().contains("2 points"));
    }

    #[test]
    fn test_from_quad_non_finite() {
        let quad = [[0.0, f32::NAN], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let err = Fragment::from_quad(&quad, "x", 0.5).unwrap_err();
        assert!(err.is_malformed_box());
    }

    #[test]
    fn test_from_quad_zero_area() {
        // Corner 0 and corner 2 on a vertical line: no width to recover
        let quad = [[5.0, 0.0], [5.0, 0.0], [5.0, 20.0], [5.0, 20.0]];
        let err = Fragment::from_quad(&quad, "x", 0.5).unwrap_err();
        assert!(err.is_malformed_box());
    }
}
