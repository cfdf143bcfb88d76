//! Reconstruction configuration

use crate::error::{GridError, Result};

/// Default suppression overlap-ratio threshold
pub const DEFAULT_SUPPRESSION_THRESHOLD: f32 = 0.1;

/// Default cell-assignment IoU threshold
pub const DEFAULT_CELL_IOU_THRESHOLD: f32 = 0.1;

/// Default soft cap on line candidates per axis
pub const DEFAULT_MAX_CANDIDATES_PER_AXIS: usize = 1000;

/// Tunable thresholds for one reconstruction pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconstructorConfig {
    /// Overlap ratio above which a line candidate is suppressed (default 0.1)
    pub suppression_threshold: f32,
    /// IoU above which a fragment is assigned to a cell (default 0.1)
    pub cell_iou_threshold: f32,
    /// Soft cap on line candidates per axis for pathological inputs (default 1000)
    pub max_candidates_per_axis: usize,
}

impl Default for ReconstructorConfig {
    #[inline]
    fn default() -> Self {
        Self {
            suppression_threshold: DEFAULT_SUPPRESSION_THRESHOLD,
            cell_iou_threshold: DEFAULT_CELL_IOU_THRESHOLD,
            max_candidates_per_axis: DEFAULT_MAX_CANDIDATES_PER_AXIS,
        }
    }
}

/// Builder for [`ReconstructorConfig`]
///
/// # Examples
///
/// ```
/// use tablegrid_core::ReconstructorConfigBuilder;
///
/// let config = ReconstructorConfigBuilder::new()
///     .suppression_threshold(0.15)
///     .cell_iou_threshold(0.2)
///     .build()?;
/// assert_eq!(config.max_candidates_per_axis, 1000);
/// # Ok::<(), tablegrid_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReconstructorConfigBuilder {
    suppression_threshold: f32,
    cell_iou_threshold: f32,
    max_candidates_per_axis: usize,
}

impl Default for ReconstructorConfigBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ReconstructorConfigBuilder {
    /// Create a builder with default thresholds
    #[inline]
    #[must_use = "returns a new builder with default settings"]
    pub fn new() -> Self {
        Self {
            suppression_threshold: DEFAULT_SUPPRESSION_THRESHOLD,
            cell_iou_threshold: DEFAULT_CELL_IOU_THRESHOLD,
            max_candidates_per_axis: DEFAULT_MAX_CANDIDATES_PER_AXIS,
        }
    }

    /// Set the suppression overlap-ratio threshold
    #[inline]
    #[must_use = "builder methods return the modified builder"]
    pub fn suppression_threshold(mut self, threshold: f32) -> Self {
        self.suppression_threshold = threshold;
        self
    }

    /// Set the cell-assignment IoU threshold
    #[inline]
    #[must_use = "builder methods return the modified builder"]
    pub fn cell_iou_threshold(mut self, threshold: f32) -> Self {
        self.cell_iou_threshold = threshold;
        self
    }

    /// Set the soft cap on line candidates per axis
    #[inline]
    #[must_use = "builder methods return the modified builder"]
    pub fn max_candidates_per_axis(mut self, cap: usize) -> Self {
        self.max_candidates_per_axis = cap;
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// [`GridError::ConfigError`] when a threshold is outside `[0, 1]` or
    /// not finite, or the candidate cap is zero.
    pub fn build(self) -> Result<ReconstructorConfig> {
        validate_threshold("suppression threshold", self.suppression_threshold)?;
        validate_threshold("cell IoU threshold", self.cell_iou_threshold)?;
        if self.max_candidates_per_axis == 0 {
            return Err(GridError::ConfigError {
                reason: "max candidates per axis must be nonzero".to_string(),
            });
        }

        Ok(ReconstructorConfig {
            suppression_threshold: self.suppression_threshold,
            cell_iou_threshold: self.cell_iou_threshold,
            max_candidates_per_axis: self.max_candidates_per_axis,
        })
    }
}

fn validate_threshold(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(GridError::ConfigError {
            reason: format!("{name} must be within [0, 1], got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReconstructorConfig::default();
        assert_eq!(config.suppression_threshold, 0.1);
        assert_eq!(config.cell_iou_threshold, 0.1);
        assert_eq!(config.max_candidates_per_axis, 1000);
    }

    #[test]
    fn test_builder_roundtrip() {
        let config = ReconstructorConfigBuilder::new()
            .suppression_threshold(0.25)
            .cell_iou_threshold(0.5)
            .max_candidates_per_axis(64)
            .build()
            .unwrap();
        assert_eq!(config.suppression_threshold, 0.25);
        assert_eq!(config.cell_iou_threshold, 0.5);
        assert_eq!(config.max_candidates_per_axis, 64);
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let err = ReconstructorConfigBuilder::new()
            .suppression_threshold(1.5)
            .build()
            .unwrap_err();
        assert!(err.is_config_error());

        let err = ReconstructorConfigBuilder::new()
            .cell_iou_threshold(-0.1)
            .build()
            .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let err = ReconstructorConfigBuilder::new()
            .suppression_threshold(f32::NAN)
            .build()
            .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_zero_cap_rejected() {
        let err = ReconstructorConfigBuilder::new()
            .max_candidates_per_axis(0)
            .build()
            .unwrap_err();
        assert!(err.is_config_error());
    }
}
