//! Error types for table-grid reconstruction
//!
//! All public APIs use the [`Result<T>`] alias which wraps [`GridError`].
//! The core fails fast on malformed input geometry and invalid
//! configuration; everything upstream (OCR failures, model loading) is an
//! external collaborator's concern and never surfaces here.

use thiserror::Error;

/// Errors produced by the reconstruction core
#[derive(Error, Debug)]
pub enum GridError {
    /// Fragment geometry that cannot be coerced into a positive-area
    /// axis-aligned box
    ///
    /// Raised for quads with fewer than four points, non-finite
    /// coordinates, or boxes with no positive area after edge
    /// normalization. Malformed fragments are never silently coerced or
    /// dropped.
    #[error("malformed fragment box: {reason}")]
    MalformedBox {
        /// Description of what is wrong with the fragment geometry
        reason: String,
    },

    /// Invalid reconstruction configuration
    ///
    /// Raised by the config builder when a threshold is outside `[0, 1]`
    /// or the candidate cap is zero.
    #[error("invalid configuration: {reason}")]
    ConfigError {
        /// Description of what is invalid in the configuration
        reason: String,
    },

    /// A grid exporter failed to write its output
    #[error("grid export failed: {source}")]
    Export {
        /// The underlying writer error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl GridError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedBox {
            reason: reason.into(),
        }
    }

    /// Wrap an exporter backend error
    #[inline]
    #[must_use = "returns the wrapped export error"]
    pub fn export(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Export {
            source: Box::new(source),
        }
    }

    /// Returns true if this error is a malformed-box error (bad upstream geometry)
    #[inline]
    #[must_use = "this method returns a boolean, not modifying the error"]
    pub const fn is_malformed_box(&self) -> bool {
        matches!(self, Self::MalformedBox { .. })
    }

    /// Returns true if this error is a configuration error (user-fixable)
    #[inline]
    #[must_use = "this method returns a boolean, not modifying the error"]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}

impl From<std::io::Error> for GridError {
    #[inline]
    fn from(err: std::io::Error) -> Self {
        Self::export(err)
    }
}

/// Type alias for Result with [`GridError`]
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_malformed_box_display() {
        let err = GridError::malformed("quad has 2 points, expected 4");
        assert_eq!(
            err.to_string(),
            "malformed fragment box: quad has 2 points, expected 4"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = GridError::ConfigError {
            reason: "suppression threshold must be within [0, 1]".to_string(),
        };
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn test_export_error_has_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = GridError::export(io_err);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: GridError = io_err.into();
        assert!(matches!(err, GridError::Export { .. }));
    }

    #[test]
    fn test_predicates() {
        let malformed = GridError::malformed("x");
        assert!(malformed.is_malformed_box());
        assert!(!malformed.is_config_error());

        let config = GridError::ConfigError {
            reason: "x".to_string(),
        };
        assert!(config.is_config_error());
        assert!(!config.is_malformed_box());
    }
}
