//! Error types and context management for city generation operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all city generation operations
#[derive(Debug)]
pub enum CityError {
    /// Failed to save the rendered city map to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Growth parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No tile and rotation fit anywhere on the frontier
    ///
    /// Occurs when every attempted candidate either:
    /// - Landed on an already occupied cell
    /// - Broke road continuity against a placed neighbour
    NoViablePlacement {
        /// Growth iteration when this occurred
        iteration: usize,
        /// Candidates tried before giving up
        attempts: usize,
    },

    /// Asset index exceeds the catalog
    UnknownAsset {
        /// The invalid asset index
        index: usize,
        /// Number of assets in the catalog
        catalog_size: usize,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Map export requested before any tile was placed
    EmptyGrid,
}

impl fmt::Display for CityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export map to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoViablePlacement {
                iteration,
                attempts,
            } => {
                write!(
                    f,
                    "No viable placement found at iteration {iteration} after {attempts} attempts"
                )
            }
            Self::UnknownAsset {
                index,
                catalog_size,
            } => {
                write!(
                    f,
                    "Asset index {index} is out of bounds (catalog holds {catalog_size})"
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::EmptyGrid => {
                write!(f, "Cannot export a map of an empty grid")
            }
        }
    }
}

impl std::error::Error for CityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for city generation results
pub type Result<T> = std::result::Result<T, CityError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Current growth iteration
    pub iteration: Option<usize>,
    /// Grid position where the error occurred
    pub position: Option<[i32; 2]>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with growth state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation context applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<CityError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only placement failures benefit from iteration context
            if let CityError::NoViablePlacement { iteration, .. } = &mut error {
                if let Some(iter) = context.iteration {
                    *iteration = iter;
                }
            }
            error
        })
    }

    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            operation: Some(operation),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for CityError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for CityError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CityError {
    CityError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> CityError {
    CityError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
