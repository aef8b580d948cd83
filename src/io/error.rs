//! Error types for grid generation and persistence operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid generation operations
#[derive(Debug)]
pub enum QuiltError {
    /// Requested fabric name has no catalog entry
    UnknownFabric {
        /// The fabric name that failed lookup
        name: String,
    },

    /// Fabric or grid parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Rejection sampling hit its attempt ceiling without an accepted tile
    ///
    /// Occurs only under misconfigured fabrics where the neighbor exclusion
    /// pressure leaves no (or almost no) valid candidates.
    SelectionExhausted {
        /// Grid index being filled when selection gave up
        index: usize,
        /// Number of rejected candidates before giving up
        attempts: usize,
    },

    /// General file system operation failure in the backing store
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to serialize the grid snapshot for the backing store
    Serialization {
        /// Store slot being written
        key: String,
        /// Underlying serialization error
        source: serde_json::Error,
    },
}

impl fmt::Display for QuiltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFabric { name } => {
                write!(f, "Unknown fabric '{name}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SelectionExhausted { index, attempts } => {
                write!(
                    f,
                    "Tile selection at index {index} exhausted {attempts} attempts"
                )
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
            Self::Serialization { key, source } => {
                write!(f, "Failed to serialize snapshot for '{key}': {source}")
            }
        }
    }
}

impl std::error::Error for QuiltError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid generation results
pub type Result<T> = std::result::Result<T, QuiltError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> QuiltError {
    QuiltError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unknown fabric error
pub fn unknown_fabric(name: &impl ToString) -> QuiltError {
    QuiltError::UnknownFabric {
        name: name.to_string(),
    }
}
