//! Errors
use crate::types::GeometryType;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors raised while creating, storing or restoring geometries
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    /// The number of points does not match the geometry type
    #[error("Invalid points number. Expected {expected}, given {given}")]
    InvalidPointsNumber {
        /// The geometry being constructed
        geometry: GeometryType,
        /// Number of points the geometry type holds
        expected: usize,
        /// Number of points supplied
        given: usize,
    },

    /// Stored data describes a different geometry type
    #[error("Geometry type mismatch: expected {expected}, found {found}")]
    GeometryTypeMismatch {
        /// Type being restored
        expected: GeometryType,
        /// Type found in the stored data
        found: GeometryType,
    },

    /// Reading or writing a file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialising to RON failed
    #[cfg(feature = "serde")]
    #[error("RON serialisation error: {0}")]
    RonSerialize(#[from] ron::Error),

    /// Parsing RON failed
    #[cfg(feature = "serde")]
    #[error("RON parse error: {0}")]
    RonDeserialize(#[from] ron::error::SpannedError),
}
