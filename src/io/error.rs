//! Error types and context management for catalog and composition operations

use crate::catalog::item::Slot;
use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all closet operations
#[derive(Debug)]
pub enum ClosetError {
    /// A slot every outfit needs has no items at all
    ///
    /// Raised before composition starts so callers never receive an outfit
    /// with a required slot silently left empty.
    InsufficientCatalog {
        /// First required slot found empty
        slot: Slot,
    },

    /// Catalog record could not be turned into an item
    InvalidRecord {
        /// Identifier of the offending record
        id: String,
        /// Description of what's wrong with the record
        reason: String,
    },

    /// Externally produced selection names an id missing from the catalog
    UnknownItem {
        /// Slot the id was supplied for
        slot: Slot,
        /// The dangling identifier
        id: String,
    },

    /// Externally produced selection puts an item into the wrong slot
    SlotMismatch {
        /// Slot the id was supplied for
        slot: Slot,
        /// Identifier of the misplaced item
        id: String,
        /// Slot the catalog actually assigns the item to
        actual: Slot,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
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

    /// JSON document could not be parsed or written
    Parse {
        /// Path of the document
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },
}

impl fmt::Display for ClosetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientCatalog { slot } => {
                write!(f, "Insufficient catalog: no items available for '{slot}'")
            }
            Self::InvalidRecord { id, reason } => {
                write!(f, "Invalid catalog record '{id}': {reason}")
            }
            Self::UnknownItem { slot, id } => {
                write!(f, "Unknown item '{id}' selected for '{slot}'")
            }
            Self::SlotMismatch { slot, id, actual } => {
                write!(
                    f,
                    "Item '{id}' selected for '{slot}' belongs to '{actual}'"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::Parse { path, source } => {
                write!(f, "Failed to parse '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ClosetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for closet results
pub type Result<T> = std::result::Result<T, ClosetError>;

/// Attaches the file being worked on to I/O and parse failures
pub trait WithPath<T> {
    /// Add path and operation context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| ClosetError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl<T> WithPath<T> for std::result::Result<T, serde_json::Error> {
    fn with_path(self, path: &Path, _operation: &'static str) -> Result<T> {
        self.map_err(|source| ClosetError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl From<std::io::Error> for ClosetError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for ClosetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ClosetError {
    ClosetError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid record error
pub fn invalid_record(id: &impl ToString, reason: &impl ToString) -> ClosetError {
    ClosetError::InvalidRecord {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}
