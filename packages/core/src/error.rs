//! Error types for path resolution
//!
//! A path that matches nothing is not an error: it resolves to an empty set of
//! bindings. Errors are reserved for bad caller arguments, which are rejected
//! before any traversal happens, and for exporting a cyclic graph.

use thiserror::Error;

use crate::path::Location;

/// Result type for path resolution operations
pub type RefResult<T> = Result<T, RefError>;

/// Broad classification of a [`RefError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied argument was unusable (empty path, bad configuration)
    InvalidArgument,
    /// A key cannot address a member of the given container
    InvalidKey,
    /// A cyclic graph was handed to an operation that requires a tree
    Cycle,
}

/// Errors raised by the resolver, bindings and value conversions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefError {
    #[error("path must contain at least one segment")]
    EmptyPath,

    #[error("invalid resolver configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("key '{key}' cannot address a member of a sequence")]
    KeyMismatch { key: String },

    #[error("value graph is cyclic at {location}")]
    Cycle { location: Location },
}

impl RefError {
    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            RefError::EmptyPath | RefError::InvalidConfig { .. } => ErrorKind::InvalidArgument,
            RefError::KeyMismatch { .. } => ErrorKind::InvalidKey,
            RefError::Cycle { .. } => ErrorKind::Cycle,
        }
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        RefError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Key;

    #[test]
    fn test_kind_classification() {
        assert_eq!(RefError::EmptyPath.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            RefError::invalid_config("empty wildcard").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            RefError::KeyMismatch { key: "length".into() }.kind(),
            ErrorKind::InvalidKey
        );
        let location = Location::root().child(Key::from("a"));
        assert_eq!(RefError::Cycle { location }.kind(), ErrorKind::Cycle);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RefError::EmptyPath.to_string(),
            "path must contain at least one segment"
        );
        let location = Location::root().child(Key::from("child")).child(Key::from("parent"));
        assert_eq!(
            RefError::Cycle { location }.to_string(),
            "value graph is cyclic at $['child']['parent']"
        );
    }
}
