//! Error types for collection operations.
//!
//! Every variant describes a rejected call; the collection is left exactly as it was
//! before the call.

use thiserror::Error;

/// Structured error types for [`Collection`](super::Collection) operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A 1-based position outside the bounds accepted by the operation
    #[error("Index {index} out of range: expected {min}..={max}")]
    IndexOutOfRange { index: usize, min: usize, max: usize },

    /// A null key was supplied where a concrete key is required
    #[error("Key is null in '{operation}'")]
    NullKey { operation: String },

    /// The referenced key is not present
    #[error("Key '{key}' not exist")]
    KeyNotFound { key: String },

    /// The key being added is already present
    #[error("Key '{key}' existed")]
    DuplicateKey { key: String },
}

impl CollectionError {
    /// Check if this error indicates a position outside the valid range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, CollectionError::IndexOutOfRange { .. })
    }

    /// Check if this error indicates a key was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, CollectionError::KeyNotFound { .. })
    }

    /// Check if this error indicates the key already exists
    pub fn is_duplicate(&self) -> bool {
        matches!(self, CollectionError::DuplicateKey { .. })
    }

    /// Check if this error indicates a null key
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, CollectionError::NullKey { .. })
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            CollectionError::KeyNotFound { key } | CollectionError::DuplicateKey { key } => {
                Some(key)
            }
            _ => None,
        }
    }
}

// Conversion from CollectionError to the main Error type
impl From<CollectionError> for crate::Error {
    fn from(err: CollectionError) -> Self {
        crate::Error::Collection(err)
    }
}
