//!
//! vbcompat: Visual Basic collection and arithmetic semantics for ported code.
//! This library provides the pieces of the legacy runtime that have no direct counterpart in
//! the Rust standard library and that ported code tends to depend on without saying so.
//!
//! ## Core Concepts
//!
//! * **Collections (`collection::Collection`)**: An insertion-ordered container addressable by unique
//!   string key or by 1-based position, with explicit before/after placement. Unlike a `HashMap`,
//!   iteration order is the order entries were placed in, and removing then re-adding an entry moves it
//!   to the end.
//! * **Placement (`collection::Placement`)**: Where a new entry goes, relative to an existing key or
//!   position (`collection::Anchor`).
//! * **Implicit rounding (`math`)**: Integer division, and real-valued division and multiplication stored
//!   into a whole-number variable, rounded the way the legacy runtime rounds (half to even).

pub mod collection;
pub mod constants;
pub mod math;

/// Re-export the `Collection` struct for easier access.
pub use collection::Collection;

/// Result type used throughout the vbcompat library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the vbcompat library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured collection errors from the collection module
    #[error(transparent)]
    Collection(collection::CollectionError),

    /// Structured arithmetic errors from the math module
    #[error(transparent)]
    Math(math::MathError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Collection(_) => "collection",
            Error::Math(_) => "math",
        }
    }

    /// Check if this error indicates a key was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_not_found(),
            Error::Math(_) => false,
        }
    }

    /// Check if this error indicates a conflict (key already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_duplicate(),
            Error::Math(_) => false,
        }
    }

    /// Check if this error indicates an index or value outside the accepted range.
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_out_of_range(),
            Error::Math(err) => err.is_overflow(),
        }
    }

    /// Check if this error is arithmetic.
    pub fn is_arithmetic_error(&self) -> bool {
        matches!(self, Error::Math(_))
    }
}
