//! Error types for polykit
//!
//! Provides a unified error type for all polykit crates. Most contract
//! violations in this workspace are rejected by the type checker; the
//! variants here cover the paths that are checked at runtime instead
//! (the model catalogue and the dynamically sized lockstep).

use thiserror::Error;

/// Core error type for polykit operations
#[derive(Error, Debug)]
pub enum Error {
    /// A combinator was invoked with the wrong number of arguments
    #[error("Arity mismatch: expected {expected} arguments, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// No adapter binds the concept to the type
    #[error("No implementation of concept {concept} for type {type_name}")]
    NoImplementation {
        concept: &'static str,
        type_name: &'static str,
    },

    /// More than one adapter was supplied for the same concept and type
    #[error("Conflicting adapters of concept {concept} for type {type_name}")]
    ConflictingAdapter {
        concept: &'static str,
        type_name: &'static str,
    },

    /// Catalogue serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a call with `actual` arguments to a combinator of arity `expected`
    pub fn arity_mismatch(expected: usize, actual: usize) -> Self {
        Self::ArityMismatch { expected, actual }
    }

    /// Create an error for a missing adapter of concept `K` for type `T`
    pub fn no_implementation<K: crate::Concept, T: ?Sized>() -> Self {
        Self::NoImplementation {
            concept: K::NAME,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create an error for a second adapter of concept `K` for type `T`
    pub fn conflicting_adapter<K: crate::Concept, T: ?Sized>() -> Self {
        Self::ConflictingAdapter {
            concept: K::NAME,
            type_name: std::any::type_name::<T>(),
        }
    }
}
