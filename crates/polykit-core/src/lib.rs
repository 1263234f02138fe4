//! Core vocabulary for concept-based generic programming
//!
//! This crate provides the pieces every other polykit crate builds on:
//!
//! 1. **Concepts** - marker types describing a trait's minimal complete
//!    definition and its derived operations ([`Concept`], [`ModeledBy`],
//!    [`Models`], [`Mcd`])
//! 2. **Errors** - the shared [`Error`] type for the few contract checks that
//!    happen at runtime
//! 3. **Model catalogue** - an optional runtime table of which types model
//!    which concepts (`registry` feature)
//!
//! # Design Philosophy
//!
//! - **Resolved at compile time**: adapters are trait impls, derived
//!   operations are provided methods, and a missing adapter is a type error
//! - **One adapter per pair**: trait coherence rejects conflicting adapters
//! - **Override by specialisation of provided methods**: a type may replace a
//!   derived operation for itself only
//!
//! # Example
//!
//! ```rust
//! use polykit_core::{require, Concept, ModeledBy, Models};
//!
//! trait Counted {
//!     fn count(&self) -> usize;
//!     fn is_empty(&self) -> bool {
//!         self.count() == 0
//!     }
//! }
//!
//! struct CountedConcept;
//!
//! impl Concept for CountedConcept {
//!     const NAME: &'static str = "Counted";
//!     const MINIMAL: &'static [&'static str] = &["count"];
//!     const DERIVED: &'static [&'static str] = &["is_empty"];
//! }
//!
//! impl<T: Counted + ?Sized> ModeledBy<T> for CountedConcept {}
//!
//! impl Counted for String {
//!     fn count(&self) -> usize {
//!         self.chars().count()
//!     }
//! }
//!
//! fn describe<T: Models<CountedConcept> + Counted>(value: &T) -> bool {
//!     value.is_empty()
//! }
//!
//! require::<CountedConcept, String>();
//! assert!(describe(&String::new()));
//! ```

pub mod concept;
pub mod error;
#[cfg(feature = "registry")]
pub mod registry;

// Re-export core types
pub use error::{Error, Result};

pub use concept::{require, Concept, ConceptInfo, ConceptTag, Mcd, ModeledBy, Models};

#[cfg(feature = "registry")]
pub use registry::{ModelEntry, ModelRegistry, RegistryBuilder};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::concept::{require, Concept, Mcd, ModeledBy, Models};
    pub use crate::error::Error;
    pub use crate::Result;

    #[cfg(feature = "registry")]
    pub use crate::registry::ModelRegistry;
}
