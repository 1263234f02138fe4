//! Conformance reference models
//!
//! Minimal models for each concept, parameterized by the definition style
//! under test. Their adapters supply only the required operations, so any
//! derived operation called on them runs the generic derivation rather than
//! a type-specific override.
//!
//! DO NOT USE IN PRODUCTION - these are for testing derived operations only.
//!
//! # Example
//!
//! ```rust
//! use polykit_minimal::{comparable, empty, searchable, MinimalComparable};
//! use polykit_searchable::{elem, AnyFindMcd, FindMcd};
//!
//! let s = searchable::<FindMcd, _>([comparable(0)]);
//! assert!(elem(&comparable(0), &s));
//! assert!(!elem(&comparable(1), &s));
//! assert!(!elem(&comparable(0), &empty::<AnyFindMcd, MinimalComparable>()));
//! ```

pub mod comparable;
pub mod searchable;

pub use comparable::{comparable, MinimalComparable};
pub use searchable::{empty, searchable, MinimalSearchable, SearchableStrategy};
