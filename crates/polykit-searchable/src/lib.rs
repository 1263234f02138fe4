//! Comparable and Searchable concepts
//!
//! Two concepts with a derived-operation layer each:
//!
//! - [`Comparable`]: equivalence, minimal definition `equal`, derived
//!   `not_equal`
//! - [`Searchable`]: predicate search over a structure, minimal definition
//!   `any` + `find`, derived `elem`, `lookup`, `all`, `none` and `subset`
//!
//! Derived operations are written once against the primitives and reach
//! every model. A model may override any of them for itself.
//!
//! # Example
//!
//! ```rust
//! use polykit_searchable::{contains, elem, Comparable, Searchable};
//!
//! /// Temperatures compared to the nearest degree
//! struct Celsius(f32);
//!
//! impl Comparable for Celsius {
//!     fn equal(&self, other: &Self) -> bool {
//!         self.0.round() == other.0.round()
//!     }
//! }
//!
//! let readings = vec![Celsius(20.2), Celsius(21.7)];
//! assert!(elem(&Celsius(22.1), &readings));
//! assert!(!contains(&readings, &Celsius(19.4)));
//! assert!(readings.all(|c| c.0 > 0.0));
//! ```

pub mod comparable;
pub mod searchable;
mod std_impls;

// Re-export main types
pub use comparable::{equal, not_equal, Comparable, ComparableConcept, EqualMcd};
pub use searchable::{
    all, any, contains, elem, find, lookup, none, subset, AnyFindMcd, FindMcd, Searchable,
    SearchableConcept,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::comparable::{Comparable, ComparableConcept};
    pub use crate::searchable::{contains, elem, AnyFindMcd, FindMcd, Searchable, SearchableConcept};
}
