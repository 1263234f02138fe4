//! Concept vocabulary
//!
//! A concept is an ordinary Rust trait whose required methods form the
//! minimal complete definition (MCD) and whose provided methods are the
//! derived operations. Implementing the trait for a type is the adapter that
//! binds the type to the concept; overriding a provided method is a
//! type-specific override of the derived operation.
//!
//! This module adds the pieces the trait itself cannot express:
//!
//! - a zero-sized **marker type** per concept implementing [`Concept`], which
//!   carries the concept's name and operation sets for diagnostics,
//! - [`ModeledBy`], implemented by a marker for every type that has an
//!   adapter, so that "T models K" can be named generically,
//! - [`require`], a compile-time gate that fails with a trait-bound error
//!   naming both the concept and the type when no adapter is resolvable.
//!
//! Conflicting adapters for one (concept, type) pair are rejected by trait
//! coherence (E0119), so they never reach a running program.
//!
//! # Example
//!
//! ```rust
//! use polykit_core::{require, Concept, ModeledBy};
//!
//! trait Squared {
//!     fn width(&self) -> usize;
//!     fn area(&self) -> usize {
//!         self.width() * self.width()
//!     }
//! }
//!
//! struct SquareConcept;
//!
//! impl Concept for SquareConcept {
//!     const NAME: &'static str = "Squared";
//!     const MINIMAL: &'static [&'static str] = &["width"];
//!     const DERIVED: &'static [&'static str] = &["area"];
//! }
//!
//! impl<T: Squared + ?Sized> ModeledBy<T> for SquareConcept {}
//!
//! struct Square(usize);
//! impl Squared for Square {
//!     fn width(&self) -> usize {
//!         self.0
//!     }
//! }
//!
//! require::<SquareConcept, Square>();
//! assert_eq!(Square(3).area(), 9);
//! ```
//!
//! A type without an adapter is rejected before anything runs:
//!
//! ```rust,compile_fail
//! use polykit_core::{require, Concept, ModeledBy};
//!
//! trait Squared {
//!     fn width(&self) -> usize;
//! }
//!
//! struct SquareConcept;
//!
//! impl Concept for SquareConcept {
//!     const NAME: &'static str = "Squared";
//!     const MINIMAL: &'static [&'static str] = &["width"];
//!     const DERIVED: &'static [&'static str] = &[];
//! }
//!
//! impl<T: Squared + ?Sized> ModeledBy<T> for SquareConcept {}
//!
//! struct Circle;
//! require::<SquareConcept, Circle>();
//! ```

use serde::Serialize;
use std::marker::PhantomData;

/// Descriptive metadata for a concept
///
/// Implemented by a zero-sized marker type, one per concept trait.
pub trait Concept: 'static {
    /// Human-readable concept name
    const NAME: &'static str;

    /// Operations an adapter must supply
    const MINIMAL: &'static [&'static str];

    /// Operations derived from the minimal set
    const DERIVED: &'static [&'static str];

    /// Collect the metadata into a serializable value
    fn info() -> ConceptInfo {
        ConceptInfo {
            name: Self::NAME,
            minimal: Self::MINIMAL,
            derived: Self::DERIVED,
        }
    }
}

/// Serializable snapshot of a concept's metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConceptInfo {
    pub name: &'static str,
    pub minimal: &'static [&'static str],
    pub derived: &'static [&'static str],
}

impl ConceptInfo {
    /// Whether `operation` belongs to the minimal complete definition
    pub fn is_minimal(&self, operation: &str) -> bool {
        self.minimal.contains(&operation)
    }

    /// Whether `operation` is derived from the minimal set
    pub fn is_derived(&self, operation: &str) -> bool {
        self.derived.contains(&operation)
    }
}

/// Implemented by a concept marker for every type that models the concept
///
/// Concept crates provide a single blanket impl, e.g.
/// `impl<T: Searchable + ?Sized> ModeledBy<T> for SearchableConcept {}`,
/// so the relation follows the concept trait automatically.
pub trait ModeledBy<T: ?Sized>: Concept {}

/// `T: Models<K>` reads as "T is a model of concept K"
pub trait Models<K: Concept> {}

impl<K, T> Models<K> for T
where
    K: ModeledBy<T>,
    T: ?Sized,
{
}

/// Compile-time gate asserting that `T` models `K`
///
/// Calling this with a type that has no adapter is a type error, reported
/// before any value of `T` is produced.
#[inline(always)]
pub const fn require<K, T>()
where
    K: ModeledBy<T>,
    T: ?Sized,
{
}

/// A minimal complete definition style for a concept
///
/// Some concepts admit more than one choice of primitive operations. Each
/// choice is named by a zero-sized marker implementing this trait, which lets
/// reference models and tests be written once and instantiated per style.
pub trait Mcd: 'static {
    /// The concept this definition completes
    type Concept: Concept;

    /// Short name of the definition style
    const NAME: &'static str;

    /// The primitives this style implements directly
    const PRIMITIVES: &'static [&'static str];
}

/// Zero-sized handle naming a concept at the value level
///
/// Useful for passing a concept through APIs that take values rather than
/// type parameters.
#[derive(Debug)]
pub struct ConceptTag<K>(PhantomData<fn() -> K>);

impl<K: Concept> ConceptTag<K> {
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        K::NAME
    }

    #[inline]
    pub fn info(&self) -> ConceptInfo {
        K::info()
    }

    /// Whether a value of type `T` models this concept; only type-checks when it does
    #[inline]
    pub fn check<T: ?Sized>(&self, _value: &T) -> bool
    where
        K: ModeledBy<T>,
    {
        true
    }
}

impl<K: Concept> Default for ConceptTag<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for ConceptTag<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for ConceptTag<K> {}
