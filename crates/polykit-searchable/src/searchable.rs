//! The Searchable concept
//!
//! A Searchable structure is a collection whose elements can be tested and
//! found by predicate, whatever its concrete representation. Models supply
//! two primitives, [`Searchable::any`] and [`Searchable::find`]; every other
//! operation is defined once here in terms of them and becomes available to
//! all models automatically.
//!
//! # Enumeration order
//!
//! `find` returns the *first* element satisfying the predicate, where "first"
//! follows the structure's own enumeration order: index order for sequences,
//! ascending order for `BTreeSet`. A model without a natural order must still
//! enumerate a given value deterministically.
//!
//! # Example
//!
//! ```rust
//! use polykit_searchable::{elem, lookup, Searchable};
//!
//! let words = vec!["alpha", "beta", "gamma"];
//!
//! assert!(elem(&"beta", &words));
//! assert!(!elem(&"delta", &words));
//! assert_eq!(lookup(&"gamma", &words), Some(&"gamma"));
//! assert!(words.all(|w| w.len() >= 4));
//! ```
//!
//! `elem` needs an equivalence for the element type. Without a `Comparable`
//! adapter the call is rejected at compile time rather than returning `false`:
//!
//! ```rust,compile_fail
//! use polykit_searchable::elem;
//!
//! struct Opaque;
//! let _ = elem(&Opaque, &vec![Opaque]);
//! ```

use crate::comparable::Comparable;
use polykit_core::{Concept, Mcd, ModeledBy};

/// A structure whose elements can be tested and found by predicate
///
/// # Minimal complete definition
///
/// `any` and `find`. The remaining methods are derived and may be overridden
/// by a model that can answer them more directly; an override takes
/// precedence for that model only.
pub trait Searchable {
    /// Element type
    type Item;

    /// Whether some element satisfies `predicate`
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool;

    /// The first element satisfying `predicate`, if any
    fn find<P>(&self, predicate: P) -> Option<&Self::Item>
    where
        P: FnMut(&Self::Item) -> bool;

    /// Whether some element is equivalent to `value`
    ///
    /// Equivalence is the one `value`'s own type supplies through
    /// [`Comparable`]. Always `false` for an empty structure.
    #[inline]
    fn elem<V>(&self, value: &V) -> bool
    where
        V: Comparable<Self::Item> + ?Sized,
    {
        self.any(|e| value.equal(e))
    }

    /// The first element equivalent to `key`, if any
    #[inline]
    fn lookup<K>(&self, key: &K) -> Option<&Self::Item>
    where
        K: Comparable<Self::Item> + ?Sized,
    {
        self.find(|e| key.equal(e))
    }

    /// Whether every element satisfies `predicate`
    ///
    /// Vacuously `true` for an empty structure.
    #[inline]
    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        !self.any(|e| !predicate(e))
    }

    /// Whether no element satisfies `predicate`
    #[inline]
    fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        !self.any(predicate)
    }

    /// Whether every element of `self` is an element of `other`
    #[inline]
    fn subset<S>(&self, other: &S) -> bool
    where
        S: Searchable + ?Sized,
        Self::Item: Comparable<S::Item>,
    {
        self.all(|x| other.elem(x))
    }
}

/// Marker naming the [`Searchable`] concept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchableConcept;

impl Concept for SearchableConcept {
    const NAME: &'static str = "Searchable";
    const MINIMAL: &'static [&'static str] = &["any", "find"];
    const DERIVED: &'static [&'static str] = &["elem", "lookup", "all", "none", "subset"];
}

impl<T: Searchable + ?Sized> ModeledBy<T> for SearchableConcept {}

/// Both primitives implemented directly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyFindMcd;

impl Mcd for AnyFindMcd {
    type Concept = SearchableConcept;
    const NAME: &'static str = "any+find";
    const PRIMITIVES: &'static [&'static str] = &["any", "find"];
}

/// Only `find` implemented directly; `any` answered through it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindMcd;

impl Mcd for FindMcd {
    type Concept = SearchableConcept;
    const NAME: &'static str = "find";
    const PRIMITIVES: &'static [&'static str] = &["find"];
}

// Free-function entry points. Each forwards to the method so that model
// overrides are honoured.

/// Whether some element of `structure` satisfies `predicate`
#[inline]
pub fn any<S, P>(structure: &S, predicate: P) -> bool
where
    S: Searchable + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    structure.any(predicate)
}

/// Whether every element of `structure` satisfies `predicate`
#[inline]
pub fn all<S, P>(structure: &S, predicate: P) -> bool
where
    S: Searchable + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    structure.all(predicate)
}

/// Whether no element of `structure` satisfies `predicate`
#[inline]
pub fn none<S, P>(structure: &S, predicate: P) -> bool
where
    S: Searchable + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    structure.none(predicate)
}

/// The first element of `structure` satisfying `predicate`
#[inline]
pub fn find<S, P>(structure: &S, predicate: P) -> Option<&S::Item>
where
    S: Searchable + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    structure.find(predicate)
}

/// Whether `structure` holds an element equivalent to `value`
#[inline]
pub fn elem<V, S>(value: &V, structure: &S) -> bool
where
    S: Searchable + ?Sized,
    V: Comparable<S::Item> + ?Sized,
{
    structure.elem(value)
}

/// [`elem`] with the structure first
#[inline]
pub fn contains<S, V>(structure: &S, value: &V) -> bool
where
    S: Searchable + ?Sized,
    V: Comparable<S::Item> + ?Sized,
{
    structure.elem(value)
}

/// The first element of `structure` equivalent to `key`
#[inline]
pub fn lookup<'s, K, S>(key: &K, structure: &'s S) -> Option<&'s S::Item>
where
    S: Searchable + ?Sized,
    K: Comparable<S::Item> + ?Sized,
{
    structure.lookup(key)
}

/// Whether every element of `xs` is an element of `ys`
#[inline]
pub fn subset<A, B>(xs: &A, ys: &B) -> bool
where
    A: Searchable + ?Sized,
    B: Searchable + ?Sized,
    A::Item: Comparable<B::Item>,
{
    xs.subset(ys)
}
