//! Minimal Searchable model
//!
//! `MinimalSearchable<M, T>` stores its elements in a plain `Vec` and
//! implements only the primitives of the definition style `M`. These
//! implementations are intentionally simple and unoptimized; they exist to
//! drive the derived operations through their generic path.

use polykit_core::Mcd;
use polykit_searchable::{AnyFindMcd, FindMcd, Searchable, SearchableConcept};
use std::fmt;
use std::marker::PhantomData;

/// How a definition style realises the Searchable primitives
pub trait SearchableStrategy: Mcd<Concept = SearchableConcept> {
    /// Whether some element satisfies `predicate`
    fn any<T, P>(elements: &[T], predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// The first element satisfying `predicate`
    fn find<T, P>(elements: &[T], predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;
}

/// Both primitives scan the elements directly
impl SearchableStrategy for AnyFindMcd {
    fn any<T, P>(elements: &[T], mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        for element in elements {
            if predicate(element) {
                return true;
            }
        }
        false
    }

    fn find<T, P>(elements: &[T], mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        for element in elements {
            if predicate(element) {
                return Some(element);
            }
        }
        None
    }
}

/// Only `find` scans; `any` asks `find`
impl SearchableStrategy for FindMcd {
    fn any<T, P>(elements: &[T], predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        Self::find(elements, predicate).is_some()
    }

    fn find<T, P>(elements: &[T], mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut index = 0;
        while index < elements.len() {
            if predicate(&elements[index]) {
                return Some(&elements[index]);
            }
            index += 1;
        }
        None
    }
}

/// Sequence of elements modeling Searchable through strategy `M` only
pub struct MinimalSearchable<M, T> {
    elements: Vec<T>,
    _mcd: PhantomData<M>,
}

impl<M, T> MinimalSearchable<M, T> {
    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<M: SearchableStrategy, T> Searchable for MinimalSearchable<M, T> {
    type Item = T;

    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        M::any(&self.elements, predicate)
    }

    fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        M::find(&self.elements, predicate)
    }
}

impl<M: Mcd, T: fmt::Debug> fmt::Debug for MinimalSearchable<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinimalSearchable")
            .field("mcd", &M::NAME)
            .field("elements", &self.elements)
            .finish()
    }
}

/// Build a minimal Searchable of style `M` holding `elements` in order
pub fn searchable<M, T>(elements: impl IntoIterator<Item = T>) -> MinimalSearchable<M, T>
where
    M: SearchableStrategy,
{
    MinimalSearchable {
        elements: elements.into_iter().collect(),
        _mcd: PhantomData,
    }
}

/// Build an empty minimal Searchable of style `M`
pub fn empty<M, T>() -> MinimalSearchable<M, T>
where
    M: SearchableStrategy,
{
    searchable::<M, T>(std::iter::empty())
}
