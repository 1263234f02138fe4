//! Searchable instances for standard containers
//!
//! Sequences enumerate in index order, `BTreeSet` in ascending order and
//! `Option` as zero or one element.

use crate::comparable::Comparable;
use crate::searchable::Searchable;
use std::collections::{BTreeSet, VecDeque};

impl<T> Searchable for [T] {
    type Item = T;

    #[inline]
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    #[inline]
    fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|e| predicate(e))
    }
}

impl<T, const N: usize> Searchable for [T; N] {
    type Item = T;

    #[inline]
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        Searchable::any(self.as_slice(), predicate)
    }

    #[inline]
    fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        Searchable::find(self.as_slice(), predicate)
    }
}

impl<T> Searchable for Vec<T> {
    type Item = T;

    #[inline]
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        Searchable::any(self.as_slice(), predicate)
    }

    #[inline]
    fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        Searchable::find(self.as_slice(), predicate)
    }
}

impl<T> Searchable for VecDeque<T> {
    type Item = T;

    #[inline]
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    #[inline]
    fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|e| predicate(e))
    }
}

impl<T> Searchable for BTreeSet<T> {
    type Item = T;

    #[inline]
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    #[inline]
    fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|e| predicate(e))
    }
}

impl<T> Searchable for Option<T> {
    type Item = T;

    #[inline]
    fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self {
            Some(x) => predicate(x),
            None => false,
        }
    }

    #[inline]
    fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_ref().filter(|x| predicate(x))
    }

    // At most one element, so no predicate closure is needed
    #[inline]
    fn elem<V>(&self, value: &V) -> bool
    where
        V: Comparable<T> + ?Sized,
    {
        match self {
            Some(x) => value.equal(x),
            None => false,
        }
    }
}

impl<S: Searchable + ?Sized> Searchable for Box<S> {
    type Item = S::Item;

    #[inline]
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        (**self).any(predicate)
    }

    #[inline]
    fn find<P>(&self, predicate: P) -> Option<&S::Item>
    where
        P: FnMut(&S::Item) -> bool,
    {
        (**self).find(predicate)
    }

    #[inline]
    fn elem<V>(&self, value: &V) -> bool
    where
        V: Comparable<S::Item> + ?Sized,
    {
        (**self).elem(value)
    }

    #[inline]
    fn lookup<K>(&self, key: &K) -> Option<&S::Item>
    where
        K: Comparable<S::Item> + ?Sized,
    {
        (**self).lookup(key)
    }
}
