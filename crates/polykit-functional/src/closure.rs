//! Ownership-aware heterogeneous capture container
//!
//! [`Closure`] stores a fixed, statically known sequence of values of
//! possibly distinct types and hands out element `I` in the same ownership
//! mode the container itself is accessed in:
//!
//! | container access | element access     | method        |
//! |------------------|--------------------|---------------|
//! | `&Closure`       | `&Gi`              | [`At::at`]     |
//! | `&mut Closure`   | `&mut Gi`          | [`At::at_mut`] |
//! | `Closure`        | `Gi` (moved out)   | [`At::take`]   |
//!
//! The mode is chosen by the receiver, never by the stored type. Indices are
//! const generics, so an out-of-range index is a type error rather than a
//! panic:
//!
//! ```rust,compile_fail
//! use polykit_functional::Closure;
//!
//! let closure = Closure::new((1u8, "two"));
//! let _ = closure.get::<2>();
//! ```
//!
//! # Example
//!
//! ```rust
//! use polykit_functional::Closure;
//!
//! let mut closure = Closure::new((1u8, String::from("two"), 3.0f64));
//! assert_eq!(Closure::<(u8, String, f64)>::LEN, 3);
//!
//! assert_eq!(*closure.get::<0>(), 1);
//! closure.get_mut::<1>().push('!');
//!
//! let owned: String = closure.take::<1>();
//! assert_eq!(owned, "two!");
//! ```

/// Fixed-arity tuple shapes a [`Closure`] can be built from
pub trait Tuple {
    /// Number of elements
    const LEN: usize;
}

/// Access to element `I` of a [`Closure`]
pub trait At<const I: usize> {
    /// Type of the element at index `I`
    type Output;

    /// Borrow element `I` from a shared container
    fn at(&self) -> &Self::Output;

    /// Borrow element `I` from an exclusively held container
    fn at_mut(&mut self) -> &mut Self::Output;

    /// Move element `I` out of a consumed container, dropping the others
    fn take(self) -> Self::Output;
}

/// Fixed-size ordered record of heterogeneous values
///
/// Built atomically from a tuple; there is no partial construction. The
/// container owns its elements exclusively and adds no storage of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Closure<G>(G);

impl<G> Closure<G> {
    /// Capture all elements at once
    #[inline]
    pub const fn new(elements: G) -> Self {
        Self(elements)
    }

    /// Borrow element `I`
    #[inline]
    pub fn get<const I: usize>(&self) -> &<Self as At<I>>::Output
    where
        Self: At<I>,
    {
        <Self as At<I>>::at(self)
    }

    /// Mutably borrow element `I`
    #[inline]
    pub fn get_mut<const I: usize>(&mut self) -> &mut <Self as At<I>>::Output
    where
        Self: At<I>,
    {
        <Self as At<I>>::at_mut(self)
    }

    /// Consume the container, keeping only element `I`
    #[inline]
    pub fn take<const I: usize>(self) -> <Self as At<I>>::Output
    where
        Self: At<I>,
    {
        <Self as At<I>>::take(self)
    }

    /// Borrow the underlying tuple
    #[inline]
    pub const fn as_inner(&self) -> &G {
        &self.0
    }

    /// Unwrap to the underlying tuple
    #[inline]
    pub fn into_inner(self) -> G {
        self.0
    }
}

impl<G: Tuple> Closure<G> {
    /// Number of captured elements
    pub const LEN: usize = G::LEN;

    #[inline]
    pub const fn len(&self) -> usize {
        G::LEN
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        G::LEN == 0
    }
}

impl<G: Tuple> From<G> for Closure<G> {
    fn from(elements: G) -> Self {
        Self::new(elements)
    }
}

// One `At<I>` impl per index; the full generic list is carried along so each
// impl can name the whole tuple type.
macro_rules! closure_at {
    ([$($all:ident),*]) => {};
    ([$($all:ident),*] $idx:tt $g:ident $($rest:tt)*) => {
        impl<$($all),*> At<$idx> for Closure<($($all,)*)> {
            type Output = $g;

            #[inline]
            fn at(&self) -> &$g {
                &self.0.$idx
            }

            #[inline]
            fn at_mut(&mut self) -> &mut $g {
                &mut self.0.$idx
            }

            #[inline]
            fn take(self) -> $g {
                self.0.$idx
            }
        }

        closure_at!([$($all),*] $($rest)*);
    };
}

macro_rules! closure_impls {
    ($($len:literal => ($($idx:tt $g:ident),*);)*) => {
        $(
            impl<$($g),*> Tuple for ($($g,)*) {
                const LEN: usize = $len;
            }

            closure_at!([$($g),*] $($idx $g)*);
        )*
    };
}

closure_impls! {
    0 => ();
    1 => (0 G0);
    2 => (0 G0, 1 G1);
    3 => (0 G0, 1 G1, 2 G2);
    4 => (0 G0, 1 G1, 2 G2, 3 G3);
    5 => (0 G0, 1 G1, 2 G2, 3 G3, 4 G4);
    6 => (0 G0, 1 G1, 2 G2, 3 G3, 4 G4, 5 G5);
    7 => (0 G0, 1 G1, 2 G2, 3 G3, 4 G4, 5 G5, 6 G6);
    8 => (0 G0, 1 G1, 2 G2, 3 G3, 4 G4, 5 G5, 6 G6, 7 G7);
    9 => (0 G0, 1 G1, 2 G2, 3 G3, 4 G4, 5 G5, 6 G6, 7 G7, 8 G8);
    10 => (0 G0, 1 G1, 2 G2, 3 G3, 4 G4, 5 G5, 6 G6, 7 G7, 8 G8, 9 G9);
    11 => (0 G0, 1 G1, 2 G2, 3 G3, 4 G4, 5 G5, 6 G6, 7 G7, 8 G8, 9 G9, 10 G10);
    12 => (0 G0, 1 G1, 2 G2, 3 G3, 4 G4, 5 G5, 6 G6, 7 G7, 8 G8, 9 G9, 10 G10, 11 G11);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use std::rc::Rc;

    #[test]
    fn test_len() {
        assert_eq!(Closure::<()>::LEN, 0);
        assert_eq!(Closure::<(u8,)>::LEN, 1);
        assert_eq!(Closure::<(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, bool, char)>::LEN, 12);

        let empty = Closure::new(());
        assert!(empty.is_empty());
        assert_eq!(Closure::new((1, "a")).len(), 2);
    }

    #[test]
    fn test_shared_access_is_stable() {
        let closure = Closure::new((7i32, "seven", 7.5f32));
        for _ in 0..3 {
            assert_eq!(*closure.get::<0>(), 7);
            assert_eq!(*closure.get::<1>(), "seven");
            assert_eq!(*closure.get::<2>(), 7.5);
        }
    }

    #[test]
    fn test_mutable_access_touches_one_index() {
        let mut closure = Closure::new((vec![1, 2], vec![3]));
        closure.get_mut::<0>().push(9);
        assert_eq!(closure.get::<0>(), &vec![1, 2, 9]);
        assert_eq!(closure.get::<1>(), &vec![3]);
    }

    #[test]
    fn test_take_moves_element_out() {
        let shared = Rc::new(5);
        let closure = Closure::new((String::from("kept"), Rc::clone(&shared)));
        assert_eq!(Rc::strong_count(&shared), 2);

        let taken = closure.take::<1>();
        assert_eq!(Rc::strong_count(&shared), 2);
        drop(taken);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_take_drops_other_elements() {
        let shared = Rc::new(());
        let closure = Closure::new((Rc::clone(&shared), 1u8));
        let one = closure.take::<1>();
        assert_eq!(one, 1);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_no_extra_storage() {
        assert_eq!(size_of::<Closure<()>>(), 0);
        assert_eq!(size_of::<Closure<(u64, u32)>>(), size_of::<(u64, u32)>());
    }

    #[test]
    fn test_round_trip_through_inner() {
        let closure: Closure<(u8, char)> = (1, 'x').into();
        assert_eq!(closure.as_inner(), &(1, 'x'));
        assert_eq!(closure.into_inner(), (1, 'x'));
    }
}
