//! Point-free lockstep combinator
//!
//! `lockstep(f, (g1, ..., gN))` builds a callable `C` such that
//!
//! ```text
//! C.apply((x1, ..., xN)) == f(g1(x1), ..., gN(xN))
//! ```
//!
//! Arguments are passed as one tuple. The combinator is invoked through three
//! traits mirroring the closure traits, and the receiver decides how the
//! element callables are reached inside the [`Closure`]:
//!
//! | trait                     | receiver    | elements used as |
//! |---------------------------|-------------|------------------|
//! | [`Apply`]                 | `&self`     | `&Gi` (`Fn`)     |
//! | [`ApplyMut`]              | `&mut self` | `&mut Gi` (`FnMut`) |
//! | [`ApplyOnce`]             | `self`      | `Gi` (`FnOnce`)  |
//!
//! Each trait is implemented only for argument tuples whose length equals the
//! number of element callables, so an arity mismatch does not compile:
//!
//! ```rust,compile_fail
//! use polykit_functional::{lockstep, Apply};
//!
//! let c = lockstep(|a: i32, b: i32| a + b, (|x: i32| x, |x: i32| x));
//! let _ = c.apply((1, 2, 3));
//! ```
//!
//! An element that consumes its captured state is only `FnOnce`, so it can be
//! reached through [`ApplyOnce`] but not through a shared borrow:
//!
//! ```rust,compile_fail
//! use polykit_functional::{lockstep, Apply};
//!
//! let label = String::from("label");
//! let c = lockstep(|s: String| s, (move |_: ()| label,));
//! let _ = c.apply(((),));
//! ```
//!
//! Element results are computed left to right, and all of them exist before
//! the combiner runs. Nothing is copied on the way: the result is exactly what
//! `f` returns.
//!
//! # Example
//!
//! ```rust
//! use polykit_functional::{lockstep, Apply};
//!
//! let sum3 = |a: i32, b: i32, c: i32| a + b + c;
//! let c = lockstep(sum3, (|x: i32| -x, |x: i32| x, |x: i32| 2 * x));
//!
//! assert_eq!(c.apply((3, 4, 5)), 11);
//! ```

use crate::closure::{Closure, Tuple};

/// Invoke a combinator by value
///
/// Implemented for argument tuples of exactly the element count. Fewer or
/// more arguments are rejected at every arity:
///
/// ```rust,compile_fail
/// use polykit_functional::{lockstep, ApplyOnce};
///
/// let _ = lockstep(|| 0, ()).apply_once((1,));
/// ```
///
/// ```rust,compile_fail
/// use polykit_functional::{lockstep, ApplyOnce};
///
/// let _ = lockstep(|a: i32| a, (|x: i32| x,)).apply_once(());
/// ```
///
/// ```rust,compile_fail
/// use polykit_functional::{lockstep, ApplyOnce};
///
/// let _ = lockstep(|a: i32| a, (|x: i32| x,)).apply_once((1, 2));
/// ```
///
/// ```rust,compile_fail
/// use polykit_functional::{lockstep, ApplyOnce};
///
/// let c = lockstep(|a: i32, b: i32| a + b, (|x: i32| x, |x: i32| x));
/// let _ = c.apply_once((1,));
/// ```
///
/// ```rust,compile_fail
/// use polykit_functional::{lockstep, ApplyOnce};
///
/// let c = lockstep(
///     |a: i32, b: i32, c: i32| a + b + c,
///     (|x: i32| x, |x: i32| x, |x: i32| x),
/// );
/// let _ = c.apply_once((1, 2));
/// ```
///
/// Consuming invocation moves the combinator, so it cannot run twice unless
/// the combinator is `Copy`:
///
/// ```rust,compile_fail
/// use polykit_functional::{lockstep, ApplyOnce};
///
/// let name = String::from("name");
/// let c = lockstep(|s: String| s, (move |_: ()| name.clone(),));
/// let _ = c.apply_once(((),));
/// let _ = c.apply_once(((),));
/// ```
pub trait ApplyOnce<Args> {
    /// Result of the invocation
    type Output;

    fn apply_once(self, args: Args) -> Self::Output;
}

/// Invoke a combinator through an exclusive borrow
///
/// Every element must be `FnMut`; an element that consumes its captures is
/// only reachable through [`ApplyOnce`]:
///
/// ```rust,compile_fail
/// use polykit_functional::{lockstep, ApplyMut};
///
/// let label = String::from("label");
/// let mut c = lockstep(|s: String| s, (move |_: ()| label,));
/// let _ = c.apply_mut(((),));
/// ```
pub trait ApplyMut<Args>: ApplyOnce<Args> {
    fn apply_mut(&mut self, args: Args) -> Self::Output;
}

/// Invoke a combinator through a shared borrow
pub trait Apply<Args>: ApplyMut<Args> {
    fn apply(&self, args: Args) -> Self::Output;
}

/// Combiner `f` plus element callables `G = (g1, ..., gN)`
///
/// Owns both exclusively; fixed after construction.
#[derive(Debug, Clone, Copy)]
pub struct Lockstep<F, G> {
    f: F,
    g: Closure<G>,
}

impl<F, G: Tuple> Lockstep<F, G> {
    /// Number of arguments the combinator accepts
    pub const ARITY: usize = G::LEN;

    /// Capture the combiner and the element callables
    #[inline]
    pub fn new(f: F, g: G) -> Self {
        Self {
            f,
            g: Closure::new(g),
        }
    }

    #[inline]
    pub const fn arity(&self) -> usize {
        G::LEN
    }
}

impl<F, G> Lockstep<F, G> {
    /// Get reference to the combiner
    #[inline]
    pub const fn combiner(&self) -> &F {
        &self.f
    }

    /// Get reference to the element callables
    #[inline]
    pub const fn elements(&self) -> &Closure<G> {
        &self.g
    }

    /// Unwrap into the combiner and the element tuple
    #[inline]
    pub fn into_parts(self) -> (F, G) {
        (self.f, self.g.into_inner())
    }
}

/// Build a lockstep combinator from a combiner and a tuple of element callables
///
/// See [`lockstep!`](crate::lockstep!) for the variadic spelling.
#[inline]
pub fn lockstep<F, G: Tuple>(f: F, g: G) -> Lockstep<F, G> {
    Lockstep::new(f, g)
}

/// Variadic form of [`lockstep()`]
///
/// ```rust
/// use polykit_functional::{lockstep, Apply};
///
/// let c = lockstep!(|a: usize, b: bool| (a, b), |s: &str| s.len(), |n: i32| n > 0);
/// assert_eq!(c.apply(("four", -1)), (4, false));
/// ```
#[macro_export]
macro_rules! lockstep {
    ($f:expr $(, $g:expr)* $(,)?) => {
        $crate::lockstep::lockstep($f, ($($g,)*))
    };
}

macro_rules! lockstep_impls {
    ($(($($idx:tt $g:ident $x:ident $y:ident),*);)*) => {
        $(
            impl<F, R, $($g, $x, $y),*> ApplyOnce<($($x,)*)> for Lockstep<F, ($($g,)*)>
            where
                F: FnOnce($($y),*) -> R,
                $($g: FnOnce($x) -> $y,)*
            {
                type Output = R;

                #[inline]
                #[allow(unused_variables)]
                fn apply_once(self, args: ($($x,)*)) -> R {
                    let (f, g) = self.into_parts();
                    let results = ($((g.$idx)(args.$idx),)*);
                    f($(results.$idx),*)
                }
            }

            impl<F, R, $($g, $x, $y),*> ApplyMut<($($x,)*)> for Lockstep<F, ($($g,)*)>
            where
                F: FnMut($($y),*) -> R,
                $($g: FnMut($x) -> $y,)*
            {
                #[inline]
                #[allow(unused_variables)]
                fn apply_mut(&mut self, args: ($($x,)*)) -> R {
                    let results = ($((self.g.get_mut::<$idx>())(args.$idx),)*);
                    (self.f)($(results.$idx),*)
                }
            }

            impl<F, R, $($g, $x, $y),*> Apply<($($x,)*)> for Lockstep<F, ($($g,)*)>
            where
                F: Fn($($y),*) -> R,
                $($g: Fn($x) -> $y,)*
            {
                #[inline]
                #[allow(unused_variables)]
                fn apply(&self, args: ($($x,)*)) -> R {
                    let results = ($((self.g.get::<$idx>())(args.$idx),)*);
                    (self.f)($(results.$idx),*)
                }
            }
        )*
    };
}

lockstep_impls! {
    ();
    (0 G0 X0 Y0);
    (0 G0 X0 Y0, 1 G1 X1 Y1);
    (0 G0 X0 Y0, 1 G1 X1 Y1, 2 G2 X2 Y2);
    (0 G0 X0 Y0, 1 G1 X1 Y1, 2 G2 X2 Y2, 3 G3 X3 Y3);
    (0 G0 X0 Y0, 1 G1 X1 Y1, 2 G2 X2 Y2, 3 G3 X3 Y3, 4 G4 X4 Y4);
    (0 G0 X0 Y0, 1 G1 X1 Y1, 2 G2 X2 Y2, 3 G3 X3 Y3, 4 G4 X4 Y4, 5 G5 X5 Y5);
    (0 G0 X0 Y0, 1 G1 X1 Y1, 2 G2 X2 Y2, 3 G3 X3 Y3, 4 G4 X4 Y4, 5 G5 X5 Y5, 6 G6 X6 Y6);
    (0 G0 X0 Y0, 1 G1 X1 Y1, 2 G2 X2 Y2, 3 G3 X3 Y3, 4 G4 X4 Y4, 5 G5 X5 Y5, 6 G6 X6 Y6,
     7 G7 X7 Y7);
    (0 G0 X0 Y0, 1 G1 X1 Y1, 2 G2 X2 Y2, 3 G3 X3 Y3, 4 G4 X4 Y4, 5 G5 X5 Y5, 6 G6 X6 Y6,
     7 G7 X7 Y7, 8 G8 X8 Y8);
    (0 G0 X0 Y0, 1 G1 X1 Y1, 2 G2 X2 Y2, 3 G3 X3 Y3, 4 G4 X4 Y4, 5 G5 X5 Y5, 6 G6 X6 Y6,
     7 G7 X7 Y7, 8 G8 X8 Y8, 9 G9 X9 Y9);
    (0 G0 X0 Y0, 1 G1 X1 Y1, 2 G2 X2 Y2, 3 G3 X3 Y3, 4 G4 X4 Y4, 5 G5 X5 Y5, 6 G6 X6 Y6,
     7 G7 X7 Y7, 8 G8 X8 Y8, 9 G9 X9 Y9, 10 G10 X10 Y10);
    (0 G0 X0 Y0, 1 G1 X1 Y1, 2 G2 X2 Y2, 3 G3 X3 Y3, 4 G4 X4 Y4, 5 G5 X5 Y5, 6 G6 X6 Y6,
     7 G7 X7 Y7, 8 G8 X8 Y8, 9 G9 X9 Y9, 10 G10 X10 Y10, 11 G11 X11 Y11);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::mem::size_of;

    fn sum3(a: i32, b: i32, c: i32) -> i32 {
        a + b + c
    }

    fn negate(x: i32) -> i32 {
        -x
    }

    fn identity(x: i32) -> i32 {
        x
    }

    fn double(x: i32) -> i32 {
        2 * x
    }

    #[test]
    fn test_applies_each_element_to_its_argument() {
        let c = lockstep(sum3, (negate, identity, double));
        assert_eq!(c.apply((3, 4, 5)), 11);
        assert_eq!(c.apply((0, 0, 0)), 0);
        assert_eq!(Lockstep::<fn() -> i32, (fn(u8) -> u8, fn(u8) -> u8)>::ARITY, 2);
        assert_eq!(c.arity(), 3);
    }

    #[test]
    fn test_zero_and_one_arity() {
        let nullary = lockstep(|| 42, ());
        assert_eq!(nullary.apply(()), 42);
        assert_eq!(nullary.arity(), 0);

        let unary = lockstep(|s: String| s.len(), (|n: u8| "x".repeat(n as usize),));
        assert_eq!(unary.apply((4,)), 4);
    }

    #[test]
    fn test_heterogeneous_elements() {
        let c = lockstep!(
            |name: String, count: usize, flag: bool| format!("{name}:{count}:{flag}"),
            |s: &str| s.to_uppercase(),
            |v: Vec<u8>| v.len(),
            |x: f64| x.is_sign_negative(),
        );
        assert_eq!(c.apply(("ab", vec![1, 2, 3], -0.5)), "AB:3:true");
    }

    #[test]
    fn test_elements_run_before_combiner_in_order() {
        let log = RefCell::new(Vec::new());
        let c = lockstep!(
            |a: u8, b: u8| {
                log.borrow_mut().push("f");
                a + b
            },
            |x: u8| {
                log.borrow_mut().push("g1");
                x
            },
            |x: u8| {
                log.borrow_mut().push("g2");
                x
            },
        );
        assert_eq!(c.apply((1, 2)), 3);
        assert_eq!(*log.borrow(), vec!["g1", "g2", "f"]);
    }

    #[test]
    fn test_mutable_invocation_updates_captured_state() {
        let mut seen = 0;
        let mut total = 0;
        {
            let mut c = lockstep!(
                |a: i32, b: i32| {
                    total += a + b;
                    total
                },
                |x: i32| {
                    seen += 1;
                    x
                },
                |x: i32| x * 10,
            );
            assert_eq!(c.apply_mut((1, 2)), 21);
            assert_eq!(c.apply_mut((1, 2)), 42);
        }
        assert_eq!(seen, 2);
        assert_eq!(total, 42);
    }

    #[test]
    fn test_consuming_invocation_moves_captured_state() {
        let prefix = String::from("pre");
        let suffix = vec![1u8, 2];
        let c = lockstep!(
            |a: String, b: Vec<u8>| (a, b),
            move |s: &str| prefix + s,
            move |extra: u8| {
                let mut v = suffix;
                v.push(extra);
                v
            },
        );
        let (a, b) = c.apply_once(("fix", 3));
        assert_eq!(a, "prefix");
        assert_eq!(b, vec![1, 2, 3]);
    }

    #[test]
    fn test_apply_once_accepts_exactly_the_element_count() {
        assert_eq!(lockstep(|| 0, ()).apply_once(()), 0);
        assert_eq!(lockstep(|a: i32| a, (|x: i32| x,)).apply_once((1,)), 1);
        assert_eq!(
            lockstep(|a: i32, b: i32| a + b, (|x: i32| x, |x: i32| x)).apply_once((1, 2)),
            3
        );
        assert_eq!(lockstep(sum3, (negate, identity, double)).apply_once((1, 2, 3)), 7);
    }

    #[test]
    fn test_copy_combinator_survives_consuming_invocation() {
        let c = lockstep(sum3, (negate, identity, double));
        assert_eq!(c.apply_once((1, 1, 1)), 2);
        assert_eq!(c.apply_once((1, 1, 1)), 2);
    }

    #[test]
    fn test_shared_combinator_is_also_mut_and_once() {
        let c = lockstep(|a: i32| a + 1, (|x: i32| x * x,));
        let mut d = c;
        assert_eq!(d.apply_mut((3,)), 10);
        assert_eq!(c.apply_once((4,)), 17);
    }

    #[test]
    fn test_parts_accessors() {
        let c = lockstep(sum3, (negate, identity, double));
        assert_eq!((c.combiner())(1, 2, 3), 6);
        assert_eq!((c.elements().get::<0>())(5), -5);

        let (f, (g0, g1, g2)) = c.into_parts();
        assert_eq!(f(g0(3), g1(4), g2(5)), 11);
    }

    #[test]
    fn test_no_extra_storage() {
        #[derive(Clone, Copy)]
        struct Zst;

        assert_eq!(size_of::<Lockstep<Zst, (Zst, Zst)>>(), 0);
        assert_eq!(
            size_of::<Lockstep<fn(i32) -> i32, (fn(i32) -> i32,)>>(),
            2 * size_of::<fn(i32) -> i32>()
        );
    }
}
