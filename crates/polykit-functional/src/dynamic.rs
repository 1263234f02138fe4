//! Runtime-checked lockstep over a homogeneous element list
//!
//! [`Lockstep`](crate::Lockstep) fixes its element count in the type, which is
//! only possible when the count is known at compile time. `DynLockstep` covers
//! the remaining case: element callables of one shape `Fn(X) -> Y` collected
//! at runtime. The arity check moves to the call, and a mismatch is reported
//! before any element callable runs.

use polykit_core::{Error, Result};
use tracing::{debug, instrument};

type Element<'a, X, Y> = Box<dyn Fn(X) -> Y + 'a>;
type Combiner<'a, Y, R> = Box<dyn Fn(Vec<Y>) -> R + 'a>;

/// Boxed combiner plus a runtime-sized list of boxed element callables
pub struct DynLockstep<'a, X, Y, R> {
    f: Combiner<'a, Y, R>,
    g: Vec<Element<'a, X, Y>>,
}

impl<'a, X, Y, R> DynLockstep<'a, X, Y, R> {
    /// Create a combinator with no element callables yet
    pub fn new(f: impl Fn(Vec<Y>) -> R + 'a) -> Self {
        Self {
            f: Box::new(f),
            g: Vec::new(),
        }
    }

    /// Append an element callable, builder style
    pub fn with(mut self, g: impl Fn(X) -> Y + 'a) -> Self {
        self.push(g);
        self
    }

    /// Append an element callable
    pub fn push(&mut self, g: impl Fn(X) -> Y + 'a) {
        self.g.push(Box::new(g));
    }

    /// Number of arguments a call must supply
    pub fn arity(&self) -> usize {
        self.g.len()
    }

    /// Apply element `i` to argument `i`, then the combiner to all results
    ///
    /// Returns [`Error::ArityMismatch`] without invoking anything when
    /// `args.len()` differs from [`arity`](Self::arity).
    #[instrument(level = "trace", skip_all, fields(arity = self.g.len(), supplied = args.len()))]
    pub fn call(&self, args: Vec<X>) -> Result<R> {
        if args.len() != self.g.len() {
            debug!("Rejecting call with mismatched arity");
            return Err(Error::arity_mismatch(self.g.len(), args.len()));
        }
        let results: Vec<Y> = self.g.iter().zip(args).map(|(g, x)| g(x)).collect();
        Ok((self.f)(results))
    }
}

impl<X, Y, R> std::fmt::Debug for DynLockstep<'_, X, Y, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynLockstep")
            .field("arity", &self.g.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_matching_arity() {
        let c = DynLockstep::new(|ys: Vec<i32>| ys.iter().sum::<i32>())
            .with(|x: i32| -x)
            .with(|x| x)
            .with(|x| 2 * x);
        assert_eq!(c.arity(), 3);
        assert_eq!(c.call(vec![3, 4, 5]).unwrap(), 11);
    }

    #[test]
    fn test_mismatch_is_rejected_before_any_call() {
        let calls = Cell::new(0);
        let c = DynLockstep::new(|ys: Vec<u8>| {
            calls.set(calls.get() + 1);
            ys.len()
        })
        .with(|x: u8| {
            calls.set(calls.get() + 1);
            x
        });

        for supplied in [0usize, 2, 3] {
            match c.call(vec![1; supplied]) {
                Err(Error::ArityMismatch { expected, actual }) => {
                    assert_eq!(expected, 1);
                    assert_eq!(actual, supplied);
                }
                other => panic!("expected arity mismatch, got {other:?}"),
            }
        }
        assert_eq!(calls.get(), 0);

        assert_eq!(c.call(vec![9]).unwrap(), 1);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_empty_combinator() {
        let c: DynLockstep<'_, (), (), &str> = DynLockstep::new(|_| "done");
        assert_eq!(c.arity(), 0);
        assert_eq!(c.call(Vec::new()).unwrap(), "done");
        assert!(c.call(vec![()]).is_err());
    }

    #[test]
    fn test_push_extends_arity() {
        let mut c = DynLockstep::new(|ys: Vec<String>| ys.join("-"));
        for n in 1..=3 {
            c.push(move |s: &str| s.repeat(n));
        }
        assert_eq!(c.call(vec!["a", "b", "c"]).unwrap(), "a-bb-ccc");
        assert_eq!(format!("{c:?}"), "DynLockstep { arity: 3, .. }");
    }
}
