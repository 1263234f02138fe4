//! Integration tests for lockstep composition across crates

use polykit::prelude::*;
use polykit::{lockstep, Error};
use proptest::prelude::*;
use std::collections::VecDeque;

#[test]
fn test_lockstep_over_searchable_predicates() {
    // Each element asks one structure whether it holds the argument
    let evens = vec![0u32, 2, 4, 6];
    let primes: VecDeque<u32> = [2u32, 3, 5, 7].into_iter().collect();

    let c = lockstep!(
        |in_evens: bool, in_primes: bool| in_evens && in_primes,
        |x: u32| elem(&x, &evens),
        |x: u32| elem(&x, &primes)
    );

    assert!(c.apply((2, 2)));
    assert!(!c.apply((4, 4)));
    assert!(c.apply((6, 7)));
}

#[test]
fn test_lockstep_with_mutable_and_consuming_elements() {
    let mut seen = Vec::new();
    {
        let mut c = lockstep!(
            |a: usize, b: usize| a + b,
            |s: &str| {
                seen.push(s.to_owned());
                seen.len()
            },
            |n: usize| n * 10
        );
        assert_eq!(c.apply_mut(("a", 1)), 11);
        assert_eq!(c.apply_mut(("b", 2)), 22);
    }
    assert_eq!(seen, ["a", "b"]);

    let buffer = vec![1, 2, 3];
    let c = lockstep(|v: Vec<i32>, n: i32| v.len() as i32 + n, (move |_: ()| buffer, |n: i32| n));
    assert_eq!(c.apply_once(((), 4)), 7);
}

#[test]
fn test_closure_holds_mixed_element_callables() {
    let closure = Closure::new((|x: i32| x + 1, String::from("meta"), 2.5f64));
    assert_eq!((closure.get::<0>())(1), 2);
    assert_eq!(closure.get::<1>(), "meta");
    assert_eq!(*closure.get::<2>(), 2.5);
}

#[test]
fn test_dyn_lockstep_reports_arity_through_facade_error() {
    let c = DynLockstep::new(|ys: Vec<bool>| ys.into_iter().filter(|y| *y).count())
        .with(|x: i32| x > 0)
        .with(|x: i32| x % 2 == 0);

    assert_eq!(c.call(vec![3, 4]).ok(), Some(2));

    let err = c.call(vec![1]).expect_err("one argument short");
    assert!(matches!(err, Error::ArityMismatch { expected: 2, actual: 1 }));
    assert_eq!(err.to_string(), "Arity mismatch: expected 2 arguments, got 1");
}

proptest! {
    // Property: a lockstep of membership tests answers like the direct calls
    #[test]
    fn prop_lockstep_of_elem_matches_direct_calls(
        xs in prop::collection::vec(0u8..16, 0..12),
        ys in prop::collection::btree_set(0u8..16, 0..12),
        a in 0u8..16,
        b in 0u8..16,
    ) {
        let c = lockstep!(
            |in_xs: bool, in_ys: bool| (in_xs, in_ys),
            |x: u8| elem(&x, &xs),
            |y: u8| contains(&ys, &y),
        );
        prop_assert_eq!(c.apply((a, b)), (xs.contains(&a), ys.contains(&b)));
    }
}
