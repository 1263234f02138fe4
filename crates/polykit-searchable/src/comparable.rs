//! The Comparable concept
//!
//! A model supplies an equivalence test, [`Comparable::equal`]; everything
//! else is derived from it. The right-hand side may be a different type, so
//! `String` can be compared against `str` without converting either side.

use polykit_core::{Concept, Mcd, ModeledBy};

/// Equivalence between `Self` and `Rhs`
///
/// # Minimal complete definition
///
/// `equal`. Implementations must make it reflexive, symmetric and
/// transitive over the values they accept; the float instances follow IEEE
/// semantics and are therefore not reflexive at NaN.
pub trait Comparable<Rhs: ?Sized = Self> {
    /// Whether `self` and `other` are equivalent
    fn equal(&self, other: &Rhs) -> bool;

    /// Whether `self` and `other` are not equivalent
    #[inline]
    fn not_equal(&self, other: &Rhs) -> bool {
        !self.equal(other)
    }
}

/// Marker naming the [`Comparable`] concept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparableConcept;

impl Concept for ComparableConcept {
    const NAME: &'static str = "Comparable";
    const MINIMAL: &'static [&'static str] = &["equal"];
    const DERIVED: &'static [&'static str] = &["not_equal"];
}

impl<T: Comparable + ?Sized> ModeledBy<T> for ComparableConcept {}

/// The `equal` minimal complete definition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualMcd;

impl Mcd for EqualMcd {
    type Concept = ComparableConcept;
    const NAME: &'static str = "equal";
    const PRIMITIVES: &'static [&'static str] = &["equal"];
}

/// Whether `a` and `b` are equivalent
#[inline]
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: Comparable<B> + ?Sized,
    B: ?Sized,
{
    a.equal(b)
}

/// Whether `a` and `b` are not equivalent
#[inline]
pub fn not_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Comparable<B> + ?Sized,
    B: ?Sized,
{
    a.not_equal(b)
}

// Instances

macro_rules! comparable_via_partial_eq {
    ($($t:ty),* $(,)?) => {
        $(
            impl Comparable for $t {
                #[inline]
                fn equal(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

comparable_via_partial_eq!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, (),
    str, String,
);

impl Comparable<str> for String {
    #[inline]
    fn equal(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl Comparable<String> for str {
    #[inline]
    fn equal(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl<'a, 'b, A, B> Comparable<&'b B> for &'a A
where
    A: Comparable<B> + ?Sized,
    B: ?Sized,
{
    #[inline]
    fn equal(&self, other: &&'b B) -> bool {
        (**self).equal(*other)
    }
}

impl<A, B> Comparable<Option<B>> for Option<A>
where
    A: Comparable<B>,
{
    #[inline]
    fn equal(&self, other: &Option<B>) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.equal(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A, B> Comparable<[B]> for [A]
where
    A: Comparable<B>,
{
    fn equal(&self, other: &[B]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.equal(b))
    }
}

impl<A, B> Comparable<Vec<B>> for Vec<A>
where
    A: Comparable<B>,
{
    #[inline]
    fn equal(&self, other: &Vec<B>) -> bool {
        self.as_slice().equal(other.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polykit_core::require;

    /// Case-insensitive ASCII text, modeling only `equal`
    struct Folded(&'static str);

    impl Comparable for Folded {
        fn equal(&self, other: &Self) -> bool {
            self.0.eq_ignore_ascii_case(other.0)
        }
    }

    #[test]
    fn test_derived_not_equal() {
        require::<ComparableConcept, Folded>();
        assert!(Folded("Hana").equal(&Folded("hANA")));
        assert!(!Folded("Hana").not_equal(&Folded("HANA")));
        assert!(Folded("a").not_equal(&Folded("b")));
    }

    #[test]
    fn test_primitive_instances() {
        assert!(equal(&3u8, &3u8));
        assert!(not_equal(&-1i64, &1i64));
        assert!(equal(&'x', &'x'));
        assert!(equal(&(), &()));
        assert!(!equal(&f64::NAN, &f64::NAN));
    }

    #[test]
    fn test_heterogeneous_strings() {
        let owned = String::from("text");
        assert!(equal(&owned, "text"));
        assert!(equal("text", &owned));
        assert!(equal(&"text", &"text"));
        assert!(not_equal(&owned, "other"));
    }

    #[test]
    fn test_structural_instances() {
        assert!(equal(&Some(1i32), &Some(1i32)));
        assert!(equal(&None::<i32>, &None::<i32>));
        assert!(not_equal(&Some(1i32), &None::<i32>));
        assert!(equal(&vec![Folded("A")], &vec![Folded("a")]));
        assert!(not_equal(&vec![1u32, 2], &vec![1u32, 2, 3]));
        assert!(equal(&[1u32, 2][..], &[1u32, 2][..]));
    }

    #[test]
    fn test_concept_metadata() {
        let info = ComparableConcept::info();
        assert_eq!(info.name, "Comparable");
        assert_eq!(info.minimal, EqualMcd::PRIMITIVES);
        assert!(info.is_derived("not_equal"));
    }
}
