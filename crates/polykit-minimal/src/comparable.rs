//! Minimal Comparable model
//!
//! A tagged integer whose only adapter method is `equal`. Everything else a
//! test calls on it goes through the derived path.

use polykit_searchable::Comparable;

/// Tagged value modeling Comparable through `equal` alone
///
/// Deliberately implements no std comparison traits, so nothing can reach
/// it except through the Comparable adapter.
#[derive(Debug, Clone, Copy)]
pub struct MinimalComparable(pub i32);

/// Build the minimal Comparable tagged `i`
pub const fn comparable(i: i32) -> MinimalComparable {
    MinimalComparable(i)
}

impl Comparable for MinimalComparable {
    fn equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
