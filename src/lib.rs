//! # polykit
//!
//! Concept-based generic programming with minimal complete definitions,
//! plus point-free function combinators.
//!
//! A type becomes a model of a concept by implementing only the concept's
//! minimal primitives; every derived operation is then available to it
//! automatically. Independently, [`lockstep`](functional::lockstep()) builds a
//! callable that applies one callable per argument and combines the results.
//!
//! ## Crates
//!
//! - [`concepts`]: concept vocabulary, errors and the model catalogue
//! - [`functional`]: the `Closure` capture container and the lockstep
//!   combinators
//! - [`searchable`]: the Comparable and Searchable concepts with instances for
//!   standard containers
//! - [`minimal`]: minimal reference models for conformance testing
//!
//! ## Quick Start
//!
//! ```rust
//! use polykit::prelude::*;
//!
//! // Derived operation on a standard container
//! let primes = vec![2u32, 3, 5, 7];
//! assert!(elem(&5u32, &primes));
//! assert!(!contains(&primes, &4u32));
//!
//! // Lockstep: f(g1(x1), g2(x2))
//! let c = lockstep!(|a: usize, b: bool| (a, b), |s: &str| s.len(), |n: i32| n > 0);
//! assert_eq!(c.apply(("four", 3)), (4, true));
//! ```

pub use polykit_core as concepts;
pub use polykit_functional as functional;
pub use polykit_minimal as minimal;
pub use polykit_searchable as searchable;

pub use polykit_core::{require, Concept, ConceptInfo, Error, Mcd, ModeledBy, Models, Result};
pub use polykit_functional::{lockstep, Apply, ApplyMut, ApplyOnce, Closure, DynLockstep, Lockstep};
pub use polykit_searchable::{Comparable, Searchable};

#[cfg(feature = "registry")]
pub use polykit_core::{ModelRegistry, RegistryBuilder};

/// Prelude module for convenient imports
pub mod prelude {
    pub use polykit_core::prelude::*;
    pub use polykit_functional::prelude::*;
    pub use polykit_searchable::prelude::*;
}
