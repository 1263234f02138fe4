//! Point-free function composition
//!
//! This crate provides combinators that build a new callable from an
//! aggregation of other callables, together with the capture container they
//! store those callables in.
//!
//! # Components
//!
//! - [`Closure`]: fixed-arity heterogeneous container whose per-index access
//!   follows the ownership mode of the container access (`&`, `&mut`, by value)
//! - [`Lockstep`]: `lockstep(f, (g1, ..., gN))` applies `gi` to argument `i`
//!   and passes all results to `f`; invoked through [`Apply`], [`ApplyMut`]
//!   or [`ApplyOnce`]
//! - [`DynLockstep`]: the same composition over a runtime-sized list of
//!   homogeneous callables, with the arity checked at call time
//!
//! # Example
//!
//! ```rust
//! use polykit_functional::{lockstep, Apply, ApplyOnce};
//!
//! let c = lockstep!(|a: i32, b: usize| a as usize + b, |x: i32| x * x, |s: &str| s.len());
//! assert_eq!(c.apply((3, "four")), 13);
//!
//! // Consuming the combinator lets elements move their captured state out
//! let greeting = String::from("hello");
//! let c = lockstep!(|s: String| s, move |name: &str| greeting + ", " + name);
//! assert_eq!(c.apply_once(("world",)), "hello, world");
//! ```

pub mod closure;
pub mod dynamic;
pub mod lockstep;

// Re-export main types
pub use closure::{At, Closure, Tuple};
pub use dynamic::DynLockstep;
pub use lockstep::{lockstep, Apply, ApplyMut, ApplyOnce, Lockstep};

// Re-export from polykit-core
pub use polykit_core::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::lockstep;
    pub use crate::{Apply, ApplyMut, ApplyOnce, Closure, DynLockstep, Lockstep};
}
