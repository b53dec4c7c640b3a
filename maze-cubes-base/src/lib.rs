//! This library is an internal component of [`maze-cubes`],
//! which defines the integer grid types that maze generation is expressed in.
//! Do not depend on this library; use only [`maze-cubes`] instead.
//!
//! [`maze-cubes`]: https://crates.io/crates/maze-cubes/

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(test),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
#![warn(clippy::missing_inline_in_public_items)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;
#[cfg_attr(test, macro_use)]
extern crate alloc;

/// Do not use this module directly; its contents are re-exported from `maze-cubes`.
pub mod math;

/// Do not use this module directly; its contents are re-exported from `maze-cubes`.
pub mod util;

// reexport for convenience of our tests
#[doc(hidden)]
pub use euclid;
