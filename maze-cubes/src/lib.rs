//! Maze Cubes generates three-dimensional mazes on an integer cube grid.
//!
//! A maze is a [`MazeGrid`]: a dense box of [`CellState`]s in which every
//! [void](CellState::Void) cell is reachable from a single exit on the outer boundary.
//! Corridors are one cell wide and run along the odd-coordinate lattice, with a few
//! extra connections added after carving so that the layout is not a pure tree.
//!
//! ## Generating
//!
//! [`MazeBuilder`] runs the whole pipeline. It owns its random source, so equal seeds give
//! equal mazes:
//!
//! ```
//! use maze_cubes::{MazeBuilder, Outcome};
//!
//! let generated = MazeBuilder::from_seed(1234).generate([11, 7, 11]).unwrap();
//! assert_eq!(generated.report.outcome, Outcome::Connected);
//! assert!(generated.grid.is_void(generated.report.exit));
//! ```
//!
//! Generation never fails once the input is usable. If no attempt produces a connected
//! layout, the builder falls back to a straight corridor, and the [`GenerationReport`]
//! says so.
//!
//! ## Consuming
//!
//! [`Maze`] wraps a finished grid with a [`WorldScale`] and answers the questions game code
//! asks: which cell a position is in, where a random open cell is, where the exit is,
//! and which horizontal directions are walkable.
//!
//! ## Crate features
//!
//! * `std`: Uses the standard library's floating-point functions instead of the
//!   portable ones.
//! * `serde`: Adds [`serde`] implementations for [`MazeSettings`], [`WorldScale`],
//!   [`CellState`], and the grid math types.
//!
//! ## Dependencies and global state
//!
//! `maze_cubes` has no global state. It writes log messages using the [`log`] crate
//! and is therefore subject to that global configuration.
#![cfg_attr(
    not(feature = "serde"),
    doc = "[`serde`]: https://docs.rs/serde/"
)]
#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(test),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
// Lenience for tests.
#![cfg_attr(test,
    allow(clippy::float_cmp), // deterministic tests
)]

#[allow(unused_imports)] // false positive unused macro_use
#[macro_use]
extern crate alloc;
#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;

pub mod math {
    //! Integer grid geometry used to address maze cells.
    pub use maze_cubes_base::math::*;
}

pub mod util {
    //! Miscellaneous helpers that are not specific to mazes.
    pub use maze_cubes_base::util::*;
}

mod cell;
pub use cell::CellState;

mod grid;
pub use grid::{MazeGrid, MazeSizeError};

pub mod generate;
pub use generate::{
    BuildState, ConnectivityCheck, FloodFillValidator, GeneratedMaze, GenerationReport,
    MazeBuilder, Outcome, ValidationFailure,
};

mod maze;
pub use maze::Maze;

mod settings;
pub use settings::MazeSettings;

mod world;
pub use world::{World, WorldPoint, WorldScale};

/// Re-export the version of the `euclid` vector math library we're using.
pub use euclid;
