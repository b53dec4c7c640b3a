//! The maze generation pipeline.
//!
//! [`MazeBuilder`] drives the stages in order, each of which mutates the grid in place:
//!
//! 1. fill: every cell becomes [`Solid`](crate::CellState::Solid), and a small random
//!    fraction of interior cells become [`Ethereal`](crate::CellState::Ethereal);
//! 2. [`CarveWalker`]: randomized depth-first carving over the odd-coordinate lattice;
//! 3. [`LoopInjector`]: a few extra lattice connections so the corridors contain cycles;
//! 4. [`ExitCarver`]: one opening in the outer shell;
//! 5. [`ConnectivityCheck`]: the flood fill that accepts or rejects the attempt.
//!
//! Rejected attempts are retried from a fresh fill; after [`MAX_ATTEMPTS`] rejections the
//! builder writes a straight corridor instead.

mod builder;
pub use builder::{BuildState, GeneratedMaze, GenerationReport, MAX_ATTEMPTS, MazeBuilder, Outcome};

mod carve;
pub use carve::CarveWalker;

mod carved;
pub use carved::CarvedSet;

mod exit;
pub use exit::ExitCarver;

mod lattice;
pub use lattice::{CARVE_DIRECTIONS, SIDE_DIRECTIONS, ensure_odd_interior, is_lattice_cell};

mod loops;
pub use loops::LoopInjector;

mod validate;
pub use validate::{ConnectivityCheck, FloodFillValidator, ValidationFailure};
