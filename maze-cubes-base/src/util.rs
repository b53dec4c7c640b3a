//! Helpers for programs built on maze-cubes.

pub mod log;
