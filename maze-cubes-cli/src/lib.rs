//! Library parts of the `maze-cubes` command-line generator: logging setup,
//! settings files, and output formats.
//!
//! This is not a stable API; it exists so that the binary's pieces can be tested.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

pub mod config_files;
pub mod logging;
pub mod output;
