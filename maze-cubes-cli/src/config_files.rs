//! Reading [`MazeSettings`] from JSON files.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use maze_cubes::MazeSettings;

/// Error from [`load_settings()`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// The file could not be opened or read.
    #[error("could not read settings file {}", .path.display())]
    Read {
        /// The file that was being loaded.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file's contents are not valid settings.
    #[error("settings file {} is not valid", .path.display())]
    Parse {
        /// The file that was being loaded.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },
}

/// Loads settings from a JSON file of the form `{"width": 10, "height": 10, "depth": 10}`.
///
/// Sizes outside the range [`MazeSettings`] allows are clamped, not rejected.
pub fn load_settings(path: &Path) -> Result<MazeSettings, SettingsError> {
    let file = File::open(path).map_err(|source| SettingsError::Read {
        path: path.to_owned(),
        source,
    })?;
    let settings: MazeSettings =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            SettingsError::Parse {
                path: path.to_owned(),
                source,
            }
        })?;
    log::trace!(
        "Loaded settings from {path}: {settings:?}",
        path = path.to_string_lossy()
    );
    Ok(settings)
}
