use crate::math::{GridSize, GridSizeCoord};

/// The maze size a player has asked for, kept within the limits the game offers.
///
/// Every way of changing a `MazeSettings` clamps each axis to
/// [`MIN_SIZE`](Self::MIN_SIZE)`..=`[`MAX_SIZE`](Self::MAX_SIZE), so a value of this type
/// can always be handed to [`MazeBuilder::generate()`](crate::MazeBuilder::generate).
///
/// ```
/// use maze_cubes::MazeSettings;
///
/// let mut settings = MazeSettings::default();
/// settings.apply(100, 2, 20);
/// assert_eq!(settings.to_size().to_array(), [64, 5, 20]);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "SettingsSer", into = "SettingsSer")
)]
pub struct MazeSettings {
    width: GridSizeCoord,
    height: GridSizeCoord,
    depth: GridSizeCoord,
}

impl MazeSettings {
    /// Smallest size offered on each axis.
    pub const MIN_SIZE: GridSize = GridSize::new(8, 5, 8);
    /// Largest size offered on each axis.
    pub const MAX_SIZE: GridSize = GridSize::new(64, 32, 64);
    /// The size used when nothing else has been chosen.
    pub const DEFAULT_SIZE: GridSize = GridSize::new(10, 10, 10);

    /// Settings with the given size, clamped to the allowed range.
    pub fn new(
        width: GridSizeCoord,
        height: GridSizeCoord,
        depth: GridSizeCoord,
    ) -> Self {
        let mut settings = Self::default();
        settings.apply(width, height, depth);
        settings
    }

    /// Replaces the requested size, clamping each axis to the allowed range.
    pub fn apply(&mut self, width: GridSizeCoord, height: GridSizeCoord, depth: GridSizeCoord) {
        let [width, height, depth] = GridSize::new(width, height, depth)
            .clamp(Self::MIN_SIZE, Self::MAX_SIZE)
            .to_array();
        self.width = width;
        self.height = height;
        self.depth = depth;
    }

    /// Returns to [`DEFAULT_SIZE`](Self::DEFAULT_SIZE).
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    /// Requested size along X.
    pub fn width(&self) -> GridSizeCoord {
        self.width
    }

    /// Requested size along Y.
    pub fn height(&self) -> GridSizeCoord {
        self.height
    }

    /// Requested size along Z.
    pub fn depth(&self) -> GridSizeCoord {
        self.depth
    }

    /// The size to generate.
    pub fn to_size(&self) -> GridSize {
        GridSize::new(self.width, self.height, self.depth)
    }
}

impl Default for MazeSettings {
    fn default() -> Self {
        let [width, height, depth] = Self::DEFAULT_SIZE.to_array();
        Self {
            width,
            height,
            depth,
        }
    }
}

/// Serialization schema; deserialized values are clamped like any other input.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename = "MazeSettings")]
struct SettingsSer {
    width: GridSizeCoord,
    height: GridSizeCoord,
    depth: GridSizeCoord,
}

#[cfg(feature = "serde")]
impl From<SettingsSer> for MazeSettings {
    fn from(SettingsSer { width, height, depth }: SettingsSer) -> Self {
        Self::new(width, height, depth)
    }
}

#[cfg(feature = "serde")]
impl From<MazeSettings> for SettingsSer {
    fn from(settings: MazeSettings) -> Self {
        let MazeSettings {
            width,
            height,
            depth,
        } = settings;
        Self {
            width,
            height,
            depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_ten_cubed() {
        assert_eq!(MazeSettings::default().to_size(), GridSize::new(10, 10, 10));
    }

    #[test]
    fn apply_clamps_each_axis() {
        let mut settings = MazeSettings::default();
        settings.apply(0, 1000, 9);
        assert_eq!(
            (settings.width(), settings.height(), settings.depth()),
            (8, 32, 9)
        );
        settings.apply(65, 4, 7);
        assert_eq!(settings.to_size(), GridSize::new(64, 5, 8));
    }

    #[test]
    fn reset() {
        let mut settings = MazeSettings::new(20, 20, 20);
        settings.reset_to_defaults();
        assert_eq!(settings, MazeSettings::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_clamps() {
        let settings: MazeSettings =
            serde_json::from_str(r#"{"width": 3, "height": 12, "depth": 999}"#).unwrap();
        assert_eq!(settings.to_size(), GridSize::new(8, 12, 64));
        assert_eq!(
            serde_json::to_value(settings).unwrap(),
            serde_json::json!({"width": 8, "height": 12, "depth": 64})
        );
    }
}
