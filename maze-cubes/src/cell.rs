/// The contents of a single maze cell.
///
/// Generation treats [`Solid`](Self::Solid) and [`Ethereal`](Self::Ethereal) alike as
/// “blocked”; see [`CellState::is_solid_like()`]. Game code may still tell them apart,
/// for example to apply effects to a player standing inside an ethereal cell.
#[expect(clippy::exhaustive_enums)]
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, exhaust::Exhaust, strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellState {
    /// Open space that can be walked through.
    Void,
    /// Ordinary wall.
    #[default]
    Solid,
    /// Wall that is structurally identical to [`Solid`](Self::Solid) but has a
    /// distinct meaning to game logic.
    Ethereal,
}

impl CellState {
    /// Returns whether this cell is open.
    #[inline]
    pub const fn is_void(self) -> bool {
        matches!(self, Self::Void)
    }

    /// Returns whether this cell blocks movement and carving: true for both
    /// [`Solid`](Self::Solid) and [`Ethereal`](Self::Ethereal).
    #[inline]
    pub const fn is_solid_like(self) -> bool {
        matches!(self, Self::Solid | Self::Ethereal)
    }

    /// Returns whether this cell is [`Ethereal`](Self::Ethereal).
    #[inline]
    pub const fn is_ethereal(self) -> bool {
        matches!(self, Self::Ethereal)
    }

    /// Character used when drawing a layer of the grid as text.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Void => '.',
            Self::Solid => '#',
            Self::Ethereal => '~',
        }
    }

    /// Lowercase name of the state, as used in messages.
    #[inline]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl core::fmt::Display for CellState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
