use crate::math::Face6;

/// One of the three axes of the grid.
///
/// X and Z span a single layer of the maze (its width and depth); Y counts layers.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// `[X, Y, Z]`.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Position of this axis's component in an `[x, y, z]` array.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Whether this axis lies within a maze layer.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        !matches!(self, Axis::Y)
    }

    /// The two faces perpendicular to this axis, positive first.
    #[inline]
    pub const fn faces(self) -> [Face6; 2] {
        match self {
            Axis::X => [Face6::PX, Face6::NX],
            Axis::Y => [Face6::PY, Face6::NY],
            Axis::Z => [Face6::PZ, Face6::NZ],
        }
    }
}
