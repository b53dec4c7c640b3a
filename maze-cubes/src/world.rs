use euclid::Point3D;

use crate::math::{Cube, FreeCoordinate, FreePoint};

/// Unit-of-measure type for positions in the game world, as opposed to [`Cube`] units.
///
/// The two differ by a [`WorldScale`], which need not be uniform.
#[expect(clippy::exhaustive_enums)]
#[derive(Debug, Eq, PartialEq)]
pub enum World {}

/// A position in the game world.
pub type WorldPoint = Point3D<FreeCoordinate, World>;

/// Size of one maze cell in world units.
///
/// Cells are square horizontally, [`cell_size()`](Self::cell_size) on X and Z,
/// and [`layer_height()`](Self::layer_height) tall.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldScale {
    cell_size: FreeCoordinate,
    layer_height: FreeCoordinate,
}

impl WorldScale {
    /// Smallest layer height that will be used; anything less is raised to this.
    pub const MIN_LAYER_HEIGHT: FreeCoordinate = 0.0001;

    /// Constructs a scale with the given horizontal cell size and vertical layer height.
    pub const fn new(cell_size: FreeCoordinate, layer_height: FreeCoordinate) -> Self {
        Self {
            cell_size,
            layer_height,
        }
    }

    /// Horizontal size of a cell.
    pub fn cell_size(&self) -> FreeCoordinate {
        self.cell_size
    }

    /// Vertical size of a cell; never less than [`Self::MIN_LAYER_HEIGHT`].
    pub fn layer_height(&self) -> FreeCoordinate {
        // `max()` also replaces NaN.
        self.layer_height.max(Self::MIN_LAYER_HEIGHT)
    }

    /// Converts a position in cube units to world units.
    pub fn to_world(&self, point: FreePoint) -> WorldPoint {
        WorldPoint::new(
            point.x * self.cell_size,
            point.y * self.layer_height(),
            point.z * self.cell_size,
        )
    }

    /// Converts a world position to cube units.
    pub fn to_cube_space(&self, point: WorldPoint) -> FreePoint {
        FreePoint::new(
            point.x / self.cell_size,
            point.y / self.layer_height(),
            point.z / self.cell_size,
        )
    }

    /// World position of the center of `cube`.
    ///
    /// ```
    /// use maze_cubes::{WorldScale, math::Cube};
    ///
    /// let center = WorldScale::default().cell_to_world_center(Cube::new(1, 2, 3));
    /// assert_eq!(center.to_array(), [7.5, 7.5, 17.5]);
    /// ```
    pub fn cell_to_world_center(&self, cube: Cube) -> WorldPoint {
        self.to_world(cube.center())
    }

    /// The cube containing the world position, regardless of any grid's bounds.
    ///
    /// Returns [`None`] if the position is NaN or outside the range of
    /// [`GridCoordinate`](crate::math::GridCoordinate).
    pub fn world_to_cell(&self, point: WorldPoint) -> Option<Cube> {
        Cube::containing(self.to_cube_space(point))
    }
}

impl Default for WorldScale {
    fn default() -> Self {
        Self::new(5.0, 3.0)
    }
}
