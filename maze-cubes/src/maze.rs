use rand::Rng;

// Polyfill for `f64::floor()` without std.
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::FloatCore as _;

use crate::math::{Cube, Face6, FreeCoordinate, GridCoordinate, GridSize};
use crate::{CellState, GeneratedMaze, GenerationReport, MazeGrid, WorldPoint, WorldScale};

/// Horizontal directions in the order [`Maze::walkable_directions()`] reports them:
/// north, east, south, west.
const HORIZONTAL_DIRECTIONS: [Face6; 4] = [Face6::PZ, Face6::PX, Face6::NZ, Face6::NX];

/// A finished maze placed in the world.
///
/// This is the read-only view that game code works with: cell queries, conversion between
/// world positions and cells, spawn points, the exit, and movement options.
///
/// ```
/// use maze_cubes::{Maze, MazeBuilder, WorldScale};
/// use maze_cubes::math::Face6;
///
/// let mut builder = MazeBuilder::from_seed(3);
/// let maze = Maze::new(builder.generate([9, 5, 9]).unwrap(), WorldScale::default());
///
/// let exit = maze.exit_cell().unwrap();
/// assert_eq!(Some(exit), maze.world_to_cell(maze.cell_to_world_center(exit)));
///
/// let start = maze.try_get_random_void_cell(builder.rng_mut()).unwrap();
/// assert!(maze.walkable_directions(start).all(|face| maze.is_void(start + face)));
/// ```
#[derive(Clone, Debug)]
pub struct Maze {
    grid: MazeGrid,
    report: GenerationReport,
    scale: WorldScale,
}

impl Maze {
    /// Places a generated maze in the world at the given scale.
    pub fn new(generated: GeneratedMaze, scale: WorldScale) -> Self {
        let GeneratedMaze { grid, report } = generated;
        Self {
            grid,
            report,
            scale,
        }
    }

    /// The cells of the maze.
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// How the maze was generated.
    pub fn report(&self) -> &GenerationReport {
        &self.report
    }

    /// Size of a cell in the world.
    pub fn scale(&self) -> WorldScale {
        self.scale
    }

    /// Size of the grid.
    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    /// Whether `cube` is a cell of the maze.
    pub fn is_inside_bounds(&self, cube: Cube) -> bool {
        self.grid.contains(cube)
    }

    /// Whether `cube` is open space. False outside the maze.
    pub fn is_void(&self, cube: Cube) -> bool {
        self.grid.is_void(cube)
    }

    /// Whether `cube` is an ethereal cell, which game logic treats specially when a
    /// player is inside it. False outside the maze.
    pub fn is_ethereal(&self, cube: Cube) -> bool {
        self.grid.get(cube).is_some_and(CellState::is_ethereal)
    }

    /// The state of `cube`, or [`None`] outside the maze.
    pub fn cell_state(&self, cube: Cube) -> Option<CellState> {
        self.grid.get(cube)
    }

    /// World position of the center of `cube`.
    pub fn cell_to_world_center(&self, cube: Cube) -> WorldPoint {
        self.scale.cell_to_world_center(cube)
    }

    /// The cell containing a world position, or [`None`] if it is outside the maze.
    pub fn world_to_cell(&self, point: WorldPoint) -> Option<Cube> {
        self.scale
            .world_to_cell(point)
            .filter(|&cube| self.grid.contains(cube))
    }

    /// The cell nearest to a world position, clamped to the maze's bounds.
    ///
    /// NaN coordinates are treated as 0.
    pub fn clamped_world_to_cell(&self, point: WorldPoint) -> Cube {
        let point = self.scale.to_cube_space(point);
        let size = self.grid.size();
        let clamp_axis = |value: FreeCoordinate, extent: u32| -> GridCoordinate {
            let max = GridCoordinate::try_from(extent)
                .unwrap_or(GridCoordinate::MAX)
                .saturating_sub(1);
            if value.is_nan() {
                0
            } else {
                // Float-to-int `as` saturates.
                (value.floor() as GridCoordinate).clamp(0, max)
            }
        };
        Cube::new(
            clamp_axis(point.x, size.width),
            clamp_axis(point.y, size.height),
            clamp_axis(point.z, size.depth),
        )
    }

    /// Picks a void cell uniformly at random, or returns [`None`] if there are none.
    pub fn try_get_random_void_cell(&self, rng: &mut impl Rng) -> Option<Cube> {
        let count = self.grid.count(CellState::Void);
        if count == 0 {
            return None;
        }
        let chosen = rng.random_range(0..count);
        self.grid
            .iter()
            .filter(|&(_, state)| state.is_void())
            .nth(chosen)
            .map(|(cube, _)| cube)
    }

    /// Picks a spawn point in a random void cell, half a layer above the cell's floor.
    pub fn random_spawn_position(&self, rng: &mut impl Rng) -> Option<WorldPoint> {
        self.random_spawn_position_with_offset(rng, self.scale.layer_height() / 2.0)
    }

    /// Picks a spawn point in a random void cell: horizontally centered, and `height_offset`
    /// above the cell's floor.
    pub fn random_spawn_position_with_offset(
        &self,
        rng: &mut impl Rng,
        height_offset: FreeCoordinate,
    ) -> Option<WorldPoint> {
        let cube = self.try_get_random_void_cell(rng)?;
        let center = self.cell_to_world_center(cube);
        Some(WorldPoint::new(
            center.x,
            FreeCoordinate::from(cube.y) * self.scale.layer_height() + height_offset,
            center.z,
        ))
    }

    /// Finds the exit by scanning the side faces of the grid.
    ///
    /// The X faces are scanned first (at each interior `y` and `z`, the −X face before the
    /// +X face), then the Z faces. Only cells that are not on an edge of the grid are
    /// considered. For a generated maze this is the exit that was carved.
    pub fn exit_cell(&self) -> Option<Cube> {
        let bounds = self.grid.bounds();
        let interior = self.grid.interior()?;
        let [x_min, y_min, z_min] = bounds.lower_bounds().to_array();
        let [x_max, _, z_max] = (bounds.upper_bounds() - euclid::vec3(1, 1, 1)).to_array();
        debug_assert_eq!([x_min, y_min, z_min], [0, 0, 0]);

        let x_faces = interior.y_range().flat_map(move |y| {
            interior
                .z_range()
                .flat_map(move |z| [Cube::new(x_min, y, z), Cube::new(x_max, y, z)])
        });
        let z_faces = interior.y_range().flat_map(move |y| {
            interior
                .x_range()
                .flat_map(move |x| [Cube::new(x, y, z_min), Cube::new(x, y, z_max)])
        });
        x_faces.chain(z_faces).find(|&cube| self.grid.is_void(cube))
    }

    /// World position of the center of [`exit_cell()`](Self::exit_cell).
    pub fn exit_world_position(&self) -> Option<WorldPoint> {
        self.exit_cell().map(|cube| self.cell_to_world_center(cube))
    }

    /// Horizontal directions in which the neighbor of `cube` is void, in the order
    /// +Z, +X, −Z, −X (north, east, south, west).
    pub fn walkable_directions(&self, cube: Cube) -> impl Iterator<Item = Face6> + '_ {
        HORIZONTAL_DIRECTIONS
            .into_iter()
            .filter(move |&face| self.is_direction_walkable(cube, face))
    }

    /// Whether the neighbor of `cube` in the direction `face` is void.
    pub fn is_direction_walkable(&self, cube: Cube, face: Face6) -> bool {
        cube.checked_add(face.normal_vector())
            .is_some_and(|neighbor| self.grid.is_void(neighbor))
    }
}
