use alloc::vec::Vec;

use rand::Rng;

use crate::generate::CarvedSet;
use crate::generate::lattice::{SIDE_DIRECTIONS, middle_odd};
use crate::math::{Cube, GridSize};
use crate::{CellState, MazeGrid};

/// Opens the single exit of the maze in its outer shell.
///
/// Candidates are the cells one horizontal step from a carved cell that land on an X or Z
/// face of the shell, away from the top and bottom layers. One is picked uniformly (a cell
/// next to several carved cells is proportionally more likely). If there are none, the
/// exit goes on the +X face at the middle of the other two axes.
///
/// The exit's inward neighbour is opened too if it is still solid-like, so the exit always
/// joins the interior.
#[derive(Clone, Debug, Default)]
pub struct ExitCarver {
    candidates: Vec<Cube>,
}

impl ExitCarver {
    /// Creates an exit carver with an empty candidate buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Carves the exit and returns its cell.
    ///
    /// If the inward neighbour of the exit had to be opened, it is appended to `carved`.
    pub fn carve(&mut self, grid: &mut MazeGrid, rng: &mut impl Rng, carved: &mut CarvedSet) -> Cube {
        let size = grid.size();

        self.candidates.clear();
        for &cell in carved.iter() {
            for direction in SIDE_DIRECTIONS {
                let boundary = cell + direction;
                if is_side_boundary_cell(size, boundary) {
                    self.candidates.push(boundary);
                }
            }
        }

        let exit = if self.candidates.is_empty() {
            fallback_exit(size)
        } else {
            self.candidates[rng.random_range(0..self.candidates.len())]
        };

        grid.set(exit, CellState::Void);

        let interior = interior_adjacent(size, exit);
        if grid.is_solid_like(interior) {
            grid.set(interior, CellState::Void);
            carved.push(interior);
        }

        exit
    }
}

/// Whether `cube` is on an X or Z face of the shell of a grid of `size`, excluding the
/// top and bottom layers.
pub(crate) fn is_side_boundary_cell(size: GridSize, cube: Cube) -> bool {
    let w = i64::from(size.width);
    let h = i64::from(size.height);
    let d = i64::from(size.depth);
    let (x, y, z) = (i64::from(cube.x), i64::from(cube.y), i64::from(cube.z));
    let on_side = x == 0 || x == w - 1 || z == 0 || z == d - 1;
    on_side && y > 0 && y < h - 1
}

/// The exit used when no carved cell is next to a side face: the +X face, at the middle
/// of Y and Z.
pub(crate) fn fallback_exit(size: GridSize) -> Cube {
    Cube::new(
        size.width.cast_signed() - 1,
        middle_odd(size.height),
        middle_odd(size.depth),
    )
}

/// The cell one step inward from a side boundary cell. X faces take precedence over
/// Z faces at the vertical edges where they meet.
fn interior_adjacent(size: GridSize, boundary: Cube) -> Cube {
    let max_x = size.width.cast_signed() - 1;
    let max_z = size.depth.cast_signed() - 1;
    if boundary.x == 0 {
        Cube::new(1, boundary.y, boundary.z)
    } else if boundary.x == max_x {
        Cube::new(max_x - 1, boundary.y, boundary.z)
    } else if boundary.z == 0 {
        Cube::new(boundary.x, boundary.y, 1)
    } else if boundary.z == max_z {
        Cube::new(boundary.x, boundary.y, max_z - 1)
    } else {
        boundary
    }
}
