use alloc::vec::Vec;

use rand::Rng;

use crate::generate::CarvedSet;
use crate::generate::lattice::{CARVE_DIRECTIONS, lattice_neighbor, random_lattice_cell};
use crate::math::{Cube, Face6};
use crate::{CellState, MazeGrid};

/// Randomized depth-first carving over the odd-coordinate lattice.
///
/// Produces a spanning tree of every lattice cell: each step opens the wall cell between
/// the current cell and an unvisited neighbour two cells away, then the neighbour itself.
/// The walk uses an explicit stack, so its depth is not limited by the call stack.
///
/// The stack, neighbour list, and visited flags are kept between calls to avoid
/// reallocating them on every attempt.
#[derive(Clone, Debug, Default)]
pub struct CarveWalker {
    stack: Vec<Cube>,
    neighbors: Vec<(Face6, Cube)>,
    /// Indexed by [`MazeGrid::index()`].
    visited: Vec<bool>,
}

impl CarveWalker {
    /// Creates a walker with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Carves a spanning tree into `grid`, starting from a random lattice cell.
    ///
    /// Every lattice cell that becomes void is appended to `carved`; wall cells are not.
    /// The grid should be at least 3 cells on every axis, so that a lattice cell exists.
    pub fn carve(&mut self, grid: &mut MazeGrid, rng: &mut impl Rng, carved: &mut CarvedSet) {
        let size = grid.size();
        self.stack.clear();
        self.visited.clear();
        self.visited.resize(grid.volume(), false);

        let start = random_lattice_cell(rng, size);
        if self.mark_visited_and_carve(grid, start) {
            carved.push(start);
        }
        self.stack.push(start);

        while let Some(&current) = self.stack.last() {
            self.neighbors.clear();
            for direction in CARVE_DIRECTIONS {
                if let Some(candidate) = lattice_neighbor(size, current, direction) {
                    if !self.is_visited(grid, candidate) {
                        self.neighbors.push((direction, candidate));
                    }
                }
            }

            if self.neighbors.is_empty() {
                self.stack.pop();
                continue;
            }

            let (direction, next) = self.neighbors[rng.random_range(0..self.neighbors.len())];
            grid.set(current + direction, CellState::Void);
            if self.mark_visited_and_carve(grid, next) {
                carved.push(next);
            }
            // `current` stays on the stack so its remaining neighbours are explored later.
            self.stack.push(next);
        }
    }

    fn is_visited(&self, grid: &MazeGrid, cube: Cube) -> bool {
        grid.index(cube)
            .is_some_and(|index| self.visited[index])
    }

    /// Returns false if `cube` was already visited (or is outside the grid).
    fn mark_visited_and_carve(&mut self, grid: &mut MazeGrid, cube: Cube) -> bool {
        let Some(index) = grid.index(cube) else {
            return false;
        };
        if self.visited[index] {
            return false;
        }
        self.visited[index] = true;
        grid.set(cube, CellState::Void);
        true
    }
}
