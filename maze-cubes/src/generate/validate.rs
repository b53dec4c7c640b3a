use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::math::{Cube, Face6};
use crate::{CellState, MazeGrid};

/// Decides whether a generation attempt produced an acceptable maze.
///
/// [`MazeBuilder`](crate::MazeBuilder) calls this once per attempt, after the exit has
/// been carved. An [`Err`] causes the attempt to be discarded and retried.
pub trait ConnectivityCheck {
    /// Checks `grid`, whose exit is `exit`.
    ///
    /// On success, returns the number of void cells reachable from the exit.
    fn check(&mut self, grid: &MazeGrid, exit: Cube) -> Result<usize, ValidationFailure>;
}

impl<T: ConnectivityCheck + ?Sized> ConnectivityCheck for &mut T {
    fn check(&mut self, grid: &MazeGrid, exit: Cube) -> Result<usize, ValidationFailure> {
        (**self).check(grid, exit)
    }
}

/// Reasons a generation attempt was rejected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationFailure {
    /// The exit is not a cell of the grid.
    #[error("exit {exit:?} is outside the grid")]
    ExitOutOfBounds {
        /// The exit cell.
        exit: Cube,
    },
    /// The exit cell is not open.
    #[error("exit {exit:?} is {state}, not void")]
    ExitNotVoid {
        /// The exit cell.
        exit: Cube,
        /// What the exit cell actually contains.
        state: CellState,
    },
    /// Some void cells cannot be reached from the exit.
    #[error("only {visited} of {total} void cells are reachable from the exit")]
    Unreachable {
        /// Void cells reached by the flood fill.
        visited: usize,
        /// Void cells in the whole grid.
        total: usize,
    },
}

/// Breadth-first flood fill from the exit through face-adjacent void cells.
///
/// Succeeds when every void cell in the grid was reached. The flood fill steps one cell
/// at a time, not along the carving lattice, so it passes through opened wall cells.
///
/// The queue and visited flags are kept between calls.
#[derive(Clone, Debug, Default)]
pub struct FloodFillValidator {
    queue: VecDeque<Cube>,
    /// Indexed by [`MazeGrid::index()`].
    visited: Vec<bool>,
}

impl FloodFillValidator {
    /// Creates a validator with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the void cells reachable from `start` through face-adjacent void cells,
    /// including `start` itself. Returns 0 if `start` is not void.
    pub fn reachable_count(&mut self, grid: &MazeGrid, start: Cube) -> usize {
        self.queue.clear();
        self.visited.clear();
        self.visited.resize(grid.volume(), false);

        let Some(start_index) = grid.index(start) else {
            return 0;
        };
        if !grid.is_void(start) {
            return 0;
        }
        self.visited[start_index] = true;
        self.queue.push_back(start);

        let mut visited_count = 0;
        while let Some(current) = self.queue.pop_front() {
            visited_count += 1;
            for face in Face6::ALL {
                let Some(neighbor) = current.checked_add(face.normal_vector()) else {
                    continue;
                };
                let Some(index) = grid.index(neighbor) else {
                    continue;
                };
                if !self.visited[index] && grid.is_void(neighbor) {
                    self.visited[index] = true;
                    self.queue.push_back(neighbor);
                }
            }
        }
        visited_count
    }
}

impl ConnectivityCheck for FloodFillValidator {
    fn check(&mut self, grid: &MazeGrid, exit: Cube) -> Result<usize, ValidationFailure> {
        match grid.get(exit) {
            None => return Err(ValidationFailure::ExitOutOfBounds { exit }),
            Some(CellState::Void) => {}
            Some(state) => return Err(ValidationFailure::ExitNotVoid { exit, state }),
        }

        let visited = self.reachable_count(grid, exit);
        let total = grid.count(CellState::Void);
        if visited == total {
            Ok(visited)
        } else {
            Err(ValidationFailure::Unreachable { visited, total })
        }
    }
}
