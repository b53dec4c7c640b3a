use alloc::string::String;

use crate::CellState;
use crate::math::{Cube, GridAab, GridCoordinate, GridPoint, GridSize, Vol};

/// A dense box of [`CellState`]s whose lower corner is the origin.
///
/// Cells are addressed by [`Cube`]; a grid of size `w × h × d` contains the cubes from
/// `(0, 0, 0)` to `(w - 1, h - 1, d - 1)`. Storage is a single linear allocation in
/// the Z-major order of [`Vol`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MazeGrid {
    cells: Vol<CellState>,
}

impl MazeGrid {
    /// Allocates a grid of the given size with every cell [`Solid`](CellState::Solid).
    ///
    /// Returns an error if the size cannot be addressed with [`GridCoordinate`]s or
    /// does not fit in memory indices.
    pub fn new(size: impl Into<GridSize>) -> Result<Self, MazeSizeError> {
        Self::from_fn(size, |_| CellState::Solid)
    }

    /// Allocates a grid of the given size and computes each cell with `f`.
    pub fn from_fn(
        size: impl Into<GridSize>,
        f: impl FnMut(Cube) -> CellState,
    ) -> Result<Self, MazeSizeError> {
        let size = size.into();
        let bounds = GridAab::checked_from_lower_size(GridPoint::origin(), size)
            .map_err(|_| MazeSizeError { size })?;
        let cells = Vol::from_fn(bounds, f).map_err(|_| MazeSizeError { size })?;
        Ok(Self { cells })
    }

    /// Size of the grid on each axis.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.cells.bounds().size()
    }

    /// The box of cubes this grid contains.
    #[inline]
    pub fn bounds(&self) -> GridAab {
        self.cells.bounds()
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn volume(&self) -> usize {
        self.cells.volume()
    }

    /// The cells not on the outer shell, or [`None`] if every cell is on the shell.
    pub fn interior(&self) -> Option<GridAab> {
        self.bounds()
            .shrink_uniform(1)
            .filter(|interior| !interior.is_empty())
    }

    /// Returns whether `cube` is a cell of this grid.
    #[inline]
    pub fn contains(&self, cube: Cube) -> bool {
        self.bounds().contains_cube(cube)
    }

    /// Returns whether `cube` lies strictly inside the grid: `1 ..= size - 2` on every axis.
    #[inline]
    pub fn is_interior(&self, cube: Cube) -> bool {
        self.interior()
            .is_some_and(|interior| interior.contains_cube(cube))
    }

    /// Returns whether `cube` is a cell of the outermost layer of the grid.
    #[inline]
    pub fn is_on_shell(&self, cube: Cube) -> bool {
        self.contains(cube) && !self.is_interior(cube)
    }

    /// Returns the state of the cell at `cube`, or [`None`] if it is out of bounds.
    #[inline]
    pub fn get(&self, cube: Cube) -> Option<CellState> {
        self.cells.get(cube).copied()
    }

    /// Returns whether the cell at `cube` exists and is [`Void`](CellState::Void).
    #[inline]
    pub fn is_void(&self, cube: Cube) -> bool {
        self.get(cube).is_some_and(CellState::is_void)
    }

    /// Returns whether the cell at `cube` exists and is [solid-like](CellState::is_solid_like).
    #[inline]
    pub fn is_solid_like(&self, cube: Cube) -> bool {
        self.get(cube).is_some_and(CellState::is_solid_like)
    }

    /// Replaces the state of the cell at `cube`, returning the previous state,
    /// or [`None`] (and changing nothing) if `cube` is out of bounds.
    #[inline]
    pub fn set(&mut self, cube: Cube, state: CellState) -> Option<CellState> {
        self.cells
            .get_mut(cube)
            .map(|cell| core::mem::replace(cell, state))
    }

    /// Sets every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.as_linear_mut().fill(state);
    }

    /// Counts the cells whose state is `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .as_linear()
            .iter()
            .filter(|&&cell| cell == state)
            .count()
    }

    /// Iterates over every cell and its state, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Cube, CellState)> + '_ {
        self.cells.iter().map(|(cube, &state)| (cube, state))
    }

    /// Returns the linear index of `cube` in this grid's storage.
    /// Scratch buffers of length [`Self::volume()`] use the same indexing.
    #[inline]
    pub fn index(&self, cube: Cube) -> Option<usize> {
        self.cells.index(cube)
    }

    /// Draws the horizontal layer at height `y` as text, one line per Z row, with
    /// X increasing to the right; each cell is drawn with [`CellState::glyph()`].
    ///
    /// Returns [`None`] if `y` is outside the grid.
    ///
    /// ```
    /// use maze_cubes::{CellState, MazeGrid};
    /// use maze_cubes::math::Cube;
    ///
    /// let mut grid = MazeGrid::new([3, 1, 2]).unwrap();
    /// grid.set(Cube::new(1, 0, 0), CellState::Void);
    /// grid.set(Cube::new(2, 0, 1), CellState::Ethereal);
    /// assert_eq!(grid.layer_string(0).unwrap(), "#.#\n##~\n");
    /// ```
    pub fn layer_string(&self, y: GridCoordinate) -> Option<String> {
        self.layer_string_with(y, |_, state| state.glyph())
    }

    /// Like [`Self::layer_string()`] but with a caller-chosen character for each cell.
    pub fn layer_string_with(
        &self,
        y: GridCoordinate,
        mut glyph: impl FnMut(Cube, CellState) -> char,
    ) -> Option<String> {
        let bounds = self.bounds();
        if !bounds.y_range().contains(&y) {
            return None;
        }
        let size = self.size();
        let mut text = String::with_capacity((size.width as usize + 1) * size.depth as usize);
        for z in bounds.z_range() {
            for x in bounds.x_range() {
                let cube = Cube::new(x, y, z);
                text.push(glyph(cube, self.get(cube)?));
            }
            text.push('\n');
        }
        Some(text)
    }
}

/// Error from [`MazeGrid::new()`] when the requested size cannot be stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq, displaydoc::Display)]
#[displaydoc("maze size {size:?} is too large to be stored")]
pub struct MazeSizeError {
    size: GridSize,
}

impl core::error::Error for MazeSizeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_is_solid() {
        let grid = MazeGrid::new([4, 3, 5]).unwrap();
        assert_eq!(grid.volume(), 60);
        assert_eq!(grid.count(CellState::Solid), 60);
        assert_eq!(grid.count(CellState::Void), 0);
    }

    #[test]
    fn too_large() {
        let error = MazeGrid::new([u32::MAX, 1, 1]).unwrap_err();
        assert!(error.to_string().contains("too large"), "{error}");
    }

    #[test]
    fn set_out_of_bounds_is_ignored() {
        let mut grid = MazeGrid::new([3, 3, 3]).unwrap();
        assert_eq!(grid.set(Cube::new(3, 0, 0), CellState::Void), None);
        assert_eq!(grid.set(Cube::new(-1, 0, 0), CellState::Void), None);
        assert_eq!(
            grid.set(Cube::new(1, 1, 1), CellState::Void),
            Some(CellState::Solid)
        );
        assert_eq!(grid.count(CellState::Void), 1);
        assert!(!grid.is_void(Cube::new(9, 9, 9)));
        assert!(!grid.is_solid_like(Cube::new(9, 9, 9)));
    }

    #[test]
    fn shell_and_interior() {
        let grid = MazeGrid::new([3, 3, 3]).unwrap();
        let interior: alloc::vec::Vec<Cube> = grid
            .iter()
            .map(|(cube, _)| cube)
            .filter(|&cube| grid.is_interior(cube))
            .collect();
        assert_eq!(interior, vec![Cube::new(1, 1, 1)]);
        assert!(grid.is_on_shell(Cube::new(0, 1, 1)));
        assert!(!grid.is_on_shell(Cube::new(3, 1, 1)));

        let flat = MazeGrid::new([5, 2, 5]).unwrap();
        assert_eq!(flat.interior(), None);
        assert!(flat.is_on_shell(Cube::new(2, 1, 2)));
    }

    #[test]
    fn layer_out_of_range() {
        let grid = MazeGrid::new([3, 3, 3]).unwrap();
        assert_eq!(grid.layer_string(3), None);
        assert_eq!(grid.layer_string(-1), None);
        assert_eq!(grid.layer_string(2).unwrap(), "###\n###\n###\n");
    }
}
