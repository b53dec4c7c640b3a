use alloc::vec::Vec;

use crate::math::Cube;

/// The cells carved to [`Void`](crate::CellState::Void) during one generation attempt,
/// in the order they were carved.
///
/// Entries are only ever appended; the set is emptied as a whole when the next attempt
/// starts. Loop injection samples anchors from it and the exit carver searches it for
/// cells next to the outer shell.
///
/// Wall cells between lattice cells are carved too but are not recorded here.
#[derive(Clone, Debug, Default)]
pub struct CarvedSet {
    cells: Vec<Cube>,
}

impl CarvedSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a carved cell.
    #[inline]
    pub fn push(&mut self, cube: Cube) {
        self.cells.push(cube);
    }

    /// Number of recorded cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether no cells have been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the `index`th recorded cell.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Cube> {
        self.cells.get(index).copied()
    }

    /// Iterates over the recorded cells in order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Cube> {
        self.cells.iter()
    }

    /// The recorded cells in order.
    #[inline]
    pub fn as_slice(&self) -> &[Cube] {
        &self.cells
    }

    /// Forgets every recorded cell, keeping the allocation for the next attempt.
    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }
}

impl<'a> IntoIterator for &'a CarvedSet {
    type Item = &'a Cube;
    type IntoIter = core::slice::Iter<'a, Cube>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
