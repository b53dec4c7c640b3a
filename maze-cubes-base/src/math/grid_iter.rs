use core::iter::FusedIterator;

use crate::math::{Cube, GridAab};

/// Iterator over the cubes of a [`GridAab`], created by [`GridAab::interior_iter()`].
///
/// Cubes are produced in Z-major order: Z changes fastest and X slowest, matching the
/// storage order of [`Vol`](crate::math::Vol).
#[derive(Clone, Debug)]
pub struct GridIter {
    bounds: GridAab,
    /// The cube to produce next; [`None`] once exhausted.
    next: Option<Cube>,
}

impl GridIter {
    #[inline]
    pub(in crate::math) fn new(bounds: GridAab) -> Self {
        Self {
            bounds,
            next: (!bounds.is_empty()).then(|| bounds.lower_bounds().into()),
        }
    }

    /// The cube after `cube`, or [`None`] if `cube` is the last one.
    fn successor(&self, cube: Cube) -> Option<Cube> {
        let lower = self.bounds.lower_bounds();
        let upper = self.bounds.upper_bounds();
        // All increments stay at or below an exclusive upper bound, so cannot overflow.
        if cube.z + 1 < upper.z {
            Some(Cube::new(cube.x, cube.y, cube.z + 1))
        } else if cube.y + 1 < upper.y {
            Some(Cube::new(cube.x, cube.y + 1, lower.z))
        } else if cube.x + 1 < upper.x {
            Some(Cube::new(cube.x + 1, lower.y, lower.z))
        } else {
            None
        }
    }

    /// Number of cubes not yet produced, if it fits in a [`usize`].
    fn remaining(&self) -> Option<usize> {
        let Some(cube) = self.next else {
            return Some(0);
        };
        let upper = self.bounds.upper_bounds();
        let size = self.bounds.size();
        let span = |low: i32, high: i32| usize::try_from(high.abs_diff(low)).ok();
        let height = usize::try_from(size.height).ok()?;
        let depth = usize::try_from(size.depth).ok()?;
        // Whole X slabs after this one, then whole Z rows after this one, then this row.
        span(cube.x + 1, upper.x)?
            .checked_mul(height)?
            .checked_add(span(cube.y + 1, upper.y)?)?
            .checked_mul(depth)?
            .checked_add(span(cube.z, upper.z)?)
    }
}

impl Iterator for GridIter {
    type Item = Cube;

    #[inline]
    fn next(&mut self) -> Option<Cube> {
        let cube = self.next?;
        self.next = self.successor(cube);
        Some(cube)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for GridIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::GridPoint;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    fn aab(lower: [i32; 3], size: [u32; 3]) -> GridAab {
        GridAab::checked_from_lower_size(GridPoint::from(lower), size.into()).unwrap()
    }

    #[test]
    fn order_is_z_fastest() {
        let cubes: Vec<[i32; 3]> = aab([1, -1, 5], [2, 2, 2]).interior_iter().map(<[i32; 3]>::from).collect();
        assert_eq!(
            cubes,
            vec![
                [1, -1, 5],
                [1, -1, 6],
                [1, 0, 5],
                [1, 0, 6],
                [2, -1, 5],
                [2, -1, 6],
                [2, 0, 5],
                [2, 0, 6],
            ]
        );
    }

    #[test]
    fn size_hint_counts_down() {
        let mut iter = aab([0, 0, 0], [3, 4, 5]).interior_iter();
        for remaining in (1..=60).rev() {
            assert_eq!(iter.size_hint(), (remaining, Some(remaining)));
            assert!(iter.next().is_some());
        }
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn empty_box_yields_nothing() {
        for size in [[0, 3, 3], [3, 0, 3], [3, 3, 0]] {
            assert_eq!(aab([4, 4, 4], size).interior_iter().count(), 0, "{size:?}");
        }
    }
}
