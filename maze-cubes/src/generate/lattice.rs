//! The odd-coordinate lattice that corridors are carved along.
//!
//! A lattice cell has all three coordinates odd and lies strictly inside the grid.
//! Neighbouring lattice cells are two apart on one axis; the even cell between them is
//! the wall that a carve step opens.

use rand::Rng;

use crate::math::{Cube, Face6, GridCoordinate, GridSize, GridSizeCoord};

/// Distance between neighbouring lattice cells.
pub(crate) const LATTICE_STEP: GridCoordinate = 2;

/// Directions of carve steps, in the order neighbours are examined.
pub const CARVE_DIRECTIONS: [Face6; 6] = [
    Face6::PX,
    Face6::NX,
    Face6::PY,
    Face6::NY,
    Face6::PZ,
    Face6::NZ,
];

/// Horizontal directions, in the order the exit search examines them.
pub const SIDE_DIRECTIONS: [Face6; 4] = [Face6::PX, Face6::NX, Face6::PZ, Face6::NZ];

/// Returns whether `cube` is a lattice cell of a grid of the given size.
///
/// ```
/// use maze_cubes::generate::is_lattice_cell;
/// use maze_cubes::math::{Cube, GridSize};
///
/// let size = GridSize::new(7, 5, 6);
/// assert!(is_lattice_cell(size, Cube::new(5, 3, 3)));
/// assert!(!is_lattice_cell(size, Cube::new(2, 3, 3))); // even
/// assert!(!is_lattice_cell(size, Cube::new(1, 3, 5))); // z = 5 is on the shell
/// ```
pub fn is_lattice_cell(size: GridSize, cube: Cube) -> bool {
    fn axis_ok(coordinate: GridCoordinate, size: GridSizeCoord) -> bool {
        coordinate > 0 && i64::from(coordinate) < i64::from(size) - 1 && coordinate & 1 == 1
    }
    axis_ok(cube.x, size.width) && axis_ok(cube.y, size.height) && axis_ok(cube.z, size.depth)
}

/// The lattice cell two steps from `cube` in `direction`, or [`None`] if it is not a
/// lattice cell of a grid of `size`.
pub(crate) fn lattice_neighbor(size: GridSize, cube: Cube, direction: Face6) -> Option<Cube> {
    let target = cube.checked_add(direction.step(LATTICE_STEP))?;
    is_lattice_cell(size, target).then_some(target)
}

/// Picks a uniformly random odd coordinate in `1 ..= size - 2`.
///
/// Sizes below 3 still produce `1`; callers clamp sizes before generating.
pub(crate) fn random_odd<R: Rng>(rng: &mut R, size: GridSizeCoord) -> GridCoordinate {
    let choices = (size.saturating_sub(1) / 2).max(1);
    let index = rng.random_range(0..choices);
    // Grid sizes fit in a GridCoordinate, so this cannot overflow.
    1 + 2 * index.cast_signed()
}

/// Picks a uniformly random lattice cell of a grid of `size`.
pub(crate) fn random_lattice_cell<R: Rng>(rng: &mut R, size: GridSize) -> Cube {
    let x = random_odd(rng, size.width);
    let y = random_odd(rng, size.height);
    let z = random_odd(rng, size.depth);
    Cube::new(x, y, z)
}

/// Adjusts `value` to an odd coordinate in `1 ..= size - 2`, preferring to round up.
///
/// If the range contains no odd number other than by leaving it, the clamped value is
/// returned as is.
///
/// ```
/// use maze_cubes::generate::ensure_odd_interior;
///
/// assert_eq!(ensure_odd_interior(2, 5), 3);
/// assert_eq!(ensure_odd_interior(3, 5), 3);
/// assert_eq!(ensure_odd_interior(4, 6), 3);
/// assert_eq!(ensure_odd_interior(0, 3), 1);
/// ```
pub fn ensure_odd_interior(value: GridCoordinate, size: GridSizeCoord) -> GridCoordinate {
    let max = GridCoordinate::try_from(size)
        .unwrap_or(GridCoordinate::MAX)
        .saturating_sub(2)
        .max(1);
    let clamp = |v: GridCoordinate| v.clamp(1, max);

    let mut value = clamp(value);
    if value & 1 == 0 {
        value = clamp(value.saturating_add(1));
        if value & 1 == 0 {
            value = clamp(value - 1);
        }
    }
    value
}

/// The coordinate the fallback corridor and fallback exit use on an axis of `size`:
/// the middle, adjusted to an odd interior value.
pub(crate) fn middle_odd(size: GridSizeCoord) -> GridCoordinate {
    let half = GridCoordinate::try_from(size / 2).unwrap_or(GridCoordinate::MAX);
    ensure_odd_interior(half, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;
    use rand_xoshiro::Xoshiro256Plus;
    use rstest::rstest;

    #[rstest]
    #[case(3, &[1])]
    #[case(4, &[1])]
    #[case(5, &[1, 3])]
    #[case(6, &[1, 3])]
    #[case(9, &[1, 3, 5, 7])]
    fn random_odd_covers_interior(#[case] size: GridSizeCoord, #[case] expected: &[GridCoordinate]) {
        let mut rng = Xoshiro256Plus::seed_from_u64(17);
        let mut seen: alloc::vec::Vec<GridCoordinate> =
            (0..200).map(|_| random_odd(&mut rng, size)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen, expected);
    }

    #[test]
    fn random_lattice_cell_is_lattice() {
        let mut rng = Xoshiro256Plus::seed_from_u64(3);
        let size = GridSize::new(8, 5, 11);
        for _ in 0..100 {
            assert!(is_lattice_cell(size, random_lattice_cell(&mut rng, size)));
        }
    }

    #[rstest]
    #[case(3, 1)]
    #[case(4, 1)]
    #[case(5, 3)]
    #[case(6, 3)]
    #[case(10, 5)]
    #[case(11, 5)]
    #[case(12, 7)]
    fn middle_odd_values(#[case] size: GridSizeCoord, #[case] expected: GridCoordinate) {
        let value = middle_odd(size);
        assert_eq!(value, expected);
        assert!(value >= 1 && i64::from(value) <= i64::from(size) - 2);
    }

    #[test]
    fn lattice_neighbor_stays_inside() {
        let size = GridSize::new(5, 5, 5);
        assert_eq!(
            lattice_neighbor(size, Cube::new(1, 1, 1), Face6::PX),
            Some(Cube::new(3, 1, 1))
        );
        assert_eq!(lattice_neighbor(size, Cube::new(3, 1, 1), Face6::PX), None);
        assert_eq!(lattice_neighbor(size, Cube::new(1, 1, 1), Face6::NY), None);
    }

    #[test]
    fn direction_tables() {
        assert!(SIDE_DIRECTIONS.iter().all(|face| face.axis().is_horizontal()));
        assert_eq!(CARVE_DIRECTIONS.len(), 6);
    }
}
