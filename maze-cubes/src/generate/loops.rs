use rand::Rng;

use crate::generate::CarvedSet;
use crate::generate::lattice::{CARVE_DIRECTIONS, lattice_neighbor};
use crate::{CellState, MazeGrid};

/// Adds extra lattice connections after carving so that corridors contain cycles.
///
/// Each new connection joins a carved cell to a lattice neighbour that is still
/// solid-like, through a wall that is also still solid-like. Nothing already void is
/// touched, so injection can only add reachable space.
#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct LoopInjector {}

impl LoopInjector {
    /// Fewest carved cells for which loops are added at all.
    pub const MIN_CARVED: usize = 8;

    /// Creates a loop injector.
    pub fn new() -> Self {
        Self {}
    }

    /// How many anchors are tried for a carved set of `carved_count` cells:
    /// one per 24 cells, but at least 1 and at most one per 6 cells.
    ///
    /// Returns 0 below [`Self::MIN_CARVED`].
    pub fn loop_count(carved_count: usize) -> usize {
        if carved_count < Self::MIN_CARVED {
            0
        } else {
            (carved_count / 24).clamp(1, carved_count / 6)
        }
    }

    /// Picks [`Self::loop_count()`] random anchors from `carved` and, for each, opens the
    /// first direction (in [`CARVE_DIRECTIONS`] order) whose target and wall are both
    /// solid-like. Targets are appended to `carved`.
    ///
    /// Returns the number of connections actually added, which may be fewer than the
    /// number of anchors tried.
    pub fn inject(&self, grid: &mut MazeGrid, rng: &mut impl Rng, carved: &mut CarvedSet) -> usize {
        let size = grid.size();
        let mut added = 0;
        for _ in 0..Self::loop_count(carved.len()) {
            let Some(anchor) = carved.get(rng.random_range(0..carved.len())) else {
                continue;
            };
            for direction in CARVE_DIRECTIONS {
                let Some(target) = lattice_neighbor(size, anchor, direction) else {
                    continue;
                };
                let wall = anchor + direction;
                if grid.is_solid_like(target) && grid.is_solid_like(wall) {
                    grid.set(wall, CellState::Void);
                    grid.set(target, CellState::Void);
                    carved.push(target);
                    added += 1;
                    break;
                }
            }
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::CarveWalker;
    use crate::math::Cube;
    use rand::SeedableRng as _;
    use rand_xoshiro::Xoshiro256Plus;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(7, 0)]
    #[case(8, 1)]
    #[case(47, 1)]
    #[case(48, 2)]
    #[case(240, 10)]
    fn loop_count(#[case] carved: usize, #[case] expected: usize) {
        assert_eq!(LoopInjector::loop_count(carved), expected);
    }

    #[test]
    fn small_carved_set_is_untouched() {
        let mut grid = MazeGrid::new([5, 5, 5]).unwrap();
        let mut carved = CarvedSet::new();
        carved.push(Cube::new(1, 1, 1));
        grid.set(Cube::new(1, 1, 1), CellState::Void);
        let before = grid.clone();

        let added = LoopInjector::new().inject(
            &mut grid,
            &mut Xoshiro256Plus::seed_from_u64(0),
            &mut carved,
        );
        assert_eq!(added, 0);
        assert_eq!(grid, before);
        assert_eq!(carved.len(), 1);
    }

    /// After a complete spanning tree every lattice cell is already void, so the only
    /// possible connections are ones whose target is void; none qualify.
    #[test]
    fn complete_tree_has_no_solid_targets() {
        let mut rng = Xoshiro256Plus::seed_from_u64(8);
        let mut grid = MazeGrid::new([11, 5, 11]).unwrap();
        let mut carved = CarvedSet::new();
        CarveWalker::new().carve(&mut grid, &mut rng, &mut carved);
        let before = grid.clone();

        assert_eq!(LoopInjector::new().inject(&mut grid, &mut rng, &mut carved), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn opens_wall_and_target_when_solid() {
        // A partial layout: a straight run of lattice cells along x, with the rest solid.
        let mut grid = MazeGrid::new([9, 3, 5]).unwrap();
        let mut carved = CarvedSet::new();
        for x in 1..=7 {
            grid.set(Cube::new(x, 1, 1), CellState::Void);
        }
        for x in [1, 3, 5, 7] {
            carved.push(Cube::new(x, 1, 1));
        }
        for x in [1, 3, 5, 7] {
            carved.push(Cube::new(x, 1, 1));
        }
        let voids_before = grid.count(CellState::Void);

        let added = LoopInjector::new().inject(
            &mut grid,
            &mut Xoshiro256Plus::seed_from_u64(1),
            &mut carved,
        );

        // 8 entries: exactly one anchor; its only solid lattice neighbour is at z = 3.
        assert_eq!(added, 1);
        assert_eq!(carved.len(), 9);
        let target = carved.get(8).unwrap();
        assert_eq!(target.z, 3);
        assert!(grid.is_void(target));
        assert!(grid.is_void(Cube::new(target.x, 1, 2)));
        assert_eq!(grid.count(CellState::Void), voids_before + 2);
    }
}
