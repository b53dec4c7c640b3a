use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::{Rng, SeedableRng as _};
use rand_xoshiro::Xoshiro256Plus;

use crate::generate::exit::fallback_exit;
use crate::generate::{
    CarveWalker, CarvedSet, ConnectivityCheck, ExitCarver, FloodFillValidator, LoopInjector,
    ValidationFailure,
};
use crate::math::{Cube, GridSize};
use crate::{CellState, MazeGrid};

/// Number of attempts [`MazeBuilder`] makes before falling back to a straight corridor.
pub const MAX_ATTEMPTS: u32 = 6;

/// One cell in this many is turned [`Ethereal`](CellState::Ethereal) when filling.
const CELLS_PER_ETHEREAL: usize = 50;

/// Smallest size, on every axis, that generation works with.
const MIN_SIZE: u32 = 3;

/// Generates mazes.
///
/// A builder owns a random source and a [`ConnectivityCheck`], plus scratch buffers that
/// are reused by every generation it performs. Each call to [`generate()`](Self::generate)
/// runs up to [`MAX_ATTEMPTS`] attempts of the fill → carve → loops → exit → validate
/// pipeline and falls back to a straight corridor if none of them is accepted.
///
/// ```
/// use maze_cubes::{MazeBuilder, Outcome};
///
/// let mut builder = MazeBuilder::from_seed(7);
/// let maze = builder.generate([9, 5, 9]).unwrap();
/// assert_eq!(maze.report.outcome, Outcome::Connected);
/// assert_eq!(maze.report.attempts, 1);
///
/// // Unusable sizes are rejected rather than generated.
/// assert!(builder.generate([9, 0, 9]).is_none());
/// ```
#[derive(Debug)]
pub struct MazeBuilder<R, V = FloodFillValidator> {
    rng: R,
    validator: V,
    walker: CarveWalker,
    loops: LoopInjector,
    exit: ExitCarver,
    carved: CarvedSet,
    ethereal_candidates: Vec<Cube>,
    state: BuildState,
}

/// The stage a [`MazeBuilder`] is in, or last finished in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum BuildState {
    /// Nothing has been generated yet.
    Idle,
    /// Filling the grid with solid and ethereal cells.
    Filling,
    /// Carving the spanning tree.
    Carving,
    /// Adding extra connections.
    LoopInjecting,
    /// Opening the exit.
    ExitCarving,
    /// Checking connectivity.
    Validating,
    /// The last attempt was accepted.
    Done,
    /// The last attempt was rejected and another will be made.
    Retry,
    /// Every attempt was rejected and the fallback corridor was written.
    FallbackDone,
}

/// How a generation ended.
///
/// Converts to a lowercase name with [`<&str>::from()`](From).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum Outcome {
    /// An attempt passed the connectivity check.
    Connected,
    /// Every attempt failed and the grid holds the fallback corridor.
    Fallback,
}

/// What happened during one call to [`MazeBuilder::generate()`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct GenerationReport {
    /// Size of the generated grid, after clamping.
    pub size: GridSize,
    /// Number of attempts made, including the accepted one. Does not count the fallback.
    pub attempts: u32,
    /// Whether the result came from an accepted attempt or from the fallback.
    pub outcome: Outcome,
    /// The exit cell.
    pub exit: Cube,
    /// Number of cells recorded as carved in the final layout (for the fallback,
    /// the corridor length including the exit).
    pub carved_cells: usize,
    /// Number of extra connections added in the final layout.
    pub loops_added: usize,
    /// The reason the most recent rejected attempt was rejected, if any was.
    pub last_failure: Option<ValidationFailure>,
}

/// A generated grid together with its [`GenerationReport`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[expect(clippy::exhaustive_structs)]
pub struct GeneratedMaze {
    /// The finished grid.
    pub grid: MazeGrid,
    /// How it was produced.
    pub report: GenerationReport,
}

/// Statistics from an accepted attempt.
struct AttemptStats {
    exit: Cube,
    carved_cells: usize,
    loops_added: usize,
}

impl MazeBuilder<Xoshiro256Plus> {
    /// Creates a builder whose random source is seeded with `seed`.
    ///
    /// Builders with equal seeds generate equal mazes when given equal sizes.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Xoshiro256Plus::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeBuilder<R> {
    /// Creates a builder using `rng` as its random source and the default
    /// [`FloodFillValidator`].
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            validator: FloodFillValidator::new(),
            walker: CarveWalker::new(),
            loops: LoopInjector::new(),
            exit: ExitCarver::new(),
            carved: CarvedSet::new(),
            ethereal_candidates: Vec::new(),
            state: BuildState::Idle,
        }
    }
}

impl<R: Rng, V: ConnectivityCheck> MazeBuilder<R, V> {
    /// Replaces the connectivity check used to accept or reject attempts.
    pub fn with_validator<V2: ConnectivityCheck>(self, validator: V2) -> MazeBuilder<R, V2> {
        let Self {
            rng,
            validator: _,
            walker,
            loops,
            exit,
            carved,
            ethereal_candidates,
            state,
        } = self;
        MazeBuilder {
            rng,
            validator,
            walker,
            loops,
            exit,
            carved,
            ethereal_candidates,
            state,
        }
    }

    /// The stage the builder is in, or the last one it finished in.
    pub fn state(&self) -> BuildState {
        self.state
    }

    /// The builder's random source, so that sampling from the finished maze can continue
    /// the same deterministic sequence.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Generates a maze of the given size.
    ///
    /// Each axis is raised to at least 3. Returns [`None`], without generating anything,
    /// if any axis is 0 or the grid is too large to allocate.
    pub fn generate(&mut self, size: impl Into<GridSize>) -> Option<GeneratedMaze> {
        let requested: GridSize = size.into();
        if requested.is_empty() {
            log::debug!("not generating a maze of degenerate size {requested:?}");
            return None;
        }
        let size = requested.max(GridSize::splat(MIN_SIZE));
        let mut grid = match MazeGrid::new(size) {
            Ok(grid) => grid,
            Err(error) => {
                log::warn!("{error}");
                return None;
            }
        };
        let report = self.generate_into(&mut grid)?;
        Some(GeneratedMaze { grid, report })
    }

    /// Generates a maze filling the existing `grid`, reusing its allocation.
    ///
    /// Returns [`None`], leaving the grid untouched, if any axis of the grid is smaller
    /// than 3.
    pub fn generate_into(&mut self, grid: &mut MazeGrid) -> Option<GenerationReport> {
        let size = grid.size();
        if size.width < MIN_SIZE || size.height < MIN_SIZE || size.depth < MIN_SIZE {
            return None;
        }

        let mut last_failure = None;
        for attempt in 1..=MAX_ATTEMPTS {
            self.fill_with_solids(grid);
            match self.attempt(grid) {
                Ok(stats) => {
                    self.state = BuildState::Done;
                    return Some(GenerationReport {
                        size,
                        attempts: attempt,
                        outcome: Outcome::Connected,
                        exit: stats.exit,
                        carved_cells: stats.carved_cells,
                        loops_added: stats.loops_added,
                        last_failure,
                    });
                }
                Err(failure) => {
                    log::debug!("maze attempt {attempt} of {MAX_ATTEMPTS} rejected: {failure}");
                    self.state = BuildState::Retry;
                    last_failure = Some(failure);
                }
            }
        }

        log::warn!(
            "Maze generation failed to converge to a connected 3D layout. \
                Falling back to a simple corridor."
        );
        let exit = self.fallback(grid);
        self.state = BuildState::FallbackDone;
        Some(GenerationReport {
            size,
            attempts: MAX_ATTEMPTS,
            outcome: Outcome::Fallback,
            exit,
            carved_cells: exit.x.unsigned_abs() as usize,
            loops_added: 0,
            last_failure,
        })
    }

    /// One pass of carve → loops → exit → validate over a freshly filled grid.
    fn attempt(&mut self, grid: &mut MazeGrid) -> Result<AttemptStats, ValidationFailure> {
        self.carved.clear();

        self.state = BuildState::Carving;
        self.walker.carve(grid, &mut self.rng, &mut self.carved);
        let tree_cells = self.carved.len();

        self.state = BuildState::LoopInjecting;
        let loops_added = self.loops.inject(grid, &mut self.rng, &mut self.carved);

        self.state = BuildState::ExitCarving;
        let exit = self.exit.carve(grid, &mut self.rng, &mut self.carved);
        log::trace!(
            "carved {tree_cells} lattice cells, added {loops_added} loops, exit at {exit:?}"
        );

        self.state = BuildState::Validating;
        let reachable = self.validator.check(grid, exit)?;
        log::trace!("attempt accepted with {reachable} reachable void cells");

        Ok(AttemptStats {
            exit,
            carved_cells: self.carved.len(),
            loops_added,
        })
    }

    /// Sets every cell solid, then turns a random selection of interior cells ethereal.
    ///
    /// The selection is a partial Fisher–Yates shuffle of the interior cells, taking as
    /// many as the quota allows or as exist.
    fn fill_with_solids(&mut self, grid: &mut MazeGrid) {
        self.state = BuildState::Filling;
        grid.fill(CellState::Solid);

        let quota = ethereal_quota(grid.volume());
        self.ethereal_candidates.clear();
        if let Some(interior) = grid.interior() {
            self.ethereal_candidates.extend(interior.interior_iter());
        }

        let candidates = &mut self.ethereal_candidates;
        let place = quota.min(candidates.len());
        for i in 0..place {
            let j = self.rng.random_range(i..candidates.len());
            candidates.swap(i, j);
            let cube = candidates[i];
            if grid.get(cube) == Some(CellState::Solid) {
                grid.set(cube, CellState::Ethereal);
            }
        }
    }

    /// Writes the fallback layout: a straight corridor along X through the middle of the
    /// grid, open at the +X face. Returns the exit.
    fn fallback(&mut self, grid: &mut MazeGrid) -> Cube {
        self.fill_with_solids(grid);
        let exit = fallback_exit(grid.size());
        for x in 1..=exit.x {
            grid.set(Cube::new(x, exit.y, exit.z), CellState::Void);
        }
        exit
    }
}

/// Number of ethereal cells for a grid of `volume` cells: 2% of it, rounded to the
/// nearest integer with ties to even.
fn ethereal_quota(volume: usize) -> usize {
    let quotient = volume / CELLS_PER_ETHEREAL;
    let twice_remainder = (volume % CELLS_PER_ETHEREAL) * 2;
    match twice_remainder.cmp(&CELLS_PER_ETHEREAL) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + (quotient & 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Rejects everything and counts how often it was asked.
    #[derive(Debug, Default)]
    struct AlwaysFail {
        calls: u32,
    }

    impl ConnectivityCheck for AlwaysFail {
        fn check(&mut self, _: &MazeGrid, exit: Cube) -> Result<usize, ValidationFailure> {
            self.calls += 1;
            Err(ValidationFailure::ExitOutOfBounds { exit })
        }
    }

    /// Rejects the first `failures` attempts, then defers to a flood fill.
    /// Records the grid's void and ethereal counts at every call.
    #[derive(Debug, Default)]
    struct FailFirst {
        failures: usize,
        voids_seen: Vec<usize>,
        ethereals_seen: Vec<usize>,
        flood_fill: FloodFillValidator,
    }

    impl ConnectivityCheck for FailFirst {
        fn check(&mut self, grid: &MazeGrid, exit: Cube) -> Result<usize, ValidationFailure> {
            self.voids_seen.push(grid.count(CellState::Void));
            self.ethereals_seen.push(grid.count(CellState::Ethereal));
            if self.voids_seen.len() <= self.failures {
                Err(ValidationFailure::Unreachable {
                    visited: 0,
                    total: self.voids_seen.len(),
                })
            } else {
                self.flood_fill.check(grid, exit)
            }
        }
    }

    #[test]
    fn ethereal_quota_and_placement() {
        let mut builder = MazeBuilder::from_seed(0);
        let mut grid = MazeGrid::new([10, 10, 10]).unwrap();
        builder.fill_with_solids(&mut grid);

        assert_eq!(grid.count(CellState::Ethereal), 20);
        assert_eq!(grid.count(CellState::Void), 0);
        for (cube, state) in grid.iter() {
            if state.is_ethereal() {
                assert!(grid.is_interior(cube), "{cube:?}");
            }
        }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(27, 1)]
    #[case(60, 1)]
    #[case(75, 2)]
    #[case(125, 2)]
    #[case(175, 4)]
    #[case(1000, 20)]
    fn ethereal_quota_rounds_ties_to_even(#[case] volume: usize, #[case] expected: usize) {
        assert_eq!(ethereal_quota(volume), expected);
    }

    #[test]
    fn ethereal_quota_at_exact_half() {
        // 125 cells give 2.5, which rounds to 2.
        let mut builder = MazeBuilder::from_seed(4);
        let mut grid = MazeGrid::new([5, 5, 5]).unwrap();
        builder.fill_with_solids(&mut grid);
        assert_eq!(grid.count(CellState::Ethereal), 2);
    }

    #[test]
    fn ethereal_quota_limited_by_interior() {
        // 27 cells give a quota of round(0.54) = 1, and there is exactly 1 interior cell.
        let mut builder = MazeBuilder::from_seed(0);
        let mut grid = MazeGrid::new([3, 3, 3]).unwrap();
        builder.fill_with_solids(&mut grid);
        assert_eq!(grid.count(CellState::Ethereal), 1);
        assert_eq!(grid.get(Cube::new(1, 1, 1)), Some(CellState::Ethereal));
    }

    #[test]
    fn retry_bound_then_fallback() {
        let mut validator = AlwaysFail::default();
        let mut builder = MazeBuilder::from_seed(5).with_validator(&mut validator);
        let generated = builder.generate([10, 5, 5]).unwrap();
        assert_eq!(builder.state(), BuildState::FallbackDone);
        drop(builder);

        assert_eq!(validator.calls, MAX_ATTEMPTS);
        let report = generated.report;
        assert_eq!(report.attempts, MAX_ATTEMPTS);
        assert_eq!(report.outcome, Outcome::Fallback);
        assert_eq!(report.exit, Cube::new(9, 3, 3));
        assert_eq!(report.carved_cells, 9);
        assert!(matches!(
            report.last_failure,
            Some(ValidationFailure::ExitOutOfBounds { .. })
        ));

        let grid = &generated.grid;
        let voids: Vec<Cube> = grid
            .iter()
            .filter(|&(_, state)| state.is_void())
            .map(|(cube, _)| cube)
            .collect();
        let expected: Vec<Cube> = (1..=9).map(|x| Cube::new(x, 3, 3)).collect();
        assert_eq!(voids, expected);
        assert_eq!(FloodFillValidator::new().check(grid, report.exit), Ok(9));
    }

    #[test]
    fn rejected_attempts_then_accepted() {
        let mut validator = FailFirst {
            failures: 2,
            ..FailFirst::default()
        };
        let mut builder = MazeBuilder::from_seed(3).with_validator(&mut validator);
        let generated = builder.generate([9, 5, 9]).unwrap();
        assert_eq!(builder.state(), BuildState::Done);
        drop(builder);

        let report = &generated.report;
        assert_eq!(report.attempts, 3);
        assert_eq!(report.outcome, Outcome::Connected);
        assert_eq!(
            report.last_failure,
            Some(ValidationFailure::Unreachable {
                visited: 0,
                total: 2
            })
        );

        // Each attempt starts from a freshly filled grid: a 9×5×9 spanning tree has 32
        // lattice cells and 31 walls, plus the exit, every time. Leftovers from a
        // rejected attempt would make the count grow.
        assert_eq!(validator.voids_seen, vec![64, 64, 64]);
        assert_eq!(generated.grid.count(CellState::Void), 64);
        // The quota of round(405 × 0.02) = 8 is placed anew each time; carving may
        // overwrite some of them, but never more than were placed.
        assert_eq!(validator.ethereals_seen.len(), 3);
        assert!(
            validator.ethereals_seen.iter().all(|&n| n <= 8),
            "{:?}",
            validator.ethereals_seen
        );
    }

    #[test]
    fn degenerate_sizes() {
        let mut builder = MazeBuilder::from_seed(0);
        assert!(builder.generate([0, 5, 5]).is_none());
        assert_eq!(builder.state(), BuildState::Idle);

        let mut tiny = MazeGrid::new([2, 5, 5]).unwrap();
        let before = tiny.clone();
        assert!(builder.generate_into(&mut tiny).is_none());
        assert_eq!(tiny, before);
    }

    #[test]
    fn small_sizes_are_raised_to_three() {
        let generated = MazeBuilder::from_seed(0).generate([1, 2, 1]).unwrap();
        assert_eq!(generated.grid.size(), GridSize::new(3, 3, 3));
        assert_eq!(generated.report.outcome, Outcome::Connected);
        // The only lattice cell, and an exit next to it.
        assert!(generated.grid.is_void(Cube::new(1, 1, 1)));
        assert_eq!(generated.grid.count(CellState::Void), 2);
    }

    #[test]
    fn accepted_attempt_state() {
        let mut builder = MazeBuilder::from_seed(11);
        let generated = builder.generate([7, 7, 7]).unwrap();
        assert_eq!(builder.state(), BuildState::Done);
        assert_eq!(generated.report.last_failure, None);
        assert_eq!(generated.report.size, GridSize::new(7, 7, 7));
        assert_eq!(<&str>::from(generated.report.outcome), "connected");
    }
}
