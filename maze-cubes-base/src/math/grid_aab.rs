//! Axis-aligned boxes of cubes.

use core::fmt;
use core::ops::Range;

use crate::math::{Cube, GridCoordinate, GridIter, GridPoint, GridSize, GridSizeCoord};

/// An axis-aligned box made of whole cubes, described by its lower corner and size.
///
/// Every coordinate of the box, including the exclusive upper corner, is guaranteed to
/// fit in a [`GridCoordinate`]. A box may be empty (have zero size on some axis).
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridAab {
    lower: GridPoint,
    size: GridSize,
}

impl GridAab {
    /// Constructs a box from its lower corner and its size.
    ///
    /// Fails if the upper corner would not be representable.
    ///
    /// ```
    /// # extern crate maze_cubes_base as maze_cubes;
    /// use maze_cubes::math::{GridAab, GridPoint, GridSize};
    ///
    /// let aab = GridAab::checked_from_lower_size(GridPoint::new(1, 2, 3), GridSize::new(4, 5, 6))?;
    /// assert_eq!(aab.upper_bounds(), GridPoint::new(5, 7, 9));
    ///
    /// assert!(GridAab::checked_from_lower_size(GridPoint::new(0, 0, 0), GridSize::new(u32::MAX, 1, 1)).is_err());
    /// # Ok::<(), maze_cubes::math::GridOverflowError>(())
    /// ```
    #[inline]
    pub fn checked_from_lower_size(
        lower: GridPoint,
        size: GridSize,
    ) -> Result<Self, GridOverflowError> {
        let fits = |low: GridCoordinate, extent: GridSizeCoord| {
            GridCoordinate::try_from(extent)
                .ok()
                .and_then(|extent| low.checked_add(extent))
                .is_some()
        };
        if fits(lower.x, size.width) && fits(lower.y, size.height) && fits(lower.z, size.depth) {
            Ok(Self { lower, size })
        } else {
            Err(GridOverflowError { lower, size })
        }
    }

    /// The inclusive lower corner.
    #[inline]
    pub fn lower_bounds(&self) -> GridPoint {
        self.lower
    }

    /// The exclusive upper corner.
    #[inline]
    pub fn upper_bounds(&self) -> GridPoint {
        // Cannot overflow; checked at construction.
        GridPoint::new(
            self.lower.x + self.size.width.cast_signed(),
            self.lower.y + self.size.height.cast_signed(),
            self.lower.z + self.size.depth.cast_signed(),
        )
    }

    /// Size on each axis.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of cubes in the box, or [`None`] if that does not fit in a [`usize`].
    #[inline]
    pub fn volume(&self) -> Option<usize> {
        let GridSize { width, height, depth, .. } = self.size;
        usize::try_from(width)
            .ok()?
            .checked_mul(usize::try_from(height).ok()?)?
            .checked_mul(usize::try_from(depth).ok()?)
    }

    /// Whether the box contains no cubes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// The X coordinates of the cubes in the box.
    #[inline]
    pub fn x_range(&self) -> Range<GridCoordinate> {
        self.lower.x..self.upper_bounds().x
    }

    /// The Y coordinates of the cubes in the box, which in a maze are its layers.
    #[inline]
    pub fn y_range(&self) -> Range<GridCoordinate> {
        self.lower.y..self.upper_bounds().y
    }

    /// The Z coordinates of the cubes in the box.
    #[inline]
    pub fn z_range(&self) -> Range<GridCoordinate> {
        self.lower.z..self.upper_bounds().z
    }

    /// Whether `cube` is one of the cubes in the box.
    ///
    /// ```
    /// # extern crate maze_cubes_base as maze_cubes;
    /// use maze_cubes::math::{Cube, GridAab, GridPoint, GridSize};
    ///
    /// let aab = GridAab::checked_from_lower_size(GridPoint::new(0, 0, 0), GridSize::new(2, 2, 2))?;
    /// assert!(aab.contains_cube(Cube::new(1, 1, 1)));
    /// assert!(!aab.contains_cube(Cube::new(1, 2, 1)));
    /// # Ok::<(), maze_cubes::math::GridOverflowError>(())
    /// ```
    #[inline]
    pub fn contains_cube(&self, cube: Cube) -> bool {
        self.x_range().contains(&cube.x)
            && self.y_range().contains(&cube.y)
            && self.z_range().contains(&cube.z)
    }

    /// Removes `thickness` cubes from every face of the box.
    ///
    /// Returns [`None`] if the box is not large enough for that; a box of size exactly
    /// `2 * thickness` shrinks to an empty box.
    #[must_use]
    #[inline]
    pub fn shrink_uniform(&self, thickness: GridSizeCoord) -> Option<Self> {
        let both_sides = thickness.checked_mul(2)?;
        let delta = GridCoordinate::try_from(thickness).ok()?;
        let lower = GridPoint::new(
            self.lower.x.checked_add(delta)?,
            self.lower.y.checked_add(delta)?,
            self.lower.z.checked_add(delta)?,
        );
        let size = GridSize::new(
            self.size.width.checked_sub(both_sides)?,
            self.size.height.checked_sub(both_sides)?,
            self.size.depth.checked_sub(both_sides)?,
        );
        Some(Self { lower, size })
    }

    /// Iterates over every cube in the box, in the same order [`Vol`](crate::math::Vol)
    /// stores them.
    #[inline]
    pub fn interior_iter(self) -> GridIter {
        GridIter::new(self)
    }
}

impl fmt::Debug for GridAab {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let upper = self.upper_bounds();
        write!(
            f,
            "GridAab({:?}, {:?}, {:?})",
            self.lower.x..upper.x,
            self.lower.y..upper.y,
            self.lower.z..upper.z,
        )
    }
}

/// A [`GridAab`] was requested whose far corner does not fit in a [`GridCoordinate`].
#[derive(Clone, Debug, Eq, PartialEq, displaydoc::Display)]
#[displaydoc("box of size {size:?} at {lower:?} extends past the coordinate range")]
pub struct GridOverflowError {
    lower: GridPoint,
    size: GridSize,
}

impl core::error::Error for GridOverflowError {}
