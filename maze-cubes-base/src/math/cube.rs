use core::{fmt, ops};

// Polyfill for `f64::floor()` without std.
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::FloatCore as _;

use crate::math::{Face6, FreeCoordinate, FreePoint, GridCoordinate, GridPoint, GridVector};

/// One cell of the integer grid: the unit cube whose most negative corner is `(x, y, z)`.
///
/// A maze of size `width × height × depth` is made of the cubes `(0, 0, 0)` through
/// `(width - 1, height - 1, depth - 1)`. A cube contains the points whose coordinates
/// are at least its own and less than its own plus one, on every axis.
///
/// `Cube` has the same layout as `[i32; 3]` and implements [`bytemuck::Pod`], so buffers
/// of cubes can be reinterpreted without copying.
#[derive(Clone, Copy, Eq, Hash, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs, clippy::exhaustive_structs)]
#[repr(C)]
pub struct Cube {
    pub x: GridCoordinate,
    pub y: GridCoordinate,
    pub z: GridCoordinate,
}

impl Cube {
    /// The cube whose lower corner is the origin; the first cell of every maze.
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    #[allow(missing_docs)]
    #[inline]
    pub const fn new(x: GridCoordinate, y: GridCoordinate, z: GridCoordinate) -> Self {
        Self { x, y, z }
    }

    /// Finds the cube that `point` lies in.
    ///
    /// Returns [`None`] if any coordinate is NaN or would not fit in a [`GridCoordinate`]
    /// after rounding down.
    ///
    /// ```
    /// # extern crate maze_cubes_base as maze_cubes;
    /// use maze_cubes::math::{Cube, FreePoint};
    ///
    /// assert_eq!(Cube::containing(FreePoint::new(0.5, 2.0, -0.25)), Some(Cube::new(0, 2, -1)));
    /// assert_eq!(Cube::containing(FreePoint::new(0.5, f64::NAN, 0.0)), None);
    /// ```
    #[inline]
    pub fn containing(point: FreePoint) -> Option<Self> {
        Some(Self {
            x: floor_to_grid(point.x)?,
            y: floor_to_grid(point.y)?,
            z: floor_to_grid(point.z)?,
        })
    }

    /// The point at the middle of this cube.
    #[inline]
    pub fn center(self) -> FreePoint {
        FreePoint::new(
            FreeCoordinate::from(self.x) + 0.5,
            FreeCoordinate::from(self.y) + 0.5,
            FreeCoordinate::from(self.z) + 0.5,
        )
    }

    /// Offsets the cube by `offset`, or returns [`None`] on overflow.
    #[must_use]
    #[inline]
    pub fn checked_add(self, offset: GridVector) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(offset.x)?,
            y: self.y.checked_add(offset.y)?,
            z: self.z.checked_add(offset.z)?,
        })
    }
}

/// Rounds down and converts, if the result is representable.
#[inline]
fn floor_to_grid(value: FreeCoordinate) -> Option<GridCoordinate> {
    let floored = value.floor();
    // Written so that NaN fails the test.
    if floored >= FreeCoordinate::from(GridCoordinate::MIN)
        && floored <= FreeCoordinate::from(GridCoordinate::MAX)
    {
        Some(floored as GridCoordinate)
    } else {
        None
    }
}

/// Formats as a signed coordinate triple, such as `(+1, -2, +0)`.
impl fmt::Debug for Cube {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { x, y, z } = *self;
        write!(f, "({x:+}, {y:+}, {z:+})")
    }
}

/// The neighbouring cube across the given face.
///
/// Panics on overflow if overflow checks are enabled; use [`Cube::checked_add()`] where
/// the cube may be at the edge of the coordinate range.
impl ops::Add<Face6> for Cube {
    type Output = Self;
    #[inline]
    fn add(self, face: Face6) -> Self {
        let v: GridVector = face.normal_vector();
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl From<Cube> for [GridCoordinate; 3] {
    #[inline]
    fn from(cube: Cube) -> Self {
        [cube.x, cube.y, cube.z]
    }
}

impl From<[GridCoordinate; 3]> for Cube {
    #[inline]
    fn from([x, y, z]: [GridCoordinate; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Cube> for GridPoint {
    #[inline]
    fn from(cube: Cube) -> Self {
        GridPoint::new(cube.x, cube.y, cube.z)
    }
}

impl From<GridPoint> for Cube {
    #[inline]
    fn from(point: GridPoint) -> Self {
        Self::new(point.x, point.y, point.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::point3;

    #[test]
    fn containing_rounds_down() {
        assert_eq!(
            Cube::containing(point3(2.999, -0.001, 7.0)),
            Some(Cube::new(2, -1, 7))
        );
    }

    #[test]
    fn containing_out_of_range() {
        for bad in [
            FreeCoordinate::INFINITY,
            -FreeCoordinate::INFINITY,
            FreeCoordinate::NAN,
            1e10,
            -1e10,
        ] {
            assert_eq!(Cube::containing(point3(0.0, bad, 0.0)), None, "{bad}");
        }
        assert_eq!(
            Cube::containing(point3(-2147483648.0, 2147483647.5, 0.0)),
            Some(Cube::new(GridCoordinate::MIN, GridCoordinate::MAX, 0))
        );
    }

    #[test]
    fn center_round_trip() {
        for cube in [Cube::ORIGIN, Cube::new(3, -1, 7), Cube::new(-9, 0, 12)] {
            assert_eq!(Cube::containing(cube.center()), Some(cube));
        }
    }

    #[test]
    fn neighbors() {
        let cube = Cube::new(4, 4, 4);
        assert_eq!(cube + Face6::NY, Cube::new(4, 3, 4));
        assert_eq!(cube + Face6::PZ, Cube::new(4, 4, 5));
        assert_eq!(
            Cube::new(GridCoordinate::MAX, 0, 0).checked_add(Face6::PX.normal_vector()),
            None
        );
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Cube::new(1, -2, 0)), "(+1, -2, +0)");
    }
}
