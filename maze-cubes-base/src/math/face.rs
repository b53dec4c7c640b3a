//! The six directions a maze can be walked in.

use core::ops;

use euclid::Vector3D;
use num_traits::{One, Zero};

use crate::math::{Axis, GridCoordinate, GridVector};

/// A face of a cube, or equivalently the direction from a cube to one of its six
/// face-adjacent neighbors.
///
/// Connectivity in a maze only ever considers these six steps; diagonal neighbors
/// are never adjacent.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face6 {
    /// Toward −X.
    NX,
    /// Toward −Y; down one layer.
    NY,
    /// Toward −Z.
    NZ,
    /// Toward +X.
    PX,
    /// Toward +Y; up one layer.
    PY,
    /// Toward +Z.
    PZ,
}

impl Face6 {
    /// Every face, negative faces first.
    pub const ALL: [Face6; 6] = [
        Face6::NX,
        Face6::NY,
        Face6::NZ,
        Face6::PX,
        Face6::PY,
        Face6::PZ,
    ];

    /// The axis this face is perpendicular to.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::NX | Self::PX => Axis::X,
            Self::NY | Self::PY => Axis::Y,
            Self::NZ | Self::PZ => Axis::Z,
        }
    }

    /// The face on the other side of the cube.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Face6 {
        match self {
            Face6::NX => Face6::PX,
            Face6::NY => Face6::PY,
            Face6::NZ => Face6::PZ,
            Face6::PX => Face6::NX,
            Face6::PY => Face6::NY,
            Face6::PZ => Face6::NZ,
        }
    }

    /// The unit vector pointing out of this face, in any numeric type and unit.
    #[inline]
    #[must_use]
    pub fn normal_vector<S, U>(self) -> Vector3D<S, U>
    where
        S: Zero + One + ops::Neg<Output = S>,
    {
        let (o, i) = (S::zero, S::one);
        match self {
            Face6::NX => Vector3D::new(-i(), o(), o()),
            Face6::NY => Vector3D::new(o(), -i(), o()),
            Face6::NZ => Vector3D::new(o(), o(), -i()),
            Face6::PX => Vector3D::new(i(), o(), o()),
            Face6::PY => Vector3D::new(o(), i(), o()),
            Face6::PZ => Vector3D::new(o(), o(), i()),
        }
    }

    /// A step of `distance` cells in this direction.
    ///
    /// ```
    /// # extern crate maze_cubes_base as maze_cubes;
    /// use maze_cubes::math::{Face6, GridVector};
    ///
    /// assert_eq!(Face6::NY.step(2), GridVector::new(0, -2, 0));
    /// assert_eq!(Face6::PZ.step(2), GridVector::new(0, 0, 2));
    /// ```
    #[inline]
    #[must_use]
    pub fn step(self, distance: GridCoordinate) -> GridVector {
        self.normal_vector::<GridCoordinate, _>() * distance
    }
}

impl ops::Neg for Face6 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhaust::Exhaust as _;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_is_exhaustive() {
        assert_eq!(Face6::exhaust().collect::<alloc::vec::Vec<_>>(), Face6::ALL);
    }

    #[test]
    fn opposite_negates_normal() {
        for face in Face6::ALL {
            let normal: GridVector = face.normal_vector();
            assert_eq!(face.opposite().normal_vector(), -normal);
            assert_eq!(-face, face.opposite());
            assert_eq!(face.opposite().axis(), face.axis());
        }
    }

    #[test]
    fn normal_is_unit_along_axis() {
        for face in Face6::ALL {
            let normal: GridVector = face.normal_vector();
            let along: [GridCoordinate; 3] = normal.to_array();
            assert_eq!(along[face.axis().index()].abs(), 1);
            assert_eq!(along.iter().map(|c| c.abs()).sum::<GridCoordinate>(), 1);
        }
    }
}
