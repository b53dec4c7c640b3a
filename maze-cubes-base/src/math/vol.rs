//! Dense per-cube storage.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::math::{Cube, GridAab};

/// One value of type `V` for every cube of a [`GridAab`], stored in a single slice.
///
/// Elements are laid out in Z-major order: the linear index of the cube at offset
/// `(x, y, z)` from the lower corner, in a box of height `h` and depth `d`, is
/// `(x * h + y) * d + z`. Consecutive elements therefore differ only in Z, and
/// [`GridAab::interior_iter()`] visits cubes in the same order.
///
/// A [`Vol`] whose volume exceeds [`usize::MAX`] cannot exist.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Vol<V> {
    bounds: GridAab,
    /// Invariant: `elements.len() == bounds.volume()`.
    elements: Box<[V]>,
}

impl<V> Vol<V> {
    /// Wraps existing elements, which must already be in Z-major order.
    ///
    /// Fails if the number of elements is not the volume of `bounds`.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_elements(
        bounds: GridAab,
        elements: impl Into<Box<[V]>>,
    ) -> Result<Self, VolLengthError> {
        let elements = elements.into();
        if bounds.volume() == Some(elements.len()) {
            Ok(Self { bounds, elements })
        } else {
            Err(VolLengthError {
                input_length: Some(elements.len()),
                bounds,
            })
        }
    }

    /// Computes each element from its cube.
    ///
    /// Fails if the volume of `bounds` does not fit in a [`usize`].
    ///
    /// ```
    /// # extern crate maze_cubes_base as maze_cubes;
    /// use maze_cubes::math::{Cube, GridAab, GridPoint, GridSize, Vol};
    ///
    /// let bounds = GridAab::checked_from_lower_size(GridPoint::new(0, 0, 0), GridSize::new(2, 1, 2))?;
    /// let vol = Vol::from_fn(bounds, |cube| cube.x * 10 + cube.z)?;
    /// assert_eq!(vol.as_linear(), &[0, 1, 10, 11]);
    /// assert_eq!(vol.get(Cube::new(1, 0, 0)), Some(&10));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_fn(bounds: GridAab, f: impl FnMut(Cube) -> V) -> Result<Self, VolLengthError> {
        let volume = bounds.volume().ok_or(VolLengthError {
            input_length: None,
            bounds,
        })?;
        let mut elements = Vec::with_capacity(volume);
        elements.extend(bounds.interior_iter().map(f));
        Self::from_elements(bounds, elements)
    }

    /// The box this volume covers.
    #[inline]
    pub fn bounds(&self) -> GridAab {
        self.bounds
    }

    /// Number of elements; equal to the volume of [`Self::bounds()`].
    #[inline]
    pub fn volume(&self) -> usize {
        self.elements.len()
    }

    /// Position of `cube`'s element in [`Self::as_linear()`], or [`None`] if `cube` is
    /// outside the bounds.
    #[inline]
    pub fn index(&self, cube: Cube) -> Option<usize> {
        if !self.bounds.contains_cube(cube) {
            return None;
        }
        let lower = self.bounds.lower_bounds();
        let size = self.bounds.size();
        // Every factor is below the corresponding size, and the volume fits in usize,
        // so none of this can overflow.
        let offset = |low: i32, c: i32| c.abs_diff(low) as usize;
        let x = offset(lower.x, cube.x);
        let y = offset(lower.y, cube.y);
        let z = offset(lower.z, cube.z);
        Some((x * size.height as usize + y) * size.depth as usize + z)
    }

    /// The element for `cube`, if it is in bounds.
    #[inline]
    pub fn get(&self, cube: impl Into<Cube>) -> Option<&V> {
        let index = self.index(cube.into())?;
        self.elements.get(index)
    }

    /// Mutable access to the element for `cube`, if it is in bounds.
    #[inline]
    pub fn get_mut(&mut self, cube: impl Into<Cube>) -> Option<&mut V> {
        let index = self.index(cube.into())?;
        self.elements.get_mut(index)
    }

    /// All elements in storage order.
    #[inline]
    pub fn as_linear(&self) -> &[V] {
        &self.elements
    }

    /// All elements in storage order, mutably.
    #[inline]
    pub fn as_linear_mut(&mut self) -> &mut [V] {
        &mut self.elements
    }

    /// Pairs each cube with its element, in storage order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Cube, &V)> + '_ {
        self.bounds.interior_iter().zip(self.elements.iter())
    }
}

/// The number of elements given for a [`Vol`] did not match its bounds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VolLengthError {
    /// [`None`] if the bounds alone were unusable.
    input_length: Option<usize>,
    bounds: GridAab,
}

impl core::error::Error for VolLengthError {}

impl fmt::Display for VolLengthError {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            input_length,
            bounds,
        } = self;
        match (input_length, bounds.volume()) {
            (Some(length), Some(volume)) => write!(
                f,
                "{length} elements given for {bounds:?}, which has {volume} cubes"
            ),
            (_, None) => write!(f, "{bounds:?} has too many cubes to store"),
            (None, Some(_)) => write!(f, "invalid bounds {bounds:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::GridPoint;
    use alloc::string::ToString as _;
    use pretty_assertions::assert_eq;

    fn aab(lower: [i32; 3], size: [u32; 3]) -> GridAab {
        GridAab::checked_from_lower_size(GridPoint::from(lower), size.into()).unwrap()
    }

    #[test]
    fn index_is_z_major() {
        let vol = Vol::from_fn(aab([-1, 0, 3], [3, 2, 4]), |_| ()).unwrap();
        assert_eq!(vol.index(Cube::new(-1, 0, 3)), Some(0));
        assert_eq!(vol.index(Cube::new(-1, 0, 4)), Some(1));
        assert_eq!(vol.index(Cube::new(-1, 1, 3)), Some(4));
        assert_eq!(vol.index(Cube::new(0, 0, 3)), Some(8));
        assert_eq!(vol.index(Cube::new(1, 1, 6)), Some(23));
        assert_eq!(vol.index(Cube::new(2, 0, 3)), None);
        assert_eq!(vol.index(Cube::new(-1, 0, 2)), None);
    }

    #[test]
    fn iter_agrees_with_index() {
        let vol = Vol::from_fn(aab([0, 0, 0], [3, 4, 5]), |cube| cube).unwrap();
        for (i, (cube, &stored)) in vol.iter().enumerate() {
            assert_eq!(cube, stored);
            assert_eq!(vol.index(cube), Some(i));
        }
        assert_eq!(vol.iter().count(), 60);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let bounds = aab([0, 0, 0], [2, 2, 2]);
        let err = Vol::from_elements(bounds, vec![0u8; 7]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "7 elements given for GridAab(0..2, 0..2, 0..2), which has 8 cubes"
        );
        assert!(Vol::from_elements(bounds, vec![0u8; 8]).is_ok());
    }

    #[test]
    fn get_mut_writes_through() {
        let mut vol = Vol::from_fn(aab([0, 0, 0], [2, 2, 2]), |_| 0).unwrap();
        *vol.get_mut([1, 0, 1]).unwrap() = 5;
        assert_eq!(vol.get([1, 0, 1]), Some(&5));
        assert_eq!(vol.get([2, 0, 1]), None);
        assert_eq!(vol.as_linear().iter().sum::<i32>(), 5);
    }
}
