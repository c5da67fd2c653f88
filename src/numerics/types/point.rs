// src/numerics/types/point.rs
// Point<T, N>: a position, kept distinct from the Vector displacement type.

use core::ops::{Add, Index, IndexMut, Neg, Sub};
use std::fmt;

use super::components::{all_approx_eq, array_from_slice, checked_index, write_report};
use super::traits::Scalar;
use super::vector::Vector;
use crate::numerics::error::{NumericsError, Result, Shape};

/// Point is a position in N-dimensional space.
///
/// Points do not add to other points. Convert with [`Point::to_vector`] or
/// translate by a [`Vector`] displacement instead.
#[derive(Copy, Clone, Debug)]
pub struct Point<T: Scalar, const N: usize> {
    data: [T; N],
}

impl<T: Scalar, const N: usize> Point<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "Point dimension must be positive");

    pub fn new(data: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self { data }
    }

    /// The origin
    pub fn zero() -> Self {
        Self::new([T::zero(); N])
    }

    /// Fails with [`NumericsError::InvalidArgument`] unless `values` holds
    /// exactly `N` elements.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        array_from_slice(Shape::Point, values).map(Self::new)
    }

    pub fn dimension(&self) -> usize {
        N
    }

    pub fn at(&self, index: usize) -> Result<T> {
        checked_index::<N>(Shape::Point, index).map(|i| self.data[i])
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let i = checked_index::<N>(Shape::Point, index)?;
        Ok(&mut self.data[i])
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Copy the coordinates into a displacement from the origin.
    pub fn to_vector(&self) -> Vector<T, N> {
        Vector::new(self.data)
    }

    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match checked_index::<N>(Shape::Point, index) {
            Ok(i) => &self.data[i],
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match checked_index::<N>(Shape::Point, index) {
            Ok(i) => &mut self.data[i],
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Scalar, const N: usize> PartialEq for Point<T, N> {
    fn eq(&self, other: &Self) -> bool {
        all_approx_eq(&self.data, &other.data)
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Point<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, Shape::Point, &self.data)
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Point<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.data.map(T::wrapping_neg))
    }
}

// Translation: point + displacement is a point.

impl<T: Scalar, const N: usize> Add<Vector<T, N>> for Point<T, N> {
    type Output = Self;

    fn add(self, offset: Vector<T, N>) -> Self {
        Self::new(core::array::from_fn(|i| self.data[i].wrapping_add(offset[i])))
    }
}

impl<T: Scalar, const N: usize> Sub<Vector<T, N>> for Point<T, N> {
    type Output = Self;

    fn sub(self, offset: Vector<T, N>) -> Self {
        Self::new(core::array::from_fn(|i| self.data[i].wrapping_sub(offset[i])))
    }
}

impl<T: Scalar, const N: usize> From<Point<T, N>> for Vector<T, N> {
    fn from(p: Point<T, N>) -> Self {
        p.to_vector()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(array: [T; N]) -> Self {
        Self::new(array)
    }
}

impl<T: Scalar, const N: usize> From<Point<T, N>> for [T; N] {
    fn from(p: Point<T, N>) -> Self {
        p.data
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for Point<T, N> {
    type Error = NumericsError;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::from_slice(values)
    }
}

pub type Point2d = Point<f64, 2>;
pub type Point3d = Point<f64, 3>;
pub type Point4d = Point<f64, 4>;
pub type Point2f = Point<f32, 2>;
pub type Point3f = Point<f32, 3>;
pub type Point4f = Point<f32, 4>;
pub type Point2i = Point<i32, 2>;
pub type Point3i = Point<i32, 3>;
pub type Point4i = Point<i32, 4>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::vector::{Vec2i, Vec3d};

    #[test]
    fn test_point_zero_and_default() {
        let p = Point3f::zero();
        assert_eq!(p.as_array(), &[0.0, 0.0, 0.0]);
        assert_eq!(Point3f::default(), p);
    }

    #[test]
    fn test_point_from_slice_checks_count() {
        let p = Point2i::from_slice(&[7, 8]).unwrap();
        assert_eq!(p[0], 7);
        assert_eq!(p[1], 8);

        assert_eq!(
            Point2i::from_slice(&[7]).unwrap_err(),
            NumericsError::InvalidArgument { shape: Shape::Point, dimension: 2, supplied: 1 }
        );
        assert!(Point2i::try_from(&[1, 2, 3][..]).is_err());
    }

    #[test]
    fn test_point_at_out_of_bounds() {
        let mut p = Point3d::new([1.0, 2.0, 3.0]);
        assert_eq!(p.at(1), Ok(2.0));
        assert_eq!(
            p.at(3),
            Err(NumericsError::OutOfBounds { shape: Shape::Point, dimension: 3, index: 3 })
        );

        p.set(2, 9.0).unwrap();
        *p.at_mut(0).unwrap() -= 1.0;
        assert_eq!(p, Point3d::new([0.0, 2.0, 9.0]));
        assert!(p.set(3, 0.0).is_err());
    }

    #[test]
    #[should_panic(expected = "Point of size 3 cannot be accessed at index 10")]
    fn test_point_index_out_of_bounds_panics() {
        let p = Point3d::zero();
        let _ = p[10];
    }

    #[test]
    fn test_point_negation() {
        let p = Point2i::new([3, -4]);
        assert_eq!(-p, Point2i::new([-3, 4]));
    }

    #[test]
    fn test_to_vector_copies_components() {
        let p = Point3d::new([1.25, -2.5, 3.0]);
        let v = p.to_vector();
        for i in 0..3 {
            assert_eq!(v[i], p[i]);
        }
        assert_eq!(Vec3d::from(p), v);
        assert_eq!(p, Point3d::new([1.25, -2.5, 3.0]));
    }

    #[test]
    fn test_translate_by_vector() {
        let p = Point2i::new([1, 1]);
        let offset = Vec2i::new([2, -3]);
        assert_eq!(p + offset, Point2i::new([3, -2]));
        assert_eq!(p - offset, Point2i::new([-1, 4]));
        assert_eq!((p + offset) - offset, p);
    }

    #[test]
    fn test_integral_translation_and_negation_wrap() {
        let p = Point2i::new([i32::MAX, i32::MIN]);
        let step = Vec2i::new([1, 1]);
        assert_eq!(p + step, Point2i::new([i32::MIN, i32::MIN + 1]));
        assert_eq!(p - step, Point2i::new([i32::MAX - 1, i32::MAX]));
        assert_eq!(-p, Point2i::new([-i32::MAX, i32::MIN]));
    }

    #[test]
    fn test_point_report() {
        let p = Point2f::new([1.0, -1.5]);
        assert_eq!(
            p.report(),
            "Debugging Point:\nDimension: 2\nType: float\nData: [1, -1.5]\n\n"
        );
    }

    #[test]
    fn test_point_array_conversions() {
        let p: Point2i = [5, 6].into();
        let back: [i32; 2] = p.into();
        assert_eq!(back, [5, 6]);
        assert_eq!(p.iter().sum::<i32>(), 11);
        assert_eq!(p.dimension(), 2);
    }
}
