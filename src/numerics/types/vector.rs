// src/numerics/types/vector.rs
// Vector<T, N> generic implementation over a fixed `[T; N]` storage.
// Uses the Scalar trait from super::traits.

use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::fmt;

use super::components::{all_approx_eq, array_from_slice, checked_index, sum_of_squares, write_report};
use super::traits::Scalar;
use crate::numerics::error::{NumericsError, Result, Shape};

/// Vector is an N-dimensional displacement with components of kind `T`.
///
/// The dimension is part of the type, so adding a `Vector<f32, 2>` to a
/// `Vector<f32, 3>` does not compile. Equality is exact for integral `T`
/// and tolerant to [`EPSILON`](super::traits::EPSILON) for floating-point `T`.
#[derive(Copy, Clone, Debug)]
pub struct Vector<T: Scalar, const N: usize> {
    data: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "Vector dimension must be positive");

    /// Construct a new Vector from exactly `N` components
    pub fn new(data: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self { data }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new([T::zero(); N])
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::new([T::one(); N])
    }

    /// Construct from a runtime-sized list of values.
    ///
    /// Fails with [`NumericsError::InvalidArgument`] unless `values` holds
    /// exactly `N` elements.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        array_from_slice(Shape::Vector, values).map(Self::new)
    }

    pub fn dimension(&self) -> usize {
        N
    }

    /// Read component `index`.
    pub fn at(&self, index: usize) -> Result<T> {
        checked_index::<N>(Shape::Vector, index).map(|i| self.data[i])
    }

    /// Mutable slot for component `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let i = checked_index::<N>(Shape::Vector, index)?;
        Ok(&mut self.data[i])
    }

    /// Overwrite component `index` with `value`.
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

    /// Return the squared length, summed in `f64` whatever `T` is
    pub fn length_squared(&self) -> f64 {
        sum_of_squares(&self.data)
    }

    /// Return the Euclidean length
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Dot product, summed in `f64`
    pub fn dot(&self, other: &Self) -> f64 {
        self.data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a.to_f64() * b.to_f64())
            .sum()
    }

    /// Multi-line debugging report: dimension, scalar kind and components.
    pub fn report(&self) -> String {
        self.to_string()
    }

    fn scaled(self, factor: impl Fn(f64) -> f64) -> Self {
        Self::new(self.data.map(|c| T::from_f64(factor(c.to_f64()))))
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match checked_index::<N>(Shape::Vector, index) {
            Ok(i) => &self.data[i],
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match checked_index::<N>(Shape::Vector, index) {
            Ok(i) => &mut self.data[i],
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Scalar, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        all_approx_eq(&self.data, &other.data)
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, Shape::Vector, &self.data)
    }
}

// Implement operator - (unary) for Vector<T, N>
impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.data.map(T::wrapping_neg))
    }
}

// Implement operator + for Vector<T, N>
impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

// Implement operator - for Vector<T, N>
impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, other: Self) {
        for (lhs, rhs) in self.data.iter_mut().zip(other.data) {
            *lhs = lhs.wrapping_add(rhs);
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, other: Self) {
        for (lhs, rhs) in self.data.iter_mut().zip(other.data) {
            *lhs = lhs.wrapping_sub(rhs);
        }
    }
}

// Scaling goes through f64 and is cast back to T per component.

impl<T: Scalar, const N: usize> Mul<f64> for Vector<T, N> {
    type Output = Self;

    fn mul(self, t: f64) -> Self {
        self.scaled(|c| c * t)
    }
}

impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for f64 {
    type Output = Vector<T, N>;

    fn mul(self, v: Vector<T, N>) -> Vector<T, N> {
        v * self
    }
}

impl<T: Scalar, const N: usize> Div<f64> for Vector<T, N> {
    type Output = Self;

    fn div(self, t: f64) -> Self {
        self.scaled(|c| c / t)
    }
}

impl<T: Scalar, const N: usize> MulAssign<f64> for Vector<T, N> {
    fn mul_assign(&mut self, t: f64) {
        *self = *self * t;
    }
}

impl<T: Scalar, const N: usize> DivAssign<f64> for Vector<T, N> {
    fn div_assign(&mut self, t: f64) {
        *self = *self / t;
    }
}

// Conversions between Vector<T, N> and arrays [T; N]

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(array: [T; N]) -> Self {
        Self::new(array)
    }
}

impl<T: Scalar, const N: usize> From<&[T; N]> for Vector<T, N> {
    fn from(array: &[T; N]) -> Self {
        Self::new(*array)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = NumericsError;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl<T: Scalar, const N: usize> TryFrom<Vec<T>> for Vector<T, N> {
    type Error = NumericsError;

    fn try_from(values: Vec<T>) -> Result<Self> {
        Self::from_slice(&values)
    }
}

pub type Vec2d = Vector<f64, 2>;
pub type Vec3d = Vector<f64, 3>;
pub type Vec4d = Vector<f64, 4>;
pub type Vec2f = Vector<f32, 2>;
pub type Vec3f = Vector<f32, 3>;
pub type Vec4f = Vector<f32, 4>;
pub type Vec2i = Vector<i32, 2>;
pub type Vec3i = Vector<i32, 3>;
pub type Vec4i = Vector<i32, 4>;
