// src/numerics/types/traits.rs
// Scalar trait shared by Vector and Point, with impls for the primitive numbers.

use core::fmt::{Debug, Display};

/// Absolute tolerance used when comparing floating-point components.
pub const EPSILON: f64 = 1e-3;

/// Scalar is the component type of a `Vector` or `Point`.
///
/// Integral kinds compare exactly; floating-point kinds compare within
/// [`EPSILON`]. Norms and scaling go through `f64` whatever the kind.
/// Component-wise addition, subtraction and negation wrap for integral kinds
/// so they never panic, whatever the build profile.
pub trait Scalar: Copy + Debug + Display {
    /// Display label of the kind: "int", "float", "double" or "none".
    const KIND_NAME: &'static str;

    fn zero() -> Self;
    fn one() -> Self;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`. Integral kinds truncate toward zero and saturate,
    /// so NaN becomes 0 and infinities become the bounds.
    fn from_f64(value: f64) -> Self;

    /// Component equality: exact for integers, within [`EPSILON`] for floats.
    fn approx_eq(self, other: Self) -> bool;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;
}

macro_rules! impl_integral_scalar {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND_NAME: &'static str = $name;

                fn zero() -> Self { 0 }
                fn one() -> Self { 1 }

                fn to_f64(self) -> f64 { self as f64 }
                fn from_f64(value: f64) -> Self { value as $ty }

                fn approx_eq(self, other: Self) -> bool { self == other }

                fn wrapping_add(self, rhs: Self) -> Self { <$ty>::wrapping_add(self, rhs) }
                fn wrapping_sub(self, rhs: Self) -> Self { <$ty>::wrapping_sub(self, rhs) }
                fn wrapping_neg(self) -> Self { <$ty>::wrapping_neg(self) }
            }
        )*
    };
}

macro_rules! impl_floating_scalar {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND_NAME: &'static str = $name;

                fn zero() -> Self { 0.0 }
                fn one() -> Self { 1.0 }

                fn to_f64(self) -> f64 { self as f64 }
                fn from_f64(value: f64) -> Self { value as $ty }

                fn approx_eq(self, other: Self) -> bool {
                    // infinities of the same sign subtract to NaN
                    self == other || (self - other).abs() <= EPSILON as $ty
                }

                fn wrapping_add(self, rhs: Self) -> Self { self + rhs }
                fn wrapping_sub(self, rhs: Self) -> Self { self - rhs }
                fn wrapping_neg(self) -> Self { -self }
            }
        )*
    };
}

impl_integral_scalar! {
    i32 => "int",
    i8 => "none",
    i16 => "none",
    i64 => "none",
    isize => "none",
    u8 => "none",
    u16 => "none",
    u32 => "none",
    u64 => "none",
    usize => "none",
}

impl_floating_scalar! {
    f32 => "float",
    f64 => "double",
}
