//! Fixed-size numeric building blocks for the pathtracer.
//!
//! `Vector<T, N>` is a displacement and `Point<T, N>` a position; both store
//! exactly `N` components of a [`Scalar`] kind inline.

pub mod numerics;

pub use numerics::{NumericsError, Point, Scalar, Vector};
