// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod error;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub(crate) mod components;
    pub mod point;
    pub mod traits;
    pub mod vector;
}

pub use error::{NumericsError, Result, Shape};
pub use types::point::{Point, Point2d, Point2f, Point2i, Point3d, Point3f, Point3i, Point4d, Point4f, Point4i};
pub use types::traits::{Scalar, EPSILON};
pub use types::vector::{Vec2d, Vec2f, Vec2i, Vec3d, Vec3f, Vec3i, Vec4d, Vec4f, Vec4i, Vector};
