// src/numerics/error.rs
// Error type for fallible construction and component access.

use std::fmt;

/// Which fixed-size type raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Vector,
    Point,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Vector => f.write_str("Vector"),
            Shape::Point => f.write_str("Point"),
        }
    }
}

/// Errors that can occur when building or indexing a `Vector` or `Point`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumericsError {
    #[error("{shape} of size {dimension} cannot be initialized with {supplied} elements")]
    InvalidArgument {
        shape: Shape,
        dimension: usize,
        supplied: usize,
    },

    #[error("{shape} of size {dimension} cannot be accessed at index {index}")]
    OutOfBounds {
        shape: Shape,
        dimension: usize,
        index: usize,
    },
}

pub type Result<T> = std::result::Result<T, NumericsError>;
