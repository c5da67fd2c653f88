// src/numerics/types/components.rs
// Helpers shared by Vector and Point over their `[T; N]` storage.

use std::fmt;

use super::traits::Scalar;
use crate::numerics::error::{NumericsError, Result, Shape};

/// Copy exactly `N` values out of a slice.
pub(crate) fn array_from_slice<T: Copy, const N: usize>(shape: Shape, values: &[T]) -> Result<[T; N]> {
    <[T; N]>::try_from(values).map_err(|_| NumericsError::InvalidArgument {
        shape,
        dimension: N,
        supplied: values.len(),
    })
}

/// Validate `index` against a dimension of `N`.
pub(crate) fn checked_index<const N: usize>(shape: Shape, index: usize) -> Result<usize> {
    if index < N {
        Ok(index)
    } else {
        Err(NumericsError::OutOfBounds {
            shape,
            dimension: N,
            index,
        })
    }
}

/// Sum of squared components, accumulated in `f64`.
pub(crate) fn sum_of_squares<T: Scalar>(data: &[T]) -> f64 {
    data.iter()
        .map(|component| {
            let c = component.to_f64();
            c * c
        })
        .sum()
}

/// Pairwise [`Scalar::approx_eq`] over every component.
pub(crate) fn all_approx_eq<T: Scalar>(lhs: &[T], rhs: &[T]) -> bool {
    lhs.iter().zip(rhs).all(|(a, b)| a.approx_eq(*b))
}

/// Write the multi-line debugging report used by the `Display` impls.
///
/// Components use their `Display` form, so whole floats print as `1`.
pub(crate) fn write_report<T: Scalar>(f: &mut fmt::Formatter<'_>, shape: Shape, data: &[T]) -> fmt::Result {
    writeln!(f, "Debugging {shape}:")?;
    writeln!(f, "Dimension: {}", data.len())?;
    writeln!(f, "Type: {}", T::KIND_NAME)?;
    write!(f, "Data: [")?;
    for (i, component) in data.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{component}")?;
    }
    writeln!(f, "]")?;
    writeln!(f)
}
