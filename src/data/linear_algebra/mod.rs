//! # Linear algebra primitives
//!
//! A dense vector with an index offset, and an upper triangular matrix built out of those vectors.
use log::debug;

use crate::error::LinearAlgebraError;

pub mod matrix;
pub mod traits;
pub mod vector;

/// Largest number of elements a `Vector` can be created with.
pub const MAX_VECTOR_SIZE: isize = 100_000_000;
/// Largest order an `UpperTriangular` matrix can be created with.
pub const MAX_MATRIX_SIZE: isize = 10_000;

/// Check that `size` lies in `1..=max`.
///
/// # Arguments
///
/// * `size`: Requested number of elements or rows.
/// * `max`: Largest allowed value, either `MAX_VECTOR_SIZE` or `MAX_MATRIX_SIZE`.
/// * `what`: Name of the value being created, used in the error message.
///
/// # Return value
///
/// The size as a `usize`, or an `InvalidArgument` error.
pub(crate) fn validate_size(size: isize, max: isize, what: &str) -> Result<usize, LinearAlgebraError> {
    if size <= 0 {
        let error = LinearAlgebraError::invalid_argument(
            format!("{} size must be positive, got {}", what, size),
        );
        debug!("{}", error);
        Err(error)
    } else if size > max {
        let error = LinearAlgebraError::invalid_argument(
            format!("{} size {} exceeds the maximum of {}", what, size, max),
        );
        debug!("{}", error);
        Err(error)
    } else {
        Ok(size as usize)
    }
}
