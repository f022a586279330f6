//! # Error reporting for vector and matrix operations
//!
//! Every fallible operation in this crate fails with a `LinearAlgebraError`. Failures are detected
//! before anything is modified, so the value an operation was called on is unchanged afterwards.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// A `LinearAlgebraError` describes why creating, indexing or combining a value failed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LinearAlgebraError {
    /// A value could not be created with the given arguments.
    ///
    /// The contained `String` is a message for the end user, for example because a size was not
    /// positive or larger than the allowed maximum.
    InvalidArgument(String),
    /// An index was used that does not refer to a stored value.
    IndexOutOfRange {
        /// Index as it was provided by the caller, before the start index was subtracted.
        index: isize,
        /// First valid index.
        start_index: isize,
        /// Number of valid indices.
        len: usize,
    },
    /// The operands of a binary operation don't have the same size.
    SizeMismatch {
        /// Size of the left operand.
        left: usize,
        /// Size of the right operand.
        right: usize,
    },
}

impl LinearAlgebraError {
    /// Wrap a text in an `InvalidArgument` error.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn invalid_argument(description: impl Into<String>) -> Self {
        LinearAlgebraError::InvalidArgument(description.into())
    }
}

impl Display for LinearAlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearAlgebraError::InvalidArgument(description) => {
                write!(f, "InvalidArgument: {}", description)
            },
            LinearAlgebraError::IndexOutOfRange { index, start_index, len } => {
                write!(
                    f,
                    "IndexOutOfRange: index {} is not in {}..{}",
                    index, start_index, *start_index as i128 + *len as i128,
                )
            },
            LinearAlgebraError::SizeMismatch { left, right } => {
                write!(f, "SizeMismatch: sizes {} and {} differ", left, right)
            },
        }
    }
}

impl Error for LinearAlgebraError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}
