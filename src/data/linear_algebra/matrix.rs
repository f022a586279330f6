//! # Upper triangular matrix
//!
//! Only the values on and above the diagonal are stored. Row `i` of a matrix of order `n` is a
//! `Vector` of length `n - i` with start index `i`, such that column indices are the same on every
//! row: `m[i][j]` is the value in row `i` and column `j`, and is only accessible for `j >= i`.
//!
//! Rows are never handed out mutably. Values are written through `m[(i, j)]`, `set` or a `RowMut`,
//! so the shape of a row can't change after creation.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Deref, Index, IndexMut, Sub};
use std::slice::Iter;

use itertools::Itertools;
use log::{debug, trace};
use num_traits::Zero;

use crate::data::linear_algebra::{MAX_MATRIX_SIZE, validate_size};
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::{Vector, check_same_len};
use crate::error::LinearAlgebraError;

/// Square matrix storing the upper triangle, including the diagonal, row by row.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct UpperTriangular<F> {
    rows: Vec<Vector<F>>,
}

impl<F: Element> UpperTriangular<F> {
    /// Create a matrix of zeros.
    ///
    /// # Arguments
    ///
    /// * `len`: Order of the matrix, should be in `1..=MAX_MATRIX_SIZE`.
    ///
    /// # Return value
    ///
    /// A zero matrix, or an `InvalidArgument` error.
    pub fn new(len: isize) -> Result<Self, LinearAlgebraError> {
        let len = validate_size(len, MAX_MATRIX_SIZE, "matrix")?;

        trace!("new upper triangular matrix of order {}", len);
        let rows = (0..len as isize)
            .map(|i| Vector::with_start_index(len as isize - i, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }
}

impl<F> UpperTriangular<F> {
    /// Create a matrix from its rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Row `i` should have length `rows.len() - i` and start index `i`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the number of rows is not a valid order, or if a row doesn't have the
    /// triangular shape.
    pub fn from_rows(rows: Vec<Vector<F>>) -> Result<Self, LinearAlgebraError> {
        let len = isize::try_from(rows.len()).unwrap_or(isize::MAX);
        let len = validate_size(len, MAX_MATRIX_SIZE, "matrix")?;

        for (i, row) in rows.iter().enumerate() {
            if row.len() != len - i || row.start_index() != i as isize {
                let error = LinearAlgebraError::invalid_argument(format!(
                    "row {} should have length {} and start index {}, got length {} and start index {}",
                    i, len - i, i, row.len(), row.start_index(),
                ));
                debug!("{}", error);
                return Err(error);
            }
        }

        trace!("upper triangular matrix of order {} from rows", len);
        Ok(Self { rows })
    }

    /// Order of the matrix, that is, the number of rows and of columns.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether this matrix has no rows, which a successfully created matrix never has.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the rows, from the top.
    pub fn rows(&self) -> Iter<'_, Vector<F>> {
        self.rows.iter()
    }

    /// Retrieve a row.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `i` is not in `0..len`.
    pub fn row(&self, i: isize) -> Result<&Vector<F>, LinearAlgebraError> {
        let i = self.row_offset(i)?;

        Ok(&self.rows[i])
    }

    /// Retrieve a row for modification of its values.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `i` is not in `0..len`.
    pub fn row_mut(&mut self, i: isize) -> Result<RowMut<'_, F>, LinearAlgebraError> {
        let i = self.row_offset(i)?;

        Ok(RowMut { row: &mut self.rows[i] })
    }

    /// Retrieve the value in row `i` and column `j`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `i` is not a row, or `j` is not a column stored on that row.
    pub fn get(&self, i: isize, j: isize) -> Result<&F, LinearAlgebraError> {
        self.row(i)?.get(j)
    }

    /// Retrieve a mutable reference to the value in row `i` and column `j`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `i` is not a row, or `j` is not a column stored on that row.
    pub fn get_mut(&mut self, i: isize, j: isize) -> Result<&mut F, LinearAlgebraError> {
        let i = self.row_offset(i)?;

        self.rows[i].get_mut(j)
    }

    /// Set the value in row `i` and column `j`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `i` is not a row, or `j` is not a column stored on that row.
    pub fn set(&mut self, i: isize, j: isize, value: F) -> Result<(), LinearAlgebraError> {
        *self.get_mut(i, j)? = value;

        Ok(())
    }

    /// Position in `rows` of row `i`.
    fn row_offset(&self, i: isize) -> Result<usize, LinearAlgebraError> {
        usize::try_from(i).ok()
            .filter(|&i| i < self.rows.len())
            .ok_or_else(|| {
                let error = LinearAlgebraError::IndexOutOfRange {
                    index: i,
                    start_index: 0,
                    len: self.rows.len(),
                };
                debug!("{}", error);
                error
            })
    }

    /// Replace the contents of this matrix by a copy of `other`.
    ///
    /// The order is taken over from `other`.
    pub fn assign(&mut self, other: &Self)
    where
        F: Clone,
    {
        self.clone_from(other);
    }
}

impl<F: Element> UpperTriangular<F> {
    /// Combine with another matrix of the same order row by row.
    ///
    /// Rows of matrices with the same order have the same shape, so the row operation doesn't
    /// fail.
    fn zip_rows_with(
        &self,
        other: &Self,
        f: impl Fn(&Vector<F>, &Vector<F>) -> Result<Vector<F>, LinearAlgebraError>,
    ) -> Result<Self, LinearAlgebraError> {
        check_same_len(self.len(), other.len())?;

        let rows = self.rows.iter().zip_eq(&other.rows)
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the orders differ.
    pub fn add_matrix(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.zip_rows_with(other, Vector::add_vector)
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the orders differ.
    pub fn sub_matrix(&self, other: &Self) -> Result<Self, LinearAlgebraError>
    where
        F: Sub<Output = F>,
    {
        self.zip_rows_with(other, Vector::sub_vector)
    }
}

impl<F> Index<isize> for UpperTriangular<F> {
    type Output = Vector<F>;

    /// # Panics
    ///
    /// When the row index is out of range. Use `row` to handle that case.
    fn index(&self, i: isize) -> &Self::Output {
        match self.row(i) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F> Index<(isize, isize)> for UpperTriangular<F> {
    type Output = F;

    /// # Panics
    ///
    /// When the row or column index is out of range. Use `get` to handle that case.
    fn index(&self, (i, j): (isize, isize)) -> &Self::Output {
        match self.get(i, j) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F> IndexMut<(isize, isize)> for UpperTriangular<F> {
    /// # Panics
    ///
    /// When the row or column index is out of range. Use `get_mut` to handle that case.
    fn index_mut(&mut self, (i, j): (isize, isize)) -> &mut Self::Output {
        match self.get_mut(i, j) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

/// Mutable access to the values of a single row of an `UpperTriangular` matrix.
///
/// Values can be read and written, but the row can't be replaced, so its length and start index
/// stay those given to it by the matrix. Column indices are absolute, as for the matrix itself.
///
/// Reading works through `Deref` to the row as a `Vector`.
///
/// ```compile_fail
/// use utmatrix::data::linear_algebra::matrix::UpperTriangular;
/// use utmatrix::data::linear_algebra::vector::Vector;
///
/// let mut m = UpperTriangular::<i32>::new(3).unwrap();
/// *m.row_mut(1).unwrap() = Vector::new(3).unwrap();
/// ```
///
/// ```compile_fail
/// use utmatrix::data::linear_algebra::matrix::UpperTriangular;
/// use utmatrix::data::linear_algebra::vector::Vector;
///
/// let mut m = UpperTriangular::<i32>::new(3).unwrap();
/// m[1] = Vector::new(3).unwrap();
/// ```
#[derive(Debug)]
pub struct RowMut<'a, F> {
    row: &'a mut Vector<F>,
}

impl<F> RowMut<'_, F> {
    /// Retrieve a mutable reference to the value in column `j`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when column `j` is not stored on this row.
    pub fn get_mut(&mut self, j: isize) -> Result<&mut F, LinearAlgebraError> {
        self.row.get_mut(j)
    }

    /// Set the value in column `j`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when column `j` is not stored on this row.
    pub fn set(&mut self, j: isize, value: F) -> Result<(), LinearAlgebraError> {
        self.row.set(j, value)
    }
}

impl<F> Deref for RowMut<'_, F> {
    type Target = Vector<F>;

    fn deref(&self) -> &Self::Target {
        &*self.row
    }
}

impl<F> Index<isize> for RowMut<'_, F> {
    type Output = F;

    fn index(&self, j: isize) -> &Self::Output {
        &self.row[j]
    }
}

impl<F> IndexMut<isize> for RowMut<'_, F> {
    /// # Panics
    ///
    /// When column `j` is not stored on this row. Use `get_mut` to handle that case.
    fn index_mut(&mut self, j: isize) -> &mut Self::Output {
        &mut self.row[j]
    }
}

impl<F: Element> Add<&UpperTriangular<F>> for &UpperTriangular<F> {
    type Output = Result<UpperTriangular<F>, LinearAlgebraError>;

    fn add(self, rhs: &UpperTriangular<F>) -> Self::Output {
        self.add_matrix(rhs)
    }
}

impl<F: Element + Sub<Output = F>> Sub<&UpperTriangular<F>> for &UpperTriangular<F> {
    type Output = Result<UpperTriangular<F>, LinearAlgebraError>;

    fn sub(self, rhs: &UpperTriangular<F>) -> Self::Output {
        self.sub_matrix(rhs)
    }
}

impl<F: Zero + Display> Display for UpperTriangular<F> {
    /// One line per row, with zeros printed below the diagonal.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            let line = (0..i).map(|_| F::zero().to_string())
                .chain(row.iter().map(ToString::to_string))
                .join(" ");
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}
