//! # Dense vector with a start index
//!
//! Wrapping a `Vec` such that it has a fixed, positive size and is indexed starting at an
//! arbitrary nonnegative index. The size only changes by assigning another vector to it.
//!
//! All indexing is checked. Indices are signed, so that negative indices can be given and are
//! reported as out of range.
use std::fmt;
use std::fmt::Display;
use std::mem;
use std::ops::{Add, Index, IndexMut, Mul, Range, Sub};
use std::slice::Iter;

use itertools::Itertools;
use log::{debug, trace};

use crate::data::linear_algebra::{MAX_VECTOR_SIZE, validate_size};
use crate::data::linear_algebra::traits::Element;
use crate::error::LinearAlgebraError;

/// Uses a `Vec` as underlying data structure. Length is fixed at creation.
///
/// Two vectors are equal when they have the same length, the same start index and the same
/// values.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Vector<F> {
    data: Vec<F>,
    start_index: isize,
}

impl<F: Element> Vector<F> {
    /// Create a vector of zeros, indexed from `0`.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements, should be in `1..=MAX_VECTOR_SIZE`.
    ///
    /// # Return value
    ///
    /// A vector of zeros, or an `InvalidArgument` error.
    pub fn new(len: isize) -> Result<Self, LinearAlgebraError> {
        Self::with_start_index(len, 0)
    }

    /// Create a vector of zeros, indexed from `start_index`.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements, should be in `1..=MAX_VECTOR_SIZE`.
    /// * `start_index`: Index of the first element, should be nonnegative and leave room for `len`
    /// indices below `isize::MAX`.
    ///
    /// # Return value
    ///
    /// A vector of zeros, or an `InvalidArgument` error.
    pub fn with_start_index(len: isize, start_index: isize) -> Result<Self, LinearAlgebraError> {
        let len = validate_size(len, MAX_VECTOR_SIZE, "vector")?;
        validate_start_index(start_index, len)?;

        trace!("new vector of length {} starting at index {}", len, start_index);
        Ok(Self { data: vec![F::zero(); len], start_index })
    }
}

impl<F> Vector<F> {
    /// Create a vector from existing values.
    ///
    /// # Arguments
    ///
    /// * `data`: Values in index order, not empty and at most `MAX_VECTOR_SIZE` long.
    /// * `start_index`: Index of the first element, should be nonnegative.
    pub fn from_values(data: Vec<F>, start_index: isize) -> Result<Self, LinearAlgebraError> {
        let len = isize::try_from(data.len()).unwrap_or(isize::MAX);
        let len = validate_size(len, MAX_VECTOR_SIZE, "vector")?;
        validate_start_index(start_index, len)?;

        trace!("vector of length {} starting at index {} from values", data.len(), start_index);
        Ok(Self { data, start_index })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector is empty, which a successfully created vector never is.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Index of the first element.
    pub fn start_index(&self) -> isize {
        self.start_index
    }

    /// All valid indices, in order.
    pub fn indices(&self) -> Range<isize> {
        self.start_index..self.start_index + self.data.len() as isize
    }

    /// Iterate over the values of this vector, in index order.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// Retrieve the value at an index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index - start_index` is not in `0..len`.
    pub fn get(&self, index: isize) -> Result<&F, LinearAlgebraError> {
        let offset = self.offset(index)?;

        Ok(&self.data[offset])
    }

    /// Retrieve a mutable reference to the value at an index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index - start_index` is not in `0..len`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut F, LinearAlgebraError> {
        let offset = self.offset(index)?;

        Ok(&mut self.data[offset])
    }

    /// Set the value at an index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index - start_index` is not in `0..len`. Nothing is written in that
    /// case.
    pub fn set(&mut self, index: isize, value: F) -> Result<(), LinearAlgebraError> {
        *self.get_mut(index)? = value;

        Ok(())
    }

    /// Position in `data` of the value at `index`.
    fn offset(&self, index: isize) -> Result<usize, LinearAlgebraError> {
        index.checked_sub(self.start_index)
            .and_then(|offset| usize::try_from(offset).ok())
            .filter(|&offset| offset < self.data.len())
            .ok_or_else(|| {
                let error = LinearAlgebraError::IndexOutOfRange {
                    index,
                    start_index: self.start_index,
                    len: self.data.len(),
                };
                debug!("{}", error);
                error
            })
    }

    /// Replace the contents of this vector by a copy of `other`.
    ///
    /// The length and start index are taken over from `other`, so this may change the size of
    /// this vector.
    pub fn assign(&mut self, other: &Self)
    where
        F: Clone,
    {
        self.clone_from(other);
    }

    /// Build a vector of the same shape by transforming each value.
    fn map(&self, f: impl FnMut(&F) -> F) -> Self {
        Self { data: self.data.iter().map(f).collect(), start_index: self.start_index }
    }

    /// Combine with another vector of the same length value by value.
    ///
    /// The result has the start index of `self`.
    fn zip_with(
        &self,
        other: &Self,
        mut f: impl FnMut(&F, &F) -> F,
    ) -> Result<Self, LinearAlgebraError> {
        check_same_len(self.len(), other.len())?;

        Ok(Self {
            data: self.data.iter().zip_eq(&other.data).map(|(a, b)| f(a, b)).collect(),
            start_index: self.start_index,
        })
    }

    /// Apply `f` to every value in place.
    fn map_in_place(&mut self, mut f: impl FnMut(F) -> F)
    where
        F: Element,
    {
        for value in &mut self.data {
            let old = mem::replace(value, F::zero());
            *value = f(old);
        }
    }
}

impl<F: Element> Vector<F> {
    /// Add a constant to every value.
    pub fn add_scalar(&self, value: &F) -> Self {
        self.map(|v| v.clone() + value.clone())
    }

    /// Subtract a constant from every value.
    pub fn sub_scalar(&self, value: &F) -> Self
    where
        F: Sub<Output = F>,
    {
        self.map(|v| v.clone() - value.clone())
    }

    /// Multiply every value by a constant.
    pub fn mul_scalar(&self, value: &F) -> Self
    where
        F: Mul<Output = F>,
    {
        self.map(|v| v.clone() * value.clone())
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the lengths differ.
    pub fn add_vector(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the lengths differ.
    pub fn sub_vector(&self, other: &Self) -> Result<Self, LinearAlgebraError>
    where
        F: Sub<Output = F>,
    {
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }

    /// Compute the inner product with another vector.
    ///
    /// Products are summed in index order, starting from zero.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the lengths differ.
    pub fn inner_product(&self, other: &Self) -> Result<F, LinearAlgebraError>
    where
        F: Mul<Output = F>,
    {
        check_same_len(self.len(), other.len())?;

        Ok(self.data.iter().zip_eq(&other.data)
            .fold(F::zero(), |total, (a, b)| total + a.clone() * b.clone()))
    }
}

/// Check that a start index is nonnegative and that every index of a vector of length `len`
/// starting there is representable.
fn validate_start_index(start_index: isize, len: usize) -> Result<(), LinearAlgebraError> {
    if start_index < 0 {
        let error = LinearAlgebraError::invalid_argument(
            format!("start index must be nonnegative, got {}", start_index),
        );
        debug!("{}", error);
        Err(error)
    } else if start_index.checked_add(len as isize).is_none() {
        let error = LinearAlgebraError::invalid_argument(
            format!("start index {} is too large for length {}", start_index, len),
        );
        debug!("{}", error);
        Err(error)
    } else {
        Ok(())
    }
}

/// Check that the operands of a binary operation have the same size.
pub(crate) fn check_same_len(left: usize, right: usize) -> Result<(), LinearAlgebraError> {
    if left == right {
        Ok(())
    } else {
        let error = LinearAlgebraError::SizeMismatch { left, right };
        debug!("{}", error);
        Err(error)
    }
}

impl<F> Index<isize> for Vector<F> {
    type Output = F;

    /// # Panics
    ///
    /// When the index is out of range. Use `get` to handle that case.
    fn index(&self, index: isize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F> IndexMut<isize> for Vector<F> {
    /// # Panics
    ///
    /// When the index is out of range. Use `get_mut` to handle that case.
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F: Element> Add<F> for Vector<F> {
    type Output = Self;

    fn add(mut self, rhs: F) -> Self::Output {
        self.map_in_place(|v| v + rhs.clone());
        self
    }
}

impl<F: Element + Sub<Output = F>> Sub<F> for Vector<F> {
    type Output = Self;

    fn sub(mut self, rhs: F) -> Self::Output {
        self.map_in_place(|v| v - rhs.clone());
        self
    }
}

impl<F: Element + Mul<Output = F>> Mul<F> for Vector<F> {
    type Output = Self;

    fn mul(mut self, rhs: F) -> Self::Output {
        self.map_in_place(|v| v * rhs.clone());
        self
    }
}

impl<F: Element> Add<&Vector<F>> for &Vector<F> {
    type Output = Result<Vector<F>, LinearAlgebraError>;

    fn add(self, rhs: &Vector<F>) -> Self::Output {
        self.add_vector(rhs)
    }
}

impl<F: Element + Sub<Output = F>> Sub<&Vector<F>> for &Vector<F> {
    type Output = Result<Vector<F>, LinearAlgebraError>;

    fn sub(self, rhs: &Vector<F>) -> Self::Output {
        self.sub_vector(rhs)
    }
}

impl<F: Element + Mul<Output = F>> Mul<&Vector<F>> for &Vector<F> {
    type Output = Result<F, LinearAlgebraError>;

    /// The inner product.
    fn mul(self, rhs: &Vector<F>) -> Self::Output {
        self.inner_product(rhs)
    }
}

impl<F: Display> Display for Vector<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.iter().join(" "))
    }
}
