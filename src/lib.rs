//! # Upper triangular matrices
//!
//! A bounds-checked `Vector` with a configurable start index, and an `UpperTriangular` matrix
//! which stores only the values on and above the diagonal, one `Vector` per row.
#![warn(missing_docs)]

pub mod data;
pub mod error;
