//! # Storing of vectors and matrices in memory
//!
//! This module provides the data structures, their shape invariants and the arithmetic defined on
//! them.

pub mod linear_algebra;
