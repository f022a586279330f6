//! # Traits for elements of vectors and matrices
//!
//! Values stored in a `Vector` or `UpperTriangular` matrix need to be cloneable (copies are deep),
//! comparable (equality is elementwise) and printable. Creating a container fills it with zeros,
//! so elements also need an additive identity.
use std::fmt::{Debug, Display};

use num_traits::Zero;

/// Element of a `Vector` or `UpperTriangular` type.
///
/// This bundles the traits needed to derive a few practical traits for the aforementioned types.
/// It is implemented for every type satisfying the bounds.
pub trait Element: Zero + PartialEq + Clone + Display + Debug {}

impl<T: Zero + PartialEq + Clone + Display + Debug> Element for T {}
