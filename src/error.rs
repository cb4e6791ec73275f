// src/error.rs
//! Crate-wide error type for the fallible corners of the algebra API.
//!
//! Almost everything here is total: construction, arithmetic, rendering and
//! non-negative integer powers never fail. The two exceptions are component
//! addressing with an out-of-range index, and the operations the
//! Cayley-Dickson construction cannot honestly provide (division by a
//! hypercomplex operand, negative integer powers).

use std::fmt;

/// Error raised by the fallible operations on a hypercomplex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgebraError {
    /// Component index at or past the algebra's component count.
    IndexOutOfRange { index: usize, dim: usize },
    /// Operation refused because the algebra cannot support it
    /// (no multiplicative inverses are guaranteed beyond the quaternions).
    UnsupportedOperation(&'static str),
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraError::IndexOutOfRange { index, dim } => {
                write!(f, "component index {index} out of range for a {dim}-component algebra")
            }
            AlgebraError::UnsupportedOperation(what) => {
                write!(f, "unsupported operation: {what}")
            }
        }
    }
}

impl std::error::Error for AlgebraError {}
