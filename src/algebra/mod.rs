// src/algebra/mod.rs
//! The recursive Cayley-Dickson tower: one pair type, one capability
//! trait, and generic arithmetic/transcendental machinery shared by
//! every depth.

pub mod algebra_trait;
pub mod cayley;
pub mod cayley_rand;
pub mod format;
pub mod ops;
pub mod scalar_real;
pub mod transcendental;

pub use algebra_trait::Algebra;
pub use cayley::{Cayley, Complex, Octonion, Quaternion, Sedenion, Trigintaduonion};
pub use scalar_real::ScalarReal;
