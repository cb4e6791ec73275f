// src/algebra/algebra_trait.rs
/*!
The **unified algebra trait** shared by every level of the Cayley-Dickson
tower, from the bare real scalars up through complex numbers, quaternions,
octonions, sedenions and beyond.

This trait is the capability predicate for "is a hypercomplex value":
generic code that must accept a plain complex number or a deeper value
polymorphically bounds on `Algebra` and never needs to know the depth.

Key points
- `DIM` is the number of real components; a value at recursion depth `d`
  has `DIM = 2^(d+1)` (the scalar base case has `DIM = 1`).
- `component`/`component_mut` address the flat component vector. An index
  into the lower half recurses into the real part unchanged; an index into
  the upper half recurses into the imaginary part with `DIM / 2`
  subtracted. Out-of-range indices answer `None`, never a default.
- `conj` and `norm_sqr` are the two recursive primitives multiplication
  and the formal quotient are built from.
- `scale`/`unscale` are component-wise scalar multiplication/division;
  they are the only division this trait exposes.
*/

use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};
use num_traits::{One, Zero};

use super::scalar_real::ScalarReal;

/// Unified behavior of one level of the Cayley-Dickson tower.
///
/// Implemented by `f32`/`f64` (the seed, one component) and by
/// [`Cayley<T>`](super::cayley::Cayley) for any `T: Algebra` (doubling the
/// component count of `T`).
pub trait Algebra:
    Copy
    + Clone
    + Default
    + PartialEq
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
{
    /// The real scalar type at the bottom of the tower.
    type Scalar: ScalarReal;

    /// Number of real components held by a value of this level.
    const DIM: usize;

    /// Recursion depth of this level: `DIM = 2^(depth + 1)`.
    ///
    /// The scalar base case and the complex numbers both answer 0; the
    /// quaternions answer 1, the octonions 2, and so on.
    #[inline]
    fn depth() -> u32 {
        Self::DIM.trailing_zeros().saturating_sub(1)
    }

    /// Embed a real scalar: real slot = `s`, every other component zero.
    fn from_real(s: Self::Scalar) -> Self;

    /// Conjugate: identity on scalars; `(re, im) -> (conj(re), -im)` above.
    fn conj(self) -> Self;

    /// Sum of the squares of all components.
    fn norm_sqr(&self) -> Self::Scalar;

    /// Euclidean norm, `sqrt(norm_sqr)`.
    #[inline]
    fn norm(&self) -> Self::Scalar {
        self.norm_sqr().sqrt_real()
    }

    /// Component-wise multiplication by a scalar.
    fn scale(self, k: Self::Scalar) -> Self;

    /// Component-wise division by a scalar.
    fn unscale(self, k: Self::Scalar) -> Self;

    /// Read the component at flat index `idx`, `None` if `idx >= DIM`.
    fn component(&self, idx: usize) -> Option<Self::Scalar>;

    /// Mutable access to the component at flat index `idx`.
    fn component_mut(&mut self, idx: usize) -> Option<&mut Self::Scalar>;

    /// True iff every component is finite.
    #[inline]
    fn is_finite(&self) -> bool {
        (0..Self::DIM).all(|i| match self.component(i) {
            Some(c) => c.is_finite_real(),
            None => false,
        })
    }
}

// ===================================================================
// ------------------- Base Case: the real scalars -------------------
// ===================================================================
// A bare float is the depth "-1" seed of the tower: one component,
// conjugation is the identity, and the norm is the absolute value.

macro_rules! impl_algebra_for_float {
    ($($t:ty),* $(,)?) => {$(
        impl Algebra for $t {
            type Scalar = $t;
            const DIM: usize = 1;

            #[inline] fn from_real(s: $t) -> Self { s }
            #[inline] fn conj(self) -> Self { self }
            #[inline] fn norm_sqr(&self) -> $t { *self * *self }
            #[inline] fn scale(self, k: $t) -> Self { self * k }
            #[inline] fn unscale(self, k: $t) -> Self { self / k }

            #[inline]
            fn component(&self, idx: usize) -> Option<$t> {
                (idx == 0).then_some(*self)
            }

            #[inline]
            fn component_mut(&mut self, idx: usize) -> Option<&mut $t> {
                (idx == 0).then_some(self)
            }
        }
    )*}
}
impl_algebra_for_float!(f32, f64);
