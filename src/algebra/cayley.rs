// src/algebra/cayley.rs
/*!
The **recursive Cayley-Dickson pair** `Cayley<T>` and its named levels.

A value is an ordered pair `(re, im)` of values one level lower; the
recursion bottoms out at a bare `f32`/`f64`. The depth lives in the type,
so the whole tower is resolved statically and every instance at a fixed
level has identical shape:

- `Complex<S>    = Cayley<S>`                 2 components, depth 0
- `Quaternion<S> = Cayley<Complex<S>>`        4 components, depth 1
- `Octonion<S>   = Cayley<Quaternion<S>>`     8 components, depth 2
- `Sedenion<S>   = Cayley<Octonion<S>>`      16 components, depth 3
- `Trigintaduonion<S>` and beyond: keep wrapping.

# Highlights

- `Cayley::new(re, im)`: direct pair construction, no normalization.
- `Algebra::from_real(s)` / `From<T>`: zero-extending embeddings from a
  scalar or from the next-lower level.
- `narrow()`: the inverse embedding, **lossy** (drops the imaginary half).
- `from_components(&[S])`: consecutive flat components, extras ignored.
- `component_at` / `set_component`: bounds-checked flat addressing.
- `powu` / `powi`: square-and-multiply integer powers.
- `try_div`: always refused; see the method docs.

> **Algebraic properties degrade with depth (important!)**
> - depth 0 is commutative and associative (the complex numbers),
> - depth 1 is associative but not commutative (the quaternions),
> - depth 2 loses associativity (the octonions),
> - depth 3 and beyond admit zero divisors (the sedenions onward), so the
>   construction is not a division algebra and no operation here attempts
>   a multiplicative inverse.
*/

use serde::Serialize;

use crate::error::AlgebraError;

use super::algebra_trait::Algebra;
use super::scalar_real::ScalarReal;

// ===================================================================
// --------------------------- Struct Def ----------------------------
// ===================================================================

/// One level of the Cayley-Dickson tower: an ordered pair of the level
/// below.
///
/// # Invariants
/// - Construction always sets both halves; there is no partially
///   initialized state (`Default` zero-fills).
/// - Values are immutable-by-copy. Compound assignment mutates the
///   receiver only; no operation aliases another live value's storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Cayley<T: Algebra> {
    /// Real part: the lower-level value carrying components `0..DIM/2`.
    pub re: T,
    /// Imaginary part: the lower-level value carrying components `DIM/2..DIM`.
    pub im: T,
}

/// Depth 0: the complex numbers over `S`.
pub type Complex<S> = Cayley<S>;
/// Depth 1: the quaternions over `S`.
pub type Quaternion<S> = Cayley<Complex<S>>;
/// Depth 2: the octonions over `S`.
pub type Octonion<S> = Cayley<Quaternion<S>>;
/// Depth 3: the sedenions over `S`.
pub type Sedenion<S> = Cayley<Octonion<S>>;
/// Depth 4: the 32-dimensional trigintaduonions over `S`.
pub type Trigintaduonion<S> = Cayley<Sedenion<S>>;

// ===================================================================
// ---------------------- Construction & Access ----------------------
// ===================================================================

impl<T: Algebra> Cayley<T> {
    /// Construct from a (real, imaginary) pair of lower-level values.
    #[inline]
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Embed a real scalar (every non-real component zero).
    #[inline]
    pub fn from_real(s: T::Scalar) -> Self {
        <Self as Algebra>::from_real(s)
    }

    /// Narrow to the next-lower level by keeping the real part.
    ///
    /// This is a **lossy** conversion: the `DIM / 2` components of the
    /// imaginary half are silently discarded. The zero-extending inverse
    /// is the `From<T>` embedding.
    #[inline]
    pub fn narrow(self) -> T {
        self.re
    }

    /// Build a value from consecutive flat components.
    ///
    /// Missing trailing components default to zero; scalars beyond the
    /// algebra's `DIM` are ignored, not an error.
    pub fn from_components(comps: &[T::Scalar]) -> Self {
        let mut v = Self::default();
        for (i, &s) in comps.iter().take(Self::DIM).enumerate() {
            if let Some(slot) = v.component_mut(i) {
                *slot = s;
            }
        }
        v
    }

    /// Read the scalar component at flat index `idx`.
    ///
    /// # Errors
    /// [`AlgebraError::IndexOutOfRange`] if `idx >= DIM`. Never clamps.
    #[inline]
    pub fn component_at(&self, idx: usize) -> Result<T::Scalar, AlgebraError> {
        self.component(idx).ok_or(AlgebraError::IndexOutOfRange {
            index: idx,
            dim: Self::DIM,
        })
    }

    /// Overwrite the scalar component at flat index `idx`.
    ///
    /// # Errors
    /// [`AlgebraError::IndexOutOfRange`] if `idx >= DIM`. Never clamps.
    #[inline]
    pub fn set_component(&mut self, idx: usize, val: T::Scalar) -> Result<(), AlgebraError> {
        let dim = Self::DIM;
        match self.component_mut(idx) {
            Some(slot) => {
                *slot = val;
                Ok(())
            }
            None => Err(AlgebraError::IndexOutOfRange { index: idx, dim }),
        }
    }

    /// All `DIM` components as a flat vector, lowest index first.
    pub fn components(&self) -> Vec<T::Scalar> {
        (0..Self::DIM).filter_map(|i| self.component(i)).collect()
    }
}

// ===================================================================
// -------------------------- Integer Powers -------------------------
// ===================================================================

impl<T: Algebra> Cayley<T> {
    /// `self` raised to a non-negative integer power, by repeated
    /// squaring. `powu(0)` is the multiplicative identity, `powu(1)` is
    /// `self`, `powu(2)` is one self-multiplication.
    ///
    /// Cayley-Dickson algebras are power-associative, so the bracketing
    /// chosen by the squaring loop does not change the result (up to
    /// float rounding at depth 2 and beyond).
    pub fn powu(self, mut n: u32) -> Self {
        let mut base = self;
        let mut acc = <Self as num_traits::One>::one();
        while n > 0 {
            if n & 1 == 1 {
                acc = acc * base;
            }
            n >>= 1;
            if n > 0 {
                base = base * base;
            }
        }
        acc
    }

    /// `self` raised to a signed integer power.
    ///
    /// # Errors
    /// [`AlgebraError::UnsupportedOperation`] for a negative exponent: the
    /// construction does not guarantee multiplicative inverses, so no
    /// reciprocal is ever attempted.
    pub fn powi(self, n: i32) -> Result<Self, AlgebraError> {
        if n < 0 {
            return Err(AlgebraError::UnsupportedOperation(
                "negative integer power (no multiplicative inverse is guaranteed)",
            ));
        }
        Ok(self.powu(n as u32))
    }

    /// Division by a hypercomplex operand, refused at every depth.
    ///
    /// Beyond the quaternions the construction stops being a division
    /// algebra (the sedenions even have zero divisors), so a quotient is
    /// not well defined in general. The API refuses uniformly rather than
    /// succeeding at some depths and failing at others. Division by a bare
    /// scalar is ordinary component-wise division via `/`.
    ///
    /// # Errors
    /// Always [`AlgebraError::UnsupportedOperation`].
    pub fn try_div(self, _rhs: Self) -> Result<Self, AlgebraError> {
        Err(AlgebraError::UnsupportedOperation(
            "division by a hypercomplex operand (the construction is not a division algebra)",
        ))
    }
}

// ===================================================================
// ----------------------- Algebra Trait Impl ------------------------
// ===================================================================

impl<T: Algebra> Algebra for Cayley<T> {
    type Scalar = T::Scalar;
    const DIM: usize = 2 * T::DIM;

    #[inline]
    fn from_real(s: T::Scalar) -> Self {
        Self {
            re: T::from_real(s),
            im: T::zero(),
        }
    }

    #[inline]
    fn conj(self) -> Self {
        Self {
            re: self.re.conj(),
            im: -self.im,
        }
    }

    #[inline]
    fn norm_sqr(&self) -> T::Scalar {
        self.re.norm_sqr() + self.im.norm_sqr()
    }

    #[inline]
    fn scale(self, k: T::Scalar) -> Self {
        Self {
            re: self.re.scale(k),
            im: self.im.scale(k),
        }
    }

    #[inline]
    fn unscale(self, k: T::Scalar) -> Self {
        Self {
            re: self.re.unscale(k),
            im: self.im.unscale(k),
        }
    }

    /// Flat addressing: the lower half of the index range lives in `re`
    /// under the same index, the upper half in `im` with `DIM / 2`
    /// subtracted. The same derivation at every level.
    #[inline]
    fn component(&self, idx: usize) -> Option<T::Scalar> {
        let half = Self::DIM / 2;
        if idx < half {
            self.re.component(idx)
        } else {
            self.im.component(idx - half)
        }
    }

    #[inline]
    fn component_mut(&mut self, idx: usize) -> Option<&mut T::Scalar> {
        let half = Self::DIM / 2;
        if idx < half {
            self.re.component_mut(idx)
        } else {
            self.im.component_mut(idx - half)
        }
    }
}

// ===================================================================
// -------------------------- Identities -----------------------------
// ===================================================================

impl<T: Algebra> num_traits::Zero for Cayley<T> {
    #[inline]
    fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl<T: Algebra> num_traits::One for Cayley<T> {
    #[inline]
    fn one() -> Self {
        Self {
            re: T::one(),
            im: T::zero(),
        }
    }
}

// ===================================================================
// -------------------------- Conversions ----------------------------
// ===================================================================

/// Zero-extending embedding from the next-lower level: the value becomes
/// the real part, the imaginary part is zero. Compose `From` calls to
/// climb more than one level.
impl<T: Algebra> From<T> for Cayley<T> {
    #[inline]
    fn from(lower: T) -> Self {
        Self {
            re: lower,
            im: T::zero(),
        }
    }
}

/// Lossless bridge from the `num_complex` representation of depth 0.
impl<S: ScalarReal + Algebra<Scalar = S>> From<num_complex::Complex<S>> for Cayley<S> {
    #[inline]
    fn from(z: num_complex::Complex<S>) -> Self {
        Self { re: z.re, im: z.im }
    }
}

// Lossless bridge back into `num_complex` for depth 0. Spelled out per
// float type; a generic impl would put the type parameter uncovered in
// front of the local type and trip the orphan rules.
macro_rules! impl_into_num_complex {
    ($($t:ty),* $(,)?) => {$(
        impl From<Cayley<$t>> for num_complex::Complex<$t> {
            #[inline]
            fn from(z: Cayley<$t>) -> Self {
                num_complex::Complex::new(z.re, z.im)
            }
        }
    )*}
}
impl_into_num_complex!(f32, f64);

// ===================================================================
// ------------------------ Cross-Depth Equality ---------------------
// ===================================================================

/// A value equals a lower-level value exactly when it is that value's
/// zero-extending embedding: real parts equal, imaginary part zero.
/// Exact structural comparison, no epsilon.
impl<T: Algebra> PartialEq<T> for Cayley<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.re == *other && self.im.is_zero()
    }
}
