// src/algebra/transcendental.rs
/*!
Generic exponential and logarithm for any level of the tower.

Both functions rely solely on `+`, `*`, conjugation and scalar division,
so one definition serves the complex numbers, the quaternions, the
octonions and every deeper level alike. No closed forms, no
depth-specific branches.

- `exp` is the truncated Taylor series. The running term is refreshed as
  `term = term * z / k`, folding the factorial in one scalar division at
  a time; no factorial is ever materialized, so high term counts do not
  overflow.
- `ln` is a fixed-point refinement starting from the argument itself:
  `guess += 2 * (z - exp(guess)) / (z + exp(guess))`, with each inner
  `exp` running on a quarter of the outer budget (at least 4 terms). The
  quotient is evaluated formally as `num * conj(den) / |den|^2`.

> **Convergence (important!)**
> The refinement is not guaranteed to converge for every input. It is
> accurate for arguments near the identity and degrades as the argument
> grows or as `|z + exp(guess)|` approaches zero; the result is then
> meaningless rather than an error. Callers needing a tighter answer
> choose a larger precision and re-invoke; the budget is a parameter,
> not something adjustable mid-computation.
*/

use super::algebra_trait::Algebra;
use super::cayley::Cayley;
use super::scalar_real::ScalarReal;

/// Truncated Taylor exponential: `1 + z + z^2/2! + ... `, summed over
/// `terms` terms past the leading 1.
pub fn exp<A: Algebra>(z: A, terms: usize) -> A {
    let mut sum = A::one();
    let mut term = A::one();
    for k in 1..=terms {
        term = (term * z).unscale(A::Scalar::from_usize(k));
        sum = sum + term;
    }
    sum
}

/// Fixed-point logarithm: `iters` refinement steps from the initial
/// guess `z`, each step consuming one reduced-precision `exp`.
pub fn ln<A: Algebra>(z: A, iters: usize) -> A {
    let inner = (iters / 4).max(4);
    let two = A::Scalar::from_usize(2);
    let mut guess = z;
    for _ in 0..iters {
        let e = exp(guess, inner);
        let num = z - e;
        let den = z + e;
        // Formal right quotient num/den, no hypercomplex division operator.
        let q = (num * den.conj()).unscale(den.norm_sqr());
        guess = guess + q.scale(two);
    }
    guess
}

// ===================================================================
// -------------------- Method Surface on Cayley ---------------------
// ===================================================================

impl<T: Algebra> Cayley<T> {
    /// [`exp`] with the default budget for the scalar type
    /// (its decimal-digit capacity: 6 terms for `f32`, 15 for `f64`).
    #[inline]
    pub fn exp(self) -> Self {
        exp(self, T::Scalar::DIGITS10)
    }

    /// [`exp`] with an explicit term budget.
    #[inline]
    pub fn exp_with(self, terms: usize) -> Self {
        exp(self, terms)
    }

    /// [`ln`] with the default budget for the scalar type.
    #[inline]
    pub fn ln(self) -> Self {
        ln(self, T::Scalar::DIGITS10)
    }

    /// [`ln`] with an explicit iteration budget.
    #[inline]
    pub fn ln_with(self, iters: usize) -> Self {
        ln(self, iters)
    }

    /// Real (non-integer) power, computed as `exp(x * ln(self))` with the
    /// default precision budget.
    ///
    /// An approximation, valid only where the logarithm converges; for
    /// exact non-negative integer powers use [`Cayley::powu`].
    #[inline]
    pub fn powf(self, x: T::Scalar) -> Self {
        self.powf_with(x, T::Scalar::DIGITS10)
    }

    /// [`Cayley::powf`] with an explicit precision budget applied to both
    /// the logarithm and the exponential.
    #[inline]
    pub fn powf_with(self, x: T::Scalar, precision: usize) -> Self {
        exp(ln(self, precision).scale(x), precision)
    }
}
