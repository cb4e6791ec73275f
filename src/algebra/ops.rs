// src/algebra/ops.rs
/*!
Operator impls for `Cayley<T>`, all defined by recursion on the level
below and bottoming out at the float scalars.

Multiplication uses the conjugate-based Cayley-Dickson doubling rule

```text
(a, b) * (c, d) = (a*c - conj(d)*b,  d*a + b*conj(c))
```

with `conj` the identity on scalars. At depth 0 this collapses to the
ordinary complex product, at depth 1 it yields the genuine (associative,
non-commutative) quaternion product, and from depth 2 on it produces the
octonion/sedenion products with their documented loss of associativity
and, from depth 3, zero divisors. Operand order inside each term matters
and must not be "simplified".

Mixed-mode operands: each binary operator also accepts a value of the
next-lower level on the right (zero-extended before combining), which at
depth 0 is exactly the bare-scalar case. Scalar-on-the-left operators are
provided for `f32`/`f64` so that `s + v`, `s - v` and `s * v` behave like
their commuted forms, with subtraction negating correctly. Division
exists only with a scalar divisor; see `Cayley::try_div` for why.
*/

use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use super::algebra_trait::Algebra;
use super::cayley::Cayley;

// ===================================================================
// --------------------- Same-Level Binary Ops -----------------------
// ===================================================================

impl<T: Algebra> Add for Cayley<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Algebra> Sub for Cayley<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Algebra> Mul for Cayley<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let Cayley { re: a, im: b } = self;
        let Cayley { re: c, im: d } = rhs;
        Self::new(a * c - d.conj() * b, d * a + b * c.conj())
    }
}

impl<T: Algebra> Neg for Cayley<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

// ===================================================================
// ------------------- Lower-Level / Scalar Operands -----------------
// ===================================================================
// The right operand is promoted by zero extension. At depth 0 the lower
// level *is* the scalar type, so these double as the bare-scalar ops.

impl<T: Algebra> Add<T> for Cayley<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        Self::new(self.re + rhs, self.im)
    }
}

impl<T: Algebra> Sub<T> for Cayley<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self::new(self.re - rhs, self.im)
    }
}

impl<T: Algebra> Mul<T> for Cayley<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self * Self::from(rhs)
    }
}

/// Division by a bare scalar: exact component-wise division. This is the
/// only `Div` impl; a hypercomplex divisor is refused by `try_div`.
impl<T: Algebra> Div<<T as Algebra>::Scalar> for Cayley<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T::Scalar) -> Self {
        self.unscale(rhs)
    }
}

// ===================================================================
// ---------------------- Scalar on the Left -------------------------
// ===================================================================

macro_rules! impl_real_lhs {
    ($($t:ty),* $(,)?) => {$(
        impl<T: Algebra<Scalar = $t>> Add<Cayley<T>> for $t {
            type Output = Cayley<T>;

            #[inline]
            fn add(self, rhs: Cayley<T>) -> Cayley<T> {
                Cayley::new(T::from_real(self) + rhs.re, rhs.im)
            }
        }

        impl<T: Algebra<Scalar = $t>> Sub<Cayley<T>> for $t {
            type Output = Cayley<T>;

            #[inline]
            fn sub(self, rhs: Cayley<T>) -> Cayley<T> {
                Cayley::new(T::from_real(self) - rhs.re, -rhs.im)
            }
        }

        impl<T: Algebra<Scalar = $t>> Mul<Cayley<T>> for $t {
            type Output = Cayley<T>;

            #[inline]
            fn mul(self, rhs: Cayley<T>) -> Cayley<T> {
                rhs.scale(self)
            }
        }
    )*}
}
impl_real_lhs!(f32, f64);

// ===================================================================
// ----------------------- Compound Assignment -----------------------
// ===================================================================
// Mutate the receiver in place, matching the binary recurrences.

impl<T: Algebra> AddAssign for Cayley<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Algebra> SubAssign for Cayley<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Algebra> MulAssign for Cayley<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Algebra> AddAssign<T> for Cayley<T> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

impl<T: Algebra> SubAssign<T> for Cayley<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

impl<T: Algebra> MulAssign<T> for Cayley<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}
