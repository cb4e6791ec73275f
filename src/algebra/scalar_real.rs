// src/algebra/scalar_real.rs
use core::fmt::{Debug, Display};
use core::iter::{Product, Sum};
use core::ops::Neg;
use num_traits::{Num, NumCast, One, Zero};

/// ================================================================================
/// ==============================  Seal: Impl Cleanup =============================
/// ================================================================================
mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
use sealed::Sealed;

/// ================================================================================
/// ========================  Real Scalar: Trait Definition ========================
/// ================================================================================

/// The single public trait for the real scalars that seed the construction.
///     - Restricted to `f32`/`f64`: every level of the tower needs exact
///       negation and division by a scalar, and the transcendental path
///       needs a genuine field underneath.
///     - Parallel-safe (`Send + Sync`)
///     - Provides a unified API: abs, sqrt, finite check, usize conversion
pub trait ScalarReal:
    Num
    + NumCast
    + Zero
    + One
    + Neg<Output = Self>
    + PartialOrd
    + Copy
    + Default
    + Send
    + Sync
    + 'static
    + Debug
    + Display
    + Sum<Self>
    + Product<Self>
    + Sealed
{
    /// Decimal digits the mantissa can faithfully carry (6 for `f32`,
    /// 15 for `f64`). Used as the default precision budget for the
    /// truncated series in the transcendental functions.
    const DIGITS10: usize;

    /// Lossless-enough conversion from a small counter (series term index,
    /// iteration count). Both floats represent every `usize` we ever feed in.
    fn from_usize(n: usize) -> Self;

    /// Absolute value.
    fn abs_real(self) -> Self;

    /// Square root.
    fn sqrt_real(self) -> Self;

    /// Finite check for a uniform API.
    fn is_finite_real(self) -> bool;
}

// Blanket impls for the two float types.

macro_rules! impl_scalar_real {
    ($($t:ty => $digits:expr),* $(,)?) => {$(
        impl ScalarReal for $t {
            const DIGITS10: usize = $digits;

            #[inline] fn from_usize(n: usize) -> Self { n as $t }
            #[inline] fn abs_real(self) -> Self { self.abs() }
            #[inline] fn sqrt_real(self) -> Self { self.sqrt() }
            #[inline] fn is_finite_real(self) -> bool { self.is_finite() }
        }
    )*}
}
impl_scalar_real!(f32 => 6, f64 => 15);
