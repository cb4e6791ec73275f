use hypercomplex::{Algebra, AlgebraError, Octonion, Sedenion};
use num_traits::Zero;

fn sedenion_basis(i: usize) -> Sedenion<f64> {
    let mut v = Sedenion::<f64>::zero();
    v.set_component(i, 1.0).unwrap();
    v
}

#[test]
fn sedenions_have_zero_divisors() {
    // Two nonzero, non-conjugate sedenions whose product is exactly zero.
    let x = sedenion_basis(1) + sedenion_basis(10);
    let y = sedenion_basis(4) - sedenion_basis(15);

    assert!(!x.is_zero());
    assert!(!y.is_zero());
    assert!((x * y).is_zero());
}

#[test]
fn quaternions_and_octonions_have_no_zero_divisors_here() {
    // Norm composition: |x*y|^2 == |x|^2 * |y|^2 holds through depth 2,
    // so a product of nonzero values cannot vanish.
    let x = Octonion::<f64>::from_components(&[1.0, -2.0, 0.5, 0.3, -0.4, 0.2, -0.1, 0.25]);
    let y = Octonion::<f64>::from_components(&[0.7, 0.1, -1.3, 2.0, 0.6, -0.9, 1.1, -0.2]);
    let prod = (x * y).norm_sqr();
    assert!((prod - x.norm_sqr() * y.norm_sqr()).abs() <= 1e-9 * prod.abs());
}

#[test]
fn hypercomplex_division_is_refused_but_scalar_division_works() {
    let x = Octonion::<f64>::from_components(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let y = Octonion::<f64>::from_real(2.0);

    assert!(matches!(
        x.try_div(y),
        Err(AlgebraError::UnsupportedOperation(_))
    ));

    let halved = x / 2.0;
    assert_eq!(
        halved,
        Octonion::<f64>::from_components(&[0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0])
    );
}
