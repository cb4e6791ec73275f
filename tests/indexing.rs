use hypercomplex::{Algebra, AlgebraError, Complex, Octonion, Quaternion, Sedenion};
use num_traits::Zero;

#[test]
fn set_then_get_round_trips_every_index() {
    fn check<A: Algebra<Scalar = f64>>() {
        // Exercised through the public fallible surface on Cayley below;
        // here the trait-level accessors, at every valid index.
        let mut v = A::zero();
        for i in 0..A::DIM {
            *v.component_mut(i).unwrap() = i as f64 + 1.0;
        }
        for i in 0..A::DIM {
            assert_eq!(v.component(i), Some(i as f64 + 1.0));
        }
    }
    check::<Complex<f64>>();
    check::<Quaternion<f64>>();
    check::<Octonion<f64>>();
    check::<Sedenion<f64>>();
}

#[test]
fn fallible_accessors_round_trip() {
    let mut v = Octonion::<f64>::zero();
    for i in 0..8 {
        v.set_component(i, -(i as f64)).unwrap();
    }
    for i in 0..8 {
        assert_eq!(v.component_at(i), Ok(-(i as f64)));
    }
}

#[test]
fn quaternion_index_order_is_re_re_re_im_im_re_im_im() {
    let q = Quaternion::<f64>::from_components(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(q.re.re, 1.0);
    assert_eq!(q.re.im, 2.0);
    assert_eq!(q.im.re, 3.0);
    assert_eq!(q.im.im, 4.0);
}

#[test]
fn one_past_the_end_is_an_error_not_a_default() {
    let v = Sedenion::<f64>::from_real(1.0);
    assert_eq!(
        v.component_at(16),
        Err(AlgebraError::IndexOutOfRange { index: 16, dim: 16 })
    );

    let mut v = v;
    assert_eq!(
        v.set_component(16, 9.0),
        Err(AlgebraError::IndexOutOfRange { index: 16, dim: 16 })
    );
    // And far past the end too.
    assert!(v.set_component(1000, 9.0).is_err());
}

#[test]
fn from_components_ignores_extras_and_zero_fills_the_rest() {
    let q = Quaternion::<f64>::from_components(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(q, Quaternion::<f64>::from_components(&[1.0, 2.0, 3.0, 4.0]));

    let short = Quaternion::<f64>::from_components(&[7.0]);
    assert_eq!(short.components(), vec![7.0, 0.0, 0.0, 0.0]);
}

#[test]
fn from_real_touches_only_the_real_slot() {
    let o = Octonion::<f64>::from_real(2.5);
    assert_eq!(o.component_at(0), Ok(2.5));
    for i in 1..8 {
        assert_eq!(o.component_at(i), Ok(0.0));
    }
}
