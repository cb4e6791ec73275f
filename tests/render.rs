use hypercomplex::{Complex, Octonion, Quaternion};

#[test]
fn complex_renders_with_the_i_suffix() {
    assert_eq!(format!("{}", Complex::<f64>::new(1.5, -2.0)), "1.5-2i");
    assert_eq!(format!("{}", Complex::<f64>::new(-1.0, 0.5)), "-1+0.5i");
}

#[test]
fn quaternion_renders_with_named_letters() {
    let q = Quaternion::<f64>::from_components(&[1.0, -2.0, 3.0, -4.0]);
    assert_eq!(format!("{}", q), "1-2i+3j-4k");

    let zero_heavy = Quaternion::<f64>::from_components(&[0.0, 1.0]);
    assert_eq!(format!("{}", zero_heavy), "0+1i+0j+0k");
}

#[test]
fn octonion_renders_with_indexed_basis_labels() {
    let o = Octonion::<f64>::from_components(&[1.0, 2.0, -3.0, 4.0, 5.0, -6.0, 7.0, 8.0]);
    assert_eq!(format!("{}", o), "1e0+2e1-3e2+4e3+5e4-6e5+7e6+8e7");
}

#[test]
fn precision_applies_uniformly_to_every_component() {
    let q = Quaternion::<f64>::from_components(&[1.0, -2.0, 3.0, -4.0]);
    assert_eq!(format!("{:.2}", q), "1.00-2.00i+3.00j-4.00k");

    let c = Complex::<f64>::new(0.12345, -0.6789);
    assert_eq!(format!("{:.3}", c), "0.123-0.679i");
}
