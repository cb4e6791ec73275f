// src/algebra/cayley_rand.rs
/*
    Random fillers that work **in-place** on any `Algebra` value with f64
    components. Handy for property-style tests and Monte Carlo sampling.
*/

use rand_distr::{Distribution, StandardNormal, Uniform};

use super::algebra_trait::Algebra;

/// Fill every component with an independent `Uniform(a, b)` draw.
pub fn fill_uniform<A: Algebra<Scalar = f64>>(v: &mut A, a: f64, b: f64) {
    let dist = Uniform::new(a, b).expect("invalid uniform bounds");
    let mut rng = rand::rng();
    for i in 0..A::DIM {
        if let Some(c) = v.component_mut(i) {
            *c = dist.sample(&mut rng);
        }
    }
}

/// Fill every component with an independent standard-normal draw.
pub fn fill_normal<A: Algebra<Scalar = f64>>(v: &mut A) {
    let mut rng = rand::rng();
    for i in 0..A::DIM {
        if let Some(c) = v.component_mut(i) {
            *c = StandardNormal.sample(&mut rng);
        }
    }
}
