// src/lib.rs
/*!
**hypercomplex** - recursively constructed Cayley-Dickson algebras.

One generic pair type [`Cayley<T>`] builds, from a real float seed, the
whole tower of hypercomplex algebras: complex numbers, quaternions,
octonions, sedenions and onward, each level doubling the component count
of the one below. One set of arithmetic operators, integer/real powers,
generic `exp`/`ln`, flat component addressing and textual rendering
serves every level, because everything is defined by recursion on the
level below.

# Quick start

```
use hypercomplex::Quaternion;

let i = Quaternion::<f64>::from_components(&[0.0, 1.0]);
let j = Quaternion::<f64>::from_components(&[0.0, 0.0, 1.0]);
let k = i * j;

assert_eq!(k.component_at(3), Ok(1.0));
assert_eq!(i * j, -(j * i)); // the quaternions do not commute
assert_eq!(format!("{}", k), "0+0i+0j+1k");
```

# What degrades with depth

| depth | algebra     | loses                         |
|-------|-------------|-------------------------------|
| 0     | complex     | nothing                       |
| 1     | quaternions | commutativity                 |
| 2     | octonions   | associativity                 |
| 3     | sedenions   | division (zero divisors)      |

Division by a hypercomplex operand is therefore refused uniformly (see
[`Cayley::try_div`]); only scalar division is provided.
*/

pub mod algebra;
pub mod error;

pub use algebra::algebra_trait::Algebra;
pub use algebra::cayley::{Cayley, Complex, Octonion, Quaternion, Sedenion, Trigintaduonion};
pub use algebra::scalar_real::ScalarReal;
pub use algebra::transcendental::{exp, ln};
pub use error::AlgebraError;
