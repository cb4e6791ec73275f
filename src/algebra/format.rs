// src/algebra/format.rs
/*!
Textual rendering for `Cayley<T>`.

- 2 components: `a+bi`
- 4 components: `a+bi+cj+dk` (the familiar quaternion letters)
- 8 components and up: indexed basis labels, `a0e0+a1e1+...`

A literal `+` is inserted before every component whose own rendering does
not begin with a `-`; negative components carry their sign themselves.
The formatter's `width`/`precision` are applied uniformly to every
component and never alter the sign logic.
*/

use core::fmt;

use super::algebra_trait::Algebra;
use super::cayley::Cayley;

impl<T: Algebra> fmt::Display for Cayley<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for idx in 0..Self::DIM {
            // In bounds by the loop; the recursion cannot miss.
            let Some(c) = self.component(idx) else {
                return Err(fmt::Error);
            };
            let rendered = match (f.width(), f.precision()) {
                (Some(w), Some(p)) => format!("{c:w$.p$}"),
                (Some(w), None) => format!("{c:w$}"),
                (None, Some(p)) => format!("{c:.p$}"),
                (None, None) => format!("{c}"),
            };
            if idx > 0 && !rendered.trim_start().starts_with('-') {
                f.write_str("+")?;
            }
            f.write_str(&rendered)?;
            match Self::DIM {
                2 => {
                    if idx == 1 {
                        f.write_str("i")?;
                    }
                }
                4 => f.write_str(["", "i", "j", "k"][idx])?,
                _ => write!(f, "e{idx}")?,
            }
        }
        Ok(())
    }
}
