//! Textual rendering of quadratic expressions.
//!
//! Coefficients are written with `{:?}`, so whole numbers keep a trailing
//! `.0` (`1.0x^2 + -3.0x + 2.0`). Zero terms are dropped. Without an `x²`
//! term the remaining terms always start with `"+ "`, even when only one is
//! left, and `a·x²` on its own keeps a trailing space.

use std::fmt;

use crate::quadratic::QuadraticExpression;

impl fmt::Display for QuadraticExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b, c) = self.coefficients();

        if a == 0.0 {
            return match (b == 0.0, c == 0.0) {
                (true, true) => write!(f, "0"),
                (true, false) => write!(f, "+ {c:?}"),
                (false, true) => write!(f, "+ {b:?}"),
                (false, false) => write!(f, "+ {b:?}x + {c:?}"),
            };
        }

        match (b == 0.0, c == 0.0) {
            (true, true) => write!(f, "{a:?}x^2 "),
            (true, false) => write!(f, "{a:?}x^2 + {c:?}"),
            (false, true) => write!(f, "{a:?}x^2 + {b:?}x"),
            (false, false) => write!(f, "{a:?}x^2 + {b:?}x + {c:?}"),
        }
    }
}
