//! # Quadex
//!
//! Quadratic expressions `a·x² + b·x + c` with evaluation, arithmetic,
//! root classification and rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use quadex::prelude::*;
//!
//! let mut e = QuadraticExpression::new(1.0, -3.0, 2.0);
//! assert_eq!(e.number_of_roots(), 2);
//! assert_eq!(e.smaller_root(), Ok(1.0));
//! assert_eq!(e.larger_root(), Ok(2.0));
//! assert_eq!(e.to_string(), "1.0x^2 + -3.0x + 2.0");
//!
//! e.set_c(5.0);
//! assert_eq!(e.smaller_root(), Err(RootError::NoRealRoots));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quadex_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quadex_poly::{
        QuadraticExpression, RootCount, RootError, Roots, UNBOUNDED_LOWER, UNBOUNDED_UPPER,
    };
}
