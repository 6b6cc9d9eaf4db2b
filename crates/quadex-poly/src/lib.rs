//! # quadex-poly
//!
//! Quadratic expressions `a·x² + b·x + c` over `f64`.
//!
//! This crate provides:
//! - A mutable value type with independent coefficient setters
//! - Evaluation, pure `sum`/`scale` and in-place `add`
//! - Real-root classification and extraction, including the degenerate
//!   linear and zero-polynomial forms
//! - Algebraic `Display` rendering
//!
//! ## Root classification
//!
//! | Expression | `number_of_roots()` |
//! |------------|---------------------|
//! | `0` | 3 (every real is a root) |
//! | nonzero constant, or `d < 0` | 0 |
//! | linear, or `d = 0` | 1 |
//! | otherwise | 2 |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Coefficient comparisons are exact.
#![allow(clippy::float_cmp)]

mod display;
pub mod error;
pub mod quadratic;
pub mod roots;

#[cfg(test)]
mod proptests;

pub use error::RootError;
pub use quadratic::QuadraticExpression;
pub use roots::{RootCount, Roots, UNBOUNDED_LOWER, UNBOUNDED_UPPER};
