//! Errors raised by root extraction.

use thiserror::Error;

/// Errors that can occur when extracting roots of a quadratic expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RootError {
    /// The discriminant is negative, or the expression is a nonzero constant.
    #[error("no real roots")]
    NoRealRoots,
}
