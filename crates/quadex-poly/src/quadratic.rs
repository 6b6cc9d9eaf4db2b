//! Quadratic expressions `a·x² + b·x + c` over `f64`.
//!
//! The expression is a small mutable value: coefficients can be reassigned
//! one at a time and another expression can be accumulated in place with
//! [`QuadraticExpression::add`]. [`QuadraticExpression::sum`] and
//! [`QuadraticExpression::scale`] are pure and return fresh values.

use std::iter::Sum;
use std::ops::{AddAssign, Mul};

/// A quadratic expression `a·x² + b·x + c`.
///
/// Coefficients are not validated: NaN and infinities are stored as given
/// and flow through every operation under ordinary IEEE-754 rules.
///
/// Equality is exact coefficient-wise `==`, with no tolerance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct QuadraticExpression {
    a: f64,
    b: f64,
    c: f64,
}

impl QuadraticExpression {
    /// Creates the expression `a·x² + b·x + c`.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Returns the coefficient of `x²`.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Returns the coefficient of `x`.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Returns the constant term.
    #[must_use]
    pub const fn c(&self) -> f64 {
        self.c
    }

    /// Returns `(a, b, c)`.
    #[must_use]
    pub const fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Replaces the coefficient of `x²`.
    pub fn set_a(&mut self, a: f64) {
        self.a = a;
    }

    /// Replaces the coefficient of `x`.
    pub fn set_b(&mut self, b: f64) {
        self.b = b;
    }

    /// Replaces the constant term.
    pub fn set_c(&mut self, c: f64) {
        self.c = c;
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.a == 0.0 && self.b == 0.0 && self.c == 0.0
    }

    /// Evaluates the expression at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * (x * x) + self.b * x + self.c
    }

    /// Returns `p + q` as a new expression.
    #[must_use]
    pub fn sum(p: &Self, q: &Self) -> Self {
        Self::new(p.a + q.a, p.b + q.b, p.c + q.c)
    }

    /// Returns `r * q` as a new expression.
    ///
    /// Every coefficient is multiplied, so `r == 0` with an infinite
    /// coefficient yields NaN rather than zero.
    #[must_use]
    pub fn scale(r: f64, q: &Self) -> Self {
        Self::new(q.a * r, q.b * r, q.c * r)
    }

    /// Adds `q` into `self` in place.
    pub fn add(&mut self, q: &Self) {
        self.a += q.a;
        self.b += q.b;
        self.c += q.c;
    }
}

impl From<(f64, f64, f64)> for QuadraticExpression {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        Self::new(a, b, c)
    }
}

impl From<[f64; 3]> for QuadraticExpression {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self::new(a, b, c)
    }
}

// Arithmetic operations
impl AddAssign for QuadraticExpression {
    fn add_assign(&mut self, rhs: Self) {
        QuadraticExpression::add(self, &rhs);
    }
}

impl AddAssign<&QuadraticExpression> for QuadraticExpression {
    fn add_assign(&mut self, rhs: &QuadraticExpression) {
        QuadraticExpression::add(self, rhs);
    }
}

impl Mul<f64> for QuadraticExpression {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::scale(rhs, &self)
    }
}

impl Mul<f64> for &QuadraticExpression {
    type Output = QuadraticExpression;

    fn mul(self, rhs: f64) -> Self::Output {
        QuadraticExpression::scale(rhs, self)
    }
}

impl Mul<QuadraticExpression> for f64 {
    type Output = QuadraticExpression;

    fn mul(self, rhs: QuadraticExpression) -> Self::Output {
        QuadraticExpression::scale(self, &rhs)
    }
}

impl Mul<&QuadraticExpression> for f64 {
    type Output = QuadraticExpression;

    fn mul(self, rhs: &QuadraticExpression) -> Self::Output {
        QuadraticExpression::scale(self, rhs)
    }
}

impl Sum for QuadraticExpression {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, q| QuadraticExpression::sum(&acc, &q))
    }
}

impl<'a> Sum<&'a QuadraticExpression> for QuadraticExpression {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, q| QuadraticExpression::sum(&acc, q))
    }
}
