//! Real-root classification and extraction.
//!
//! Classification works on the discriminant `d = b² − 4ac` and special-cases
//! the degenerate forms before looking at `d`:
//!
//! 1. `a = b = c = 0`: every real number is a root ([`RootCount::Infinite`]).
//! 2. `d < 0`, or `a = b = 0` with `c ≠ 0`: no real roots.
//! 3. `d = 0`, or `a = 0` (a linear equation): one root.
//! 4. Otherwise: two distinct roots.
//!
//! The order matters: the zero polynomial is checked first, then the
//! unsatisfiable constant, then the single-root cases.
//!
//! ## Degenerate results
//!
//! The single root is always `−b / (2a)`. For a linear expression (`a = 0`)
//! this divides by zero and yields an infinity or NaN; that value is returned
//! as is.
//!
//! For the zero polynomial, [`QuadraticExpression::smaller_root`] and
//! [`QuadraticExpression::larger_root`] return [`UNBOUNDED_LOWER`] and
//! [`UNBOUNDED_UPPER`]. Those are markers, not bounds. [`QuadraticExpression::roots`]
//! reports the same case as [`Roots::Unbounded`].

use tracing::trace;

use crate::error::RootError;
use crate::quadratic::QuadraticExpression;

/// Marker returned by [`QuadraticExpression::smaller_root`] when every real
/// number is a root.
pub const UNBOUNDED_LOWER: f64 = -f64::MAX;

/// Marker returned by [`QuadraticExpression::larger_root`] when every real
/// number is a root.
pub const UNBOUNDED_UPPER: f64 = f64::MAX;

/// How many real roots an expression has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RootCount {
    /// No real roots.
    NoReal,
    /// Exactly one real root (a double root, or a linear equation).
    One,
    /// Two distinct real roots.
    Two,
    /// Every real number is a root.
    Infinite,
}

impl RootCount {
    /// Returns the numeric count, with `3` standing for [`RootCount::Infinite`].
    #[must_use]
    pub const fn as_legacy_count(self) -> u8 {
        match self {
            RootCount::NoReal => 0,
            RootCount::One => 1,
            RootCount::Two => 2,
            RootCount::Infinite => 3,
        }
    }

    /// Returns true if at least one real root exists.
    #[must_use]
    pub const fn has_real_roots(self) -> bool {
        !matches!(self, RootCount::NoReal)
    }
}

/// The real roots of an expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Roots {
    /// A single root.
    One(f64),
    /// Two distinct roots, ordered.
    Two {
        /// The numerically smaller root.
        smaller: f64,
        /// The numerically larger root.
        larger: f64,
    },
    /// Every real number is a root.
    Unbounded,
}

impl Roots {
    /// Returns true for [`Roots::Unbounded`].
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Roots::Unbounded)
    }

    /// Returns the smaller root, or [`UNBOUNDED_LOWER`] when unbounded.
    #[must_use]
    pub const fn smaller(&self) -> f64 {
        match *self {
            Roots::One(x) => x,
            Roots::Two { smaller, .. } => smaller,
            Roots::Unbounded => UNBOUNDED_LOWER,
        }
    }

    /// Returns the larger root, or [`UNBOUNDED_UPPER`] when unbounded.
    #[must_use]
    pub const fn larger(&self) -> f64 {
        match *self {
            Roots::One(x) => x,
            Roots::Two { larger, .. } => larger,
            Roots::Unbounded => UNBOUNDED_UPPER,
        }
    }
}

impl QuadraticExpression {
    /// Returns the discriminant `b² − 4ac`.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b() * self.b() - 4.0 * self.a() * self.c()
    }

    /// Classifies the real roots of the expression.
    ///
    /// A NaN discriminant fails every comparison and classifies as
    /// [`RootCount::Two`].
    #[must_use]
    pub fn root_count(&self) -> RootCount {
        let (a, b, _) = self.coefficients();
        let d = self.discriminant();

        if self.is_zero() {
            RootCount::Infinite
        } else if d < 0.0 || (a == 0.0 && b == 0.0) {
            RootCount::NoReal
        } else if d == 0.0 || a == 0.0 {
            RootCount::One
        } else {
            RootCount::Two
        }
    }

    /// Returns the number of real roots, `3` meaning every real is a root.
    #[must_use]
    pub fn number_of_roots(&self) -> u8 {
        self.root_count().as_legacy_count()
    }

    /// Returns the smaller real root.
    ///
    /// For the zero polynomial this is [`UNBOUNDED_LOWER`].
    ///
    /// # Errors
    ///
    /// Returns [`RootError::NoRealRoots`] if there is no real root.
    pub fn smaller_root(&self) -> Result<f64, RootError> {
        match self.root_count() {
            RootCount::NoReal => Err(RootError::NoRealRoots),
            RootCount::One => Ok(self.single_root()),
            RootCount::Two => {
                let (p, q) = self.root_pair();
                Ok(if p < q { p } else { q })
            }
            RootCount::Infinite => {
                trace!("zero polynomial, returning lower sentinel root");
                Ok(UNBOUNDED_LOWER)
            }
        }
    }

    /// Returns the larger real root.
    ///
    /// For the zero polynomial this is [`UNBOUNDED_UPPER`].
    ///
    /// # Errors
    ///
    /// Returns [`RootError::NoRealRoots`] if there is no real root.
    pub fn larger_root(&self) -> Result<f64, RootError> {
        match self.root_count() {
            RootCount::NoReal => Err(RootError::NoRealRoots),
            RootCount::One => Ok(self.single_root()),
            RootCount::Two => {
                let (y, x) = self.root_pair();
                Ok(if x > y { x } else { y })
            }
            RootCount::Infinite => {
                trace!("zero polynomial, returning upper sentinel root");
                Ok(UNBOUNDED_UPPER)
            }
        }
    }

    /// Returns all real roots.
    ///
    /// # Errors
    ///
    /// Returns [`RootError::NoRealRoots`] if there is no real root.
    pub fn roots(&self) -> Result<Roots, RootError> {
        match self.root_count() {
            RootCount::NoReal => Err(RootError::NoRealRoots),
            RootCount::One => Ok(Roots::One(self.single_root())),
            RootCount::Two => {
                let (minus, plus) = self.root_pair();
                let (smaller, larger) = if minus < plus {
                    (minus, plus)
                } else {
                    (plus, minus)
                };
                Ok(Roots::Two { smaller, larger })
            }
            RootCount::Infinite => Ok(Roots::Unbounded),
        }
    }

    /// `−b / (2a)`, unguarded.
    fn single_root(&self) -> f64 {
        let (a, b, c) = self.coefficients();
        if a == 0.0 {
            trace!(b, c, "linear expression, single root divides by zero");
        }
        -b / (2.0 * a)
    }

    /// `((−b − √d) / 2a, (−b + √d) / 2a)`.
    fn root_pair(&self) -> (f64, f64) {
        let (a, b, _) = self.coefficients();
        let sqrt_d = self.discriminant().sqrt();
        ((-b - sqrt_d) / (2.0 * a), (-b + sqrt_d) / (2.0 * a))
    }
}
