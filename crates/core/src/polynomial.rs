use std::array;
use std::ops::{Add, Mul, Neg, Sub};

use crate::LinearFunction;

/// A polynomial algebra with `N` coefficients.
///
/// The value `[c₀, c₁, …, c_{N-1}]` represents `x ↦ Σ cᵢ xⁱ`.
/// All operations act coefficient-wise, so the representation is linear in
/// the sense required by [`LinearFunction`].
///
/// # Example
///
/// ```
/// use mirror_core::{LinearFunction, Polynomial};
///
/// // p(x) = 1 - 2x + x²
/// let p = Polynomial::new([1.0, -2.0, 1.0]);
/// assert_eq!(p.eval(1.0), 0.0);
/// assert_eq!((2.0 * p).eval(3.0), 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial<const N: usize>([f64; N]);

impl<const N: usize> Polynomial<N> {
    /// Creates a polynomial from coefficients in increasing degree.
    #[must_use]
    pub const fn new(coefficients: [f64; N]) -> Self {
        Self(coefficients)
    }

    /// Returns the zero polynomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0.0; N])
    }

    /// Returns the coefficients in increasing degree.
    #[must_use]
    pub fn coefficients(&self) -> &[f64; N] {
        &self.0
    }

    /// Returns the derivative, kept in the same algebra.
    ///
    /// The highest-degree coefficient of the result is always zero.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self(array::from_fn(|i| {
            if i + 1 < N {
                // Degree is at most N - 1, which comfortably fits in f64.
                #[allow(clippy::cast_precision_loss)]
                let degree = (i + 1) as f64;
                degree * self.0[i + 1]
            } else {
                0.0
            }
        }))
    }

    fn zip_with(self, rhs: Self, op: impl Fn(f64, f64) -> f64) -> Self {
        Self(array::from_fn(|i| op(self.0[i], rhs.0[i])))
    }
}

impl<const N: usize> Default for Polynomial<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[f64; N]> for Polynomial<N> {
    fn from(coefficients: [f64; N]) -> Self {
        Self(coefficients)
    }
}

impl<const N: usize> Add for Polynomial<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<const N: usize> Sub for Polynomial<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<const N: usize> Neg for Polynomial<N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.map(|c| -c))
    }
}

impl<const N: usize> Mul<f64> for Polynomial<N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0.map(|c| c * rhs))
    }
}

impl<const N: usize> Mul<Polynomial<N>> for f64 {
    type Output = Polynomial<N>;

    fn mul(self, rhs: Polynomial<N>) -> Polynomial<N> {
        rhs * self
    }
}

impl<const N: usize> LinearFunction for Polynomial<N> {
    fn eval(&self, x: f64) -> f64 {
        self.0.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}
