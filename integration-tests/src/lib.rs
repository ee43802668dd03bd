//! Shared fixtures for the end-to-end tests.
//!
//! The scalar setup is the reference configuration: `L = ℝ`, Φ(x) = x²/2
//! with mirror map `λ ↦ -λ`, f(x) = |x| with subgradient `sign(x)`, and the
//! harmonic schedule c(k) = 1/(k + 1).

use thiserror::Error;

use mirror_core::{ConvexFunction, Identity, MinimizeError, Minimizers, Polynomial, Subproblem};
use mirror_solvers::mirror_descent::Parameters;

/// Φ(x) = x²/2.
pub struct HalfSquare;

impl Identity for HalfSquare {
    const NAME: &'static str = "half_square";

    fn definition(x: f64) -> f64 {
        0.5 * x * x
    }
}

/// f(x) = |x|.
pub struct Abs;

impl Identity for Abs {
    const NAME: &'static str = "abs";

    fn definition(x: f64) -> f64 {
        x.abs()
    }
}

/// Φ(x) = x⁴/4.
pub struct Quartic;

impl Identity for Quartic {
    const NAME: &'static str = "quartic";

    fn definition(x: f64) -> f64 {
        0.25 * x.powi(4)
    }
}

/// f(x) = (x - 3)².
pub struct Parabola;

impl Identity for Parabola {
    const NAME: &'static str = "parabola";

    fn definition(x: f64) -> f64 {
        (x - 3.0).powi(2)
    }
}

pub type Schedule = fn(usize) -> f64;
pub type Oracle<L> = fn(f64) -> L;

pub type ScalarParameters = Parameters<f64, HalfSquare, Abs, Schedule, Oracle<f64>>;
pub type CubicParameters = Parameters<Polynomial<4>, Quartic, Parabola, Schedule, Oracle<Polynomial<4>>>;

/// c(k) = 1/(k + 1).
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn harmonic(k: usize) -> f64 {
    1.0 / (k as f64 + 1.0)
}

/// c(k) = 1.
#[must_use]
pub fn constant(_: usize) -> f64 {
    1.0
}

/// Parameters for the scalar reference configuration.
///
/// # Panics
///
/// Never: the harmonic schedule is positive at k = 0.
#[must_use]
pub fn scalar_parameters() -> ScalarParameters {
    Parameters::new(
        ConvexFunction::declare(),
        ConvexFunction::declare(),
        harmonic as Schedule,
        f64::signum as Oracle<f64>,
    )
    .expect("harmonic schedule is positive")
}

/// Parameters for x⁴/4 over cubic polynomials, minimizing (x - 3)².
///
/// # Panics
///
/// Never: the constant schedule is positive.
#[must_use]
pub fn cubic_parameters() -> CubicParameters {
    Parameters::new(
        ConvexFunction::declare(),
        ConvexFunction::declare(),
        constant as Schedule,
        parabola_subgradient as Oracle<Polynomial<4>>,
    )
    .expect("constant schedule is positive")
}

/// The slope of (x - 3)² at `x`, as a linear term.
#[must_use]
pub fn parabola_subgradient(x: f64) -> Polynomial<4> {
    Polynomial::new([0.0, 2.0 * (x - 3.0), 0.0, 0.0])
}

/// The mirror map of x²/2: argmin x²/2 + a·x = -a.
///
/// # Errors
///
/// Never fails.
pub fn half_square_minimizer(pb: &Subproblem<f64, HalfSquare>) -> Result<f64, MinimizeError> {
    Ok(-*pb.lambda())
}

/// The mirror map of x⁴/4 over cubic polynomials.
///
/// Only subproblems without quadratic or cubic terms have the closed form
/// y = -∛b used here; anything else is reported as a failure.
///
/// # Errors
///
/// Returns [`MinimizeError::Failed`] if the subproblem has curvature terms.
///
/// [`MinimizeError::Failed`]: mirror_core::MinimizeError::Failed
pub fn quartic_minimizer(pb: &Subproblem<Polynomial<4>, Quartic>) -> Result<f64, MinimizeError> {
    let [_, b, c, d] = *pb.lambda().coefficients();
    if c != 0.0 || d != 0.0 {
        return Err(MinimizeError::failed(NoClosedForm));
    }
    Ok(-b.cbrt())
}

/// Raised when a subproblem falls outside the supported closed forms.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("subproblem has no closed-form minimizer")]
pub struct NoClosedForm;

/// Minimizers for both configurations.
///
/// # Panics
///
/// Never: the two pairs are distinct.
#[must_use]
pub fn minimizers() -> Minimizers {
    Minimizers::new()
        .with(half_square_minimizer)
        .and_then(|m| m.with(quartic_minimizer))
        .expect("pairs are distinct")
}
