use std::fmt;

use thiserror::Error;

use mirror_core::{ConvexFunction, Identity, LinearFunction};

use super::Error;

/// Errors that can occur when validating mirror descent parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParametersError {
    #[error("step size c(0) = {value} must be positive")]
    NonPositiveStep { value: f64 },

    #[error("step size c(0) = {value} is not finite")]
    UndefinedStep { value: f64 },
}

/// The immutable configuration of a mirror descent run.
///
/// - `phi` — the divergence-generating convex function Φ
/// - `objective` — the convex function f being minimized
/// - `step_size` — the schedule `k ↦ c(k)`, which must stay positive
/// - `subgradient` — the oracle `x ↦ u`, an element of the algebra that
///   approximates f at `x`
///
/// Φ and f share the algebra `L` but usually have different identities.
pub struct Parameters<L, D, F, C, G> {
    phi: ConvexFunction<L, D>,
    objective: ConvexFunction<L, F>,
    step_size: C,
    subgradient: G,
}

impl<L, D, F, C, G> Parameters<L, D, F, C, G>
where
    L: LinearFunction + 'static,
    D: Identity,
    F: Identity,
    C: Fn(usize) -> f64,
    G: Fn(f64) -> L,
{
    /// Creates validated parameters.
    ///
    /// Only `c(0)` can be checked up front; later step sizes are validated
    /// as the run reaches them.
    ///
    /// # Errors
    ///
    /// Returns [`ParametersError`] if `c(0)` is not finite or not positive.
    pub fn new(
        phi: ConvexFunction<L, D>,
        objective: ConvexFunction<L, F>,
        step_size: C,
        subgradient: G,
    ) -> Result<Self, ParametersError> {
        let value = step_size(0);
        if !value.is_finite() {
            return Err(ParametersError::UndefinedStep { value });
        }
        if value <= 0.0 {
            return Err(ParametersError::NonPositiveStep { value });
        }

        Ok(Self {
            phi,
            objective,
            step_size,
            subgradient,
        })
    }

    /// Returns the divergence-generating function Φ.
    #[must_use]
    pub fn phi(&self) -> ConvexFunction<L, D> {
        self.phi
    }

    /// Returns the objective f.
    #[must_use]
    pub fn objective(&self) -> ConvexFunction<L, F> {
        self.objective
    }

    /// Returns the validated step size `c(k)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepSizeUndefined`] if `c(k)` is NaN or infinite, and
    /// [`Error::StepSize`] if it is not positive.
    pub fn step_size(&self, k: usize) -> Result<f64, Error> {
        let value = (self.step_size)(k);
        if !value.is_finite() {
            return Err(Error::StepSizeUndefined { k, value });
        }
        if value <= 0.0 {
            return Err(Error::StepSize { k, value });
        }
        Ok(value)
    }

    /// Returns the subgradient of f at `x`, for the state with index `k`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Subgradient`] if `x` or the oracle's result is not
    /// finite.
    pub fn subgradient(&self, k: usize, x: f64) -> Result<L, Error> {
        if !x.is_finite() {
            return Err(Error::Subgradient { k, x });
        }
        let u = (self.subgradient)(x);
        if !u.is_finite() {
            return Err(Error::Subgradient { k, x });
        }
        Ok(u)
    }
}

impl<L, D: Identity, F: Identity, C, G> fmt::Debug for Parameters<L, D, F, C, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameters")
            .field("phi", &self.phi)
            .field("objective", &self.objective)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    struct HalfSquare;

    impl Identity for HalfSquare {
        const NAME: &'static str = "half_square";

        fn definition(x: f64) -> f64 {
            0.5 * x * x
        }
    }

    struct Abs;

    impl Identity for Abs {
        const NAME: &'static str = "abs";

        fn definition(x: f64) -> f64 {
            x.abs()
        }
    }

    fn phi() -> ConvexFunction<f64, HalfSquare> {
        ConvexFunction::declare()
    }

    fn abs() -> ConvexFunction<f64, Abs> {
        ConvexFunction::declare()
    }

    #[test]
    fn rejects_non_positive_first_step() {
        let result = Parameters::new(phi(), abs(), |_| 0.0, f64::signum);
        assert_eq!(
            result.unwrap_err(),
            ParametersError::NonPositiveStep { value: 0.0 }
        );

        let result = Parameters::new(phi(), abs(), |_| -1.0, f64::signum);
        assert!(matches!(
            result,
            Err(ParametersError::NonPositiveStep { .. })
        ));
    }

    #[test]
    fn rejects_undefined_first_step() {
        let result = Parameters::new(phi(), abs(), |_| f64::NAN, f64::signum);
        assert!(matches!(result, Err(ParametersError::UndefinedStep { .. })));
    }

    #[test]
    fn validates_later_steps() {
        #[allow(clippy::cast_precision_loss)]
        let schedule = |k: usize| 1.0 - k as f64;
        let params = Parameters::new(phi(), abs(), schedule, f64::signum).unwrap();

        assert_relative_eq!(params.step_size(0).unwrap(), 1.0);
        assert!(matches!(
            params.step_size(1),
            Err(Error::StepSize { k: 1, .. })
        ));
        assert!(matches!(
            params.step_size(2),
            Err(Error::StepSize { k: 2, .. })
        ));
    }

    #[test]
    fn rejects_non_finite_subgradient() {
        let params =
            Parameters::new(phi(), abs(), |_| 1.0, |x: f64| if x > 5.0 { f64::NAN } else { 1.0 })
                .unwrap();

        assert_relative_eq!(params.subgradient(0, 1.0).unwrap(), 1.0);
        assert!(matches!(
            params.subgradient(3, 6.0),
            Err(Error::Subgradient { k: 3, .. })
        ));
        assert!(matches!(
            params.subgradient(0, f64::INFINITY),
            Err(Error::Subgradient { .. })
        ));
    }
}
