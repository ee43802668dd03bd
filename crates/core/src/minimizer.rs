use std::any::Any;
use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

use log::trace;
use thiserror::Error;

use crate::{ConvexFunction, DispatchKey, Identity, LinearFunction, Subproblem};

/// Finds the exact minimizer of a [`Subproblem`] `Φ(y) + λ(y)`.
///
/// The closed form depends on the algebra and on Φ, so one minimizer is
/// supplied per (algebra, identity) pair and registered in [`Minimizers`].
/// Implementations must be deterministic, and must return an error rather
/// than a guess when no minimizer exists.
///
/// Closures with the matching signature implement this trait.
pub trait Minimizer<L, I> {
    /// Returns the point minimizing `Φ(y) + λ(y)`.
    ///
    /// # Errors
    ///
    /// Returns [`MinimizeError`] if no minimizer can be found.
    fn minimize(&self, subproblem: &Subproblem<L, I>) -> Result<f64, MinimizeError>;
}

impl<L, I, F> Minimizer<L, I> for F
where
    F: Fn(&Subproblem<L, I>) -> Result<f64, MinimizeError>,
{
    fn minimize(&self, subproblem: &Subproblem<L, I>) -> Result<f64, MinimizeError> {
        self(subproblem)
    }
}

/// Errors raised while registering minimizers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a minimizer is already registered for {0}")]
    Duplicate(DispatchKey),
}

/// Errors raised while minimizing a subproblem.
#[derive(Debug, Error)]
pub enum MinimizeError {
    #[error("no minimizer registered for {0}")]
    Unregistered(DispatchKey),

    #[error("minimizer registered for {0} belongs to a different identity type")]
    IdentityMismatch(DispatchKey),

    #[error("minimizer for {key} returned a non-finite point: {value}")]
    NonFinite { key: DispatchKey, value: f64 },

    #[error("minimizer failed: {0}")]
    Failed(#[source] Box<dyn StdError + Send + Sync>),
}

impl MinimizeError {
    /// Wraps a minimizer's own error.
    pub fn failed<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Failed(Box::new(err))
    }
}

/// Registry of subproblem minimizers keyed by (algebra type, identity name).
///
/// Each pair may be registered exactly once. Registering a second minimizer
/// for the same pair is rejected with [`RegistryError::Duplicate`], and
/// minimizing a subproblem whose pair was never registered yields
/// [`MinimizeError::Unregistered`].
///
/// ```
/// use mirror_core::{ConvexFunction, Identity, Minimizers, Subproblem};
///
/// struct HalfSquare;
///
/// impl Identity for HalfSquare {
///     const NAME: &'static str = "half_square";
///
///     fn definition(x: f64) -> f64 {
///         0.5 * x * x
///     }
/// }
///
/// let mut minimizers = Minimizers::new();
/// minimizers
///     .register(|pb: &Subproblem<f64, HalfSquare>| Ok(-*pb.lambda()))
///     .unwrap();
///
/// let phi = ConvexFunction::<f64, HalfSquare>::declare();
/// let y = minimizers.minimize(&Subproblem::new(phi, 3.0)).unwrap();
/// assert_eq!(y, -3.0);
/// ```
#[derive(Default)]
pub struct Minimizers {
    routines: HashMap<DispatchKey, Box<dyn Any>>,
}

impl Minimizers {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the minimizer for subproblems over `L` built from identity `I`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the pair is already registered.
    pub fn register<L, I, M>(&mut self, minimizer: M) -> Result<(), RegistryError>
    where
        L: LinearFunction + 'static,
        I: Identity,
        M: Minimizer<L, I> + 'static,
    {
        let key = ConvexFunction::<L, I>::key();
        if self.routines.contains_key(&key) {
            return Err(RegistryError::Duplicate(key));
        }

        trace!("registering minimizer for {key}");
        let routine: Box<dyn Minimizer<L, I>> = Box::new(minimizer);
        self.routines.insert(key, Box::new(routine));
        Ok(())
    }

    /// Builder form of [`Minimizers::register`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the pair is already registered.
    pub fn with<L, I, M>(mut self, minimizer: M) -> Result<Self, RegistryError>
    where
        L: LinearFunction + 'static,
        I: Identity,
        M: Minimizer<L, I> + 'static,
    {
        self.register(minimizer)?;
        Ok(self)
    }

    /// Returns `true` if the (algebra, name) pair of `L` and `I` is taken.
    ///
    /// The entry may belong to another identity type with the same name; use
    /// [`Minimizers::lookup`] to check that it is callable for `I`.
    #[must_use]
    pub fn contains<L, I>(&self) -> bool
    where
        L: LinearFunction + 'static,
        I: Identity,
    {
        self.routines.contains_key(&ConvexFunction::<L, I>::key())
    }

    /// Returns the minimizer registered for `L` and `I`.
    ///
    /// # Errors
    ///
    /// Returns [`MinimizeError::Unregistered`] if the pair was never
    /// registered, or [`MinimizeError::IdentityMismatch`] if its entry was
    /// registered for a different identity type with the same name.
    pub fn lookup<L, I>(&self) -> Result<&dyn Minimizer<L, I>, MinimizeError>
    where
        L: LinearFunction + 'static,
        I: Identity,
    {
        let key = ConvexFunction::<L, I>::key();
        let routine = self
            .routines
            .get(&key)
            .ok_or(MinimizeError::Unregistered(key))?
            .downcast_ref::<Box<dyn Minimizer<L, I>>>()
            .ok_or(MinimizeError::IdentityMismatch(key))?;
        Ok(&**routine)
    }

    /// Returns the number of registered minimizers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routines.len()
    }

    /// Returns `true` if no minimizer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    /// Minimizes `subproblem` with the minimizer registered for its pair.
    ///
    /// # Errors
    ///
    /// Returns [`MinimizeError::Unregistered`] if no minimizer exists for the
    /// pair, [`MinimizeError::NonFinite`] if the minimizer returns NaN or an
    /// infinite point, or the minimizer's own error unchanged.
    pub fn minimize<L, I>(&self, subproblem: &Subproblem<L, I>) -> Result<f64, MinimizeError>
    where
        L: LinearFunction + 'static,
        I: Identity,
    {
        let key = subproblem.key();
        let routine = self.lookup::<L, I>()?;

        trace!("minimizing {subproblem:?} with minimizer for {key}");
        let y = routine.minimize(subproblem)?;
        if !y.is_finite() {
            return Err(MinimizeError::NonFinite { key, value: y });
        }
        Ok(y)
    }
}

impl fmt::Debug for Minimizers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.routines.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::Polynomial;

    struct HalfSquare;

    impl Identity for HalfSquare {
        const NAME: &'static str = "half_square";

        fn definition(x: f64) -> f64 {
            0.5 * x * x
        }
    }

    /// Same name as [`HalfSquare`], different type and definition.
    struct Impostor;

    impl Identity for Impostor {
        const NAME: &'static str = "half_square";

        fn definition(x: f64) -> f64 {
            0.25 * x.powi(4)
        }
    }

    #[derive(Debug, Error)]
    #[error("subproblem is unbounded below")]
    struct Unbounded;

    fn half_square() -> ConvexFunction<f64, HalfSquare> {
        ConvexFunction::declare()
    }

    fn negate_lambda(pb: &Subproblem<f64, HalfSquare>) -> Result<f64, MinimizeError> {
        Ok(-*pb.lambda())
    }

    #[test]
    fn dispatches_to_registered_minimizer() {
        let minimizers = Minimizers::new()
            .with(negate_lambda)
            .expect("first registration succeeds");

        let y = minimizers
            .minimize(&Subproblem::new(half_square(), 1.5))
            .expect("minimizer is registered");

        assert_relative_eq!(y, -1.5);
        assert!(minimizers.contains::<f64, HalfSquare>());
        assert_eq!(minimizers.len(), 1);
    }

    #[test]
    fn rejects_duplicate_registration() {
        let mut minimizers = Minimizers::new();
        minimizers.register(negate_lambda).unwrap();

        let err = minimizers
            .register(|_: &Subproblem<f64, HalfSquare>| Ok(0.0))
            .unwrap_err();

        assert_eq!(err, RegistryError::Duplicate(DispatchKey::of::<f64, HalfSquare>()));
        assert_eq!(minimizers.len(), 1);
    }

    #[test]
    fn same_name_on_same_algebra_is_a_duplicate() {
        let mut minimizers = Minimizers::new();
        minimizers.register(negate_lambda).unwrap();

        let result = minimizers.register(|_: &Subproblem<f64, Impostor>| Ok(0.0));

        assert!(matches!(result, Err(RegistryError::Duplicate(_))));
    }

    #[test]
    fn same_name_on_other_algebra_is_distinct() {
        let mut minimizers = Minimizers::new();
        minimizers.register(negate_lambda).unwrap();
        minimizers
            .register(|pb: &Subproblem<Polynomial<2>, HalfSquare>| {
                Ok(-pb.lambda().coefficients()[1])
            })
            .expect("different algebra is a different pair");

        assert_eq!(minimizers.len(), 2);
    }

    #[test]
    fn missing_registration_names_the_pair() {
        let minimizers = Minimizers::new();

        let err = minimizers
            .minimize(&Subproblem::new(half_square(), 1.0))
            .unwrap_err();

        assert!(matches!(err, MinimizeError::Unregistered(_)));
        assert_eq!(
            err.to_string(),
            "no minimizer registered for (f64, half_square)"
        );
    }

    #[test]
    fn identity_type_mismatch_is_reported() {
        let mut minimizers = Minimizers::new();
        minimizers
            .register(|_: &Subproblem<f64, Impostor>| Ok(0.0))
            .unwrap();

        let err = minimizers
            .minimize(&Subproblem::new(half_square(), 1.0))
            .unwrap_err();

        assert!(matches!(err, MinimizeError::IdentityMismatch(_)));
    }

    #[test]
    fn minimizer_failure_is_propagated() {
        let minimizers = Minimizers::new()
            .with(|_: &Subproblem<f64, HalfSquare>| Err(MinimizeError::failed(Unbounded)))
            .unwrap();

        let err = minimizers
            .minimize(&Subproblem::new(half_square(), 1.0))
            .unwrap_err();

        assert!(matches!(err, MinimizeError::Failed(_)));
        assert_eq!(err.to_string(), "minimizer failed: subproblem is unbounded below");
    }

    #[test]
    fn non_finite_point_is_an_error() {
        let minimizers = Minimizers::new()
            .with(|_: &Subproblem<f64, HalfSquare>| Ok(f64::NAN))
            .unwrap();

        let err = minimizers
            .minimize(&Subproblem::new(half_square(), 1.0))
            .unwrap_err();

        assert!(matches!(
            err,
            MinimizeError::NonFinite { key, .. } if key == DispatchKey::of::<f64, HalfSquare>()
        ));
        assert_eq!(
            err.to_string(),
            "minimizer for (f64, half_square) returned a non-finite point: NaN"
        );
    }

    #[test]
    fn shared_name_never_runs_another_definitions_minimizer() {
        let minimizers = Minimizers::new().with(negate_lambda).unwrap();

        // x⁴/4 under the half-square name: the x²/2 minimizer must not run.
        let quartic = ConvexFunction::<f64, Impostor>::declare();
        let err = minimizers
            .minimize(&Subproblem::new(quartic, 0.5))
            .unwrap_err();

        assert!(matches!(err, MinimizeError::IdentityMismatch(_)));
    }

    #[test]
    fn lookup_checks_the_identity_type() {
        let minimizers = Minimizers::new().with(negate_lambda).unwrap();

        let routine = minimizers.lookup::<f64, HalfSquare>().unwrap();
        assert_relative_eq!(
            routine.minimize(&Subproblem::new(half_square(), 2.0)).unwrap(),
            -2.0
        );

        assert!(minimizers.contains::<f64, Impostor>());
        assert!(matches!(
            minimizers.lookup::<f64, Impostor>(),
            Err(MinimizeError::IdentityMismatch(_))
        ));
        assert!(matches!(
            minimizers.lookup::<Polynomial<2>, HalfSquare>(),
            Err(MinimizeError::Unregistered(_))
        ));
    }
}
