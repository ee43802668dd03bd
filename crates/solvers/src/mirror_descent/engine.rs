use log::{debug, trace};

use mirror_core::{
    ConvexFunction, Identity, LinearFunction, MinimizeError, Minimizers, Subproblem,
};

use super::{Error, IterationState, Iterations, Parameters, SetupError};

/// The mirror descent recurrence over a fixed set of parameters.
///
/// The engine pairs [`Parameters`] with the [`Minimizers`] that solve its
/// subproblems. Transitions are pure functions of the current state, so one
/// engine can drive any number of independent sequences.
pub struct MirrorDescent<'a, L, D, F, C, G> {
    parameters: &'a Parameters<L, D, F, C, G>,
    minimizers: &'a Minimizers,
}

impl<'a, L, D, F, C, G> MirrorDescent<'a, L, D, F, C, G>
where
    L: LinearFunction + 'static,
    D: Identity,
    F: Identity,
    C: Fn(usize) -> f64,
    G: Fn(f64) -> L,
{
    /// Creates an engine, checking that Φ has a callable minimizer.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::MissingMinimizer`] if no minimizer is registered
    /// for Φ's (algebra, name) pair, or [`SetupError::IdentityMismatch`] if
    /// the pair belongs to a different identity type.
    pub fn new(
        parameters: &'a Parameters<L, D, F, C, G>,
        minimizers: &'a Minimizers,
    ) -> Result<Self, SetupError> {
        let key = ConvexFunction::<L, D>::key();
        minimizers.lookup::<L, D>().map_err(|err| match err {
            MinimizeError::IdentityMismatch(_) => SetupError::IdentityMismatch(key),
            _ => SetupError::MissingMinimizer(key),
        })?;
        Ok(Self {
            parameters,
            minimizers,
        })
    }

    /// Returns the parameters driving this engine.
    #[must_use]
    pub fn parameters(&self) -> &'a Parameters<L, D, F, C, G> {
        self.parameters
    }

    /// Builds the initial state from `x0` and `lambda0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Subgradient`] if the subgradient at `x0` is undefined.
    pub fn start(&self, x0: f64, lambda0: L) -> Result<IterationState<L, D>, Error> {
        let subgradient = self.parameters.subgradient(0, x0)?;
        Ok(IterationState {
            x: x0,
            lambda: lambda0,
            subgradient,
            subproblem: None,
            k: 0,
        })
    }

    /// Computes the successor of `state`.
    ///
    /// With `c = c(k)` and `u` the subgradient at `x`:
    ///
    /// ```text
    /// pb' = Subproblem(Φ, c·u − λ)
    /// y   = minimize(pb')          argmin Φ(y) − λ'(y)
    /// λ'  = λ − c·u
    /// u'  = subgradient(y)
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `c(k)` is invalid, the minimizer fails, or the
    /// subgradient at the new iterate is undefined. Nothing is retried.
    pub fn step(&self, state: &IterationState<L, D>) -> Result<IterationState<L, D>, Error> {
        let k = state.k;
        let c = self.parameters.step_size(k)?;
        let increment = state.subgradient.scale(c);

        let subproblem = Subproblem::new(
            self.parameters.phi(),
            increment.clone() - state.lambda.clone(),
        );
        trace!("k={k}: built {subproblem:?}");

        let y = self
            .minimizers
            .minimize(&subproblem)
            .map_err(|source| Error::Minimize { k, source })?;

        let lambda = state.lambda.clone() - increment;
        let subgradient = self.parameters.subgradient(k + 1, y)?;
        debug!("k={k} -> {}: c={c}, x={} -> {y}", k + 1, state.x);

        Ok(IterationState {
            x: y,
            lambda,
            subgradient,
            subproblem: Some(subproblem),
            k: k + 1,
        })
    }

    /// Returns the lazy, unbounded sequence starting at `state`.
    ///
    /// The sequence yields `state` itself first, then one state per
    /// transition. It never ends on its own; after an error it is exhausted.
    #[must_use]
    pub fn iter(&self, state: IterationState<L, D>) -> Iterations<'a, L, D, F, C, G> {
        Iterations::new(*self, state)
    }
}

impl<L, D, F, C, G> Clone for MirrorDescent<'_, L, D, F, C, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, D, F, C, G> Copy for MirrorDescent<'_, L, D, F, C, G> {}
