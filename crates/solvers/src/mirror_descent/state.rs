use std::fmt;

use mirror_core::{Identity, LinearFunction, Subproblem};

use super::Parameters;

/// One state of the mirror descent recurrence.
///
/// - `x` — the current iterate
/// - `lambda` — the certificate λ, a running combination of scaled
///   subgradients
/// - `subgradient` — the subgradient `u` of f at `x`, computed once
/// - `subproblem` — the subproblem whose solution produced `x`, absent for
///   the initial state
/// - `k` — the iteration index, starting at 0
///
/// States are immutable. Advancing produces a new state and leaves this one
/// intact, so any state can seed a fresh sequence with
/// [`MirrorDescent::iter`](super::MirrorDescent::iter).
pub struct IterationState<L, D> {
    pub(super) x: f64,
    pub(super) lambda: L,
    pub(super) subgradient: L,
    pub(super) subproblem: Option<Subproblem<L, D>>,
    pub(super) k: usize,
}

impl<L, D> IterationState<L, D> {
    /// Returns the iterate `x`.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the certificate λ.
    #[must_use]
    pub fn lambda(&self) -> &L {
        &self.lambda
    }

    /// Returns the subgradient `u` of f at `x`.
    #[must_use]
    pub fn subgradient(&self) -> &L {
        &self.subgradient
    }

    /// Returns the subproblem that produced `x`, or `None` for the initial state.
    #[must_use]
    pub fn subproblem(&self) -> Option<&Subproblem<L, D>> {
        self.subproblem.as_ref()
    }

    /// Returns the iteration index.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }
}

impl<L, D> IterationState<L, D>
where
    L: LinearFunction + 'static,
    D: Identity,
{
    /// Evaluates the objective f at `x`.
    #[must_use]
    pub fn objective<F, C, G>(&self, parameters: &Parameters<L, D, F, C, G>) -> f64
    where
        F: Identity,
        C: Fn(usize) -> f64,
        G: Fn(f64) -> L,
    {
        parameters.objective().call(self.x)
    }
}

impl<L: Clone, D> Clone for IterationState<L, D> {
    fn clone(&self) -> Self {
        Self {
            x: self.x,
            lambda: self.lambda.clone(),
            subgradient: self.subgradient.clone(),
            subproblem: self.subproblem.clone(),
            k: self.k,
        }
    }
}

impl<L: fmt::Debug, D: Identity> fmt::Debug for IterationState<L, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterationState")
            .field("k", &self.k)
            .field("x", &self.x)
            .field("lambda", &self.lambda)
            .field("subgradient", &self.subgradient)
            .field("subproblem", &self.subproblem)
            .finish()
    }
}
