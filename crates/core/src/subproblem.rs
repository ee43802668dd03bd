use std::fmt;

use crate::{ConvexFunction, DispatchKey, Identity, LinearFunction};

/// The mirror-map subproblem `y ↦ Φ(y) + λ(y)`.
///
/// Each mirror descent transition builds one subproblem and hands it to the
/// minimizer registered for Φ. Φ and λ always share the algebra `L`; the type
/// system rules out any mismatch.
///
/// Subproblems are immutable. The minimizer reads Φ and λ through
/// [`Subproblem::phi`] and [`Subproblem::lambda`].
pub struct Subproblem<L, I> {
    phi: ConvexFunction<L, I>,
    lambda: L,
}

impl<L, I> Subproblem<L, I>
where
    L: LinearFunction + 'static,
    I: Identity,
{
    /// Creates the subproblem `Φ + λ`.
    #[must_use]
    pub fn new(phi: ConvexFunction<L, I>, lambda: L) -> Self {
        Self { phi, lambda }
    }

    /// Evaluates `Φ(y) + λ(y)`.
    #[must_use]
    pub fn eval(&self, y: f64) -> f64 {
        self.phi.call(y) + self.lambda.eval(y)
    }

    /// Returns the convex function Φ.
    #[must_use]
    pub fn phi(&self) -> &ConvexFunction<L, I> {
        &self.phi
    }

    /// Returns the linear part λ.
    #[must_use]
    pub fn lambda(&self) -> &L {
        &self.lambda
    }

    /// Returns the key used to select this subproblem's minimizer.
    #[must_use]
    pub fn key(&self) -> DispatchKey {
        ConvexFunction::<L, I>::key()
    }
}

impl<L: Clone, I> Clone for Subproblem<L, I> {
    fn clone(&self) -> Self {
        Self {
            phi: self.phi,
            lambda: self.lambda.clone(),
        }
    }
}

impl<L: fmt::Debug, I: Identity> fmt::Debug for Subproblem<L, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subproblem")
            .field("phi", &self.phi)
            .field("lambda", &self.lambda)
            .finish()
    }
}
