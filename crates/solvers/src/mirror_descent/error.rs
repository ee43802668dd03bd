use mirror_core::{DispatchKey, MinimizeError};

/// Errors that end a mirror descent run.
///
/// Every error is fatal for the run and is never retried: it points either to
/// pathological input or to a bug in the supplied algebra, schedule, oracle,
/// or minimizer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("step size c({k}) = {value} must be positive")]
    StepSize { k: usize, value: f64 },

    #[error("step size c({k}) is undefined: {value}")]
    StepSizeUndefined { k: usize, value: f64 },

    #[error("subgradient is undefined at x = {x} (iteration {k})")]
    Subgradient { k: usize, x: f64 },

    #[error("subproblem for iteration {k} could not be minimized")]
    Minimize {
        k: usize,
        #[source]
        source: MinimizeError,
    },
}

impl Error {
    /// Returns the iteration index at which the run failed.
    #[must_use]
    pub fn iteration(&self) -> usize {
        match self {
            Self::StepSize { k, .. }
            | Self::StepSizeUndefined { k, .. }
            | Self::Subgradient { k, .. }
            | Self::Minimize { k, .. } => *k,
        }
    }
}

/// Errors that can occur when assembling a [`MirrorDescent`] engine.
///
/// [`MirrorDescent`]: super::MirrorDescent
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    #[error("no minimizer registered for {0}")]
    MissingMinimizer(DispatchKey),

    #[error("minimizer registered for {0} belongs to a different identity type")]
    IdentityMismatch(DispatchKey),
}
