use std::fmt;

use mirror_core::Identity;

use super::IterationState;

/// Indicates how a bounded run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Performed all requested transitions.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a bounded mirror descent run.
pub struct Solution<L, D> {
    /// How the run ended.
    pub status: Status,

    /// Every state produced, starting with the initial state.
    pub history: Vec<IterationState<L, D>>,

    /// Number of transitions performed.
    pub steps: usize,
}

impl<L, D> Solution<L, D> {
    /// Returns the last state produced.
    #[must_use]
    pub fn last(&self) -> Option<&IterationState<L, D>> {
        self.history.last()
    }
}

impl<L: Clone, D> Clone for Solution<L, D> {
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            history: self.history.clone(),
            steps: self.steps,
        }
    }
}

impl<L: fmt::Debug, D: Identity> fmt::Debug for Solution<L, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solution")
            .field("status", &self.status)
            .field("history", &self.history)
            .field("steps", &self.steps)
            .finish()
    }
}
