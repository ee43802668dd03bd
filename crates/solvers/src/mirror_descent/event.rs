use std::fmt;

use mirror_core::Identity;

use super::IterationState;

/// Event emitted by [`run`](super::run) for each state.
///
/// The initial state (k = 0) has no `previous`; every later state carries the
/// state it was computed from.
pub struct Event<'a, L, D> {
    /// The state just produced.
    pub state: &'a IterationState<L, D>,

    /// The state this one was computed from.
    pub previous: Option<&'a IterationState<L, D>>,

    /// The objective f at `state.x()`.
    pub objective: f64,
}

impl<L: fmt::Debug, D: Identity> fmt::Debug for Event<'_, L, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("state", self.state)
            .field("previous", &self.previous)
            .field("objective", &self.objective)
            .finish()
    }
}
