use mirror_core::Observer;

use crate::traits::{CanStopEarly, HasIteration, HasObjective};

/// Stops a run once a predicate on the objective holds.
///
/// The mirror descent engine has no stopping criterion of its own; this is
/// the predicate-driven early stop applied from the outside.
///
/// ```
/// use mirror_observers::StopWhen;
///
/// let stop = StopWhen::new(|objective| objective < 1e-6).after(10);
/// # let _ = stop;
/// ```
pub struct StopWhen<P> {
    predicate: P,
    min_iteration: usize,
}

impl<P> StopWhen<P>
where
    P: FnMut(f64) -> bool,
{
    /// Creates an observer that stops when `predicate(f(x_k))` is `true`.
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            min_iteration: 0,
        }
    }

    /// Ignores the predicate before iteration `k`.
    #[must_use]
    pub fn after(mut self, k: usize) -> Self {
        self.min_iteration = k;
        self
    }
}

impl<P, E, A> Observer<E, A> for StopWhen<P>
where
    P: FnMut(f64) -> bool,
    E: HasIteration + HasObjective,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.iteration() < self.min_iteration {
            return None;
        }
        (self.predicate)(event.objective()).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Event {
        k: usize,
        objective: f64,
    }

    impl HasIteration for Event {
        fn iteration(&self) -> usize {
            self.k
        }
    }

    impl HasObjective for Event {
        fn objective(&self) -> f64 {
            self.objective
        }
    }

    #[derive(Debug, PartialEq)]
    struct Stop;

    impl CanStopEarly for Stop {
        fn stop_early() -> Self {
            Stop
        }
    }

    #[test]
    fn stops_when_predicate_holds() {
        let mut stop = StopWhen::new(|f| f < 0.5);

        let far = Event { k: 0, objective: 1.0 };
        let near = Event { k: 1, objective: 0.25 };

        assert_eq!(Observer::<Event, Stop>::observe(&mut stop, &far), None);
        assert_eq!(Observer::<Event, Stop>::observe(&mut stop, &near), Some(Stop));
    }

    #[test]
    fn ignores_early_iterations() {
        let mut stop = StopWhen::new(|f| f < 0.5).after(3);

        let early = Event { k: 2, objective: 0.0 };
        let late = Event { k: 3, objective: 0.0 };

        assert_eq!(Observer::<Event, Stop>::observe(&mut stop, &early), None);
        assert_eq!(Observer::<Event, Stop>::observe(&mut stop, &late), Some(Stop));
    }
}
