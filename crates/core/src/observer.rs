/// Receives iteration events and optionally steers the caller's loop.
///
/// The mirror descent engine never decides to stop on its own. Observers are
/// how a caller attaches logging, trajectory recording, or a stopping rule to
/// a bounded run without touching the engine.
///
/// `observe` returns `Some(action)` to request an engine-specific action and
/// `None` to continue unchanged.
///
/// Closures implement `Observer`, and `()` is a no-op observer.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Stop;

    fn drive<O: Observer<usize, Stop>>(mut observer: O, limit: usize) -> usize {
        (0..limit)
            .find(|k| observer.observe(k).is_some())
            .unwrap_or(limit)
    }

    #[test]
    fn unit_never_acts() {
        assert_eq!(drive((), 5), 5);
    }

    #[test]
    fn closure_can_stop() {
        assert_eq!(drive(|k: &usize| (*k == 3).then_some(Stop), 10), 3);
    }
}
