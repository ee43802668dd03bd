use log::{Level, log};

use mirror_core::Observer;

use crate::traits::{HasIteration, HasObjective, HasPoint};

/// An observer that logs every state through the `log` facade.
///
/// Each event produces one record at the configured level. The observer
/// never requests an action.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    level: Level,
}

impl LogObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level records are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIteration + HasPoint + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        log!(
            self.level,
            "k={} x={:.6e} f={:.6e}",
            event.iteration(),
            event.x(),
            event.objective()
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Event;

    impl HasIteration for Event {
        fn iteration(&self) -> usize {
            7
        }
    }

    impl HasPoint for Event {
        fn x(&self) -> f64 {
            0.5
        }
    }

    impl HasObjective for Event {
        fn objective(&self) -> f64 {
            0.25
        }
    }

    #[test]
    fn never_requests_an_action() {
        let mut observer = LogObserver::new(Level::Debug);

        let action = Observer::<Event, ()>::observe(&mut observer, &Event);

        assert!(action.is_none());
        assert_eq!(observer.level(), Level::Debug);
        assert_eq!(LogObserver::default().level(), Level::Info);
    }
}
