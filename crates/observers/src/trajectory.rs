use mirror_core::Observer;

use crate::traits::{HasIteration, HasObjective, HasPoint};

/// One recorded state of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    /// The iteration index.
    pub k: usize,

    /// The iterate.
    pub x: f64,

    /// The objective at `x`.
    pub objective: f64,
}

/// An observer that records every state it sees.
///
/// Pass `&mut Trajectory` as the observer to keep the recording after the
/// run returns. It never requests an action.
///
/// ```ignore
/// let mut trajectory = Trajectory::new();
/// mirror_descent::run(&engine, x0, lambda0, &config, &mut trajectory)?;
/// for point in trajectory.points() {
///     println!("{:>4} {:>12.6} {:>12.6}", point.k, point.x, point.objective);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    /// Creates an empty trajectory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a single point.
    pub fn record(&mut self, point: TrajectoryPoint) {
        self.points.push(point);
    }

    /// Returns the recorded points in order.
    #[must_use]
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Returns the point with the lowest objective.
    ///
    /// Ties go to the earliest point.
    #[must_use]
    pub fn best(&self) -> Option<&TrajectoryPoint> {
        self.points.iter().reduce(|best, point| {
            if point.objective < best.objective {
                point
            } else {
                best
            }
        })
    }

    /// Consumes the trajectory and returns the recorded points.
    #[must_use]
    pub fn into_points(self) -> Vec<TrajectoryPoint> {
        self.points
    }
}

impl<E, A> Observer<E, A> for Trajectory
where
    E: HasIteration + HasPoint + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(TrajectoryPoint {
            k: event.iteration(),
            x: event.x(),
            objective: event.objective(),
        });
        None
    }
}

/// Allows `&mut Trajectory` to be passed to runs that take an observer by
/// value, so the recording can be read after the run completes.
impl<E, A> Observer<E, A> for &mut Trajectory
where
    E: HasIteration + HasPoint + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Event(usize, f64);

    impl HasIteration for Event {
        fn iteration(&self) -> usize {
            self.0
        }
    }

    impl HasPoint for Event {
        fn x(&self) -> f64 {
            self.1
        }
    }

    impl HasObjective for Event {
        fn objective(&self) -> f64 {
            self.1.abs()
        }
    }

    fn feed(trajectory: &mut Trajectory, events: &[Event]) {
        for event in events {
            let action = Observer::<Event, ()>::observe(&mut *trajectory, event);
            assert!(action.is_none());
        }
    }

    #[test]
    fn records_in_order() {
        let mut trajectory = Trajectory::new();
        feed(&mut trajectory, &[Event(0, -2.0), Event(1, -1.0), Event(2, 0.5)]);

        let ks: Vec<usize> = trajectory.points().iter().map(|p| p.k).collect();
        assert_eq!(ks, vec![0, 1, 2]);
        assert_eq!(trajectory.points()[1].objective, 1.0);
    }

    #[test]
    fn best_prefers_lowest_then_earliest() {
        let mut trajectory = Trajectory::new();
        feed(
            &mut trajectory,
            &[Event(0, -2.0), Event(1, 0.5), Event(2, -0.5), Event(3, 1.0)],
        );

        assert_eq!(trajectory.best().map(|p| p.k), Some(1));
        assert!(Trajectory::new().best().is_none());
    }
}
