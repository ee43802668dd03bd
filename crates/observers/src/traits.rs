//! Capability traits for reusable observers.
//!
//! These traits abstract over engine-specific event and action types, so the
//! observers in this crate work with any event that exposes the data they
//! need.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that carry an iteration index
//! - [`HasPoint`] — events that carry the current iterate
//! - [`HasObjective`] — events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use mirror_core::Observer;
//! use mirror_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct Plateau {
//!     best: f64,
//!     patience: usize,
//!     stale: usize,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for Plateau {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.objective() < self.best {
//!             self.best = event.objective();
//!             self.stale = 0;
//!             return None;
//!         }
//!         self.stale += 1;
//!         (self.stale >= self.patience).then(A::stop_early)
//!     }
//! }
//! ```

use mirror_solvers::mirror_descent;

/// An event that carries an iteration index.
pub trait HasIteration {
    /// Returns the iteration index for this event.
    fn iteration(&self) -> usize;
}

/// An event that carries the current iterate.
pub trait HasPoint {
    /// Returns the iterate for this event.
    fn x(&self) -> f64;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the run early.
    fn stop_early() -> Self;
}

// --- mirror_descent::Event ---

impl<L, D> HasIteration for mirror_descent::Event<'_, L, D> {
    fn iteration(&self) -> usize {
        self.state.k()
    }
}

impl<L, D> HasPoint for mirror_descent::Event<'_, L, D> {
    fn x(&self) -> f64 {
        self.state.x()
    }
}

impl<L, D> HasObjective for mirror_descent::Event<'_, L, D> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

// --- mirror_descent::Action ---

impl CanStopEarly for mirror_descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
