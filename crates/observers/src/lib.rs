//! Reusable observers for mirror descent runs.
//!
//! The engine never stops or reports on its own. These observers plug into
//! [`mirror_descent::run`] to add the behavior a caller usually wants:
//!
//! - [`StopWhen`] — stop once a predicate on the objective holds
//! - [`Trajectory`] — record every state for later tabulation
//! - [`LogObserver`] — emit one `log` record per state
//!
//! They are written against the capability traits in [`traits`], so they work
//! with any event that exposes an iteration index, an iterate, and an
//! objective.
//!
//! [`mirror_descent::run`]: mirror_solvers::mirror_descent::run

pub mod traits;

mod logging;
mod stop;
mod trajectory;

pub use logging::LogObserver;
pub use stop::StopWhen;
pub use trajectory::{Trajectory, TrajectoryPoint};
