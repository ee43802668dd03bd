//! Abstract mirror descent.
//!
//! # Algorithm
//!
//! Mirror descent minimizes a convex function f through a user-chosen
//! algebra `L` of linear functions and a convex function Φ whose mirror map
//! `λ ↦ argmin_y Φ(y) − λ(y)` is supplied as a [`Minimizer`]. Starting from
//! `(x₀, λ₀)`, each transition with step size `c = c(k)` and subgradient
//! `u` of f at `x` computes:
//!
//! ```text
//! pb'  = Subproblem(Φ, c·u − λ)
//! x'   = minimize(pb')
//! λ'   = λ − c·u
//! u'   = subgradient(x')
//! k'   = k + 1
//! ```
//!
//! The subproblem is formed before the certificate is updated, so every
//! minimizer solves `min_y Φ(y) − λ'(y)` for the next certificate λ'.
//!
//! # Consumption
//!
//! The engine never stops on its own and never checks convergence:
//!
//! - [`MirrorDescent::iter`] yields the lazy, unbounded sequence of states;
//!   take a prefix or stop on a predicate.
//! - [`run`] performs at most [`Config::max_steps`] transitions and reports
//!   each state to an observer, which may return [`Action::StopEarly`].
//!
//! # Example
//!
//! ```
//! use mirror_core::{ConvexFunction, Identity, Minimizers, Subproblem};
//! use mirror_solvers::mirror_descent::{MirrorDescent, Parameters};
//!
//! struct HalfSquare;
//! impl Identity for HalfSquare {
//!     const NAME: &'static str = "half_square";
//!
//!     fn definition(x: f64) -> f64 {
//!         0.5 * x * x
//!     }
//! }
//!
//! struct Abs;
//! impl Identity for Abs {
//!     const NAME: &'static str = "abs";
//!
//!     fn definition(x: f64) -> f64 {
//!         x.abs()
//!     }
//! }
//!
//! let minimizers = Minimizers::new()
//!     .with(|pb: &Subproblem<f64, HalfSquare>| Ok(-*pb.lambda()))
//!     .unwrap();
//!
//! #[allow(clippy::cast_precision_loss)]
//! let params = Parameters::new(
//!     ConvexFunction::<f64, HalfSquare>::declare(),
//!     ConvexFunction::<f64, Abs>::declare(),
//!     |k| 1.0 / (k as f64 + 1.0),
//!     f64::signum,
//! )
//! .unwrap();
//!
//! let engine = MirrorDescent::new(&params, &minimizers).unwrap();
//! let start = engine.start(-2.0, -2.0).unwrap();
//!
//! let last = engine.iter(start).take(21).last().unwrap().unwrap();
//! assert_eq!(last.k(), 20);
//! assert!(last.x().abs() < 2.0);
//! ```
//!
//! [`Minimizer`]: mirror_core::Minimizer

mod action;
mod config;
mod engine;
mod error;
mod event;
mod iter;
mod parameters;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use engine::MirrorDescent;
pub use error::{Error, SetupError};
pub use event::Event;
pub use iter::Iterations;
pub use parameters::{Parameters, ParametersError};
pub use solution::{Solution, Status};
pub use state::IterationState;

use log::warn;

use mirror_core::{Identity, LinearFunction, Observer};

/// Runs at most `config.max_steps()` transitions from `(x0, lambda0)`.
///
/// # Algorithm
///
/// 1. Build the initial state and emit its [`Event`].
/// 2. For each step, compute the next state, record it, and emit its event.
/// 3. If the observer returns [`Action::StopEarly`], return immediately.
/// 4. Return the solution with the full history.
///
/// # Errors
///
/// Returns the first [`Error`] raised by a transition. Nothing is retried.
pub fn run<L, D, F, C, G, Obs>(
    engine: &MirrorDescent<'_, L, D, F, C, G>,
    x0: f64,
    lambda0: L,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<L, D>, Error>
where
    L: LinearFunction + 'static,
    D: Identity,
    F: Identity,
    C: Fn(usize) -> f64,
    G: Fn(f64) -> L,
    Obs: for<'e> Observer<Event<'e, L, D>, Action>,
{
    let parameters = engine.parameters();

    let mut history = Vec::with_capacity(config.max_steps() + 1);
    history.push(engine.start(x0, lambda0)?);

    if notify(&mut observer, parameters, &history) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    for step in 1..=config.max_steps() {
        let next = engine.step(&history[step - 1]).inspect_err(|err| {
            warn!("mirror descent stopped at iteration {}: {err}", err.iteration());
        })?;
        history.push(next);

        if notify(&mut observer, parameters, &history) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps: config.max_steps(),
    })
}

/// Runs at most `config.max_steps()` transitions without observation.
///
/// This is a convenience wrapper around [`run`] that discards events.
///
/// # Errors
///
/// Returns the first [`Error`] raised by a transition.
pub fn run_unobserved<L, D, F, C, G>(
    engine: &MirrorDescent<'_, L, D, F, C, G>,
    x0: f64,
    lambda0: L,
    config: &Config,
) -> Result<Solution<L, D>, Error>
where
    L: LinearFunction + 'static,
    D: Identity,
    F: Identity,
    C: Fn(usize) -> f64,
    G: Fn(f64) -> L,
{
    run(engine, x0, lambda0, config, ())
}

/// Emits the event for the newest state; returns `true` to stop.
fn notify<L, D, F, C, G, Obs>(
    observer: &mut Obs,
    parameters: &Parameters<L, D, F, C, G>,
    history: &[IterationState<L, D>],
) -> bool
where
    L: LinearFunction + 'static,
    D: Identity,
    F: Identity,
    C: Fn(usize) -> f64,
    G: Fn(f64) -> L,
    Obs: for<'e> Observer<Event<'e, L, D>, Action>,
{
    let Some((state, earlier)) = history.split_last() else {
        return false;
    };

    let event = Event {
        state,
        previous: earlier.last(),
        objective: state.objective(parameters),
    };
    matches!(observer.observe(&event), Some(Action::StopEarly))
}
