//! Prints the trajectory of a mirror descent run.
//!
//! # Usage
//!
//! ```text
//! cargo run --example trajectory
//! cargo run --example trajectory -- 50
//! cargo run --example trajectory -- 50 1e-3
//! ```
//!
//! Minimizes |x| from x₀ = -2 with Φ(x) = x²/2 and c(k) = 1/(k + 1). The
//! first argument caps the number of steps (default 20); the optional second
//! stops the run once the objective falls below it.

use std::error::Error;

use mirror_core::{ConvexFunction, Identity, Minimizers, Observer, Subproblem};
use mirror_observers::{StopWhen, Trajectory};
use mirror_solvers::mirror_descent::{self, Action, Config, Event, MirrorDescent, Parameters};

/// Φ(x) = x²/2.
struct HalfSquare;

impl Identity for HalfSquare {
    const NAME: &'static str = "half_square";

    fn definition(x: f64) -> f64 {
        0.5 * x * x
    }
}

/// f(x) = |x|.
struct Abs;

impl Identity for Abs {
    const NAME: &'static str = "abs";

    fn definition(x: f64) -> f64 {
        x.abs()
    }
}

#[allow(clippy::cast_precision_loss)]
fn harmonic(k: usize) -> f64 {
    1.0 / (k as f64 + 1.0)
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let max_steps = args.next().as_deref().map(str::parse).transpose()?.unwrap_or(20);
    let tolerance = args.next().as_deref().map(str::parse::<f64>).transpose()?;

    let minimizers = Minimizers::new()
        .with(|pb: &Subproblem<f64, HalfSquare>| Ok(-*pb.lambda()))?;
    let params = Parameters::new(
        ConvexFunction::<f64, HalfSquare>::declare(),
        ConvexFunction::<f64, Abs>::declare(),
        harmonic,
        f64::signum,
    )?;
    let engine = MirrorDescent::new(&params, &minimizers)?;

    let mut trajectory = Trajectory::new();
    let mut stop = StopWhen::new(|objective| tolerance.is_some_and(|tol| objective < tol));
    let observer = |event: &Event<'_, f64, HalfSquare>| -> Option<Action> {
        Observer::<_, Action>::observe(&mut trajectory, event);
        stop.observe(event)
    };

    let solution = mirror_descent::run(&engine, -2.0, -2.0, &Config::new(max_steps)?, observer)?;

    println!("{:>6}  {:>14}  {:>14}", "k", "x", "f(x)");
    for point in trajectory.points() {
        println!("{:>6}  {:>14.6e}  {:>14.6e}", point.k, point.x, point.objective);
    }
    println!("status: {:?} after {} steps", solution.status, solution.steps);
    if let Some(best) = trajectory.best() {
        println!("best: f({:.6e}) = {:.6e} at k = {}", best.x, best.objective, best.k);
    }

    Ok(())
}
