//! Core abstractions for abstract mirror descent.
//!
//! Mirror descent here never touches raw gradients. It works through a
//! user-chosen algebra of "linear" functions and a convex function Φ whose
//! mirror map is supplied as an exact subproblem minimizer:
//!
//! - [`LinearFunction`] — the vector-space contract an algebra must satisfy,
//!   implemented for `f64` and [`Polynomial`]
//! - [`ConvexFunction`] — a typed handle pairing an algebra with an
//!   [`Identity`], used both to evaluate Φ and as a dispatch key
//! - [`Subproblem`] — the function `y ↦ Φ(y) + λ(y)` solved each iteration
//! - [`Minimizer`], [`Minimizers`] — the per-(algebra, identity) minimizers and
//!   the registry that dispatches to them
//! - [`Observer`] — receives iteration events and optionally returns actions

mod convex;
mod linear;
mod minimizer;
mod observer;
mod polynomial;
mod subproblem;

pub use convex::{ConvexFunction, DispatchKey, Identity};
pub use linear::LinearFunction;
pub use minimizer::{MinimizeError, Minimizer, Minimizers, RegistryError};
pub use observer::Observer;
pub use polynomial::Polynomial;
pub use subproblem::Subproblem;
