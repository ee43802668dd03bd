//! Iteration engines built on the abstractions in `mirror_core`.
//!
//! # Modules
//!
//! - [`mirror_descent`] — the abstract mirror descent recurrence, exposed as
//!   a lazy unbounded sequence and as an observed bounded run

pub mod mirror_descent;
