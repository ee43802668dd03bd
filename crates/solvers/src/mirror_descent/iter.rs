use std::iter::FusedIterator;

use log::warn;

use mirror_core::{Identity, LinearFunction};

use super::{Error, IterationState, MirrorDescent};

/// A lazy, unbounded sequence of mirror descent states.
///
/// Created by [`MirrorDescent::iter`]. Each call to `next` performs at most
/// one transition. Termination is the caller's job: take a prefix, or stop
/// once a predicate on the yielded states holds.
///
/// The first error is yielded once, after which the sequence is exhausted.
pub struct Iterations<'a, L, D, F, C, G> {
    engine: MirrorDescent<'a, L, D, F, C, G>,
    current: Option<IterationState<L, D>>,
    started: bool,
}

impl<'a, L, D, F, C, G> Iterations<'a, L, D, F, C, G> {
    pub(super) fn new(engine: MirrorDescent<'a, L, D, F, C, G>, state: IterationState<L, D>) -> Self {
        Self {
            engine,
            current: Some(state),
            started: false,
        }
    }
}

impl<L, D, F, C, G> Iterator for Iterations<'_, L, D, F, C, G>
where
    L: LinearFunction + 'static,
    D: Identity,
    F: Identity,
    C: Fn(usize) -> f64,
    G: Fn(f64) -> L,
{
    type Item = Result<IterationState<L, D>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return self.current.clone().map(Ok);
        }

        let state = self.current.take()?;
        match self.engine.step(&state) {
            Ok(next) => {
                self.current = Some(next.clone());
                Some(Ok(next))
            }
            Err(err) => {
                warn!("mirror descent stopped at iteration {}: {err}", err.iteration());
                Some(Err(err))
            }
        }
    }
}

impl<L, D, F, C, G> FusedIterator for Iterations<'_, L, D, F, C, G>
where
    L: LinearFunction + 'static,
    D: Identity,
    F: Identity,
    C: Fn(usize) -> f64,
    G: Fn(f64) -> L,
{
}
