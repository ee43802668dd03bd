/// Control actions an observer can request during a bounded run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run and return the states produced so far.
    StopEarly,
}
