//! Observation hooks for machine runs.
//!
//! A [`Tracer`] is notified by [`run`](crate::driver::run) immediately before each step,
//! so it always sees the pre-step configuration. It only ever receives shared borrows,
//! so it cannot alter the machine it observes.

use crate::types::Symbol;

/// A read-only observer of machine execution.
pub trait Tracer {
    /// Called before each step with the current state index, head position and tape.
    fn on_step(&mut self, state: usize, head: usize, tape: &[Symbol]);
}

impl<F> Tracer for F
where
    F: FnMut(usize, usize, &[Symbol]),
{
    fn on_step(&mut self, state: usize, head: usize, tape: &[Symbol]) {
        self(state, head, tape)
    }
}

/// An owned copy of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: usize,
    pub head: usize,
    pub tape: Vec<Symbol>,
}

/// A tracer that records every notification it receives.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    snapshots: Vec<Snapshot>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded snapshots in notification order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }
}

impl Tracer for Recorder {
    fn on_step(&mut self, state: usize, head: usize, tape: &[Symbol]) {
        self.snapshots.push(Snapshot {
            state,
            head,
            tape: tape.to_vec(),
        });
    }
}
