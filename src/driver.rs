//! This module drives a [`Machine`] to a terminal outcome under a step budget, and packages
//! the final configuration into a serializable [`Report`].

use serde::Serialize;

use crate::machine::Machine;
use crate::tracer::Tracer;
use crate::types::{Outcome, Step, Symbol, TuringMachineError};

/// Runs `machine` until it halts, faults, or commits `max_steps` transitions.
///
/// Every run starts from the initial configuration: a machine that has already stepped
/// is reset first, so the reported steps are always the total for the final tape.
///
/// When a tracer is supplied it is notified before every step with the pre-step state,
/// head and tape.
///
/// # Returns
///
/// * `Ok(Outcome)` describing how the run ended and how many transitions it committed.
/// * `Err(TuringMachineError::InvalidArgument)` if `max_steps` is zero.
pub fn run(
    machine: &mut Machine,
    max_steps: usize,
    mut tracer: Option<&mut dyn Tracer>,
) -> Result<Outcome, TuringMachineError> {
    if max_steps == 0 {
        return Err(TuringMachineError::InvalidArgument(
            "max_steps must be greater than zero".to_string(),
        ));
    }

    if !machine.is_fresh() {
        machine.reset();
    }

    let mut steps = 0;
    while steps < max_steps {
        if let Some(t) = tracer.as_mut() {
            t.on_step(machine.state(), machine.head(), machine.tape().cells());
        }

        match machine.step() {
            Step::Continue => steps += 1,
            Step::Halted => return Ok(Outcome::Halted { steps }),
            Step::Fault(fault) => return Ok(Outcome::Faulted { steps, fault }),
        }
    }

    Ok(Outcome::NonTerminating { steps })
}

/// The final result of a run: how it ended and what the machine looked like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub outcome: Outcome,
    pub tape: Vec<Symbol>,
    pub head: usize,
    pub state: usize,
}

impl Report {
    /// Captures the current configuration of `machine` alongside `outcome`.
    pub fn new(machine: &Machine, outcome: Outcome) -> Self {
        Self {
            outcome,
            tape: machine.tape().cells().to_vec(),
            head: machine.head(),
            state: machine.state(),
        }
    }

    /// Returns the tape as a string of `0` and `1` characters.
    pub fn tape_string(&self) -> String {
        self.tape.iter().map(|s| s.to_string()).collect()
    }
}
