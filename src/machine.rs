//! This module defines the `Machine` struct, which simulates a single-tape, binary-alphabet
//! Turing Machine. It owns its tape exclusively and shares a read-only transition table.

use std::sync::Arc;

use crate::table::TransitionTable;
use crate::tape::Tape;
use crate::types::{Fault, HaltPolicy, State, Step, Symbol, Target, TuringMachineError};

/// Where the machine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Halted,
    Faulted(Fault),
}

/// A deterministic single-tape Turing Machine.
///
/// The head starts in the middle of the tape (`length / 2`) and the machine starts in
/// state `0`. The only way to mutate a machine is [`Machine::step`] (and [`Machine::reset`],
/// which restores the fresh configuration).
#[derive(Debug, Clone)]
pub struct Machine {
    table: Arc<TransitionTable>,
    tape: Tape,
    head: usize,
    state: usize,
    status: Status,
    policy: HaltPolicy,
    step_count: usize,
}

impl Machine {
    /// Creates a new machine over `table` with a fresh tape of `tape_length` cells, using
    /// the default [`HaltPolicy`].
    ///
    /// # Returns
    ///
    /// * `Err(TuringMachineError::EmptyTable)` if the table has no states.
    /// * `Err(TuringMachineError::InvalidLength)` if `tape_length` is zero.
    pub fn new(
        table: impl Into<Arc<TransitionTable>>,
        tape_length: usize,
    ) -> Result<Self, TuringMachineError> {
        Self::with_policy(table, tape_length, HaltPolicy::default())
    }

    /// Creates a new machine like [`Machine::new`], with halting rules following `policy`.
    ///
    /// The policy is fixed for the lifetime of the machine, including across resets.
    pub fn with_policy(
        table: impl Into<Arc<TransitionTable>>,
        tape_length: usize,
        policy: HaltPolicy,
    ) -> Result<Self, TuringMachineError> {
        let table = table.into();
        if table.is_empty() {
            return Err(TuringMachineError::EmptyTable);
        }

        let tape = Tape::new(tape_length)?;

        Ok(Self {
            table,
            head: tape.len() / 2,
            tape,
            state: 0,
            status: Status::Running,
            policy,
            step_count: 0,
        })
    }

    /// Executes a single step.
    ///
    /// The rule for the symbol under the head is applied in this order:
    /// 1. A halting rule stops the machine. Under [`HaltPolicy::Suppress`] nothing is written.
    /// 2. Otherwise the rule's symbol is written at the current (pre-move) head position.
    /// 3. If the move would leave the tape, the machine faults. The write from (2) stays,
    ///    head and state keep their pre-step values.
    /// 4. Otherwise head and state are committed.
    ///
    /// Once the machine has halted or faulted, every further call returns the same
    /// terminal result without touching the machine.
    pub fn step(&mut self) -> Step {
        match self.status {
            Status::Running => {}
            Status::Halted => return Step::Halted,
            Status::Faulted(fault) => return Step::Fault(fault),
        }

        let symbol = match self.tape.read(self.head) {
            Ok(symbol) => symbol,
            Err(_) => return self.fault(self.head as isize),
        };
        let rule = *self.table.states()[self.state].rule(symbol);

        let next = match rule.next {
            Target::State(next) => next,
            Target::Halt => {
                if self.policy == HaltPolicy::WriteThenHalt
                    && self.tape.write(self.head, rule.write).is_err()
                {
                    return self.fault(self.head as isize);
                }
                self.status = Status::Halted;
                return Step::Halted;
            }
        };

        if self.tape.write(self.head, rule.write).is_err() {
            return self.fault(self.head as isize);
        }

        let delta = rule.direction.delta();
        match self
            .head
            .checked_add_signed(delta)
            .filter(|&head| head < self.tape.len())
        {
            Some(head) => {
                self.head = head;
                self.state = next;
                self.step_count += 1;
                Step::Continue
            }
            None => self.fault(self.head as isize + delta),
        }
    }

    fn fault(&mut self, proposed: isize) -> Step {
        let fault = Fault::OutOfBounds {
            head: self.head,
            proposed,
            length: self.tape.len(),
        };
        self.status = Status::Faulted(fault);
        Step::Fault(fault)
    }

    /// Resets the machine to its initial configuration: zeroed tape, centered head,
    /// state `0`, and a step count of zero.
    pub fn reset(&mut self) {
        self.tape.clear();
        self.head = self.tape.len() / 2;
        self.state = 0;
        self.status = Status::Running;
        self.step_count = 0;
    }

    /// Returns the current state index. After a fault or halt this is the state the
    /// machine was in when it stopped.
    pub fn state(&self) -> usize {
        self.state
    }

    /// Returns the current state's rules.
    pub fn current_state(&self) -> &State {
        &self.table.states()[self.state]
    }

    /// Returns the current head position.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Returns the symbol under the head.
    pub fn symbol(&self) -> Symbol {
        self.tape.cells()[self.head]
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn policy(&self) -> HaltPolicy {
        self.policy
    }

    /// Returns the total number of committed transitions since creation or the last reset.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn is_halted(&self) -> bool {
        self.status == Status::Halted
    }

    /// Checks whether the machine is in its initial configuration: nothing committed and
    /// not halted or faulted.
    pub fn is_fresh(&self) -> bool {
        self.step_count == 0 && self.status == Status::Running
    }

    /// Checks whether the machine has halted or faulted.
    pub fn is_terminal(&self) -> bool {
        self.status != Status::Running
    }
}
