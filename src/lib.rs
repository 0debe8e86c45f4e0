//! This crate provides the core of a single-tape, binary-alphabet Turing Machine.
//! It includes modules for validating transition tables, stepping a machine over a
//! bounded tape, driving runs under a step budget, observing runs, and analyzing tables.

pub mod analyzer;
pub mod driver;
pub mod machine;
pub mod programs;
pub mod table;
pub mod tape;
pub mod tracer;
pub mod types;

/// Re-exports the `analyze` function and `AnalysisError` enum from the analyzer module.
pub use analyzer::{analyze, AnalysisError};
/// Re-exports the run loop and its report from the driver module.
pub use driver::{run, Report};
/// Re-exports the `Machine` struct from the machine module.
pub use machine::{Machine, Status};
/// Re-exports `Program`, `ProgramInfo`, `ProgramManager`, and `PROGRAMS` from the programs module.
pub use programs::{Program, ProgramInfo, ProgramManager, PROGRAMS};
/// Re-exports the `TransitionTable` struct from the table module.
pub use table::TransitionTable;
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the observer trait and the recording tracer.
pub use tracer::{Recorder, Snapshot, Tracer};
/// Re-exports various types related to machine definition and execution from the types module.
pub use types::{
    Direction, Fault, HaltPolicy, Outcome, Rule, State, StateRecord, Step, Symbol, Target,
    TransitionField, TuringMachineError,
};
