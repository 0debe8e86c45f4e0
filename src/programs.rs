use crate::table::TransitionTable;
use crate::types::{StateRecord, TuringMachineError};

/// A named, built-in machine: its raw state records plus suggested run parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub name: &'static str,
    pub description: &'static str,
    pub states: Vec<StateRecord>,
    pub tape_length: usize,
    pub max_steps: usize,
}

impl Program {
    /// Validates the program's records into a table.
    pub fn table(&self) -> Result<TransitionTable, TuringMachineError> {
        TransitionTable::build(&self.states)
    }
}

/// Shorthand for one state: `(next, move, write)` for symbol 0, then for symbol 1.
const fn state(if_0: (i64, i64, i64), if_1: (i64, i64, i64)) -> StateRecord {
    StateRecord {
        next_state_if_0: if_0.0,
        next_state_if_1: if_1.0,
        move_if_0: if_0.1,
        move_if_1: if_1.1,
        write_if_0: if_0.2,
        write_if_1: if_1.2,
    }
}

lazy_static::lazy_static! {
    pub static ref PROGRAMS: Vec<Program> = vec![
        Program {
            name: "busy-beaver-2",
            description: "Two-state busy beaver; writes four ones and halts",
            states: vec![
                state((1, 1, 1), (1, -1, 1)),
                state((0, -1, 1), (2, 1, 1)),
            ],
            tape_length: 20,
            max_steps: 1000,
        },
        Program {
            name: "busy-beaver-3",
            description: "Three-state busy beaver; writes six ones and halts",
            states: vec![
                state((1, 1, 1), (3, 1, 1)),
                state((2, 1, 0), (1, 1, 1)),
                state((2, -1, 1), (0, -1, 1)),
            ],
            tape_length: 20,
            max_steps: 1000,
        },
        Program {
            name: "left-walker",
            description: "Walks left until it falls off the tape",
            states: vec![state((0, -1, 0), (0, -1, 0))],
            tape_length: 8,
            max_steps: 100,
        },
        Program {
            name: "blinker",
            description: "Flips the center cell forever",
            states: vec![state((0, 0, 1), (0, 0, 0))],
            tape_length: 4,
            max_steps: 100,
        },
        Program {
            name: "mark-and-halt",
            description: "Halts immediately; only marks the tape when halting rules write",
            states: vec![state((1, 0, 1), (1, 0, 1))],
            tape_length: 5,
            max_steps: 10,
        },
    ];
}

pub struct ProgramManager;

impl ProgramManager {
    /// Get the number of available programs
    pub fn get_program_count() -> usize {
        PROGRAMS.len()
    }

    /// Get a program by its index
    pub fn get_program_by_index(index: usize) -> Result<&'static Program, TuringMachineError> {
        PROGRAMS.get(index).ok_or_else(|| {
            TuringMachineError::InvalidArgument(format!("Program index {} out of range", index))
        })
    }

    /// Get a program by its name
    pub fn get_program_by_name(name: &str) -> Result<&'static Program, TuringMachineError> {
        PROGRAMS
            .iter()
            .find(|program| program.name == name)
            .ok_or_else(|| {
                TuringMachineError::InvalidArgument(format!("Program '{}' not found", name))
            })
    }

    /// List all program names
    pub fn list_program_names() -> Vec<&'static str> {
        PROGRAMS.iter().map(|program| program.name).collect()
    }

    /// Get information about a program by its index
    pub fn get_program_info(index: usize) -> Result<ProgramInfo, TuringMachineError> {
        let program = Self::get_program_by_index(index)?;

        Ok(ProgramInfo {
            index,
            name: program.name,
            description: program.description,
            state_count: program.states.len(),
            tape_length: program.tape_length,
            max_steps: program.max_steps,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ProgramInfo {
    pub index: usize,
    pub name: &'static str,
    pub description: &'static str,
    pub state_count: usize,
    pub tape_length: usize,
    pub max_steps: usize,
}
