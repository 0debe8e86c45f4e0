//! This module defines the core data structures and types used throughout the Turing Machine
//! simulator, including symbols, transition rules, step outcomes, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single tape cell value. The machine works over the binary alphabet only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// The blank symbol. Every cell starts out as `Zero`.
    #[default]
    Zero,
    /// The marked symbol.
    One,
}

impl Symbol {
    /// Returns the index used to select a rule from a state's two-entry rule array.
    pub fn index(self) -> usize {
        match self {
            Symbol::Zero => 0,
            Symbol::One => 1,
        }
    }
}

impl From<bool> for Symbol {
    fn from(value: bool) -> Self {
        if value {
            Symbol::One
        } else {
            Symbol::Zero
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Zero => write!(f, "0"),
            Symbol::One => write!(f, "1"),
        }
    }
}

/// Represents the possible directions a Turing Machine head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Keep the head in the same position.
    Stay,
    /// Move the head one position to the right.
    Right,
}

impl Direction {
    /// Returns the signed head offset for this direction.
    pub fn delta(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Stay => 0,
            Direction::Right => 1,
        }
    }

    /// Converts a raw move delta into a `Direction`, or `None` when it lies outside `{-1, 0, 1}`.
    pub fn from_delta(delta: i64) -> Option<Self> {
        match delta {
            -1 => Some(Direction::Left),
            0 => Some(Direction::Stay),
            1 => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Where a rule sends the machine next.
///
/// Any next-state index at or beyond the table length is resolved to `Halt` when the
/// table is built, so the sentinel never reaches the stepping logic as a raw index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// Continue in the state at this index.
    State(usize),
    /// Stop the machine normally.
    Halt,
}

/// Represents a single transition rule, triggered by one read symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The state the machine transitions to, or `Halt`.
    pub next: Target,
    /// The direction the head moves after writing.
    pub direction: Direction,
    /// The symbol written at the pre-move head position.
    pub write: Symbol,
}

/// A validated state: one rule per readable symbol, indexed by [`Symbol::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// The rule for reading `Zero`, then the rule for reading `One`.
    pub rules: [Rule; 2],
}

impl State {
    /// Returns the rule triggered by reading `symbol`.
    pub fn rule(&self, symbol: Symbol) -> &Rule {
        &self.rules[symbol.index()]
    }
}

/// The raw, unvalidated description of one state, as supplied by a caller.
///
/// Fields are signed so that malformed input can be represented and rejected by
/// [`TransitionTable::build`](crate::table::TransitionTable::build).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    pub next_state_if_0: i64,
    pub next_state_if_1: i64,
    pub move_if_0: i64,
    pub move_if_1: i64,
    pub write_if_0: i64,
    pub write_if_1: i64,
}

/// Names a field of a [`StateRecord`], used to report validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionField {
    NextStateIf0,
    NextStateIf1,
    MoveIf0,
    MoveIf1,
    WriteIf0,
    WriteIf1,
}

impl fmt::Display for TransitionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransitionField::NextStateIf0 => "next_state_if_0",
            TransitionField::NextStateIf1 => "next_state_if_1",
            TransitionField::MoveIf0 => "move_if_0",
            TransitionField::MoveIf1 => "move_if_1",
            TransitionField::WriteIf0 => "write_if_0",
            TransitionField::WriteIf1 => "write_if_1",
        };
        f.write_str(name)
    }
}

/// Controls whether a halting rule performs its configured write.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HaltPolicy {
    /// A halting transition leaves tape and head untouched.
    #[default]
    Suppress,
    /// A halting transition writes at the head, then halts without moving.
    WriteThenHalt,
}

/// A runtime fault that terminates a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fault {
    /// A move would have placed the head at `proposed`, outside `[0, length)`.
    OutOfBounds {
        head: usize,
        proposed: isize,
        length: usize,
    },
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::OutOfBounds {
                head,
                proposed,
                length,
            } => write!(
                f,
                "head moved out of bounds: {} -> {} on tape of length {}",
                head, proposed, length
            ),
        }
    }
}

/// Represents the outcome of a single execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The machine committed a transition and can keep going.
    Continue,
    /// The machine reached a halting rule.
    Halted,
    /// The machine faulted.
    Fault(Fault),
}

/// Represents the terminal outcome of a run.
///
/// `steps` counts the transitions committed during the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Halted { steps: usize },
    Faulted { steps: usize, fault: Fault },
    NonTerminating { steps: usize },
}

impl Outcome {
    /// Returns the number of transitions committed during the run.
    pub fn steps(&self) -> usize {
        match self {
            Outcome::Halted { steps }
            | Outcome::Faulted { steps, .. }
            | Outcome::NonTerminating { steps } => *steps,
        }
    }
}

/// Represents various errors that can occur during Turing Machine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuringMachineError {
    /// A state record carries an out-of-range value.
    #[error("Invalid transition in state {state}: {field} = {value}")]
    InvalidTransition {
        state: usize,
        field: TransitionField,
        value: i64,
    },
    /// A tape was requested with a non-positive length.
    #[error("Invalid tape length: {0}")]
    InvalidLength(usize),
    /// A call-time argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A machine was requested over a table with no states.
    #[error("Transition table has no states")]
    EmptyTable,
    /// A table failed static analysis.
    #[error("Program validation error: {0}")]
    ValidationError(String),
    /// A tape access fell outside the tape.
    #[error("Tape index {index} out of bounds for length {length}")]
    OutOfBounds { index: usize, length: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serialization() {
        let left = Direction::Left;
        let right = Direction::Right;

        let left_json = serde_json::to_string(&left).unwrap();
        let right_json = serde_json::to_string(&right).unwrap();

        assert_eq!(left_json, "\"Left\"");
        assert_eq!(right_json, "\"Right\"");

        let left_deserialized: Direction = serde_json::from_str(&left_json).unwrap();
        assert_eq!(left, left_deserialized);
    }

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(Direction::from_delta(-1), Some(Direction::Left));
        assert_eq!(Direction::from_delta(0), Some(Direction::Stay));
        assert_eq!(Direction::from_delta(1), Some(Direction::Right));
        assert_eq!(Direction::from_delta(2), None);
        assert_eq!(Direction::from_delta(-2), None);

        for direction in [Direction::Left, Direction::Stay, Direction::Right] {
            assert_eq!(
                Direction::from_delta(direction.delta() as i64),
                Some(direction)
            );
        }
    }

    #[test]
    fn test_rule_lookup_by_symbol() {
        let zero = Rule {
            next: Target::State(1),
            direction: Direction::Right,
            write: Symbol::One,
        };
        let one = Rule {
            next: Target::Halt,
            direction: Direction::Left,
            write: Symbol::Zero,
        };
        let state = State { rules: [zero, one] };

        assert_eq!(state.rule(Symbol::Zero), &zero);
        assert_eq!(state.rule(Symbol::One), &one);
    }

    #[test]
    fn test_outcome_steps() {
        let fault = Fault::OutOfBounds {
            head: 0,
            proposed: -1,
            length: 1,
        };

        assert_eq!(Outcome::Halted { steps: 3 }.steps(), 3);
        assert_eq!(Outcome::Faulted { steps: 0, fault }.steps(), 0);
        assert_eq!(Outcome::NonTerminating { steps: 7 }.steps(), 7);
    }

    #[test]
    fn test_error_display() {
        let error = TuringMachineError::InvalidTransition {
            state: 2,
            field: TransitionField::MoveIf1,
            value: 3,
        };

        let error_msg = format!("{}", error);
        assert!(error_msg.contains("state 2"));
        assert!(error_msg.contains("move_if_1"));
        assert!(error_msg.contains('3'));
    }
}
