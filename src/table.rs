//! This module provides the `TransitionTable`, the validated and immutable rule set
//! of a machine. Raw [`StateRecord`]s go in, typed [`State`]s come out.

use crate::types::{
    Direction, Rule, State, StateRecord, Symbol, Target, TransitionField, TuringMachineError,
};
use serde::Serialize;

/// An ordered, validated collection of states, indexed `0..len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionTable {
    states: Vec<State>,
}

impl TransitionTable {
    /// Validates `records` and builds a table from them.
    ///
    /// Next-state indices at or beyond `records.len()` become [`Target::Halt`].
    ///
    /// # Returns
    ///
    /// * `Err(TuringMachineError::InvalidTransition)` naming the first offending state and
    ///   field, when a next-state index is negative, a move lies outside `{-1, 0, 1}`, or a
    ///   write value is not binary.
    pub fn build(records: &[StateRecord]) -> Result<Self, TuringMachineError> {
        let len = records.len();
        let states = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let if_0 = rule(
                    index,
                    len,
                    (TransitionField::NextStateIf0, record.next_state_if_0),
                    (TransitionField::MoveIf0, record.move_if_0),
                    (TransitionField::WriteIf0, record.write_if_0),
                )?;
                let if_1 = rule(
                    index,
                    len,
                    (TransitionField::NextStateIf1, record.next_state_if_1),
                    (TransitionField::MoveIf1, record.move_if_1),
                    (TransitionField::WriteIf1, record.write_if_1),
                )?;
                Ok(State {
                    rules: [if_0, if_1],
                })
            })
            .collect::<Result<Vec<_>, TuringMachineError>>()?;

        Ok(Self { states })
    }

    /// Returns the state at `index`, if any.
    pub fn state(&self, index: usize) -> Option<&State> {
        self.states.get(index)
    }

    /// Returns all states in table order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Returns the number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Checks whether the table has no states. Such a table builds but cannot drive a machine.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Converts the table back into raw records. Halting targets are written as `len()`.
    pub fn to_records(&self) -> Vec<StateRecord> {
        let halt = self.states.len() as i64;
        let next = |target: Target| match target {
            Target::State(index) => index as i64,
            Target::Halt => halt,
        };
        let write = |symbol: Symbol| symbol.index() as i64;

        self.states
            .iter()
            .map(|state| {
                let [if_0, if_1] = state.rules;
                StateRecord {
                    next_state_if_0: next(if_0.next),
                    next_state_if_1: next(if_1.next),
                    move_if_0: if_0.direction.delta() as i64,
                    move_if_1: if_1.direction.delta() as i64,
                    write_if_0: write(if_0.write),
                    write_if_1: write(if_1.write),
                }
            })
            .collect()
    }
}

fn rule(
    state: usize,
    len: usize,
    (next_field, next): (TransitionField, i64),
    (move_field, delta): (TransitionField, i64),
    (write_field, write): (TransitionField, i64),
) -> Result<Rule, TuringMachineError> {
    let invalid = |field, value| TuringMachineError::InvalidTransition {
        state,
        field,
        value,
    };

    let next = match usize::try_from(next) {
        Ok(index) if index < len => Target::State(index),
        Ok(_) => Target::Halt,
        Err(_) => return Err(invalid(next_field, next)),
    };
    let direction = Direction::from_delta(delta).ok_or_else(|| invalid(move_field, delta))?;
    let write = match write {
        0 => Symbol::Zero,
        1 => Symbol::One,
        _ => return Err(invalid(write_field, write)),
    };

    Ok(Rule {
        next,
        direction,
        write,
    })
}
