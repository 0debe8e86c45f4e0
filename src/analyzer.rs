//! This module provides static checks over a `TransitionTable`, run before execution to
//! catch tables that can never halt or that carry dead states.
//!
//! Reachability is computed over both rules of every state regardless of tape contents,
//! so it over-approximates what a run actually visits.

use crate::table::TransitionTable;
use crate::types::{Target, TuringMachineError};
use std::collections::BTreeSet;

/// Represents the problems that analysis can find in a transition table.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AnalysisError {
    /// The table has no states, so there is no start state.
    EmptyTable,
    /// States that no rule path from state `0` can reach.
    UnreachableStates(Vec<usize>),
    /// No state reachable from state `0` has a halting rule, so no run can halt normally.
    NoReachableHalt,
}

impl From<AnalysisError> for TuringMachineError {
    /// Converts an `AnalysisError` into a `TuringMachineError::ValidationError`.
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::EmptyTable => {
                TuringMachineError::ValidationError("Table has no states".to_string())
            }
            AnalysisError::UnreachableStates(states) => TuringMachineError::ValidationError(
                format!("Unreachable states detected: {:?}", states),
            ),
            AnalysisError::NoReachableHalt => TuringMachineError::ValidationError(
                "No halting rule is reachable from state 0".to_string(),
            ),
        }
    }
}

/// Analyzes a table and reports the first problem found.
///
/// # Returns
///
/// * `Ok(())` if no problems are found.
/// * `Err(TuringMachineError::ValidationError)` describing the first failed check.
pub fn analyze(table: &TransitionTable) -> Result<(), TuringMachineError> {
    match problems(table).into_iter().next() {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Runs every check and collects all problems in check order.
pub fn problems(table: &TransitionTable) -> Vec<AnalysisError> {
    [
        check_structure,
        check_unreachable_states,
        check_halt_reachable,
    ]
    .iter()
    .filter_map(|f| f(table).err())
    .collect()
}

fn check_structure(table: &TransitionTable) -> Result<(), AnalysisError> {
    if table.is_empty() {
        return Err(AnalysisError::EmptyTable);
    }
    Ok(())
}

/// Checks that every state can be reached from state `0`.
pub fn check_unreachable_states(table: &TransitionTable) -> Result<(), AnalysisError> {
    let reachable = reachable_states(table);
    let unreachable: Vec<usize> = (0..table.len())
        .filter(|index| !reachable.contains(index))
        .collect();

    if unreachable.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::UnreachableStates(unreachable))
    }
}

/// Checks that at least one reachable state has a halting rule.
pub fn check_halt_reachable(table: &TransitionTable) -> Result<(), AnalysisError> {
    let halts = reachable_states(table)
        .into_iter()
        .filter_map(|index| table.state(index))
        .any(|state| state.rules.iter().any(|rule| rule.next == Target::Halt));

    if halts || table.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::NoReachableHalt)
    }
}

/// Returns the set of states reachable from state `0` by following rule targets.
pub fn reachable_states(table: &TransitionTable) -> BTreeSet<usize> {
    let mut reachable = BTreeSet::new();
    if table.is_empty() {
        return reachable;
    }

    let mut pending = vec![0];
    while let Some(index) = pending.pop() {
        if !reachable.insert(index) {
            continue;
        }
        if let Some(state) = table.state(index) {
            for rule in &state.rules {
                if let Target::State(next) = rule.next {
                    if !reachable.contains(&next) {
                        pending.push(next);
                    }
                }
            }
        }
    }

    reachable
}
