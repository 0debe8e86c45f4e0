//! Property-based tests for the machine core.
//!
//! Random tables are generated over the full construction domain, including halting
//! targets past the end of the table, and run on short tapes so faults are common.

use proptest::prelude::*;
use turbit::{
    run, Fault, HaltPolicy, Machine, Outcome, Recorder, StateRecord, Step, TransitionTable,
};

prop_compose! {
    fn arbitrary_record(states: i64)(
        next_0 in 0..=states,
        next_1 in 0..=states,
        move_0 in -1..=1i64,
        move_1 in -1..=1i64,
        write_0 in 0..=1i64,
        write_1 in 0..=1i64,
    ) -> StateRecord {
        StateRecord {
            next_state_if_0: next_0,
            next_state_if_1: next_1,
            move_if_0: move_0,
            move_if_1: move_1,
            write_if_0: write_0,
            write_if_1: write_1,
        }
    }
}

fn arbitrary_table() -> impl Strategy<Value = Vec<StateRecord>> {
    (1..5i64).prop_flat_map(|states| {
        prop::collection::vec(arbitrary_record(states), states as usize)
    })
}

/// Tables whose rules never halt and never move the head.
fn stationary_table() -> impl Strategy<Value = Vec<StateRecord>> {
    (1..5i64).prop_flat_map(|states| {
        prop::collection::vec(
            (0..states, 0..states, 0..=1i64, 0..=1i64).prop_map(
                |(next_0, next_1, write_0, write_1)| StateRecord {
                    next_state_if_0: next_0,
                    next_state_if_1: next_1,
                    move_if_0: 0,
                    move_if_1: 0,
                    write_if_0: write_0,
                    write_if_1: write_1,
                },
            ),
            states as usize,
        )
    })
}

fn machine(records: &[StateRecord], tape_length: usize) -> Machine {
    Machine::new(TransitionTable::build(records).unwrap(), tape_length).unwrap()
}

proptest! {
    #[test]
    fn runs_are_deterministic(records in arbitrary_table(), length in 1..16usize) {
        let mut first = machine(&records, length);
        let mut second = machine(&records, length);
        let mut first_trace = Recorder::new();
        let mut second_trace = Recorder::new();

        let first_outcome = run(&mut first, 200, Some(&mut first_trace)).unwrap();
        let second_outcome = run(&mut second, 200, Some(&mut second_trace)).unwrap();

        prop_assert_eq!(first_outcome, second_outcome);
        prop_assert_eq!(first_trace.snapshots(), second_trace.snapshots());
        prop_assert_eq!(first.tape(), second.tape());
        prop_assert_eq!(first.head(), second.head());
    }

    #[test]
    fn head_stays_in_bounds(records in arbitrary_table(), length in 1..16usize) {
        let mut machine = machine(&records, length);

        for _ in 0..200 {
            let step = machine.step();
            prop_assert!(machine.head() < length);
            if step != Step::Continue {
                break;
            }
        }
    }

    #[test]
    fn halting_step_is_pure(records in arbitrary_table(), length in 1..16usize) {
        let mut machine = machine(&records, length);

        for _ in 0..200 {
            let tape = machine.tape().clone();
            let head = machine.head();
            let state = machine.state();

            match machine.step() {
                Step::Continue => continue,
                Step::Halted => {
                    prop_assert_eq!(machine.tape(), &tape);
                    prop_assert_eq!(machine.head(), head);
                    prop_assert_eq!(machine.state(), state);
                    break;
                }
                Step::Fault(Fault::OutOfBounds { head: at, .. }) => {
                    prop_assert_eq!(at, head);
                    prop_assert_eq!(machine.head(), head);
                    prop_assert_eq!(machine.state(), state);
                    break;
                }
            }
        }
    }

    #[test]
    fn budget_is_exhausted_exactly(records in stationary_table(), budget in 1..300usize) {
        let mut machine = machine(&records, 3);

        let outcome = run(&mut machine, budget, None).unwrap();
        prop_assert_eq!(outcome, Outcome::NonTerminating { steps: budget });
        prop_assert_eq!(machine.step_count(), budget);
    }

    #[test]
    fn policy_only_affects_halting_write(records in arbitrary_table(), length in 1..16usize) {
        let mut suppress = machine(&records, length);
        let mut write = Machine::with_policy(
            TransitionTable::build(&records).unwrap(),
            length,
            HaltPolicy::WriteThenHalt,
        )
        .unwrap();

        let suppress_outcome = run(&mut suppress, 200, None).unwrap();
        let write_outcome = run(&mut write, 200, None).unwrap();

        prop_assert_eq!(suppress_outcome, write_outcome);
        prop_assert_eq!(suppress.head(), write.head());

        let differing = suppress
            .tape()
            .cells()
            .iter()
            .zip(write.tape().cells())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(index, _)| index)
            .collect::<Vec<_>>();
        match suppress_outcome {
            Outcome::Halted { .. } => {
                prop_assert!(differing.is_empty() || differing == vec![suppress.head()]);
            }
            _ => {
                prop_assert!(differing.is_empty());
            }
        }
    }
}

#[test]
fn single_cell_left_move_faults_immediately() {
    let records = [StateRecord {
        next_state_if_0: 0,
        next_state_if_1: 0,
        move_if_0: -1,
        move_if_1: 0,
        write_if_0: 0,
        write_if_1: 0,
    }];
    let mut machine = machine(&records, 1);
    assert_eq!(machine.head(), 0);

    let outcome = run(&mut machine, 10, None).unwrap();
    assert_eq!(
        outcome,
        Outcome::Faulted {
            steps: 0,
            fault: Fault::OutOfBounds {
                head: 0,
                proposed: -1,
                length: 1,
            },
        }
    );
}

#[test]
fn busy_beaver_golden_run() {
    let records = [
        StateRecord {
            next_state_if_0: 1,
            next_state_if_1: 1,
            move_if_0: 1,
            move_if_1: -1,
            write_if_0: 1,
            write_if_1: 1,
        },
        StateRecord {
            next_state_if_0: 0,
            next_state_if_1: 2,
            move_if_0: -1,
            move_if_1: 1,
            write_if_0: 1,
            write_if_1: 1,
        },
    ];

    for _ in 0..2 {
        let mut machine = machine(&records, 20);
        assert_eq!(machine.head(), 10);

        let outcome = run(&mut machine, 1000, None).unwrap();
        assert_eq!(outcome, Outcome::Halted { steps: 5 });
        assert_eq!(machine.tape().to_string(), "00000000111100000000");
        assert_eq!(machine.head(), 9);
        assert_eq!(machine.state(), 1);
    }
}
