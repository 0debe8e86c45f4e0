//! Tracers that turn machine steps into text: one for the terminal, one for the log.

use std::io::{self, Write};

use turbit::{Direction, Outcome, Rule, Symbol, Target, Tracer, TransitionTable};

/// Renders the current state's rules, a head marker, and the tape before every step.
pub struct TextTracer<W: Write> {
    table: TransitionTable,
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextTracer<W> {
    pub fn new(table: TransitionTable, out: W) -> Self {
        Self {
            table,
            out,
            error: None,
        }
    }

    /// Returns the first write error hit while tracing, if any.
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn render(&mut self, state: usize, head: usize, tape: &[Symbol]) -> io::Result<()> {
        writeln!(self.out, "State {}", state)?;
        writeln!(self.out, "|If\t|Next\t|Move\t|Write\t|")?;
        if let Some(rules) = self.table.state(state).map(|s| s.rules) {
            for (symbol, rule) in [Symbol::Zero, Symbol::One].iter().zip(rules.iter()) {
                writeln!(self.out, "|{}\t{}", symbol, rule_columns(rule))?;
            }
        }
        writeln!(self.out, "{} ↓ ", "   ".repeat(head))?;
        writeln!(self.out, "{}", tape_cells(tape))?;
        writeln!(self.out)
    }
}

impl<W: Write> Tracer for TextTracer<W> {
    fn on_step(&mut self, state: usize, head: usize, tape: &[Symbol]) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.render(state, head, tape) {
            self.error = Some(e);
        }
    }
}

/// Forwards every step to the `tracing` subscriber at trace level.
pub struct LogTracer;

impl Tracer for LogTracer {
    fn on_step(&mut self, state: usize, head: usize, tape: &[Symbol]) {
        tracing::trace!(state, head, tape = %tape_string(tape), "step");
    }
}

fn rule_columns(rule: &Rule) -> String {
    let next = match rule.next {
        Target::State(index) => index.to_string(),
        Target::Halt => "HALT".to_string(),
    };
    let direction = match rule.direction {
        Direction::Left => "L",
        Direction::Stay => "S",
        Direction::Right => "R",
    };
    format!("|{}\t|{}\t|{}\t|", next, direction, rule.write)
}

/// Renders cells as `[0][1]...`.
pub fn tape_cells(tape: &[Symbol]) -> String {
    tape.iter().map(|s| format!("[{}]", s)).collect()
}

/// Renders cells as a plain `0`/`1` string.
pub fn tape_string(tape: &[Symbol]) -> String {
    tape.iter().map(|s| s.to_string()).collect()
}

/// One-line human summary of a run outcome.
pub fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Halted { steps } => format!("Halted after {} steps", steps),
        Outcome::Faulted { steps, fault } => {
            format!("Faulted after {} steps: {}", steps, fault)
        }
        Outcome::NonTerminating { steps } => {
            format!("Did not halt within {} steps", steps)
        }
    }
}
