mod render;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use render::{describe, tape_string, LogTracer, TextTracer};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;
use turbit::{analyzer, run, HaltPolicy, Machine, ProgramManager, Report};

/// Runs a built-in binary Turing machine and prints its final tape.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  turbit --list
  turbit --program busy-beaver-3 --trace
  turbit --program blinker --max-steps 50 --json")]
struct Cli {
    /// Name of the built-in program to run
    #[clap(short, long, default_value = "busy-beaver-2")]
    program: String,

    /// List the built-in programs and exit
    #[clap(short, long)]
    list: bool,

    /// Tape length (defaults to the program's own)
    #[clap(short, long)]
    tape_length: Option<usize>,

    /// Step budget (defaults to the program's own)
    #[clap(short, long)]
    max_steps: Option<usize>,

    /// Whether halting rules perform their write
    #[clap(long, value_enum, default_value_t = PolicyArg::Suppress)]
    halt_policy: PolicyArg,

    /// Print each step of the execution
    #[clap(short = 'd', long, conflicts_with = "json")]
    trace: bool,

    /// Print the final report as JSON
    #[clap(long)]
    json: bool,

    /// Also write the JSON report to this file
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv per-step trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Suppress,
    WriteThenHalt,
}

impl From<PolicyArg> for HaltPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Suppress => HaltPolicy::Suppress,
            PolicyArg::WriteThenHalt => HaltPolicy::WriteThenHalt,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        return list(&mut out);
    }

    execute(&cli, &mut out)?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn list(out: &mut dyn Write) -> Result<()> {
    for index in 0..ProgramManager::get_program_count() {
        let info = ProgramManager::get_program_info(index)?;
        writeln!(
            out,
            "{:<16} {} states, tape {:<3} {}",
            info.name, info.state_count, info.tape_length, info.description
        )?;
    }
    Ok(())
}

/// Runs the selected program and writes the result to `out`.
fn execute(cli: &Cli, out: &mut dyn Write) -> Result<Report> {
    let program = ProgramManager::get_program_by_name(&cli.program).with_context(|| {
        format!(
            "available programs: {}",
            ProgramManager::list_program_names().join(", ")
        )
    })?;
    let table = program
        .table()
        .with_context(|| format!("program '{}' has an invalid table", program.name))?;

    for problem in analyzer::problems(&table) {
        warn!(program = program.name, ?problem, "analysis");
    }

    let tape_length = cli.tape_length.unwrap_or(program.tape_length);
    let max_steps = cli.max_steps.unwrap_or(program.max_steps);
    let mut machine = Machine::with_policy(table.clone(), tape_length, cli.halt_policy.into())
        .context("failed to create machine")?;

    info!(
        program = program.name,
        tape_length,
        max_steps,
        policy = ?machine.policy(),
        "starting run"
    );

    let outcome = if cli.trace {
        let mut tracer = TextTracer::new(table, &mut *out);
        let outcome = run(&mut machine, max_steps, Some(&mut tracer))?;
        tracer.finish().context("failed to write trace")?;
        outcome
    } else if tracing::enabled!(Level::TRACE) {
        run(&mut machine, max_steps, Some(&mut LogTracer))?
    } else {
        run(&mut machine, max_steps, None)?
    };

    info!(?outcome, "run finished");

    let report = Report::new(&machine, outcome);
    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "{}", describe(&report.outcome))?;
        writeln!(out, "{}", tape_string(&report.tape))?;
    }

    if let Some(path) = &cli.output {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(report)
}
