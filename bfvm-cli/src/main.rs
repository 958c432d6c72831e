//! bfvm CLI — verify and execute tape programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/usage error
//! - 2: Verification failure
//! - 3: Runtime error

mod commands;
mod terminal;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use bfvm_vm::{EofPolicy, InputMode, VmConfig};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bfvm", about = "Sparse-tape virtual machine for eight-instruction programs")]
struct Cli {
    /// Log load and run diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Verify and execute a program against stdin/stdout.
    Run {
        #[command(flatten)]
        source: SourceArgs,

        /// How `,` reads input.
        #[arg(long, value_enum, default_value_t = InputModeArg::Raw)]
        input_mode: InputModeArg,

        /// What `,` does once input is exhausted.
        #[arg(long, value_enum, default_value_t = EofArg::Error)]
        eof: EofArg,
    },
    /// Check bracket structure without executing.
    Verify {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where the program text comes from.
#[derive(Args)]
pub struct SourceArgs {
    /// Program file.
    #[arg(required_unless_present = "eval", conflicts_with = "eval")]
    pub file: Option<PathBuf>,

    /// Program text given inline.
    #[arg(short, long, value_name = "PROGRAM", allow_hyphen_values = true)]
    pub eval: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputModeArg {
    /// One byte per read.
    Raw,
    /// One line per read, first character kept.
    Line,
}

#[derive(Clone, Copy, ValueEnum)]
enum EofArg {
    /// Stop with a runtime error.
    Error,
    /// Store zero.
    Zero,
    /// Leave the cell unchanged.
    Unchanged,
}

impl From<InputModeArg> for InputMode {
    fn from(arg: InputModeArg) -> Self {
        match arg {
            InputModeArg::Raw => InputMode::Raw,
            InputModeArg::Line => InputMode::Line,
        }
    }
}

impl From<EofArg> for EofPolicy {
    fn from(arg: EofArg) -> Self {
        match arg {
            EofArg::Error => EofPolicy::Error,
            EofArg::Zero => EofPolicy::Zero,
            EofArg::Unchanged => EofPolicy::Unchanged,
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins unless `--verbose`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Run {
            source,
            input_mode,
            eof,
        } => {
            let config = VmConfig::default()
                .with_input_mode(input_mode.into())
                .with_eof_policy(eof.into());
            commands::run(&source, &config)
        }
        Command::Verify { source } => commands::verify(&source),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}
