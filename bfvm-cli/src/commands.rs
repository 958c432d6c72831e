//! CLI command implementations.

use std::fs;
use std::io;

use bfvm_common::Program;
use bfvm_vm::{VmConfig, VmError, VM};

use crate::terminal::RawModeGuard;
use crate::SourceArgs;

/// Verify and execute a program.
pub fn run(source: &SourceArgs, config: &VmConfig) -> Result<(), i32> {
    let (name, program) = load(source)?;

    let jumps = bfvm_verifier::verify(&program).map_err(|e| {
        eprintln!("error: {name}: {e}");
        exit_code(&VmError::from(e))
    })?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut vm = VM::new(&program, jumps, config, stdin.lock(), stdout.lock());

    let guard = RawModeGuard::for_input(config.input_mode).map_err(|e| {
        eprintln!("error: cannot switch terminal to raw mode: {e}");
        1
    })?;
    let result = vm.execute();
    drop(guard);

    result.map_err(|e| {
        eprintln!("runtime error: {e}");
        exit_code(&VmError::from(e))
    })
}

/// Check bracket structure only.
pub fn verify(source: &SourceArgs) -> Result<(), i32> {
    let (name, program) = load(source)?;

    match bfvm_verifier::verify(&program) {
        Ok(table) => {
            println!(
                "OK: {name} ({} instructions, {} loops)",
                program.significant_len(),
                table.pair_count()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {name}: {e}");
            Err(exit_code(&VmError::from(e)))
        }
    }
}

// --- Helpers ---

/// Exit status for a load or run failure.
fn exit_code(err: &VmError) -> i32 {
    match err {
        VmError::Verify(_) => 2,
        VmError::Runtime(_) => 3,
    }
}

/// Read program text from a file or the `--eval` argument.
///
/// Returns a display name for messages together with the decoded program.
fn load(source: &SourceArgs) -> Result<(String, Program), i32> {
    if let Some(text) = &source.eval {
        return Ok(("<eval>".to_string(), Program::parse(text)));
    }

    let Some(path) = &source.file else {
        eprintln!("error: no program given (pass a file or --eval)");
        return Err(1);
    };
    let name = path.display().to_string();

    let bytes = fs::read(path).map_err(|e| {
        eprintln!("error: cannot read '{name}': {e}");
        1
    })?;

    let program = Program::decode(&bytes).map_err(|e| {
        eprintln!("error: {name}: {e}");
        1
    })?;

    tracing::debug!(file = %name, instructions = program.len(), "program loaded");
    Ok((name, program))
}
