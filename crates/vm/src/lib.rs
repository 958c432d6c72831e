//! bfvm virtual machine — executes verified tape programs.
//!
//! The VM is a tape machine with:
//! - A sparse, unbounded tape of arbitrary-precision cells
//! - A data pointer into the tape
//! - A program counter into the instruction stream
//! - A precomputed jump table for `[` and `]`
//!
//! # Usage
//!
//! ```
//! use bfvm_common::Program;
//! use bfvm_vm::{run_with, VmConfig};
//!
//! let program = Program::parse("+++.");
//! let mut output = Vec::new();
//! run_with(&program, &VmConfig::default(), std::io::empty(), &mut output).unwrap();
//! assert_eq!(output, vec![3]);
//! ```

pub mod config;
pub mod error;
pub mod execute;
pub mod io;
pub mod machine;
pub mod tape;

pub use config::{EofPolicy, InputMode, VmConfig};
pub use error::{RuntimeError, VmError};
pub use machine::VM;
pub use tape::{Address, Cell, Tape};

use std::io::{Read, Write};

use bfvm_common::Program;

/// Verify and execute a program against the process's stdin and stdout,
/// using the default configuration.
///
/// # Errors
///
/// Returns [`VmError::Verify`] if the brackets do not balance (nothing is
/// executed), or [`VmError::Runtime`] if execution fails.
pub fn run(program: &Program) -> Result<(), VmError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with(program, &VmConfig::default(), stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Verify and execute a program with explicit configuration and I/O.
///
/// This is the primary entry point for the VM. It:
/// 1. Validates bracket structure and resolves the jump table
/// 2. Executes until the program counter runs past the end
/// 3. Returns the final tape
pub fn run_with<R: Read, W: Write>(
    program: &Program,
    config: &VmConfig,
    input: R,
    output: W,
) -> Result<Tape, VmError> {
    let jumps = bfvm_verifier::verify(program)?;
    let mut vm = VM::new(program, jumps, config, input, output);
    vm.execute()?;
    Ok(vm.into_tape())
}
