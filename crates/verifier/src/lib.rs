//! bfvm verifier — load-time checks for bracket structure.
//!
//! The verifier runs once, before execution, and either rejects the program
//! or hands back the [`JumpTable`] the VM uses to resolve every jump.
//!
//! # Usage
//!
//! ```
//! use bfvm_common::Program;
//! use bfvm_verifier::verify;
//!
//! let program = Program::parse("+[-]");
//! let table = verify(&program).unwrap();
//! assert_eq!(table.get(1), Some(3));
//! ```
//!
//! # Passes
//!
//! 1. **Balance** — every `]` closes an earlier `[`, nothing left open
//! 2. **Jumps** — pair each `[` with its `]` in both directions

pub mod balance;
pub mod error;
pub mod jumps;

pub use balance::check_balance;
pub use error::VerifyError;
pub use jumps::resolve_jumps;

use bfvm_common::{JumpTable, Program};

/// Verify a program and resolve its jumps.
///
/// Returns the jump table if the brackets are balanced, or the first
/// structural error found. Validation does not alter the program.
pub fn verify(program: &Program) -> Result<JumpTable, VerifyError> {
    let instrs = program.instructions();

    check_balance(instrs)?;
    let table = resolve_jumps(instrs);

    tracing::debug!(
        instructions = program.len(),
        significant = program.significant_len(),
        loops = table.pair_count(),
        "program verified"
    );
    Ok(table)
}
