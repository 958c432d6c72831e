//! Verification errors for bfvm programs.
//!
//! Both variants are fatal: a program that fails verification is never
//! executed.

use thiserror::Error;

/// Errors found while checking bracket structure at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// A `]` with no open `[` before it.
    #[error("unmatched back jump ']' at instruction {at}")]
    UnmatchedBackJump { at: usize },

    /// One or more `[` still open at the end of the program.
    #[error("unmatched forward jump: {open} '[' left open at end of program")]
    UnmatchedForwardJump { open: usize },
}
