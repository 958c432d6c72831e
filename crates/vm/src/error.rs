//! Runtime errors for the bfvm VM.
//!
//! Every runtime error carries the instruction index (`at`) where it occurred.
//! Structural problems are caught earlier by the verifier; [`VmError`] joins
//! both kinds for callers that load and run in one step.

use bfvm_verifier::VerifyError;
use thiserror::Error;

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A jump instruction has no entry in the jump table.
    ///
    /// Unreachable for programs that passed verification; seeing this means
    /// the VM was handed a table that does not belong to its program.
    #[error("internal error: no jump destination for instruction {at}")]
    MissingJumpDestination { at: usize },

    /// The input source was closed when `,` asked for more.
    #[error("input exhausted at instruction {at}")]
    InputExhausted { at: usize },

    /// Reading input or writing output failed.
    #[error("I/O error at instruction {at}: {message}")]
    Io { at: usize, message: String },
}

/// Any failure from loading or running a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// The program was rejected before execution.
    #[error(transparent)]
    Verify(#[from] VerifyError),

    /// Execution stopped with an error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        assert_eq!(
            RuntimeError::MissingJumpDestination { at: 5 }.to_string(),
            "internal error: no jump destination for instruction 5"
        );
        assert_eq!(
            RuntimeError::InputExhausted { at: 2 }.to_string(),
            "input exhausted at instruction 2"
        );
        assert_eq!(
            RuntimeError::Io {
                at: 9,
                message: "broken pipe".to_string()
            }
            .to_string(),
            "I/O error at instruction 9: broken pipe"
        );
    }

    #[test]
    fn vm_error_is_transparent() {
        let err: VmError = VerifyError::UnmatchedBackJump { at: 0 }.into();
        assert_eq!(err.to_string(), "unmatched back jump ']' at instruction 0");

        let err: VmError = RuntimeError::InputExhausted { at: 1 }.into();
        assert_eq!(err.to_string(), "input exhausted at instruction 1");
    }
}
