//! Bracket balance check.
//!
//! A single left-to-right scan keeping a count of open `[`. Comments and
//! non-jump instructions pass through untouched.

use crate::error::VerifyError;
use bfvm_common::Instruction;

/// Check that every `]` closes an earlier `[` and that nothing is left open.
///
/// Fails on the first `]` seen while the open count is zero. Otherwise, if
/// the count is nonzero after the scan, reports how many `[` remain open.
pub fn check_balance(instrs: &[Instruction]) -> Result<(), VerifyError> {
    let mut open: usize = 0;

    for (at, instr) in instrs.iter().enumerate() {
        match instr {
            Instruction::JumpForward => open += 1,
            Instruction::JumpBackward => {
                if open == 0 {
                    return Err(VerifyError::UnmatchedBackJump { at });
                }
                open -= 1;
            }
            _ => {}
        }
    }

    if open > 0 {
        return Err(VerifyError::UnmatchedForwardJump { open });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfvm_common::Program;

    fn check(source: &str) -> Result<(), VerifyError> {
        check_balance(Program::parse(source).instructions())
    }

    #[test]
    fn empty_is_balanced() {
        assert_eq!(check(""), Ok(()));
    }

    #[test]
    fn nested_loops_are_balanced() {
        assert_eq!(check("+[>[-]<[[]]]"), Ok(()));
    }

    #[test]
    fn lone_close_is_rejected() {
        assert_eq!(check("]"), Err(VerifyError::UnmatchedBackJump { at: 0 }));
    }

    #[test]
    fn lone_open_is_rejected() {
        assert_eq!(check("["), Err(VerifyError::UnmatchedForwardJump { open: 1 }));
    }

    #[test]
    fn close_before_open_is_rejected_even_if_counts_match() {
        assert_eq!(check("+]["), Err(VerifyError::UnmatchedBackJump { at: 1 }));
    }

    #[test]
    fn reports_every_open_bracket() {
        assert_eq!(
            check("[[[]"),
            Err(VerifyError::UnmatchedForwardJump { open: 2 })
        );
    }

    #[test]
    fn comments_are_scanned_transparently() {
        assert_eq!(check("loop [ body - ] done"), Ok(()));
        assert_eq!(
            check("oops ] here"),
            Err(VerifyError::UnmatchedBackJump { at: 5 })
        );
    }
}
