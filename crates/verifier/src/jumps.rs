//! Jump resolution.
//!
//! Builds the [`JumpTable`] with one left-to-right scan and a stack of
//! pending `[` indices. The VM consults the table for every taken jump and
//! never rescans the program.

use bfvm_common::{Instruction, JumpTable};

/// Pair every `[` with its matching `]`.
///
/// Expects balanced input (see [`check_balance`](crate::check_balance)).
/// On unbalanced input the unmatched brackets are simply absent from the
/// returned table.
pub fn resolve_jumps(instrs: &[Instruction]) -> JumpTable {
    let mut table = JumpTable::new();
    let mut pending: Vec<usize> = Vec::new();

    for (pc, instr) in instrs.iter().enumerate() {
        match instr {
            Instruction::JumpForward => pending.push(pc),
            Instruction::JumpBackward => {
                if let Some(open) = pending.pop() {
                    table.insert_pair(open, pc);
                }
            }
            _ => {}
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfvm_common::Program;

    fn resolve(source: &str) -> JumpTable {
        resolve_jumps(Program::parse(source).instructions())
    }

    #[test]
    fn no_brackets_gives_empty_table() {
        assert!(resolve("+-<>.,").is_empty());
    }

    #[test]
    fn single_loop() {
        let table = resolve("+[-]");
        assert_eq!(table.get(1), Some(3));
        assert_eq!(table.get(3), Some(1));
        assert_eq!(table.get(2), None);
    }

    #[test]
    fn nested_loops_pair_innermost_first() {
        let table = resolve("[[]+[]]");
        assert_eq!(table.get(0), Some(6));
        assert_eq!(table.get(1), Some(2));
        assert_eq!(table.get(4), Some(5));
        assert_eq!(table.pair_count(), 3);
        assert!(table.is_involution());
    }

    #[test]
    fn comment_characters_keep_source_indices() {
        let table = resolve("ab[cd]");
        assert_eq!(table.get(2), Some(5));
    }

    #[test]
    fn unbalanced_input_leaves_brackets_unpaired() {
        let table = resolve("[[]");
        assert_eq!(table.get(0), None);
        assert_eq!(table.get(1), Some(2));

        let table = resolve("[]]");
        assert_eq!(table.get(2), None);
    }
}
