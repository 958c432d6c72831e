//! The eight-symbol instruction set.
//!
//! Every character of program text decodes to exactly one [`Instruction`].
//! Characters outside the alphabet decode to [`Instruction::Ignored`] and act
//! as comments: they occupy an index (so jump positions line up with source
//! offsets) but do nothing when executed.

use std::fmt;

/// A single decoded program symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `>` — move the data pointer one cell to the right.
    Right,
    /// `<` — move the data pointer one cell to the left.
    Left,
    /// `+` — add one to the current cell.
    Increment,
    /// `-` — subtract one from the current cell.
    Decrement,
    /// `.` — write the current cell to the output sink.
    Output,
    /// `,` — read one unit of input into the current cell.
    Input,
    /// `[` — jump past the matching `]` if the current cell is zero.
    JumpForward,
    /// `]` — jump back to the matching `[` if the current cell is nonzero.
    JumpBackward,
    /// Any other character. Executes as a no-op.
    Ignored,
}

/// The eight recognized instructions, in alphabet order. Useful for
/// exhaustive testing.
pub const ALL_INSTRUCTIONS: [Instruction; 8] = [
    Instruction::Right,
    Instruction::Left,
    Instruction::Increment,
    Instruction::Decrement,
    Instruction::Output,
    Instruction::Input,
    Instruction::JumpForward,
    Instruction::JumpBackward,
];

impl Instruction {
    /// Decode a single character. Never fails.
    pub fn decode(c: char) -> Self {
        match c {
            '>' => Instruction::Right,
            '<' => Instruction::Left,
            '+' => Instruction::Increment,
            '-' => Instruction::Decrement,
            '.' => Instruction::Output,
            ',' => Instruction::Input,
            '[' => Instruction::JumpForward,
            ']' => Instruction::JumpBackward,
            _ => Instruction::Ignored,
        }
    }

    /// The source symbol for this instruction, or `None` for [`Instruction::Ignored`].
    pub fn symbol(&self) -> Option<char> {
        match self {
            Instruction::Right => Some('>'),
            Instruction::Left => Some('<'),
            Instruction::Increment => Some('+'),
            Instruction::Decrement => Some('-'),
            Instruction::Output => Some('.'),
            Instruction::Input => Some(','),
            Instruction::JumpForward => Some('['),
            Instruction::JumpBackward => Some(']'),
            Instruction::Ignored => None,
        }
    }

    /// True for `[` and `]`.
    pub fn is_jump(&self) -> bool {
        matches!(self, Instruction::JumpForward | Instruction::JumpBackward)
    }

    /// True for everything except [`Instruction::Ignored`].
    pub fn is_significant(&self) -> bool {
        !matches!(self, Instruction::Ignored)
    }
}

impl From<char> for Instruction {
    fn from(c: char) -> Self {
        Instruction::decode(c)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(c) => write!(f, "{c}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_every_symbol() {
        let decoded: Vec<Instruction> = "><+-.,[]".chars().map(Instruction::decode).collect();
        assert_eq!(decoded, ALL_INSTRUCTIONS.to_vec());
    }

    #[test]
    fn symbol_inverts_decode() {
        for instr in ALL_INSTRUCTIONS {
            let c = instr.symbol().unwrap();
            assert_eq!(Instruction::decode(c), instr);
        }
    }

    #[test]
    fn unknown_characters_are_ignored() {
        for c in ['a', ' ', '\n', '#', '{', 'é', '0'] {
            assert_eq!(Instruction::decode(c), Instruction::Ignored);
        }
        assert_eq!(Instruction::Ignored.symbol(), None);
        assert!(!Instruction::Ignored.is_significant());
    }

    #[test]
    fn only_brackets_are_jumps() {
        let jumps: Vec<_> = ALL_INSTRUCTIONS.iter().filter(|i| i.is_jump()).collect();
        assert_eq!(
            jumps,
            vec![&Instruction::JumpForward, &Instruction::JumpBackward]
        );
        assert!(!Instruction::Ignored.is_jump());
    }

    #[test]
    fn display_ignored_is_empty() {
        assert_eq!(Instruction::Ignored.to_string(), "");
        assert_eq!(Instruction::Output.to_string(), ".");
    }
}
