//! Program representation for bfvm source text.
//!
//! A program is the character-by-character decoding of its source. Comment
//! characters are kept as [`Instruction::Ignored`] so that every instruction
//! index equals the character index it came from.

use std::fmt;

use crate::error::DecodeError;
use crate::instruction::Instruction;

/// A bfvm program: an immutable sequence of instructions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Create a new program from a vector of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Decode program text. Every character becomes one instruction.
    pub fn parse(source: &str) -> Self {
        Self {
            instructions: source.chars().map(Instruction::decode).collect(),
        }
    }

    /// Decode raw program bytes, which must be UTF-8.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let text = std::str::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8 {
            offset: e.valid_up_to(),
        })?;
        Ok(Self::parse(text))
    }

    /// The instruction stream, one entry per source character.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions in the program, comments included.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of instructions that are not comments.
    pub fn significant_len(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| i.is_significant())
            .count()
    }
}

impl fmt::Display for Program {
    /// Renders the recognized symbols only; comments are dropped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instr in &self.instructions {
            write!(f, "{instr}")?;
        }
        Ok(())
    }
}
