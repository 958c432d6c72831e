//! Main execution loop and instruction dispatch for the bfvm VM.
//!
//! Every iteration dispatches the instruction at `pc` and then advances `pc`
//! by one, whether or not a jump fired. A taken jump sets `pc` to the
//! partner bracket, so execution resumes just after that partner: past the
//! `]` when skipping a loop, and at the first body instruction when
//! repeating one.

use std::io::{Read, Write};

use bfvm_common::Instruction;
use num_traits::One;

use crate::config::EofPolicy;
use crate::error::RuntimeError;
use crate::io::write_cell;
use crate::machine::VM;
use crate::tape::Cell;

impl<'a, R: Read, W: Write> VM<'a, R, W> {
    /// Execute until the program counter runs off the end of the program.
    pub fn execute(&mut self) -> Result<(), RuntimeError> {
        let end = self.program.len();

        while self.pc < end {
            let instr = self.fetch();

            match instr {
                Instruction::Right => self.dp = self.dp.wrapping_add(1),
                Instruction::Left => self.dp = self.dp.wrapping_sub(1),
                Instruction::Increment => {
                    let value = self.tape.read(self.dp) + Cell::one();
                    self.tape.write(self.dp, value);
                }
                Instruction::Decrement => {
                    let value = self.tape.read(self.dp) - Cell::one();
                    self.tape.write(self.dp, value);
                }
                Instruction::Output => self.exec_output()?,
                Instruction::Input => self.exec_input()?,
                Instruction::JumpForward => {
                    if self.tape.is_zero(self.dp) {
                        self.pc = self.jump_target()?;
                    }
                }
                Instruction::JumpBackward => {
                    if !self.tape.is_zero(self.dp) {
                        self.pc = self.jump_target()?;
                    }
                }
                Instruction::Ignored => {}
            }

            self.pc += 1;
            self.steps += 1;
        }

        tracing::debug!(
            steps = self.steps,
            cells = self.tape.touched(),
            data_pointer = self.dp,
            "program finished"
        );
        Ok(())
    }

    fn exec_output(&mut self) -> Result<(), RuntimeError> {
        let value = self.tape.read(self.dp);
        write_cell(&mut self.output, &value).map_err(|e| RuntimeError::Io {
            at: self.pc,
            message: e.to_string(),
        })
    }

    fn exec_input(&mut self) -> Result<(), RuntimeError> {
        let unit = self.input.read_unit().map_err(|e| RuntimeError::Io {
            at: self.pc,
            message: e.to_string(),
        })?;

        match (unit, self.on_eof) {
            (Some(code), _) => self.tape.write(self.dp, Cell::from(code)),
            (None, EofPolicy::Zero) => self.tape.write(self.dp, Cell::from(0)),
            (None, EofPolicy::Unchanged) => {}
            (None, EofPolicy::Error) => {
                tracing::warn!(at = self.pc, "input exhausted");
                return Err(RuntimeError::InputExhausted { at: self.pc });
            }
        }
        Ok(())
    }
}
