//! VM state: program, jump table, tape, and the two pointers.

use std::io::{Read, Write};

use bfvm_common::{Instruction, JumpTable, Program};

use crate::config::{EofPolicy, VmConfig};
use crate::error::RuntimeError;
use crate::io::Input;
use crate::tape::{Address, Tape};

/// The bfvm virtual machine.
///
/// Created once per run. The program and jump table are fixed for the life
/// of the VM; only the tape and the pointers change.
pub struct VM<'a, R, W> {
    /// The program being executed.
    pub(crate) program: &'a Program,
    /// Precomputed bracket partners.
    pub(crate) jumps: JumpTable,
    /// Memory.
    pub(crate) tape: Tape,
    /// Data pointer (current tape address).
    pub(crate) dp: Address,
    /// Program counter (index of the next instruction).
    pub(crate) pc: usize,
    /// Instructions dispatched so far.
    pub(crate) steps: u64,
    /// Where `,` reads from.
    pub(crate) input: Input<R>,
    /// Where `.` writes to.
    pub(crate) output: W,
    /// End-of-input behavior.
    pub(crate) on_eof: EofPolicy,
}

impl<'a, R: Read, W: Write> VM<'a, R, W> {
    /// Create a VM for a program whose jumps are already resolved.
    ///
    /// `jumps` should come from [`bfvm_verifier::verify`] on the same program.
    pub fn new(
        program: &'a Program,
        jumps: JumpTable,
        config: &VmConfig,
        input: R,
        output: W,
    ) -> Self {
        Self {
            program,
            jumps,
            tape: Tape::new(),
            dp: 0,
            pc: 0,
            steps: 0,
            input: Input::new(input, config.input_mode),
            output,
            on_eof: config.on_eof,
        }
    }

    /// The tape in its current state.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Consume the VM, keeping only the tape.
    pub fn into_tape(self) -> Tape {
        self.tape
    }

    /// Current data pointer.
    pub fn data_pointer(&self) -> Address {
        self.dp
    }

    /// Index of the next instruction to execute.
    pub fn instruction_pointer(&self) -> usize {
        self.pc
    }

    /// Number of instructions dispatched, comments included.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Fetch the instruction at the current pc. Past the end reads as a
    /// no-op; the run loop never asks for it.
    pub(crate) fn fetch(&self) -> Instruction {
        self.program
            .instructions()
            .get(self.pc)
            .copied()
            .unwrap_or(Instruction::Ignored)
    }

    /// Partner of the bracket at the current pc.
    pub(crate) fn jump_target(&self) -> Result<usize, RuntimeError> {
        self.jumps
            .get(self.pc)
            .ok_or(RuntimeError::MissingJumpDestination { at: self.pc })
    }
}
