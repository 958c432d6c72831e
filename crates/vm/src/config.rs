//! Run-time configuration for the VM.

use std::fmt;

/// How `,` obtains one unit of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// One byte per read, stored as its numeric value.
    #[default]
    Raw,
    /// One line per read; the first character's code point is stored.
    /// An empty line stores the newline code (10).
    Line,
}

/// What `,` does when the input source is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EofPolicy {
    /// Stop with [`RuntimeError::InputExhausted`](crate::RuntimeError::InputExhausted).
    #[default]
    Error,
    /// Store zero in the current cell.
    Zero,
    /// Leave the current cell as it is.
    Unchanged,
}

/// Options for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VmConfig {
    /// Input read semantics.
    pub input_mode: InputMode,
    /// Behavior at end of input.
    pub on_eof: EofPolicy,
}

impl VmConfig {
    /// Set the input mode.
    pub fn with_input_mode(mut self, input_mode: InputMode) -> Self {
        self.input_mode = input_mode;
        self
    }

    /// Set the end-of-input policy.
    pub fn with_eof_policy(mut self, on_eof: EofPolicy) -> Self {
        self.on_eof = on_eof;
        self
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Raw => write!(f, "raw"),
            InputMode::Line => write!(f, "line"),
        }
    }
}

impl fmt::Display for EofPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EofPolicy::Error => write!(f, "error"),
            EofPolicy::Zero => write!(f, "zero"),
            EofPolicy::Unchanged => write!(f, "unchanged"),
        }
    }
}
