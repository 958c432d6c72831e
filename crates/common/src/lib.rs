//! bfvm common types.
//!
//! This crate provides the foundational data structures shared by the
//! verifier and the virtual machine:
//!
//! - [`Instruction`] — the eight recognized symbols plus `Ignored`
//! - [`Program`] — a decoded, immutable instruction sequence
//! - [`JumpTable`] — the precomputed `[` / `]` pairing
//! - [`DecodeError`] — errors from decoding raw program bytes

pub mod error;
pub mod instruction;
pub mod jump_table;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::DecodeError;
pub use instruction::{Instruction, ALL_INSTRUCTIONS};
pub use jump_table::JumpTable;
pub use program::Program;
