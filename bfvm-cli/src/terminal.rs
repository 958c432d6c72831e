//! Terminal raw mode for `,` in raw input mode.
//!
//! A terminal in canonical mode hands bytes over only after Enter and echoes
//! every keystroke. While the guard is alive, reads from an interactive stdin
//! return each key as it is pressed, without echo. Piped input is left alone.

use std::io::{self, IsTerminal};

use bfvm_vm::InputMode;

/// Whether the terminal must leave canonical mode for this run.
pub fn wants_raw_mode(mode: InputMode, stdin_is_terminal: bool) -> bool {
    mode == InputMode::Raw && stdin_is_terminal
}

/// Keeps the terminal in raw mode until dropped.
pub struct RawModeGuard {
    enabled: bool,
}

impl RawModeGuard {
    /// Enter raw mode if stdin is a terminal and `mode` reads raw bytes.
    pub fn for_input(mode: InputMode) -> io::Result<Self> {
        if !wants_raw_mode(mode, io::stdin().is_terminal()) {
            return Ok(Self { enabled: false });
        }
        crossterm::terminal::enable_raw_mode()?;
        tracing::debug!("terminal switched to raw mode");
        Ok(Self { enabled: true })
    }

    /// True if this guard changed the terminal mode.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if !self.enabled {
            return;
        }
        if let Err(e) = crossterm::terminal::disable_raw_mode() {
            tracing::warn!(error = %e, "failed to restore terminal mode");
        }
    }
}
