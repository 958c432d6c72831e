//! Character input and output for `,` and `.`.
//!
//! Input is pulled one byte at a time from the underlying reader so that a
//! read never consumes more than the current instruction needs. Output is
//! flushed after every character.

use std::io::{self, ErrorKind, Read, Write};

use num_traits::ToPrimitive;

use crate::config::InputMode;
use crate::tape::Cell;

/// Newline code point, stored for an empty line in [`InputMode::Line`].
const NEWLINE: u32 = 0x0A;

/// An input source paired with its read semantics.
pub struct Input<R> {
    reader: R,
    mode: InputMode,
}

impl<R: Read> Input<R> {
    /// Wrap a reader.
    pub fn new(reader: R, mode: InputMode) -> Self {
        Self { reader, mode }
    }

    /// Read one unit of input. `Ok(None)` means the source is closed.
    pub fn read_unit(&mut self) -> io::Result<Option<u32>> {
        match self.mode {
            InputMode::Raw => Ok(self.read_byte()?.map(u32::from)),
            InputMode::Line => self.read_line_head(),
        }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Consume a whole line and return the code point of its first character.
    fn read_line_head(&mut self) -> io::Result<Option<u32>> {
        let mut line = Vec::new();
        let mut saw_newline = false;

        while let Some(byte) = self.read_byte()? {
            if byte == b'\n' {
                saw_newline = true;
                break;
            }
            line.push(byte);
        }

        if line.is_empty() && !saw_newline {
            return Ok(None);
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        Ok(Some(first_code_point(&line)))
    }
}

/// Code point of the first character of `line`, or [`NEWLINE`] if it is empty.
///
/// A leading byte that does not start a valid UTF-8 sequence is returned as
/// its raw value.
fn first_code_point(line: &[u8]) -> u32 {
    let Some(&first) = line.first() else {
        return NEWLINE;
    };
    (1..=line.len().min(4))
        .find_map(|width| {
            std::str::from_utf8(&line[..width])
                .ok()
                .and_then(|s| s.chars().next())
        })
        .map_or(u32::from(first), u32::from)
}

/// Write a cell as a character, then flush.
///
/// Values that are not Unicode scalar values (negative, surrogates, or above
/// U+10FFFF) are written as their decimal digits instead.
pub fn write_cell<W: Write>(output: &mut W, value: &Cell) -> io::Result<()> {
    match value.to_u32().and_then(char::from_u32) {
        Some(c) => {
            let mut buf = [0u8; 4];
            output.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        }
        None => write!(output, "{value}")?,
    }
    output.flush()
}
