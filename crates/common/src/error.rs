//! Decode errors for bfvm program text.

use thiserror::Error;

/// Errors that occur while decoding raw program bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The byte stream is not valid UTF-8.
    #[error("program text is not valid UTF-8 (first bad byte at offset {offset})")]
    InvalidUtf8 { offset: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_utf8() {
        assert_eq!(
            DecodeError::InvalidUtf8 { offset: 3 }.to_string(),
            "program text is not valid UTF-8 (first bad byte at offset 3)"
        );
    }
}
