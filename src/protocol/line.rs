//! Bounded accumulation buffer for logical HTTP lines.

use crate::error::{Error, Result};

/// Maximum length in bytes of one logical line of the handshake request.
///
/// The bound applies to the request line and to every header, folded
/// continuations included, because they all accumulate into the same
/// buffer.
pub const MAX_LINE_LENGTH: usize = 512;

/// Fixed-capacity buffer holding the current logical line, line
/// terminators excluded.
///
/// The buffer is append-only between explicit [`clear`](Self::clear)
/// calls, which the parser issues only at the start of the request line
/// and at the start of each logical header.
#[derive(Debug)]
pub(crate) struct LineBuffer {
    buf: [u8; MAX_LINE_LENGTH],
    len: usize,
}

impl LineBuffer {
    pub(crate) const fn new() -> Self {
        Self {
            buf: [0; MAX_LINE_LENGTH],
            len: 0,
        }
    }

    /// Append bytes to the line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineTooLong`] if the line would exceed
    /// [`MAX_LINE_LENGTH`].
    pub(crate) fn append(&mut self, bytes: &[u8]) -> Result<()> {
        if self.len + bytes.len() > MAX_LINE_LENGTH {
            return Err(Error::LineTooLong);
        }
        self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }

    /// Discard the accumulated line.
    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}
