//! Incremental accept-key digest (RFC 6455).
//!
//! The digest is SHA-1 over the client's `Sec-WebSocket-Key` value
//! concatenated with the protocol GUID. The hashing context is created
//! lazily when the key header is first seen, so before that point the
//! accumulator is an inert placeholder that also serves as the
//! duplicate-key sentinel.

use sha1::{Digest, Sha1};

use crate::error::{Error, Result};

/// The WebSocket GUID used in the Sec-WebSocket-Accept calculation (RFC 6455).
pub const WS_GUID: &str = "258EAFA5-E914-47DA-95CA-C5AB0DC85B11";

/// Length in bytes of the finalized digest (SHA-1 output size).
pub const KEY_HASH_LENGTH: usize = 20;

/// Accumulates the accept-key digest across the handshake.
///
/// State advances one way: `Inactive` until the key header is seen,
/// `Hashing` while the header block is still open, `Complete` once the
/// terminating blank line finalizes the digest. Dropping the
/// accumulator in any state releases the hash context.
#[derive(Debug, Default)]
pub(crate) enum KeyDigest {
    /// No `Sec-WebSocket-Key` header has been processed yet.
    #[default]
    Inactive,
    /// The key header was seen; the context holds the key value so far.
    Hashing(Sha1),
    /// Finalized output, available to the caller.
    Complete([u8; KEY_HASH_LENGTH]),
}

impl KeyDigest {
    /// Start hashing with the key header's value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKeyHeader`] if a key header was
    /// already processed by this accumulator.
    pub(crate) fn start(&mut self, value: &[u8]) -> Result<()> {
        match self {
            KeyDigest::Inactive => {
                let mut hasher = Sha1::new();
                hasher.update(value);
                *self = KeyDigest::Hashing(hasher);
                Ok(())
            }
            KeyDigest::Hashing(_) | KeyDigest::Complete(_) => Err(Error::DuplicateKeyHeader),
        }
    }

    /// Append the protocol GUID and finalize the digest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKeyHeader`] if no key header was ever
    /// seen.
    pub(crate) fn finish(&mut self) -> Result<()> {
        match std::mem::take(self) {
            KeyDigest::Inactive => Err(Error::MissingKeyHeader),
            KeyDigest::Hashing(mut hasher) => {
                hasher.update(WS_GUID.as_bytes());
                *self = KeyDigest::Complete(hasher.finalize().into());
                Ok(())
            }
            done @ KeyDigest::Complete(_) => {
                *self = done;
                Ok(())
            }
        }
    }

    /// The finalized digest, or `None` until [`finish`](Self::finish)
    /// has succeeded.
    pub(crate) fn value(&self) -> Option<&[u8]> {
        match self {
            KeyDigest::Complete(hash) => Some(hash),
            KeyDigest::Inactive | KeyDigest::Hashing(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_without_key_fails() {
        let mut digest = KeyDigest::default();
        assert_eq!(digest.finish(), Err(Error::MissingKeyHeader));
    }

    #[test]
    fn test_second_start_fails() {
        let mut digest = KeyDigest::default();
        digest.start(b"potato").unwrap();
        assert_eq!(digest.start(b"another-potato"), Err(Error::DuplicateKeyHeader));
    }

    #[test]
    fn test_value_unavailable_until_finished() {
        let mut digest = KeyDigest::default();
        assert!(digest.value().is_none());
        digest.start(b"potato").unwrap();
        assert!(digest.value().is_none());
        digest.finish().unwrap();
        assert_eq!(digest.value().map(<[u8]>::len), Some(KEY_HASH_LENGTH));
    }

    #[test]
    fn test_matches_one_shot_sha1() {
        let mut digest = KeyDigest::default();
        digest.start(b"dGhlIHNhbXBsZSBub25jZQ==").unwrap();
        digest.finish().unwrap();

        let mut hasher = Sha1::new();
        hasher.update(b"dGhlIHNhbXBsZSBub25jZQ==");
        hasher.update(WS_GUID.as_bytes());
        let expected: [u8; KEY_HASH_LENGTH] = hasher.finalize().into();

        assert_eq!(digest.value(), Some(&expected[..]));
    }
}
