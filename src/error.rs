//! Error types for WebSocket handshake parsing.
//!
//! Every rejected request produces exactly one error with a stable,
//! descriptive message. The message text is part of the observable
//! contract and is pinned by tests.

use thiserror::Error;

/// Result type alias for handshake operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of a handshake failure.
///
/// The owning connection handler can map this to an HTTP rejection
/// status: `Invalid` for malformed requests (400), `Unsupported` for
/// well-formed requests the server will not serve (426).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request is syntactically malformed.
    Invalid,
    /// The request is well-formed but outside accepted limits.
    Unsupported,
}

/// Errors that can occur while parsing a handshake request.
///
/// All errors are terminal for the parser instance: the connection
/// should be rejected and the parser discarded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The request line is missing its space separators, or a header
    /// line has no colon.
    #[error("Invalid HTTP request received")]
    InvalidRequest,

    /// The version token of the request line is not `HTTP/1.x`.
    #[error("Unsupported HTTP version")]
    UnsupportedHttpVersion,

    /// A logical line exceeded the fixed line-length bound.
    #[error("Unsupported line length in HTTP request")]
    LineTooLong,

    /// The header block ended without a `Sec-WebSocket-Key` header.
    #[error("Client sent a WebSocket header without a Sec-WebSocket-Key header")]
    MissingKeyHeader,

    /// The request carried more than one `Sec-WebSocket-Key` header.
    #[error("Client sent a WebSocket header with multiple Sec-WebSocket-Key headers")]
    DuplicateKeyHeader,
}

impl Error {
    /// The broad class of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidRequest | Error::MissingKeyHeader | Error::DuplicateKeyHeader => {
                ErrorKind::Invalid
            }
            Error::UnsupportedHttpVersion | Error::LineTooLong => ErrorKind::Unsupported,
        }
    }
}
