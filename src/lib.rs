//! # ws-handshake - Incremental WebSocket Handshake Parsing
//!
//! `ws-handshake` recognizes the HTTP/1.x GET request that opens a
//! WebSocket connection and derives the accept-key digest needed to
//! complete the handshake.
//!
//! ## Features
//!
//! - **Fragmentation-tolerant**: input may arrive in any chunking,
//!   down to one byte at a time, with byte-identical results
//! - **Bounded memory**: a hard 512-byte cap on every logical line
//! - **Header folding**: multi-line header values per HTTP/1.x
//!   continuation rules
//! - **Precise errors**: malformed syntax and unsupported-but-valid
//!   input are distinguished, with stable messages
//!
//! ## Quick Start
//!
//! ```
//! use ws_handshake::{HandshakeParser, ParseStatus, write_switching_protocols};
//!
//! let request = b"GET /chat HTTP/1.1\r\n\
//!     Sec-WebSocket-Key: dGhlIHNhbXBsZSBub25jZQ==\r\n\
//!     \r\n";
//!
//! let mut parser = HandshakeParser::new();
//! if let ParseStatus::Finished { consumed } = parser.parse_data(request).unwrap() {
//!     // Bytes past `consumed` belong to the WebSocket framing layer.
//!     assert_eq!(consumed, request.len());
//!     let mut response = Vec::new();
//!     write_switching_protocols(parser.key_hash().unwrap(), &mut response);
//! }
//! ```

pub mod error;
pub mod protocol;

pub use error::{Error, ErrorKind, Result};
pub use protocol::{
    HandshakeParser, KEY_HASH_LENGTH, MAX_LINE_LENGTH, ParseStatus, WS_GUID,
    accept_header_value, write_switching_protocols,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn test_public_types_are_send() {
        assert_send::<Error>();
        assert_send::<ErrorKind>();
        assert_send::<HandshakeParser>();
        assert_send::<ParseStatus>();
    }

    #[test]
    fn test_public_types_are_sync() {
        assert_sync::<Error>();
        assert_sync::<ErrorKind>();
        assert_sync::<HandshakeParser>();
        assert_sync::<ParseStatus>();
    }
}
