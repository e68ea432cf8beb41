//! Construction of the 101 Switching Protocols response.
//!
//! Once the parser has finished, the raw accept-key digest it exposes
//! is base64-encoded into the `Sec-WebSocket-Accept` header. Writing
//! the resulting bytes to the socket stays the caller's job.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Compute the `Sec-WebSocket-Accept` value from the raw key digest.
///
/// # Example
///
/// ```
/// use ws_handshake::{HandshakeParser, accept_header_value};
///
/// let request = b"GET / HTTP/1.1\r\n\
///     Sec-WebSocket-Key: dGhlIHNhbXBsZSBub25jZQ==\r\n\
///     \r\n";
/// let mut parser = HandshakeParser::new();
/// parser.parse_data(request).unwrap();
///
/// let accept = accept_header_value(parser.key_hash().unwrap());
/// assert_eq!(accept, "s3pPLMBiTxaQ9kYGzzhZRbK+xOo=");
/// ```
#[must_use]
pub fn accept_header_value(key_hash: &[u8]) -> String {
    BASE64.encode(key_hash)
}

/// Serialize the complete handshake response into `buf`.
///
/// The response upgrades the connection; any WebSocket frames may
/// follow it on the wire.
pub fn write_switching_protocols(key_hash: &[u8], buf: &mut Vec<u8>) {
    buf.extend_from_slice(
        b"HTTP/1.1 101 Switching Protocols\r\n\
          Upgrade: websocket\r\n\
          Connection: Upgrade\r\n\
          Sec-WebSocket-Accept: ",
    );
    buf.extend_from_slice(accept_header_value(key_hash).as_bytes());
    buf.extend_from_slice(b"\r\n\r\n");
}
