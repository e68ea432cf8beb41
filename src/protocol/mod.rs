//! WebSocket opening-handshake protocol core.

pub mod digest;
pub mod handshake;
pub mod line;
pub mod response;

pub use digest::{KEY_HASH_LENGTH, WS_GUID};
pub use handshake::{HandshakeParser, ParseStatus};
pub use line::MAX_LINE_LENGTH;
pub use response::{accept_header_value, write_switching_protocols};
