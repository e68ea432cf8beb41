//! Incremental WebSocket handshake request parsing.
//!
//! [`HandshakeParser`] is a push-based state machine: the connection
//! handler feeds it successive byte slices exactly as they arrive from
//! the transport, in any fragmentation, and the parser produces the
//! same result as if the whole request had been delivered in one call.
//! On completion it reports how many bytes of the final slice belonged
//! to the request; anything after that is WebSocket framing (or other
//! trailing data) that the caller must hand to the next protocol stage.
//!
//! The grammar is deliberately relaxed compared to a general HTTP
//! parser: any method and request target are accepted, any `HTTP/1.x`
//! version passes, unknown headers are ignored, and header values may
//! span physical lines via leading-space continuation folding. The
//! only header that matters is `Sec-WebSocket-Key`, whose value is
//! hashed incrementally into the accept-key digest.

use crate::error::{Error, Result};
use crate::protocol::digest::KeyDigest;
use crate::protocol::line::LineBuffer;

/// Header whose value feeds the accept-key digest, compared
/// case-insensitively.
const KEY_HEADER: &[u8] = b"sec-websocket-key";

/// Progress report from [`HandshakeParser::parse_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    /// The entire input slice was consumed and the request is still
    /// incomplete; call again with more bytes.
    NeedMoreData,
    /// The request and its terminating blank line were fully parsed.
    Finished {
        /// How many bytes of the triggering call's input belong to the
        /// request. Remaining bytes belong to the next protocol layer
        /// and must not be discarded.
        consumed: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ReadingRequestLine,
    TerminatingRequestLine,
    ReadingHeader,
    TerminatingHeader,
    CheckingHeaderContinuation,
    Done,
}

/// Push-based parser for the client side of the WebSocket opening
/// handshake.
///
/// One instance is exclusively owned by one connection's handshake
/// phase. Feed it with [`parse_data`](Self::parse_data) until it
/// reports [`ParseStatus::Finished`] or an error; after an error the
/// instance must not be fed again. Once finished, the accept-key
/// digest is available via [`key_hash`](Self::key_hash).
///
/// # Example
///
/// ```
/// use ws_handshake::{HandshakeParser, ParseStatus};
///
/// let request = b"GET /chat HTTP/1.1\r\n\
///     Sec-WebSocket-Key: dGhlIHNhbXBsZSBub25jZQ==\r\n\
///     \r\n";
///
/// let mut parser = HandshakeParser::new();
/// match parser.parse_data(request).unwrap() {
///     ParseStatus::Finished { consumed } => {
///         assert_eq!(consumed, request.len());
///         assert_eq!(parser.key_hash().unwrap().len(), 20);
///     }
///     ParseStatus::NeedMoreData => unreachable!(),
/// }
/// ```
#[derive(Debug)]
pub struct HandshakeParser {
    state: State,
    line: LineBuffer,
    digest: KeyDigest,
}

impl Default for HandshakeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HandshakeParser {
    /// Create a parser in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::ReadingRequestLine,
            line: LineBuffer::new(),
            digest: KeyDigest::default(),
        }
    }

    /// Feed the parser with the next bytes from the transport.
    ///
    /// The input may be any length, including empty, and may split the
    /// request at arbitrary byte boundaries; N one-byte calls are
    /// equivalent to one N-byte call apart from the per-call consumed
    /// accounting.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRequest`] for a request line without two
    ///   spaces or a header line without a colon.
    /// - [`Error::UnsupportedHttpVersion`] for version tokens other
    ///   than `HTTP/1.` followed by digits.
    /// - [`Error::LineTooLong`] when a logical line exceeds
    ///   [`MAX_LINE_LENGTH`](crate::MAX_LINE_LENGTH).
    /// - [`Error::MissingKeyHeader`] / [`Error::DuplicateKeyHeader`]
    ///   when the `Sec-WebSocket-Key` header is absent or repeated.
    ///
    /// Any error is terminal: discard the parser and reject the
    /// connection.
    pub fn parse_data(&mut self, data: &[u8]) -> Result<ParseStatus> {
        let mut pos = 0;

        while pos < data.len() {
            match self.state {
                State::ReadingRequestLine => {
                    pos = self.read_line(data, pos, State::TerminatingRequestLine)?;
                }
                State::TerminatingRequestLine => {
                    if data[pos] == b'\n' {
                        // Some clients send a stray \r\n after a
                        // previous request body; empty lines before the
                        // request line are ignored.
                        if self.line.is_empty() {
                            self.state = State::ReadingRequestLine;
                        } else {
                            self.process_request_line()?;
                            self.line.clear();
                            self.state = State::ReadingHeader;
                        }
                        pos += 1;
                    } else {
                        // The \r was not a terminator after all. Requeue
                        // it as line content and re-read the current
                        // byte in the reading state.
                        self.line.append(b"\r")?;
                        self.state = State::ReadingRequestLine;
                    }
                }
                State::ReadingHeader => {
                    pos = self.read_line(data, pos, State::TerminatingHeader)?;
                }
                State::TerminatingHeader => {
                    if data[pos] == b'\n' {
                        if self.line.is_empty() {
                            // Blank line: the header block is complete.
                            self.digest.finish()?;
                            self.state = State::Done;
                        } else {
                            self.state = State::CheckingHeaderContinuation;
                        }
                        pos += 1;
                    } else {
                        self.line.append(b"\r")?;
                        self.state = State::ReadingHeader;
                    }
                }
                State::CheckingHeaderContinuation => {
                    if data[pos] == b' ' {
                        // Folded continuation of the same logical
                        // header. The space is not consumed here so it
                        // lands in the buffer as part of the value.
                        self.state = State::ReadingHeader;
                    } else {
                        self.process_header()?;
                        self.line.clear();
                        self.state = State::ReadingHeader;
                    }
                }
                State::Done => return Ok(ParseStatus::Finished { consumed: pos }),
            }
        }

        if self.state == State::Done {
            Ok(ParseStatus::Finished {
                consumed: data.len(),
            })
        } else {
            Ok(ParseStatus::NeedMoreData)
        }
    }

    /// The finalized accept-key digest.
    ///
    /// Returns `None` until [`parse_data`](Self::parse_data) has
    /// reported [`ParseStatus::Finished`].
    #[must_use]
    pub fn key_hash(&self) -> Option<&[u8]> {
        self.digest.value()
    }

    /// Accumulate line content up to a potential `\r` terminator.
    ///
    /// Returns the position of the first unprocessed byte. If a `\r`
    /// was found it is skipped and the state moves to `terminating`;
    /// whether it really ended the line is decided when the following
    /// byte arrives.
    fn read_line(&mut self, data: &[u8], pos: usize, terminating: State) -> Result<usize> {
        let rest = &data[pos..];
        match rest.iter().position(|&b| b == b'\r') {
            Some(i) => {
                self.line.append(&rest[..i])?;
                self.state = terminating;
                Ok(pos + i + 1)
            }
            None => {
                self.line.append(rest)?;
                Ok(data.len())
            }
        }
    }

    /// Validate the buffered request line: `METHOD SP URI SP HTTP/1.x`.
    fn process_request_line(&self) -> Result<()> {
        let line = self.line.as_slice();

        let method_end = line
            .iter()
            .position(|&b| b == b' ')
            .ok_or(Error::InvalidRequest)?;
        let rest = &line[method_end + 1..];

        let uri_end = rest
            .iter()
            .position(|&b| b == b' ')
            .ok_or(Error::InvalidRequest)?;

        check_http_version(&rest[uri_end + 1..])
    }

    /// Dispatch one complete logical header line.
    ///
    /// Only `Sec-WebSocket-Key` is acted on; its value, with the
    /// spaces immediately after the colon stripped, is fed into the
    /// digest accumulator. All other headers are ignored.
    fn process_header(&mut self) -> Result<()> {
        let line = self.line.as_slice();

        let colon = line
            .iter()
            .position(|&b| b == b':')
            .ok_or(Error::InvalidRequest)?;

        if line[..colon].eq_ignore_ascii_case(KEY_HEADER) {
            let value = &line[colon + 1..];
            let key_start = value
                .iter()
                .position(|&b| b != b' ')
                .unwrap_or(value.len());
            self.digest.start(&value[key_start..])?;
        }

        Ok(())
    }
}

/// Accept `HTTP/1.` followed by one or more ASCII digits, i.e. any 1.x
/// version.
fn check_http_version(token: &[u8]) -> Result<()> {
    let digits = token
        .strip_prefix(b"HTTP/1.")
        .ok_or(Error::UnsupportedHttpVersion)?;

    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(Error::UnsupportedHttpVersion);
    }

    Ok(())
}
