//! Protocol codec
//!
//! Line reading and writing over buffered streams.
//!
//! ## Wire Format
//! ```text
//! request:  <content>\n | <content>\r\n | <content>\r
//! reply:    echo: <content>\n
//! ```
//!
//! Bytes are decoded as UTF-8; invalid sequences become U+FFFD instead of
//! failing the connection.

use std::io::{BufRead, ErrorKind, Write};

use crate::error::Result;
use super::{Reply, Request};

/// Terminator written after every line
pub const LINE_TERMINATOR: &[u8] = b"\n";

// =============================================================================
// Line Assembly
// =============================================================================

/// Splits a buffered stream into lines
///
/// A line ends at `\n`, `\r\n`, or a lone `\r`. A line ending in `\r`
/// is returned immediately; a `\n` arriving right after it is dropped on
/// the next read, so the reader never waits for bytes the peer may not
/// send.
pub struct LineReader<R> {
    inner: R,

    /// Previous line ended in `\r`; a leading `\n` belongs to it
    skip_lf: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            skip_lf: false,
        }
    }

    /// Read one line, without its terminator
    ///
    /// Returns `Ok(None)` at end of stream. A final unterminated line before
    /// EOF is still returned as a line.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();

        loop {
            let available = match self.inner.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if available.is_empty() {
                if buf.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(decode(buf)));
            }

            let mut start = 0;
            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    start = 1;
                }
            }

            let rest = &available[start..];
            match rest.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    buf.extend_from_slice(&rest[..i]);
                    self.skip_lf = rest[i] == b'\r';
                    self.inner.consume(start + i + 1);
                    return Ok(Some(decode(buf)));
                }
                None => {
                    buf.extend_from_slice(rest);
                    let used = available.len();
                    self.inner.consume(used);
                }
            }
        }
    }

    /// Read the next request. `Ok(None)` means the peer closed its write side.
    pub fn read_request(&mut self) -> Result<Option<Request>> {
        Ok(self.read_line()?.map(Request::from_line))
    }

    /// Read one reply line. `Ok(None)` means the server closed the connection.
    pub fn read_reply(&mut self) -> Result<Option<String>> {
        self.read_line()
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }
}

fn decode(buf: Vec<u8>) -> String {
    match String::from_utf8(buf) {
        Ok(line) => line,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Write `line` followed by the terminator, then flush
///
/// The flush is what makes the line visible to the peer; without it a
/// reply can sit in the buffer indefinitely.
pub fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(LINE_TERMINATOR)?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Server Side
// =============================================================================

/// Write a reply line and flush it
pub fn write_reply<W: Write>(writer: &mut W, reply: &Reply) -> Result<()> {
    write_line(writer, reply.as_str())
}

// =============================================================================
// Client Side
// =============================================================================

/// Write a request line and flush it
pub fn write_request<W: Write>(writer: &mut W, request: &Request) -> Result<()> {
    write_line(writer, request.as_line())
}
