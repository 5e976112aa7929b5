//! Session loop
//!
//! The read-line/write-reply exchange for one connection, independent of
//! the socket it runs over.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::protocol::{write_reply, LineReader, Reply, Request};

/// Why a session ended without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Peer closed its write side (end of stream)
    PeerClosed,

    /// Peer sent the quit sentinel
    Quit,
}

/// Run the echo loop until end of stream, the quit sentinel, or an I/O error
///
/// Every non-sentinel line gets exactly one reply, flushed before the next
/// read. Nothing is carried over from one line to the next.
pub fn run_session<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<SessionEnd> {
    let mut lines = LineReader::new(reader);

    loop {
        let line = match lines.read_request()? {
            None => return Ok(SessionEnd::PeerClosed),
            Some(Request::Quit) => return Ok(SessionEnd::Quit),
            Some(Request::Line(line)) => line,
        };

        tracing::trace!(len = line.len(), "echoing line");
        write_reply(writer, &Reply::echo(&line))?;
    }
}
