//! Connection Handler
//!
//! Handles individual client connections.

use std::io::{BufReader, BufWriter, ErrorKind};
use std::net::{Shutdown, TcpStream};

use crate::error::{EchoError, Result};
use super::session::{run_session, SessionEnd};

/// Handles a single client connection
///
/// Owns the accepted stream for its whole lifetime. Dropping a
/// `Connection` closes the socket; [`Connection::close`] does the same but
/// reports a failed shutdown.
pub struct Connection {
    /// TCP stream reader (buffered for line assembly)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered, flushed after every reply)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    ///
    /// Sets up buffered I/O over two handles to the same socket.
    pub fn new(stream: TcpStream) -> Result<Self> {
        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Replies are small and flushed one at a time
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            peer_addr,
        })
    }

    /// Handle the connection (blocking until the session ends)
    ///
    /// Returns when the client disconnects, sends `quit`, or an I/O error
    /// occurs. The socket stays open; call [`Connection::close`] afterwards.
    pub fn handle(&mut self) -> Result<SessionEnd> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        let end = run_session(&mut self.reader, &mut self.writer)?;

        match end {
            SessionEnd::PeerClosed => {
                tracing::debug!("Client {} disconnected", self.peer_addr)
            }
            SessionEnd::Quit => tracing::debug!("Client {} sent quit", self.peer_addr),
        }

        Ok(end)
    }

    /// Shut down both directions of the socket and release it
    ///
    /// A peer that already tore the connection down shows up as
    /// `NotConnected`; that counts as closed, not as a failure.
    pub fn close(self) -> Result<()> {
        match self.writer.get_ref().shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotConnected => {
                tracing::debug!("Connection to {} already closed by peer", self.peer_addr);
                Ok(())
            }
            Err(e) => Err(EchoError::Close(e)),
        }
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

/// Run one connection through its full lifecycle
///
/// Open, serve until the session ends, then close. Every failure is
/// logged here and contained to this connection.
pub fn handle_connection(stream: TcpStream) {
    let mut conn = match Connection::new(stream) {
        Ok(conn) => conn,
        Err(e) => {
            // The stream was consumed by `new`, so it is already dropped
            tracing::warn!("Failed to set up connection: {}", e);
            return;
        }
    };

    match conn.handle() {
        Ok(_) => {}
        Err(e) if e.is_peer_disconnect() => {
            tracing::debug!("Client {} dropped the connection: {}", conn.peer_addr(), e);
        }
        Err(e) => {
            tracing::warn!("Error on connection {}: {}", conn.peer_addr(), e);
        }
    }

    let peer_addr = conn.peer_addr().to_string();
    if let Err(e) = conn.close() {
        tracing::warn!("Error closing connection {}: {}", peer_addr, e);
    }
    tracing::debug!("Connection {} closed", peer_addr);
}
