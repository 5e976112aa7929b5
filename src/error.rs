//! Error types for lineecho
//!
//! Each variant maps to the scope a failure is contained in: binding is
//! fatal to the process, everything else stays local to one accept attempt
//! or one connection.

use thiserror::Error;

/// Result type alias using EchoError
pub type Result<T> = std::result::Result<T, EchoError>;

/// Unified error type for lineecho operations
#[derive(Debug, Error)]
pub enum EchoError {
    // -------------------------------------------------------------------------
    // Listener Errors
    // -------------------------------------------------------------------------
    /// The listen address could not be acquired. Fatal at startup.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// A single accept attempt failed. The accept loop keeps going.
    #[error("Failed to accept connection: {0}")]
    Accept(#[source] std::io::Error),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    /// Read or write failure on one connection. Ends that connection only.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Shutting down a finished connection failed.
    #[error("Failed to close connection: {0}")]
    Close(#[source] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EchoError {
    /// True for I/O errors caused by the peer going away mid-session
    /// (reset, abort, broken pipe). These are routine and logged quietly.
    pub fn is_peer_disconnect(&self) -> bool {
        match self {
            EchoError::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
                    | std::io::ErrorKind::BrokenPipe
                    | std::io::ErrorKind::UnexpectedEof
            ),
            _ => false,
        }
    }
}
