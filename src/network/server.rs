//! TCP Server
//!
//! Accepts connections and dispatches them according to the configured
//! concurrency mode.

use std::convert::Infallible;
use std::io::{self, ErrorKind};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use crate::config::{Config, ConcurrencyMode};
use crate::error::{EchoError, Result};
use super::connection::handle_connection;

/// Pause after an accept error that may fail again straight away
/// (e.g. out of file descriptors)
pub const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// What the accept loop does after a failed accept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptAction {
    /// Only the pending connection failed; accept again at once
    Retry,

    /// Log, wait, then accept again
    Backoff(Duration),

    /// The listening socket is unusable; leave the loop
    Stop,
}

impl AcceptAction {
    pub fn for_error(e: &io::Error) -> Self {
        match e.kind() {
            ErrorKind::Interrupted
            | ErrorKind::ConnectionAborted
            | ErrorKind::ConnectionReset => AcceptAction::Retry,
            // EINVAL: the socket is no longer listening
            ErrorKind::InvalidInput => AcceptAction::Stop,
            _ => AcceptAction::Backoff(ACCEPT_ERROR_BACKOFF),
        }
    }
}

/// TCP server for lineecho
pub struct Server {
    /// Bound listening socket. Only the accept loop touches it.
    listener: TcpListener,

    /// Address actually bound (resolves port 0)
    local_addr: SocketAddr,

    /// Dispatch policy, fixed at construction
    mode: ConcurrencyMode,
}

impl Server {
    /// Bind the listening socket described by `config`
    ///
    /// Fails with [`EchoError::Bind`] if the address is in use, not
    /// permitted, or does not resolve. Nothing is accepted before this
    /// succeeds.
    pub fn bind(config: &Config) -> Result<Self> {
        config.validate()?;

        let addr = config.listen_addr();
        let listener = TcpListener::bind((config.host.as_str(), config.port))
            .map_err(|source| EchoError::Bind { addr: addr.clone(), source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| EchoError::Bind { addr, source })?;

        tracing::info!(addr = %local_addr, mode = %config.mode, "Listening");

        Ok(Self {
            listener,
            local_addr,
            mode: config.mode,
        })
    }

    /// The address the server is bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// The concurrency mode connections are dispatched with
    pub fn mode(&self) -> ConcurrencyMode {
        self.mode
    }

    /// Run the accept loop (blocking)
    ///
    /// Individual accept failures are logged and the loop keeps going;
    /// failures that can repeat immediately are followed by a short pause.
    /// Connection failures never reach this loop. Only returns, with
    /// [`EchoError::Accept`], once the listening socket itself is unusable.
    pub fn run(self) -> Result<Infallible> {
        loop {
            match self.listener.accept() {
                Ok((stream, _)) => self.dispatch(stream),
                Err(e) => match AcceptAction::for_error(&e) {
                    AcceptAction::Retry => {
                        tracing::debug!("Pending connection dropped before accept: {}", e)
                    }
                    AcceptAction::Backoff(delay) => {
                        tracing::warn!("{}", EchoError::Accept(e));
                        thread::sleep(delay);
                    }
                    AcceptAction::Stop => return Err(EchoError::Accept(e)),
                },
            }
        }
    }

    /// Hand an accepted stream to a handler
    fn dispatch(&self, stream: TcpStream) {
        match self.mode {
            ConcurrencyMode::Serial => handle_connection(stream),
            ConcurrencyMode::Concurrent => spawn_handler(stream),
        }
    }
}

/// Run a connection on its own thread
///
/// No cap on the number of live handler threads.
fn spawn_handler(stream: TcpStream) {
    let name = match stream.peer_addr() {
        Ok(addr) => format!("conn-{}", addr),
        Err(_) => "conn".to_string(),
    };

    // On spawn failure the closure, and with it the stream, is dropped
    if let Err(e) = thread::Builder::new()
        .name(name)
        .spawn(move || handle_connection(stream))
    {
        tracing::warn!("Failed to spawn connection handler: {}", e);
    }
}
