//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single acceptor thread
//! - Serial mode: handler runs on the acceptor thread
//! - Concurrent mode: one handler thread per connection
//! - Handlers share nothing with each other or with the acceptor

mod server;
mod connection;
mod session;

pub use server::{AcceptAction, Server, ACCEPT_ERROR_BACKOFF};
pub use connection::{handle_connection, Connection};
pub use session::{run_session, SessionEnd};
