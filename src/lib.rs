//! # lineecho
//!
//! A line-oriented TCP echo service:
//! - Newline-delimited UTF-8 requests, one `echo: ` reply per line
//! - `quit` ends a session without a reply
//! - Serial (one client at a time) or thread-per-connection dispatch
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Listener                            │
//! │              (single accept loop, Server::run)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ dispatch by ConcurrencyMode
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Serial    │          │ Concurrent  │
//!   │ (same thd)  │          │(thread/conn)│
//!   └──────┬──────┘          └──────┬──────┘
//!          └────────────┬────────────┘
//!                       ▼
//!               ┌───────────────┐
//!               │  Connection   │
//!               │ read ↔ reply  │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EchoError, Result};
pub use config::{Config, ConcurrencyMode};
pub use network::Server;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of lineecho
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
