//! Protocol Module
//!
//! Defines the line protocol for client-server communication.
//!
//! ## Protocol Format
//!
//! Plain UTF-8 text, one request per line, one reply line per request.
//!
//! ```text
//! client                      server
//!   hello\n          ──▶
//!                    ◀──        echo: hello\n
//!   \n               ──▶
//!                    ◀──        echo: \n
//!   quit\n           ──▶        (no reply, connection closed)
//! ```
//!
//! There are no length prefixes and no error replies: a failed connection
//! is simply dropped.

mod request;
mod reply;
mod codec;

pub use request::{Request, QUIT_SENTINEL};
pub use reply::{Reply, REPLY_PREFIX};
pub use codec::{LineReader, write_line, write_reply, write_request, LINE_TERMINATOR};
