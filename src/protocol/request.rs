//! Request definitions
//!
//! One request per received line.

/// Line content that ends a session instead of being echoed.
///
/// Matched exactly and case-sensitively; only the line terminator is
/// stripped before comparison.
pub const QUIT_SENTINEL: &str = "quit";

/// A request decoded from one line of client input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Ordinary line content (terminator already stripped), to be echoed
    Line(String),

    /// The sentinel line: close this session without a reply
    Quit,
}

impl Request {
    /// Classify a line whose terminator has already been removed
    pub fn from_line(line: String) -> Self {
        if line == QUIT_SENTINEL {
            Request::Quit
        } else {
            Request::Line(line)
        }
    }

    /// The line content as it appears on the wire (without terminator)
    pub fn as_line(&self) -> &str {
        match self {
            Request::Line(line) => line,
            Request::Quit => QUIT_SENTINEL,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Request::Quit)
    }
}
