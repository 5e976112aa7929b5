//! Reply definitions

use std::fmt;

/// Tag prepended to every echoed line
pub const REPLY_PREFIX: &str = "echo: ";

/// A reply line to send to a client (without terminator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply(String);

impl Reply {
    /// Build the echo reply for a line's content
    pub fn echo(content: &str) -> Self {
        let mut line = String::with_capacity(REPLY_PREFIX.len() + content.len());
        line.push_str(REPLY_PREFIX);
        line.push_str(content);
        Self(line)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
