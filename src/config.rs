//! Configuration for lineecho
//!
//! Centralized listener configuration with sensible defaults.

use std::fmt;
use std::str::FromStr;

use crate::error::{EchoError, Result};

/// Default TCP port the server listens on
pub const DEFAULT_PORT: u16 = 4589;

/// Default bind host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Listener configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Host or IP to bind
    pub host: String,

    /// TCP port to bind (0 asks the OS for an ephemeral port)
    pub port: u16,

    // -------------------------------------------------------------------------
    // Dispatch Configuration
    // -------------------------------------------------------------------------
    /// How accepted connections are handed to their handlers
    pub mode: ConcurrencyMode,
}

/// Concurrency policy for dispatching accepted connections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConcurrencyMode {
    /// Handle each connection on the accepting thread, one at a time
    #[default]
    Serial,

    /// Spawn a thread per connection and keep accepting (unbounded)
    Concurrent,
}

impl fmt::Display for ConcurrencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcurrencyMode::Serial => f.write_str("serial"),
            ConcurrencyMode::Concurrent => f.write_str("concurrent"),
        }
    }
}

impl FromStr for ConcurrencyMode {
    type Err = EchoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "serial" => Ok(ConcurrencyMode::Serial),
            "concurrent" => Ok(ConcurrencyMode::Concurrent),
            other => Err(EchoError::Config(format!(
                "unknown concurrency mode '{}' (expected 'serial' or 'concurrent')",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            mode: ConcurrencyMode::Serial,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The `host:port` string handed to the socket layer
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check values the type system does not already rule out
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(EchoError::Config("host must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the bind host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the TCP port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the concurrency mode
    pub fn mode(mut self, mode: ConcurrencyMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
