//! Config Tests

use lineecho::config::{DEFAULT_HOST, DEFAULT_PORT};
use lineecho::{ConcurrencyMode, Config, EchoError};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.mode, ConcurrencyMode::Serial);
    assert_eq!(config.listen_addr(), "0.0.0.0:4589");
}

#[test]
fn test_builder_overrides() {
    let config = Config::builder()
        .host("127.0.0.1")
        .port(0)
        .mode(ConcurrencyMode::Concurrent)
        .build();

    assert_eq!(config.listen_addr(), "127.0.0.1:0");
    assert_eq!(config.mode, ConcurrencyMode::Concurrent);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_host_rejected() {
    let config = Config::builder().host("  ").build();
    assert!(matches!(config.validate(), Err(EchoError::Config(_))));
}

#[test]
fn test_mode_parse_and_display() {
    assert_eq!("serial".parse::<ConcurrencyMode>().unwrap(), ConcurrencyMode::Serial);
    assert_eq!(
        "Concurrent".parse::<ConcurrencyMode>().unwrap(),
        ConcurrencyMode::Concurrent
    );
    assert!("threaded".parse::<ConcurrencyMode>().is_err());
    assert_eq!(ConcurrencyMode::Concurrent.to_string(), "concurrent");
}
