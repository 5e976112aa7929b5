//! Error Tests

use std::io;

use lineecho::EchoError;

#[test]
fn test_bind_error_message_names_address() {
    let err = EchoError::Bind {
        addr: "0.0.0.0:4589".to_string(),
        source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
    };
    let msg = err.to_string();
    assert!(msg.contains("0.0.0.0:4589"));
    assert!(msg.contains("address in use"));
}

#[test]
fn test_peer_disconnect_classification() {
    let reset: EchoError = io::Error::from(io::ErrorKind::ConnectionReset).into();
    let pipe: EchoError = io::Error::from(io::ErrorKind::BrokenPipe).into();
    let other: EchoError = io::Error::from(io::ErrorKind::PermissionDenied).into();

    assert!(reset.is_peer_disconnect());
    assert!(pipe.is_peer_disconnect());
    assert!(!other.is_peer_disconnect());
    assert!(!EchoError::Config("bad".into()).is_peer_disconnect());
    assert!(!EchoError::Accept(io::Error::from(io::ErrorKind::ConnectionReset)).is_peer_disconnect());
}
