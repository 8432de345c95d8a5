// Rust guideline compliant 2026-10-19

//! Unit tests for error types and messages.

use tix_core::Error;

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = Error::Io(io_err);
    assert!(
        error.to_string().contains("IO error"),
        "IO error should contain 'IO error' prefix"
    );
}

#[test]
fn test_invalid_ticket_error_formatting() {
    let error = Error::InvalidTicket("ticket #3 has no history".to_string());
    assert_eq!(error.to_string(), "Invalid ticket: ticket #3 has no history");
}

#[test]
fn test_not_found_error_formatting() {
    let error = Error::NotFound {
        id: "42".to_string(),
    };
    assert_eq!(error.to_string(), "Ticket not found: #42");
}

#[test]
fn test_invalid_config_error_formatting() {
    let error = Error::InvalidConfig("TIX_COLOR must be true or false".to_string());
    let msg = error.to_string();
    assert!(msg.starts_with("Invalid config"));
    assert!(msg.contains("TIX_COLOR"), "Should preserve context message");
}

#[test]
fn test_io_error_converts_with_question_mark() {
    fn read_missing() -> tix_core::Result<String> {
        Ok(std::fs::read_to_string("/definitely/not/here/tix.toml")?)
    }

    assert!(matches!(read_missing(), Err(Error::Io(_))));
}
