// Rust guideline compliant 2026-10-19

//! Error types for the Tix core library.

use thiserror::Error;

/// Result type alias for Tix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Tix operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Ticket data would break a store invariant.
    #[error("Invalid ticket: {0}")]
    InvalidTicket(String),

    /// No ticket carries the requested id.
    #[error("Ticket not found: #{id}")]
    NotFound {
        /// The id as entered; it may not fit in a `TicketId`.
        id: String,
    },

    /// Configuration file or environment value is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
