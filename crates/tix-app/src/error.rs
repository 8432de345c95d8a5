// Rust guideline compliant 2026-10-19

//! Error handling for Tix application services.

use serde::Serialize;
use thiserror::Error;
use tix_core::Error as CoreError;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for console and log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The ticket id input is not an integer.
    InvalidIdFormat,
    /// No ticket carries the requested id.
    TicketNotFound,
    /// The menu input is not one of the offered options.
    InvalidMenuChoice,
    /// Ticket data would break a store invariant.
    ValidationError,
    /// Configuration is invalid.
    ConfigError,
    /// IO failure while reading input or writing output.
    IoError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The ticket id input could not be parsed as an integer.
    #[error("Invalid ticket id: {input:?}")]
    InvalidIdFormat {
        /// The raw text that was entered.
        input: String,
    },

    /// The menu input is not one of the offered options.
    #[error("Invalid menu choice: {input:?}")]
    InvalidMenuChoice {
        /// The raw text that was entered.
        input: String,
    },

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidIdFormat { .. } => ErrorCode::InvalidIdFormat,
            AppError::InvalidMenuChoice { .. } => ErrorCode::InvalidMenuChoice,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => ErrorCode::TicketNotFound,
                CoreError::InvalidTicket(_) => ErrorCode::ValidationError,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
            },
        }
    }

    /// Returns true for errors the console reports and then carries on from.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::InvalidIdFormat | ErrorCode::TicketNotFound | ErrorCode::InvalidMenuChoice
        )
    }

    /// Returns the message shown to the console user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.code() {
            ErrorCode::InvalidIdFormat => "Invalid ID.".to_string(),
            ErrorCode::TicketNotFound => "Ticket not found.".to_string(),
            ErrorCode::InvalidMenuChoice => "Invalid choice.".to_string(),
            _ => self.to_string(),
        }
    }
}
