// Rust guideline compliant 2026-10-19

//! Tix Core Library
//!
//! This crate provides the foundational components for the Tix ticket desk:
//! - Data models (Ticket, TicketUpdate)
//! - Title-case normalization for priority and status values
//! - In-memory ticket store (append, lookup, id allocation)
//! - Configuration loading (TOML file + environment overrides)
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use config::{Config, LogLevel, OutputFormat};
pub use error::{Error, Result};
pub use models::{
    is_known_priority, is_known_status, normalize_title_case, Ticket, TicketId, TicketUpdate,
    DEFAULT_PRIORITY, DEFAULT_STATUS, KNOWN_PRIORITIES, KNOWN_STATUSES,
};
pub use store::TicketStore;
