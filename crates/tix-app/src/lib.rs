// Rust guideline compliant 2026-10-19

//! Ticket desk operations for Tix.
//!
//! This crate provides the console-independent operations (create, list,
//! update, view) over a [`tix_core::TicketStore`], together with ticket id
//! parsing, timestamp capture, and the user-facing error taxonomy.

pub mod error;
pub mod ids;
pub mod ops;
pub mod time;

pub use error::{AppError, ErrorCode, Result};
pub use ids::{parse_ticket_id, resolve_ticket_id, select_ticket};
pub use ops::{
    apply_update, create_ticket, list_tickets, update_ticket, view_ticket, NewTicket, UpdateOutcome,
};
pub use time::local_timestamp;
