// Rust guideline compliant 2026-10-19

//! Output formatting module for the Tix CLI.
//!
//! This module renders tickets for the list and view screens, either as
//! aligned console text or as JSON.

use serde_json::json;
use tix_core::{OutputFormat, Ticket};

/// Output formatter trait.
///
/// Defines the interface for rendering tickets in different output formats.
pub trait OutputFormatter {
    /// Formats a single ticket with its full history.
    ///
    /// # Arguments
    /// * `ticket` - The ticket to format
    ///
    /// # Returns
    /// The rendered block, including its trailing blank line
    fn format_ticket(&self, ticket: &Ticket) -> String;

    /// Formats all tickets in the order given.
    ///
    /// # Arguments
    /// * `tickets` - The tickets to format
    ///
    /// # Returns
    /// The rendered block, including its trailing blank line
    fn format_list(&self, tickets: &[Ticket]) -> String;
}

/// JSON output formatter.
///
/// Formats tickets as pretty-printed JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_ticket(&self, ticket: &Ticket) -> String {
        let body = serde_json::to_string_pretty(ticket)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize ticket" }).to_string());
        format!("{}\n\n", body)
    }

    fn format_list(&self, tickets: &[Ticket]) -> String {
        let output = json!({
            "tickets": tickets,
            "total": tickets.len(),
        });
        let body = serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize ticket list" }).to_string());
        format!("{}\n\n", body)
    }
}

/// Console text formatter.
///
/// Lists one aligned line per ticket; the detail view prints every field
/// followed by the history, oldest first.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format_ticket(&self, ticket: &Ticket) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n--- Ticket #{} ---\n", ticket.id()));
        output.push_str(&format!("Title: {}\n", ticket.title()));
        output.push_str(&format!("Requester: {}\n", ticket.requester()));
        output.push_str(&format!("Priority: {}\n", ticket.priority()));
        output.push_str(&format!("Status: {}\n", ticket.status()));
        output.push_str(&format!("Created: {}\n", ticket.created_at()));
        output.push_str("Updates:\n");
        for update in ticket.updates() {
            output.push_str(&format!("- {}: {}\n", update.timestamp, update.note));
        }
        output.push('\n');

        output
    }

    fn format_list(&self, tickets: &[Ticket]) -> String {
        if tickets.is_empty() {
            return "\nNo tickets yet.\n\n".to_string();
        }

        let mut output = String::from("\nTickets:\n");
        for ticket in tickets {
            output.push_str(&format!(
                "#{} | {:<11} | {:<6} | {} (Requester: {})\n",
                ticket.id(),
                ticket.status(),
                ticket.priority(),
                ticket.title(),
                ticket.requester()
            ));
        }
        output.push('\n');

        output
    }
}

/// Factory function to create the formatter for a configured format.
///
/// # Arguments
/// * `format` - The configured output format
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
