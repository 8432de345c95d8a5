// Rust guideline compliant 2026-10-19

//! In-memory ticket store.
//!
//! Tickets are held in insertion order for the lifetime of the process.
//! Insertion order is authoritative: it drives listing and id allocation.

use crate::{Error, Result, Ticket, TicketId};

/// Ordered, append-only collection of tickets.
#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    /// Tickets in creation order.
    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id the next created ticket should receive.
    ///
    /// # Returns
    ///
    /// The last appended id plus one, or 1 for an empty store.
    pub fn next_id(&self) -> TicketId {
        self.tickets.last().map_or(1, |ticket| ticket.id() + 1)
    }

    /// Appends a ticket.
    ///
    /// # Arguments
    ///
    /// * `ticket` - The ticket to add
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ticket id does not exceed the last appended id
    /// - The ticket has no history
    pub fn append(&mut self, ticket: Ticket) -> Result<()> {
        if let Some(last) = self.tickets.last() {
            if ticket.id() <= last.id() {
                return Err(Error::InvalidTicket(format!(
                    "id #{} must be greater than last id #{}",
                    ticket.id(),
                    last.id()
                )));
            }
        }

        if ticket.updates().is_empty() {
            return Err(Error::InvalidTicket(format!(
                "ticket #{} has no history",
                ticket.id()
            )));
        }

        tracing::debug!(ticket_id = ticket.id(), "appending ticket to store");
        self.tickets.push(ticket);
        Ok(())
    }

    /// Looks up a ticket by id.
    pub fn find_by_id(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.id() == id)
    }

    /// Looks up a ticket by id for modification.
    pub fn find_by_id_mut(&mut self, id: TicketId) -> Option<&mut Ticket> {
        self.tickets.iter_mut().find(|ticket| ticket.id() == id)
    }

    /// Returns all tickets in creation order.
    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Returns the number of tickets.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Returns true if no ticket has been created yet.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
