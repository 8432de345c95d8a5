// Rust guideline compliant 2026-10-19

//! Ticket desk operations.
//!
//! Each operation works on an explicitly passed [`TicketStore`] and returns
//! data for the caller to render; nothing here touches the console.

use crate::error::Result;
use crate::ids::{resolve_ticket_id, select_ticket};
use crate::time::local_timestamp;
use tix_core::{
    is_known_priority, is_known_status, normalize_title_case, Error as CoreError, Ticket,
    TicketId, TicketStore, DEFAULT_PRIORITY,
};

/// Raw field values collected for a new ticket.
#[derive(Debug, Clone, Default)]
pub struct NewTicket {
    /// Title as typed.
    pub title: String,
    /// Requester as typed.
    pub requester: String,
    /// Priority as typed; blank selects the default.
    pub priority: String,
}

/// What an update actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    /// A status change entry was recorded.
    pub status_changed: bool,
    /// A free-form note entry was recorded.
    pub note_added: bool,
}

impl UpdateOutcome {
    /// Returns true if the update recorded nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        !self.status_changed && !self.note_added
    }
}

/// Creates a ticket and appends it to the store.
///
/// Title and requester are trimmed and kept even when empty. The priority is
/// trimmed and title-cased, falling back to `Medium` when blank.
///
/// # Arguments
///
/// * `store` - The ticket store
/// * `new_ticket` - Raw field values
///
/// # Returns
///
/// The id of the created ticket.
///
/// # Errors
///
/// Returns an error only if the store rejects the ticket, which sequential
/// id allocation rules out.
pub fn create_ticket(store: &mut TicketStore, new_ticket: NewTicket) -> Result<TicketId> {
    let title = new_ticket.title.trim().to_string();
    let requester = new_ticket.requester.trim().to_string();
    let mut priority = normalize_title_case(new_ticket.priority.trim());
    if priority.is_empty() {
        priority = DEFAULT_PRIORITY.to_string();
    }
    if !is_known_priority(&priority) {
        tracing::warn!(priority = %priority, "priority outside Low/Medium/High accepted");
    }

    let id = store.next_id();
    let created_at = local_timestamp();
    let ticket = Ticket::open(id, title, requester, priority, created_at, local_timestamp());
    store.append(ticket)?;

    tracing::info!(ticket_id = id, "created ticket");
    Ok(id)
}

/// Returns every ticket in creation order.
pub fn list_tickets(store: &TicketStore) -> &[Ticket] {
    store.all()
}

/// Parses an id and returns the matching ticket for display.
///
/// # Errors
///
/// Returns an error if the id is malformed or no ticket matches.
pub fn view_ticket<'a>(store: &'a TicketStore, id_input: &str) -> Result<&'a Ticket> {
    select_ticket(store, id_input)
}

/// Applies a status change and/or a note to a ticket.
///
/// A status that is non-empty after trimming and title-casing replaces the
/// current one and records `Status changed to {status}.`. A non-empty note is
/// recorded as its own entry afterwards. Each entry reads the clock itself.
///
/// # Arguments
///
/// * `store` - The ticket store
/// * `id` - Id of an existing ticket
/// * `status_input` - New status as typed, blank to keep the current one
/// * `note_input` - Note as typed, blank for none
///
/// # Returns
///
/// Which entries were recorded.
///
/// # Errors
///
/// Returns an error if no ticket carries `id`.
pub fn apply_update(
    store: &mut TicketStore,
    id: TicketId,
    status_input: &str,
    note_input: &str,
) -> Result<UpdateOutcome> {
    let ticket = store
        .find_by_id_mut(id)
        .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;
    let mut outcome = UpdateOutcome::default();

    let status = normalize_title_case(status_input.trim());
    if !status.is_empty() {
        if !is_known_status(&status) {
            tracing::warn!(ticket_id = id, status = %status, "status outside Open/In Progress/Closed accepted");
        }
        let note = format!("Status changed to {}.", status);
        ticket.set_status(status);
        ticket.add_update(local_timestamp(), note);
        outcome.status_changed = true;
    }

    let note = note_input.trim();
    if !note.is_empty() {
        ticket.add_update(local_timestamp(), note.to_string());
        outcome.note_added = true;
    }

    if outcome.is_noop() {
        tracing::debug!(ticket_id = id, "update recorded nothing");
    } else {
        tracing::info!(
            ticket_id = id,
            status_changed = outcome.status_changed,
            note_added = outcome.note_added,
            "updated ticket"
        );
    }

    Ok(outcome)
}

/// Resolves an id typed at the console and applies an update to it.
///
/// # Errors
///
/// Returns an error if the id is malformed or no ticket matches; the store
/// is left untouched in both cases.
pub fn update_ticket(
    store: &mut TicketStore,
    id_input: &str,
    status_input: &str,
    note_input: &str,
) -> Result<UpdateOutcome> {
    let id = resolve_ticket_id(store, id_input)?;
    apply_update(store, id, status_input, note_input)
}
