// Rust guideline compliant 2026-10-19

//! Ticket id parsing and lookup helpers.

use crate::error::{AppError, Result};
use std::num::{IntErrorKind, ParseIntError};
use tix_core::{Error as CoreError, Ticket, TicketId, TicketStore};

/// Parses a ticket id typed at the console.
///
/// Surrounding whitespace is ignored, a leading sign is accepted and single
/// underscores may separate digits, so `"-3"` and `"1_0"` both parse. No
/// ticket ever carries a negative id.
///
/// # Errors
///
/// Returns `AppError::InvalidIdFormat` if the input is not an integer, or
/// `Error::NotFound` if it is an integer too large to be any ticket's id.
pub fn parse_ticket_id(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    let invalid = || AppError::InvalidIdFormat {
        input: input.to_string(),
    };
    let digits = strip_digit_separators(trimmed).ok_or_else(invalid)?;
    digits.parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            AppError::from(CoreError::NotFound {
                id: trimmed.to_string(),
            })
        }
        _ => invalid(),
    })
}

/// Removes underscores that sit between two ASCII digits.
///
/// Returns `None` if any underscore is leading, trailing or doubled.
fn strip_digit_separators(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut digits = String::with_capacity(input.len());
    for (index, ch) in input.char_indices() {
        if ch != '_' {
            digits.push(ch);
            continue;
        }
        let before = index.checked_sub(1).map(|i| bytes[i]);
        let after = bytes.get(index + 1).copied();
        let between_digits = before.is_some_and(|b| b.is_ascii_digit())
            && after.is_some_and(|b| b.is_ascii_digit());
        if !between_digits {
            return None;
        }
    }
    Some(digits)
}

/// Parses an id and resolves it to a stored ticket.
///
/// # Errors
///
/// Returns an error if the input is not an integer or no ticket matches.
pub fn select_ticket<'a>(store: &'a TicketStore, input: &str) -> Result<&'a Ticket> {
    let id = resolve_ticket_id(store, input)?;
    store
        .find_by_id(id)
        .ok_or_else(|| CoreError::NotFound { id: id.to_string() }.into())
}

/// Parses an id and checks that a ticket carries it.
///
/// # Errors
///
/// Returns an error if the input is not an integer or no ticket matches.
pub fn resolve_ticket_id(store: &TicketStore, input: &str) -> Result<TicketId> {
    let parsed = parse_ticket_id(input)?;
    let id = TicketId::try_from(parsed)
        .ok()
        .filter(|id| store.find_by_id(*id).is_some())
        .ok_or_else(|| CoreError::NotFound {
            id: parsed.to_string(),
        })?;
    tracing::debug!(ticket_id = id, "resolved ticket id");
    Ok(id)
}
