// Rust guideline compliant 2026-10-19

//! Core data models for Tix.

use serde::Serialize;

/// Numeric ticket identifier, assigned sequentially from 1.
pub type TicketId = u64;

/// Priority assigned when the caller leaves it blank.
pub const DEFAULT_PRIORITY: &str = "Medium";

/// Status every ticket starts in.
pub const DEFAULT_STATUS: &str = "Open";

/// Priorities offered at the create prompt.
pub const KNOWN_PRIORITIES: [&str; 3] = ["Low", "Medium", "High"];

/// Statuses offered at the update prompt.
pub const KNOWN_STATUSES: [&str; 3] = ["Open", "In Progress", "Closed"];

/// Note recorded as the first history entry of every ticket.
pub const CREATED_NOTE: &str = "Ticket created.";

/// A single timestamped entry in a ticket's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketUpdate {
    /// Local time the entry was recorded (`YYYY-MM-DDTHH:MM:SS`).
    pub timestamp: String,
    /// Free-form note text.
    pub note: String,
}

impl TicketUpdate {
    /// Creates a new history entry.
    pub fn new(timestamp: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            note: note.into(),
        }
    }
}

/// A support ticket.
///
/// Everything except `status` is fixed at creation. The history is
/// append-only and always holds at least the creation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    id: TicketId,
    title: String,
    requester: String,
    priority: String,
    status: String,
    created_at: String,
    updates: Vec<TicketUpdate>,
}

impl Ticket {
    /// Opens a new ticket in the default status.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier allocated by the store
    /// * `title` - One-line summary
    /// * `requester` - Who asked for the work
    /// * `priority` - Already normalized priority
    /// * `created_at` - Timestamp recorded as the creation time
    /// * `opened_at` - Timestamp of the synthetic "Ticket created." entry
    ///
    /// # Returns
    ///
    /// A ticket whose history holds exactly the creation entry.
    pub fn open(
        id: TicketId,
        title: String,
        requester: String,
        priority: String,
        created_at: String,
        opened_at: String,
    ) -> Self {
        Self {
            id,
            title,
            requester,
            priority,
            status: DEFAULT_STATUS.to_string(),
            created_at,
            updates: vec![TicketUpdate::new(opened_at, CREATED_NOTE)],
        }
    }

    /// Returns the ticket id.
    pub fn id(&self) -> TicketId {
        self.id
    }

    /// Returns the ticket title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the requester.
    pub fn requester(&self) -> &str {
        &self.requester
    }

    /// Returns the priority.
    pub fn priority(&self) -> &str {
        &self.priority
    }

    /// Returns the current status.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Returns the history in insertion order.
    pub fn updates(&self) -> &[TicketUpdate] {
        &self.updates
    }

    /// Replaces the status. The caller records the matching history entry.
    pub fn set_status(&mut self, status: String) {
        self.status = status;
    }

    /// Appends a history entry.
    pub fn add_update(&mut self, timestamp: String, note: String) {
        self.updates.push(TicketUpdate { timestamp, note });
    }
}

/// Title-cases text the way the console always has.
///
/// The first cased letter after any non-cased character is upper-cased and
/// every following cased letter is lower-cased, so `"in progress"` becomes
/// `"In Progress"` and `"in-progress"` becomes `"In-Progress"`.
pub fn normalize_title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_cased = false;

    for ch in value.chars() {
        let cased = ch.is_uppercase() || ch.is_lowercase() || is_titlecase_letter(ch);
        if cased {
            if previous_cased {
                result.extend(ch.to_lowercase());
            } else {
                push_titlecase(&mut result, ch);
            }
        } else {
            result.push(ch);
        }
        previous_cased = cased;
    }

    result
}

/// Returns true for the titlecase letters (`Lt`) such as `ǅ`.
fn is_titlecase_letter(ch: char) -> bool {
    matches!(
        ch,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

/// Appends the titlecase form of `ch`.
///
/// Digraphs and ligatures title-case to a capital followed by lowercase
/// letters rather than to their all-caps form. Other characters fall back
/// to the uppercase mapping.
fn push_titlecase(out: &mut String, ch: char) {
    let mapped = match ch {
        '\u{01C4}'..='\u{01C6}' => "\u{01C5}",
        '\u{01C7}'..='\u{01C9}' => "\u{01C8}",
        '\u{01CA}'..='\u{01CC}' => "\u{01CB}",
        '\u{01F1}'..='\u{01F3}' => "\u{01F2}",
        '\u{00DF}' => "Ss",
        '\u{FB00}' => "Ff",
        '\u{FB01}' => "Fi",
        '\u{FB02}' => "Fl",
        '\u{FB03}' => "Ffi",
        '\u{FB04}' => "Ffl",
        '\u{FB05}' | '\u{FB06}' => "St",
        '\u{0587}' => "\u{0535}\u{0582}",
        '\u{FB13}' => "\u{0544}\u{0576}",
        '\u{FB14}' => "\u{0544}\u{0565}",
        '\u{FB15}' => "\u{0544}\u{056B}",
        '\u{FB16}' => "\u{054E}\u{0576}",
        '\u{FB17}' => "\u{0544}\u{056D}",
        _ if is_titlecase_letter(ch) => {
            out.push(ch);
            return;
        }
        _ => {
            out.extend(ch.to_uppercase());
            return;
        }
    };
    out.push_str(mapped);
}

/// Returns true if the priority is one of the prompted values.
pub fn is_known_priority(priority: &str) -> bool {
    KNOWN_PRIORITIES.contains(&priority)
}

/// Returns true if the status is one of the prompted values.
pub fn is_known_status(status: &str) -> bool {
    KNOWN_STATUSES.contains(&status)
}
