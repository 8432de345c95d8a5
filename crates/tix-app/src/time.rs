// Rust guideline compliant 2026-10-19

//! Timestamp helpers for Tix.

use chrono::Local;

/// Format of every recorded timestamp: local ISO-8601 at second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Returns the current local time as `YYYY-MM-DDTHH:MM:SS`.
///
/// Each call reads the clock again; callers that record several entries get
/// one reading per entry.
pub fn local_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
