// Rust guideline compliant 2026-10-19

//! Tix CLI library.
//!
//! This library exposes the interactive shell, output formatters and
//! terminal helpers for use in tests and the `tix` binary.

pub mod logging;
pub mod output;
pub mod shell;
pub mod terminal;

pub use logging::init_tracing;
pub use output::{create_formatter, OutputFormatter};
pub use shell::{MenuChoice, Shell};
pub use terminal::{color_choice, should_use_color};
