// Rust guideline compliant 2026-10-19

//! Terminal UI utilities for the Tix CLI.
//!
//! This module provides color detection and colored status lines written
//! to any [`WriteColor`] sink.

use std::env;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Maps the color decision onto a termcolor choice.
pub fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Writes a line in the given color followed by a blank line.
///
/// # Arguments
/// * `out` - The sink to write to
/// * `message` - The message text
/// * `color` - The color to use
///
/// # Errors
/// Returns an error if the sink cannot be written.
pub fn write_status<W: WriteColor>(out: &mut W, message: &str, color: Color) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", message)?;
    out.reset()?;
    writeln!(out)?;
    writeln!(out)
}

/// Writes a success message.
///
/// # Errors
/// Returns an error if the sink cannot be written.
pub fn write_success<W: WriteColor>(out: &mut W, message: &str) -> io::Result<()> {
    write_status(out, message, Color::Green)
}

/// Writes an error message.
///
/// # Errors
/// Returns an error if the sink cannot be written.
pub fn write_error<W: WriteColor>(out: &mut W, message: &str) -> io::Result<()> {
    write_status(out, message, Color::Red)
}
