// Rust guideline compliant 2026-10-19

//! Interactive menu shell.
//!
//! The shell owns the ticket store for the session, reads one menu choice at
//! a time, runs the matching operation and loops until the user exits or
//! input ends.

use crate::output::OutputFormatter;
use crate::terminal::{write_error, write_success};
use std::io::{BufRead, Write};
use termcolor::WriteColor;
use tix_app::{AppError, NewTicket, Result};
use tix_core::TicketStore;

const MENU: &str = "1) Create ticket\n2) List tickets\n3) Update ticket\n4) View ticket\n5) Exit\n";

/// Options offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Create a ticket.
    Create,
    /// List all tickets.
    List,
    /// Change status and/or add a note.
    Update,
    /// Show one ticket with its history.
    View,
    /// Leave the shell.
    Exit,
}

impl MenuChoice {
    /// Parses the text typed at the `Choose:` prompt.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidMenuChoice` for anything but `1` to `5`.
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim() {
            "1" => Ok(MenuChoice::Create),
            "2" => Ok(MenuChoice::List),
            "3" => Ok(MenuChoice::Update),
            "4" => Ok(MenuChoice::View),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(AppError::InvalidMenuChoice {
                input: input.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellState {
    MenuWait,
    Exit,
}

/// Interactive ticket console over arbitrary input and output streams.
pub struct Shell<R, W> {
    store: TicketStore,
    input: R,
    output: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<R: BufRead, W: WriteColor> Shell<R, W> {
    /// Creates a shell with an empty store.
    ///
    /// # Arguments
    /// * `input` - Source of user lines
    /// * `output` - Console sink
    /// * `formatter` - Renderer for list and view output
    pub fn new(input: R, output: W, formatter: Box<dyn OutputFormatter>) -> Self {
        Self {
            store: TicketStore::new(),
            input,
            output,
            formatter,
        }
    }

    /// Returns the session's tickets.
    pub fn store(&self) -> &TicketStore {
        &self.store
    }

    /// Returns the console sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        let mut state = ShellState::MenuWait;
        while state == ShellState::MenuWait {
            state = self.step()?;
        }
        tracing::debug!(tickets = self.store.len(), "shell exited");
        Ok(())
    }

    fn step(&mut self) -> Result<ShellState> {
        self.output.write_all(MENU.as_bytes())?;
        let Some(line) = self.prompt("Choose: ")? else {
            return Ok(ShellState::Exit);
        };

        let choice = match MenuChoice::parse(&line) {
            Ok(choice) => choice,
            Err(err) => {
                self.report(&err)?;
                return Ok(ShellState::MenuWait);
            }
        };
        tracing::debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Create => self.create(),
            MenuChoice::List => self.list(),
            MenuChoice::Update => self.update(),
            MenuChoice::View => self.view(),
            MenuChoice::Exit => Ok(ShellState::Exit),
        }
    }

    fn create(&mut self) -> Result<ShellState> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(ShellState::Exit);
        };
        let Some(requester) = self.prompt("Requester: ")? else {
            return Ok(ShellState::Exit);
        };
        let Some(priority) = self.prompt("Priority (Low/Medium/High): ")? else {
            return Ok(ShellState::Exit);
        };

        let id = tix_app::create_ticket(
            &mut self.store,
            NewTicket {
                title,
                requester,
                priority,
            },
        )?;

        writeln!(self.output)?;
        write_success(&mut self.output, &format!("Created ticket #{}", id))?;
        Ok(ShellState::MenuWait)
    }

    fn list(&mut self) -> Result<ShellState> {
        let rendered = self.formatter.format_list(tix_app::list_tickets(&self.store));
        self.output.write_all(rendered.as_bytes())?;
        Ok(ShellState::MenuWait)
    }

    fn update(&mut self) -> Result<ShellState> {
        let Some(id_input) = self.prompt("Ticket ID: ")? else {
            return Ok(ShellState::Exit);
        };

        let id = match tix_app::select_ticket(&self.store, &id_input) {
            Ok(ticket) => {
                write!(
                    self.output,
                    "\nSelected: #{} {} [{}]\n\n",
                    ticket.id(),
                    ticket.title(),
                    ticket.status()
                )?;
                ticket.id()
            }
            Err(err) => return self.recover(err),
        };

        let Some(status) = self.prompt("New status (Open/In Progress/Closed) or leave blank: ")?
        else {
            return Ok(ShellState::Exit);
        };
        let Some(note) = self.prompt("Update note: ")? else {
            return Ok(ShellState::Exit);
        };

        tix_app::apply_update(&mut self.store, id, &status, &note)?;

        // Reported even when nothing was recorded.
        writeln!(self.output)?;
        write_success(&mut self.output, "Ticket updated.")?;
        Ok(ShellState::MenuWait)
    }

    fn view(&mut self) -> Result<ShellState> {
        let Some(id_input) = self.prompt("Ticket ID: ")? else {
            return Ok(ShellState::Exit);
        };

        let rendered = match tix_app::view_ticket(&self.store, &id_input) {
            Ok(ticket) => self.formatter.format_ticket(ticket),
            Err(err) => return self.recover(err),
        };
        self.output.write_all(rendered.as_bytes())?;
        Ok(ShellState::MenuWait)
    }

    /// Reports a user-facing error and returns to the menu; anything else propagates.
    fn recover(&mut self, err: AppError) -> Result<ShellState> {
        if !err.is_recoverable() {
            return Err(err);
        }
        self.report(&err)?;
        Ok(ShellState::MenuWait)
    }

    fn report(&mut self, err: &AppError) -> Result<()> {
        tracing::debug!(code = ?err.code(), error = %err, "rejected input");
        write_error(&mut self.output, &err.user_message())?;
        Ok(())
    }

    /// Prints a prompt and reads one line without its line terminator.
    ///
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        self.output.write_all(label.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("input closed");
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
