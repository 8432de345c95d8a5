// Rust guideline compliant 2026-10-19

//! End-to-end tests driving the interactive shell with scripted input.

use std::io::Cursor;
use termcolor::NoColor;
use tix_cli::{create_formatter, MenuChoice, Shell};
use tix_core::{OutputFormat, Ticket};

const MENU: &str = "1) Create ticket\n2) List tickets\n3) Update ticket\n4) View ticket\n5) Exit\nChoose: ";

type TestShell = Shell<Cursor<Vec<u8>>, NoColor<Vec<u8>>>;

fn shell_for(script: &str, format: OutputFormat) -> TestShell {
    Shell::new(
        Cursor::new(script.as_bytes().to_vec()),
        NoColor::new(Vec::new()),
        create_formatter(format),
    )
}

/// Runs a script and returns the shell together with everything it printed.
fn run_script(script: &str) -> (TestShell, String) {
    run_script_with(script, OutputFormat::Text)
}

fn run_script_with(script: &str, format: OutputFormat) -> (TestShell, String) {
    let mut shell = shell_for(script, format);
    shell.run().expect("shell should run to completion");
    let output = String::from_utf8(shell.output().get_ref().clone()).expect("utf-8 output");
    (shell, output)
}

fn notes(ticket: &Ticket) -> Vec<&str> {
    ticket.updates().iter().map(|u| u.note.as_str()).collect()
}

#[test]
fn test_menu_choice_parse() {
    assert_eq!(MenuChoice::parse("1").unwrap(), MenuChoice::Create);
    assert_eq!(MenuChoice::parse(" 4 ").unwrap(), MenuChoice::View);
    assert_eq!(MenuChoice::parse("5").unwrap(), MenuChoice::Exit);
    assert!(MenuChoice::parse("6").is_err());
    assert!(MenuChoice::parse("").is_err());
    assert!(MenuChoice::parse("one").is_err());
}

#[test]
fn test_exit_immediately() {
    let (shell, output) = run_script("5\n");
    assert_eq!(output, MENU);
    assert!(shell.store().is_empty());
}

#[test]
fn test_end_of_input_exits() {
    let (shell, output) = run_script("");
    assert_eq!(output, MENU);
    assert!(shell.store().is_empty());
}

#[test]
fn test_create_ticket_flow() {
    let (shell, output) = run_script("1\nPrinter jam\nalice\n\n5\n");

    let expected = format!(
        "{MENU}Title: Requester: Priority (Low/Medium/High): \nCreated ticket #1\n\n{MENU}"
    );
    assert_eq!(output, expected);

    let ticket = shell.store().find_by_id(1).expect("ticket #1");
    assert_eq!(ticket.title(), "Printer jam");
    assert_eq!(ticket.requester(), "alice");
    assert_eq!(ticket.priority(), "Medium");
    assert_eq!(ticket.status(), "Open");
    assert_eq!(notes(ticket), vec!["Ticket created."]);
}

#[test]
fn test_list_empty_and_populated() {
    let (_, output) = run_script("2\n1\nPrinter jam\nalice\nhigh\n2\n5\n");

    assert!(output.contains("\nNo tickets yet.\n\n"));
    assert!(output.contains("\nTickets:\n#1 | Open        | High   | Printer jam (Requester: alice)\n\n"));
}

#[test]
fn test_update_status_and_note_flow() {
    let (shell, output) = run_script("1\nPrinter jam\nalice\n\n3\n1\nclosed\nFixed it\n5\n");

    assert!(output.contains("Ticket ID: \nSelected: #1 Printer jam [Open]\n\n"));
    assert!(output.contains(
        "New status (Open/In Progress/Closed) or leave blank: Update note: \nTicket updated.\n\n"
    ));

    let ticket = shell.store().find_by_id(1).expect("ticket #1");
    assert_eq!(ticket.status(), "Closed");
    assert_eq!(
        notes(ticket),
        vec!["Ticket created.", "Status changed to Closed.", "Fixed it"]
    );
}

#[test]
fn test_update_with_blank_answers_still_reports_success() {
    let (shell, output) = run_script("1\nPrinter jam\nalice\n\n3\n1\n\n\n5\n");

    assert!(output.contains("\nTicket updated.\n\n"));
    let ticket = shell.store().find_by_id(1).expect("ticket #1");
    assert_eq!(ticket.updates().len(), 1);
    assert_eq!(ticket.status(), "Open");
}

#[test]
fn test_update_invalid_id() {
    let (shell, output) = run_script("1\nPrinter jam\nalice\n\n3\nabc\n5\n");

    assert!(output.contains("Ticket ID: Invalid ID.\n\n"));
    assert!(!output.contains("Selected:"));
    let ticket = shell.store().find_by_id(1).expect("ticket #1");
    assert_eq!(ticket.updates().len(), 1);
}

#[test]
fn test_view_missing_ticket() {
    let (shell, output) = run_script("1\nPrinter jam\nalice\n\n4\n99\n5\n");

    assert!(output.contains("Ticket ID: Ticket not found.\n\n"));
    assert_eq!(shell.store().len(), 1);
}

#[test]
fn test_overflowing_id_is_not_found() {
    let (shell, output) = run_script(
        "1\nPrinter jam\nalice\n\n4\n99999999999999999999\n3\n99999999999999999999\n5\n",
    );

    assert_eq!(output.matches("Ticket ID: Ticket not found.\n\n").count(), 2);
    assert!(!output.contains("Invalid ID."));
    let ticket = shell.store().find_by_id(1).expect("ticket #1");
    assert_eq!(ticket.updates().len(), 1);
}

#[test]
fn test_view_ticket_detail() {
    let (shell, output) = run_script("1\nPrinter jam\nalice\nlow\n3\n1\nin progress\n\n4\n1\n5\n");

    let ticket = shell.store().find_by_id(1).expect("ticket #1");
    let mut expected = format!(
        "\n--- Ticket #1 ---\nTitle: Printer jam\nRequester: alice\nPriority: Low\nStatus: In Progress\nCreated: {}\nUpdates:\n",
        ticket.created_at()
    );
    for update in ticket.updates() {
        expected.push_str(&format!("- {}: {}\n", update.timestamp, update.note));
    }
    expected.push('\n');

    assert!(output.contains(&expected));
    assert_eq!(
        notes(ticket),
        vec!["Ticket created.", "Status changed to In Progress."]
    );
}

#[test]
fn test_invalid_menu_choice_returns_to_menu() {
    let (shell, output) = run_script("9\n5\n");

    assert_eq!(output, format!("{MENU}Invalid choice.\n\n{MENU}"));
    assert!(shell.store().is_empty());
}

#[test]
fn test_ids_follow_creation_order() {
    let (shell, output) = run_script("1\na\nr\n\n1\nb\nr\n\n1\nc\nr\n\n5\n");

    assert!(output.contains("Created ticket #3"));
    let ids: Vec<u64> = shell.store().all().iter().map(Ticket::id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_input_ending_mid_create_adds_nothing() {
    let (shell, _) = run_script("1\nPrinter jam\n");
    assert!(shell.store().is_empty());
}

#[test]
fn test_windows_line_endings_are_accepted() {
    let (shell, _) = run_script("1\r\nPrinter jam\r\nalice\r\nhigh\r\n5\r\n");

    let ticket = shell.store().find_by_id(1).expect("ticket #1");
    assert_eq!(ticket.title(), "Printer jam");
    assert_eq!(ticket.priority(), "High");
}

#[test]
fn test_json_view_output() {
    let (_, output) = run_script_with("1\nPrinter jam\nalice\n\n4\n1\n5\n", OutputFormat::Json);

    assert!(output.contains("\"title\": \"Printer jam\""));
    assert!(output.contains("\"note\": \"Ticket created.\""));
}
