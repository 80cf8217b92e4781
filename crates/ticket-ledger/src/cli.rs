//! The interactive menu: issue, verify, list, validate.
//!
//! The menu reads from any [`BufRead`] and writes to any [`Write`], and works
//! on a ledger it is handed, so a whole session can be scripted in tests.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use tracing::{debug, info};

use ticket_ledger_core::{Block, Clock, Ledger, TicketIdSource};

use crate::display::{format_ticket, format_verified, format_violations};
use crate::error::Result;

/// A menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Issue,
    Verify,
    ShowAll,
    Validate,
    Exit,
    Invalid(String),
}

impl Choice {
    /// Parse a menu line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "1" => Choice::Issue,
            "2" => Choice::Verify,
            "3" => Choice::ShowAll,
            "4" => Choice::Validate,
            "5" => Choice::Exit,
            other => Choice::Invalid(other.to_string()),
        }
    }
}

const MENU: &str = "\n🎟️ Blockchain Ticketing System 🎟️\n\
1. Issue New Ticket\n\
2. Verify Ticket\n\
3. Show All Issued Tickets\n\
4. Validate Blockchain Integrity\n\
5. Exit\n";

/// Interactive session over an input and an output stream.
pub struct Menu<R, W> {
    input: R,
    output: W,
    json_listing: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a session with text listings.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            json_listing: false,
        }
    }

    /// Print the ticket listing as JSON instead of text.
    pub fn json_listing(mut self, enabled: bool) -> Self {
        self.json_listing = enabled;
        self
    }

    /// Give back the output stream (for inspecting scripted sessions).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends.
    pub fn run<C: Clock, G: TicketIdSource>(&mut self, ledger: &mut Ledger<C, G>) -> Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                debug!("input closed, leaving menu");
                writeln!(self.output)?;
                break;
            };

            match Choice::parse(&line) {
                Choice::Issue => {
                    if !self.issue(ledger)? {
                        break;
                    }
                }
                Choice::Verify => {
                    if !self.verify(ledger)? {
                        break;
                    }
                }
                Choice::ShowAll => self.show_all(ledger)?,
                Choice::Validate => self.validate(ledger)?,
                Choice::Exit => {
                    writeln!(self.output, "👋 Exiting...")?;
                    break;
                }
                Choice::Invalid(_) => writeln!(self.output, "❗ Invalid option. Try again.")?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Returns `false` when input ended mid-prompt.
    fn issue<C: Clock, G: TicketIdSource>(&mut self, ledger: &mut Ledger<C, G>) -> Result<bool> {
        let Some(buyer) = self.prompt("Enter buyer name: ")? else {
            return Ok(false);
        };
        let Some(event) = self.prompt("Enter event name: ")? else {
            return Ok(false);
        };

        let ticket_id = ledger.issue(&buyer, &event);
        info!(ticket_id = %ticket_id, "ticket issued from menu");
        writeln!(self.output, "✅ Ticket issued successfully! Ticket ID: {ticket_id}")?;
        Ok(true)
    }

    /// Returns `false` when input ended mid-prompt.
    fn verify<C: Clock, G: TicketIdSource>(&mut self, ledger: &Ledger<C, G>) -> Result<bool> {
        let Some(ticket_id) = self.prompt("Enter ticket ID to verify: ")? else {
            return Ok(false);
        };

        match ledger.find(ticket_id.trim()).filter(|block| !block.is_genesis()) {
            Some(block) => {
                writeln!(self.output, "✅ Ticket is VALID!")?;
                writeln!(self.output, "{}", format_verified(block))?;
            }
            None => writeln!(self.output, "❌ Ticket is INVALID or not found.")?,
        }
        Ok(true)
    }

    fn show_all<C: Clock, G: TicketIdSource>(&mut self, ledger: &Ledger<C, G>) -> Result<()> {
        if self.json_listing {
            let tickets: Vec<&Block> = ledger.list_all().collect();
            serde_json::to_writer_pretty(&mut self.output, &tickets)?;
            writeln!(self.output)?;
            return Ok(());
        }

        for block in ledger.list_all() {
            write!(self.output, "{}", format_ticket(block))?;
        }
        Ok(())
    }

    fn validate<C: Clock, G: TicketIdSource>(&mut self, ledger: &Ledger<C, G>) -> Result<()> {
        if ledger.validate() {
            writeln!(self.output, "✅ Blockchain is valid. No tampering detected.")?;
        } else {
            writeln!(self.output, "❌ Blockchain integrity failed. Tampering detected!")?;
            write!(self.output, "{}", format_violations(&ledger.audit()))?;
        }
        Ok(())
    }

    /// Write a prompt and read one line without its line ending.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD. Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        if let Cow::Owned(_) = line {
            debug!("replaced invalid UTF-8 in input line");
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::parse("1"), Choice::Issue);
        assert_eq!(Choice::parse(" 2 \n"), Choice::Verify);
        assert_eq!(Choice::parse("3"), Choice::ShowAll);
        assert_eq!(Choice::parse("4"), Choice::Validate);
        assert_eq!(Choice::parse("5"), Choice::Exit);
        assert_eq!(Choice::parse("six"), Choice::Invalid("six".into()));
        assert_eq!(Choice::parse(""), Choice::Invalid(String::new()));
    }

    #[test]
    fn test_prompt_strips_line_ending_only() {
        let mut menu = Menu::new("  Alice Smith \r\n".as_bytes(), Vec::new());
        let line = menu.prompt("> ").unwrap();
        assert_eq!(line.as_deref(), Some("  Alice Smith "));
        assert_eq!(menu.prompt("> ").unwrap(), None);
        assert_eq!(String::from_utf8(menu.into_output()).unwrap(), "> > ");
    }

    #[test]
    fn test_prompt_replaces_invalid_utf8() {
        let mut menu = Menu::new(&b"Bob\xff\n"[..], Vec::new());
        assert_eq!(menu.prompt("> ").unwrap().as_deref(), Some("Bob\u{fffd}"));
        assert_eq!(menu.prompt("> ").unwrap(), None);
    }

    #[test]
    fn test_exit_immediately() {
        let mut ledger = Ledger::new();
        let mut menu = Menu::new("5\n".as_bytes(), Vec::new());
        menu.run(&mut ledger).unwrap();

        let out = String::from_utf8(menu.into_output()).unwrap();
        assert!(out.contains("1. Issue New Ticket"));
        assert!(out.ends_with("👋 Exiting...\n"));
        assert_eq!(ledger.ticket_count(), 0);
    }

    #[test]
    fn test_genesis_is_not_a_valid_ticket() {
        let mut ledger = Ledger::new();
        let mut menu = Menu::new("2\nGENESIS\n5\n".as_bytes(), Vec::new());
        menu.run(&mut ledger).unwrap();

        let out = String::from_utf8(menu.into_output()).unwrap();
        assert!(out.contains("❌ Ticket is INVALID or not found."));
    }
}
