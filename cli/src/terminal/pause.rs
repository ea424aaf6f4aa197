use std::io::{self, IsTerminal};

use colored::*;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::terminal::print;

/// Blocks until a key is pressed. Returns at once when stdin is not a terminal.
pub fn wait_for_key() -> anyhow::Result<()> {
    if !io::stdin().is_terminal() {
        return Ok(());
    }

    print::print(&format!("{}", "Press any key to close...".dimmed()));

    enable_raw_mode()?;
    let pressed = loop {
        match event::read() {
            Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    let _ = disable_raw_mode();

    Ok(pressed?)
}
