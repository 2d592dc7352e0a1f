use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, stdout};

use crate::event::{Event, EventHandler};

pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    events: EventHandler,
    active: bool,
}

impl Tui {
    pub fn new(tick_rate: u64) -> io::Result<Self> {
        enable_raw_mode()?;
        crossterm::execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste, cursor::Hide)?;

        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        let events = EventHandler::new(tick_rate);

        Ok(Self {
            terminal,
            events,
            active: true,
        })
    }

    /// Wait for the next terminal event
    pub async fn next_event(&mut self) -> Result<Event> {
        self.events.next().await
    }

    pub fn exit(&mut self) -> Result<()> {
        if self.active {
            disable_raw_mode()?;
            crossterm::execute!(
                io::stdout(),
                LeaveAlternateScreen,
                DisableBracketedPaste,
                cursor::Show
            )?;
            self.active = false;
        }
        Ok(())
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Restore the terminal even when the main loop bailed out early
        if let Err(e) = self.exit() {
            eprintln!("Failed to restore terminal: {}", e);
        }
    }
}
