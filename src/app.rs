use chrono::{DateTime, Local};
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

use crate::analyzer::{AnalysisError, AnalysisResult};
use crate::config::{update_field, AppConfig, ThemeKind};
use crate::event::Event;
use crate::handlers::command::{AppCommand, CommandHandler};
use crate::handlers::{detect_mode, ping, CommandMode};
use crate::store::{AddOutcome, ListKind};
use crate::utils::format_ping;

mod worker;
pub use worker::{JobOutcome, Worker};

// Session statistics
pub struct SessionStats {
    pub start_time: DateTime<Local>,
    pub analyses: usize,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            start_time: Local::now(),
            analyses: 0,
        }
    }
}

/// Panel receiving key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    History,
    Favorites,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::History,
            Focus::History => Focus::Favorites,
            Focus::Favorites => Focus::Input,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Input => Focus::Favorites,
            Focus::History => Focus::Input,
            Focus::Favorites => Focus::History,
        }
    }

    /// The list this panel shows, if it is one
    pub fn list(self) -> Option<ListKind> {
        match self {
            Focus::Input => None,
            Focus::History => Some(ListKind::History),
            Focus::Favorites => Some(ListKind::Favorites),
        }
    }
}

/// Popup drawn over the main screen
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    None,
    Message { title: String, body: String },
    /// Waiting for y/n before clearing a list
    Confirm(ListKind),
}

// Main application state
pub struct App {
    pub running: bool,
    pub input: String,
    pub cursor_position: usize, // Byte offset into input, always on a char boundary
    pub result: Option<AnalysisResult>,
    pub history: Vec<String>,
    pub favorites: Vec<String>,
    pub history_state: ListState,
    pub favorites_state: ListState,
    pub focus: Focus,
    pub overlay: Overlay,
    pub status: String,
    pub ping_display: String,
    pub processing: bool,
    pub theme: ThemeKind,
    pub auto_refresh: bool,
    pub stats: SessionStats,
    refresh_interval: Duration,
    last_refresh: Instant,
    // Whether settings changes are written back to the config file
    save_settings: bool,
    worker: Worker,
}

impl App {
    pub fn new(config: &AppConfig, worker: Worker) -> Self {
        let mut app = Self {
            running: true,
            input: String::new(),
            cursor_position: 0,
            result: None,
            history: Vec::new(),
            favorites: Vec::new(),
            history_state: ListState::default(),
            favorites_state: ListState::default(),
            focus: Focus::Input,
            overlay: Overlay::None,
            status: "Ready".to_string(),
            ping_display: "Ping: N/A".to_string(),
            processing: false,
            theme: config.theme,
            auto_refresh: false,
            stats: SessionStats::default(),
            refresh_interval: Duration::from_secs(config.auto_refresh_secs.max(1)),
            last_refresh: Instant::now(),
            save_settings: true,
            worker,
        };
        app.reload(ListKind::History);
        app.reload(ListKind::Favorites);
        app
    }

    /// Keep settings changes such as the theme in memory only
    pub fn without_saving_settings(mut self) -> Self {
        self.save_settings = false;
        self
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
    }

    fn show_message(&mut self, title: &str, body: impl Into<String>) {
        self.overlay = Overlay::Message {
            title: title.to_string(),
            body: body.into(),
        };
    }

    pub fn entries(&self, kind: ListKind) -> &[String] {
        match kind {
            ListKind::History => &self.history,
            ListKind::Favorites => &self.favorites,
        }
    }

    fn list_state_mut(&mut self, kind: ListKind) -> &mut ListState {
        match kind {
            ListKind::History => &mut self.history_state,
            ListKind::Favorites => &mut self.favorites_state,
        }
    }

    /// Re-read a list from storage and keep the selection in range
    pub fn reload(&mut self, kind: ListKind) {
        let entries = self.worker.store().get(kind);
        let len = entries.len();
        match kind {
            ListKind::History => self.history = entries,
            ListKind::Favorites => self.favorites = entries,
        }

        let state = self.list_state_mut(kind);
        let selected = match (state.selected(), len) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        state.select(selected);
    }

    /// Trimmed input the favorite and ping actions work on
    fn subject(&self) -> Option<String> {
        let (mode, text) = detect_mode(&self.input);
        let text = text.trim();
        (mode == CommandMode::Analyze && !text.is_empty()).then(|| text.to_string())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Tick => self.on_tick(),
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) => {
                if self.overlay == Overlay::None {
                    self.focus = Focus::Input;
                    self.insert_str(&text.replace(['\r', '\n'], " "));
                }
            }
            Event::Resize(_, _) => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.overlay.clone() {
            Overlay::Confirm(kind) => {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => {
                        self.overlay = Overlay::None;
                        self.clear_list(kind);
                    }
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                        self.overlay = Overlay::None;
                        self.set_status("Ready");
                    }
                    _ => {}
                }
                return;
            }
            Overlay::Message { .. } => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('q')) {
                    self.overlay = Overlay::None;
                }
                return;
            }
            Overlay::None => {}
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.running = false,
            KeyCode::Char('f') if ctrl => self.add_favorite(),
            KeyCode::Char('y') if ctrl => self.copy_conversions(),
            KeyCode::Char('t') if ctrl => self.set_theme(None),
            KeyCode::Char('l') if ctrl => self.clear_output(),
            KeyCode::Char('p') if ctrl => self.ping(None),
            KeyCode::Char('r') if ctrl => self.set_auto_refresh(None),
            KeyCode::Char('x') if ctrl => match self.focus.list() {
                Some(kind) => self.overlay = Overlay::Confirm(kind),
                None => self.set_status("Press Tab to select the list to clear"),
            },
            KeyCode::F(1) => self.run_command(AppCommand::Help(None)),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Esc => {
                self.input.clear();
                self.cursor_position = 0;
                self.focus = Focus::Input;
            }
            _ => match self.focus.list() {
                Some(kind) => self.handle_list_key(kind, key),
                None => self.handle_input_key(key),
            },
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) if plain => self.insert_char(c),
            KeyCode::Backspace => {
                if let Some(c) = self.input[..self.cursor_position].chars().next_back() {
                    self.cursor_position -= c.len_utf8();
                    self.input.remove(self.cursor_position);
                }
            }
            KeyCode::Delete => {
                if self.cursor_position < self.input.len() {
                    self.input.remove(self.cursor_position);
                }
            }
            KeyCode::Left => {
                if let Some(c) = self.input[..self.cursor_position].chars().next_back() {
                    self.cursor_position -= c.len_utf8();
                }
            }
            KeyCode::Right => {
                if let Some(c) = self.input[self.cursor_position..].chars().next() {
                    self.cursor_position += c.len_utf8();
                }
            }
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.len(),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, kind: ListKind, key: KeyEvent) {
        let len = self.entries(kind).len();
        if len == 0 {
            return;
        }

        let state = self.list_state_mut(kind);
        let current = state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Up => state.select(Some(current.saturating_sub(1))),
            KeyCode::Down => state.select(Some((current + 1).min(len - 1))),
            KeyCode::Home => state.select(Some(0)),
            KeyCode::End => state.select(Some(len - 1)),
            KeyCode::Enter => self.load_entry(kind, current),
            _ => {}
        }
    }

    /// Put a stored entry back into the input
    pub fn load_entry(&mut self, kind: ListKind, index: usize) {
        if let Some(text) = self.entries(kind).get(index).cloned() {
            self.input = text;
            self.cursor_position = self.input.len();
            self.focus = Focus::Input;
            self.set_status(format!("Loaded from {}", kind));
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    pub fn insert_str(&mut self, text: &str) {
        self.input.insert_str(self.cursor_position, text);
        self.cursor_position += text.len();
    }

    /// Handle Enter in the input: run a command or analyse the text
    pub fn submit(&mut self) {
        let (mode, payload) = detect_mode(&self.input);
        match mode {
            CommandMode::Command => {
                self.input.clear();
                self.cursor_position = 0;
                match CommandHandler::parse(&payload) {
                    Ok(command) => self.run_command(command),
                    Err(e) => self.set_status(format!("⚠️ {}", e)),
                }
            }
            CommandMode::Analyze => {
                if payload.is_empty() {
                    self.show_message("Input Error", AnalysisError::EmptyInput.to_string());
                    return;
                }
                self.process_text(payload);
            }
        }
    }

    /// Start analysing `text` in the background
    pub fn process_text(&mut self, text: String) {
        self.processing = true;
        self.last_refresh = Instant::now();
        self.set_status("Processing text...");
        log::debug!("Analysing {} characters", text.chars().count());
        self.worker.spawn_analysis(text);
    }

    pub fn run_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::Help(topic) => match CommandHandler::help(topic.as_deref()) {
                Ok(text) => self.show_message("Help", text),
                Err(e) => self.set_status(format!("⚠️ {}", e)),
            },
            AppCommand::ClearOutput => self.clear_output(),
            AppCommand::Theme(theme) => self.set_theme(theme),
            AppCommand::Ping(host) => self.ping(host),
            AppCommand::Favorite => self.add_favorite(),
            AppCommand::ClearList(kind) => self.overlay = Overlay::Confirm(kind),
            AppCommand::AutoRefresh(enabled) => self.set_auto_refresh(enabled),
            AppCommand::Config => {
                let config = crate::config::get_config();
                self.show_message("Configuration", CommandHandler::describe_config(&config));
            }
            AppCommand::Version => self.show_message("About", CommandHandler::version()),
            AppCommand::Quit => self.running = false,
        }
    }

    pub fn add_favorite(&mut self) {
        match self.subject() {
            Some(text) => {
                self.worker.spawn_favorite(text);
            }
            None => self.show_message("Input Error", "Enter text to add as favorite."),
        }
    }

    /// Ping `host`, or the first word of the current text
    pub fn ping(&mut self, host: Option<String>) {
        let host = host.or_else(|| {
            self.subject()
                .and_then(|text| ping::ping_target(&text).map(String::from))
        });

        match host {
            Some(host) => {
                self.set_status(format!("Pinging {}...", host));
                self.worker.spawn_ping(host);
            }
            None => self.show_message(
                "Input Error",
                "Enter text to ping (using first word as domain).",
            ),
        }
    }

    pub fn copy_conversions(&mut self) {
        let Some(result) = &self.result else {
            self.set_status("Nothing to copy yet");
            return;
        };
        let report = result.conversions_report();

        let copied = ClipboardContext::new().and_then(|mut ctx| ctx.set_contents(report));
        match copied {
            Ok(()) => self.set_status("Conversion data copied to clipboard"),
            Err(e) => {
                log::warn!("Clipboard copy failed: {}", e);
                self.set_status(format!("⚠️ Failed to copy to clipboard: {}", e));
            }
        }
    }

    pub fn clear_output(&mut self) {
        self.result = None;
        self.set_status("Output cleared");
    }

    /// Switch to `theme`, or to the other theme, and remember the choice
    pub fn set_theme(&mut self, theme: Option<ThemeKind>) {
        self.theme = theme.unwrap_or_else(|| self.theme.toggled());
        let chosen = self.theme;
        if self.save_settings {
            if let Err(e) = update_field(|config| config.theme = chosen) {
                log::warn!("Could not save theme: {}", e);
            }
        }
        self.set_status(format!("{} theme enabled", chosen));
    }

    pub fn set_auto_refresh(&mut self, enabled: Option<bool>) {
        self.auto_refresh = enabled.unwrap_or(!self.auto_refresh);
        self.last_refresh = Instant::now();
        self.set_status(if self.auto_refresh {
            "Auto refresh enabled"
        } else {
            "Auto refresh disabled"
        });
    }

    /// Clear a list; the caller has already asked for confirmation
    pub fn clear_list(&mut self, kind: ListKind) {
        match self.worker.store().clear(kind) {
            Ok(()) => {
                self.reload(kind);
                self.set_status(match kind {
                    ListKind::History => "History cleared",
                    ListKind::Favorites => "Favorites cleared",
                });
            }
            Err(e) => {
                log::error!("{}", e);
                self.set_status(format!("⚠️ {}", e));
            }
        }
    }

    /// Re-run analysis when auto refresh is due
    pub fn on_tick(&mut self) {
        if !self.auto_refresh || self.processing || self.last_refresh.elapsed() < self.refresh_interval {
            return;
        }
        self.last_refresh = Instant::now();

        let (mode, text) = detect_mode(&self.input);
        if mode == CommandMode::Analyze && !text.is_empty() {
            self.process_text(text);
        }
    }

    /// Fold a finished background job into the UI state
    pub fn apply_outcome(&mut self, outcome: JobOutcome) {
        match outcome {
            JobOutcome::Analyzed { result, recorded } => {
                self.processing = false;
                self.stats.analyses += 1;
                self.result = Some(result);
                match recorded {
                    Ok(_) => self.set_status("Text processed successfully"),
                    Err(e) => self.set_status(format!("Text processed, but history was not saved: {}", e)),
                }
                self.reload(ListKind::History);
            }
            JobOutcome::Rejected(e) => {
                self.processing = false;
                self.show_message("Input Error", e.to_string());
                self.set_status("Ready");
            }
            JobOutcome::Favorited { text, outcome } => match outcome {
                Ok(AddOutcome::Added) => {
                    log::info!("Added favorite: {}", text);
                    self.reload(ListKind::Favorites);
                    self.set_status("Added to favorites");
                }
                Ok(AddOutcome::AlreadyPresent) => self.set_status("Already in favorites"),
                Err(e) => self.set_status(format!("⚠️ {}", e)),
            },
            JobOutcome::Pinged { host, outcome } => match outcome {
                Ok(elapsed) => {
                    self.ping_display = format_ping(elapsed);
                    self.set_status("Ping successful");
                }
                Err(e) => {
                    log::warn!("Ping of {} failed: {}", host, e);
                    self.ping_display = "Ping: Error".to_string();
                    self.show_message("Ping Error", format!("Error: {}", e));
                }
            },
        }
    }
}
