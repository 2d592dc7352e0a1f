//! Application command handler
//!
//! This module parses the built-in slash commands
//! like help, clear, theme, etc. Executing them is up to the app.

use crate::config::{AppConfig, ThemeKind};
use crate::handlers::{HandlerError, HandlerResult};
use crate::store::ListKind;

/// A parsed slash command
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Show help, optionally for one topic
    Help(Option<String>),
    /// Clear the conversion and analysis panels
    ClearOutput,
    /// Switch theme, or toggle when no theme is given
    Theme(Option<ThemeKind>),
    /// Ping a host, or the first word of the current input
    Ping(Option<String>),
    /// Add the current input to favorites
    Favorite,
    /// Clear a stored list (after confirmation)
    ClearList(ListKind),
    /// Turn auto refresh on/off, or toggle
    AutoRefresh(Option<bool>),
    Config,
    Version,
    Quit,
}

/// Command handler for application commands
pub struct CommandHandler;

impl CommandHandler {
    /// Parse an application command (without its leading `/`)
    pub fn parse(command: &str) -> HandlerResult<AppCommand> {
        // Split command and arguments
        let parts: Vec<&str> = command.split_whitespace().collect();
        let cmd = match parts.first() {
            Some(cmd) => cmd.to_lowercase(),
            None => return Err(HandlerError::Parse("Empty command".to_string())),
        };

        let args = &parts[1..];

        match cmd.as_str() {
            "help" | "?" => Ok(AppCommand::Help(args.first().map(|s| s.to_lowercase()))),
            "clear" => Ok(AppCommand::ClearOutput),
            "theme" => match args.first() {
                Some(name) => name
                    .parse::<ThemeKind>()
                    .map(|theme| AppCommand::Theme(Some(theme)))
                    .map_err(|_| HandlerError::Parse(format!("Unknown theme: {}", name))),
                None => Ok(AppCommand::Theme(None)),
            },
            "ping" => Ok(AppCommand::Ping(args.first().map(|s| s.to_string()))),
            "fav" | "favorite" => Ok(AppCommand::Favorite),
            "clear-history" => Ok(AppCommand::ClearList(ListKind::History)),
            "clear-favorites" => Ok(AppCommand::ClearList(ListKind::Favorites)),
            "refresh" => match args.first().map(|s| s.to_lowercase()) {
                None => Ok(AppCommand::AutoRefresh(None)),
                Some(value) => match value.as_str() {
                    "on" => Ok(AppCommand::AutoRefresh(Some(true))),
                    "off" => Ok(AppCommand::AutoRefresh(Some(false))),
                    _ => Err(HandlerError::Parse(format!(
                        "Expected 'on' or 'off', got '{}'",
                        value
                    ))),
                },
            },
            "config" => Ok(AppCommand::Config),
            "version" | "about" => Ok(AppCommand::Version),
            "exit" | "quit" => Ok(AppCommand::Quit),
            _ => Err(HandlerError::Parse(format!(
                "Unknown command '{}'. Type '/help' for commands.",
                cmd
            ))),
        }
    }

    /// Help text, general or for one topic
    pub fn help(topic: Option<&str>) -> HandlerResult<String> {
        let Some(topic) = topic else {
            return Ok(GENERAL_HELP.to_string());
        };

        let help_topics = [
            (
                "analysis",
                "📚 Analysis Help:\n\
                Type any text and press Enter.\n\
                Conversions: lower, upper, title case, reversed.\n\
                Counts: letters (all characters), words, sentences,\n\
                vowels (a, e, i, o, u) and consonants.\n\
                Every analysed text is added to the search history.",
            ),
            (
                "lists",
                "📚 History & Favorites Help:\n\
                Both lists keep the 10 most recent unique entries.\n\
                Tab moves focus to a list, Up/Down selects,\n\
                Enter loads the entry into the input.\n\
                Ctrl+X (or /clear-history, /clear-favorites) clears a list.",
            ),
            (
                "ping",
                "📚 Ping Help:\n\
                Ctrl+P or /ping times a DNS lookup of the first word\n\
                of the input. /ping HOST pings HOST instead.",
            ),
            (
                "theme",
                "📚 Theme Help:\n\
                Ctrl+T or /theme toggles between light and dark.\n\
                /theme light and /theme dark pick one.\n\
                Palettes are set in config.yaml.",
            ),
        ];

        help_topics
            .iter()
            .find(|(name, _)| *name == topic)
            .map(|(_, text)| text.to_string())
            .ok_or_else(|| {
                HandlerError::Parse(format!(
                    "No help available for '{}'. Try '/help' for general help.",
                    topic
                ))
            })
    }

    /// Display version information
    pub fn version() -> String {
        format!(
            "Text Analyzer v{}\n\
            Text conversion and analysis tool with history and favorites.",
            env!("CARGO_PKG_VERSION")
        )
    }

    /// Display the current configuration
    pub fn describe_config(config: &AppConfig) -> String {
        format!(
            "📝 Current Configuration:\n\
            Theme: {}\n\
            Data Directory: {}\n\
            List Capacity: {}\n\
            Auto Refresh Interval: {}s\n\
            Logging Enabled: {}\n\
            Config Path: {}",
            config.theme,
            config.data_dir().display(),
            config.list_capacity,
            config.auto_refresh_secs,
            config.logging_enabled,
            crate::config::get_config_file().display()
        )
    }
}

const GENERAL_HELP: &str = "📚 Text Analyzer Help:

Type text and press Enter to analyse it.
Lines starting with / are commands; start with // to analyse a leading /.

Available commands:
  /help [topic]      - Show help (topics: analysis, lists, ping, theme)
  /clear             - Clear the output panels
  /theme [name]      - Toggle theme or pick light/dark
  /ping [host]       - Time a DNS lookup
  /fav               - Add the input to favorites
  /clear-history     - Clear the search history
  /clear-favorites   - Clear favorites
  /refresh [on|off]  - Toggle auto refresh
  /config            - Show configuration
  /version           - Show version information
  /quit              - Exit application

Keyboard shortcuts:
  Enter   Analyse / load selected entry
  Tab     Cycle focus: input, history, favorites
  Ctrl+F  Add to favorites      Ctrl+Y  Copy conversions
  Ctrl+P  Ping first word       Ctrl+R  Toggle auto refresh
  Ctrl+T  Toggle theme          Ctrl+L  Clear output
  Ctrl+X  Clear focused list    F1      Help
  Esc     Close popup or clear input
  Ctrl+C  Quit";
