//! Text Analyzer - A TUI application for converting and analysing text
//!
//! Type a line of text and get its lower, upper, title case and reversed
//! forms alongside letter, word, sentence, vowel and consonant counts. The
//! last ten analysed texts and up to ten favorites are kept on disk.
//!
//! # Architecture
//!
//! The application is organized into several key modules:
//! - `analyzer` - Pure text conversions and counts
//! - `store` - File-backed history and favorites lists
//! - `app` - Application state, key handling and background jobs
//! - `config` - Configuration management
//! - `event` - Terminal event reading
//! - `handlers` - Slash commands and ping
//! - `tui` - Terminal setup and teardown
//! - `ui` - UI rendering
//! - `utils` - Formatting and logging helpers

pub mod analyzer;
pub mod app;
pub mod config;
pub mod event;
pub mod handlers;
pub mod store;
pub mod tui;
pub mod ui;
pub mod utils;

/// Re-export primary types for convenience
pub use analyzer::{analyze, AnalysisError, AnalysisResult};
pub use app::App;
pub use config::AppConfig;
pub use event::Event;
pub use store::{AddOutcome, ListKind, RecentList, Store, StoreError};
pub use tui::Tui;

/// Initialize the application
pub fn init() -> anyhow::Result<()> {
    // Initialize configuration
    config::init_config()?;

    // Initialize logging
    utils::init_logging()?;

    Ok(())
}

/// Clean up application resources
pub fn cleanup() -> anyhow::Result<()> {
    // Close logging
    utils::close_logging()?;

    Ok(())
}
