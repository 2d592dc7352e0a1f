//! Utility functions
//!
//! Formatting helpers, logging setup and clock helpers shared by the UI

mod format;
mod logging;

pub use format::*;
pub use logging::*;

use chrono::Local;

/// Get the current time as a formatted string
pub fn current_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Get current date and time as a formatted string
pub fn current_datetime() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
