//! Text formatting utilities
//!
//! This module provides functions for formatting text and values

use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to `max_width` terminal columns, adding an ellipsis if truncated
pub fn truncate_string(input: &str, max_width: usize) -> String {
    if input.width() <= max_width {
        return input.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut width = 0;
    let mut truncated = String::new();
    for c in input.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > budget {
            break;
        }
        width += char_width;
        truncated.push(c);
    }
    truncated.push_str("...");
    truncated
}

/// Format a duration in seconds to a human-readable string
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Format a resolution time the way the ping panel shows it
pub fn format_ping(elapsed: Duration) -> String {
    format!("Ping: {} ms", elapsed.as_millis())
}

/// Format a number with commas as thousands separators
pub fn format_number(num: usize) -> String {
    let mut result = String::new();
    let num_str = num.to_string();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        result.push(c);
        if (len - i - 1) % 3 == 0 && i < len - 1 {
            result.push(',');
        }
    }

    result
}
