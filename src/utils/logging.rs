//! Logging utilities
//!
//! Log records go to a file under the config directory through
//! `simplelog`; the terminal itself is owned by the UI.

use crate::config::get_config;
use crate::utils::current_datetime;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::io;

/// Initialize logging based on configuration
pub fn init_logging() -> io::Result<()> {
    let config = get_config();

    if !config.logging_enabled {
        return Ok(());
    }

    // Get log file path
    let log_path = match &config.log_file {
        Some(path) => {
            let config_dir = crate::config::get_config_dir();
            config_dir.join(path)
        }
        None => return Ok(()), // No logging if path not specified
    };

    // Create parent directory if it doesn't exist
    if let Some(parent) = log_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let logger_config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .build();

    WriteLogger::init(parse_level(&config.log_level), logger_config, file)
        .map_err(io::Error::other)?;

    log::info!("Logging started at {}", current_datetime());

    Ok(())
}

/// Map a configured level name to a filter, falling back to `Info`
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Flush and stop logging
pub fn close_logging() -> io::Result<()> {
    if get_config().logging_enabled {
        log::info!("Logging stopped at {}", current_datetime());
        log::logger().flush();
    }

    Ok(())
}
