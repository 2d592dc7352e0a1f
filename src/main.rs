//! Text Analyzer - Main entry point
//!
//! This is the main entry point for the Text Analyzer application.
//! It initializes the application and runs the main event loop.

use anyhow::Result;
use std::sync::Arc;
use text_analyzer::app::Worker;
use text_analyzer::config::get_config;
use text_analyzer::{App, Store, Tui, cleanup, init};
use tokio::sync::mpsc;

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize application
    if let Err(e) = init() {
        eprintln!("Failed to initialize application: {}", e);
        return Err(e);
    }

    log::info!("Application started");

    let config = get_config();
    let data_dir = config.data_dir();
    log::info!("Keeping history and favorites in {}", data_dir.display());
    let store = Arc::new(Store::open(&data_dir, config.list_capacity));

    // Background jobs report back over this channel
    let (job_tx, mut job_rx) = mpsc::unbounded_channel();
    let mut app = App::new(&config, Worker::new(store, job_tx));

    let mut tui = Tui::new(config.tick_rate_ms)?;

    while app.running {
        tui.draw(|f| text_analyzer::ui::render(f, &mut app))?;

        tokio::select! {
            event = tui.next_event() => {
                match event {
                    Ok(event) => app.handle_event(event),
                    Err(e) => {
                        log::error!("Error handling events: {}", e);
                        app.running = false;
                    }
                }
            },

            Some(outcome) = job_rx.recv() => {
                app.apply_outcome(outcome);
            },
        }
    }

    log::info!("Application exiting normally");

    // Exit the terminal interface
    tui.exit()?;

    // Clean up resources
    cleanup()?;

    Ok(())
}
