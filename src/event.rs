use anyhow::{Result, anyhow};
use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

pub use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum Event {
    Tick,
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
}

/// Reads terminal events on a dedicated thread and forwards them to the
/// async main loop
pub struct EventHandler {
    receiver: mpsc::UnboundedReceiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate);
        let (sender, receiver) = mpsc::unbounded_channel();
        let handler = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or_else(|| Duration::from_secs(0));

                let ready = match event::poll(timeout) {
                    Ok(ready) => ready,
                    Err(err) => {
                        log::error!("Failed to poll terminal events: {}", err);
                        break;
                    }
                };

                if ready {
                    let forwarded = match event::read() {
                        // Windows reports releases too; only presses edit the input
                        Ok(CrosstermEvent::Key(e)) if e.kind == KeyEventKind::Press => {
                            Some(Event::Key(e))
                        }
                        Ok(CrosstermEvent::Paste(text)) => Some(Event::Paste(text)),
                        Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                        Ok(_) => None,
                        Err(err) => {
                            log::error!("Unable to read terminal event: {}", err);
                            break;
                        }
                    };

                    if let Some(event) = forwarded {
                        if sender.send(event).is_err() {
                            // Receiver dropped, the app is shutting down
                            break;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver, handler }
    }

    /// Wait for the next event. Cancel safe, so it can sit in `select!`.
    pub async fn next(&mut self) -> Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_else(|| anyhow!("Terminal event reader stopped"))
    }
}
