//! Background jobs
//!
//! Analysis and list updates run off the UI loop so the interface stays
//! responsive; each job reports one [`JobOutcome`] over a channel.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::analyzer::{self, AnalysisError, AnalysisResult};
use crate::handlers::{ping, HandlerError};
use crate::store::{AddOutcome, ListKind, Store, StoreError};

/// Result of a finished background job
#[derive(Debug)]
pub enum JobOutcome {
    /// Text was analysed; `recorded` says whether it made it into history
    Analyzed {
        result: AnalysisResult,
        recorded: Result<AddOutcome, StoreError>,
    },
    /// Analysis refused the input
    Rejected(AnalysisError),
    Favorited {
        text: String,
        outcome: Result<AddOutcome, StoreError>,
    },
    Pinged {
        host: String,
        outcome: Result<Duration, HandlerError>,
    },
}

/// Spawns jobs against a shared store
#[derive(Clone)]
pub struct Worker {
    store: Arc<Store>,
    tx: mpsc::UnboundedSender<JobOutcome>,
}

impl Worker {
    pub fn new(store: Arc<Store>, tx: mpsc::UnboundedSender<JobOutcome>) -> Self {
        Self { store, tx }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Analyse `text` and record it in history
    pub fn spawn_analysis(&self, text: String) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();

        tokio::task::spawn_blocking(move || {
            let outcome = match analyzer::analyze(&text) {
                Ok(result) => {
                    let recorded = store.add(ListKind::History, &text);
                    if let Err(e) = &recorded {
                        log::error!("Error saving history: {}", e);
                    }
                    JobOutcome::Analyzed { result, recorded }
                }
                Err(e) => JobOutcome::Rejected(e),
            };
            Self::report(&tx, outcome);
        })
    }

    /// Add `text` to favorites
    pub fn spawn_favorite(&self, text: String) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();

        tokio::task::spawn_blocking(move || {
            let outcome = store.add(ListKind::Favorites, &text);
            if let Err(e) = &outcome {
                log::error!("Error saving favorites: {}", e);
            }
            Self::report(&tx, JobOutcome::Favorited { text, outcome });
        })
    }

    /// Time a DNS lookup of `host`
    pub fn spawn_ping(&self, host: String) -> JoinHandle<()> {
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let outcome = ping::resolve_timed(&host).await;
            Self::report(&tx, JobOutcome::Pinged { host, outcome });
        })
    }

    fn report(tx: &mpsc::UnboundedSender<JobOutcome>, outcome: JobOutcome) {
        if tx.send(outcome).is_err() {
            log::debug!("Job finished after the UI loop stopped listening");
        }
    }
}
