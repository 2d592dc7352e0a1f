//! Recent-list storage
//!
//! History and favorites are both small, most-recent-first lists of unique
//! strings. Each list lives in its own newline-delimited text file; a missing
//! file means an empty list. Every call re-reads the file, so the file is the
//! only source of truth.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

/// Default number of entries kept per list
pub const DEFAULT_CAPACITY: usize = 10;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the recent-list store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to save {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to delete {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Entries must be non-empty and fit on a single line
    #[error("cannot store {0:?}: entries must be a single non-empty line")]
    InvalidEntry(String),
}

/// The named lists kept by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ListKind {
    History,
    Favorites,
}

impl ListKind {
    /// File backing this list inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            ListKind::History => "history.txt",
            ListKind::Favorites => "favorites.txt",
        }
    }

    /// Heading shown above the list
    pub fn title(&self) -> &'static str {
        match self {
            ListKind::History => "Search History",
            ListKind::Favorites => "Favorites",
        }
    }
}

/// What [`RecentList::add`] did with an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Inserted at the front and saved
    Added,
    /// Already in the list; nothing changed
    AlreadyPresent,
}

/// A bounded, deduplicated, most-recent-first list backed by one file
#[derive(Debug)]
pub struct RecentList {
    path: PathBuf,
    capacity: usize,
    // Serialises read-modify-write cycles on this file
    guard: Mutex<()>,
}

impl RecentList {
    /// Create a list stored at `path` holding at most `capacity` entries
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity: capacity.max(1),
            guard: Mutex::new(()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read the list, reporting read failures
    pub fn try_load(&self) -> StoreResult<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.lines().map(String::from).collect()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Read the list; a missing or unreadable file yields an empty list
    pub fn load(&self) -> Vec<String> {
        self.try_load().unwrap_or_else(|e| {
            log::warn!("{}", e);
            Vec::new()
        })
    }

    /// Insert `text` at the front unless it is already present.
    ///
    /// Existing entries are not moved when re-added.
    pub fn add(&self, text: &str) -> StoreResult<AddOutcome> {
        if text.is_empty() || text.contains(['\n', '\r']) {
            return Err(StoreError::InvalidEntry(text.to_string()));
        }

        let _lock = self.guard.lock().unwrap_or_else(PoisonError::into_inner);

        // An unreadable file is left untouched rather than overwritten
        let mut entries = self.try_load()?;
        if entries.iter().any(|entry| entry == text) {
            return Ok(AddOutcome::AlreadyPresent);
        }

        entries.insert(0, text.to_string());
        entries.truncate(self.capacity);
        self.persist(&entries)?;

        log::debug!("Saved {} entries to {}", entries.len(), self.path.display());
        Ok(AddOutcome::Added)
    }

    /// Delete the backing file. Clearing an already empty list succeeds.
    pub fn clear(&self) -> StoreResult<()> {
        let _lock = self.guard.lock().unwrap_or_else(PoisonError::into_inner);

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Write entries to a sibling temp file, then rename it over the list file
    fn persist(&self, entries: &[String]) -> StoreResult<()> {
        let write_error = |source: io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(write_error)?;
            }
        }

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, entries.join("\n")).map_err(write_error)?;
        fs::rename(&tmp_path, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            write_error(source)
        })
    }
}

/// The history and favorites lists of one data directory
#[derive(Debug)]
pub struct Store {
    history: RecentList,
    favorites: RecentList,
}

impl Store {
    /// Open the lists kept in `dir`. Nothing is created until the first add.
    pub fn open(dir: impl AsRef<Path>, capacity: usize) -> Self {
        let dir = dir.as_ref();
        Self {
            history: RecentList::new(dir.join(ListKind::History.file_name()), capacity),
            favorites: RecentList::new(dir.join(ListKind::Favorites.file_name()), capacity),
        }
    }

    pub fn list(&self, kind: ListKind) -> &RecentList {
        match kind {
            ListKind::History => &self.history,
            ListKind::Favorites => &self.favorites,
        }
    }

    pub fn load(&self, kind: ListKind) -> Vec<String> {
        self.list(kind).load()
    }

    pub fn try_load(&self, kind: ListKind) -> StoreResult<Vec<String>> {
        self.list(kind).try_load()
    }

    /// Same as [`Store::load`]; always re-reads the file
    pub fn get(&self, kind: ListKind) -> Vec<String> {
        self.load(kind)
    }

    pub fn add(&self, kind: ListKind, text: &str) -> StoreResult<AddOutcome> {
        self.list(kind).add(text)
    }

    pub fn clear(&self, kind: ListKind) -> StoreResult<()> {
        self.list(kind).clear()?;
        log::info!("Cleared {}", kind);
        Ok(())
    }
}
