//! In-memory catalog backed by JSON files.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::{Destination, SearchHistoryEntry};

use super::error::CatalogError;

/// Destination records, required.
pub const DESTINATIONS_FILE: &str = "destinations.json";

/// Search history records, optional.
pub const HISTORY_FILE: &str = "search_history.json";

#[derive(Debug, Default)]
struct Snapshot {
    destinations: Arc<Vec<Destination>>,
    history: Arc<Vec<SearchHistoryEntry>>,
}

/// Thread-safe destination catalog.
///
/// Readers get `Arc` snapshots, so a request keeps a consistent view even if
/// the catalog is reloaded or a search is recorded meanwhile.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<RwLock<Snapshot>>,
    data_dir: Option<PathBuf>,
}

impl Catalog {
    /// Load the catalog from `data_dir`.
    ///
    /// Fails if the destinations file is missing or any record is invalid.
    /// A missing or unreadable history file means no history.
    pub async fn load(data_dir: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let data_dir = data_dir.into();
        let snapshot = read_snapshot(&data_dir).await?;

        info!(
            data_dir = %data_dir.display(),
            destinations = snapshot.destinations.len(),
            history = snapshot.history.len(),
            "loaded catalog"
        );

        Ok(Self {
            inner: Arc::new(RwLock::new(snapshot)),
            data_dir: Some(data_dir),
        })
    }

    /// Build an in-memory catalog (for tests and embedding).
    ///
    /// Recorded searches are kept in memory only.
    pub fn from_parts(
        destinations: Vec<Destination>,
        history: Vec<SearchHistoryEntry>,
    ) -> Result<Self, CatalogError> {
        validate(&destinations)?;

        Ok(Self {
            inner: Arc::new(RwLock::new(Snapshot {
                destinations: Arc::new(destinations),
                history: Arc::new(history),
            })),
            data_dir: None,
        })
    }

    /// All destinations, in file order.
    pub async fn destinations(&self) -> Arc<Vec<Destination>> {
        let guard = self.inner.read().await;
        Arc::clone(&guard.destinations)
    }

    /// All recorded searches.
    pub async fn history(&self) -> Arc<Vec<SearchHistoryEntry>> {
        let guard = self.inner.read().await;
        Arc::clone(&guard.history)
    }

    /// Look up a destination by name (case-insensitive).
    pub async fn find(&self, name: &str) -> Option<Destination> {
        let guard = self.inner.read().await;
        guard.destinations.iter().find(|d| d.is_named(name)).cloned()
    }

    /// Get the number of destinations.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.destinations.len()
    }

    /// Check if the catalog has no destinations.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.destinations.is_empty()
    }

    /// Append a search to the history.
    ///
    /// File-backed catalogs also rewrite the history file. On a write
    /// failure the in-memory history is left unchanged.
    pub async fn record_search(&self, entry: SearchHistoryEntry) -> Result<(), CatalogError> {
        let mut guard = self.inner.write().await;

        let mut history = guard.history.as_ref().clone();
        history.push(entry);

        if let Some(dir) = &self.data_dir {
            write_json(&dir.join(HISTORY_FILE), &history).await?;
        }

        debug!(entries = history.len(), "recorded search");
        guard.history = Arc::new(history);
        Ok(())
    }

    /// Re-read the data files.
    ///
    /// On success, replaces the current snapshot and returns the number of
    /// destinations. On failure, the existing snapshot is preserved.
    ///
    /// Holds the write lock while reading so no recorded search lands
    /// between the read and the swap.
    pub async fn reload(&self) -> Result<usize, CatalogError> {
        let dir = self.data_dir.as_ref().ok_or(CatalogError::NotFileBacked)?;

        let mut guard = self.inner.write().await;
        let snapshot = read_snapshot(dir).await?;
        let count = snapshot.destinations.len();
        *guard = snapshot;

        Ok(count)
    }
}

async fn read_snapshot(dir: &Path) -> Result<Snapshot, CatalogError> {
    let destinations: Vec<Destination> = read_json(&dir.join(DESTINATIONS_FILE)).await?;
    validate(&destinations)?;

    let history_path = dir.join(HISTORY_FILE);
    let history = match read_json(&history_path).await {
        Ok(history) => history,
        Err(CatalogError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            warn!(path = %history_path.display(), "no search history file, starting empty");
            Vec::new()
        }
        Err(CatalogError::Json { source, .. }) => {
            warn!(
                path = %history_path.display(),
                error = %source,
                "unparsable search history file, starting empty"
            );
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    Ok(Snapshot {
        destinations: Arc::new(destinations),
        history: Arc::new(history),
    })
}

/// Check every record and reject duplicate names.
fn validate(destinations: &[Destination]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(destinations.len());

    for (index, destination) in destinations.iter().enumerate() {
        destination
            .validate()
            .map_err(|source| CatalogError::InvalidDestination { index, source })?;

        if !seen.insert(destination.key()) {
            return Err(CatalogError::DuplicateName(destination.name.clone()));
        }
    }

    Ok(())
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&contents).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `history` next to `path` and rename it into place.
async fn write_json(path: &Path, history: &[SearchHistoryEntry]) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(history).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp = temp_path(path);
    tokio::fs::write(&tmp, json)
        .await
        .map_err(|source| CatalogError::Io {
            path: tmp.clone(),
            source,
        })?;

    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
