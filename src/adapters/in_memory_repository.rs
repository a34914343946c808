//! In-memory session repository for testing.
//!
//! A pure in-memory implementation of SessionRepository, for fast tests
//! without any file system I/O.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{Result, error::Error, ports::SessionRepository, session::SessionSnapshot};

/// In-memory repository for testing.
///
/// Snapshots are encoded with MessagePack exactly like the file adapter and
/// kept in a shared map, so encoding problems still surface in tests.
///
/// # Examples
///
/// ```
/// use geocache::adapters::InMemoryRepository;
/// use geocache::grid::{BoardConfig, Point};
/// use geocache::ports::SessionRepository;
/// use geocache::session::GameSession;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// let session = GameSession::new(BoardConfig::default(), Point::new(0.0, 0.0))?;
///
/// repo.save(&session.snapshot(), Path::new("session"))?;
/// let loaded = repo.load(Path::new("session"))?;
/// assert_eq!(loaded, session.snapshot());
/// # Ok::<(), geocache::Error>(())
/// ```
///
/// # Thread Safety
///
/// Clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots currently stored.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    /// Remove every stored snapshot.
    pub fn clear(&self) {
        self.storage().clear();
    }

    /// Overwrite the raw bytes stored at `path`.
    ///
    /// Lets tests plant corrupted data.
    pub fn insert_raw(&self, path: &Path, bytes: Vec<u8>) {
        self.storage().insert(key_for(path), bytes);
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // poisoning cannot leave the map half-written
        self.storage.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn key_for(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl SessionRepository for InMemoryRepository {
    fn save(&self, snapshot: &SessionSnapshot, path: &Path) -> Result<()> {
        let bytes = rmp_serde::to_vec_named(snapshot).map_err(|e| Error::SerializationContext {
            operation: "serialize session for in-memory storage".to_string(),
            message: e.to_string(),
        })?;

        self.storage().insert(key_for(path), bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<SessionSnapshot> {
        let storage = self.storage();
        let bytes = storage.get(&key_for(path)).ok_or_else(|| Error::Io {
            operation: format!("load session from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
            operation: "deserialize session from in-memory storage".to_string(),
            message: e.to_string(),
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.storage().contains_key(&key_for(path))
    }
}
