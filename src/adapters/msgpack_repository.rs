//! MessagePack implementation of the session repository.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::{Result, error::Error, ports::SessionRepository, session::SessionSnapshot};

/// MessagePack-based session repository.
///
/// Stores one session per file using rmp_serde, with struct fields encoded by
/// name so snapshots stay readable as fields are added.
///
/// # Examples
///
/// ```no_run
/// use geocache::adapters::MsgPackRepository;
/// use geocache::grid::{BoardConfig, Point};
/// use geocache::ports::SessionRepository;
/// use geocache::session::GameSession;
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// let session = GameSession::new(BoardConfig::default(), Point::new(36.9895, -122.0628))?;
///
/// repo.save(&session.snapshot(), Path::new("session.msgpack"))?;
/// let loaded = repo.load(Path::new("session.msgpack"))?;
/// # Ok::<(), geocache::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl SessionRepository for MsgPackRepository {
    fn save(&self, snapshot: &SessionSnapshot, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write_named(&mut writer, snapshot).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize session to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush file {path:?}"),
            source,
        })?;

        debug!(?path, caches = snapshot.cache_states.len(), "saved session");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<SessionSnapshot> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let snapshot: SessionSnapshot = rmp_serde::decode::from_read(BufReader::new(file))
            .map_err(|e| Error::SerializationContext {
                operation: "deserialize session from MessagePack".to_string(),
                message: e.to_string(),
            })?;

        debug!(?path, caches = snapshot.cache_states.len(), "loaded session");
        Ok(snapshot)
    }

    fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{
        grid::{BoardConfig, Point},
        session::GameSession,
    };

    #[test]
    fn test_msgpack_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("session.msgpack");

        let mut session =
            GameSession::new(BoardConfig::default(), Point::new(36.9895, -122.0628))
                .expect("Failed to create session");
        session.visible_caches().expect("Failed to materialize caches");

        let repo = MsgPackRepository::new();
        assert!(!repo.exists(&file_path));
        repo.save(&session.snapshot(), &file_path)
            .expect("Failed to save");
        assert!(repo.exists(&file_path));

        let loaded = repo.load(&file_path).expect("Failed to load");
        assert_eq!(loaded, session.snapshot());
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = MsgPackRepository::new();
        let result = repo.load(&temp_dir.path().join("missing.msgpack"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_save_to_invalid_path_returns_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = MsgPackRepository::new();
        let snapshot = GameSession::new(BoardConfig::default(), Point::new(0.0, 0.0))
            .expect("Failed to create session")
            .snapshot();
        let result = repo.save(&snapshot, &temp_dir.path().join("no_such_dir/file.msgpack"));
        assert!(result.is_err());
    }
}
