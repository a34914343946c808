//! Repository port for session persistence.

use std::path::Path;

use crate::{Result, session::SessionSnapshot};

/// Port for persisting and loading game sessions.
///
/// Abstracts the storage mechanism so the session and the CLI do not care
/// whether snapshots land in a MessagePack file or in memory.
///
/// # Examples
///
/// ```no_run
/// use geocache::ports::SessionRepository;
/// use geocache::session::GameSession;
/// use std::path::Path;
///
/// fn save_session<R: SessionRepository>(
///     repo: &R,
///     session: &GameSession,
///     path: &Path,
/// ) -> geocache::Result<()> {
///     repo.save(&session.snapshot(), path)
/// }
/// ```
pub trait SessionRepository {
    /// Save a session snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The location cannot be created or written to
    /// - Serialization fails
    fn save(&self, snapshot: &SessionSnapshot, path: &Path) -> Result<()>;

    /// Load a session snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Nothing is stored at `path`
    /// - The stored data is invalid or corrupted
    fn load(&self, path: &Path) -> Result<SessionSnapshot>;

    /// Whether a snapshot exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}
