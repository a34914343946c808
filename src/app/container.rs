//! Dependency injection container for the game.

use std::{path::Path, sync::Arc};

use tracing::info;

use super::config::GameConfig;
use crate::{
    Result, adapters::MsgPackRepository, ports::SessionRepository, session::GameSession,
};

/// Application with dependency injection.
///
/// Owns the session repository and wires it into session creation, loading
/// and saving.
///
/// # Examples
///
/// ## Production usage
///
/// ```
/// use geocache::app::{App, GameConfig};
///
/// let app = App::new();
/// let session = app.new_session(GameConfig::default())?;
/// # Ok::<(), geocache::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use geocache::app::App;
/// use geocache::adapters::InMemoryRepository;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .build();
/// ```
pub struct App {
    /// Repository for session persistence
    session_repository: Arc<dyn SessionRepository + Send + Sync>,
}

impl App {
    /// Create a new app backed by [`MsgPackRepository`].
    pub fn new() -> Self {
        Self {
            session_repository: Arc::new(MsgPackRepository::new()),
        }
    }

    /// Create a builder for constructing an app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Get the session repository.
    pub fn session_repository(&self) -> Arc<dyn SessionRepository + Send + Sync> {
        Arc::clone(&self.session_repository)
    }

    /// Start a new session.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if `config` is invalid.
    pub fn new_session(&self, config: GameConfig) -> Result<GameSession> {
        config.validate()?;
        GameSession::new(config.board, config.start)
    }

    /// Whether a saved session exists at `path`.
    pub fn has_session(&self, path: &Path) -> bool {
        self.session_repository.exists(path)
    }

    /// Load a saved session.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use geocache::app::App;
    /// use std::path::Path;
    ///
    /// let app = App::new();
    /// let session = app.load_session(Path::new("session.msgpack"))?;
    /// # Ok::<(), geocache::Error>(())
    /// ```
    pub fn load_session(&self, path: &Path) -> Result<GameSession> {
        let snapshot = self.session_repository.load(path)?;
        GameSession::from_snapshot(snapshot)
    }

    /// Save a session.
    pub fn save_session(&self, session: &GameSession, path: &Path) -> Result<()> {
        self.session_repository.save(&session.snapshot(), path)?;
        info!(?path, "session saved");
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing an app with custom dependencies.
///
/// # Examples
///
/// ```
/// use geocache::app::AppBuilder;
/// use geocache::adapters::InMemoryRepository;
///
/// let app = AppBuilder::new()
///     .with_repository(InMemoryRepository::new())
///     .build();
/// ```
pub struct AppBuilder {
    session_repository: Option<Arc<dyn SessionRepository + Send + Sync>>,
}

impl AppBuilder {
    /// Create a new app builder.
    pub fn new() -> Self {
        Self {
            session_repository: None,
        }
    }

    /// Set a custom session repository.
    pub fn with_repository<R: SessionRepository + Send + Sync + 'static>(
        mut self,
        repo: R,
    ) -> Self {
        self.session_repository = Some(Arc::new(repo));
        self
    }

    /// Build the app with the configured dependencies.
    ///
    /// If no repository was specified, uses `MsgPackRepository` by default.
    pub fn build(self) -> App {
        App {
            session_repository: self
                .session_repository
                .unwrap_or_else(|| Arc::new(MsgPackRepository::new())),
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::InMemoryRepository, grid::BoardConfig};

    #[test]
    fn test_app_creates_session() {
        let app = App::new();
        let session = app.new_session(GameConfig::default()).unwrap();
        assert_eq!(session.location(), GameConfig::default().start);
    }

    #[test]
    fn test_app_rejects_invalid_config() {
        let app = App::new();
        let config = GameConfig::default().with_board(BoardConfig::default().with_tile_width(0.0));
        assert!(app.new_session(config).is_err());
    }

    #[test]
    fn test_save_and_load_through_repository() {
        let repo = InMemoryRepository::new();
        let app = App::for_testing().with_repository(repo.clone()).build();
        let path = Path::new("session");

        let mut session = app.new_session(GameConfig::default()).unwrap();
        session.visible_caches().unwrap();
        assert!(!app.has_session(path));

        app.save_session(&session, path).unwrap();
        assert!(app.has_session(path));
        assert_eq!(repo.count(), 1);

        let loaded = app.load_session(path).unwrap();
        assert_eq!(loaded.snapshot(), session.snapshot());
    }
}
