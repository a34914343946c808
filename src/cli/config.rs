//! Shared configuration types for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use crate::{app::App, session::GameSession};

/// Session file used when `--session` is not given
pub const DEFAULT_SESSION_PATH: &str = "geocache-session.msgpack";

/// Location of the session file a command operates on
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Path to the session file
    #[arg(long, short = 's', default_value = DEFAULT_SESSION_PATH)]
    pub session: PathBuf,
}

impl SessionArgs {
    /// Load the session, with a hint if it has not been created yet.
    pub fn load(&self, app: &App) -> Result<GameSession> {
        if !app.has_session(&self.session) {
            bail!(
                "no session at {} (start one with `geocache new`)",
                self.session.display()
            );
        }
        app.load_session(&self.session)
            .with_context(|| format!("failed to load session {}", self.session.display()))
    }

    /// Save the session back to the same file.
    pub fn save(&self, app: &App, session: &GameSession) -> Result<()> {
        app.save_session(session, &self.session)
            .with_context(|| format!("failed to save session {}", self.session.display()))
    }
}
