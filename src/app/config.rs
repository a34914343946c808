//! Configuration types for session creation.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    error::Error,
    grid::{Board, BoardConfig, Point},
};

/// Where new sessions start unless configured otherwise.
pub const DEFAULT_START: Point = Point::new(36.98949379578401, -122.06277128548504);

/// Configuration for creating a game session.
///
/// Builder-style, and deserializable from JSON so the CLI can take a config
/// file. Missing fields fall back to their defaults.
///
/// # Examples
///
/// ```
/// use geocache::app::GameConfig;
/// use geocache::grid::{BoardConfig, Point};
///
/// let config = GameConfig::new()
///     .with_start(Point::new(51.5, -0.12))
///     .with_board(BoardConfig::default().with_visibility_radius(4));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid parameters
    pub board: BoardConfig,
    /// Initial player location
    pub start: Point,
}

impl GameConfig {
    /// Default grid, starting at [`DEFAULT_START`].
    pub fn new() -> Self {
        Self {
            board: BoardConfig::default(),
            start: DEFAULT_START,
        }
    }

    /// Set the grid parameters.
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Set the starting location.
    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    /// Read a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {path:?}"),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the grid and check the starting point falls on it.
    pub fn validate(&self) -> Result<()> {
        let board = Board::new(self.board)?;
        board.coords_for_point(self.start)?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
