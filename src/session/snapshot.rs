//! Saved form of a game session

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    geocache::{Blob, Coin},
    grid::{BoardConfig, Point},
    identifiers::StoreKey,
};

/// Everything needed to resume a [`GameSession`](super::GameSession).
///
/// Cache contents are carried as the same per-cell [`Blob`]s the
/// [`CacheStore`](crate::store::CacheStore) holds, keyed by [`StoreKey`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Version of the save format
    pub version: u32,
    /// Grid the session was played on
    pub board: BoardConfig,
    /// Where the session began; `reset` returns here
    pub start: Point,
    /// Current player location
    pub location: Point,
    /// Coins carried by the player, last collected on top
    pub holdings: Vec<Coin>,
    /// Every location the player has occupied, oldest first
    pub history: Vec<Point>,
    /// Latest snapshot of every cache touched so far
    pub cache_states: BTreeMap<StoreKey, Blob>,
    /// Serial the next minted coin will receive
    pub next_serial: u64,
}

impl SessionSnapshot {
    /// Current save format version
    pub const VERSION: u32 = 1;
}
