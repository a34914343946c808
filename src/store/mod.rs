//! Durable per-cell cache contents and lazy cache materialization.
//!
//! The store maps each cell's [`StoreKey`] to the last snapshot written for
//! it. [`CacheStore::get_or_create`] turns a cell into a live [`Geocache`],
//! restoring from the snapshot when there is one and minting a fresh coin set
//! otherwise. Callers mutate the returned cache and hand it back through
//! [`CacheStore::persist`]; nothing is synced implicitly.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::{
    Result,
    error::Error,
    geocache::{Blob, DecodeError, Geocache, SerialCounter, decode},
    grid::Cell,
    identifiers::StoreKey,
    luck::{coin_seed_key, luck},
};

/// Most coins a freshly minted cache can hold.
pub const MAX_FRESH_COINS: usize = 5;

/// Number of coins minted into a never-visited cache at `(i, j)`.
///
/// Always in `1..=MAX_FRESH_COINS` and a pure function of the coordinates.
pub fn fresh_coin_count(i: i64, j: i64) -> usize {
    (luck(&coin_seed_key(i, j)) * MAX_FRESH_COINS as f64).floor() as usize + 1
}

/// Snapshot table keyed by cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStore {
    states: BTreeMap<StoreKey, Blob>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously saved snapshots.
    ///
    /// Blobs are not decoded here; a corrupt entry only surfaces when its cell
    /// is next materialized.
    pub fn from_states(states: BTreeMap<StoreKey, Blob>) -> Self {
        Self { states }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.states.contains_key(&cell.store_key())
    }

    /// The latest snapshot for `key`, if any.
    pub fn snapshot(&self, key: &StoreKey) -> Option<&Blob> {
        self.states.get(key)
    }

    pub fn states(&self) -> &BTreeMap<StoreKey, Blob> {
        &self.states
    }

    pub fn into_states(self) -> BTreeMap<StoreKey, Blob> {
        self.states
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Highest coin serial held in any readable snapshot.
    ///
    /// Unreadable entries are skipped; they are reminted with fresh serials
    /// when their cell is next materialized.
    pub fn max_serial(&self) -> Option<u64> {
        self.states
            .values()
            .filter_map(|blob| decode(blob).ok())
            .flat_map(|state| state.coins)
            .map(|coin| coin.serial)
            .max()
    }

    /// Materialize the cache at `cell`.
    ///
    /// Restores the stored snapshot if one exists; otherwise mints
    /// [`fresh_coin_count`] coins from `serials`. Either way the resulting
    /// snapshot is written back before returning, so a second call never mints
    /// again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the stored snapshot is corrupt or belongs
    /// to another cell. Other entries are unaffected; see
    /// [`remint`](Self::remint) for recovering the cell.
    pub fn get_or_create(&mut self, cell: &Cell, serials: &mut SerialCounter) -> Result<Geocache> {
        let key = cell.store_key();
        let cache = match self.states.get(&key) {
            Some(blob) => {
                let cache = restore_for(cell, blob).map_err(|source| Error::Decode {
                    key: key.to_string(),
                    source,
                })?;
                debug!(%key, coins = cache.len(), "restored cache");
                cache
            }
            None => {
                let cache = mint_cache(cell, serials);
                debug!(%key, coins = cache.len(), first_serial = ?cache.coins().first().map(|c| c.serial), "minted cache");
                cache
            }
        };

        self.persist(&cache)?;
        Ok(cache)
    }

    /// Write `cache`'s current snapshot under its own cell key.
    ///
    /// Must be called after every `collect` or `deposit` on a cache obtained
    /// from [`get_or_create`](Self::get_or_create).
    pub fn persist(&mut self, cache: &Geocache) -> Result<()> {
        let key = StoreKey::for_coords(cache.i(), cache.j());
        let blob = cache.serialize()?;
        self.states.insert(key, blob);
        Ok(())
    }

    /// Drop whatever is stored for `cell` and mint a fresh cache in its place.
    pub fn remint(&mut self, cell: &Cell, serials: &mut SerialCounter) -> Result<Geocache> {
        let key = cell.store_key();
        if self.states.remove(&key).is_some() {
            warn!(%key, "discarded stored cache state and minted a replacement");
        }
        self.get_or_create(cell, serials)
    }
}

fn restore_for(cell: &Cell, blob: &Blob) -> std::result::Result<Geocache, DecodeError> {
    let cache = Geocache::from_blob(blob)?;
    if cache.coords() != cell.coords() {
        return Err(DecodeError::CellMismatch {
            expected_i: cell.i(),
            expected_j: cell.j(),
            found_i: cache.i(),
            found_j: cache.j(),
        });
    }
    Ok(cache)
}

fn mint_cache(cell: &Cell, serials: &mut SerialCounter) -> Geocache {
    let (i, j) = cell.coords();
    let coins = serials.mint_many(i, j, fresh_coin_count(i, j));
    Geocache::new(i, j, coins)
}
