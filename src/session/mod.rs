//! Game session: the player walking the grid and moving coins around.
//!
//! A session owns the [`Board`], the [`CacheStore`] and the [`SerialCounter`],
//! and is the only place that combines them. Every operation that changes a
//! cache persists it before returning.

pub mod snapshot;

use tracing::{debug, info, warn};

pub use snapshot::SessionSnapshot;

use crate::{
    Result,
    error::Error,
    geocache::{Coin, Geocache, SerialCounter},
    grid::{Board, BoardConfig, Bounds, Cell, Direction, Point},
    store::CacheStore,
};

/// A cache currently in view, with the rectangle it occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleCache {
    pub cell: Cell,
    pub bounds: Bounds,
    pub cache: Geocache,
}

/// One player's game.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    store: CacheStore,
    serials: SerialCounter,
    start: Point,
    location: Point,
    holdings: Vec<Coin>,
    history: Vec<Point>,
}

impl GameSession {
    /// Start a fresh session at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `board` is invalid and
    /// [`Error::LocationOutOfRange`] if `start` does not fall on the grid.
    pub fn new(board: BoardConfig, start: Point) -> Result<Self> {
        let board = Board::new(board)?;
        board.coords_for_point(start)?;
        info!(%start, "started new session");
        Ok(Self {
            board,
            store: CacheStore::new(),
            serials: SerialCounter::new(),
            start,
            location: start,
            holdings: Vec::new(),
            history: vec![start],
        })
    }

    /// Resume a saved session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSnapshotVersion`] for snapshots from an
    /// unknown format version, [`Error::InvalidConfiguration`] if the saved
    /// board parameters are invalid and [`Error::LocationOutOfRange`] if a saved
    /// location does not fall on the grid.
    ///
    /// The serial counter resumes past every serial found in the snapshot, even
    /// if the saved counter lags behind them.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Result<Self> {
        if snapshot.version != SessionSnapshot::VERSION {
            return Err(Error::UnsupportedSnapshotVersion {
                found: snapshot.version,
                expected: SessionSnapshot::VERSION,
            });
        }

        let board = Board::new(snapshot.board)?;
        board.coords_for_point(snapshot.start)?;
        board.coords_for_point(snapshot.location)?;

        let store = CacheStore::from_states(snapshot.cache_states);
        let observed = store
            .max_serial()
            .into_iter()
            .chain(snapshot.holdings.iter().map(|coin| coin.serial))
            .max();
        let next_serial = match observed {
            Some(max) if max >= snapshot.next_serial => {
                warn!(
                    saved = snapshot.next_serial,
                    resumed = max.saturating_add(1),
                    "saved serial counter is behind minted coins; advancing it"
                );
                max.saturating_add(1)
            }
            _ => snapshot.next_serial,
        };

        let mut history = snapshot.history;
        if history.is_empty() {
            history.push(snapshot.location);
        }

        info!(
            location = %snapshot.location,
            caches = store.len(),
            holdings = snapshot.holdings.len(),
            "resumed session"
        );
        Ok(Self {
            board,
            store,
            serials: SerialCounter::starting_at(next_serial),
            start: snapshot.start,
            location: snapshot.location,
            holdings: snapshot.holdings,
            history,
        })
    }

    /// Capture the session for saving.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            version: SessionSnapshot::VERSION,
            board: *self.board.config(),
            start: self.start,
            location: self.location,
            holdings: self.holdings.clone(),
            history: self.history.clone(),
            cache_states: self.store.states().clone(),
            next_serial: self.serials.peek(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn start(&self) -> Point {
        self.start
    }

    /// Coins carried by the player; the last one is deposited first.
    pub fn holdings(&self) -> &[Coin] {
        &self.holdings
    }

    pub fn coin_count(&self) -> usize {
        self.holdings.len()
    }

    pub fn history(&self) -> &[Point] {
        &self.history
    }

    /// Move one tile in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LocationOutOfRange`] if the step would leave the grid;
    /// the player stays put.
    pub fn step(&mut self, direction: Direction) -> Result<Point> {
        let next = self.location.stepped(direction, self.board.tile_width());
        self.move_to(next)?;
        debug!(%direction, to = %next, "player stepped");
        Ok(next)
    }

    /// Jump straight to `point`, e.g. on a location fix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LocationOutOfRange`] if `point` does not fall on the
    /// grid; the player stays put.
    pub fn teleport(&mut self, point: Point) -> Result<()> {
        self.move_to(point)?;
        debug!(to = %point, "player teleported");
        Ok(())
    }

    fn move_to(&mut self, point: Point) -> Result<()> {
        self.board.coords_for_point(point)?;
        self.location = point;
        self.history.push(point);
        Ok(())
    }

    /// Cells with a cache around the player, in board order.
    pub fn visible_cells(&mut self) -> Result<Vec<Cell>> {
        self.board.cells_near(self.location)
    }

    /// Materialize every cache around the player.
    ///
    /// A cache whose stored snapshot cannot be decoded is replaced by a freshly
    /// minted one rather than failing the whole view.
    pub fn visible_caches(&mut self) -> Result<Vec<VisibleCache>> {
        let cells = self.visible_cells()?;
        let mut visible = Vec::with_capacity(cells.len());
        for cell in cells {
            let cache = self.materialize(&cell)?;
            visible.push(VisibleCache {
                cell,
                bounds: self.board.cell_bounds(&cell),
                cache,
            });
        }
        Ok(visible)
    }

    /// Take the top coin from the cache at `(i, j)` into the player's holdings.
    ///
    /// Returns `Ok(None)` when the cache is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCell`] if `(i, j)` has no cache in view.
    pub fn collect_from(&mut self, i: i64, j: i64) -> Result<Option<Coin>> {
        let cell = self.visible_cell(i, j)?;
        let mut cache = self.materialize(&cell)?;

        let Some(coin) = cache.collect() else {
            debug!(%cell, "nothing to collect");
            return Ok(None);
        };
        self.store.persist(&cache)?;
        self.holdings.push(coin);

        debug!(%cell, %coin, held = self.holdings.len(), "collected coin");
        Ok(Some(coin))
    }

    /// Put the most recently collected coin into the cache at `(i, j)`.
    ///
    /// Returns `Ok(None)` when the player holds no coins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCell`] if `(i, j)` has no cache in view.
    pub fn deposit_into(&mut self, i: i64, j: i64) -> Result<Option<Coin>> {
        let cell = self.visible_cell(i, j)?;
        if self.holdings.is_empty() {
            debug!(%cell, "nothing to deposit");
            return Ok(None);
        }

        let mut cache = self.materialize(&cell)?;
        let Some(coin) = self.holdings.pop() else {
            return Ok(None);
        };
        cache.deposit(coin);
        if let Err(err) = self.store.persist(&cache) {
            self.holdings.push(coin);
            return Err(err);
        }

        debug!(%cell, %coin, held = self.holdings.len(), "deposited coin");
        Ok(Some(coin))
    }

    /// Forget all caches, coins and movement and return to the start.
    ///
    /// The serial counter restarts too; no coin minted before the reset
    /// survives it.
    pub fn reset(&mut self) {
        self.store.clear();
        self.serials = SerialCounter::new();
        self.holdings.clear();
        self.location = self.start;
        self.history = vec![self.start];
        info!(start = %self.start, "session reset");
    }

    /// The canonical cell at `(i, j)` if it is in the window and holds a cache.
    fn visible_cell(&mut self, i: i64, j: i64) -> Result<Cell> {
        let (oi, oj) = self.board.coords_for_point(self.location)?;
        let radius = i64::from(self.board.visibility_radius());
        let in_window = i.abs_diff(oi) <= radius as u64 && j.abs_diff(oj) <= radius as u64;

        if in_window && self.board.is_spawn_cell(i, j) {
            Ok(self.board.canonical_cell(i, j))
        } else {
            Err(Error::UnknownCell { i, j })
        }
    }

    fn materialize(&mut self, cell: &Cell) -> Result<Geocache> {
        match self.store.get_or_create(cell, &mut self.serials) {
            Err(err) if err.is_decode() => {
                warn!(%cell, error = %err, "stored cache state unreadable; reminting");
                self.store.remint(cell, &mut self.serials)
            }
            other => other,
        }
    }
}
