//! Board: point-to-cell indexing, cell canonicalization and cache spawning

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{
    cell::Cell,
    point::{Bounds, Point},
};
use crate::{
    Result,
    error::Error,
    identifiers::{CellId, CellKey},
    luck::{luck, spawn_key},
};

/// Largest accepted visibility radius; a window is `(2r + 1)^2` cells.
pub const MAX_VISIBILITY_RADIUS: u32 = 1024;

/// Grid parameters.
///
/// # Examples
///
/// ```
/// use geocache::grid::BoardConfig;
///
/// let config = BoardConfig::default()
///     .with_visibility_radius(4)
///     .with_spawn_probability(0.25);
/// assert!(config.validate().is_ok());
/// assert!(BoardConfig::default().with_tile_width(-1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Edge length of one cell in coordinate units
    pub tile_width: f64,
    /// Half-width, in cells, of the visible square around the player
    pub visibility_radius: u32,
    /// Probability that any given cell holds a cache
    pub spawn_probability: f64,
}

impl BoardConfig {
    pub const DEFAULT_TILE_WIDTH: f64 = 1e-4;
    pub const DEFAULT_VISIBILITY_RADIUS: u32 = 8;
    pub const DEFAULT_SPAWN_PROBABILITY: f64 = 0.1;

    pub fn with_tile_width(mut self, tile_width: f64) -> Self {
        self.tile_width = tile_width;
        self
    }

    pub fn with_visibility_radius(mut self, radius: u32) -> Self {
        self.visibility_radius = radius;
        self
    }

    pub fn with_spawn_probability(mut self, probability: f64) -> Self {
        self.spawn_probability = probability;
        self
    }

    /// Check the parameters describe a usable grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the tile width is not a
    /// positive finite number, the spawn probability is negative or not finite,
    /// or the radius exceeds [`MAX_VISIBILITY_RADIUS`].
    pub fn validate(&self) -> Result<()> {
        if !(self.tile_width.is_finite() && self.tile_width > 0.0) {
            return Err(Error::config(format!(
                "tile width must be positive and finite, got {}",
                self.tile_width
            )));
        }
        if !(self.spawn_probability.is_finite() && self.spawn_probability >= 0.0) {
            return Err(Error::config(format!(
                "spawn probability must be a non-negative finite number, got {}",
                self.spawn_probability
            )));
        }
        if self.visibility_radius > MAX_VISIBILITY_RADIUS {
            return Err(Error::config(format!(
                "visibility radius {} exceeds maximum of {MAX_VISIBILITY_RADIUS}",
                self.visibility_radius
            )));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            tile_width: Self::DEFAULT_TILE_WIDTH,
            visibility_radius: Self::DEFAULT_VISIBILITY_RADIUS,
            spawn_probability: Self::DEFAULT_SPAWN_PROBABILITY,
        }
    }
}

/// The grid and its table of canonical cells.
///
/// Every cell handed out by a board comes from the same table, so querying the
/// same coordinates twice yields cells with the same [`CellId`].
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    known_cells: HashMap<CellKey, Cell>,
}

impl Board {
    /// Create a board, rejecting invalid configurations up front.
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            known_cells: HashMap::new(),
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn tile_width(&self) -> f64 {
        self.config.tile_width
    }

    pub fn visibility_radius(&self) -> u32 {
        self.config.visibility_radius
    }

    pub fn spawn_probability(&self) -> f64 {
        self.config.spawn_probability
    }

    /// Number of cells registered in the canonicalization table.
    pub fn known_cell_count(&self) -> usize {
        self.known_cells.len()
    }

    /// Look up the canonical cell for `(i, j)` without registering it.
    pub fn lookup(&self, i: i64, j: i64) -> Option<Cell> {
        self.known_cells.get(&CellKey::for_coords(i, j)).copied()
    }

    /// The canonical cell for `(i, j)`, registering it on first use.
    pub fn canonical_cell(&mut self, i: i64, j: i64) -> Cell {
        let key = CellKey::for_coords(i, j);
        if let Some(cell) = self.known_cells.get(&key) {
            return *cell;
        }

        let id = CellId::new(self.known_cells.len());
        let cell = Cell::new(id, i, j);
        trace!(%key, %id, "registered canonical cell");
        self.known_cells.insert(key, cell);
        cell
    }

    /// Row/column indices of the cell containing `point`.
    ///
    /// Uses `floor`, so negative coordinates round toward negative infinity and
    /// the tiling stays uniform across the origin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LocationOutOfRange`] if either coordinate is not finite
    /// or lies too far out for its cell index to fit in an `i64`.
    pub fn coords_for_point(&self, point: Point) -> Result<(i64, i64)> {
        let width = self.config.tile_width;
        match (grid_index(point.lat, width), grid_index(point.lng, width)) {
            (Some(i), Some(j)) => Ok((i, j)),
            _ => Err(Error::LocationOutOfRange {
                lat: point.lat,
                lng: point.lng,
            }),
        }
    }

    /// The canonical cell containing `point`.
    ///
    /// # Errors
    ///
    /// Fails like [`coords_for_point`](Self::coords_for_point).
    pub fn cell_for_point(&mut self, point: Point) -> Result<Cell> {
        let (i, j) = self.coords_for_point(point)?;
        Ok(self.canonical_cell(i, j))
    }

    /// Rectangle covered by `cell`: `[i, j] * tile_width` up to `[i + 1, j + 1] * tile_width`.
    pub fn cell_bounds(&self, cell: &Cell) -> Bounds {
        let width = self.config.tile_width;
        let (i, j) = (cell.i() as f64, cell.j() as f64);
        Bounds {
            south_west: Point::new(i * width, j * width),
            north_east: Point::new((i + 1.0) * width, (j + 1.0) * width),
        }
    }

    /// Whether the cell at absolute coordinates `(i, j)` holds a cache.
    ///
    /// Depends only on the coordinates and the spawn probability, never on
    /// where the player is standing.
    pub fn is_spawn_cell(&self, i: i64, j: i64) -> bool {
        luck(&spawn_key(i, j)) < self.config.spawn_probability
    }

    /// Cells holding a cache within the visibility window around `point`.
    ///
    /// The window is the `(2r + 1)^2` square centred on the cell containing
    /// `point`. Results are in row-major order: `i` ascending in the outer
    /// loop, `j` ascending in the inner loop.
    ///
    /// # Errors
    ///
    /// Fails like [`coords_for_point`](Self::coords_for_point).
    pub fn cells_near(&mut self, point: Point) -> Result<Vec<Cell>> {
        let origin = self.cell_for_point(point)?;
        let radius = i64::from(self.config.visibility_radius);

        let mut cells = Vec::new();
        for di in -radius..=radius {
            for dj in -radius..=radius {
                let (Some(i), Some(j)) = (origin.i().checked_add(di), origin.j().checked_add(dj))
                else {
                    continue;
                };
                if self.is_spawn_cell(i, j) {
                    cells.push(self.canonical_cell(i, j));
                }
            }
        }

        debug!(
            origin = %origin,
            radius,
            visible = cells.len(),
            "computed visible cells"
        );
        Ok(cells)
    }
}

/// Floor of `coordinate / width` as an index, if it is finite and fits in an `i64`.
fn grid_index(coordinate: f64, width: f64) -> Option<i64> {
    let index = (coordinate / width).floor();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    (index.is_finite() && index >= i64::MIN as f64 && index < i64::MAX as f64)
        .then_some(index as i64)
}
