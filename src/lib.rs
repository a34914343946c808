//! Location-grid cache game engine
//!
//! This crate provides:
//! - A deterministic, seedless RNG keyed by strings
//! - A board that maps coordinates to canonical grid cells and decides which
//!   cells hold a cache
//! - Geocaches holding coins, with a stable serialized snapshot format
//! - A cache store that lazily mints or restores caches as the player roams
//! - A game session tying these together, with pluggable persistence

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod geocache;
pub mod grid;
pub mod identifiers;
pub mod luck;
pub mod ports;
pub mod session;
pub mod store;

pub use error::{Error, Result};
pub use geocache::{Blob, CacheState, Coin, Geocache, SerialCounter};
pub use grid::{Board, BoardConfig, Bounds, Cell, Direction, Point};
pub use identifiers::{CellId, CellKey, StoreKey};
pub use luck::luck;
pub use session::{GameSession, SessionSnapshot, VisibleCache};
pub use store::CacheStore;
