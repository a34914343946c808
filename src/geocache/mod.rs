//! Caches, the coins inside them, and their serialized snapshots.

pub mod cache;
pub mod coin;
pub mod memento;

pub use cache::Geocache;
pub use coin::{Coin, SerialCounter};
pub use memento::{Blob, CacheState, DecodeError, decode, encode};
