//! The cache entity sitting on one grid cell

use super::{
    coin::Coin,
    memento::{Blob, CacheState, DecodeError, decode, encode},
};
use crate::Result;

/// Coins currently held at grid cell `(i, j)`.
///
/// The coin list is a stack: [`collect`](Geocache::collect) pops the most
/// recently added coin and [`deposit`](Geocache::deposit) pushes onto the top.
/// A `Geocache` is a throwaway view; the durable copy of its contents lives in
/// the [`CacheStore`](crate::store::CacheStore) as a [`Blob`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geocache {
    i: i64,
    j: i64,
    coins: Vec<Coin>,
}

impl Geocache {
    pub fn new(i: i64, j: i64, coins: Vec<Coin>) -> Self {
        Self { i, j, coins }
    }

    /// Rebuild a cache from a snapshot.
    pub fn from_blob(blob: &Blob) -> std::result::Result<Self, DecodeError> {
        Ok(Self::from(decode(blob)?))
    }

    pub fn i(&self) -> i64 {
        self.i
    }

    pub fn j(&self) -> i64 {
        self.j
    }

    pub fn coords(&self) -> (i64, i64) {
        (self.i, self.j)
    }

    /// Coins in deposit order; the last element is the top of the stack.
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Take the top coin, or `None` if the cache is empty.
    pub fn collect(&mut self) -> Option<Coin> {
        self.coins.pop()
    }

    /// Put a coin on top. Any coin may be deposited into any cache.
    pub fn deposit(&mut self, coin: Coin) {
        self.coins.push(coin);
    }

    pub fn state(&self) -> CacheState {
        CacheState {
            i: self.i,
            j: self.j,
            coins: self.coins.clone(),
        }
    }

    /// Encode `(i, j, coins)` into a self-contained snapshot.
    pub fn serialize(&self) -> Result<Blob> {
        encode(&self.state())
    }

    /// Replace coordinates and coins with the contents of `blob`.
    ///
    /// On error the cache is left unchanged.
    pub fn restore(&mut self, blob: &Blob) -> std::result::Result<(), DecodeError> {
        let state = decode(blob)?;
        *self = Self::from(state);
        Ok(())
    }
}

impl From<CacheState> for Geocache {
    fn from(state: CacheState) -> Self {
        Self::new(state.i, state.j, state.coins)
    }
}
