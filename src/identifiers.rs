//! Identifier types for grid cells and their persisted cache state.
//!
//! Two string keys exist for the same coordinates on purpose: a [`CellKey`]
//! names the canonical [`Cell`](crate::grid::Cell) instance held by a board,
//! while a [`StoreKey`] names the saved contents of the cache at that cell.
//! They never need to be compared with each other.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Canonicalization key for a cell, formatted `"i.j"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellKey(String);

impl CellKey {
    /// Build the key for grid coordinates `(i, j)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocache::identifiers::CellKey;
    ///
    /// assert_eq!(CellKey::for_coords(-2, 15).as_str(), "-2.15");
    /// ```
    pub fn for_coords(i: i64, j: i64) -> Self {
        Self(format!("{i}.{j}"))
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for CellKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

/// Persistence key for the cache state at a cell, formatted `"i:j"`.
///
/// This is the key used in saved sessions, so its format must stay stable for
/// old snapshots to restore.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreKey(String);

impl StoreKey {
    /// Build the key for grid coordinates `(i, j)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocache::identifiers::StoreKey;
    ///
    /// assert_eq!(StoreKey::for_coords(369894, -1220628).as_str(), "369894:-1220628");
    /// ```
    pub fn for_coords(i: i64, j: i64) -> Self {
        Self(format!("{i}:{j}"))
    }

    /// Wrap an already formatted key, e.g. one read back from a saved session.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the key into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for StoreKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Borrow<str> for StoreKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for StoreKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for StoreKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Identity of a canonical cell within one board's table.
///
/// Ids are handed out in registration order and never reused, so two cells
/// from the same board are the same cell exactly when their ids match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(usize);

impl CellId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the cell in its board's registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
