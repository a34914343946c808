//! Grid cells

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::identifiers::{CellId, CellKey, StoreKey};

/// A cell of the grid at row `i`, column `j`.
///
/// Cells are only created by a [`Board`](super::Board), which keeps one
/// canonical instance per coordinate pair. Equality and hashing use the
/// coordinates alone; [`Cell::id`] exposes the canonical identity assigned by
/// the owning board.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    id: CellId,
    i: i64,
    j: i64,
}

impl Cell {
    pub(crate) fn new(id: CellId, i: i64, j: i64) -> Self {
        Self { id, i, j }
    }

    pub fn id(&self) -> CellId {
        self.id
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

    pub fn key(&self) -> CellKey {
        CellKey::for_coords(self.i, self.j)
    }

    pub fn store_key(&self) -> StoreKey {
        StoreKey::for_coords(self.i, self.j)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coords() == other.coords()
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coords().hash(state);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_equality_ignores_id() {
        let a = Cell::new(CellId::new(0), 3, 4);
        let b = Cell::new(CellId::new(7), 3, 4);
        assert_eq!(a, b);
        assert_ne!(a.id(), b.id());

        let set: HashSet<Cell> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_keys() {
        let cell = Cell::new(CellId::new(0), -1, 9);
        assert_eq!(cell.key().as_str(), "-1.9");
        assert_eq!(cell.store_key().as_str(), "-1:9");
        assert_eq!(cell.to_string(), "(-1, 9)");
    }
}
