//! Coins and the serial counter that mints them

use std::fmt;

use serde::{Deserialize, Serialize};

/// A collectible token.
///
/// `(i, j)` record the cell the coin was minted in and never change when the
/// coin travels to other caches; together with `serial` they identify the coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub i: i64,
    pub j: i64,
    pub serial: u64,
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}#{}", self.i, self.j, self.serial)
    }
}

/// Source of coin serial numbers.
///
/// Owned by a game session and passed by reference to whatever mints coins,
/// so independent sessions never share serials. Serials start at zero and
/// are never reused within a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialCounter {
    next: u64,
}

impl SerialCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a counter whose next serial is `next`, e.g. after loading a session.
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// The serial the next minted coin will receive.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Mint a coin originating from cell `(i, j)`.
    pub fn mint(&mut self, i: i64, j: i64) -> Coin {
        let serial = self.next;
        self.next += 1;
        Coin { i, j, serial }
    }

    /// Mint `count` coins for cell `(i, j)` with consecutive serials.
    pub fn mint_many(&mut self, i: i64, j: i64, count: usize) -> Vec<Coin> {
        (0..count).map(|_| self.mint(i, j)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serials_increase() {
        let mut counter = SerialCounter::new();
        let coins = counter.mint_many(1, 2, 3);
        let serials: Vec<u64> = coins.iter().map(|c| c.serial).collect();
        assert_eq!(serials, vec![0, 1, 2]);
        assert!(coins.iter().all(|c| (c.i, c.j) == (1, 2)));
        assert_eq!(counter.peek(), 3);
    }

    #[test]
    fn test_independent_counters_do_not_share_state() {
        let mut a = SerialCounter::new();
        let mut b = SerialCounter::new();
        a.mint_many(0, 0, 5);
        assert_eq!(b.mint(0, 0).serial, 0);
    }

    #[test]
    fn test_resumed_counter_continues() {
        let mut counter = SerialCounter::starting_at(41);
        assert_eq!(counter.mint(-1, -1).serial, 41);
        assert_eq!(counter.peek(), 42);
    }

    #[test]
    fn test_coin_display() {
        let coin = Coin {
            i: 369894,
            j: -1220628,
            serial: 7,
        };
        assert_eq!(coin.to_string(), "369894:-1220628#7");
    }
}
