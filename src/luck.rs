//! Deterministic, seedless pseudo-randomness keyed by strings.
//!
//! World generation has no session seed: everything that looks random (which
//! cells spawn a cache, how many coins a fresh cache holds) is a pure function
//! of the cell coordinates. [`luck`] hashes a key with SHA-256 and maps the
//! leading 53 bits onto `[0, 1)`, so the same key yields the same value on every
//! run and platform.

use sha2::{Digest, Sha256};

/// Number of mantissa bits in an `f64`; values built from this many bits are exact.
const MANTISSA_BITS: u32 = 53;

/// Map a string key to a reproducible value in `[0, 1)`.
///
/// # Examples
///
/// ```
/// use geocache::luck::luck;
///
/// let a = luck("369895,-1220628");
/// assert_eq!(a, luck("369895,-1220628"));
/// assert!((0.0..1.0).contains(&a));
/// ```
pub fn luck(key: &str) -> f64 {
    let digest = Sha256::digest(key.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let bits = u64::from_be_bytes(prefix) >> (64 - MANTISSA_BITS);
    bits as f64 / (1u64 << MANTISSA_BITS) as f64
}

/// Key deciding whether the cell at absolute coordinates `(i, j)` spawns a cache.
pub fn spawn_key(i: i64, j: i64) -> String {
    format!("{i},{j}")
}

/// Key seeding the initial coin count of the cache at `(i, j)`.
///
/// Distinct from [`spawn_key`] so the spawn decision and the coin count are
/// not correlated.
pub fn coin_seed_key(i: i64, j: i64) -> String {
    format!("{i},{j}, coins")
}
