//! Serialized cache snapshots.
//!
//! A [`Blob`] is the opaque string stored per cell. Its decoded shape is
//!
//! ```text
//! { "i": 369894, "j": -1220628, "coins": [{ "i": 369894, "j": -1220628, "serial": 0 }] }
//! ```
//!
//! and must stay readable by later versions of the crate, since saved sessions
//! carry these blobs verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coin::Coin;
use crate::Result;

/// Decoded contents of a cache snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheState {
    pub i: i64,
    pub j: i64,
    pub coins: Vec<Coin>,
}

/// Opaque encoded [`CacheState`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blob(String);

impl Blob {
    /// Wrap raw text, e.g. a value read back from a saved session.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A blob that cannot be turned back into the cache it claims to be.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("malformed cache state: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("snapshot describes cell ({found_i}, {found_j}) but is stored for ({expected_i}, {expected_j})")]
    CellMismatch {
        expected_i: i64,
        expected_j: i64,
        found_i: i64,
        found_j: i64,
    },
}

/// Encode a cache state.
pub fn encode(state: &CacheState) -> Result<Blob> {
    Ok(Blob(serde_json::to_string(state)?))
}

/// Decode a blob produced by [`encode`].
///
/// # Errors
///
/// Returns [`DecodeError`] for anything that is not a JSON object with integer
/// `i` and `j` and a `coins` array of `{ i, j, serial }` objects.
pub fn decode(blob: &Blob) -> std::result::Result<CacheState, DecodeError> {
    Ok(serde_json::from_str(blob.as_str())?)
}
