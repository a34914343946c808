//! Error types for the geocache crate

use thiserror::Error;

/// Main error type for the geocache crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to decode cache state for '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: crate::geocache::DecodeError,
    },

    #[error("cell ({i}, {j}) is not within the current visibility window")]
    UnknownCell { i: i64, j: i64 },

    #[error("location ({lat}, {lng}) does not fall on the grid")]
    LocationOutOfRange { lat: f64, lng: f64 },

    #[error("unsupported session snapshot version {found} (expected {expected})")]
    UnsupportedSnapshotVersion { found: u32, expected: u32 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },
}

impl Error {
    /// Shorthand for building an [`Error::InvalidConfiguration`].
    pub fn config(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Whether this error is local to a single cache snapshot.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
