//! Application layer with dependency injection container.
//!
//! The container owns the session repository and provides the operations the
//! CLI needs: start, load and save sessions.
//!
//! # Usage
//!
//! ## Production
//!
//! ```
//! use geocache::app::{App, GameConfig};
//!
//! let app = App::new();
//! let session = app.new_session(GameConfig::default())?;
//! # Ok::<(), geocache::Error>(())
//! ```
//!
//! ## Testing
//!
//! ```
//! use geocache::app::App;
//! use geocache::adapters::InMemoryRepository;
//!
//! let app = App::for_testing()
//!     .with_repository(InMemoryRepository::new())
//!     .build();
//! ```

pub mod config;
pub mod container;

pub use config::{DEFAULT_START, GameConfig};
pub use container::{App, AppBuilder};
