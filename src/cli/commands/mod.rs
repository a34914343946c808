//! Subcommands of the `geocache` binary

pub mod collect;
pub mod deposit;
pub mod look;
pub mod new;
pub mod reset;
pub mod status;
pub mod walk;
