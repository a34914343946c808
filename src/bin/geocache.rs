//! geocache CLI - walk a grid of coin caches from the terminal
//!
//! Every command operates on a session file:
//! - Start a session at a location
//! - Move around and list the caches in view
//! - Collect coins from caches and deposit them elsewhere

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "geocache")]
#[command(version, about = "Collect and redistribute coins across a location grid", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new session
    New(geocache::cli::commands::new::NewArgs),

    /// List the caches around the player
    Look(geocache::cli::commands::look::LookArgs),

    /// Move the player by tiles or to a location
    Move(geocache::cli::commands::walk::MoveArgs),

    /// Collect the top coin from a cache
    Collect(geocache::cli::commands::collect::CollectArgs),

    /// Deposit a held coin into a cache
    Deposit(geocache::cli::commands::deposit::DepositArgs),

    /// Show location and holdings
    Status(geocache::cli::commands::status::StatusArgs),

    /// Erase all progress
    Reset(geocache::cli::commands::reset::ResetArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    geocache::cli::init_tracing(&cli.log_level);

    match cli.command {
        Commands::New(args) => geocache::cli::commands::new::execute(args),
        Commands::Look(args) => geocache::cli::commands::look::execute(args),
        Commands::Move(args) => geocache::cli::commands::walk::execute(args),
        Commands::Collect(args) => geocache::cli::commands::collect::execute(args),
        Commands::Deposit(args) => geocache::cli::commands::deposit::execute(args),
        Commands::Status(args) => geocache::cli::commands::status::execute(args),
        Commands::Reset(args) => geocache::cli::commands::reset::execute(args),
    }
}
