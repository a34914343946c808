//! Collect command - Take a coin from a cache

use anyhow::Result;
use clap::Parser;

use crate::{
    app::App,
    cli::{config::SessionArgs, output},
};

#[derive(Parser, Debug)]
#[command(about = "Collect the top coin from a cache in view")]
pub struct CollectArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Row of the cache
    #[arg(long, allow_negative_numbers = true)]
    pub i: i64,

    /// Column of the cache
    #[arg(long, allow_negative_numbers = true)]
    pub j: i64,
}

pub fn execute(args: CollectArgs) -> Result<()> {
    let app = App::new();
    let mut session = args.session.load(&app)?;

    let collected = session.collect_from(args.i, args.j)?;
    // materializing may have minted or repaired the cache even when it is empty
    args.session.save(&app, &session)?;

    match collected {
        Some(coin) => println!("Collected coin {coin} from ({}, {}).", args.i, args.j),
        None => println!("Cache ({}, {}) is empty.", args.i, args.j),
    }
    output::print_kv("Coins held", &session.coin_count().to_string());
    Ok(())
}
