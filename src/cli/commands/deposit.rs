//! Deposit command - Put a held coin into a cache

use anyhow::Result;
use clap::Parser;

use crate::{
    app::App,
    cli::{config::SessionArgs, output},
};

#[derive(Parser, Debug)]
#[command(about = "Deposit the most recently collected coin into a cache in view")]
pub struct DepositArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Row of the cache
    #[arg(long, allow_negative_numbers = true)]
    pub i: i64,

    /// Column of the cache
    #[arg(long, allow_negative_numbers = true)]
    pub j: i64,
}

pub fn execute(args: DepositArgs) -> Result<()> {
    let app = App::new();
    let mut session = args.session.load(&app)?;

    let deposited = session.deposit_into(args.i, args.j)?;
    args.session.save(&app, &session)?;

    match deposited {
        Some(coin) => println!("Deposited coin {coin} into ({}, {}).", args.i, args.j),
        None => println!("You have no coins to deposit."),
    }
    output::print_kv("Coins held", &session.coin_count().to_string());
    Ok(())
}
