//! Status command - Show the player's state

use anyhow::Result;
use clap::Parser;

use crate::{
    app::App,
    cli::{config::SessionArgs, output},
};

#[derive(Parser, Debug)]
#[command(about = "Show location and holdings")]
pub struct StatusArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Also print the movement history
    #[arg(long)]
    pub history: bool,
}

pub fn execute(args: StatusArgs) -> Result<()> {
    let app = App::new();
    let session = args.session.load(&app)?;

    output::print_section("Status");
    output::print_status(&session);

    if args.history {
        println!();
        for (step, point) in session.history().iter().enumerate() {
            println!("  {step:>4}  {point}");
        }
    }
    Ok(())
}
