//! Reset command - Erase progress and return to the start

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    app::App,
    cli::{config::SessionArgs, output},
};

#[derive(Parser, Debug)]
#[command(about = "Erase all progress in a session")]
pub struct ResetArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Confirm the reset; nothing is erased without it
    #[arg(long)]
    pub yes: bool,
}

pub fn execute(args: ResetArgs) -> Result<()> {
    if !args.yes {
        bail!("refusing to reset without --yes");
    }

    let app = App::new();
    let mut session = args.session.load(&app)?;
    session.reset();
    args.session.save(&app, &session)?;

    output::print_section("Session reset");
    output::print_status(&session);
    Ok(())
}
