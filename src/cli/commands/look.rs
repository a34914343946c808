//! Look command - List the caches around the player

use anyhow::Result;
use clap::Parser;

use crate::{
    app::App,
    cli::{config::SessionArgs, output},
};

#[derive(Parser, Debug)]
#[command(about = "List caches in view")]
pub struct LookArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}

pub fn execute(args: LookArgs) -> Result<()> {
    let app = App::new();
    let mut session = args.session.load(&app)?;

    let caches = session.visible_caches()?;
    // materializing may have minted new caches
    args.session.save(&app, &session)?;

    output::print_section(&format!("{} caches near {}", caches.len(), session.location()));
    output::print_caches(&caches);
    Ok(())
}
