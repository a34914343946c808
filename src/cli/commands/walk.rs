//! Move command - Walk the player across the grid

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    app::App,
    cli::{config::SessionArgs, output},
    grid::{Direction, Point},
};

#[derive(Parser, Debug)]
#[command(about = "Move the player")]
pub struct MoveArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Steps to take, as letters n/s/e/w (e.g. `nnee` or `n n e e`)
    #[arg(required_unless_present_any = ["lat", "lng"])]
    pub steps: Vec<String>,

    /// Jump to this latitude instead of stepping
    #[arg(long, allow_negative_numbers = true, requires = "lng", conflicts_with = "steps")]
    pub lat: Option<f64>,

    /// Jump to this longitude instead of stepping
    #[arg(long, allow_negative_numbers = true, requires = "lat", conflicts_with = "steps")]
    pub lng: Option<f64>,
}

/// Parse step letters, ignoring whitespace between them.
pub fn parse_steps(steps: &[String]) -> Result<Vec<Direction>> {
    steps
        .iter()
        .flat_map(|chunk| chunk.chars())
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            Direction::from_char(c).ok_or_else(|| anyhow!("invalid step '{c}' (expected n, s, e or w)"))
        })
        .collect()
}

pub fn execute(args: MoveArgs) -> Result<()> {
    let app = App::new();
    let mut session = args.session.load(&app)?;

    match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => session.teleport(Point::new(lat, lng))?,
        _ => {
            for direction in parse_steps(&args.steps)? {
                session.step(direction)?;
            }
        }
    }

    let caches = session.visible_caches()?;
    args.session.save(&app, &session)?;

    output::print_section("Moved");
    output::print_status(&session);
    output::print_kv("Caches in view", &caches.len().to_string());
    Ok(())
}
