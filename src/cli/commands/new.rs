//! New command - Start a fresh session

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    app::{App, GameConfig},
    cli::{config::SessionArgs, output},
    grid::Point,
};

#[derive(Parser, Debug)]
#[command(about = "Start a new session")]
pub struct NewArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// JSON config file (board parameters and start location)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Starting latitude (overrides the config file)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Starting longitude (overrides the config file)
    #[arg(long, allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Visibility radius in cells (overrides the config file)
    #[arg(long)]
    pub radius: Option<u32>,

    /// Cache spawn probability (overrides the config file)
    #[arg(long)]
    pub spawn_probability: Option<f64>,

    /// Overwrite an existing session file
    #[arg(long)]
    pub force: bool,
}

impl NewArgs {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)
                .with_context(|| format!("failed to read config {}", path.display()))?,
            None => GameConfig::default(),
        };

        let start = config.start;
        config = config.with_start(Point::new(
            self.lat.unwrap_or(start.lat),
            self.lng.unwrap_or(start.lng),
        ));
        if let Some(radius) = self.radius {
            config.board = config.board.with_visibility_radius(radius);
        }
        if let Some(probability) = self.spawn_probability {
            config.board = config.board.with_spawn_probability(probability);
        }
        Ok(config)
    }
}

pub fn execute(args: NewArgs) -> Result<()> {
    let app = App::new();
    if app.has_session(&args.session.session) && !args.force {
        bail!(
            "session {} already exists (use --force to overwrite)",
            args.session.session.display()
        );
    }

    let config = args.game_config()?;
    let mut session = app.new_session(config)?;
    let caches = session.visible_caches()?;
    args.session.save(&app, &session)?;

    output::print_section("New session");
    output::print_kv("Session file", &args.session.session.display().to_string());
    output::print_kv("Tile width", &config.board.tile_width.to_string());
    output::print_kv("Radius", &config.board.visibility_radius.to_string());
    output::print_kv(
        "Spawn probability",
        &config.board.spawn_probability.to_string(),
    );
    output::print_status(&session);
    output::print_kv("Caches in view", &caches.len().to_string());
    Ok(())
}
