//! Islands - command-line entry point
//!
//! Builds games through the library and prints their JSON forms.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use islands::{Game, GameRegistry, Gender, NamesConfig, PlayerHandle, PlayerId, random_name};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let names = NamesConfig::resolve(cli.names_config.as_deref())?;

    match cli.command {
        Command::New {
            player,
            gender,
            name,
        } => run_new(names, player, &gender, name).await,
        Command::Name { random } => {
            let name = if random {
                random_name()
            } else {
                names.haiku_name()
            };
            println!("{name}");
            Ok(())
        }
        Command::Overview { player, gender } => run_overview(names, player, &gender),
    }
}

fn parse_gender(tag: &str) -> Result<Gender> {
    tag.parse::<Gender>()
        .with_context(|| format!("unknown gender tag `{tag}`, expected `m` or `f`"))
}

/// Start a game, notify player 1, and print the game
#[instrument(skip(names))]
async fn run_new(
    names: NamesConfig,
    player: String,
    gender: &str,
    name: Option<String>,
) -> Result<()> {
    let gender = parse_gender(gender)?;
    let (handle, mut inbox) = PlayerHandle::channel();

    let game = match name {
        Some(name) => Game::new(name, player, gender, handle)?,
        None => GameRegistry::new(names).start_game(player, gender, handle)?,
    };

    let game = game.notify_player(PlayerId::Player1);
    if let Some(progress) = inbox.recv().await {
        info!(game = %game.name(), %progress, "Player 1 notified");
    }

    debug!("Serializing game");
    println!("{}", serde_json::to_string_pretty(&game)?);
    Ok(())
}

/// Start a game and print its overview
#[instrument(skip(names))]
fn run_overview(names: NamesConfig, player: String, gender: &str) -> Result<()> {
    let gender = parse_gender(gender)?;
    let (handle, _inbox) = PlayerHandle::channel();
    let game = GameRegistry::new(names).start_game(player, gender, handle)?;
    println!("{}", serde_json::to_string_pretty(&game.overview())?);
    Ok(())
}
