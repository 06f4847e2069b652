//! Command-line interface for islands.

use clap::{Parser, Subcommand};

/// Islands - game aggregate inspector
#[derive(Parser, Debug)]
#[command(name = "islands")]
#[command(about = "Build and inspect Game of Islands games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with `adjectives` and `nouns` lists (overrides ISLANDS_NAMES_CONFIG)
    #[arg(long, global = true)]
    pub names_config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a game, notify player 1 and print the game as JSON
    New {
        /// Name of the starting player
        #[arg(short, long)]
        player: String,

        /// Gender tag of the starting player (m or f)
        #[arg(short, long, default_value = "f")]
        gender: String,

        /// Game name (a haiku name is generated if omitted)
        #[arg(long)]
        name: Option<String>,
    },

    /// Print a generated game name
    Name {
        /// Print a random URL-safe token instead of a haiku name
        #[arg(long)]
        random: bool,
    },

    /// Start a game and print its public overview
    Overview {
        /// Name of the starting player
        #[arg(short, long)]
        player: String,

        /// Gender tag of the starting player (m or f)
        #[arg(short, long, default_value = "f")]
        gender: String,
    },
}
