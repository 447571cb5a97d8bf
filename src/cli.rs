use std::path::PathBuf;

use clap::{Parser, Subcommand};
use snakes_ladders::ladders::{ConfigError, GameConfig};

/// Snakes and ladders on a zigzag board
#[derive(Parser, Debug)]
#[command(name = "snakes_ladders", version, about, long_about = None)]
pub struct Cli {
    /// TOML file overriding the classic board
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the board window (default)
    Play {
        /// Roll automatically whenever the board is idle
        #[arg(long)]
        auto: bool,
    },

    /// Play many games without a window and print statistics
    Simulate {
        #[arg(short, long, default_value = "10000")]
        games: u64,

        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

impl Cli {
    pub fn load_config(&self) -> Result<GameConfig, ConfigError> {
        match &self.config {
            Some(path) => GameConfig::from_file(path),
            None => Ok(GameConfig::default()),
        }
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play { auto: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_is_the_default() {
        let cli = Cli::parse_from(["snakes_ladders"]);
        assert_eq!(cli.command(), Command::Play { auto: false });
        assert!(cli.config.is_none());
    }

    #[test]
    fn simulate_arguments() {
        let cli = Cli::parse_from(["snakes_ladders", "simulate", "--games", "50", "--seed", "3", "-c", "board.toml"]);
        assert_eq!(cli.command(), Command::Simulate { games: 50, seed: 3 });
        assert_eq!(cli.config, Some(PathBuf::from("board.toml")));
    }
}
