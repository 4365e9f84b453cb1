//! Command-line interface for tictac.

use crate::theme::Theme;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictac_rules::Mark;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe for two players or against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a settings file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Mark choice on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// Play X
    X,
    /// Play O
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Two players sharing the terminal
    Duo,

    /// Play against the computer
    Solo {
        /// Mark to play; prompts at the start when omitted
        #[arg(short, long, value_enum)]
        mark: Option<MarkArg>,

        /// Seed for the computer's choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show or change the saved theme
    Theme {
        /// Theme to save (light, dark, colorful-rgb)
        #[arg(long, conflicts_with = "toggle")]
        set: Option<Theme>,

        /// Advance to the next theme
        #[arg(long)]
        toggle: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solo() {
        let cli = Cli::try_parse_from(["tictac", "solo", "--mark", "o", "--seed", "9"]).unwrap();
        match cli.command {
            Command::Solo { mark, seed } => {
                assert_eq!(mark, Some(MarkArg::O));
                assert_eq!(seed, Some(9));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_config() {
        let cli = Cli::try_parse_from(["tictac", "duo", "--config", "tictac.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("tictac.toml")));
    }

    #[test]
    fn test_theme_set_parses_known_names() {
        let cli = Cli::try_parse_from(["tictac", "theme", "--set", "colorful-rgb"]).unwrap();
        match cli.command {
            Command::Theme { set, toggle } => {
                assert_eq!(set, Some(Theme::ColorfulRgb));
                assert!(!toggle);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_theme_set_rejects_unknown_name() {
        assert!(Cli::try_parse_from(["tictac", "theme", "--set", "drak"]).is_err());
    }

    #[test]
    fn test_theme_flags_conflict() {
        assert!(Cli::try_parse_from(["tictac", "theme", "--set", "dark", "--toggle"]).is_err());
    }
}
