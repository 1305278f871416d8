//! CLI argument parsing using clap 4.x derive macros

pub mod simulate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal staff app for a daycare
///
/// Without a command the interactive screen flow starts: login, dashboard,
/// roster, attendance, parent chat and the daily logs.
#[derive(Parser, Debug)]
#[command(name = "daycare-staff")]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print version information
    #[arg(long)]
    pub version: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive TUI (default)
    Interactive,

    /// List screen identifiers with their region and context slot
    Screens {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run navigation steps headlessly, printing the resolved screen after each
    ///
    /// Steps: `login:<name>`, `logout`, `nav:<screen>`, `nav:<screen>:<id>`
    Simulate {
        #[arg(required = true, num_args = 1..)]
        steps: Vec<String>,

        /// Print each state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommand>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file if none exists
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_interactive() {
        let cli = Cli::try_parse_from(["daycare-staff"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.version);
    }

    #[test]
    fn test_simulate_collects_steps() {
        let cli = Cli::try_parse_from([
            "daycare-staff",
            "simulate",
            "login:Alice",
            "nav:childProfile:1",
            "--config",
            "/tmp/x.toml",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Simulate { steps, json }) => {
                assert_eq!(steps, vec!["login:Alice", "nav:childProfile:1"]);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
    }

    #[test]
    fn test_simulate_requires_steps() {
        assert!(Cli::try_parse_from(["daycare-staff", "simulate"]).is_err());
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["daycare-staff", "config", "path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config { cmd: Some(ConfigCommand::Path) })
        ));
    }
}
