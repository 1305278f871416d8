//! `daycare-staff` - terminal staff app for a daycare
//!
//! The interactive mode walks the login, dashboard and per-child screens.
//! The other commands expose the navigation rules and config headlessly.

use anyhow::{Context, Result};
use clap::Parser;
use console::Style;
use daycare_core::config::{self, Config};
use daycare_core::navigation::{ContextSlot, Region, ScreenId};
use daycare_core::{info_log, logger};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::{Cli, Commands, ConfigCommand};

mod cli;
mod tui;

/// Main entry point for the staff app
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        let blue = Style::new().blue();
        println!(
            "{} v{} ({})",
            blue.apply_to("daycare-staff"),
            env!("CARGO_PKG_VERSION"),
            env!("GIT_HASH")
        );
        return Ok(());
    }

    let config = Config::load_or_default(cli.config.as_deref());
    init_logging(&config);

    match cli.command {
        Some(Commands::Screens { json }) => print_screens(json)?,
        Some(Commands::Simulate { steps, json }) => {
            let outcomes = cli::simulate::run(&steps).context("Simulation failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcomes)?);
            } else {
                let dim = Style::new().dim();
                for outcome in &outcomes {
                    let shown = if outcome.current == outcome.resolved {
                        outcome.resolved.to_string()
                    } else {
                        format!("{} (requested {})", outcome.resolved, outcome.current)
                    };
                    println!("{:<24} -> {}", outcome.step, Style::new().cyan().apply_to(shown));
                    let who = if outcome.authenticated {
                        outcome.user_name.as_str()
                    } else {
                        "signed out"
                    };
                    println!(
                        "{}",
                        dim.apply_to(format!(
                            "{:<24}    user: {}  child: {}  chat: {}",
                            "",
                            who,
                            outcome.child.as_deref().unwrap_or("-"),
                            outcome.chat.as_deref().unwrap_or("-")
                        ))
                    );
                }
            }
        }
        Some(Commands::Config { cmd }) => handle_config(cmd, cli.config, &config)?,
        Some(Commands::Interactive) | None => {
            info_log!("[MAIN] starting interactive mode");
            tui::run_tui(config).await?;
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let file = if config.logging.file_enabled {
        config::default_log_path()
    } else {
        None
    };
    if let Some(dir) = file.as_ref().and_then(|path| path.parent()) {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Could not create log directory {}: {}", dir.display(), e);
        }
    }
    logger::init(file, config.logging.max_entries);
    logger::install(log::LevelFilter::Debug);
}

#[derive(Debug, Serialize)]
struct ScreenInfo {
    screen: ScreenId,
    title: &'static str,
    region: Region,
    context: ContextSlot,
    back: Option<ScreenId>,
}

fn screen_table() -> Vec<ScreenInfo> {
    ScreenId::ALL
        .into_iter()
        .map(|screen| ScreenInfo {
            screen,
            title: screen.title(),
            region: screen.region(),
            context: screen.context_slot(),
            back: screen.back_target(),
        })
        .collect()
}

fn print_screens(json: bool) -> Result<()> {
    let table = screen_table();
    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }
    let header = Style::new().bold();
    println!(
        "{}",
        header.apply_to(format!(
            "{:<16} {:<22} {:<16} {:<8} {}",
            "SCREEN", "TITLE", "REGION", "CONTEXT", "BACK"
        ))
    );
    for info in table {
        let region = match info.region {
            Region::Authenticated => "authenticated",
            Region::Unauthenticated => "unauthenticated",
        };
        let context = match info.context {
            ContextSlot::Child => "child",
            ContextSlot::Chat => "chat",
            ContextSlot::None => "-",
        };
        println!(
            "{:<16} {:<22} {:<16} {:<8} {}",
            info.screen.to_string(),
            info.title,
            region,
            context,
            info.back.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())
        );
    }
    Ok(())
}

fn handle_config(cmd: Option<ConfigCommand>, explicit: Option<PathBuf>, config: &Config) -> Result<()> {
    let path = explicit.or_else(Config::default_path);
    match cmd.unwrap_or(ConfigCommand::Show) {
        ConfigCommand::Show => {
            print!("{}", toml::to_string_pretty(config).context("Failed to render configuration")?);
        }
        ConfigCommand::Path => match path {
            Some(path) => println!("{}", path.display()),
            None => anyhow::bail!("Could not determine a config directory"),
        },
        ConfigCommand::Init => {
            let path = path.context("Could not determine a config directory")?;
            if path.exists() {
                println!("Config already exists at {}", path.display());
            } else {
                Config::default()
                    .save(&path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!(
                    "{} {}",
                    Style::new().green().apply_to("Created"),
                    path.display()
                );
            }
        }
    }
    Ok(())
}
