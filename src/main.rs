mod config;
mod controller;
mod logging;
mod store;
mod surfaces;
mod theme;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use dotenvy::dotenv;
use tracing::info;

use crate::config::AppConfig;
use crate::controller::{ActivationSurface, ThemeController};
use crate::store::FileStore;
use crate::surfaces::{ROOT_ATTRIBUTE, SharedText, SurfaceBindings};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "shade",
    version,
    about = "Theme preference controller (CLI/TUI)"
)]
pub struct Cli {
    /// Use one-shot CLI mode (disable TUI)
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_tui: bool,

    /// Log level (error,warn,info,debug,trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Prefs file path (default: user config dir)
    #[arg(long)]
    pub prefs: Option<PathBuf>,

    /// One-shot command; implies --no-tui
    #[arg(value_enum)]
    pub command: Option<CliCommand>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the resolved theme and surface values
    Status,
    /// Toggle the theme once and print the announcement
    Toggle,
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    let command = cli.command;
    let cfg = AppConfig::from_cli(cli)?;

    let one_shot = cfg.no_tui || command.is_some();
    logging::init(&cfg.log_level, one_shot)?;
    info!(?cfg, "app config");

    if one_shot {
        run_once(&cfg, command.unwrap_or(CliCommand::Status))
    } else {
        tui::run(cfg)
    }
}

/// Plain-text rendition of the same controller the TUI drives.
fn run_once(cfg: &AppConfig, command: CliCommand) -> Result<()> {
    let store = FileStore::new(cfg.prefs_path.clone());
    let root = SharedText::new();
    let icon = SharedText::new();
    let label = SharedText::new();
    let bindings = SurfaceBindings::new(root.clone())
        .with_icon(icon.clone())
        .with_label(label.clone());
    let mut controller = ThemeController::load(store, bindings);

    match command {
        CliCommand::Status => {
            println!("{ROOT_ATTRIBUTE}={}", root.get());
            println!("icon={} label={}", icon.get(), label.get());
        }
        CliCommand::Toggle => {
            controller.toggle(ActivationSurface::Desktop);
            if let Some(region) = controller.live_region() {
                info!(
                    role = region.role(),
                    aria_live = region.politeness(),
                    "announcement emitted"
                );
                println!("{}", region.text());
            }
            println!("{ROOT_ATTRIBUTE}={}", root.get());
        }
    }
    Ok(())
}
