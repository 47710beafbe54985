//! wap-render library root.
//! Exposes the CLI parser, the high-level run() function and the layout engine.

pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod errors;
pub mod layout;
pub mod model;
pub mod render;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Render { .. } => cli::commands::render::handle(&cli.command, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Schema { .. } => cli::commands::schema::handle(&cli.command),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, config_path(cli))
        }
    }
}

fn config_path(cli: &Cli) -> Option<PathBuf> {
    cli.config.as_deref().map(expand_tilde)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load the configuration ONCE
    let cfg = Config::load(config_path(&cli).as_deref())?;

    dispatch(&cli, &cfg)
}
