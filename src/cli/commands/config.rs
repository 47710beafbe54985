use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::PathBuf;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: Option<PathBuf>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        edit_config,
        editor,
    } = cmd
    {
        let path = path.unwrap_or_else(Config::config_file);

        if *init {
            let written = Config::init(Some(&path))?;
            success(format!("Config file: {}", written.display()));
        }

        if *print_config {
            info(format!("Current configuration ({}):", path.display()));
            ConfigLogic::print(cfg)?;
        }

        if *edit_config {
            if !path.exists() {
                Config::init(Some(&path))?;
            }
            ConfigLogic::edit(&path, editor)?;
            success(format!("Configuration file edited: {}", path.display()));
        }
    }
    Ok(())
}
