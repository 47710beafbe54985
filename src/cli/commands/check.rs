use crate::cli::commands::report_diagnostics;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::render::RenderLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Handle the `check` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { input } = cmd {
        let input = expand_tilde(input);
        let summary = RenderLogic::check(&input, cfg)?;
        report_diagnostics(&summary.diagnostics);

        success(format!(
            "{}: {} page(s), {} event(s), {} warning(s)",
            input.display(),
            summary.pages,
            summary.events,
            summary.diagnostics.len()
        ));
    }
    Ok(())
}
