use crate::cli::commands::report_diagnostics;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::render::RenderLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::fs::ensure_writable;
use crate::utils::path::{default_output_for, expand_tilde};

/// Handle the `render` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        input,
        output,
        force,
    } = cmd
    {
        let input = expand_tilde(input);
        let output = output
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| default_output_for(&input));

        ensure_writable(&output, *force)?;

        info(format!("Rendering {}", input.display()));
        let summary = RenderLogic::render(&input, &output, cfg)?;
        report_diagnostics(&summary.diagnostics);

        success(format!(
            "PDF written: {} ({} page(s), {} event(s))",
            output.display(),
            summary.pages,
            summary.events
        ));
    }
    Ok(())
}
