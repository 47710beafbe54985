use crate::config::Config;
use crate::diagnostics::Diagnostic;
use crate::errors::AppResult;
use crate::layout::{Composition, PageComposer, render};
use crate::model::{Schedule, load_document};
use crate::render::{DocumentInfo, PdfSurface};
use crate::utils::fs::ensure_parent_dir;
use std::path::Path;

/// Outcome of a render or check run.
#[derive(Debug)]
pub struct RenderSummary {
    pub pages: usize,
    pub events: usize,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct RenderLogic;

impl RenderLogic {
    /// Load, normalise and lay out a document.
    pub fn compose(input: &Path, cfg: &Config) -> AppResult<(Schedule, Composition)> {
        log::info!("reading wap definition at {}", input.display());
        let doc = load_document(input)?;
        let (schedule, mut diagnostics) = Schedule::from_document(&doc, &cfg.default_category)?;

        let mut composition = PageComposer::new(cfg).compose(&schedule)?;
        diagnostics.append(&mut composition.diagnostics);
        composition.diagnostics = diagnostics;

        Ok((schedule, composition))
    }

    /// Lay out `input` without writing anything.
    pub fn check(input: &Path, cfg: &Config) -> AppResult<RenderSummary> {
        let (schedule, composition) = Self::compose(input, cfg)?;
        Ok(RenderSummary {
            pages: composition.pages.len(),
            events: schedule.event_count(),
            diagnostics: composition.diagnostics,
        })
    }

    /// Render `input` to a PDF at `output`, creating missing parent
    /// directories once composition has succeeded.
    pub fn render(input: &Path, output: &Path, cfg: &Config) -> AppResult<RenderSummary> {
        let (schedule, composition) = Self::compose(input, cfg)?;

        let mut surface = PdfSurface::new(DocumentInfo {
            title: composition.title.clone(),
            author: composition.author.clone(),
            producer: format!("{} {}", cfg.producer, env!("CARGO_PKG_VERSION")),
        });
        render(&composition, &mut surface)?;

        ensure_parent_dir(output)?;
        log::info!("writing pdf to {}", output.display());
        surface.save(output)?;

        Ok(RenderSummary {
            pages: composition.pages.len(),
            events: schedule.event_count(),
            diagnostics: composition.diagnostics,
        })
    }
}
