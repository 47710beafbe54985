use crate::config::Config;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::layout::placer::{DisplayText, PlacementRect};
use textwrap::Options;
use unicode_width::UnicodeWidthStr;

/// Bold glyphs run wider than regular ones.
const BOLD_WIDTH_FACTOR: f32 = 1.1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub bold: bool,
}

/// Wrapped text anchored at its bottom-left corner, in grid points.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub x: f32,
    pub y: f32,
    /// Measured size of the wrapped text.
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    pub leading: f32,
    pub lines: Vec<TextLine>,
}

impl TextBlock {
    /// Baseline of each line, top to bottom.
    pub fn baselines(&self) -> impl Iterator<Item = (&TextLine, f32)> {
        let top = self.y + self.height;
        self.lines
            .iter()
            .enumerate()
            .map(move |(i, l)| (l, top - self.font_size - i as f32 * self.leading))
    }
}

/// Wraps event text into its placement rectangle and measures the result.
///
/// Glyph widths are approximated from display columns, which is what the
/// builtin PDF fonts need without embedding metrics.
#[derive(Debug, Clone, Copy)]
pub struct TextFitter {
    font_size: f32,
    leading: f32,
    char_width: f32,
    correction: f32,
}

impl TextFitter {
    pub fn new(font_size: f32, leading: f32, char_width: f32, correction: f32) -> Self {
        Self {
            font_size,
            leading,
            char_width,
            correction,
        }
    }

    /// Metrics from `cfg`; the correction is `text_correction_cols` grid
    /// columns of `col_width` points each.
    pub fn from_config(cfg: &Config, col_width: i32) -> Self {
        Self::new(
            cfg.font_size,
            cfg.font_size * cfg.leading_factor,
            cfg.font_size * cfg.char_width_factor,
            (cfg.text_correction_cols as i32 * col_width) as f32,
        )
    }

    /// Same metrics at another font size, for labels and headers.
    pub fn with_font_size(&self, size: f32) -> Self {
        let ratio = size / self.font_size;
        Self::new(
            size,
            self.leading * ratio,
            self.char_width * ratio,
            self.correction,
        )
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    fn glyph_width(&self, bold: bool) -> f32 {
        if bold {
            self.char_width * BOLD_WIDTH_FACTOR
        } else {
            self.char_width
        }
    }

    pub fn measure(&self, text: &str, bold: bool) -> f32 {
        UnicodeWidthStr::width(text) as f32 * self.glyph_width(bold)
    }

    /// Wrap at word boundaries only; a word longer than the line stays whole.
    pub fn wrap(&self, text: &DisplayText, max_width: f32) -> Vec<TextLine> {
        let paragraphs = std::iter::once((text.title.as_str(), true))
            .chain(text.details.iter().map(|d| (d.as_str(), false)));

        let mut lines = Vec::new();
        for (para, bold) in paragraphs {
            if para.trim().is_empty() {
                continue;
            }
            let cols = ((max_width / self.glyph_width(bold)).floor() as usize).max(1);
            let opts = Options::new(cols).break_words(false);
            lines.extend(textwrap::wrap(para, opts).into_iter().map(|l| TextLine {
                text: l.into_owned(),
                bold,
            }));
        }
        lines
    }

    /// Fit `text` into `rect`, reporting overflow as diagnostics.
    pub fn fit(&self, text: &DisplayText, rect: &PlacementRect) -> (TextBlock, Vec<Diagnostic>) {
        let limit_w = rect.width as f32 + self.correction;
        let lines = self.wrap(text, limit_w);

        let actual_w = lines
            .iter()
            .map(|l| self.measure(&l.text, l.bold))
            .fold(0.0, f32::max);
        let actual_h = lines.len() as f32 * self.leading;

        let mut diagnostics = Vec::new();
        if actual_w > limit_w {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::TextTooWide,
                format!(
                    "Text too wide in '{}': {actual_w:.1} > {limit_w:.1}",
                    text.title
                ),
            ));
        }
        if actual_h > rect.height as f32 {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::TextTooHigh,
                format!(
                    "Text too high in '{}': {actual_h:.1} > {}",
                    text.title, rect.height
                ),
            ));
        }

        let block = TextBlock {
            x: rect.x as f32 - self.correction,
            y: (rect.y + rect.height) as f32 - actual_h + 1.0,
            width: actual_w,
            height: actual_h,
            font_size: self.font_size,
            leading: self.leading,
            lines,
        };
        (block, diagnostics)
    }
}
