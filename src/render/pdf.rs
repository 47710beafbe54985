use crate::errors::{AppError, AppResult};
use crate::layout::{DrawOp, RenderSurface, TextBlock};
use crate::model::Color;
use crate::render::encoding::to_winansi;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str, TextStr};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

/// Metadata written to the PDF info dictionary.
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: String,
    pub author: Option<String>,
    pub producer: String,
}

struct PageRefs {
    page_id: Ref,
    content_id: Ref,
    width: f32,
    height: f32,
}

/// `RenderSurface` that writes a PDF with pdf-writer.
pub struct PdfSurface {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    info_id: Ref,
    pages: Vec<PageRefs>,
    current: Option<Content>,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,
    /// Fill alpha (0..=255) → graphics state name and object.
    alpha_states: BTreeMap<u8, (String, Ref)>,

    info: DocumentInfo,
}

impl PdfSurface {
    pub fn new(info: DocumentInfo) -> Self {
        let mut pdf = Pdf::new();

        // IDs are assigned by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let info_id = Ref::new(3);
        let font_id = Ref::new(4);
        let bold_font_id = Ref::new(5);
        let next_id = 6;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            info_id,
            pages: Vec::new(),
            current: None,
            next_id,
            font_id,
            bold_font_id,
            alpha_states: BTreeMap::new(),
            info,
        }
    }

    /// Allocate a new unique Ref
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Graphics state name for a fill alpha, created on first use.
    fn alpha_state(&mut self, alpha: f32) -> Name<'_> {
        let key = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        if !self.alpha_states.contains_key(&key) {
            let id = self.fresh_ref();
            self.pdf
                .ext_graphics(id)
                .non_stroking_alpha(key as f32 / 255.0);
            let name = format!("GS{}", self.alpha_states.len() + 1);
            self.alpha_states.insert(key, (name, id));
        }
        Name(self.alpha_states[&key].0.as_bytes())
    }

    fn content(&mut self) -> AppResult<&mut Content> {
        self.current
            .as_mut()
            .ok_or_else(|| AppError::Render("no open page, call begin_page first".to_string()))
    }

    fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, bold: bool, text: &str) {
        let font = if bold { FONT_BOLD } else { FONT_REGULAR };
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&to_winansi(text)));
        content.end_text();
    }

    fn draw_text_block(content: &mut Content, block: &TextBlock) {
        content.save_state();
        content.set_fill_rgb(0.0, 0.0, 0.0);
        for (line, baseline) in block.baselines() {
            Self::draw_text(
                content,
                block.x,
                baseline,
                block.font_size,
                line.bold,
                &line.text,
            );
        }
        content.restore_state();
    }

    fn draw_event(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Color,
        stroke: Color,
    ) -> AppResult<()> {
        let state = if fill.is_opaque() {
            None
        } else {
            Some(self.alpha_state(fill.a).0.to_vec())
        };

        let content = self.content()?;
        content.save_state();
        if let Some(state) = &state {
            content.set_parameters(Name(state));
        }
        content.set_fill_rgb(fill.r, fill.g, fill.b);
        content.set_stroke_rgb(stroke.r, stroke.g, stroke.b);
        content.rect(x, y, w, h);
        content.fill_nonzero_and_stroke();
        content.restore_state();
        Ok(())
    }

    /// Write page dictionaries with their resources
    fn build_pages_tree(&mut self) {
        let states: Vec<(String, Ref)> = self.alpha_states.values().cloned().collect();

        for p in &self.pages {
            let mut page = self.pdf.page(p.page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, p.width, p.height))
                .contents(p.content_id);

            let mut resources = page.resources();
            resources
                .fonts()
                .pair(FONT_REGULAR, self.font_id)
                .pair(FONT_BOLD, self.bold_font_id);
            if !states.is_empty() {
                let mut ext = resources.ext_g_states();
                for (name, id) in &states {
                    ext.pair(Name(name.as_bytes()), *id);
                }
            }
        }

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.pages.len() as i32);
        pages.kids(self.pages.iter().map(|p| p.page_id));
    }

    /// Finish the document and return its bytes.
    pub fn finish(mut self) -> Vec<u8> {
        // Build Catalog + Pages only once, here
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let mut info = self.pdf.document_info(self.info_id);
        info.title(TextStr(&self.info.title));
        if let Some(author) = &self.info.author {
            info.author(TextStr(author));
        }
        info.producer(TextStr(&self.info.producer));
        drop(info);

        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> AppResult<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

impl RenderSurface for PdfSurface {
    fn begin_page(&mut self, width: f32, height: f32) -> AppResult<()> {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.pages.push(PageRefs {
            page_id,
            content_id,
            width,
            height,
        });
        self.current = Some(Content::new());
        Ok(())
    }

    fn draw(&mut self, op: &DrawOp) -> AppResult<()> {
        match op {
            DrawOp::Translate { dx, dy } => {
                self.content()?.transform([1.0, 0.0, 0.0, 1.0, *dx, *dy]);
            }
            DrawOp::Lines {
                segments,
                stroke,
                width,
            } => {
                let content = self.content()?;
                content.save_state();
                content.set_stroke_rgb(stroke.r, stroke.g, stroke.b);
                content.set_line_width(*width);
                for s in segments {
                    content.move_to(s.x1 as f32, s.y1 as f32);
                    content.line_to(s.x2 as f32, s.y2 as f32);
                }
                content.stroke();
                content.restore_state();
            }
            DrawOp::Text {
                x,
                y,
                text,
                size,
                bold,
            } => {
                Self::draw_text(self.content()?, *x, *y, *size, *bold, text);
            }
            DrawOp::Event {
                rect,
                fill,
                stroke,
                text,
                ..
            } => {
                self.draw_event(
                    rect.x as f32,
                    rect.y as f32,
                    rect.width as f32,
                    rect.height as f32,
                    *fill,
                    *stroke,
                )?;
                Self::draw_text_block(self.content()?, text);
            }
        }
        Ok(())
    }

    /// Write the stream of the current page
    fn end_page(&mut self) -> AppResult<()> {
        let content = self
            .current
            .take()
            .ok_or_else(|| AppError::Render("end_page without begin_page".to_string()))?;
        if let Some(page) = self.pages.last() {
            self.pdf.stream(page.content_id, &content.finish());
        }
        Ok(())
    }
}
