//! Page composition: grid, labels and events for each day group, emitted as
//! an ordered draw list. Later operations paint over earlier ones.

use crate::config::Config;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::errors::AppResult;
use crate::layout::columns::{ColumnAllocator, ColumnAssignment};
use crate::layout::grid::{GridGeometry, LineSegment};
use crate::layout::placer::{EventPlacer, EventRef, PlacementRect, RepeatingSet};
use crate::layout::text::{TextBlock, TextFitter};
use crate::layout::time_mapper::TimeMapper;
use crate::model::{Color, Event, Schedule};
use crate::utils::date::day_label;
use std::collections::BTreeMap;

/// Distance between the grid top and the column header baseline.
const COLUMN_HEADER_GAP: f32 = 4.0;
/// Distance between the grid top and the day header baseline, one line
/// above the column headers.
const DAY_HEADER_GAP: f32 = 14.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Shift the origin of all following operations on this page.
    Translate { dx: f32, dy: f32 },
    Lines {
        segments: Vec<LineSegment>,
        stroke: Color,
        width: f32,
    },
    /// Single line of text with its baseline at `y`.
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        bold: bool,
    },
    Event {
        rect: PlacementRect,
        /// Offset of the day the event is drawn on.
        day_offset: u32,
        fill: Color,
        stroke: Color,
        text: TextBlock,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Day-group index: `day.offset / days_per_page`.
    pub index: u32,
    pub width: f32,
    pub height: f32,
    pub ops: Vec<DrawOp>,
}

impl Page {
    pub fn events(&self) -> impl Iterator<Item = (&PlacementRect, u32)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Event {
                rect, day_offset, ..
            } => Some((rect, *day_offset)),
            _ => None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Composition {
    pub title: String,
    pub author: Option<String>,
    pub pages: Vec<Page>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Page or canvas that receives the draw list.
pub trait RenderSurface {
    fn begin_page(&mut self, width: f32, height: f32) -> AppResult<()>;
    fn draw(&mut self, op: &DrawOp) -> AppResult<()>;
    fn end_page(&mut self) -> AppResult<()>;
}

/// Replay a composition on a surface, page by page.
pub fn render<S: RenderSurface + ?Sized>(composition: &Composition, surface: &mut S) -> AppResult<()> {
    for page in &composition.pages {
        surface.begin_page(page.width, page.height)?;
        for op in &page.ops {
            surface.draw(op)?;
        }
        surface.end_page()?;
    }
    Ok(())
}

pub struct PageComposer<'c> {
    cfg: &'c Config,
}

impl<'c> PageComposer<'c> {
    pub fn new(cfg: &'c Config) -> Self {
        Self { cfg }
    }

    pub fn compose(&self, schedule: &Schedule) -> AppResult<Composition> {
        let cfg = self.cfg;
        let meta = &schedule.meta;

        let (avail_w, avail_h) = cfg.available_area();
        let grid = GridGeometry::new(
            avail_w,
            avail_h,
            meta.end_hour() - meta.start_hour(),
            cfg.inner_rows,
            cfg.days_per_page,
            cfg.inner_cols,
        )?;
        let mapper = TimeMapper::new(
            meta.start,
            meta.end,
            grid.row_height,
            cfg.granularity_minutes,
            cfg.inner_rows,
        );
        let allocator = ColumnAllocator::new(cfg.inner_cols, cfg.overflow_label.as_str());
        let placer = EventPlacer::new(&mapper, grid.col_width);
        let fitter = TextFitter::from_config(cfg, grid.col_width);

        let mut diagnostics = Vec::new();
        let mut repeating = RepeatingSet::new();
        // page index -> (column headers, events)
        let mut day_ops: BTreeMap<u32, (Vec<DrawOp>, Vec<DrawOp>)> = BTreeMap::new();

        // Days run in document order so repeating events carry forward
        // exactly as written, whatever page they land on.
        for (day_idx, day) in schedule.days.iter().enumerate() {
            let page = day.offset / cfg.days_per_page;
            let day_x = grid.day_x(day.offset % cfg.days_per_page);

            let labels = allocator.columns_for_day(day.events.iter().chain(repeating.events()));
            let assignment = allocator.assign(&labels)?;

            let (headers, ops) = day_ops.entry(page).or_default();
            if !labels.is_empty() {
                headers.extend(self.column_headers(&grid, &fitter, day_x, &assignment));
            }

            let carried: Vec<(EventRef, &Event)> = repeating.iter().collect();
            let own = day.events.iter().enumerate().map(|(i, e)| {
                (
                    EventRef {
                        day: day_idx,
                        event: i,
                    },
                    e,
                )
            });

            for (source, event) in carried.into_iter().chain(own) {
                let placement = placer.place(event, source, day_x, &assignment);
                if placement.column.is_none() && !event.columns.is_empty() {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticKind::UnmatchedColumn,
                        format!(
                            "'{}' on day {} matches none of the day's columns",
                            event.title, day.offset
                        ),
                    ));
                }

                let (text, overflow) = fitter.fit(&placement.text, &placement.rect);
                diagnostics.extend(overflow);

                ops.push(DrawOp::Event {
                    rect: placement.rect,
                    day_offset: day.offset,
                    fill: schedule.categories.color_for(&event.category),
                    stroke: Color::BLACK,
                    text,
                });

                if event.repeats && source.day == day_idx {
                    repeating.push(source, event);
                }
            }
        }

        if day_ops.is_empty() {
            day_ops.insert(0, Default::default());
        }

        let total = day_ops.len();
        let pages = day_ops
            .into_iter()
            .enumerate()
            .map(|(n, (index, (headers, events)))| {
                let mut ops = self.page_frame(schedule, &grid, &mapper, &fitter, index, n + 1, total);
                ops.extend(headers);
                ops.extend(events);
                Page {
                    index,
                    width: cfg.page_width,
                    height: cfg.page_height,
                    ops,
                }
            })
            .collect();

        Ok(Composition {
            title: meta.title.clone(),
            author: meta.author.clone(),
            pages,
            diagnostics,
        })
    }

    /// One bold label per sub-column, centred over its slot just above the
    /// grid. Labels wider than their slot start at the slot's left edge.
    fn column_headers(
        &self,
        grid: &GridGeometry,
        fitter: &TextFitter,
        day_x: i32,
        assignment: &ColumnAssignment,
    ) -> Vec<DrawOp> {
        let y = grid.height() as f32 + COLUMN_HEADER_GAP;
        assignment
            .slots()
            .iter()
            .map(|slot| {
                let x = (day_x + slot.x_units as i32 * grid.col_width) as f32;
                let w = (slot.width_units as i32 * grid.col_width) as f32;
                let label_w = fitter.measure(&slot.label, true);
                DrawOp::Text {
                    x: x + ((w - label_w) / 2.0).max(0.0),
                    y,
                    text: slot.label.clone(),
                    size: fitter.font_size(),
                    bold: true,
                }
            })
            .collect()
    }

    /// Header, footer, grid and axis labels: everything drawn before events.
    #[allow(clippy::too_many_arguments)]
    fn page_frame(
        &self,
        schedule: &Schedule,
        grid: &GridGeometry,
        mapper: &TimeMapper,
        fitter: &TextFitter,
        page_index: u32,
        page_no: usize,
        page_total: usize,
    ) -> Vec<DrawOp> {
        let cfg = self.cfg;
        let meta = &schedule.meta;
        let (w, h) = (cfg.page_width, cfg.page_height);
        let header = fitter.with_font_size(cfg.header_font_size);
        let label = fitter.with_font_size(cfg.label_font_size);
        let mut ops = Vec::new();

        let text = |x: f32, y: f32, text: &str, size: f32, bold: bool| DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            size,
            bold,
        };

        // Header: unit | title | version
        let header_y = h - 20.0;
        let title_w = header.measure(&meta.title, true);
        ops.push(text((w - title_w) / 2.0, header_y, &meta.title, header.font_size(), true));
        if let Some(unit) = &meta.unit {
            ops.push(text(40.0, header_y, unit, header.font_size(), false));
        }
        let version_w = header.measure(&meta.version, false);
        ops.push(text(w - 20.0 - version_w, header_y, &meta.version, header.font_size(), false));

        // Footer: producer | page
        let footer = format!("made with {} {}", cfg.producer, env!("CARGO_PKG_VERSION"));
        let footer_w = label.measure(&footer, false);
        ops.push(text((w - footer_w) / 2.0, 20.0, &footer, label.font_size(), false));
        let pages = format!("{page_no}/{page_total}");
        let pages_w = label.measure(&pages, false);
        ops.push(text(w - 20.0 - pages_w, 20.0, &pages, label.font_size(), false));

        let margin = cfg.margin as f32;
        ops.push(DrawOp::Translate {
            dx: margin,
            dy: margin,
        });

        ops.push(DrawOp::Lines {
            segments: grid.fine_lines(),
            stroke: Color::GRID_FINE,
            width: 0.5,
        });
        ops.push(DrawOp::Lines {
            segments: grid.coarse_lines(),
            stroke: Color::GRID_COARSE,
            width: 1.0,
        });

        for (hour, y) in mapper.hour_labels() {
            ops.push(text(-20.0, y as f32 - 4.0, &hour, label.font_size(), false));
        }

        if let Some(first_day) = meta.first_day {
            let day_font = label.with_font_size(cfg.font_size);
            for slot in 0..cfg.days_per_page {
                let offset = page_index * cfg.days_per_page + slot;
                ops.push(text(
                    grid.day_x(slot) as f32 + 2.0,
                    grid.height() as f32 + DAY_HEADER_GAP,
                    &day_label(first_day, offset),
                    day_font.font_size(),
                    true,
                ));
            }
        }

        ops
    }
}
