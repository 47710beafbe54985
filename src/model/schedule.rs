//! Normalised schedule: times parsed, colours decoded, categories resolved.

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::errors::{AppError, AppResult};
use crate::model::color::Color;
use crate::model::document::{CategoryDef, DayDef, EventDef, Meta, Repeats, WapDocument};
use crate::utils::date::{parse_date, today};
use crate::utils::time::DayTime;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Events shorter than this are hard to read on the page.
pub const MIN_EVENT_MINUTES: i64 = 10;

#[derive(Debug, Clone)]
pub struct ScheduleMeta {
    pub title: String,
    pub unit: Option<String>,
    pub version: String,
    pub author: Option<String>,
    pub start: DayTime,
    pub end: DayTime,
    pub first_day: Option<NaiveDate>,
}

impl ScheduleMeta {
    fn from_meta(meta: &Meta) -> AppResult<Self> {
        let start = meta.start_time.to_day_time()?;
        let end = meta.end_time.to_day_time()?;
        if start >= end {
            return Err(AppError::Configuration(format!(
                "startTime {start} must be before endTime {end}"
            )));
        }

        let first_day = meta.first_day.as_deref().map(parse_date).transpose()?;

        Ok(Self {
            title: meta.title.clone().unwrap_or_else(|| "WAP".to_string()),
            unit: meta.unit.clone(),
            version: meta
                .version
                .clone()
                .unwrap_or_else(|| today().format("%Y-%m-%d").to_string()),
            author: meta.author.clone(),
            start,
            end,
            first_day,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }

    pub fn end_hour(&self) -> u32 {
        self.end.hour()
    }
}

/// Category identifier → fill colour.
#[derive(Debug, Clone, Default)]
pub struct Categories {
    colors: HashMap<String, Color>,
}

impl Categories {
    pub fn from_defs(defs: &[CategoryDef]) -> AppResult<Self> {
        let colors = defs
            .iter()
            .map(|c| Ok((c.identifier.clone(), Color::parse(&c.color)?)))
            .collect::<AppResult<HashMap<_, _>>>()?;
        Ok(Self { colors })
    }

    pub fn get(&self, identifier: &str) -> Option<Color> {
        self.colors.get(identifier).copied()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.colors.contains_key(identifier)
    }

    /// Colour for `identifier`, or the default grey when it is undefined.
    pub fn color_for(&self, identifier: &str) -> Color {
        self.get(identifier).unwrap_or(Color::DEFAULT_FILL)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub title: String,
    pub description: Option<String>,
    pub responsible: Option<String>,
    pub location: Option<String>,
    pub start: DayTime,
    pub end: DayTime,
    pub columns: BTreeSet<String>,
    pub category: String,
    pub repeats: bool,
    pub footnote: bool,
}

impl Event {
    fn from_def(def: &EventDef, default_category: &str) -> AppResult<Self> {
        let start = def.start.to_day_time()?;
        let end = def.end.to_day_time()?;
        if end < start {
            return Err(AppError::InvalidEvent(format!(
                "'{}' ends at {end} before it starts at {start}",
                def.title
            )));
        }

        Ok(Self {
            title: def.title.clone(),
            description: non_empty(&def.description),
            responsible: non_empty(&def.responsible),
            location: non_empty(&def.location),
            start,
            end,
            columns: def.columns.iter().cloned().collect(),
            category: def
                .category
                .clone()
                .unwrap_or_else(|| default_category.to_string()),
            repeats: def.repeats == Repeats::Daily,
            footnote: def.footnote,
        })
    }

    pub fn duration_minutes(&self) -> i64 {
        self.start.minutes_until(self.end)
    }

    pub fn appears_in(&self, label: &str) -> bool {
        self.columns.contains(label)
    }
}

fn non_empty(s: &Option<String>) -> Option<String> {
    s.as_ref()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone)]
pub struct Day {
    pub offset: u32,
    pub events: Vec<Event>,
}

impl Day {
    fn from_def(def: &DayDef, default_category: &str) -> AppResult<Self> {
        let events = def
            .events
            .iter()
            .map(|e| Event::from_def(e, default_category))
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Self {
            offset: def.offset,
            events,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Schedule {
    pub meta: ScheduleMeta,
    pub categories: Categories,
    pub days: Vec<Day>,
}

impl Schedule {
    /// Normalise a decoded document.
    ///
    /// Format problems (times, colours, reversed events) are fatal; anything
    /// that still renders is returned as a diagnostic.
    pub fn from_document(
        doc: &WapDocument,
        default_category: &str,
    ) -> AppResult<(Self, Vec<Diagnostic>)> {
        let meta = ScheduleMeta::from_meta(&doc.meta)?;
        let categories = Categories::from_defs(&doc.categories)?;
        let days = doc
            .days
            .iter()
            .map(|d| Day::from_def(d, default_category))
            .collect::<AppResult<Vec<_>>>()?;

        let schedule = Self {
            meta,
            categories,
            days,
        };
        let diagnostics = schedule.check(default_category);
        Ok((schedule, diagnostics))
    }

    pub fn event_count(&self) -> usize {
        self.days.iter().map(|d| d.events.len()).sum()
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.days.iter().flat_map(|d| d.events.iter())
    }

    fn check(&self, default_category: &str) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        let mut seen_offsets = HashSet::new();

        for day in &self.days {
            if !seen_offsets.insert(day.offset) {
                out.push(Diagnostic::new(
                    DiagnosticKind::DuplicateOffset,
                    format!("day offset {} is used more than once", day.offset),
                ));
            }

            for event in &day.events {
                let label = format!("'{}' ({}-{})", event.title, event.start, event.end);

                if event.duration_minutes() < MIN_EVENT_MINUTES {
                    out.push(Diagnostic::new(
                        DiagnosticKind::ShortEvent,
                        format!(
                            "{label} lasts {} min and will not be properly displayed, recommended at least {MIN_EVENT_MINUTES} min",
                            event.duration_minutes()
                        ),
                    ));
                }
                if event.start < self.meta.start {
                    out.push(Diagnostic::new(
                        DiagnosticKind::OutsideTimeWindow,
                        format!("{label} starts before the day start {}", self.meta.start),
                    ));
                }
                if event.end > self.meta.end {
                    out.push(Diagnostic::new(
                        DiagnosticKind::OutsideTimeWindow,
                        format!("{label} ends after the day end {}", self.meta.end),
                    ));
                }
                if event.category != default_category && !self.categories.contains(&event.category)
                {
                    out.push(Diagnostic::new(
                        DiagnosticKind::UnknownCategory,
                        format!("{label} uses undefined category '{}'", event.category),
                    ));
                }
                if event.columns.is_empty() {
                    out.push(Diagnostic::new(
                        DiagnosticKind::NoColumns,
                        format!("{label} does not appear in any column"),
                    ));
                }
            }
        }

        out
    }
}
