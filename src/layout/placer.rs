use crate::layout::columns::ColumnAssignment;
use crate::layout::time_mapper::TimeMapper;
use crate::model::Event;

/// Identifies an event by its position in the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventRef {
    /// Index into `Schedule::days`.
    pub day: usize,
    /// Index into that day's events.
    pub event: usize,
}

/// Event rectangle in grid points (origin at the grid's bottom-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub source: EventRef,
}

/// Text shown inside an event: a bold title and regular detail lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText {
    pub title: String,
    pub details: Vec<String>,
}

impl DisplayText {
    /// Title, then "responsible, location" on a detail line and the
    /// description below it. Without a responsible person the location is
    /// appended to the title line. Footnote events show the title only.
    pub fn for_event(event: &Event) -> Self {
        let mut title = event.title.clone();
        let mut details = Vec::new();

        if !event.footnote {
            match (&event.responsible, &event.location) {
                (Some(who), Some(place)) => details.push(format!("{who}, {place}")),
                (Some(who), None) => details.push(who.clone()),
                (None, Some(place)) => {
                    title.push_str(", ");
                    title.push_str(place);
                }
                (None, None) => {}
            }
            if let Some(desc) = &event.description {
                details.push(desc.clone());
            }
        }

        Self { title, details }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub rect: PlacementRect,
    pub text: DisplayText,
    /// Column whose width was used, `None` if the event matched none.
    pub column: Option<String>,
}

/// Positions events inside a day column.
#[derive(Debug, Clone, Copy)]
pub struct EventPlacer<'m> {
    mapper: &'m TimeMapper,
    col_width: i32,
}

impl<'m> EventPlacer<'m> {
    pub fn new(mapper: &'m TimeMapper, col_width: i32) -> Self {
        Self { mapper, col_width }
    }

    /// Place `event` in the day starting at `day_x`.
    ///
    /// The width is that of the first column in `assignment` order that the
    /// event belongs to; events listing several columns are not widened.
    pub fn place(
        &self,
        event: &Event,
        source: EventRef,
        day_x: i32,
        assignment: &ColumnAssignment,
    ) -> Placement {
        let y = self.mapper.to_y(event.end);
        let height = self.mapper.span_to_height(event.duration_minutes());

        let mut x = day_x;
        let mut width = 0;
        let mut column = None;
        for slot in assignment.slots() {
            let w = slot.width_units as i32 * self.col_width;
            if event.appears_in(&slot.label) {
                width = w;
                column = Some(slot.label.clone());
                break;
            }
            x += w;
        }

        log::debug!(
            "Drawing event {} at ({x}, {y}) with size ({width}, {height})",
            event.title
        );

        Placement {
            rect: PlacementRect {
                x,
                y,
                width,
                height,
                source,
            },
            text: DisplayText::for_event(event),
            column,
        }
    }
}

/// Daily repeating events seen so far in a render pass.
///
/// Append-only: once an event is in the set it is drawn on every later day
/// until the end of the document.
#[derive(Debug, Clone, Default)]
pub struct RepeatingSet<'a> {
    events: Vec<(EventRef, &'a Event)>,
}

impl<'a> RepeatingSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, source: EventRef, event: &'a Event) {
        self.events.push((source, event));
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventRef, &'a Event)> + '_ {
        self.events.iter().copied()
    }

    pub fn events(&self) -> impl Iterator<Item = &'a Event> + '_ {
        self.events.iter().map(|(_, e)| *e)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
