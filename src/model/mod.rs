//! Schedule model: the raw WAP document as read from disk, and the
//! normalised `Schedule` the layout engine works on.

pub mod color;
pub mod document;
pub mod schedule;
pub mod schema;

pub use color::Color;
pub use document::{WapDocument, load_document, parse_document};
pub use schedule::{Categories, Day, Event, Schedule, ScheduleMeta};
