//! Layout engine: turns a `Schedule` into an ordered list of drawing
//! operations per page. Nothing in here talks to a PDF library.

pub mod columns;
pub mod composer;
pub mod grid;
pub mod placer;
pub mod text;
pub mod time_mapper;

pub use columns::{ColumnAllocator, ColumnAssignment, ColumnSlot};
pub use composer::{Composition, DrawOp, Page, PageComposer, RenderSurface, render};
pub use grid::{GridGeometry, LineSegment};
pub use placer::{DisplayText, EventPlacer, EventRef, Placement, PlacementRect, RepeatingSet};
pub use text::{TextBlock, TextFitter, TextLine};
pub use time_mapper::TimeMapper;
