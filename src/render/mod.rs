mod encoding;
pub mod pdf;

pub use pdf::{DocumentInfo, PdfSurface};
