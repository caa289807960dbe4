//! Theme documents: one cursor color plus sixteen palette colors.
//!
//! A document is built either by scanning a theme file (with gap filling) or
//! from defaults, then handed once to a merge or a preview.

mod document;
mod preview;
mod scan;

pub use document::{LoadedTheme, ScanSummary, ThemeDocument, COLOR_SLOTS};
pub use preview::{CheckRow, Swatch};
