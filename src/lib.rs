//! vinced-theme: apply color themes to ViNCEd console preference files.
//!
//! A theme file carries one `CURSORCOLOR=` record and up to sixteen `COLOR=`
//! records. This crate normalizes the color values, builds a complete theme
//! document, and merges it into an existing `ViNCEd.prefs` file without
//! touching unrelated settings.
//!
//! # Quick start
//!
//! ```no_run
//! use vinced_theme::color::OverridePolicy;
//! use vinced_theme::prefs::{apply_to_target, FsPrefsStore};
//! use vinced_theme::theme::ThemeDocument;
//! use vinced_theme::ui::render::Renderer;
//! use std::path::Path;
//!
//! let renderer = Renderer::new(true);
//! let theme = std::fs::read_to_string("dark.theme").unwrap();
//! let loaded = ThemeDocument::build_from_source(theme.lines(), &OverridePolicy::default(), &renderer);
//! apply_to_target(&FsPrefsStore, Path::new("ENV/ViNCEd.prefs"), &loaded.document, &renderer).unwrap();
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod prefs;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
pub mod ui;
