//! Centralized, hardcoded UI settings for terminal output.
//!
//! This is the single place to tweak labels, glyphs, colors, and indentation.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";

// ---------------------------------------------------------------------------
// Sections / labels
// ---------------------------------------------------------------------------

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";

pub const GLYPH_SECTION_BULLET: &str = "•";

// ---------------------------------------------------------------------------
// Swatch preview
// ---------------------------------------------------------------------------

/// Blank cells painted per swatch.
pub const SWATCH_WIDTH: usize = 6;
/// Marker printed after swatches whose LOAD flag is set.
pub const SWATCH_LOAD_MARKER: &str = "load";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_ACTIVITY_TEXT: Color = Color::DarkGrey;

pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_SECTION_TITLE: Color = Color::Cyan;
pub const COLOR_FIELD_KEY: Color = Color::DarkGrey;
pub const COLOR_FIELD_VALUE: Color = Color::White;

pub const COLOR_SWATCH_LABEL: Color = Color::DarkGrey;
