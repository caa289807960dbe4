//! Color values and record lines.

pub mod record;
pub mod value;

pub use record::{
    decode, line_has_prefix, ColorRecord, OverridePolicy, RecordFlags, RecordKind,
    RecordParseError, Rgb16, COLOR_PREFIX, CURSOR_PREFIX,
};
