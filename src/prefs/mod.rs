//! Patching ViNCEd prefs files with a theme document.
//!
//! The merge itself is pure (`merge::merge`); `apply_to_target` wraps it in
//! the read / scratch-write / atomic-replace sequence through a
//! [`PrefsStore`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{IoOp, ThemeError};
use crate::theme::ThemeDocument;
use crate::ui::render::RenderSink;

pub mod merge;
pub mod store;

pub use merge::{
    is_colors_marker, merge, split_line_ending, MergeOutcome, MergeReport, COLORS_MARKER,
};
pub use store::{FsPrefsStore, PrefsStore};

/// Sibling scratch path used while rewriting `target` (`<target>.tmp`).
pub fn scratch_path(target: &Path) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Merge `document` into the prefs file at `target` and replace it atomically.
///
/// A missing target is created. On failure the original file is left as it
/// was; a failed replace may leave `<target>.tmp` behind.
pub fn apply_to_target(
    store: &dyn PrefsStore,
    target: &Path,
    document: &ThemeDocument,
    sink: &dyn RenderSink,
) -> Result<MergeReport, ThemeError> {
    let existing = store
        .read_lines(target)
        .map_err(|e| ThemeError::io(IoOp::ReadTarget, target, e))?;
    let outcome = merge(existing.as_deref(), document);
    let report = outcome.report;

    if report.target_existed && !report.cursor_written {
        sink.warn(&format!(
            "`{}` has no CURSORCOLOR line; cursor color not written",
            target.display()
        ));
    }

    let scratch = scratch_path(target);
    tracing::debug!(scratch = %scratch.display(), lines = outcome.lines.len(), "writing scratch file");
    store
        .write_all(&scratch, &outcome.lines)
        .map_err(|e| ThemeError::io(IoOp::WriteScratch, &scratch, e))?;
    store
        .atomic_replace(&scratch, target)
        .map_err(|e| ThemeError::io(IoOp::ReplaceTarget, target, e))?;

    sink.activity(&format!("Successfully updated `{}`", target.display()));
    let appended =
        report.colors_appended + usize::from(report.cursor_written && report.cursor_replaced == 0);
    sink.field(
        "records",
        &format!(
            "{} replaced, {} appended",
            report.cursor_replaced + report.colors_replaced,
            appended,
        ),
    );
    Ok(report)
}
