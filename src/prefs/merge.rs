//! Merge-patch of theme records into an existing prefs document.
//!
//! Matching record lines are replaced in place, everything else is copied
//! through untouched, and colors with no line to replace are appended.
//! Lines carry their own terminators; a rewritten line keeps the one it had.

use crate::color::{line_has_prefix, COLOR_PREFIX, CURSOR_PREFIX};
use crate::theme::ThemeDocument;

/// Section marker that introduces the color block of a prefs file.
pub const COLORS_MARKER: &str = ";Colors:";

/// Counters describing what a merge changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// The target had existing lines to patch.
    pub target_existed: bool,
    /// `CURSORCOLOR=` lines rewritten.
    pub cursor_replaced: usize,
    /// `COLOR=` lines rewritten in place.
    pub colors_replaced: usize,
    /// `COLOR=` lines beyond the sixteenth, kept verbatim.
    pub colors_kept: usize,
    /// Color records appended at the end.
    pub colors_appended: usize,
    /// A `;Colors:` marker was written by the merge.
    pub marker_added: bool,
    /// The cursor record appears in the output.
    pub cursor_written: bool,
}

/// Patched lines plus what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Output lines, each with its terminator (the last may have none).
    pub lines: Vec<String>,
    pub report: MergeReport,
}

/// Patch `document` into `target` (`None` when the target does not exist).
///
/// Appended lines use the first line ending found in `target`, or `\n`.
pub fn merge(target: Option<&[String]>, document: &ThemeDocument) -> MergeOutcome {
    let cursor_line = document.cursor().encode();
    let color_lines: Vec<String> = document.colors().iter().map(|r| r.encode()).collect();
    let mut report = MergeReport::default();

    let existing = match target {
        Some(lines) if !lines.is_empty() => lines,
        _ => {
            let mut lines = Vec::with_capacity(2 + color_lines.len());
            lines.push(format!("{COLORS_MARKER}\n"));
            lines.push(format!("{cursor_line}\n"));
            report.colors_appended = color_lines.len();
            lines.extend(color_lines.iter().map(|line| format!("{line}\n")));
            report.marker_added = true;
            report.cursor_written = true;
            return MergeOutcome { lines, report };
        }
    };

    report.target_existed = true;
    let mut lines = Vec::with_capacity(existing.len() + color_lines.len() + 1);
    let mut next_color = 0;
    let mut marker_seen = false;
    let newline = existing
        .iter()
        .map(|line| split_line_ending(line).1)
        .find(|ending| !ending.is_empty())
        .unwrap_or("\n");

    for line in existing {
        let (body, ending) = split_line_ending(line);
        if line_has_prefix(body, CURSOR_PREFIX) {
            lines.push(format!("{cursor_line}{ending}"));
            report.cursor_replaced += 1;
        } else if line_has_prefix(body, COLOR_PREFIX) {
            match color_lines.get(next_color) {
                Some(replacement) => {
                    lines.push(format!("{replacement}{ending}"));
                    report.colors_replaced += 1;
                }
                None => {
                    lines.push(line.clone());
                    report.colors_kept += 1;
                }
            }
            next_color += 1;
        } else {
            if is_colors_marker(body) {
                marker_seen = true;
            }
            lines.push(line.clone());
        }
    }

    if next_color < color_lines.len() {
        // An unterminated last line must be closed before anything follows it.
        if let Some(last) = lines.last_mut() {
            if split_line_ending(last).1.is_empty() {
                last.push_str(newline);
            }
        }
        if !marker_seen {
            lines.push(format!("{COLORS_MARKER}{newline}"));
            report.marker_added = true;
        }
        let remaining = &color_lines[next_color..];
        report.colors_appended = remaining.len();
        lines.extend(remaining.iter().map(|line| format!("{line}{newline}")));
    }
    report.cursor_written = report.cursor_replaced > 0;

    tracing::debug!(?report, "merge complete");
    MergeOutcome { lines, report }
}

/// Split `line` into its text and its terminator (`\r\n`, `\n`, or empty).
pub fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// True for the `;Colors:` section marker, ignoring surrounding blanks and case.
pub fn is_colors_marker(line: &str) -> bool {
    line_has_prefix(line.trim(), COLORS_MARKER)
}
