//! Single-pass theme source scanner.

use crate::color::{decode, line_has_prefix, ColorRecord, OverridePolicy, COLOR_PREFIX, CURSOR_PREFIX};
use crate::ui::render::RenderSink;

use super::document::COLOR_SLOTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// No cursor decoded yet.
    SeekingCursor,
    /// Cursor decoded; palette colors count from here on.
    CollectingColors,
}

/// Raw scan result before gap filling.
#[derive(Debug, Default)]
pub(super) struct ScannedRecords {
    pub(super) cursor: Option<ColorRecord>,
    pub(super) colors: Vec<ColorRecord>,
    pub(super) skipped_lines: usize,
}

/// Pull the cursor and up to sixteen colors out of theme lines.
///
/// Colors only count once a cursor has been found. `COLOR=` lines that appear
/// before any cursor are held back and used only if the whole input turns
/// out to have no cursor at all.
pub(super) fn scan_records<I, S>(
    lines: I,
    overrides: &OverridePolicy,
    sink: &dyn RenderSink,
) -> ScannedRecords
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ScanState::SeekingCursor;
    let mut scanned = ScannedRecords::default();
    let mut held_back: Vec<(usize, String)> = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_no = idx + 1;
        match state {
            ScanState::SeekingCursor => {
                if line_has_prefix(line, CURSOR_PREFIX) {
                    if let Some(record) = decode_or_warn(line, line_no, overrides, sink) {
                        scanned.cursor = Some(record);
                        state = ScanState::CollectingColors;
                    } else {
                        scanned.skipped_lines += 1;
                    }
                } else if line_has_prefix(line, COLOR_PREFIX) {
                    held_back.push((line_no, line.to_string()));
                }
            }
            ScanState::CollectingColors => {
                if line_has_prefix(line, COLOR_PREFIX) {
                    match decode_or_warn(line, line_no, overrides, sink) {
                        Some(record) => scanned.colors.push(record),
                        None => scanned.skipped_lines += 1,
                    }
                    if scanned.colors.len() >= COLOR_SLOTS {
                        tracing::debug!(line_no, "cursor and all colors collected");
                        break;
                    }
                }
            }
        }
    }

    if state == ScanState::SeekingCursor && !held_back.is_empty() {
        tracing::debug!(
            count = held_back.len(),
            "no cursor line; using colors seen before it"
        );
        for (line_no, line) in held_back {
            if scanned.colors.len() >= COLOR_SLOTS {
                break;
            }
            match decode_or_warn(&line, line_no, overrides, sink) {
                Some(record) => scanned.colors.push(record),
                None => scanned.skipped_lines += 1,
            }
        }
    }

    scanned
}

fn decode_or_warn(
    line: &str,
    line_no: usize,
    overrides: &OverridePolicy,
    sink: &dyn RenderSink,
) -> Option<ColorRecord> {
    match decode(line, overrides) {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::debug!(line_no, %err, "skipping record line");
            sink.warn(&format!(
                "Could not parse line {line_no} ({err}): {}",
                line.trim()
            ));
            None
        }
    }
}
