//! Complete theme documents built from theme text or from defaults.

use crate::color::{ColorRecord, OverridePolicy, RecordKind};
use crate::ui::render::RenderSink;

use super::scan::scan_records;

/// Number of palette color slots after the cursor slot.
pub const COLOR_SLOTS: usize = 16;

/// A complete theme: exactly one cursor record followed by sixteen colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDocument {
    cursor: ColorRecord,
    colors: Vec<ColorRecord>,
}

/// What a scan found and what had to be filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// A `CURSORCOLOR=` line was decoded.
    pub cursor_found: bool,
    /// Colors taken from the source text.
    pub colors_parsed: usize,
    /// Records synthesized by gap filling (cursor included).
    pub defaults_added: usize,
    /// Matching lines skipped because they did not decode.
    pub skipped_lines: usize,
}

/// Document built from a theme source plus scan diagnostics.
#[derive(Debug, Clone)]
pub struct LoadedTheme {
    pub document: ThemeDocument,
    pub summary: ScanSummary,
}

impl ThemeDocument {
    /// All-zero document with flags from `overrides` (NOLOAD/NOANSI otherwise).
    pub fn build_defaults(overrides: &OverridePolicy) -> Self {
        Self::filled(None, Vec::new(), overrides)
    }

    /// Scan theme lines and fill any missing slots with defaults.
    ///
    /// Unparseable record lines are reported through `sink` and skipped.
    pub fn build_from_source<I, S>(
        lines: I,
        overrides: &OverridePolicy,
        sink: &dyn RenderSink,
    ) -> LoadedTheme
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let scanned = scan_records(lines, overrides, sink);
        let cursor_found = scanned.cursor.is_some();
        let colors_parsed = scanned.colors.len();

        if !cursor_found {
            sink.warn("No CURSORCOLOR found, using default");
        }
        let document = Self::filled(scanned.cursor, scanned.colors, overrides);
        let summary = ScanSummary {
            cursor_found,
            colors_parsed,
            defaults_added: usize::from(!cursor_found) + (COLOR_SLOTS - colors_parsed),
            skipped_lines: scanned.skipped_lines,
        };
        tracing::debug!(?summary, "theme scan complete");
        sink.activity(&format!(
            "Loaded theme: {} CURSORCOLOR, {} COLOR entries ({} defaults added)",
            if cursor_found { "found" } else { "default" },
            document.colors.len(),
            summary.defaults_added,
        ));

        LoadedTheme { document, summary }
    }

    fn filled(
        cursor: Option<ColorRecord>,
        mut colors: Vec<ColorRecord>,
        overrides: &OverridePolicy,
    ) -> Self {
        let cursor = cursor.unwrap_or_else(|| overrides.default_record(RecordKind::CursorColor));
        colors.truncate(COLOR_SLOTS);
        colors.resize(COLOR_SLOTS, overrides.default_record(RecordKind::Color));
        Self { cursor, colors }
    }

    pub fn cursor(&self) -> &ColorRecord {
        &self.cursor
    }

    /// The sixteen palette colors, in slot order.
    pub fn colors(&self) -> &[ColorRecord] {
        &self.colors
    }

    /// Cursor first, then the palette colors.
    pub fn records(&self) -> impl Iterator<Item = &ColorRecord> {
        std::iter::once(&self.cursor).chain(self.colors.iter())
    }

    /// Canonical line text of every record, in document order.
    pub fn encoded_lines(&self) -> Vec<String> {
        self.records().map(ColorRecord::encode).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{value, Rgb16};
    use crate::testsupport::RecordingSink;

    fn scan(text: &str, overrides: &OverridePolicy) -> (LoadedTheme, RecordingSink) {
        let sink = RecordingSink::default();
        let loaded = ThemeDocument::build_from_source(text.lines(), overrides, &sink);
        (loaded, sink)
    }

    fn assert_zero_defaults(records: &[ColorRecord]) {
        for record in records {
            assert_eq!(record.rgb(), Rgb16::BLACK);
            assert!(!record.load());
            assert!(!record.ansi());
        }
    }

    #[test]
    fn empty_source_yields_all_defaults() {
        let (loaded, sink) = scan("", &OverridePolicy::default());
        let doc = &loaded.document;
        assert_eq!(doc.records().count(), 17);
        assert_eq!(doc.cursor().kind(), RecordKind::CursorColor);
        assert_eq!(doc.colors().len(), 16);
        assert_zero_defaults(std::slice::from_ref(doc.cursor()));
        assert_zero_defaults(doc.colors());
        assert_eq!(loaded.summary.defaults_added, 17);
        assert!(sink.warnings().iter().any(|w| w.contains("No CURSORCOLOR")));
    }

    #[test]
    fn empty_source_matches_generated_defaults() {
        let policy = OverridePolicy::new(Some(true), None);
        let (loaded, _) = scan("", &policy);
        assert_eq!(loaded.document, ThemeDocument::build_defaults(&policy));
    }

    #[test]
    fn cursorless_source_keeps_its_colors_and_pads() {
        let text = "COLOR=10,20,30\nCOLOR=0x40,0x50,0x60\nCOLOR=0.5,1.0,0\n";
        let (loaded, _) = scan(text, &OverridePolicy::default());
        let doc = &loaded.document;

        assert_eq!(*doc.cursor(), OverridePolicy::default().default_record(RecordKind::CursorColor));
        assert_eq!(doc.colors().len(), 16);
        assert_eq!(
            doc.colors()[0].rgb(),
            Rgb16::new(
                value::normalize("10"),
                value::normalize("20"),
                value::normalize("30")
            )
        );
        assert_eq!(doc.colors()[1].rgb(), Rgb16::new(0x4040, 0x5050, 0x6060));
        assert_eq!(doc.colors()[2].rgb().green, 0xFFFF);
        assert_zero_defaults(&doc.colors()[3..]);
        assert_eq!(loaded.summary.colors_parsed, 3);
        assert_eq!(loaded.summary.defaults_added, 14);
    }

    #[test]
    fn colors_before_the_cursor_are_ignored_once_a_cursor_exists() {
        let text = "COLOR=1,1,1\nCURSORCOLOR=0x11,0x22,0x33\nCOLOR=2,2,2\n";
        let (loaded, _) = scan(text, &OverridePolicy::default());
        let doc = &loaded.document;
        assert!(loaded.summary.cursor_found);
        assert_eq!(doc.cursor().rgb(), Rgb16::new(0x1111, 0x2222, 0x3333));
        assert_eq!(doc.colors()[0].rgb(), Rgb16::new(0x0202, 0x0202, 0x0202));
        assert_zero_defaults(&doc.colors()[1..]);
    }

    #[test]
    fn excess_colors_and_later_cursors_are_ignored() {
        let mut text = String::from("CURSORCOLOR=1,1,1\n");
        for idx in 0..20 {
            text.push_str(&format!("COLOR={idx},0,0\n"));
            if idx == 3 {
                text.push_str("CURSORCOLOR=9,9,9\n");
            }
        }
        let (loaded, _) = scan(&text, &OverridePolicy::default());
        let doc = &loaded.document;
        assert_eq!(doc.cursor().rgb().red, 0x0101);
        assert_eq!(doc.colors().len(), 16);
        assert_eq!(doc.colors()[15].rgb().red, value::normalize("15"));
        assert_eq!(loaded.summary.defaults_added, 0);
    }

    #[test]
    fn malformed_lines_are_skipped_with_a_warning() {
        let text = "CURSORCOLOR=broken\nCURSORCOLOR=1,2,3\nCOLOR=oops\nCOLOR=4,5,6\n";
        let (loaded, sink) = scan(text, &OverridePolicy::default());
        let doc = &loaded.document;
        assert!(loaded.summary.cursor_found);
        assert_eq!(loaded.summary.skipped_lines, 2);
        assert_eq!(doc.cursor().rgb().red, value::normalize("1"));
        assert_eq!(doc.colors()[0].rgb().red, value::normalize("4"));
        assert_eq!(sink.warnings().len(), 2);
    }

    #[test]
    fn unrelated_lines_are_not_records() {
        let text = ";Colors:\nFONT=topaz.font,8\n  cursorcolor=LOAD,ANSI,1,2,3\n\tcolor=NOLOAD,ANSI,4,5,6\n";
        let (loaded, _) = scan(text, &OverridePolicy::default());
        let doc = &loaded.document;
        assert!(doc.cursor().load());
        assert!(doc.colors()[0].ansi());
        assert_eq!(loaded.summary.colors_parsed, 1);
    }

    #[test]
    fn overrides_apply_to_parsed_and_filled_records() {
        let policy = OverridePolicy::new(Some(true), Some(true));
        let (loaded, _) = scan("CURSORCOLOR=NOLOAD,NOANSI,1,2,3\n", &policy);
        assert!(loaded.document.records().all(|r| r.load() && r.ansi()));
    }

    #[test]
    fn generated_defaults_have_fixed_shape() {
        let doc = ThemeDocument::build_defaults(&OverridePolicy::default());
        let lines = doc.encoded_lines();
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "CURSORCOLOR=NOLOAD,NOANSI,0x0000,0x0000,0x0000");
        assert!(lines[1..]
            .iter()
            .all(|line| line == "COLOR=NOLOAD,NOANSI,0x0000,0x0000,0x0000"));
    }
}
