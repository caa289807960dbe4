//! Check listing and swatch data derived from a theme document.

use std::fmt;

use super::document::ThemeDocument;

/// One numbered line of the check listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRow {
    /// 1-based position in the document.
    pub number: usize,
    /// Record line as it will be written.
    pub line: String,
    /// 8-bit RGB equivalent.
    pub rgb8: [u8; 3],
}

impl fmt::Display for CheckRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb8;
        write!(f, "{:2}: {} RGB({r},{g},{b})", self.number, self.line)
    }
}

/// One palette slot prepared for a color preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    /// Palette slot, 0-15.
    pub index: usize,
    pub rgb8: [u8; 3],
    pub load: bool,
}

impl ThemeDocument {
    /// Listing of every record that a merge would write, cursor first.
    pub fn check_rows(&self) -> Vec<CheckRow> {
        self.records()
            .enumerate()
            .map(|(idx, record)| CheckRow {
                number: idx + 1,
                line: record.encode(),
                rgb8: record.rgb().to_8bit(),
            })
            .collect()
    }

    /// Palette colors as 8-bit swatches; the cursor is not part of the palette.
    pub fn swatches(&self) -> Vec<Swatch> {
        self.colors()
            .iter()
            .enumerate()
            .map(|(index, record)| Swatch {
                index,
                rgb8: record.rgb().to_8bit(),
                load: record.load(),
            })
            .collect()
    }
}
