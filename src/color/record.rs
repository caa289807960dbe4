//! Color record line codec.
//!
//! A record line looks like `COLOR=NOLOAD,ANSI,0x1234,0x5678,0x9abc`. Theme
//! files found in the wild also use a bare `COLOR=r,g,b` triplet and a few
//! other comma layouts, so decoding dispatches on the comma count while
//! encoding always emits the full five-field form.

use std::fmt;

use super::value;

/// Line prefix of the cursor color record.
pub const CURSOR_PREFIX: &str = "CURSORCOLOR=";
/// Line prefix of a palette color record.
pub const COLOR_PREFIX: &str = "COLOR=";

/// Commas past this many are not split on; they stay inside the last segment.
const MAX_COMMAS: usize = 10;

/// Which slot a record fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    CursorColor,
    Color,
}

impl RecordKind {
    /// Line prefix (including `=`) for this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::CursorColor => CURSOR_PREFIX,
            Self::Color => COLOR_PREFIX,
        }
    }

    /// Classify a line by its prefix, ignoring leading blanks and case.
    pub fn of_line(line: &str) -> Option<Self> {
        if line_has_prefix(line, CURSOR_PREFIX) {
            Some(Self::CursorColor)
        } else if line_has_prefix(line, COLOR_PREFIX) {
            Some(Self::Color)
        } else {
            None
        }
    }
}

/// Load/ansi flag pair carried by every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RecordFlags {
    pub load: bool,
    pub ansi: bool,
}

impl RecordFlags {
    /// Read flag tokens as written in a record line.
    ///
    /// Only `LOAD` and `ANSI` (any case) switch a flag on.
    fn from_tokens(load: &str, ansi: &str) -> Self {
        Self {
            load: load.trim().eq_ignore_ascii_case("LOAD"),
            ansi: ansi.trim().eq_ignore_ascii_case("ANSI"),
        }
    }

    pub fn load_token(self) -> &'static str {
        if self.load {
            "LOAD"
        } else {
            "NOLOAD"
        }
    }

    pub fn ansi_token(self) -> &'static str {
        if self.ansi {
            "ANSI"
        } else {
            "NOANSI"
        }
    }
}

/// Canonical 16-bit RGB triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb16 {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl Rgb16 {
    pub const BLACK: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
    };

    pub fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    /// High bytes of each channel.
    pub fn to_8bit(self) -> [u8; 3] {
        [
            value::to_8bit(self.red),
            value::to_8bit(self.green),
            value::to_8bit(self.blue),
        ]
    }
}

/// Flag overrides forced onto every record at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverridePolicy {
    /// `Some(true)` forces LOAD, `Some(false)` forces NOLOAD.
    pub load: Option<bool>,
    /// `Some(true)` forces ANSI, `Some(false)` forces NOANSI.
    pub ansi: Option<bool>,
}

impl OverridePolicy {
    pub fn new(load: Option<bool>, ansi: Option<bool>) -> Self {
        Self { load, ansi }
    }

    /// Build a record, letting the policy win over the flags found in text.
    ///
    /// Every construction site (decode, defaults, gap fill) goes through here.
    pub fn build(&self, kind: RecordKind, found: RecordFlags, rgb: Rgb16) -> ColorRecord {
        let flags = RecordFlags {
            load: self.load.unwrap_or(found.load),
            ansi: self.ansi.unwrap_or(found.ansi),
        };
        ColorRecord { kind, flags, rgb }
    }

    /// Zero-intensity record with default flags, subject to the policy.
    pub fn default_record(&self, kind: RecordKind) -> ColorRecord {
        self.build(kind, RecordFlags::default(), Rgb16::BLACK)
    }
}

/// One decoded color entry. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorRecord {
    kind: RecordKind,
    flags: RecordFlags,
    rgb: Rgb16,
}

impl ColorRecord {
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn load(&self) -> bool {
        self.flags.load
    }

    pub fn ansi(&self) -> bool {
        self.flags.ansi
    }

    pub fn rgb(&self) -> Rgb16 {
        self.rgb
    }

    /// Canonical line text for this record.
    pub fn encode(&self) -> String {
        format!(
            "{}{},{},{},{},{}",
            self.kind.prefix(),
            self.flags.load_token(),
            self.flags.ansi_token(),
            value::format(self.rgb.red),
            value::format(self.rgb.green),
            value::format(self.rgb.blue),
        )
    }
}

impl fmt::Display for ColorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Structural reasons a record line cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordParseError {
    /// Line starts with neither `CURSORCOLOR=` nor `COLOR=`.
    UnknownKind,
    /// No `=` separator.
    MissingSeparator,
    /// Fewer than two commas after `=`, so no RGB triplet.
    TooFewCommas(usize),
}

impl fmt::Display for RecordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind => write!(f, "not a CURSORCOLOR= or COLOR= line"),
            Self::MissingSeparator => write!(f, "missing `=` separator"),
            Self::TooFewCommas(count) => {
                write!(f, "expected at least 2 commas for r,g,b, found {count}")
            }
        }
    }
}

impl std::error::Error for RecordParseError {}

/// Decode one record line, applying `overrides` to its flags.
pub fn decode(line: &str, overrides: &OverridePolicy) -> Result<ColorRecord, RecordParseError> {
    let (_, body) = line
        .split_once('=')
        .ok_or(RecordParseError::MissingSeparator)?;
    let kind = RecordKind::of_line(line).ok_or(RecordParseError::UnknownKind)?;

    let commas: Vec<usize> = body
        .match_indices(',')
        .map(|(idx, _)| idx)
        .take(MAX_COMMAS)
        .collect();
    let count = commas.len();
    if count < 2 {
        return Err(RecordParseError::TooFewCommas(count));
    }

    // Segment i runs between comma i-1 and comma i; the last one runs to the
    // end of the line, swallowing any commas past MAX_COMMAS.
    let segment = |idx: usize| {
        let start = if idx == 0 { 0 } else { commas[idx - 1] + 1 };
        let end = commas.get(idx).copied().unwrap_or(body.len());
        &body[start..end]
    };

    // The trailing triplet always wins, whatever precedes it.
    let rgb_first = count - 2;
    let found = if count >= 4 {
        RecordFlags::from_tokens(segment(0), segment(1))
    } else {
        RecordFlags::default()
    };
    let rgb = Rgb16::new(
        value::normalize(segment(rgb_first)),
        value::normalize(segment(rgb_first + 1)),
        value::normalize(segment(rgb_first + 2).trim_end()),
    );

    Ok(overrides.build(kind, found, rgb))
}

/// Prefix test used for record and marker lines.
///
/// Leading spaces and tabs are skipped and the comparison ignores ASCII case.
pub fn line_has_prefix(line: &str, prefix: &str) -> bool {
    let trimmed = line.trim_start_matches([' ', '\t']);
    trimmed
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
