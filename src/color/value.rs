//! Scalar color-channel codec.
//!
//! Theme files spell channel intensities in several ways. Every accepted form
//! is folded into one canonical 16-bit intensity here:
//!
//! - `0x12` (one or two hex digits): 8-bit hex, byte-doubled to `0x1212`
//! - `0x1234` (three or more hex digits): 16-bit hex, taken as-is
//! - `0.5` (anything with a decimal point): fraction of full intensity
//! - `128` (plain decimal): 8-bit integer, clamped to 0-255 and byte-doubled
//!
//! Unrecognized tokens normalize to zero; this codec never fails.

/// Full-scale channel intensity.
pub const MAX_INTENSITY: u16 = 0xFFFF;

/// Tokens longer than this (after whitespace removal) are truncated.
const MAX_TOKEN_CHARS: usize = 31;
/// Fraction digits past this count no longer change the 16-bit result.
const MAX_FRACTION_DIGITS: usize = 12;

/// Convert one channel token into a canonical 16-bit intensity.
pub fn normalize(token: &str) -> u16 {
    let clean: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(MAX_TOKEN_CHARS)
        .collect();

    if let Some(digits) = clean
        .strip_prefix("0x")
        .or_else(|| clean.strip_prefix("0X"))
    {
        return normalize_hex(digits);
    }

    if let Some((int_text, frac_text)) = clean.split_once('.') {
        return normalize_fraction(int_text, frac_text);
    }

    let value = parse_leading_int(&clean).clamp(0, 255);
    expand_byte(value as u8)
}

/// Render an intensity in the canonical `0xhhhh` form.
pub fn format(intensity: u16) -> String {
    format!("0x{intensity:04x}")
}

/// High byte of an intensity, for 8-bit displays.
pub fn to_8bit(intensity: u16) -> u8 {
    (intensity >> 8) as u8
}

/// Replicate an 8-bit value into both bytes (`0xab` -> `0xabab`).
fn expand_byte(value: u8) -> u16 {
    let value = u16::from(value);
    (value << 8) | value
}

fn normalize_hex(digits: &str) -> u16 {
    let hex = leading_run(digits, |c| c.is_ascii_hexdigit());
    let value = hex.chars().fold(0u64, |acc, c| {
        acc.saturating_mul(16)
            .saturating_add(u64::from(c.to_digit(16).unwrap_or(0)))
    });
    if hex.len() <= 2 {
        expand_byte(value as u8)
    } else {
        (value & 0xFFFF) as u16
    }
}

fn normalize_fraction(int_text: &str, frac_text: &str) -> u16 {
    // A bare leading dot reads as integer part 0.
    if parse_leading_int(int_text) != 0 {
        return MAX_INTENSITY;
    }

    let digits = leading_run(frac_text, |c| c.is_ascii_digit());
    let digits = &digits[..digits.len().min(MAX_FRACTION_DIGITS)];
    if digits.is_empty() {
        return 0;
    }

    let numerator = digits.bytes().fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));
    let denominator = 10u64.pow(digits.len() as u32);
    let scaled = (numerator * u64::from(MAX_INTENSITY) + denominator / 2) / denominator;
    scaled.min(u64::from(MAX_INTENSITY)) as u16
}

/// Parse an optionally signed decimal prefix, stopping at the first non-digit.
fn parse_leading_int(text: &str) -> i64 {
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = leading_run(rest, |c| c.is_ascii_digit())
        .bytes()
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn leading_run(text: &str, accept: impl Fn(char) -> bool) -> &str {
    let end = text
        .char_indices()
        .find(|(_, c)| !accept(*c))
        .map_or(text.len(), |(idx, _)| idx);
    &text[..end]
}
