//! Terminal color preview for a theme palette.
//!
//! Each palette slot is painted as a block of true-color background cells,
//! one row per slot, followed by its index and 8-bit RGB value.

use std::io::{self, Write};

use crossterm::style::{Color, Print, PrintStyledContent, ResetColor, SetBackgroundColor, Stylize};
use crossterm::QueueableCommand;

use crate::theme::Swatch;
use crate::ui::settings;

/// Label printed next to one swatch: `"<index> RGB(r,g,b)"` plus a load marker.
pub fn swatch_label(swatch: &Swatch) -> String {
    let [r, g, b] = swatch.rgb8;
    let mut label = format!("{:2} RGB({r},{g},{b})", swatch.index);
    if swatch.load {
        label.push(' ');
        label.push_str(settings::SWATCH_LOAD_MARKER);
    }
    label
}

/// Write the swatch preview to `out`.
///
/// With `color` disabled only the labels are printed, so the preview stays
/// readable when piped.
pub fn render_swatches<W: Write + ?Sized>(out: &mut W, swatches: &[Swatch], color: bool) -> io::Result<()> {
    let cells = " ".repeat(settings::SWATCH_WIDTH);
    for swatch in swatches {
        out.queue(Print(settings::INDENT_1))?;
        if color {
            let [r, g, b] = swatch.rgb8;
            out.queue(SetBackgroundColor(Color::Rgb { r, g, b }))?;
            out.queue(Print(&cells))?;
            out.queue(ResetColor)?;
            out.queue(Print(" "))?;
            out.queue(PrintStyledContent(
                swatch_label(swatch).with(settings::COLOR_SWATCH_LABEL),
            ))?;
        } else {
            out.queue(Print(swatch_label(swatch)))?;
        }
        out.queue(Print("\n"))?;
    }
    out.flush()
}
