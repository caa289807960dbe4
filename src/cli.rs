//! CLI argument parsing via clap.

use clap::Parser;
use std::path::PathBuf;

/// Apply a color theme to ViNCEd console preference files.
#[derive(Debug, Parser)]
#[command(name = "vinced-theme", version)]
pub struct Args {
    /// Theme file with one CURSORCOLOR= line and up to sixteen COLOR= lines.
    #[arg(value_name = "THEMEFILE", required_unless_present = "reset")]
    pub theme_file: Option<PathBuf>,

    /// Patch the session prefs file (the default action).
    #[arg(long = "use")]
    pub use_prefs: bool,

    /// Patch the persistent prefs file.
    #[arg(long = "save")]
    pub save: bool,

    /// Use an all-black default palette instead of a theme file.
    #[arg(long = "reset", conflicts_with = "theme_file")]
    pub reset: bool,

    /// Print the records that would be written.
    #[arg(long = "check")]
    pub check: bool,

    /// Show a color swatch preview of the palette.
    #[arg(long = "view")]
    pub view: bool,

    /// Force the LOAD flag on every record.
    #[arg(long = "load", conflicts_with = "noload")]
    pub load: bool,

    /// Force the NOLOAD flag on every record.
    #[arg(long = "noload")]
    pub noload: bool,

    /// Force the ANSI flag on every record.
    #[arg(long = "ansi", conflicts_with = "noansi")]
    pub ansi: bool,

    /// Force the NOANSI flag on every record.
    #[arg(long = "noansi")]
    pub noansi: bool,

    /// Patch this prefs file instead of (or in addition to) --use/--save.
    #[arg(long = "prefs", value_name = "PATH")]
    pub prefs: Option<PathBuf>,

    /// Path to config file (default: ./vinced-theme.toml or
    /// ~/.config/vinced-theme/vinced-theme.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// LOAD override from the command line, if any.
    pub fn load_override(&self) -> Option<bool> {
        flag_pair(self.load, self.noload)
    }

    /// ANSI override from the command line, if any.
    pub fn ansi_override(&self) -> Option<bool> {
        flag_pair(self.ansi, self.noansi)
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}
