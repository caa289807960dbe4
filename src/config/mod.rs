//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`VINCED_THEME_USE_PREFS`,
//!    `VINCED_THEME_SAVE_PREFS`, `VINCED_THEME_LOG`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./vinced-theme.toml in the current directory
//! 4. $XDG_CONFIG_HOME/vinced-theme/vinced-theme.toml (or
//!    ~/.config/vinced-theme/vinced-theme.toml)
//! 5. Built-in defaults
//!
//! ```toml
//! [targets]
//! use_path = "/tmp/ENV/ViNCEd.prefs"
//! save_path = "/home/me/.config/vinced-theme/ENVARC/ViNCEd.prefs"
//!
//! [flags]
//! load = true
//!
//! [display]
//! color = false
//!
//! [logging]
//! filter = "vinced_theme=debug"
//! ```

mod defaults;
mod env;
mod loader;
mod resolve;
mod sources;
mod types;

pub use loader::load_config_with_diagnostics;
pub use sources::config_root_dir;
pub use types::{
    Config, ConfigDiagnostics, DisplayConfig, FlagsConfig, LoadedConfig, LoggingConfig,
    TargetsConfig,
};
use types::FileConfig;
