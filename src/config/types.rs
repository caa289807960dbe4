//! Configuration data model.
//!
//! Struct definitions and default values only; source discovery and
//! resolution live in sibling modules.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::DEFAULT_LOG_FILTER;

/// Top-level runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub targets: TargetsConfig,
    pub flags: FlagsConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Resolved prefs file locations for the USE and SAVE actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetsConfig {
    /// Session prefs file patched by `--use`.
    pub use_path: PathBuf,
    /// Persistent prefs file patched by `--save`.
    pub save_path: PathBuf,
}

/// Default flag overrides applied when the command line gives none.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FlagsConfig {
    pub load: Option<bool>,
    pub ansi: Option<bool>,
}

/// Terminal output settings.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive string.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// `[targets]` table as written in the file; unset paths fall back to the
/// defaults under the config root.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TargetsFileConfig {
    pub(super) use_path: Option<String>,
    pub(super) save_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub(super) targets: TargetsFileConfig,
    pub(super) flags: FlagsConfig,
    pub(super) display: DisplayConfig,
    pub(super) logging: LoggingConfig,
}

/// Diagnostics captured while resolving runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    /// Non-fatal problems worth showing the user.
    pub warnings: Vec<String>,
}

/// Configuration payload plus load-time diagnostics.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, `None` for built-in defaults.
    pub source: Option<PathBuf>,
    pub diagnostics: ConfigDiagnostics,
}
