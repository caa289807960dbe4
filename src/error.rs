//! Unified error types for theme loading and prefs patching.

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ThemeError — top-level
// ---------------------------------------------------------------------------

/// File operation that failed while reading a theme or patching prefs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    ReadTheme,
    ReadTarget,
    WriteScratch,
    ReplaceTarget,
    WritePreview,
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ReadTheme => "could not read theme file",
            Self::ReadTarget => "could not read prefs file",
            Self::WriteScratch => "could not write temporary file",
            Self::ReplaceTarget => "could not replace prefs file",
            Self::WritePreview => "could not write color preview to",
        };
        f.write_str(label)
    }
}

/// Top-level error type.
#[derive(Debug)]
pub enum ThemeError {
    /// A file operation failed; fatal to the invoked operation.
    Io {
        op: IoOp,
        path: PathBuf,
        source: std::io::Error,
    },
    Config(ConfigError),
}

impl ThemeError {
    pub fn io(op: IoOp, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { op, path, source } => write!(f, "{op} `{}`: {source}", path.display()),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ThemeError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
