//! Turn a parsed `FileConfig` into runtime `Config`.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{APP_DIR_NAME, PREFS_FILE_NAME, SAVE_DIR_NAME, USE_DIR_NAME};
use super::types::{FileConfig, TargetsFileConfig};
use super::{Config, TargetsConfig};

pub(super) fn resolve_config_from_file_config(
    parsed: FileConfig,
    config_root: Option<&Path>,
) -> Result<Config, ConfigError> {
    Ok(Config {
        targets: resolve_targets(parsed.targets, config_root)?,
        flags: parsed.flags,
        display: parsed.display,
        logging: parsed.logging,
    })
}

/// Default prefs path for one target directory (`ENV` or `ENVARC`).
pub(super) fn default_target_path(config_root: Option<&Path>, dir_name: &str) -> PathBuf {
    let base = match config_root {
        Some(root) => root.join(APP_DIR_NAME),
        None => PathBuf::new(),
    };
    base.join(dir_name).join(PREFS_FILE_NAME)
}

fn resolve_targets(
    targets: TargetsFileConfig,
    config_root: Option<&Path>,
) -> Result<TargetsConfig, ConfigError> {
    Ok(TargetsConfig {
        use_path: explicit_or_default(targets.use_path, "targets.use_path", || {
            default_target_path(config_root, USE_DIR_NAME)
        })?,
        save_path: explicit_or_default(targets.save_path, "targets.save_path", || {
            default_target_path(config_root, SAVE_DIR_NAME)
        })?,
    })
}

fn explicit_or_default(
    value: Option<String>,
    key: &str,
    default: impl FnOnce() -> PathBuf,
) -> Result<PathBuf, ConfigError> {
    match value {
        Some(path) if path.trim().is_empty() => Err(ConfigError::Invalid(format!(
            "`{key}` must not be empty"
        ))),
        Some(path) => Ok(PathBuf::from(path.trim())),
        None => Ok(default()),
    }
}
