//! Environment overrides.
//!
//! `VINCED_THEME_*` variables outrank values read from config files.

use std::path::PathBuf;

use super::{Config, ConfigDiagnostics};

pub(super) const ENV_USE_PREFS: &str = "VINCED_THEME_USE_PREFS";
pub(super) const ENV_SAVE_PREFS: &str = "VINCED_THEME_SAVE_PREFS";
pub(super) const ENV_LOG: &str = "VINCED_THEME_LOG";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
    diagnostics: &mut ConfigDiagnostics,
) where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(path) = non_empty_env(env_lookup, ENV_USE_PREFS, diagnostics) {
        config.targets.use_path = PathBuf::from(path);
    }
    if let Some(path) = non_empty_env(env_lookup, ENV_SAVE_PREFS, diagnostics) {
        config.targets.save_path = PathBuf::from(path);
    }
    if let Some(filter) = non_empty_env(env_lookup, ENV_LOG, diagnostics) {
        config.logging.filter = filter;
    }
}

/// Trimmed env value, or `None` (with a diagnostic) when set but blank.
fn non_empty_env<FEnv>(
    env_lookup: &FEnv,
    name: &str,
    diagnostics: &mut ConfigDiagnostics,
) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let value = env_lookup(name)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        diagnostics
            .warnings
            .push(format!("ignoring empty environment variable `{name}`"));
        return None;
    }
    Some(trimmed.to_string())
}
