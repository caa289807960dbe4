//! Default configuration constants.

/// Directory under the config root that holds this tool's files.
pub(super) const APP_DIR_NAME: &str = "vinced-theme";
/// Config file name looked up locally and under the global config dir.
pub(super) const CONFIG_FILE_NAME: &str = "vinced-theme.toml";
/// Prefs file name inside each target directory.
pub(super) const PREFS_FILE_NAME: &str = "ViNCEd.prefs";
/// Session (USE) target directory, the stand-in for `ENV:`.
pub(super) const USE_DIR_NAME: &str = "ENV";
/// Persistent (SAVE) target directory, the stand-in for `ENVARC:`.
pub(super) const SAVE_DIR_NAME: &str = "ENVARC";
/// Tracing filter used when neither config nor env provides one.
pub(super) const DEFAULT_LOG_FILTER: &str = "warn";
