//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr through `tracing_subscriber::fmt`; user-facing
//! status lines are rendered separately through `RenderSink`.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Parse the configured filter, falling back to `warn` on a bad directive.
///
/// Returns the filter plus the parse error message, if any, so the caller
/// can surface it once the renderer exists.
pub fn build_filter(config: &LoggingConfig) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(&config.filter) {
        Ok(filter) => (filter, None),
        Err(err) => (
            EnvFilter::new("warn"),
            Some(format!("invalid log filter `{}`: {err}", config.filter)),
        ),
    }
}

fn init_tracing_once(config: &LoggingConfig, once: &OnceLock<()>) -> Option<String> {
    let mut problem = None;
    let _ = once.get_or_init(|| {
        let (filter, err) = build_filter(config);
        problem = err;
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
    problem
}

/// Install the global subscriber once; later calls are no-ops.
pub fn init_tracing(config: &LoggingConfig) -> Option<String> {
    init_tracing_once(config, &TRACING_INIT)
}
