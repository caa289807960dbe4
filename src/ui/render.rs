//! Rendering contract and default terminal renderer binding.
//!
//! `RenderSink` is the UI contract consumed by theme loading, prefs patching,
//! and the app layer.

pub use crate::ui::renderer::Renderer;

/// Injectable rendering interface used by orchestration code.
///
/// `Renderer` remains the default terminal implementation, but tests can
/// substitute a recording sink without coupling to stderr output.
pub trait RenderSink: Send + Sync {
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render a titled section divider.
    fn section(&self, title: &str);
    /// Render activity/lifecycle text.
    fn activity(&self, text: &str);
    /// Render one key/value field row.
    fn field(&self, key: &str, value: &str);
    /// Render additional detail text.
    fn detail(&self, text: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
}

impl RenderSink for Renderer {
    fn warn(&self, msg: &str) {
        self.warn(msg);
    }

    fn section(&self, title: &str) {
        self.section(title);
    }

    fn activity(&self, text: &str) {
        self.activity(text);
    }

    fn field(&self, key: &str, value: &str) {
        self.field(key, value);
    }

    fn detail(&self, text: &str) {
        self.detail(text);
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }
}
