//! Shared test fixtures for theme/prefs/app test modules.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ui::render::RenderSink;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("vinced-theme-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// One call captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Warn(String),
    Section(String),
    Activity(String),
    Field(String, String),
    Detail(String),
    Error(String),
}

/// `RenderSink` that records every call instead of printing.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().expect("sink lock").clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.collect(|event| match event {
            SinkEvent::Warn(msg) => Some(msg.clone()),
            _ => None,
        })
    }

    pub fn activities(&self) -> Vec<String> {
        self.collect(|event| match event {
            SinkEvent::Activity(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn details(&self) -> Vec<String> {
        self.collect(|event| match event {
            SinkEvent::Detail(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.collect(|event| match event {
            SinkEvent::Error(msg) => Some(msg.clone()),
            _ => None,
        })
    }

    fn collect(&self, pick: impl Fn(&SinkEvent) -> Option<String>) -> Vec<String> {
        self.events
            .lock()
            .expect("sink lock")
            .iter()
            .filter_map(pick)
            .collect()
    }

    fn push(&self, event: SinkEvent) {
        self.events.lock().expect("sink lock").push(event);
    }
}

impl RenderSink for RecordingSink {
    fn warn(&self, msg: &str) {
        self.push(SinkEvent::Warn(msg.to_string()));
    }

    fn section(&self, title: &str) {
        self.push(SinkEvent::Section(title.to_string()));
    }

    fn activity(&self, text: &str) {
        self.push(SinkEvent::Activity(text.to_string()));
    }

    fn field(&self, key: &str, value: &str) {
        self.push(SinkEvent::Field(key.to_string(), value.to_string()));
    }

    fn detail(&self, text: &str) {
        self.push(SinkEvent::Detail(text.to_string()));
    }

    fn error(&self, msg: &str) {
        self.push(SinkEvent::Error(msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
        assert!(fixture.path().join("nested").is_dir());
    }

    #[test]
    fn recording_sink_keeps_call_order() {
        let sink = RecordingSink::default();
        sink.section("Theme");
        sink.warn("careful");
        sink.field("records", "17");
        assert_eq!(
            sink.events(),
            vec![
                SinkEvent::Section("Theme".into()),
                SinkEvent::Warn("careful".into()),
                SinkEvent::Field("records".into(), "17".into()),
            ]
        );
        assert_eq!(sink.warnings(), vec!["careful".to_string()]);
    }
}
