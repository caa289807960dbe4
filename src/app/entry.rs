//! Binary entry: load config, install tracing, plan, and run the actions.

use std::io::{self, Write};
use std::path::Path;

use vinced_theme::config::load_config_with_diagnostics;
use vinced_theme::error::{IoOp, ThemeError};
use vinced_theme::logging::init_tracing;
use vinced_theme::prefs::{apply_to_target, split_line_ending, FsPrefsStore, PrefsStore};
use vinced_theme::theme::ThemeDocument;
use vinced_theme::ui::render::{RenderSink, Renderer};
use vinced_theme::ui::swatch::render_swatches;

use crate::app::plan::{plan_from_args, Action, Plan, ThemeSource};
use crate::cli;

pub(crate) fn run(args: cli::Args) -> i32 {
    // 1) load config, 2) install tracing, 3) plan, 4) execute in order.
    let bootstrap_renderer = Renderer::new(!args.no_color);
    let loaded = match load_config_with_diagnostics(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            bootstrap_renderer.error(&ThemeError::from(err).to_string());
            return 1;
        }
    };
    let color = loaded.config.display.color && !args.no_color;
    let renderer = Renderer::new(color);
    if let Some(problem) = init_tracing(&loaded.config.logging) {
        renderer.warn(&problem);
    }
    for warning in &loaded.diagnostics.warnings {
        renderer.warn(warning);
    }
    tracing::debug!(source = ?loaded.source, "configuration loaded");

    let plan = plan_from_args(&args, &loaded.config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(&plan, &FsPrefsStore, &renderer, &mut out, color) {
        Ok(()) => 0,
        Err(err) => {
            renderer.error(&err.to_string());
            1
        }
    }
}

/// Run every planned action, stopping at the first failure.
pub(crate) fn execute(
    plan: &Plan,
    store: &dyn PrefsStore,
    sink: &dyn RenderSink,
    out: &mut dyn Write,
    color: bool,
) -> Result<(), ThemeError> {
    if plan.defaulted_to_use {
        sink.activity("No action specified, defaulting to USE");
    }
    let document = load_document(plan, store, sink)?;

    for action in &plan.actions {
        match action {
            Action::Check => {
                sink.section("Theme records");
                for row in document.check_rows() {
                    sink.detail(&row.to_string());
                }
            }
            Action::View => {
                render_swatches(&mut *out, &document.swatches(), color)
                    .map_err(|e| ThemeError::io(IoOp::WritePreview, Path::new("stdout"), e))?;
            }
            Action::Apply { label, target } => {
                tracing::info!(action = *label, target = %target.display(), "applying theme");
                apply_to_target(store, target, &document, sink)?;
            }
        }
    }
    Ok(())
}

fn load_document(
    plan: &Plan,
    store: &dyn PrefsStore,
    sink: &dyn RenderSink,
) -> Result<ThemeDocument, ThemeError> {
    match &plan.source {
        ThemeSource::File(path) => {
            let lines = store
                .read_lines(path)
                .and_then(|lines| lines.ok_or_else(|| io::Error::from(io::ErrorKind::NotFound)))
                .map_err(|e| ThemeError::io(IoOp::ReadTheme, path, e))?;
            let bodies = lines.iter().map(|line| split_line_ending(line).0);
            Ok(ThemeDocument::build_from_source(bodies, &plan.overrides, sink).document)
        }
        ThemeSource::Defaults => {
            sink.activity("Using default colors");
            Ok(ThemeDocument::build_defaults(&plan.overrides))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::plan::tests::test_config;
    use clap::Parser;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct LinesSink {
        lines: Mutex<Vec<String>>,
    }

    impl LinesSink {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().expect("sink lock").clone()
        }

        fn push(&self, kind: &str, text: &str) {
            self.lines
                .lock()
                .expect("sink lock")
                .push(format!("{kind}: {text}"));
        }
    }

    impl RenderSink for LinesSink {
        fn warn(&self, msg: &str) {
            self.push("warn", msg);
        }
        fn section(&self, title: &str) {
            self.push("section", title);
        }
        fn activity(&self, text: &str) {
            self.push("activity", text);
        }
        fn field(&self, key: &str, value: &str) {
            self.push("field", &format!("{key}={value}"));
        }
        fn detail(&self, text: &str) {
            self.push("detail", text);
        }
        fn error(&self, msg: &str) {
            self.push("error", msg);
        }
    }

    #[derive(Default)]
    struct MapStore {
        files: RefCell<BTreeMap<PathBuf, Vec<String>>>,
    }

    impl MapStore {
        fn with(path: &str, text: &str) -> Self {
            let store = Self::default();
            store.files.borrow_mut().insert(
                PathBuf::from(path),
                text.split_inclusive('\n').map(str::to_string).collect(),
            );
            store
        }

        fn get(&self, path: &str) -> Option<Vec<String>> {
            self.files.borrow().get(Path::new(path)).cloned()
        }
    }

    impl PrefsStore for MapStore {
        fn read_lines(&self, path: &Path) -> io::Result<Option<Vec<String>>> {
            Ok(self.files.borrow().get(path).cloned())
        }

        fn write_all(&self, path: &Path, lines: &[String]) -> io::Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), lines.to_vec());
            Ok(())
        }

        fn atomic_replace(&self, scratch: &Path, target: &Path) -> io::Result<()> {
            let lines = self
                .files
                .borrow_mut()
                .remove(scratch)
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
            self.files.borrow_mut().insert(target.to_path_buf(), lines);
            Ok(())
        }
    }

    fn plan(argv: &[&str]) -> Plan {
        let mut full = vec!["vinced-theme"];
        full.extend_from_slice(argv);
        plan_from_args(&cli::Args::parse_from(full), &test_config())
    }

    const THEME: &str = "CURSORCOLOR=LOAD,ANSI,255,255,255\nCOLOR=0x12,0x34,0x56\n";

    #[test]
    fn default_run_patches_use_target_only() {
        let store = MapStore::with("dark.theme", THEME);
        let sink = LinesSink::default();
        let mut out = Vec::new();
        execute(&plan(&["dark.theme"]), &store, &sink, &mut out, false).expect("run");

        let lines = sink.lines();
        assert_eq!(lines[0], "activity: No action specified, defaulting to USE");
        let written = store.get("/env/ViNCEd.prefs").expect("use target written");
        assert_eq!(written[0], ";Colors:\n");
        assert_eq!(written[1], "CURSORCOLOR=LOAD,ANSI,0xffff,0xffff,0xffff\n");
        assert_eq!(written[2], "COLOR=NOLOAD,NOANSI,0x1212,0x3434,0x5656\n");
        assert!(store.get("/envarc/ViNCEd.prefs").is_none());
        assert!(out.is_empty());
    }

    #[test]
    fn check_lists_records_without_writing() {
        let store = MapStore::with("dark.theme", THEME);
        let sink = LinesSink::default();
        let mut out = Vec::new();
        execute(&plan(&["dark.theme", "--check"]), &store, &sink, &mut out, false).expect("run");

        let details: Vec<String> = sink
            .lines()
            .into_iter()
            .filter(|line| line.starts_with("detail: "))
            .collect();
        assert_eq!(details.len(), 17);
        assert_eq!(
            details[0],
            "detail:  1: CURSORCOLOR=LOAD,ANSI,0xffff,0xffff,0xffff RGB(255,255,255)"
        );
        assert!(store.get("/env/ViNCEd.prefs").is_none());
    }

    #[test]
    fn view_writes_swatches_to_output() {
        let store = MapStore::default();
        let sink = LinesSink::default();
        let mut out = Vec::new();
        execute(&plan(&["--reset", "--view"]), &store, &sink, &mut out, false).expect("run");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.lines().count(), 16);
        assert!(text.starts_with("   0 RGB(0,0,0)"));
    }

    #[test]
    fn missing_theme_file_fails_before_any_write() {
        let store = MapStore::default();
        let sink = LinesSink::default();
        let mut out = Vec::new();
        let err = execute(&plan(&["missing.theme", "--save"]), &store, &sink, &mut out, false)
            .expect_err("must fail");
        assert!(matches!(
            err,
            ThemeError::Io {
                op: IoOp::ReadTheme,
                ..
            }
        ));
        assert!(store.get("/envarc/ViNCEd.prefs").is_none());
    }

    #[test]
    fn use_and_save_both_patch_their_targets() {
        let store = MapStore::with("/envarc/ViNCEd.prefs", "FONT=topaz.font,8\nCURSORCOLOR=0,0,0\n");
        let sink = LinesSink::default();
        let mut out = Vec::new();
        execute(&plan(&["--reset", "--use", "--save", "--load"]), &store, &sink, &mut out, false)
            .expect("run");

        let saved = store.get("/envarc/ViNCEd.prefs").expect("save target");
        assert_eq!(saved[0], "FONT=topaz.font,8\n");
        assert_eq!(saved[1], "CURSORCOLOR=LOAD,NOANSI,0x0000,0x0000,0x0000\n");
        assert_eq!(saved[2], ";Colors:\n");
        assert_eq!(saved.len(), 3 + 16);
        assert_eq!(store.get("/env/ViNCEd.prefs").map(|l| l.len()), Some(18));
    }
}
