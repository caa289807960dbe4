//! File access used by prefs patching.
//!
//! Lines travel with their terminators so a rewrite reproduces untouched
//! lines byte for byte.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Minimal file contract the merge write path depends on.
///
/// `FsPrefsStore` is the real implementation; tests can substitute a store
/// that fails at a chosen step.
pub trait PrefsStore {
    /// Read `path` as lines that keep their terminators, or `None` when it
    /// does not exist.
    fn read_lines(&self, path: &Path) -> io::Result<Option<Vec<String>>>;
    /// Create or truncate `path` and write the lines exactly as given.
    fn write_all(&self, path: &Path, lines: &[String]) -> io::Result<()>;
    /// Move `scratch` over `target` in one step.
    fn atomic_replace(&self, scratch: &Path, target: &Path) -> io::Result<()>;
}

/// `PrefsStore` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPrefsStore;

impl PrefsStore for FsPrefsStore {
    fn read_lines(&self, path: &Path) -> io::Result<Option<Vec<String>>> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text.split_inclusive('\n').map(str::to_string).collect())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write_all(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writer.write_all(line.as_bytes())?;
        }
        let file = writer.into_inner().map_err(io::IntoInnerError::into_error)?;
        file.sync_all()
    }

    fn atomic_replace(&self, scratch: &Path, target: &Path) -> io::Result<()> {
        // rename replaces an existing target, so the original stays intact
        // until the new content is in place.
        fs::rename(scratch, target)
    }
}
