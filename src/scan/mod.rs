//! Traversal engine.
//!
//! Produces a lazy sequence of [`FileCandidate`]s under the source root in one
//! of two modes:
//! - unbounded (`max_depth == 0`): full recursive walk, filtered by extension;
//! - bounded (`max_depth > 0`): recursion capped at `max_depth` levels (and at
//!   [`MAX_DEPTH_CEILING`]), yielding every file with no extension filter.

mod bounded;
mod unbounded;

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub use bounded::BoundedWalk;
pub use unbounded::UnboundedWalk;

use crate::config::MAX_DEPTH_CEILING;

/// Immutable description of one run, built once from the merged config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Absolute source root
    pub source: PathBuf,
    /// Root under which `YYYY-MM-DD` directories are created
    pub destination: PathBuf,
    /// Upper-case extensions without a leading dot
    pub extensions: BTreeSet<String>,
    /// 0 = unbounded, otherwise number of directory levels to visit
    pub max_depth: usize,
    /// Report only; never touch the filesystem
    pub preview: bool,
}

impl ScanRequest {
    pub fn new<S: AsRef<str>>(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        extensions: &[S],
        max_depth: usize,
        preview: bool,
    ) -> Self {
        let extensions = extensions
            .iter()
            .map(|e| normalize_extension(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            source: source.into(),
            destination: destination.into(),
            extensions,
            max_depth,
            preview,
        }
    }

    /// Effective recursion limit in bounded mode; None means unbounded.
    pub fn depth_limit(&self) -> Option<usize> {
        (self.max_depth > 0).then(|| self.max_depth.min(MAX_DEPTH_CEILING))
    }
}

/// Case-insensitive exact match of the file's extension. No extension never matches.
fn extension_in(extensions: &BTreeSet<String>, path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| extensions.contains(&ext.to_ascii_uppercase()))
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_uppercase()
}

/// One file found during traversal. Discarded once processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub name: String,
    pub hidden: bool,
}

impl FileCandidate {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let hidden = name.starts_with('.');
        Self { path, name, hidden }
    }
}

/// Either traversal mode behind a single iterator type.
pub enum Traversal {
    Unbounded(UnboundedWalk),
    Bounded(BoundedWalk),
}

impl Traversal {
    /// Pick the traversal mode from the request's depth.
    pub fn new(request: &ScanRequest) -> Self {
        match request.depth_limit() {
            None => Traversal::Unbounded(UnboundedWalk::new(request)),
            Some(limit) => Traversal::Bounded(BoundedWalk::new(&request.source, limit)),
        }
    }
}

impl Iterator for Traversal {
    type Item = FileCandidate;

    fn next(&mut self) -> Option<FileCandidate> {
        match self {
            Traversal::Unbounded(w) => w.next(),
            Traversal::Bounded(w) => w.next(),
        }
    }
}
