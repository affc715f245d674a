//! Bounded traversal.
//!
//! Explicit stack of open directory listings, one per level. Candidates come
//! out in the depth-first order of a recursive walk.

use std::fs;
use std::path::Path;
use std::vec;
use tracing::debug;

use super::FileCandidate;

pub struct BoundedWalk {
    stack: Vec<(vec::IntoIter<fs::DirEntry>, usize)>,
    limit: usize,
}

/// Read one directory, sorted by name. Unreadable directories yield nothing.
fn list_dir(dir: &Path) -> Option<vec::IntoIter<fs::DirEntry>> {
    match fs::read_dir(dir) {
        Ok(rd) => {
            let mut entries: Vec<fs::DirEntry> = rd.filter_map(Result::ok).collect();
            entries.sort_by_key(|e| e.file_name());
            Some(entries.into_iter())
        }
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "cannot read directory; skipping subtree");
            None
        }
    }
}

impl BoundedWalk {
    /// Root is level 1; a directory at level `d` is only read when `d <= limit`.
    pub fn new(root: &Path, limit: usize) -> Self {
        let mut stack = Vec::new();
        if limit >= 1 {
            if let Some(entries) = list_dir(root) {
                stack.push((entries, 1));
            }
        }
        Self { stack, limit }
    }
}

impl Iterator for BoundedWalk {
    type Item = FileCandidate;

    fn next(&mut self) -> Option<FileCandidate> {
        loop {
            let (entries, depth) = self.stack.last_mut()?;
            let depth = *depth;
            let Some(entry) = entries.next() else {
                self.stack.pop();
                continue;
            };

            let is_dir = match entry.file_type() {
                Ok(ft) => ft.is_dir(),
                Err(e) => {
                    debug!(path = %entry.path().display(), error = %e, "cannot stat entry; skipping");
                    continue;
                }
            };

            if is_dir {
                if depth < self.limit {
                    if let Some(children) = list_dir(&entry.path()) {
                        self.stack.push((children, depth + 1));
                    }
                }
                continue;
            }

            return Some(FileCandidate::from_path(entry.path()));
        }
    }
}
