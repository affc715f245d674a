//! Unbounded traversal: full recursive walk, filtered by extension.

use tracing::debug;
use walkdir::WalkDir;

use std::collections::BTreeSet;

use super::{FileCandidate, ScanRequest, extension_in};

pub struct UnboundedWalk {
    inner: walkdir::IntoIter,
    extensions: BTreeSet<String>,
}

impl UnboundedWalk {
    pub fn new(request: &ScanRequest) -> Self {
        Self {
            inner: WalkDir::new(&request.source)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter(),
            extensions: request.extensions.clone(),
        }
    }
}

impl Iterator for UnboundedWalk {
    type Item = FileCandidate;

    fn next(&mut self) -> Option<FileCandidate> {
        loop {
            let entry = match self.inner.next()? {
                Ok(e) => e,
                Err(e) => {
                    debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            if !extension_in(&self.extensions, entry.path()) {
                continue;
            }
            return Some(FileCandidate::from_path(entry.into_path()));
        }
    }
}
