//! Config validation logic.
//! Verifies the source root before any traversal starts and turns the merged
//! settings into an immutable ScanRequest.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::errors::PhotoToolError;
use crate::scan::ScanRequest;

use super::types::Config;

impl Config {
    /// Validate the source root and build the request for this run.
    ///
    /// - source must be set, exist and be stat-able (fatal otherwise).
    /// - source is made absolute so every candidate path is absolute too.
    /// - target is not required to exist; dated directories are created per file.
    /// - target is made absolute with its existing part resolved, so it compares
    ///   equal to candidate paths when it lies inside the source.
    pub fn validate(&self) -> Result<ScanRequest> {
        let source = self.source.as_deref().ok_or(PhotoToolError::MissingSource)?;
        ensure_source_accessible(source)?;

        let source = dunce::canonicalize(source).map_err(|e| PhotoToolError::SourceUnreadable {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(source = %source.display(), "source root resolved");

        if let Ok(meta) = fs::metadata(&self.target) {
            if !meta.is_dir() {
                warn!(
                    target_dir = %self.target.display(),
                    "target exists but is not a directory; every move will fail"
                );
            }
        }

        let destination = resolve_destination(&self.target);
        let request = ScanRequest::new(
            source,
            destination,
            &self.extensions,
            self.depth,
            self.preview,
        );
        info!(
            source = %request.source.display(),
            target_dir = %request.destination.display(),
            depth = request.max_depth,
            preview = request.preview,
            "Config validated"
        );
        Ok(request)
    }
}

/// Absolute form of `target`, resolving symlinks in whatever prefix of it exists.
fn resolve_destination(target: &Path) -> PathBuf {
    let abs = std::path::absolute(target).unwrap_or_else(|_| target.to_path_buf());
    let mut existing = abs.as_path();
    let mut missing = Vec::new();
    loop {
        if let Ok(resolved) = dunce::canonicalize(existing) {
            return missing.iter().rev().fold(resolved, |acc, part| acc.join(part));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return abs.clone(),
        }
    }
}

/// Stat the source root; a missing or inaccessible root aborts the run.
fn ensure_source_accessible(path: &Path) -> Result<(), PhotoToolError> {
    match fs::metadata(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            error!("source does not exist: {}", path.display());
            Err(PhotoToolError::SourceNotFound(path.to_path_buf()))
        }
        Err(e) => {
            error!("source is not accessible: {}: {e}", path.display());
            Err(PhotoToolError::SourceUnreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    }
}
