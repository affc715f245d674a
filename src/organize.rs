//! Classifier/mover.
//!
//! For each candidate: skip hidden files, read the capture date, compute
//! `<destination>/<YYYY-MM-DD>/<name>`, then move (or only report, in preview).
//! Skips are silent on the console; failures are reported and never stop the run.

use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::capture::{CaptureError, read_capture_date};
use crate::errors::PhotoToolError;
use crate::fs_ops::{MoveMethod, ensure_dir, move_file};
use crate::output as out;
use crate::scan::{FileCandidate, ScanRequest, Traversal};

#[derive(Debug)]
pub enum SkipReason {
    Hidden,
    NoCaptureDate(CaptureError),
    /// Already sits at its dated destination (destination root inside the source).
    AlreadyInPlace,
}

/// Result of processing one candidate.
#[derive(Debug)]
pub enum Outcome {
    Skipped {
        src: PathBuf,
        reason: SkipReason,
    },
    Previewed {
        src: PathBuf,
        dest: PathBuf,
    },
    Moved {
        src: PathBuf,
        dest: PathBuf,
        method: MoveMethod,
    },
    Failed {
        src: PathBuf,
        dest: PathBuf,
        error: anyhow::Error,
    },
}

/// Final destination for a file captured on `dir_name`.
pub fn destination_for(root: &Path, dir_name: &str, candidate: &FileCandidate) -> PathBuf {
    let dir = root.join(dir_name);
    match candidate.path.file_name() {
        Some(name) => dir.join(name),
        None => dir.join(&candidate.name),
    }
}

/// Decide what to do with one candidate and do it.
pub fn process_candidate(request: &ScanRequest, candidate: &FileCandidate) -> Outcome {
    let src = candidate.path.clone();
    if candidate.hidden {
        return Outcome::Skipped {
            src,
            reason: SkipReason::Hidden,
        };
    }

    let date = match read_capture_date(&src) {
        Ok(d) => d,
        Err(e) => {
            debug!(path = %src.display(), reason = %e, "skipping file without capture date");
            return Outcome::Skipped {
                src,
                reason: SkipReason::NoCaptureDate(e),
            };
        }
    };

    let dir_name = date.dir_name();
    let dest = destination_for(&request.destination, &dir_name, candidate);
    if dest == src {
        debug!(path = %src.display(), "already in its dated directory");
        return Outcome::Skipped {
            src,
            reason: SkipReason::AlreadyInPlace,
        };
    }
    if request.preview {
        return Outcome::Previewed { src, dest };
    }

    if let Err(error) = ensure_dir(&request.destination.join(&dir_name)) {
        return Outcome::Failed { src, dest, error };
    }

    match move_file(&src, &dest) {
        Ok(method) => Outcome::Moved { src, dest, method },
        Err(error) => Outcome::Failed { src, dest, error },
    }
}

/// Print the console line for an outcome. Skips print nothing.
pub fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Skipped { .. } => {}
        Outcome::Previewed { src, dest } => {
            out::print_user(&format!(
                "preview: would move {} -> {}",
                src.display(),
                dest.display()
            ));
        }
        Outcome::Moved { src, dest, method } => {
            info!(src = %src.display(), dest = %dest.display(), ?method, "Move completed");
            out::print_user(&format!("moved {} -> {}", src.display(), dest.display()));
        }
        Outcome::Failed { src, dest, error } => {
            let kind = error
                .downcast_ref::<PhotoToolError>()
                .map(PhotoToolError::code)
                .unwrap_or("move_error");
            debug!(src = %src.display(), dest = %dest.display(), kind, error = %error, "Move failed");
            out::print_error(&format!(
                "could not move {} -> {}: {}",
                src.display(),
                dest.display(),
                error
            ));
        }
    }
}

/// Per-run tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub moved: usize,
    pub previewed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Skipped { .. } => self.skipped += 1,
            Outcome::Previewed { .. } => self.previewed += 1,
            Outcome::Moved { .. } => self.moved += 1,
            Outcome::Failed { .. } => self.failed += 1,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} moved, {} previewed, {} skipped, {} failed",
            self.moved, self.previewed, self.skipped, self.failed
        )
    }
}

/// Walk the source and process every candidate in turn.
pub fn run(request: &ScanRequest) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    for candidate in Traversal::new(request) {
        let outcome = process_candidate(request, &candidate);
        report(&outcome);
        summary.record(&outcome);
    }
    info!(
        moved = summary.moved,
        previewed = summary.previewed,
        skipped = summary.skipped,
        failed = summary.failed,
        "Run finished"
    );
    Ok(summary)
}
