//! Core library for `photo_tool`.
//!
//! Walks a source directory, reads each photo's EXIF capture date and moves it
//! into `<target>/<YYYY-MM-DD>/`. The binary adds config layering and logging
//! on top of these modules.

pub mod capture;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod organize;
pub mod output;
pub mod platform;
pub mod scan;

pub use capture::{CaptureDate, CaptureError, read_capture_date};
pub use config::{Config, LogLevel, default_config_path, path_has_symlink_ancestor};
pub use errors::PhotoToolError;
pub use organize::{Outcome, RunSummary, SkipReason, process_candidate, run};
pub use scan::{FileCandidate, ScanRequest, Traversal};
