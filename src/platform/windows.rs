//! Windows implementations of platform helpers (best-effort).
//!
//! Windows lacks POSIX mode semantics and std offers no O_NOFOLLOW equivalent,
//! so the symlink-ancestor check done by the caller is the only defense here.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Open log file for appending.
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
