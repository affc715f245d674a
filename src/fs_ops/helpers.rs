//! I/O helper utilities.
//!
//! Enriches io::Error with the operation, the path and a platform-aware hint,
//! for use with map_err in anyhow::Result code paths.
//!
//! Usage:
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create directory", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

fn hint_for_os_code(code: i32) -> Option<&'static str> {
    #[cfg(unix)]
    {
        match code {
            libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
            libc::EXDEV => Some("cross-filesystem; atomic rename not possible"),
            libc::ENOENT => Some("path not found; it may have been moved or deleted during the run"),
            libc::EEXIST => Some("already exists; remove the existing file to retry"),
            libc::ENOSPC => Some("insufficient space on device"),
            libc::EROFS => Some("read-only filesystem; cannot write here"),
            libc::ENOTDIR => Some("a path component is a file, not a directory"),
            libc::ENAMETOOLONG => Some("filename or path too long"),
            _ => None,
        }
    }
    #[cfg(windows)]
    {
        match code {
            5 => Some("access denied; check permissions"),
            17 => Some("not same device; cross-filesystem move"),
            32 => Some("sharing violation; file is in use"),
            2 | 3 => Some("path not found; it may have been moved or deleted during the run"),
            80 | 183 => Some("already exists; remove the existing file to retry"),
            112 => Some("insufficient disk space"),
            19 => Some("write protected / read-only media"),
            _ => None,
        }
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = code;
        None
    }
}

fn hint_for_kind(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found"),
        io::ErrorKind::AlreadyExists => Some("already exists; remove the existing file to retry"),
        _ => None,
    }
}

/// Format a human-friendly message with op/path plus platform-aware hints.
pub(crate) fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    let hint = match e.raw_os_error() {
        Some(code) => hint_for_os_code(code),
        None => hint_for_kind(e.kind()),
    };
    if let Some(h) = hint {
        msg.push_str(" (");
        msg.push_str(h);
        msg.push(')');
    }
    msg
}

/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_operation_and_path() {
        let e = io::Error::new(io::ErrorKind::NotFound, "gone");
        let msg = build_message("open", Path::new("/x/a.jpg"), &e);
        assert!(msg.starts_with("open '/x/a.jpg': gone"));
        assert!(msg.contains("path not found"));
    }

    #[cfg(unix)]
    #[test]
    fn os_code_hint_wins() {
        let e = io::Error::from_raw_os_error(libc::ENOSPC);
        let msg = build_message("copy", Path::new("/dest"), &e);
        assert!(msg.contains("insufficient space"), "{msg}");
    }

    #[test]
    fn adapter_produces_anyhow_error() {
        let f = io_error_with_help("create directory", Path::new("/dest/2021-03-05"));
        let err = f(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        assert!(err.to_string().contains("create directory '/dest/2021-03-05'"));
    }
}
