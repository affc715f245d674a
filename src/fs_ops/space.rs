//! Free-space check before the copy fallback.

use std::path::Path;
use tracing::debug;

use crate::errors::PhotoToolError;

/// Headroom kept free on the destination volume on top of the file itself.
const CUSHION: u64 = 4 * 1024 * 1024;

pub(super) fn format_bytes(n: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    let f = n as f64;
    if f >= GB {
        format!("{:.1} GiB", f / GB)
    } else if f >= MB {
        format!("{:.1} MiB", f / MB)
    } else if f >= KB {
        format!("{:.1} KiB", f / KB)
    } else {
        format!("{} B", n)
    }
}

/// Fail with InsufficientSpace when `dst_dir` cannot hold `required` bytes plus headroom.
/// If the volume cannot be queried the check passes and the copy itself decides.
pub(super) fn ensure_space_for_copy(dst_dir: &Path, required: u64) -> Result<(), PhotoToolError> {
    let available = match fs2::available_space(dst_dir) {
        Ok(n) => n,
        Err(e) => {
            debug!(dir = %dst_dir.display(), error = %e, "free space unknown; copying anyway");
            return Ok(());
        }
    };
    if available < required.saturating_add(CUSHION) {
        debug!(
            need = %format_bytes(required),
            free = %format_bytes(available),
            "not enough free space"
        );
        return Err(PhotoToolError::InsufficientSpace {
            required,
            available,
            dest: dst_dir.to_path_buf(),
        });
    }
    Ok(())
}
