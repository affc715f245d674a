//! Metadata preservation for the copy fallback.
//! Timestamps and permission bits come from source metadata captured before
//! the source is removed.

use anyhow::Result;
use filetime::{FileTime, set_file_times};
use std::fs;
use std::path::Path;
use tracing::debug;

pub(super) fn preserve_metadata(src_meta: &fs::Metadata, dest: &Path) -> Result<()> {
    let mt = FileTime::from_last_modification_time(src_meta);
    let at = FileTime::from_last_access_time(src_meta);
    if let Err(e) = set_file_times(dest, at, mt) {
        debug!(dest = %dest.display(), error = %e, "could not copy timestamps");
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = src_meta.permissions().mode() & 0o777;
        if let Err(e) = fs::set_permissions(dest, fs::Permissions::from_mode(mode)) {
            debug!(dest = %dest.display(), error = %e, "could not copy permissions");
        }
    }
    #[cfg(not(unix))]
    {
        if let Err(e) = fs::set_permissions(dest, src_meta.permissions()) {
            debug!(dest = %dest.display(), error = %e, "could not copy permissions");
        }
    }

    Ok(())
}
