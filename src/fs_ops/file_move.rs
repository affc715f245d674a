//! File move implementation.
//! Attempts an atomic rename; on a cross-filesystem error falls back to a safe
//! copy+rename, carries timestamps and permissions over, then removes the source.
//!
//! Never overwrites: an existing destination is reported as DestinationExists
//! and the source stays where it is.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::errors::PhotoToolError;

use super::atomic::try_atomic_move;
use super::copy::safe_copy_and_rename;
use super::helpers::io_error_with_help;
use super::meta::preserve_metadata;
use super::space::ensure_space_for_copy;
use super::util::is_cross_device;

/// How a file reached its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMethod {
    /// Same filesystem; a single rename
    Renamed,
    /// Different filesystem; copied, then source removed
    Copied,
}

/// Move `src` to the exact path `dest`. The parent of `dest` must already exist.
pub fn move_file(src: &Path, dest: &Path) -> Result<MoveMethod> {
    if fs::symlink_metadata(dest).is_ok() {
        return Err(PhotoToolError::DestinationExists(dest.to_path_buf()).into());
    }

    match try_atomic_move(src, dest) {
        Ok(()) => {
            debug!(src = %src.display(), dest = %dest.display(), "Renamed file atomically");
            Ok(MoveMethod::Renamed)
        }
        Err(e) => recover_failed_rename(src, dest, e),
    }
}

/// Handle a failed rename: copy across filesystems on EXDEV, report anything else.
fn recover_failed_rename(src: &Path, dest: &Path, e: io::Error) -> Result<MoveMethod> {
    if !is_cross_device(&e) {
        return Err(io_error_with_help("rename", src)(e));
    }

    warn!(src = %src.display(), dest = %dest.display(), "cross-filesystem move; copying instead");
    let src_meta = fs::metadata(src).map_err(io_error_with_help("stat source", src))?;
    if let Some(dir) = dest.parent() {
        ensure_space_for_copy(dir, src_meta.len())?;
    }

    let bytes = safe_copy_and_rename(src, dest)?;
    preserve_metadata(&src_meta, dest)?;

    if let Err(e) = fs::remove_file(src) {
        // The copy is complete; removing it again restores the pre-move state.
        let _ = fs::remove_file(dest);
        return Err(io_error_with_help("remove original file", src)(e));
    }

    info!(src = %src.display(), dest = %dest.display(), bytes, "Copied file across filesystems");
    Ok(MoveMethod::Copied)
}
