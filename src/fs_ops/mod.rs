//! Filesystem operations used to relocate photos.

mod atomic;
mod copy;
mod file_move;
mod helpers;
mod io_copy;
mod meta;
mod space;
mod util;

pub use copy::safe_copy_and_rename;
pub use file_move::{MoveMethod, move_file};
pub use helpers::io_error_with_help;

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Create `dir` and all missing parents; succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(io_error_with_help("create directory", dir))
}
