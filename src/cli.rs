//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Every setting flag is optional here; the config file and environment fill gaps.
//! - --debug is a shorthand for --log-level debug.

use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Sort photos into YYYY-MM-DD folders by their EXIF capture date.
/// CLI flags override environment variables, which override the config file.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "photo_tool",
    author,
    version,
    about = "Organize photos with EXIF",
    long_about = "Organize photos into YYYY-MM-DD folders using their EXIF capture date. For example:\n\n  photo_tool -p inbox -t sorted -d 0 -e JPG -e PNG -e JPEG"
)]
pub struct Args {
    /// Root directory to scan.
    #[arg(short = 'p', long = "path", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub path: Option<PathBuf>,

    /// Root directory that receives the dated folders (default: current directory).
    #[arg(short = 't', long = "target", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub target: Option<PathBuf>,

    /// File extension to accept (repeatable; case-insensitive; only used with --depth 0).
    #[arg(short = 'e', long = "ext", value_name = "EXT", action = ArgAction::Append)]
    pub ext: Vec<String>,

    /// Scan depth: 0 walks the whole tree, N visits N directory levels (default: 1).
    #[arg(short = 'd', long = "depth", value_name = "N")]
    pub depth: Option<usize>,

    /// Preview only: report what would be moved without touching any file.
    #[arg(long)]
    pub preview: bool,

    /// Move files even if the config file or environment enables preview.
    #[arg(long, conflicts_with = "preview")]
    pub no_preview: bool,

    /// Config file (XML). Defaults to $PHOTO_TOOL_CONFIG or the OS config directory.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL", value_parser = clap::value_parser!(LogLevel))]
    pub log_level: Option<LogLevel>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(long)]
    pub debug: bool,

    /// Also write logs to this file.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,

    /// Print the config file location that would be used, then exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(p) = &self.path {
            cfg.source = Some(p.clone());
        }
        if let Some(t) = &self.target {
            cfg.target = t.clone();
        }
        if !self.ext.is_empty() {
            cfg.extensions = self.ext.clone();
        }
        if let Some(d) = self.depth {
            cfg.depth = d;
        }
        if self.preview {
            cfg.preview = true;
        } else if self.no_preview {
            cfg.preview = false;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(f) = &self.log_file {
            cfg.log_file = Some(f.clone());
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
