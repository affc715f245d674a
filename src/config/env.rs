//! Environment overrides.
//! Sits between the config file and CLI flags in precedence.

use std::env;
use std::path::PathBuf;

use crate::errors::PhotoToolError;

use super::types::{Config, LogLevel};

pub const ENV_PATH: &str = "PHOTO_TOOL_PATH";
pub const ENV_TARGET: &str = "PHOTO_TOOL_TARGET";
pub const ENV_EXT: &str = "PHOTO_TOOL_EXT";
pub const ENV_DEPTH: &str = "PHOTO_TOOL_DEPTH";
pub const ENV_PREVIEW: &str = "PHOTO_TOOL_PREVIEW";
pub const ENV_LOG_LEVEL: &str = "PHOTO_TOOL_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "PHOTO_TOOL_LOG_FILE";

/// Read a variable, treating unset and blank the same.
fn var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, PhotoToolError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PhotoToolError::InvalidEnv {
            var,
            value: value.to_string(),
        }),
    }
}

/// Apply `PHOTO_TOOL_*` variables onto `cfg`.
pub fn apply_env_overrides(cfg: &mut Config) -> Result<(), PhotoToolError> {
    if let Some(p) = var(ENV_PATH) {
        cfg.source = Some(PathBuf::from(p));
    }
    if let Some(t) = var(ENV_TARGET) {
        cfg.target = PathBuf::from(t);
    }
    if let Some(list) = var(ENV_EXT) {
        let exts: Vec<String> = list
            .split(',')
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if !exts.is_empty() {
            cfg.extensions = exts;
        }
    }
    if let Some(d) = var(ENV_DEPTH) {
        cfg.depth = d.parse().map_err(|_| PhotoToolError::InvalidEnv {
            var: ENV_DEPTH,
            value: d.clone(),
        })?;
    }
    if let Some(p) = var(ENV_PREVIEW) {
        cfg.preview = parse_bool(ENV_PREVIEW, &p)?;
    }
    if let Some(l) = var(ENV_LOG_LEVEL) {
        cfg.log_level = LogLevel::parse(&l).ok_or(PhotoToolError::InvalidEnv {
            var: ENV_LOG_LEVEL,
            value: l.clone(),
        })?;
    }
    if let Some(f) = var(ENV_LOG_FILE) {
        cfg.log_file = Some(PathBuf::from(f));
    }
    Ok(())
}
