//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Resolves which file to read: `--config`, then `$PHOTO_TOOL_CONFIG`, then the OS default.
//!
//! Notes:
//! - This module only reads the config file; path validation happens elsewhere.
//! - Unknown XML elements are rejected to surface misconfigurations early.
//!
//! Format:
//! <config>
//!   <path>/photos/inbox</path>
//!   <target>/photos/sorted</target>
//!   <ext>JPG</ext>
//!   <ext>HEIC</ext>
//!   <depth>0</depth>
//!   <preview>false</preview>
//!   <log_level>info</log_level>
//!   <log_file>/path/to/photo_tool.log</log_file>
//! </config>

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::CONFIG_ENV;
use super::paths::default_config_path;
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
pub struct XmlConfig {
    #[serde(rename = "path")]
    pub path: Option<String>,
    #[serde(rename = "target")]
    pub target: Option<String>,
    #[serde(rename = "ext", default)]
    pub ext: Vec<String>,
    #[serde(rename = "depth", default, deserialize_with = "de_usize_trimmed_opt")]
    pub depth: Option<usize>,
    #[serde(rename = "preview")]
    pub preview: Option<bool>,
    #[serde(rename = "log_level")]
    pub log_level: Option<String>,
    #[serde(rename = "log_file")]
    pub log_file: Option<String>,
}

// Custom deserializer that trims surrounding whitespace for optional usize
fn de_usize_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<usize>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid depth '{s}': {e}"))),
    }
}

fn non_empty_path(s: Option<&str>) -> Option<PathBuf> {
    s.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(PathBuf::from)
}

impl XmlConfig {
    /// Overlay the values present in the file onto `cfg`.
    pub fn apply_to(&self, cfg: &mut Config) {
        if let Some(p) = non_empty_path(self.path.as_deref()) {
            cfg.source = Some(p);
        }
        if let Some(t) = non_empty_path(self.target.as_deref()) {
            cfg.target = t;
        }
        let exts: Vec<String> = self
            .ext
            .iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if !exts.is_empty() {
            cfg.extensions = exts;
        }
        if let Some(d) = self.depth {
            cfg.depth = d;
        }
        if let Some(p) = self.preview {
            cfg.preview = p;
        }
        if let Some(level) = self.log_level.as_deref().and_then(LogLevel::parse) {
            cfg.log_level = level;
        }
        if let Some(f) = non_empty_path(self.log_file.as_deref()) {
            cfg.log_file = Some(f);
        }
    }
}

/// Load and parse a config file from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<XmlConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(parsed)
}

/// Locate and load the config file, if any.
///
/// An explicit path (the `--config` flag or `$PHOTO_TOOL_CONFIG`) must exist.
/// The OS default location is optional: a missing file yields `Ok(None)`.
pub fn load_config_file(explicit: Option<&Path>) -> Result<Option<(PathBuf, XmlConfig)>> {
    let env_set = env::var_os(CONFIG_ENV).is_some_and(|v| !v.is_empty());
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => match default_config_path() {
            Some(p) => (p, env_set),
            None => return Ok(None),
        },
    };

    if !path.exists() {
        if required {
            bail!("Config file not found: {}", path.display());
        }
        debug!(path = %path.display(), "No config file at default location");
        return Ok(None);
    }

    let parsed = load_config_from_xml_path(&path)?;
    Ok(Some((path, parsed)))
}
