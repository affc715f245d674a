//! Config module.
//! Provides configuration types, default paths, XML and environment loading, and validation.

pub mod env;
pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use env::apply_env_overrides;
pub use paths::{default_config_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{XmlConfig, load_config_file, load_config_from_xml_path};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PHOTO_TOOL_CONFIG";

/// Extensions accepted in unbounded mode when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["JPG", "JPEG"];

/// Default traversal depth (bounded, root directory only).
pub const DEFAULT_DEPTH: usize = 1;

/// Hard ceiling on bounded recursion regardless of the requested depth.
pub const MAX_DEPTH_CEILING: usize = 100;
