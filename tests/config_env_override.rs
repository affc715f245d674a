use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use photo_tool::config::apply_env_overrides;
use photo_tool::{Config, LogLevel, PhotoToolError, default_config_path};

const VARS: [&str; 5] = [
    "PHOTO_TOOL_PATH",
    "PHOTO_TOOL_EXT",
    "PHOTO_TOOL_DEPTH",
    "PHOTO_TOOL_PREVIEW",
    "PHOTO_TOOL_LOG_LEVEL",
];

fn clear() {
    for v in VARS {
        unsafe {
            std::env::remove_var(v);
        }
    }
}

#[test]
#[serial]
fn env_values_replace_config_values() {
    clear();
    unsafe {
        std::env::set_var("PHOTO_TOOL_PATH", "/photos/inbox");
        std::env::set_var("PHOTO_TOOL_EXT", "png, heic ,");
        std::env::set_var("PHOTO_TOOL_DEPTH", " 0 ");
        std::env::set_var("PHOTO_TOOL_PREVIEW", "yes");
        std::env::set_var("PHOTO_TOOL_LOG_LEVEL", "debug");
    }

    let mut cfg = Config::default();
    let res = apply_env_overrides(&mut cfg);
    clear();
    res.unwrap();

    assert_eq!(cfg.source, Some(PathBuf::from("/photos/inbox")));
    assert_eq!(cfg.extensions, vec!["png".to_string(), "heic".to_string()]);
    assert_eq!(cfg.depth, 0);
    assert!(cfg.preview);
    assert_eq!(cfg.log_level, LogLevel::Debug);
}

#[test]
#[serial]
fn blank_env_values_are_ignored() {
    clear();
    unsafe {
        std::env::set_var("PHOTO_TOOL_EXT", "   ");
        std::env::set_var("PHOTO_TOOL_DEPTH", "");
    }
    let mut cfg = Config::default();
    let res = apply_env_overrides(&mut cfg);
    clear();
    res.unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
#[serial]
fn bad_log_level_is_rejected() {
    clear();
    unsafe {
        std::env::set_var("PHOTO_TOOL_LOG_LEVEL", "chatty");
    }
    let mut cfg = Config::default();
    let res = apply_env_overrides(&mut cfg);
    clear();
    match res {
        Err(PhotoToolError::InvalidEnv { var, value }) => {
            assert_eq!(var, "PHOTO_TOOL_LOG_LEVEL");
            assert_eq!(value, "chatty");
        }
        other => panic!("expected InvalidEnv, got {other:?}"),
    }
}

#[test]
#[serial]
fn config_env_var_overrides_default_location() {
    let td = tempdir().unwrap();
    let cfg = fs::canonicalize(td.path()).unwrap().join("custom.xml");
    unsafe {
        std::env::set_var("PHOTO_TOOL_CONFIG", &cfg);
    }
    let resolved = default_config_path();
    unsafe {
        std::env::remove_var("PHOTO_TOOL_CONFIG");
    }
    assert_eq!(resolved, Some(cfg));
}
