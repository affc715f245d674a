//! Application orchestrator.
//! Merges config layers, initializes logging, validates the source, and runs
//! the organizer over it.

use anyhow::Result;
use tracing::{debug, error, info};

use photo_tool::cli::Args;
use photo_tool::config::{CONFIG_ENV, apply_env_overrides, load_config_file};
use photo_tool::output as out;
use photo_tool::{Config, PhotoToolError, default_config_path, organize};

use crate::logging::init_tracing;

/// Print which config file would be used and whether it exists.
fn print_config_location(args: &Args) {
    let (path, origin) = match (&args.config, std::env::var_os(CONFIG_ENV)) {
        (Some(p), _) => (Some(p.clone()), "--config"),
        (None, Some(_)) => (default_config_path(), CONFIG_ENV),
        (None, None) => (default_config_path(), "default location"),
    };
    match path {
        Some(p) => {
            out::print_info(&format!("Config file ({origin}):\n  {}", p.display()));
            if p.exists() {
                out::print_info("The file exists and will be read.");
            } else {
                out::print_info("No file exists there; built-in defaults apply.");
            }
        }
        None => out::print_error("Could not determine a default config path."),
    }
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_config {
        print_config_location(&args);
        return Ok(());
    }

    // Layering: defaults < config file < environment < flags.
    let mut cfg = Config::default();
    let loaded = load_config_file(args.config.as_deref())?;
    if let Some((_, file_cfg)) = &loaded {
        file_cfg.apply_to(&mut cfg);
    }
    apply_env_overrides(&mut cfg)?;
    args.apply_overrides(&mut cfg);

    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;

    if let Some((path, _)) = &loaded {
        info!(path = %path.display(), "Using config file");
    }
    debug!("Starting photo_tool: {:?}", args);

    let request = match cfg.validate() {
        Ok(r) => r,
        Err(e) => {
            match e.downcast_ref::<PhotoToolError>() {
                Some(pe) => error!(code = pe.code(), error = %pe, "Cannot start run"),
                None => error!(error = ?e, "Cannot start run"),
            }
            return Err(e);
        }
    };

    let summary = organize::run(&request)?;
    if request.preview {
        out::print_info(&format!("Preview finished: {summary}"));
    } else {
        out::print_success(&format!("Done: {summary}"));
    }
    Ok(())
}
