use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::{DataSource, load_settings_string, resolve_data_source, settings_path};

/// Show the settings file and which catalog would be loaded.
pub(crate) fn run_config_show(data: Option<PathBuf>) {
    let path = settings_path();

    log::info!(
        "{}",
        "brickset Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let source = resolve_data_source(data);
    log::info!("  Catalog:       {}", source);
    if let DataSource::Flag(p) | DataSource::Settings(p) = &source {
        if !p.exists() {
            log::warn!("Catalog file {} does not exist", p.display());
        }
    }

    if let Some(contents) = load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}
