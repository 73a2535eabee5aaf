//! Settings file handling and catalog source resolution.
//!
//! The settings file lives at `~/.config/brickset/settings.toml`:
//!
//! ```toml
//! [data]
//! path = "/path/to/brickset.json"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/brickset/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("brickset").join("settings.toml")
}

/// Where the catalog will be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DataSource {
    /// `--data` on the command line
    Flag(PathBuf),
    /// `data.path` in the settings file
    Settings(PathBuf),
    /// The catalog embedded in the binary
    Bundled,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(p) => write!(f, "{} (--data)", p.display()),
            Self::Settings(p) => write!(f, "{} (settings.toml)", p.display()),
            Self::Bundled => write!(f, "bundled catalog"),
        }
    }
}

/// Resolve the catalog source using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `data.path` in `settings.toml`
/// 3. The bundled catalog
pub(crate) fn resolve_data_source(cli_override: Option<PathBuf>) -> DataSource {
    resolve_with_settings(cli_override, &settings_path())
}

fn resolve_with_settings(cli_override: Option<PathBuf>, settings: &Path) -> DataSource {
    if let Some(p) = cli_override {
        return DataSource::Flag(p);
    }
    match load_data_path(settings) {
        Some(p) => DataSource::Settings(p),
        None => DataSource::Bundled,
    }
}

/// Read `data.path` from a settings file, if set.
///
/// A missing or unparsable file counts as unset.
fn load_data_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = match contents.parse() {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("Ignoring unparsable {}: {}", settings.display(), e);
            return None;
        }
    };
    let path = doc.get("data")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
