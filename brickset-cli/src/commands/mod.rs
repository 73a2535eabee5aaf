pub(crate) mod config;
pub(crate) mod demo;
pub(crate) mod query;

use std::path::PathBuf;

use brickset_catalog::LegoSetRepository;

use crate::CliError;
use crate::settings::{DataSource, resolve_data_source, settings_path};

/// Load the catalog from the `--data` path, the settings file, or the
/// bundled copy, in that order.
pub(crate) fn open_catalog(data: Option<PathBuf>) -> Result<LegoSetRepository, CliError> {
    let source = resolve_data_source(data);
    log::debug!("Loading catalog from {}", source);

    let repo = match &source {
        DataSource::Flag(path) => LegoSetRepository::load(path)?,
        DataSource::Settings(path) => {
            if !path.is_file() {
                return Err(CliError::config(format!(
                    "data.path in {} points to {}, which is not a file",
                    settings_path().display(),
                    path.display(),
                )));
            }
            LegoSetRepository::load(path)?
        }
        DataSource::Bundled => LegoSetRepository::bundled()?,
    };

    log::debug!("{} sets loaded from {}", repo.len(), repo.source());
    Ok(repo)
}
