use thiserror::Error;

/// Errors that can occur while loading a record store.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The file or resource name the error refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// Errors returned by queries that can come up empty.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// No set in the catalog belongs to the requested theme
    #[error("No LEGO sets found with theme \"{0}\"")]
    NoSetsInTheme(String),
}
