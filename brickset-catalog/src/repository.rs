//! JSON-backed record stores.
//!
//! A [`Repository`] reads a JSON array once, at construction, and then only
//! hands out shared borrows of the records. There is no reload or mutation
//! path.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;

/// An immutable, ordered collection of records deserialized from JSON.
#[derive(Debug, Clone)]
pub struct Repository<T> {
    source: String,
    items: Vec<T>,
}

impl<T: DeserializeOwned> Repository<T> {
    /// Load all records from the JSON array in the file at `path`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json_str(path.display().to_string(), &contents)
    }

    /// Parse records from an in-memory JSON array.
    ///
    /// `source` names where the JSON came from and is used in errors and logs.
    pub fn from_json_str(source: impl Into<String>, json: &str) -> Result<Self, LoadError> {
        let source = source.into();
        let items: Vec<T> = serde_json::from_str(json).map_err(|e| LoadError::Parse {
            path: source.clone(),
            source: e,
        })?;
        log::debug!("Loaded {} records from {}", items.len(), source);
        Ok(Self { source, items })
    }
}

impl<T> Repository<T> {
    /// Build a store from records that are already in memory.
    pub fn from_records(source: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            source: source.into(),
            items,
        }
    }

    /// All records, in file order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The file path or resource name the records were loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl<'a, T> IntoIterator for &'a Repository<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
