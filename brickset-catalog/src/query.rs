//! Read-only queries over a loaded LEGO set catalog.
//!
//! Every query is a single pass (or a single sort) over `&[LegoSet]`.
//! [`LegoSetRepository`] wraps a loaded store and exposes the same queries
//! as methods.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::error::{LoadError, QueryError};
use crate::repository::Repository;
use crate::types::{LegoSet, PackagingType};

/// Name used for the catalog embedded in the binary.
pub const BUNDLED_SOURCE: &str = "brickset.json (bundled)";

const BUNDLED_JSON: &str = include_str!("../resources/brickset.json");

// ── Queries ─────────────────────────────────────────────────────────────────

/// Count the sets tagged with `tag`. Sets without tags never count.
pub fn count_with_tag(sets: &[LegoSet], tag: &str) -> usize {
    sets.iter().filter(|s| s.has_tag(tag)).count()
}

/// Names of all sets, in ascending order.
pub fn names_sorted(sets: &[LegoSet]) -> Vec<&str> {
    let mut names: Vec<&str> = sets.iter().map(|s| s.name.as_str()).collect();
    names.sort_unstable();
    names
}

/// Names of sets with a known piece count below `limit`, in ascending order.
///
/// Sets with a piece count of zero (unknown) are never included.
pub fn names_under_piece_limit(sets: &[LegoSet], limit: u32) -> Vec<&str> {
    let mut names: Vec<&str> = sets
        .iter()
        .filter(|s| s.has_piece_count() && s.pieces < limit)
        .map(|s| s.name.as_str())
        .collect();
    names.sort_unstable();
    names
}

/// Distinct packaging types, in order of first appearance.
pub fn packaging_types(sets: &[LegoSet]) -> Vec<&PackagingType> {
    let mut seen = HashSet::new();
    sets.iter()
        .map(|s| &s.packaging_type)
        .filter(|p| seen.insert(*p))
        .collect()
}

/// Total piece count of the sets in `theme`. Sets without a theme are skipped.
pub fn sum_pieces(sets: &[LegoSet], theme: &str) -> u64 {
    sets.iter()
        .filter(|s| s.in_theme(theme))
        .map(|s| u64::from(s.pieces))
        .sum()
}

/// The set with the most pieces in `theme`.
///
/// On a tie the set that appears first in the catalog wins.
pub fn largest_in_theme<'a>(sets: &'a [LegoSet], theme: &str) -> Result<&'a LegoSet, QueryError> {
    sets.iter()
        .filter(|s| s.in_theme(theme))
        .reduce(|best, s| if s.pieces > best.pieces { s } else { best })
        .ok_or_else(|| QueryError::NoSetsInTheme(theme.to_string()))
}

/// Total piece count per theme, ordered by theme name.
pub fn pieces_by_theme(sets: &[LegoSet]) -> BTreeMap<&str, u64> {
    let mut totals = BTreeMap::new();
    for set in sets {
        if let Some(theme) = set.theme.as_deref() {
            *totals.entry(theme).or_insert(0) += u64::from(set.pieces);
        }
    }
    totals
}

/// Distinct themes, in order of first appearance.
pub fn themes(sets: &[LegoSet]) -> Vec<&str> {
    let mut seen = HashSet::new();
    sets.iter()
        .filter_map(|s| s.theme.as_deref())
        .filter(|t| seen.insert(*t))
        .collect()
}

/// Find a set by its identifier (e.g. `"75192-1"`).
pub fn find_by_number<'a>(sets: &'a [LegoSet], number: &str) -> Option<&'a LegoSet> {
    sets.iter().find(|s| s.number == number)
}

// ── Repository ──────────────────────────────────────────────────────────────

/// A loaded LEGO set catalog.
#[derive(Debug, Clone)]
pub struct LegoSetRepository {
    inner: Repository<LegoSet>,
}

impl LegoSetRepository {
    /// Load the catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        Repository::load(path).map(Self::from)
    }

    /// Load the catalog embedded in the binary at build time.
    pub fn bundled() -> Result<Self, LoadError> {
        Repository::from_json_str(BUNDLED_SOURCE, BUNDLED_JSON).map(Self::from)
    }

    pub fn from_sets(sets: Vec<LegoSet>) -> Self {
        Self::from(Repository::from_records("memory", sets))
    }

    pub fn all(&self) -> &[LegoSet] {
        self.inner.all()
    }

    pub fn source(&self) -> &str {
        self.inner.source()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn count_with_tag(&self, tag: &str) -> usize {
        count_with_tag(self.all(), tag)
    }

    pub fn names_sorted(&self) -> Vec<&str> {
        names_sorted(self.all())
    }

    pub fn names_under_piece_limit(&self, limit: u32) -> Vec<&str> {
        names_under_piece_limit(self.all(), limit)
    }

    pub fn packaging_types(&self) -> Vec<&PackagingType> {
        packaging_types(self.all())
    }

    pub fn sum_pieces(&self, theme: &str) -> u64 {
        sum_pieces(self.all(), theme)
    }

    pub fn largest_in_theme(&self, theme: &str) -> Result<&LegoSet, QueryError> {
        largest_in_theme(self.all(), theme)
    }

    pub fn pieces_by_theme(&self) -> BTreeMap<&str, u64> {
        pieces_by_theme(self.all())
    }

    pub fn themes(&self) -> Vec<&str> {
        themes(self.all())
    }

    pub fn find_by_number(&self, number: &str) -> Option<&LegoSet> {
        find_by_number(self.all(), number)
    }
}

impl From<Repository<LegoSet>> for LegoSetRepository {
    fn from(inner: Repository<LegoSet>) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
