//! Data model types for the LEGO set catalog.
//!
//! These types mirror the records in `brickset.json`: one [`LegoSet`] per
//! catalog entry, plus its packaging, minifigure and dimension details.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ── LEGO Set ────────────────────────────────────────────────────────────────

/// A single LEGO set catalog entry, loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegoSet {
    /// Set identifier, e.g. `"75192-1"`.
    pub number: String,
    pub name: String,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub subtheme: Option<String>,
    /// Absent tags mean "no tags", not an empty match failure.
    #[serde(default)]
    pub tags: Option<BTreeSet<String>>,
    /// Number of pieces. Zero means the count was not recorded.
    #[serde(default, deserialize_with = "null_as_default")]
    pub pieces: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub minifigs: Vec<Minifig>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    pub packaging_type: PackagingType,
}

impl LegoSet {
    /// Returns true if the set carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.as_ref().is_some_and(|tags| tags.contains(tag))
    }

    /// Returns true if the set belongs to `theme` (exact, case-sensitive).
    pub fn in_theme(&self, theme: &str) -> bool {
        self.theme.as_deref() == Some(theme)
    }

    /// Whether the piece count is known (non-zero).
    pub fn has_piece_count(&self) -> bool {
        self.pieces != 0
    }

    /// Total number of minifigures across all minifig entries.
    pub fn minifig_count(&self) -> u64 {
        self.minifigs.iter().map(|m| u64::from(m.count)).sum()
    }
}

impl fmt::Display for LegoSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.name)?;
        if let Some(year) = self.year {
            write!(f, " ({})", year)?;
        }
        match (&self.theme, &self.subtheme) {
            (Some(theme), Some(sub)) => write!(f, " [{} / {}]", theme, sub)?,
            (Some(theme), None) => write!(f, " [{}]", theme)?,
            _ => {}
        }
        if self.has_piece_count() {
            write!(f, ", {} pieces", self.pieces)?;
        } else {
            write!(f, ", pieces unknown")?;
        }
        let minifigs = self.minifig_count();
        if minifigs > 0 {
            write!(f, ", {} minifigs", minifigs)?;
        }
        write!(f, ", packaging: {}", self.packaging_type)?;
        if let Some(tags) = self.tags.as_ref().filter(|t| !t.is_empty()) {
            let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
            write!(f, ", tags: {}", tags.join(", "))?;
        }
        Ok(())
    }
}

// ── Packaging ───────────────────────────────────────────────────────────────

/// How a set is packaged.
///
/// Known values get their own variant; anything else is kept verbatim in
/// [`PackagingType::Other`] so the original text survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PackagingType {
    Box,
    Polybag,
    BlisterPack,
    FoilPack,
    Bucket,
    PlasticBox,
    Tub,
    NotSpecified,
    Other(String),
}

impl PackagingType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Box => "Box",
            Self::Polybag => "Polybag",
            Self::BlisterPack => "Blister pack",
            Self::FoilPack => "Foil pack",
            Self::Bucket => "Bucket",
            Self::PlasticBox => "Plastic box",
            Self::Tub => "Tub",
            Self::NotSpecified => "Not specified",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for PackagingType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Box" => Self::Box,
            "Polybag" => Self::Polybag,
            "Blister pack" => Self::BlisterPack,
            "Foil pack" => Self::FoilPack,
            "Bucket" => Self::Bucket,
            "Plastic box" => Self::PlasticBox,
            "Tub" => Self::Tub,
            "Not specified" => Self::NotSpecified,
            _ => Self::Other(s),
        }
    }
}

impl From<PackagingType> for String {
    fn from(p: PackagingType) -> Self {
        match p {
            PackagingType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PackagingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Minifigures ─────────────────────────────────────────────────────────────

/// A minifigure included in a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Minifig {
    #[serde(default)]
    pub name: Option<String>,
    /// Missing or null counts as a single figure.
    #[serde(default = "default_minifig_count", deserialize_with = "null_as_one")]
    pub count: u32,
}

fn default_minifig_count() -> u32 {
    1
}

fn null_as_one<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(default_minifig_count))
}

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Dimensions ──────────────────────────────────────────────────────────────

/// Box dimensions in centimetres and weight in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub depth: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}
