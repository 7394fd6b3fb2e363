use anyhow::{bail, Context, Result};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::Path;

use crate::haplogroup::HaplogroupLabel;
use crate::samples::{SampleRecord, SampleTable};
use crate::utils::table::ensure_columns;

pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Name",
    "Subgroup Name",
    "Build 37 Number",
    "Build 38 Number",
    "Mutation Info",
];

/// One named Y-DNA mutation marker. Several markers may define the same
/// subgroup (redundant/confirmatory SNPs); names are unique.
#[derive(Debug, Clone, Deserialize)]
pub struct MutationIndexEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Subgroup Name")]
    pub subgroup: HaplogroupLabel,
    #[serde(rename = "Build 37 Number")]
    pub build37: u64,
    #[serde(rename = "Build 38 Number", deserialize_with = "de_opt_u64", default)]
    pub build38: Option<u64>,
    #[serde(rename = "Mutation Info", deserialize_with = "de_opt_string", default)]
    pub info: Option<String>,
}

fn de_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("not a position: '{value}'"))),
    }
}

fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(match raw.map(|s| s.trim().to_string()) {
        None => None,
        Some(s) if s.is_empty() => None,
        Some(s) => Some(s),
    })
}

/// Raw index exports suffix some names with `^` markers.
pub fn clean_mutation_name(raw: &str) -> String {
    raw.trim().trim_end_matches('^').to_string()
}

/// Reference positions in raw exports may be written as integers or as
/// spreadsheet floats ("12345678.0"); anything else is unusable.
pub fn normalize_position(raw: &str) -> Option<u64> {
    let v = raw.trim();
    if v.is_empty() || v == ".." {
        return None;
    }
    if let Ok(position) = v.parse::<u64>() {
        return Some(position);
    }
    let as_float = v.parse::<f64>().ok()?;
    (as_float.is_finite() && as_float >= 0.0 && as_float.fract() == 0.0)
        .then_some(as_float as u64)
}

/// Outcome of resolving a mutation name. Not finding the name is a
/// structured result the caller reports, never an error.
#[derive(Debug)]
pub enum MutationOutcome<'a> {
    NotFound,
    Found {
        entry: &'a MutationIndexEntry,
        /// Samples belonging to the entry's subgroup or a descendant of it.
        /// Empty means metadata-only output, no map.
        rows: Vec<&'a SampleRecord>,
    },
}

/// The mutation reference index, keyed by exact, case-sensitive name.
#[derive(Debug, Default)]
pub struct MutationIndex {
    entries: Vec<MutationIndexEntry>,
    by_name: HashMap<String, usize>,
}

impl MutationIndex {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open mutation index {}", path.display()))?;
        ensure_columns(reader.headers()?, &REQUIRED_COLUMNS, path)?;

        let mut entries: Vec<MutationIndexEntry> = Vec::new();
        for (row, entry) in reader.deserialize::<MutationIndexEntry>().enumerate() {
            let entry =
                entry.with_context(|| format!("bad index entry at data row {}", row + 1))?;
            entries.push(entry);
        }

        let mut by_name = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if by_name.insert(entry.name.clone(), i).is_some() {
                bail!(
                    "duplicate mutation name '{}' in {}",
                    entry.name,
                    path.display()
                );
            }
        }
        Ok(MutationIndex { entries, by_name })
    }

    pub fn from_entries(entries: Vec<MutationIndexEntry>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if by_name.insert(entry.name.clone(), i).is_some() {
                bail!("duplicate mutation name '{}'", entry.name);
            }
        }
        Ok(MutationIndex { entries, by_name })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-sensitive lookup. Mutation names are unambiguous
    /// identifiers, so there is no fuzzy or prefix fallback.
    pub fn get(&self, name: &str) -> Option<&MutationIndexEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Look up a mutation and collect the samples whose Y haplogroup equals,
    /// or descends from, the subgroup it defines. One membership test, no
    /// ascension.
    pub fn resolve<'a>(&'a self, samples: &'a SampleTable, name: &str) -> MutationOutcome<'a> {
        let Some(entry) = self.get(name) else {
            return MutationOutcome::NotFound;
        };
        let rows = samples
            .records()
            .iter()
            .filter(|record| {
                record.y_haplogroup.as_ref().is_some_and(|label| {
                    entry.subgroup.stem() == label.stem() || entry.subgroup.is_prefix_of(label)
                })
            })
            .collect();
        MutationOutcome::Found { entry, rows }
    }
}
