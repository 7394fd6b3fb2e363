use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::haplogroup::HaplogroupLabel;
use crate::utils::table::ensure_columns;

pub mod age;
pub mod prepare;

pub use age::AgeInterval;

/// Column set the engine requires before any query runs.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Locality",
    "Country",
    "Lat.",
    "Long.",
    "Y_haplogroup",
    "mt_haplogroup",
    "Ages_2000",
    "Age_interval",
];

/// One individual from the dataset. Loaded once per invocation and immutable
/// afterwards; queries borrow rows, never copy or mutate them.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleRecord {
    #[serde(rename = "Locality", default)]
    pub locality: String,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(rename = "Lat.", deserialize_with = "de_opt_f64", default)]
    pub lat: Option<f64>,
    #[serde(rename = "Long.", deserialize_with = "de_opt_f64", default)]
    pub long: Option<f64>,
    #[serde(rename = "Y_haplogroup", deserialize_with = "de_opt_label", default)]
    pub y_haplogroup: Option<HaplogroupLabel>,
    #[serde(rename = "mt_haplogroup", deserialize_with = "de_opt_label", default)]
    pub mt_haplogroup: Option<HaplogroupLabel>,
    #[serde(rename = "Ages_2000", deserialize_with = "de_opt_f64", default)]
    pub ages_2000: Option<f64>,
    #[serde(rename = "Age_interval", deserialize_with = "de_age_interval", default)]
    pub age_interval: Option<AgeInterval>,
}

/// Absence is a missing value, never an empty string.
fn de_opt_label<'de, D>(deserializer: D) -> Result<Option<HaplogroupLabel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(match raw.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(label) => Some(HaplogroupLabel::new(label)),
    })
}

fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("not a number: '{value}'"))),
    }
}

fn de_age_interval<'de, D>(deserializer: D) -> Result<Option<AgeInterval>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(label) => AgeInterval::from_label(label)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown age interval '{label}'"))),
    }
}

/// The in-memory sample dataset, read-only for the remainder of the run.
#[derive(Debug, Default)]
pub struct SampleTable {
    records: Vec<SampleRecord>,
}

impl SampleTable {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open sample table {}", path.display()))?;
        ensure_columns(reader.headers()?, &REQUIRED_COLUMNS, path)?;

        let mut records = Vec::new();
        for (row, record) in reader.deserialize::<SampleRecord>().enumerate() {
            let record = record
                .with_context(|| format!("bad sample record at data row {}", row + 1))?;
            records.push(record);
        }
        Ok(SampleTable { records })
    }

    pub fn from_records(records: Vec<SampleRecord>) -> Self {
        SampleTable { records }
    }

    pub fn records(&self) -> &[SampleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.records.iter().any(|r| r.country == country)
    }
}
