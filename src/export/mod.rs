pub mod formats;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;

use crate::export::formats::frequency::FrequencyExport;
use crate::export::formats::query::{MutationExport, ResolutionExport};

/// Root structure for all JSON exports.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisExport {
    pub version: String,
    #[serde(
        serialize_with = "serialize_datetime",
        deserialize_with = "deserialize_datetime"
    )]
    pub created_at: DateTime<Utc>,

    #[serde(flatten)]
    pub data: AnalysisData,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnalysisData {
    Resolution(ResolutionExport),
    Mutation(MutationExport),
    Frequency(FrequencyExport),
}

impl AnalysisExport {
    pub fn new(data: AnalysisData) -> Self {
        AnalysisExport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: Utc::now(),
            data,
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write export {}", path.display()))
    }
}

fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(D::Error::custom)
}
