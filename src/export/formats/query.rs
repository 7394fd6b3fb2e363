use serde::{Deserialize, Serialize};

use crate::haplogroup::{Resolution, SearchOutcome, Termination};
use crate::samples::SampleRecord;
use crate::snp::MutationIndexEntry;

#[derive(Debug, Serialize, Deserialize)]
pub struct IndividualExport {
    pub locality: String,
    pub country: String,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub haplogroup: Option<String>,
    pub age_interval: Option<String>,
}

impl IndividualExport {
    fn from_record(record: &SampleRecord, haplogroup: Option<&str>) -> Self {
        IndividualExport {
            locality: record.locality.clone(),
            country: record.country.clone(),
            lat: record.lat,
            long: record.long,
            haplogroup: haplogroup.map(str::to_string),
            age_interval: record.age_interval.map(|i| i.label().to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    Matched,
    RootReached,
    BoundExhausted,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResolutionExport {
    pub chromosome: String,
    pub query: String,
    pub status: ResolutionStatus,
    pub matched_label: Option<String>,
    pub ascension_steps: usize,
    pub trail: Vec<String>,
    pub individuals: Vec<IndividualExport>,
}

impl ResolutionExport {
    pub fn from_resolution(resolution: &Resolution) -> Self {
        let chromosome = resolution.chromosome.name().to_string();
        let query = resolution.query.as_str().to_string();
        match &resolution.outcome {
            SearchOutcome::Matched { label, trail, rows } => ResolutionExport {
                chromosome,
                query,
                status: ResolutionStatus::Matched,
                matched_label: Some(label.as_str().to_string()),
                ascension_steps: trail.len(),
                trail: trail.iter().map(|l| l.as_str().to_string()).collect(),
                individuals: rows
                    .iter()
                    .map(|r| {
                        IndividualExport::from_record(
                            r,
                            resolution.chromosome.label_of(r).map(|l| l.as_str()),
                        )
                    })
                    .collect(),
            },
            SearchOutcome::NoMatch { termination, trail } => ResolutionExport {
                chromosome,
                query,
                status: match termination {
                    Termination::RootReached => ResolutionStatus::RootReached,
                    Termination::BoundExhausted => ResolutionStatus::BoundExhausted,
                },
                matched_label: None,
                ascension_steps: trail.len(),
                trail: trail.iter().map(|l| l.as_str().to_string()).collect(),
                individuals: Vec::new(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MutationExport {
    pub name: String,
    pub subgroup: String,
    pub build37: u64,
    pub build38: Option<u64>,
    pub info: Option<String>,
    pub individuals: Vec<IndividualExport>,
}

impl MutationExport {
    pub fn new(entry: &MutationIndexEntry, rows: &[&SampleRecord]) -> Self {
        MutationExport {
            name: entry.name.clone(),
            subgroup: entry.subgroup.as_str().to_string(),
            build37: entry.build37,
            build38: entry.build38,
            info: entry.info.clone(),
            individuals: rows
                .iter()
                .map(|r| {
                    IndividualExport::from_record(
                        r,
                        r.y_haplogroup.as_ref().map(|l| l.as_str()),
                    )
                })
                .collect(),
        }
    }
}
