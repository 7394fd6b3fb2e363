use serde::{Deserialize, Serialize};

use crate::haplogroup::frequency::FrequencyOutcome;

#[derive(Debug, Serialize, Deserialize)]
pub struct CladeExport {
    pub clade: String,
    pub count: usize,
    pub frequency: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FrequencyExport {
    pub chromosome: String,
    pub country: String,
    /// Zero when the filter matched nothing ("no data").
    pub total: usize,
    pub clades: Vec<CladeExport>,
}

impl FrequencyExport {
    pub fn from_outcome(chromosome: &str, country: &str, outcome: &FrequencyOutcome) -> Self {
        match outcome {
            FrequencyOutcome::NoData => FrequencyExport {
                chromosome: chromosome.to_string(),
                country: country.to_string(),
                total: 0,
                clades: Vec::new(),
            },
            FrequencyOutcome::Table(table) => FrequencyExport {
                chromosome: chromosome.to_string(),
                country: country.to_string(),
                total: table.total,
                clades: table
                    .clades
                    .iter()
                    .map(|c| CladeExport {
                        clade: c.clade.clone(),
                        count: c.count,
                        frequency: c.frequency,
                    })
                    .collect(),
            },
        }
    }
}
