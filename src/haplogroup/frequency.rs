use std::collections::BTreeMap;

use crate::haplogroup::label::Chromosome;
use crate::samples::SampleTable;

/// Relative frequency of one top-level clade within a country's samples.
#[derive(Debug, Clone, PartialEq)]
pub struct CladeFrequency {
    pub clade: String,
    pub count: usize,
    pub frequency: f64,
}

#[derive(Debug)]
pub struct FrequencyTable {
    pub chromosome: Chromosome,
    pub country: String,
    /// Individuals with a usable label for the chromosome; the denominator.
    pub total: usize,
    /// Nonzero clades, descending by frequency, ties by clade ascending.
    pub clades: Vec<CladeFrequency>,
}

/// An empty filter result is a reportable outcome, not an error.
#[derive(Debug)]
pub enum FrequencyOutcome {
    NoData,
    Table(FrequencyTable),
}

/// Group a country's samples by top-level clade designator and compute
/// relative frequencies. Labels are reduced to their topmost segment so that
/// records resolved to very different depths aggregate comparably; sample
/// age is deliberately ignored.
pub fn aggregate(
    table: &SampleTable,
    chromosome: Chromosome,
    country: &str,
) -> FrequencyOutcome {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut total = 0usize;

    for record in table.records() {
        if record.country != country {
            continue;
        }
        let Some(label) = chromosome.label_of(record) else {
            continue;
        };
        // Labels with no clade designator cannot be grouped; skip them the
        // same way a missing label is skipped.
        let Some(clade) = label.top_level() else {
            continue;
        };
        *counts.entry(clade.to_string()).or_default() += 1;
        total += 1;
    }

    if total == 0 {
        return FrequencyOutcome::NoData;
    }

    let mut clades: Vec<CladeFrequency> = counts
        .into_iter()
        .map(|(clade, count)| CladeFrequency {
            clade,
            count,
            frequency: count as f64 / total as f64,
        })
        .collect();
    clades.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.clade.cmp(&b.clade)));

    FrequencyOutcome::Table(FrequencyTable {
        chromosome,
        country: country.to_string(),
        total,
        clades,
    })
}
