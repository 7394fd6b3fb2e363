use std::fmt::Write as _;

use crate::haplogroup::frequency::FrequencyOutcome;
use crate::haplogroup::{Resolution, SearchOutcome, Termination};
use crate::snp::MutationIndexEntry;

/// Human-readable block for one mutation index entry, with the fixed
/// placeholders for positions or annotations the index does not carry.
pub fn mutation_details(entry: &MutationIndexEntry) -> String {
    let build38 = entry
        .build38
        .map_or_else(|| "None".to_string(), |p| p.to_string());
    let info = entry.info.as_deref().unwrap_or("Not specified");
    format!(
        "Query mutation name: {}\n\
         Haplogroup Name: {}\n\
         GRCh37 (Build 37 number): {}\n\
         GRCh38 (Build 38 number): {}\n\
         Mutation information: {}",
        entry.name, entry.subgroup, entry.build37, build38, info
    )
}

pub fn mutation_report(entry: &MutationIndexEntry, dataset: &str, matched: usize) -> String {
    format!(
        "{}\n\nFound {} individual(s) in the {} dataset.\n",
        mutation_details(entry),
        matched,
        dataset
    )
}

/// Frequency table report. States explicitly that ages are pooled so the
/// numbers are not read as a time-bounded frequency.
pub fn frequency_report(country: &str, chromosome_name: &str, outcome: &FrequencyOutcome) -> String {
    match outcome {
        FrequencyOutcome::NoData => format!(
            "No data: no individuals with {}-DNA information in {}.\n",
            chromosome_name, country
        ),
        FrequencyOutcome::Table(table) => {
            let mut out = String::new();
            for clade in &table.clades {
                let _ = writeln!(
                    out,
                    "{}: {} ({:.2}%)",
                    clade.clade,
                    clade.count,
                    clade.frequency * 100.0
                );
            }
            let _ = writeln!(
                out,
                "total individuals (with {}-DNA information): {}",
                chromosome_name, table.total
            );
            let _ = writeln!(
                out,
                "Note: sample ages are pooled; frequencies are not time-bounded."
            );
            out
        }
    }
}

/// One-paragraph search summary, including how far the search climbed.
pub fn resolution_summary(resolution: &Resolution, max_ascents: u32) -> String {
    let mut out = String::new();
    match &resolution.outcome {
        SearchOutcome::Matched { label, trail, rows } => {
            if trail.is_empty() {
                let _ = writeln!(
                    out,
                    "Found {} individual(s) in haplogroup {}.",
                    rows.len(),
                    label
                );
            } else {
                let _ = writeln!(
                    out,
                    "The closest haplogroup with individuals is {} ({} ascension step(s)).",
                    label,
                    trail.len()
                );
                let _ = writeln!(out, "Tested along the way: {}.", join_labels(trail));
                let _ = writeln!(out, "Found {} individual(s) in haplogroup {}.", rows.len(), label);
            }
        }
        SearchOutcome::NoMatch { termination, trail } => {
            match termination {
                Termination::RootReached => {
                    let _ = writeln!(
                        out,
                        "The search reached the root {}: no matched individuals.",
                        resolution.chromosome.root()
                    );
                }
                Termination::BoundExhausted => {
                    let _ = writeln!(
                        out,
                        "Only the top {} closest haplogroups are searched: no matched individuals.",
                        max_ascents
                    );
                }
            }
            if !trail.is_empty() {
                let _ = writeln!(out, "Tested along the way: {}.", join_labels(trail));
            }
        }
    }
    out
}

fn join_labels(labels: &[crate::haplogroup::HaplogroupLabel]) -> String {
    labels
        .iter()
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
