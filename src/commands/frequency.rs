use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::export::formats::frequency::FrequencyExport;
use crate::export::{AnalysisData, AnalysisExport};
use crate::haplogroup::frequency::{self, FrequencyOutcome};
use crate::haplogroup::Chromosome;
use crate::report;
use crate::samples::SampleTable;
use crate::utils::progress::spinner;

pub fn run(
    chromosome: Chromosome,
    country: String,
    input: String,
    output_dir: String,
    json: bool,
) -> Result<()> {
    let progress = spinner("Loading sample table...")?;
    let table = SampleTable::load(&input)?;
    progress.finish_and_clear();

    if !table.has_country(&country) {
        println!(
            "The country {} is not included in the {} dataset (country matching is \
             case-sensitive).",
            country, input
        );
    }
    println!(
        "Calculating haplogroup frequency on {}-DNA in {}...",
        chromosome.name(),
        country
    );

    let outcome = frequency::aggregate(&table, chromosome, &country);
    let report_text = report::frequency_report(&country, chromosome.name(), &outcome);
    print!("{}", report_text);

    let report_path = Path::new(&output_dir).join(format!("{}.{}.txt", country, chromosome.name()));
    fs::write(&report_path, &report_text)?;
    println!("Report written to {}", report_path.display());

    if matches!(outcome, FrequencyOutcome::NoData) {
        println!("No data for this country/chromosome.");
    }

    if json {
        let export = AnalysisExport::new(AnalysisData::Frequency(FrequencyExport::from_outcome(
            chromosome.name(),
            &country,
            &outcome,
        )));
        let json_path =
            Path::new(&output_dir).join(format!("{}.{}.json", country, chromosome.name()));
        export.write(&json_path)?;
        println!("JSON written to {}", json_path.display());
    }

    Ok(())
}
