use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::export::formats::query::MutationExport;
use crate::export::{AnalysisData, AnalysisExport};
use crate::plot::map::{self, MapLayer, Marker};
use crate::report;
use crate::samples::SampleTable;
use crate::snp::{MutationIndex, MutationOutcome};
use crate::utils::progress::spinner;

pub fn run(
    name: String,
    input: String,
    index: String,
    output_dir: String,
    json: bool,
) -> Result<()> {
    let progress = spinner("Loading mutation index...")?;
    let snp_index = MutationIndex::load(&index)?;
    progress.set_message("Loading sample table...");
    let table = SampleTable::load(&input)?;
    progress.finish_and_clear();

    match snp_index.resolve(&table, &name) {
        MutationOutcome::NotFound => {
            println!(
                "Mutation '{}' is not in the index. It may be misspelled, or it is not a \
                 marker that defines a subgroup.",
                name
            );
        }
        MutationOutcome::Found { entry, rows } => {
            println!("{}", report::mutation_details(entry));
            println!();
            println!("Found {} individual(s) in the {} dataset.", rows.len(), input);

            let report_path = Path::new(&output_dir).join(format!("{}.report.txt", name));
            fs::write(&report_path, report::mutation_report(entry, &input, rows.len()))?;
            println!("Report written to {}", report_path.display());

            // metadata-only when no carriers exist; otherwise also map them
            if !rows.is_empty() {
                let layers = vec![MapLayer {
                    label: entry.subgroup.as_str().to_string(),
                    marker: Marker::Circle,
                    rows: rows.clone(),
                }];
                let map_path = Path::new(&output_dir).join(format!("{}.svg", name));
                map::save(&map_path, &layers)?;
                println!("Map written to {}", map_path.display());
            }

            if json {
                let export =
                    AnalysisExport::new(AnalysisData::Mutation(MutationExport::new(entry, &rows)));
                let json_path = Path::new(&output_dir).join(format!("{}.json", name));
                export.write(&json_path)?;
                println!("JSON written to {}", json_path.display());
            }
        }
    }

    Ok(())
}
