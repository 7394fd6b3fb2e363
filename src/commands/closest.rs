use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::export::formats::query::ResolutionExport;
use crate::export::{AnalysisData, AnalysisExport};
use crate::haplogroup::{
    self, AscentStrategy, Chromosome, HaplogroupLabel, ResolverConfig, SearchOutcome,
};
use crate::plot::map::{self, MapLayer, Marker};
use crate::report;
use crate::samples::SampleTable;
use crate::utils::progress::spinner;

#[allow(clippy::too_many_arguments)]
pub fn run(
    chromosome: Chromosome,
    haplogroup: String,
    input: String,
    retries: Option<u32>,
    ancestor_inclusive: bool,
    strategy: Option<AscentStrategy>,
    output_dir: String,
    json: bool,
) -> Result<()> {
    let config = Config::load();
    let resolver_config = ResolverConfig {
        max_ascents: retries.unwrap_or(config.search.max_ascents),
        ancestor_inclusive: ancestor_inclusive || config.search.ancestor_inclusive,
        strategy: strategy.unwrap_or(config.search.strategy),
    };

    let progress = spinner("Loading sample table...")?;
    let table = SampleTable::load(&input)?;
    progress.finish_and_clear();

    println!(
        "You have selected {} on {}-DNA",
        haplogroup,
        chromosome.name()
    );

    let query = HaplogroupLabel::new(haplogroup);
    let resolution = haplogroup::resolve(&table, chromosome, &query, &resolver_config);

    if resolution.query_rows.is_empty() {
        println!(
            "No individuals belong to {} in the dataset.",
            resolution.query
        );
    }
    print!(
        "{}",
        report::resolution_summary(&resolution, resolver_config.max_ascents)
    );

    if let SearchOutcome::Matched { label, trail, rows } = &resolution.outcome {
        // query hits and closest-match hits carry distinct markers
        let marker = if trail.is_empty() {
            Marker::Triangle
        } else {
            Marker::Circle
        };
        let layers = vec![MapLayer {
            label: label.as_str().to_string(),
            marker,
            rows: rows.clone(),
        }];
        let map_path =
            Path::new(&output_dir).join(format!("{}_{}.svg", chromosome.name(), label));
        map::save(&map_path, &layers)?;
        println!("Map written to {}", map_path.display());
    }

    if json {
        let export = AnalysisExport::new(AnalysisData::Resolution(
            ResolutionExport::from_resolution(&resolution),
        ));
        let json_path = Path::new(&output_dir).join(format!(
            "{}_{}.json",
            chromosome.name(),
            resolution.query
        ));
        export.write(&json_path)?;
        println!("JSON written to {}", json_path.display());
    }

    Ok(())
}
