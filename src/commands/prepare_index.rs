use anyhow::{Context, Result};
use std::path::Path;

use crate::snp::{clean_mutation_name, normalize_position, REQUIRED_COLUMNS};
use crate::utils::table::{column_index, ensure_columns};

pub fn run(input: String, output: String) -> Result<()> {
    let input_path = Path::new(&input);
    let mut reader = csv::Reader::from_path(input_path)
        .with_context(|| format!("failed to open raw mutation index {}", input))?;
    let headers = reader.headers()?.clone();
    ensure_columns(&headers, &REQUIRED_COLUMNS, input_path)?;

    let col = |name: &str| column_index(&headers, name).unwrap();
    let name_col = col("Name");
    let subgroup_col = col("Subgroup Name");
    let build37_col = col("Build 37 Number");
    let build38_col = col("Build 38 Number");
    let info_col = col("Mutation Info");

    let mut writer = csv::Writer::from_path(&output)
        .with_context(|| format!("failed to create {}", output))?;
    writer.write_record(REQUIRED_COLUMNS)?;

    let mut kept = 0usize;
    let mut dropped = 0usize;

    for row in reader.into_records() {
        let row = row.context("failed to read raw mutation index")?;
        let field = |i: usize| row.get(i).unwrap_or("");

        // a row without a usable Build 37 position has an unclear marker name too
        let Some(build37) = normalize_position(field(build37_col)) else {
            dropped += 1;
            continue;
        };
        let build38 = normalize_position(field(build38_col));

        let name = clean_mutation_name(field(name_col));
        let build37_field = build37.to_string();
        let build38_field = build38.map_or_else(String::new, |p| p.to_string());
        writer.write_record([
            name.as_str(),
            field(subgroup_col).trim(),
            build37_field.as_str(),
            build38_field.as_str(),
            field(info_col).trim(),
        ])?;
        kept += 1;
    }
    writer.flush()?;

    println!(
        "Curated mutation index written to {} ({} kept, {} dropped without Build 37 positions).",
        output, kept, dropped
    );
    Ok(())
}
