use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;
use crate::samples::age::AgeInterval;
use crate::samples::prepare::{
    curate_country, curate_mt_label, curate_y_label, parse_coordinate, shift_age_to_2000,
};
use crate::samples::REQUIRED_COLUMNS;
use crate::utils::geocode::Geocoder;
use crate::utils::progress::row_bar;
use crate::utils::table::{column_index, ensure_columns};

/// Columns a raw sample export must carry. Ages_BP counts years before
/// 1950 CE, the scale the upstream datasets publish.
pub const RAW_COLUMNS: [&str; 7] = [
    "Locality",
    "Country",
    "Lat.",
    "Long.",
    "Y_haplogroup",
    "mt_haplogroup",
    "Ages_BP",
];

pub fn run(input: String, output: String, skip_geocode: bool) -> Result<()> {
    let config = Config::load();
    let input_path = Path::new(&input);

    let mut reader = csv::Reader::from_path(input_path)
        .with_context(|| format!("failed to open raw sample table {}", input))?;
    let headers = reader.headers()?.clone();
    ensure_columns(&headers, &RAW_COLUMNS, input_path)?;

    let col = |name: &str| column_index(&headers, name).unwrap();
    let (locality_col, country_col) = (col("Locality"), col("Country"));
    let (lat_col, long_col) = (col("Lat."), col("Long."));
    let (y_col, mt_col) = (col("Y_haplogroup"), col("mt_haplogroup"));
    let ages_col = col("Ages_BP");

    let rows = reader
        .into_records()
        .collect::<Result<Vec<_>, _>>()
        .context("failed to read raw sample table")?;

    let mut geocoder = if skip_geocode {
        None
    } else {
        Some(Geocoder::new(&config.geocode)?)
    };

    let mut writer = csv::Writer::from_path(&output)
        .with_context(|| format!("failed to create {}", output))?;
    writer.write_record(REQUIRED_COLUMNS)?;

    let progress = row_bar(rows.len() as u64, "Curating samples")?;
    let mut geocoded = 0usize;
    let mut unlocated = 0usize;

    for row in &rows {
        progress.inc(1);
        let field = |i: usize| row.get(i).unwrap_or("");

        let locality = field(locality_col).trim().to_string();
        let country = curate_country(field(country_col));
        let mut lat = parse_coordinate(field(lat_col));
        let mut long = parse_coordinate(field(long_col));

        if lat.is_none() || long.is_none() {
            if let Some(geocoder) = geocoder.as_mut() {
                // prefer the locality; fall back to the country
                let located = match geocoder.lookup(&locality)? {
                    Some(coords) => Some(coords),
                    None if !country.is_empty() => geocoder.lookup(&country)?,
                    None => None,
                };
                match located {
                    Some((found_lat, found_long)) => {
                        lat = Some(found_lat);
                        long = Some(found_long);
                        geocoded += 1;
                    }
                    None => unlocated += 1,
                }
            } else {
                unlocated += 1;
            }
        }

        let y_label = curate_y_label(field(y_col));
        let mt_label = curate_mt_label(field(mt_col));
        let ages_2000 = shift_age_to_2000(field(ages_col));
        let interval = ages_2000.and_then(AgeInterval::from_years_before_2000);

        let lat_field = opt_to_field(lat);
        let long_field = opt_to_field(long);
        let ages_field = opt_to_field(ages_2000);
        writer.write_record([
            locality.as_str(),
            country.as_str(),
            lat_field.as_str(),
            long_field.as_str(),
            y_label.as_deref().unwrap_or(""),
            mt_label.as_deref().unwrap_or(""),
            ages_field.as_str(),
            interval.map_or("", |i| i.label()),
        ])?;
    }
    progress.finish_and_clear();
    writer.flush()?;

    if let Some(geocoder) = &geocoder {
        geocoder.save_cache()?;
    }

    println!(
        "Curated {} sample(s) into {} ({} geocoded, {} left without coordinates).",
        rows.len(),
        output,
        geocoded,
        unlocated
    );
    Ok(())
}

fn opt_to_field(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}
