use clap::{Parser, Subcommand};

use crate::haplogroup::{AscentStrategy, Chromosome};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the closest haplogroup with sampled individuals and map them
    Closest {
        /// Chromosome to search
        #[arg(value_enum)]
        chromosome: Chromosome,

        /// Query haplogroup label, e.g. R1b1a2
        haplogroup: String,

        /// Sample table CSV
        #[arg(short = 'i', long = "input")]
        input: String,

        /// Maximum ascension steps (default 3, or config)
        #[arg(long)]
        retries: Option<u32>,

        /// Also match samples the candidate label is an ancestor of
        #[arg(long)]
        ancestor_inclusive: bool,

        /// Parent derivation rule
        #[arg(long, value_enum)]
        strategy: Option<AscentStrategy>,

        /// Directory for map and report output
        #[arg(short = 'o', long = "output-dir", default_value = ".")]
        output_dir: String,

        /// Also write the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a Y-DNA mutation, report its haplogroup and map its carriers
    Mutation {
        /// Mutation name, e.g. M269
        name: String,

        /// Sample table CSV
        #[arg(short = 'i', long = "input")]
        input: String,

        /// Mutation index CSV
        #[arg(long, default_value = "SNP_index.csv")]
        index: String,

        /// Directory for map and report output
        #[arg(short = 'o', long = "output-dir", default_value = ".")]
        output_dir: String,

        /// Also write the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report top-level haplogroup frequencies for one country
    Frequency {
        /// Chromosome to aggregate
        #[arg(value_enum)]
        chromosome: Chromosome,

        /// Country name (exact, case-sensitive)
        country: String,

        /// Sample table CSV
        #[arg(short = 'i', long = "input")]
        input: String,

        /// Directory for report output
        #[arg(short = 'o', long = "output-dir", default_value = ".")]
        output_dir: String,

        /// Also write the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize a raw sample table: missing markers, age bins, coordinates
    PrepareSamples {
        /// Raw sample CSV
        input: String,

        /// Cleaned sample CSV to write
        output: String,

        /// Leave missing coordinates blank instead of geocoding
        #[arg(long)]
        skip_geocode: bool,
    },

    /// Normalize a raw mutation index: drop rows without Build 37 positions
    PrepareIndex {
        /// Raw index CSV
        input: String,

        /// Cleaned index CSV to write
        output: String,
    },
}
