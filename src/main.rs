use clap::Parser;
use haplomap::cli::{self, Commands};
use haplomap::commands;

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        Commands::Closest {
            chromosome,
            haplogroup,
            input,
            retries,
            ancestor_inclusive,
            strategy,
            output_dir,
            json,
        } => commands::closest::run(
            chromosome,
            haplogroup,
            input,
            retries,
            ancestor_inclusive,
            strategy,
            output_dir,
            json,
        ),
        Commands::Mutation {
            name,
            input,
            index,
            output_dir,
            json,
        } => commands::mutation::run(name, input, index, output_dir, json),
        Commands::Frequency {
            chromosome,
            country,
            input,
            output_dir,
            json,
        } => commands::frequency::run(chromosome, country, input, output_dir, json),
        Commands::PrepareSamples {
            input,
            output,
            skip_geocode,
        } => commands::prepare_samples::run(input, output, skip_geocode),
        Commands::PrepareIndex { input, output } => {
            commands::prepare_index::run(input, output)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
