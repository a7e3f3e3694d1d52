use clap::Parser;

use vitrina::{SearchEngine, SearchParams};

mod cli;
use cli::{Cli, Commands};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            catalog,
            query,
            category,
            min_price,
            max_price,
            limit,
            json,
            strict_header,
        } => {
            let engine = SearchEngine::new(catalog).with_strict_header(strict_header);
            let params = SearchParams {
                query,
                category,
                min_price,
                max_price,
                limit: Some(limit),
            };
            match engine.search(&params) {
                Ok(outcome) => {
                    if json {
                        cli::display::print_json(&outcome);
                    } else {
                        cli::display::print_results(&outcome);
                    }
                }
                Err(e) => {
                    eprintln!("error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Inspect {
            catalog,
            strict_header,
        } => {
            let engine = SearchEngine::new(catalog).with_strict_header(strict_header);
            match engine.load_catalog() {
                Ok(catalog) => cli::display::print_inspection(&catalog),
                Err(e) => {
                    eprintln!("error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
