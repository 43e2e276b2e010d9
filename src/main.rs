// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point.
//!
//! One positional argument, interpreted the way the original tool interprets
//! it: a nonzero integer is a world seed whose recipes are printed; anything
//! else (including zero and non-numeric strings) is a cost-file path to
//! minimize over. Scan progress goes through `log`/`env_logger`, enabled via
//! `RUST_LOG`; report lines go to stdout.

use clap::Parser;
use recipe_search::{generate_recipes, minimize_costs, CostTable, RecipeError, SEED_LIMIT};
use std::path::Path;
use std::process::ExitCode;

/// Print a seed's recipes, or search for the cheapest lively concoction.
#[derive(Debug, Parser)]
#[command(name = "recipes", version, about)]
struct Cli {
    /// World seed to print, or a cost file (material/cost pairs) to minimize over
    target: String,
}

fn print_seed(seed: u32) {
    let recipes = generate_recipes(seed);
    println!("Seed: {}", seed);
    println!("Lively Concoction: {}", recipes.lively_concoction);
    println!("Alchemic Precursor: {}", recipes.alchemic_precursor);
}

fn minimize_from_file(path: &Path) -> Result<(), RecipeError> {
    let costs = CostTable::load(path)?;
    minimize_costs(&costs, SEED_LIMIT, &mut |report| {
        println!(
            "Seed: {}\tCost: {}\tLC: {}",
            report.seed, report.cost, report.recipe
        );
    })
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.target.parse::<u32>() {
        Ok(seed) if seed != 0 => {
            print_seed(seed);
            ExitCode::SUCCESS
        }
        _ => match minimize_from_file(Path::new(&cli.target)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("{}", error);
                ExitCode::FAILURE
            }
        },
    }
}
