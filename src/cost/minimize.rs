// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Seed-space scan for the cheapest lively concoction.
//!
//! A straightforward linear scan: generate the recipes for every seed in
//! range, sum the lively concoction's costs, and report every seed whose
//! total is at or below the best seen so far. Ties are all reported, in seed
//! order.
//!
//! Two things bound the scan. The hard ceiling is [`SEED_LIMIT`] (10^9).
//! The early exit is the table's lower bound (sum of its 3 cheapest
//! entries): once more than [`LOWER_BOUND_REPORT_LIMIT`] reported seeds
//! achieve it, no later seed can improve on them and the scan stops.
//!
//! Reports stream through a caller-supplied callback so the CLI can print
//! them as the scan runs; a full scan visits up to 10^9 seeds and buffering
//! every report until the end would make the tool silent for minutes.

use crate::cost::CostTable;
use crate::error::RecipeError;
use crate::recipe::{generate_recipes, Recipe};
use log::{debug, info};

/// Exclusive upper bound of the production seed scan.
pub const SEED_LIMIT: u32 = 1_000_000_000;

/// Lower-bound reports beyond which the scan stops early.
pub const LOWER_BOUND_REPORT_LIMIT: u32 = 100;

/// One reported seed: its cost and its lively concoction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub seed: u32,
    pub cost: i64,
    pub recipe: Recipe,
}

/// Scan seeds `1..seed_limit`, reporting each cumulative best-or-tied-best.
///
/// The lower bound is computed up front and never filters seeds; it only
/// stops the scan once enough seeds have achieved it. A recipe material
/// missing from the table is fatal: generation is seed-driven, so the table
/// must cover the whole recipe space.
///
/// Production callers pass [`SEED_LIMIT`]; tests use a smaller range.
pub fn minimize_costs(
    costs: &CostTable,
    seed_limit: u32,
    report: &mut dyn FnMut(&Report),
) -> Result<(), RecipeError> {
    let lower_bound = costs.lower_bound()?;
    info!(
        "scanning seeds 1..{} ({} cost entries, lower bound {})",
        seed_limit,
        costs.len(),
        lower_bound
    );

    let mut best_cost = i64::MAX;
    let mut lower_bound_reports = 0u32;

    for seed in 1..seed_limit {
        let recipes = generate_recipes(seed);

        let mut total_cost = 0i64;
        for material in recipes.lively_concoction.iter() {
            total_cost += costs
                .get(material)
                .ok_or(RecipeError::MissingCostEntry(material.name()))?;
        }

        if total_cost <= best_cost {
            debug!("seed {} costs {}", seed, total_cost);
            report(&Report {
                seed,
                cost: total_cost,
                recipe: recipes.lively_concoction,
            });
            best_cost = total_cost;

            if best_cost == lower_bound {
                lower_bound_reports += 1;
                if lower_bound_reports > LOWER_BOUND_REPORT_LIMIT {
                    info!(
                        "stopping at seed {}: {} seeds reached the lower bound",
                        seed, lower_bound_reports
                    );
                    return Ok(());
                }
            }
        }
    }

    info!("scan exhausted at seed limit {}", seed_limit);
    Ok(())
}
