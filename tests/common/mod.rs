// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use recipe_search::{CostTable, Material, LIQUIDS, ORGANICS};

/// A table assigning the same cost to every catalog material.
///
/// With a uniform table every recipe costs exactly three times the unit
/// cost, so every seed ties the lower bound. Useful for exercising the
/// early-stop path quickly.
pub fn uniform_cost_table(cost: i64) -> CostTable {
    let mut table = CostTable::new();
    for index in 0..LIQUIDS.len() {
        table.insert(Material::liquid(index), cost);
    }
    for index in 0..ORGANICS.len() {
        table.insert(Material::organic(index), cost);
    }
    table
}

/// Water, oil and sand at cost 1; every other material at cost 100.
///
/// The lower bound is 3 and only a recipe of exactly those three materials
/// achieves it, which makes lower-bound seeds rare.
pub fn cheap_trio_table() -> CostTable {
    let mut table = uniform_cost_table(100);
    table.insert(Material::liquid(0), 1); // water
    table.insert(Material::liquid(3), 1); // oil
    table.insert(Material::organic(0), 1); // sand
    table
}
