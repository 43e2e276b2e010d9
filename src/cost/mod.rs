// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-material cost tables.
//!
//! A cost table maps materials to integer costs. It is built once, from a
//! whitespace-separated `name cost` file, and consumed read-only by the
//! minimizer. Costs are `i64` so that three-way sums cannot overflow for any
//! plausible input.

pub mod minimize;

pub use minimize::{minimize_costs, Report, LOWER_BOUND_REPORT_LIMIT, SEED_LIMIT};

use crate::error::RecipeError;
use crate::materials::{get_material, Material};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Read-only mapping from material to cost.
#[derive(Debug, Clone, Default)]
pub struct CostTable {
    costs: HashMap<Material, i64>,
}

impl CostTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cost of a material, replacing any previous entry.
    pub fn insert(&mut self, material: Material, cost: i64) {
        self.costs.insert(material, cost);
    }

    /// The cost of a material, if present.
    pub fn get(&self, material: Material) -> Option<i64> {
        self.costs.get(&material).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Parse a cost table from whitespace-separated `name cost` pairs.
    ///
    /// Line structure is irrelevant; tokens are consumed in pairs until end
    /// of input. Unknown names, non-integer costs, and a trailing unpaired
    /// name are all errors. A repeated name keeps its last cost.
    pub fn parse(input: &str) -> Result<Self, RecipeError> {
        let mut table = Self::new();
        let mut tokens = input.split_whitespace();

        while let Some(name) = tokens.next() {
            let material = get_material(name)?;
            let cost_token = tokens
                .next()
                .ok_or_else(|| RecipeError::TruncatedEntry(name.to_string()))?;
            let cost: i64 = cost_token
                .parse()
                .map_err(|_| RecipeError::InvalidCost {
                    name: name.to_string(),
                    value: cost_token.to_string(),
                })?;
            table.insert(material, cost);
        }

        Ok(table)
    }

    /// Read and parse a cost file.
    pub fn load(path: &Path) -> Result<Self, RecipeError> {
        let input = fs::read_to_string(path).map_err(|e| RecipeError::CostFileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&input)
    }

    /// Sum of the 3 globally cheapest entries.
    ///
    /// This is a provable lower bound on any 3-material recipe's cost under
    /// this table; the minimizer uses it as an early-stop signal, never as a
    /// filter. Fails if the table has fewer than 3 entries.
    pub fn lower_bound(&self) -> Result<i64, RecipeError> {
        if self.costs.len() < 3 {
            return Err(RecipeError::CostTableTooSmall(self.costs.len()));
        }
        let mut sorted: Vec<i64> = self.costs.values().copied().collect();
        sorted.sort_unstable();
        Ok(sorted[0] + sorted[1] + sorted[2])
    }
}
