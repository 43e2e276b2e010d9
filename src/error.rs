// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Crate error type.
//!
//! Every fallible operation returns `Result<_, RecipeError>` and callers
//! propagate with `?`. None of these are recoverable within a run: generation
//! is seed-driven, so a missing cost entry or unknown name invalidates the
//! whole scan rather than a single step.

use thiserror::Error;

/// Errors from material lookup, cost-file parsing, and minimization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecipeError {
    /// A name matched neither the liquid nor the organic catalog.
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// A generated recipe references a material with no cost entry.
    #[error("no cost entry for material '{0}'")]
    MissingCostEntry(&'static str),

    /// A cost token in the cost file was not an integer.
    #[error("invalid cost '{value}' for material '{name}'")]
    InvalidCost { name: String, value: String },

    /// The cost file ended after a material name, before its cost.
    #[error("cost file ends after material '{0}' with no cost")]
    TruncatedEntry(String),

    /// Fewer than 3 cost entries; no lower bound exists for a 3-material recipe.
    #[error("cost table has {0} entries, need at least 3")]
    CostTableTooSmall(usize),

    /// The cost file could not be read.
    #[error("cannot read cost file '{path}': {message}")]
    CostFileRead { path: String, message: String },
}
