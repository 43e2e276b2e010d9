// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bit-exact reimplementation of a game's alchemy recipe generator.
//!
//! Two crafting recipes — the lively concoction and the alchemic precursor —
//! are derived deterministically from a world seed by the game's internal
//! pseudo-random generator. This crate reproduces that derivation byte for
//! byte and builds a brute-force cost minimizer on top of it.
//!
//! # Architecture
//!
//! Leaf first:
//!
//! - [`rng`]: the game's 31-bit LCG, with its exact unsigned-wraparound
//!   arithmetic. Everything else depends on this being bit-exact; a single
//!   deviation silently changes the recipes for every seed.
//! - [`materials`]: the two fixed catalogs (22 liquids, 18 organics) and
//!   name/index resolution. Catalog order is identity.
//! - [`recipe`]: seed derivation, material draws, the second-generator
//!   shuffle, and assembly of both recipes.
//! - [`cost`]: cost-table parsing and the linear seed scan that reports
//!   every cumulative best-or-tied-best seed, early-stopping once enough
//!   seeds achieve the provable lower bound.
//!
//! # Determinism
//!
//! [`recipe::generate_recipes`] is a pure function of the seed. Generator
//! state lives only for the duration of one generation; nothing persists
//! across seeds and there is no concurrency anywhere.

pub mod cost;
pub mod error;
pub mod materials;
pub mod recipe;
pub mod rng;

// Re-export commonly used types
pub use cost::{minimize_costs, CostTable, Report, LOWER_BOUND_REPORT_LIMIT, SEED_LIMIT};
pub use error::RecipeError;
pub use materials::{get_material, Material, MaterialKind, LIQUIDS, ORGANICS};
pub use recipe::{generate_recipes, random_recipe, Recipe, WorldRecipes};
pub use rng::GameRng;
