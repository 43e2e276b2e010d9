// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recipe assembly from a world seed.
//!
//! A world seed determines two crafting recipes, the lively concoction and
//! the alchemic precursor, through one shared draw sequence:
//!
//! 1. A primary [`GameRng`] is seeded from `seed * 0.17127 + 1323.5903`,
//!    truncated to `u32` (the float formula and its truncation are part of
//!    the protocol).
//! 2. Six outputs are discarded, then the lively concoction is assembled.
//! 3. Two more outputs are discarded, then the alchemic precursor is
//!    assembled from the now-advanced generator.
//!
//! Each recipe draws 3 distinct liquids plus one organic, then shuffles the
//! 4 with a *second*, independently seeded generator and drops the last
//! element. The drop-last step is how the game injects the organic: with
//! probability 3/4 the dropped element is a liquid and the organic survives
//! somewhere among the kept 3. This must not be "simplified" into a direct
//! organic-insertion scheme — that would change which seeds produce which
//! recipes.
//!
//! Everything here is a pure function of the seed.

use crate::materials::{Material, LIQUIDS, ORGANICS};
use crate::rng::GameRng;
use std::fmt;

/// Offset added to the halved seed when deriving the shuffle generator.
///
/// Protocol constant, not a parameter: the external generator seeds its
/// shuffle RNG as `(seed >> 1) + 0x30f6` and nothing else reproduces its
/// permutations.
const SHUFFLE_SEED_OFFSET: u32 = 0x30f6;

/// Number of materials in a finished recipe.
pub const RECIPE_SIZE: usize = 3;

/// An ordered triple of pairwise-distinct materials.
///
/// Order is the shuffled draw order and is observable output; two recipes
/// with the same materials in different orders are different recipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    materials: [Material; RECIPE_SIZE],
}

impl Recipe {
    /// The materials in recipe order.
    pub fn materials(&self) -> &[Material; RECIPE_SIZE] {
        &self.materials
    }

    /// Iterate the materials in recipe order.
    pub fn iter(&self) -> impl Iterator<Item = Material> + '_ {
        self.materials.iter().copied()
    }
}

impl fmt::Display for Recipe {
    /// Comma-space-joined catalog names, e.g. `swamp, oil, copper`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mat) in self.materials.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(mat.name())?;
        }
        Ok(())
    }
}

/// The two recipes derived from one world seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldRecipes {
    pub lively_concoction: Recipe,
    pub alchemic_precursor: Recipe,
}

/// Shuffle `materials` in place with the seed-derived shuffle generator.
///
/// A fresh generator is seeded `(shuffle_seed >> 1) + 0x30f6`, its first
/// output is thrown away, then a Fisher-Yates pass runs from the last index
/// down to 0. The final `i = 0` round draws `rand_int(1)` and swaps index 0
/// with itself; the draw is consumed all the same and is part of the
/// protocol.
fn shuffle(materials: &mut [Material], shuffle_seed: u32) {
    let mut rng = GameRng::new((shuffle_seed >> 1).wrapping_add(SHUFFLE_SEED_OFFSET));
    rng.next_value();
    for i in (0..materials.len()).rev() {
        let j = rng.rand_int(i as u32 + 1) as usize;
        materials.swap(i, j);
    }
}

/// Assemble one recipe from the primary generator's current position.
///
/// Draws 3 distinct liquids (duplicates are redrawn, preserving append
/// order), appends one organic, shuffles the 4 with the second generator,
/// and drops the last element.
pub fn random_recipe(rng: &mut GameRng, shuffle_seed: u32) -> Recipe {
    let mut working: Vec<Material> = Vec::with_capacity(RECIPE_SIZE + 1);

    while working.len() < RECIPE_SIZE {
        let candidate = Material::liquid(rng.rand_int(LIQUIDS.len() as u32) as usize);
        if !working.contains(&candidate) {
            working.push(candidate);
        }
    }

    working.push(Material::organic(rng.rand_int(ORGANICS.len() as u32) as usize));

    shuffle(&mut working, shuffle_seed);
    working.truncate(RECIPE_SIZE);

    Recipe {
        materials: [working[0], working[1], working[2]],
    }
}

/// Generate both recipes for a world seed.
///
/// Pure and deterministic: the same seed always yields the same
/// [`WorldRecipes`]. The discarded draws between stages keep this sequence
/// aligned with the external generator and must not be removed.
pub fn generate_recipes(seed: u32) -> WorldRecipes {
    let initial_state = (f64::from(seed) * 0.17127 + 1323.5903) as u32;
    let mut rng = GameRng::new(initial_state);

    for _ in 0..6 {
        rng.next_value();
    }

    let lively_concoction = random_recipe(&mut rng, seed);

    rng.next_value();
    rng.next_value();

    let alchemic_precursor = random_recipe(&mut rng, seed);

    WorldRecipes {
        lively_concoction,
        alchemic_precursor,
    }
}
