// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Material catalogs and name resolution.
//!
//! The game identifies a material by its position in one of two fixed,
//! ordered catalogs: liquids and organics. Order is identity — the recipe
//! generator draws catalog indices, so reordering or renaming an entry would
//! silently change every generated recipe. Both catalogs are `'static` data,
//! immutable for the process lifetime.

use crate::error::RecipeError;
use std::fmt;

/// The 22 liquid materials, in the game's order.
pub const LIQUIDS: [&str; 22] = [
    "water",
    "water_ice",
    "water_swamp",
    "oil",
    "alcohol",
    "swamp",
    "mud",
    "blood",
    "blood_fungi",
    "blood_worm",
    "radioactive_liquid",
    "cement",
    "acid",
    "lava",
    "urine",
    "poison",
    "magic_liquid_teleportation",
    "magic_liquid_polymorph",
    "magic_liquid_random_polymorph",
    "magic_liquid_berserk",
    "magic_liquid_charm",
    "magic_liquid_invisibility",
];

/// The 18 organic materials, in the game's order.
pub const ORGANICS: [&str; 18] = [
    "sand",
    "bone",
    "soil",
    "honey",
    "slime",
    "snow",
    "rotten_meat",
    "wax",
    "gold",
    "silver",
    "copper",
    "brass",
    "diamond",
    "coal",
    "gunpowder",
    "gunpowder_explosive",
    "grass",
    "fungi",
];

/// Which catalog a material belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Liquid,
    Organic,
}

/// A material: a catalog plus an index into it.
///
/// Equality is structural (kind and index both equal). The index is always a
/// valid position in the owning catalog; both constructors panic on an
/// out-of-range index, which can only happen through a bug since the recipe
/// generator draws indices in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Material {
    kind: MaterialKind,
    index: usize,
}

impl Material {
    /// The liquid at the given catalog index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= LIQUIDS.len()`.
    pub fn liquid(index: usize) -> Self {
        assert!(index < LIQUIDS.len(), "liquid index out of range: {}", index);
        Self {
            kind: MaterialKind::Liquid,
            index,
        }
    }

    /// The organic at the given catalog index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= ORGANICS.len()`.
    pub fn organic(index: usize) -> Self {
        assert!(
            index < ORGANICS.len(),
            "organic index out of range: {}",
            index
        );
        Self {
            kind: MaterialKind::Organic,
            index,
        }
    }

    /// Which catalog this material belongs to.
    pub fn kind(self) -> MaterialKind {
        self.kind
    }

    /// Position in the owning catalog.
    pub fn index(self) -> usize {
        self.index
    }

    /// The catalog name of this material.
    pub fn name(self) -> &'static str {
        match self.kind {
            MaterialKind::Liquid => LIQUIDS[self.index],
            MaterialKind::Organic => ORGANICS[self.index],
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a material name against both catalogs.
///
/// The match is exact and case-sensitive, scanning liquids first, the way the
/// game does. Names absent from both catalogs fail with
/// [`RecipeError::UnknownMaterial`].
pub fn get_material(name: &str) -> Result<Material, RecipeError> {
    if let Some(index) = LIQUIDS.iter().position(|&n| n == name) {
        return Ok(Material::liquid(index));
    }
    if let Some(index) = ORGANICS.iter().position(|&n| n == name) {
        return Ok(Material::organic(index));
    }
    Err(RecipeError::UnknownMaterial(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(LIQUIDS.len(), 22);
        assert_eq!(ORGANICS.len(), 18);
    }

    #[test]
    fn test_get_material_first_entries() {
        assert_eq!(get_material("water"), Ok(Material::liquid(0)));
        assert_eq!(get_material("sand"), Ok(Material::organic(0)));
    }

    #[test]
    fn test_get_material_unknown() {
        let err = get_material("bogus");
        assert_eq!(err, Err(RecipeError::UnknownMaterial("bogus".to_string())));
    }

    #[test]
    fn test_get_material_case_sensitive() {
        assert!(get_material("Water").is_err());
        assert!(get_material("SAND").is_err());
    }

    #[test]
    fn test_name_round_trip() {
        for index in 0..LIQUIDS.len() {
            let mat = Material::liquid(index);
            assert_eq!(get_material(mat.name()), Ok(mat));
        }
        for index in 0..ORGANICS.len() {
            let mat = Material::organic(index);
            assert_eq!(get_material(mat.name()), Ok(mat));
        }
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Material::liquid(3), Material::liquid(3));
        assert_ne!(Material::liquid(0), Material::organic(0));
        assert_ne!(Material::liquid(0), Material::liquid(1));
    }

    #[test]
    #[should_panic(expected = "liquid index out of range")]
    fn test_liquid_index_out_of_range() {
        Material::liquid(22);
    }

    #[test]
    fn test_display_uses_catalog_name() {
        assert_eq!(Material::liquid(3).to_string(), "oil");
        assert_eq!(Material::organic(17).to_string(), "fungi");
    }
}
