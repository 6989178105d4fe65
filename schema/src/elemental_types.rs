use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Every type label that occurs in the pokedex catalog, either as a
/// creature's own type or in a weakness list. Serde round-trips by the
/// exact catalog spelling ("Grass", "Electric", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Display, EnumIter)]
pub enum ElementType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl ElementType {
    /// Pair-wise effectiveness multiplier for an attacking type against a
    /// defending type.
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect
    ///
    /// The casual chart only scores the handful of matchups the battle log
    /// calls out; every other pairing is neutral.
    pub fn matchup(attacking: ElementType, defending: ElementType) -> f64 {
        use ElementType::*;

        match (attacking, defending) {
            // Fire
            (Fire, Grass) => 2.0,
            (Fire, Water) | (Fire, Fire) => 0.5,

            // Water
            (Water, Fire) => 2.0,
            (Water, Grass) | (Water, Water) => 0.5,

            // Grass
            (Grass, Water) => 2.0,
            (Grass, Fire) | (Grass, Grass) => 0.5,

            // Electric
            (Electric, Water) => 2.0,
            (Electric, Ground) => 0.0,

            // Ground
            (Ground, Electric) => 2.0,
            (Ground, Grass) => 0.5,

            _ => 1.0,
        }
    }
}
