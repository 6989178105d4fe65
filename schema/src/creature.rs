use crate::ElementType;
use serde::{Deserialize, Serialize};

/// One immutable pokedex catalog entry, as served by the external catalog
/// endpoint. Only the fields the battle engine reads are modeled; anything
/// else in the payload (candy counts, spawn times, evolution chains) is
/// ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    /// Zero-padded display number, e.g. "001".
    pub num: String,
    pub name: String,
    /// Sprite URL.
    pub img: String,
    #[serde(rename = "type")]
    pub types: Vec<ElementType>,
    /// Absent in the catalog for a few records; treated as empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weaknesses: Vec<ElementType>,
    /// Human-readable with unit, e.g. "0.71 m".
    pub height: String,
    /// Human-readable with unit, e.g. "6.9 kg".
    pub weight: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spawn_chance: Option<f64>,
    /// CP multipliers; explicitly null for fully-evolved records.
    #[serde(default)]
    pub multipliers: Option<Vec<f64>>,
}

/// Wire wrapper of the catalog endpoint: `{ "pokemon": [ ... ] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureCatalog {
    pub pokemon: Vec<Creature>,
}

impl CreatureCatalog {
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}
