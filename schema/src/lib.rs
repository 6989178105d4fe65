// Pokemon Skirmish Schema - Shared type definitions
// This crate contains the catalog record types and the elemental type enum
// that are shared between the battle engine and anything that decodes the
// external pokedex JSON.

// Re-export the main types
pub use creature::*;
pub use elemental_types::*;

pub mod creature;
pub mod elemental_types;
