// In: src/lib.rs

//! Pokemon Skirmish Battle Resolver
//!
//! A deterministic auto-battle engine for catalog creatures: rosters are
//! rolled into battlers, whole turns resolve from a scripted random tape,
//! and every state change is reported as a replayable event log.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod battler;
pub mod errors;
pub mod prefab_teams;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokemon-skirmish`
// crate, making it easy for users to import the most important types
// directly.

// --- From the `schema` crate ---
// Re-export the core catalog data definitions.
pub use schema::{Creature, CreatureCatalog, ElementType};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::{
    decode_catalog, initialize_battle, initialize_roster, resolve_turn, MAX_TURNS,
};
pub use battle::runner::BattleRunner;
pub use battle::state::{BattleEvent, BattleOutcome, BattleSnapshot, EventBus, Team, TurnRng};

// Core runtime types for a battle.
pub use battler::{Battler, CombatStats};

// Crate-specific error and result types.
pub use errors::{
    BattleEngineError, BattleResult, CatalogError, CreatureDataError, CreatureDataResult,
};
