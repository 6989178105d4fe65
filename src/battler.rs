use crate::battle::state::TurnRng;
use crate::errors::{CreatureDataError, CreatureDataResult};
use schema::Creature;
use serde::{Deserialize, Serialize};

/// Every battler enters combat with this much HP.
const BASE_HP: u16 = 100;

/// Derived, mutable combat block of a battler. Serializes camelCase to
/// match the snapshot wire format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CombatStats {
    pub hp: u16,
    pub max_hp: u16,
    pub defense: u16,
    pub crit_chance: f64,
    pub miss_chance: f64,
    pub speed: u16,
    pub attack: u16,
    pub weight_kg: f64,
    pub height_m: f64,
    pub rarity_factor: f64,
    pub power_multiplier: f64,
}

/// A creature readied for combat: the immutable catalog record plus the
/// derived combat block, flattened into a single wire object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Battler {
    #[serde(flatten)]
    pub creature: Creature,
    #[serde(flatten)]
    pub stats: CombatStats,
}

impl Battler {
    /// Create a battle-ready battler from a catalog record.
    ///
    /// Consumes exactly three draws, in order: defense, speed, attack.
    /// Rejects records whose height or weight string has no numeric value,
    /// so no non-finite number ever reaches the damage math.
    pub fn new(creature: Creature, rng: &mut TurnRng) -> CreatureDataResult<Self> {
        let weight_kg = parse_measurement(&creature.weight, "kg").ok_or_else(|| {
            CreatureDataError::MalformedWeight {
                name: creature.name.clone(),
                value: creature.weight.clone(),
            }
        })?;
        let height_m = parse_measurement(&creature.height, "m").ok_or_else(|| {
            CreatureDataError::MalformedHeight {
                name: creature.name.clone(),
                value: creature.height.clone(),
            }
        })?;

        let stats = CombatStats {
            hp: BASE_HP,
            max_hp: BASE_HP,
            defense: 6 + (rng.next_outcome("Defense Roll") * 6.0) as u16,
            crit_chance: 0.2,
            miss_chance: 0.08,
            speed: 30 + (rng.next_outcome("Speed Roll") * 21.0) as u16,
            attack: 18 + (rng.next_outcome("Attack Roll") * 9.0) as u16,
            weight_kg,
            height_m,
            rarity_factor: rarity_factor(creature.spawn_chance),
            power_multiplier: power_multiplier(creature.multipliers.as_deref()),
        };

        Ok(Battler { creature, stats })
    }

    /// Assemble a battler from an explicit combat block. Tests use this to
    /// pin every stat instead of rolling them.
    pub fn new_for_test(creature: Creature, stats: CombatStats) -> Self {
        Battler { creature, stats }
    }

    pub fn name(&self) -> &str {
        &self.creature.name
    }

    pub fn is_fainted(&self) -> bool {
        self.stats.hp == 0
    }

    /// Apply damage, saturating at zero. Returns true if this knocked the
    /// battler out.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        self.stats.hp = self.stats.hp.saturating_sub(amount);
        self.stats.hp == 0
    }

    /// Restore hp, capped at the battler's maximum.
    pub fn heal(&mut self, amount: u16) {
        self.stats.hp = self.stats.hp.saturating_add(amount).min(self.stats.max_hp);
    }
}

/// Extract the numeric part of a catalog measurement like "6.9 kg" or
/// "0.71 m". Returns None for anything that does not parse to a finite
/// number.
pub fn parse_measurement(value: &str, unit: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix(unit).unwrap_or(trimmed).trim();
    number.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

/// Map a catalog spawn chance onto a damage bonus: the rarer the creature,
/// the harder it hits. Presence decides the branch, so an explicit 0.0 is
/// treated as rarest.
pub fn rarity_factor(spawn_chance: Option<f64>) -> f64 {
    match spawn_chance {
        Some(chance) if chance < 0.05 => 1.3,
        Some(chance) if chance < 0.2 => 1.15,
        Some(_) => 1.0,
        None => 1.0,
    }
}

/// Strongest CP multiplier of the record, or 1.0 when the catalog carries
/// none.
pub fn power_multiplier(multipliers: Option<&[f64]>) -> f64 {
    multipliers
        .and_then(|values| values.iter().copied().reduce(f64::max))
        .unwrap_or(1.0)
}
