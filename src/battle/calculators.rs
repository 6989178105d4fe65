use crate::battle::state::TurnRng;
use crate::battle::stats::type_multiplier;
use crate::battler::Battler;

/// Attackers heavier than this are clumsy and miss more often.
const HEAVY_ATTACKER_KG: f64 = 80.0;
const HEAVY_MISS_PENALTY: f64 = 0.05;
const CRIT_MULTIPLIER: f64 = 1.4;

/// Everything the engine needs to apply one attack attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    pub damage: u16,
    pub is_critical: bool,
    pub missed: bool,
    pub effectiveness: f64,
}

/// Resolve one attack attempt into an outcome for the engine to apply.
///
/// Consumes exactly one draw on a miss and four on a hit, in order: miss
/// check, base-damage bonus, variance, critical check. The returned
/// effectiveness is the aggregate type multiplier, so the log can annotate
/// the hit.
pub fn calculate_damage(
    attacker: &Battler,
    defender: &Battler,
    rng: &mut TurnRng,
) -> AttackOutcome {
    let miss_chance = attacker.stats.miss_chance
        + if attacker.stats.weight_kg > HEAVY_ATTACKER_KG {
            HEAVY_MISS_PENALTY
        } else {
            0.0
        };
    if rng.next_outcome("Miss Check") < miss_chance {
        return AttackOutcome {
            damage: 0,
            is_critical: false,
            missed: true,
            effectiveness: 1.0,
        };
    }

    let base = attacker.stats.attack as f64 * 0.7
        + 5.0
        + (rng.next_outcome("Base Damage") * 5.0).floor();

    // Weight advantage caps at 1.4; a featherweight defender counts as 1 kg.
    let weight_factor =
        (attacker.stats.weight_kg / defender.stats.weight_kg.max(1.0)).min(1.4);
    let height_factor = if attacker.stats.height_m >= defender.stats.height_m {
        1.05
    } else {
        0.95
    };
    let effectiveness = type_multiplier(
        &attacker.creature.types,
        &defender.creature.types,
        &defender.creature.weaknesses,
    );

    let mut damage = base
        * weight_factor
        * height_factor
        * attacker.stats.rarity_factor
        * attacker.stats.power_multiplier
        * effectiveness;

    // Defense shaves a flat cut, but a landed hit always counts for
    // something before variance.
    damage -= defender.stats.defense as f64 * 0.8;
    if damage < 1.0 {
        damage = 1.0;
    }

    // Variance runs after the minimum, so a fully-absorbed hit can still
    // round down to zero.
    damage *= 0.9 + rng.next_outcome("Damage Variance") * 0.2;

    let is_critical = rng.next_outcome("Critical Check") < attacker.stats.crit_chance;
    if is_critical {
        damage *= CRIT_MULTIPLIER;
    }

    AttackOutcome {
        damage: damage as u16,
        is_critical,
        missed: false,
        effectiveness,
    }
}
