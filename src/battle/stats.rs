use schema::ElementType;

/// Bonus applied once for every attacker type the defender is listed as
/// weak to.
const WEAKNESS_BONUS: f64 = 1.2;

/// Aggregate type multiplier of an attack: the product of the chart value
/// for every attacker-type × defender-type pairing, then ×1.2 per attacker
/// type present in the defender's catalog weakness list.
///
/// A charted immunity (0.0) zeroes the whole product regardless of the
/// other pairings or weakness bonuses.
pub fn type_multiplier(
    attacker_types: &[ElementType],
    defender_types: &[ElementType],
    defender_weaknesses: &[ElementType],
) -> f64 {
    let mut multiplier = 1.0;

    for attacking in attacker_types {
        for defending in defender_types {
            multiplier *= ElementType::matchup(*attacking, *defending);
        }
    }

    for attacking in attacker_types {
        if defender_weaknesses.contains(attacking) {
            multiplier *= WEAKNESS_BONUS;
        }
    }

    multiplier
}
