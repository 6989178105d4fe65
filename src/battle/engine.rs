use crate::battle::calculators::calculate_damage;
use crate::battle::state::{BattleEvent, BattleSnapshot, EventBus, Team, TurnRng};
use crate::battler::Battler;
use crate::errors::{BattleResult, CatalogError};
use schema::{Creature, CreatureCatalog};

/// A battle that reaches this turn is adjudicated on remaining HP.
pub const MAX_TURNS: u32 = 12;

/// Chance for a wounded battler to spend its action healing instead of
/// attacking.
const HEAL_CHANCE: f64 = 0.03;

/// Decode a raw catalog payload into its records, ready to serve as
/// rosters.
pub fn decode_catalog(payload: &str) -> BattleResult<Vec<Creature>> {
    let catalog = CreatureCatalog::from_json(payload).map_err(CatalogError::from)?;
    Ok(catalog.pokemon)
}

/// Build one roster of battle-ready battlers from catalog records, in
/// roster order. Consumes three draws per creature.
pub fn initialize_roster(creatures: &[Creature], rng: &mut TurnRng) -> BattleResult<Vec<Battler>> {
    creatures
        .iter()
        .map(|creature| Battler::new(creature.clone(), rng).map_err(Into::into))
        .collect()
}

/// Initialization mode: turn both catalog rosters into battlers, user
/// roster first. The snapshot starts with an empty log and an open battle.
pub fn initialize_battle(
    user: &[Creature],
    opponent: &[Creature],
    mut rng: TurnRng,
) -> BattleResult<BattleSnapshot> {
    let user_battlers = initialize_roster(user, &mut rng)?;
    let opponent_battlers = initialize_roster(opponent, &mut rng)?;

    Ok(BattleSnapshot {
        user_battlers,
        opponent_battlers,
        turn_log: Vec::new(),
        ended: false,
    })
}

/// Combat mode: resolve one full turn.
///
/// The caller's rosters are copied and the copies mutated; inputs are never
/// touched. Every living actor consumes draws in a fixed order: heal check
/// (always), then either the heal amount, or target selection followed by
/// the attack draws of [`calculate_damage`]. Fainted battlers consume
/// nothing.
pub fn resolve_turn(
    user: &[Battler],
    opponent: &[Battler],
    turn: u32,
    mut rng: TurnRng,
) -> BattleSnapshot {
    let mut bus = EventBus::new();

    let mut user: Vec<Battler> = user.to_vec();
    let mut opponent: Vec<Battler> = opponent.to_vec();

    bus.push(BattleEvent::TurnStarted { turn_number: turn });

    // Speed order across both teams. The sort is stable, so at equal speed
    // user battlers keep their place ahead of opponents.
    let mut order: Vec<(Team, usize)> = Vec::with_capacity(user.len() + opponent.len());
    order.extend((0..user.len()).map(|index| (Team::User, index)));
    order.extend((0..opponent.len()).map(|index| (Team::Opponent, index)));
    order.sort_by(|a, b| {
        let speed_of = |entry: &(Team, usize)| match entry.0 {
            Team::User => user[entry.1].stats.speed,
            Team::Opponent => opponent[entry.1].stats.speed,
        };
        speed_of(b).cmp(&speed_of(a))
    });

    for (team, index) in order {
        let (allies, enemies) = match team {
            Team::User => (&mut user, &mut opponent),
            Team::Opponent => (&mut opponent, &mut user),
        };

        if allies[index].is_fainted() {
            continue;
        }
        // Once a side is wiped out the remaining actors stand down.
        if is_team_defeated(enemies) {
            break;
        }

        let heal_roll = rng.next_outcome("Heal Check");
        let actor = &mut allies[index];
        if actor.stats.hp < actor.stats.max_hp && heal_roll < HEAL_CHANCE {
            let amount = 8 + (rng.next_outcome("Heal Amount") * 8.0) as u16;
            actor.heal(amount);
            bus.push(BattleEvent::BattlerHealed {
                name: actor.name().to_string(),
                amount,
                hp: actor.stats.hp,
                max_hp: actor.stats.max_hp,
            });
            continue;
        }

        let living: Vec<usize> = enemies
            .iter()
            .enumerate()
            .filter(|(_, enemy)| !enemy.is_fainted())
            .map(|(enemy_index, _)| enemy_index)
            .collect();
        if living.is_empty() {
            break;
        }
        let picked = (rng.next_outcome("Target Selection") * living.len() as f64) as usize;
        let target = living[picked];

        let attacker = &allies[index];
        let outcome = calculate_damage(attacker, &enemies[target], &mut rng);
        let attacker_name = attacker.name().to_string();

        let defender = &mut enemies[target];
        if outcome.missed {
            bus.push(BattleEvent::AttackMissed {
                attacker: attacker_name,
                defender: defender.name().to_string(),
            });
            continue;
        }

        let fainted = defender.take_damage(outcome.damage);
        bus.push(BattleEvent::AttackLanded {
            attacker: attacker_name,
            defender: defender.name().to_string(),
            damage: outcome.damage,
            critical: outcome.is_critical,
            effectiveness: outcome.effectiveness,
            hp: defender.stats.hp,
            max_hp: defender.stats.max_hp,
        });
        if fainted {
            bus.push(BattleEvent::BattlerFainted {
                name: defender.name().to_string(),
            });
        }
    }

    // End conditions, in precedence order: opponent wiped, user wiped,
    // turn cap reached.
    let mut ended = true;
    if is_team_defeated(&opponent) {
        bus.push(BattleEvent::TeamDefeated { team: Team::Opponent });
    } else if is_team_defeated(&user) {
        bus.push(BattleEvent::TeamDefeated { team: Team::User });
    } else if turn >= MAX_TURNS {
        bus.push(BattleEvent::MaxTurnsReached { limit: MAX_TURNS });
        let user_hp = remaining_hp(&user);
        let opponent_hp = remaining_hp(&opponent);
        let winner = if user_hp > opponent_hp {
            Some(Team::User)
        } else if opponent_hp > user_hp {
            Some(Team::Opponent)
        } else {
            None
        };
        bus.push(BattleEvent::HpVerdict { winner });
    } else {
        ended = false;
    }

    BattleSnapshot {
        user_battlers: user,
        opponent_battlers: opponent,
        turn_log: bus.to_log(),
        ended,
    }
}

/// True when every battler on the roster is at zero hp. An empty roster
/// counts as defeated.
pub fn is_team_defeated(team: &[Battler]) -> bool {
    team.iter().all(|battler| battler.is_fainted())
}

/// Total remaining hp across a roster.
pub fn remaining_hp(team: &[Battler]) -> u32 {
    team.iter().map(|battler| battler.stats.hp as u32).sum()
}
