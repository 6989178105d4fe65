use pokemon_skirmish::battle::runner::BattleRunner;
use pokemon_skirmish::battler::Battler;
use pokemon_skirmish::prefab_teams::{kanto_starters, wild_challengers};

fn main() {
    println!("=== Pokemon Skirmish: Starters vs Wild Challengers ===");
    println!();

    let user_roster = kanto_starters();
    let opponent_roster = wild_challengers();

    let mut runner = match BattleRunner::new(&user_roster, &opponent_roster) {
        Ok(runner) => runner,
        Err(e) => {
            println!("Error initializing battle: {}", e);
            return;
        }
    };

    println!("Your team:");
    for battler in runner.user_battlers() {
        print_battler(battler);
    }
    println!();
    println!("Opponent team:");
    for battler in runner.opponent_battlers() {
        print_battler(battler);
    }
    println!();

    let outcome = runner.run_to_completion();

    for line in runner.transcript() {
        println!("{}", line);
    }

    println!();
    println!(
        "Battle completed after {} turn(s). Outcome: {:?}",
        runner.turn_number(),
        outcome
    );
    println!("Final standings:");
    for battler in runner.user_battlers() {
        print_battler(battler);
    }
    for battler in runner.opponent_battlers() {
        print_battler(battler);
    }
}

fn print_battler(battler: &Battler) {
    println!(
        "  {} (HP: {}/{}, ATK: {}, DEF: {}, SPD: {})",
        battler.name(),
        battler.stats.hp,
        battler.stats.max_hp,
        battler.stats.attack,
        battler.stats.defense,
        battler.stats.speed
    );
}
