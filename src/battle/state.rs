use crate::battler::Battler;
use serde::{Deserialize, Serialize};

/// Which side of the battle a battler belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    User,
    Opponent,
}

/// Final verdict of a finished battle, from the user's perspective.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    UserVictory,
    OpponentVictory,
    Draw,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Turn Management
    TurnStarted {
        turn_number: u32,
    },

    // Battler Actions
    BattlerHealed {
        name: String,
        amount: u16,
        hp: u16,
        max_hp: u16,
    },
    AttackMissed {
        attacker: String,
        defender: String,
    },
    AttackLanded {
        attacker: String,
        defender: String,
        damage: u16,
        critical: bool,
        effectiveness: f64,
        hp: u16,
        max_hp: u16,
    },
    BattlerFainted {
        name: String,
    },

    // Battle End
    TeamDefeated {
        team: Team,
    },
    MaxTurnsReached {
        limit: u32,
    },
    HpVerdict {
        winner: Option<Team>,
    },
}

impl BattleEvent {
    /// Formats the event into the exact log line the battle transcript
    /// carries. Every event produces exactly one line.
    pub fn format(&self) -> String {
        match self {
            // === Turn Management Events ===
            BattleEvent::TurnStarted { turn_number } => {
                format!("--- Turn {} ---", turn_number)
            }

            // === Action Events ===
            BattleEvent::BattlerHealed { name, amount, hp, max_hp } => {
                format!("{} heals for {} HP! ({}/{})", name, amount, hp, max_hp)
            }
            BattleEvent::AttackMissed { attacker, defender } => {
                format!("{} attacks {} but missed!", attacker, defender)
            }
            BattleEvent::AttackLanded {
                attacker,
                defender,
                damage,
                critical,
                effectiveness,
                hp,
                max_hp,
            } => {
                let mut line = format!("{} hits {} for {} damage.", attacker, defender, damage);
                if *critical {
                    line.push_str(" Critical hit!");
                }
                if *effectiveness > 1.0 {
                    line.push_str(" It's super effective!");
                } else if *effectiveness > 0.0 && *effectiveness < 1.0 {
                    line.push_str(" It's not very effective...");
                } else if *effectiveness == 0.0 {
                    line.push_str(" But it had no effect!");
                }
                line.push_str(&format!(" ({}/{} HP left)", hp, max_hp));
                line
            }
            BattleEvent::BattlerFainted { name } => {
                format!("{} fainted!", name)
            }

            // === Battle End Events ===
            BattleEvent::TeamDefeated { team } => match team {
                Team::Opponent => "Opponent team has all fainted! You win! 🎉".to_string(),
                Team::User => "Your team has all fainted! You lose! 💀".to_string(),
            },
            BattleEvent::MaxTurnsReached { limit } => {
                format!("Reached max turns ({}). Determining winner by HP...", limit)
            }
            BattleEvent::HpVerdict { winner } => match winner {
                Some(Team::User) => "Battle ends! You win by HP advantage! 🎉".to_string(),
                Some(Team::Opponent) => {
                    "Battle ends! Opponents win by HP advantage! 💀".to_string()
                }
                None => "Battle ends in a draw!".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod event_formatting_tests {
    use super::*;

    #[test]
    fn test_turn_and_action_lines() {
        let turn = BattleEvent::TurnStarted { turn_number: 5 };
        assert_eq!(turn.format(), "--- Turn 5 ---");

        let heal = BattleEvent::BattlerHealed {
            name: "Pikachu".to_string(),
            amount: 12,
            hp: 80,
            max_hp: 100,
        };
        assert_eq!(heal.format(), "Pikachu heals for 12 HP! (80/100)");

        let miss = BattleEvent::AttackMissed {
            attacker: "Charmander".to_string(),
            defender: "Bulbasaur".to_string(),
        };
        assert_eq!(miss.format(), "Charmander attacks Bulbasaur but missed!");

        let faint = BattleEvent::BattlerFainted {
            name: "Bulbasaur".to_string(),
        };
        assert_eq!(faint.format(), "Bulbasaur fainted!");
    }

    #[test]
    fn test_attack_landed_composes_annotations() {
        let plain = BattleEvent::AttackLanded {
            attacker: "Pikachu".to_string(),
            defender: "Onix".to_string(),
            damage: 14,
            critical: false,
            effectiveness: 1.0,
            hp: 86,
            max_hp: 100,
        };
        assert_eq!(plain.format(), "Pikachu hits Onix for 14 damage. (86/100 HP left)");

        let loud = BattleEvent::AttackLanded {
            attacker: "Charmander".to_string(),
            defender: "Bulbasaur".to_string(),
            damage: 42,
            critical: true,
            effectiveness: 2.4,
            hp: 0,
            max_hp: 100,
        };
        assert_eq!(
            loud.format(),
            "Charmander hits Bulbasaur for 42 damage. Critical hit! It's super effective! (0/100 HP left)"
        );

        let resisted = BattleEvent::AttackLanded {
            attacker: "Charmander".to_string(),
            defender: "Squirtle".to_string(),
            damage: 6,
            critical: false,
            effectiveness: 0.5,
            hp: 94,
            max_hp: 100,
        };
        assert_eq!(
            resisted.format(),
            "Charmander hits Squirtle for 6 damage. It's not very effective... (94/100 HP left)"
        );

        let immune = BattleEvent::AttackLanded {
            attacker: "Pikachu".to_string(),
            defender: "Onix".to_string(),
            damage: 1,
            critical: false,
            effectiveness: 0.0,
            hp: 99,
            max_hp: 100,
        };
        assert_eq!(
            immune.format(),
            "Pikachu hits Onix for 1 damage. But it had no effect! (99/100 HP left)"
        );
    }

    #[test]
    fn test_battle_end_lines() {
        let win = BattleEvent::TeamDefeated { team: Team::Opponent };
        assert_eq!(win.format(), "Opponent team has all fainted! You win! 🎉");

        let lose = BattleEvent::TeamDefeated { team: Team::User };
        assert_eq!(lose.format(), "Your team has all fainted! You lose! 💀");

        let cap = BattleEvent::MaxTurnsReached { limit: 12 };
        assert_eq!(cap.format(), "Reached max turns (12). Determining winner by HP...");

        let user_edge = BattleEvent::HpVerdict { winner: Some(Team::User) };
        assert_eq!(user_edge.format(), "Battle ends! You win by HP advantage! 🎉");

        let opponent_edge = BattleEvent::HpVerdict { winner: Some(Team::Opponent) };
        assert_eq!(opponent_edge.format(), "Battle ends! Opponents win by HP advantage! 💀");

        let draw = BattleEvent::HpVerdict { winner: None };
        assert_eq!(draw.format(), "Battle ends in a draw!");
    }

    #[test]
    fn test_event_bus_collects_in_order() {
        let mut event_bus = EventBus::new();
        assert!(event_bus.is_empty());

        event_bus.push(BattleEvent::TurnStarted { turn_number: 1 });
        event_bus.push(BattleEvent::BattlerFainted {
            name: "Rattata".to_string(),
        });

        event_bus.print_debug_with_message("Events for test_event_bus_collects_in_order:");

        assert_eq!(event_bus.len(), 2);
        assert_eq!(
            event_bus.events()[0],
            BattleEvent::TurnStarted { turn_number: 1 }
        );
        assert_eq!(
            event_bus.to_log(),
            vec!["--- Turn 1 ---".to_string(), "Rattata fainted!".to_string()]
        );

        // Display shows the debug form of every event
        let display_output = format!("{}", event_bus);
        assert!(display_output.contains("TurnStarted"));
        assert!(display_output.contains("BattlerFainted"));
    }
}

/// Event bus for collecting battle events in resolution order.
///
/// The engine pushes one event per observable action; `to_log` renders the
/// whole bus into the transcript lines a snapshot carries.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Render every event into its transcript line, in order.
    pub fn to_log(&self) -> Vec<String> {
        self.events.iter().map(|event| event.format()).collect()
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print all events in debug format with a custom prefix message.
    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        self.print_debug();
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Format the EventBus for printing. Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Injectable source of uniform draws in `[0, 1)`.
///
/// Tests script the exact sequence of outcomes; production pre-generates a
/// budget of entropy values. Consumers pull draws in a documented order, so
/// a scripted vector lines up one-to-one with the decisions of a turn.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<f64>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// Pre-generate `draw_budget` entropy values. Callers size the budget
    /// from the roster: 3 draws per creature during initialization, at most
    /// 6 draws per living battler during a combat turn.
    pub fn new_random(draw_budget: usize) -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let outcomes: Vec<f64> = (0..draw_budget).map(|_| rng.random()).collect();
        Self { outcomes, index: 0 }
    }

    pub fn next_outcome(&mut self, reason: &str) -> f64 {
        if self.index >= self.outcomes.len() {
            // Add the reason to the panic message for better debugging!
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];

        // Print the consumption event to the console during tests.
        #[cfg(test)]
        println!("[RNG] Consumed {:.3} for: {}", outcome, reason);

        self.index += 1;
        outcome
    }
}

/// Result of one engine call: the post-call roster states, the formatted
/// transcript of everything that happened, and whether the battle is over.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BattleSnapshot {
    pub user_battlers: Vec<Battler>,
    pub opponent_battlers: Vec<Battler>,
    pub turn_log: Vec<String>,
    pub ended: bool,
}
