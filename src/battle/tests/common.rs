use crate::battle::state::TurnRng;
use crate::battler::{Battler, CombatStats};
use crate::errors::BattleResult;
use schema::{Creature, ElementType};

/// A builder for creating test battlers with pinned combat stats.
///
/// # Example
/// ```
/// let battler = TestBattlerBuilder::new("Charmander")
///     .with_attack(20)
///     .with_types(vec![ElementType::Fire])
///     .build();
/// ```
pub struct TestBattlerBuilder {
    name: String,
    types: Vec<ElementType>,
    weaknesses: Vec<ElementType>,
    hp: u16,
    max_hp: u16,
    defense: u16,
    crit_chance: f64,
    miss_chance: f64,
    speed: u16,
    attack: u16,
    weight_kg: f64,
    height_m: f64,
    rarity_factor: f64,
    power_multiplier: f64,
}

impl TestBattlerBuilder {
    /// Creates a new builder with neutral defaults: a typeless-neutral
    /// battler whose every stat is a round number.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            types: vec![ElementType::Normal],
            weaknesses: Vec::new(),
            hp: 100,
            max_hp: 100,
            defense: 10,
            crit_chance: 0.2,
            miss_chance: 0.08,
            speed: 50,
            attack: 25,
            weight_kg: 10.0,
            height_m: 1.0,
            rarity_factor: 1.0,
            power_multiplier: 1.0,
        }
    }

    /// Sets the current HP. Max HP stays at its default, so this also
    /// creates wounded battlers.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.hp = hp;
        self
    }

    pub fn with_defense(mut self, defense: u16) -> Self {
        self.defense = defense;
        self
    }

    pub fn with_crit_chance(mut self, crit_chance: f64) -> Self {
        self.crit_chance = crit_chance;
        self
    }

    pub fn with_miss_chance(mut self, miss_chance: f64) -> Self {
        self.miss_chance = miss_chance;
        self
    }

    pub fn with_speed(mut self, speed: u16) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_attack(mut self, attack: u16) -> Self {
        self.attack = attack;
        self
    }

    /// Sets the combat weight and keeps the catalog string in step.
    pub fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    pub fn with_height_m(mut self, height_m: f64) -> Self {
        self.height_m = height_m;
        self
    }

    pub fn with_rarity_factor(mut self, rarity_factor: f64) -> Self {
        self.rarity_factor = rarity_factor;
        self
    }

    pub fn with_power_multiplier(mut self, power_multiplier: f64) -> Self {
        self.power_multiplier = power_multiplier;
        self
    }

    pub fn with_types(mut self, types: Vec<ElementType>) -> Self {
        self.types = types;
        self
    }

    pub fn with_weaknesses(mut self, weaknesses: Vec<ElementType>) -> Self {
        self.weaknesses = weaknesses;
        self
    }

    /// Builds the `Battler` without consuming any RNG draws.
    pub fn build(self) -> Battler {
        let creature = Creature {
            id: 0,
            num: "000".to_string(),
            name: self.name,
            img: String::new(),
            types: self.types,
            weaknesses: self.weaknesses,
            height: format!("{} m", self.height_m),
            weight: format!("{} kg", self.weight_kg),
            spawn_chance: None,
            multipliers: None,
        };
        let stats = CombatStats {
            hp: self.hp,
            max_hp: self.max_hp,
            defense: self.defense,
            crit_chance: self.crit_chance,
            miss_chance: self.miss_chance,
            speed: self.speed,
            attack: self.attack,
            weight_kg: self.weight_kg,
            height_m: self.height_m,
            rarity_factor: self.rarity_factor,
            power_multiplier: self.power_multiplier,
        };
        Battler::new_for_test(creature, stats)
    }
}

/// Catalog record for Bulbasaur, as the creature catalog ships it.
pub fn bulbasaur() -> Creature {
    Creature {
        id: 1,
        num: "001".to_string(),
        name: "Bulbasaur".to_string(),
        img: "http://www.serebii.net/pokemongo/pokemon/001.png".to_string(),
        types: vec![ElementType::Grass, ElementType::Poison],
        weaknesses: vec![
            ElementType::Fire,
            ElementType::Ice,
            ElementType::Flying,
            ElementType::Psychic,
        ],
        height: "0.71 m".to_string(),
        weight: "6.9 kg".to_string(),
        spawn_chance: Some(0.69),
        multipliers: Some(vec![1.58]),
    }
}

/// Catalog record for Charmander, as the creature catalog ships it.
pub fn charmander() -> Creature {
    Creature {
        id: 4,
        num: "004".to_string(),
        name: "Charmander".to_string(),
        img: "http://www.serebii.net/pokemongo/pokemon/004.png".to_string(),
        types: vec![ElementType::Fire],
        weaknesses: vec![
            ElementType::Water,
            ElementType::Ground,
            ElementType::Rock,
        ],
        height: "0.61 m".to_string(),
        weight: "8.5 kg".to_string(),
        spawn_chance: Some(0.253),
        multipliers: Some(vec![1.65]),
    }
}

/// Creates a `TurnRng` with a long list of midline draws (0.5).
/// Useful for tests where the specific RNG outcome is not important, preventing panics from exhaustion.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![0.5; 100]) // Provide a generous buffer of RNG values
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
