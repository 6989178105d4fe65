use schema::{Creature, ElementType};

/// The classic Kanto starter trio. Balanced rosters for demos and guest
/// battles: every member covers another's weakness.
pub fn kanto_starters() -> Vec<Creature> {
    vec![
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
        },
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
        },
        Creature {
            id: 7,
            num: "007".to_string(),
            name: "Squirtle".to_string(),
            img: "http://www.serebii.net/pokemongo/pokemon/007.png".to_string(),
            types: vec![ElementType::Water],
            weaknesses: vec![ElementType::Electric, ElementType::Grass],
            height: "0.51 m".to_string(),
            weight: "9.0 kg".to_string(),
            spawn_chance: Some(0.58),
            multipliers: Some(vec![2.1]),
        },
    ]
}

/// An uneven wild-side roster: a glass cannon, a heavyweight whose bulk
/// costs it accuracy, and a legendary that rolls the top rarity tier.
pub fn wild_challengers() -> Vec<Creature> {
    vec![
        Creature {
            id: 25,
            num: "025".to_string(),
            name: "Pikachu".to_string(),
            img: "http://www.serebii.net/pokemongo/pokemon/025.png".to_string(),
            types: vec![ElementType::Electric],
            weaknesses: vec![ElementType::Ground],
            height: "0.41 m".to_string(),
            weight: "6.0 kg".to_string(),
            spawn_chance: Some(0.21),
            multipliers: Some(vec![2.34]),
        },
        Creature {
            id: 95,
            num: "095".to_string(),
            name: "Onix".to_string(),
            img: "http://www.serebii.net/pokemongo/pokemon/095.png".to_string(),
            types: vec![ElementType::Rock, ElementType::Ground],
            weaknesses: vec![
                ElementType::Water,
                ElementType::Grass,
                ElementType::Fighting,
                ElementType::Ice,
                ElementType::Steel,
            ],
            height: "8.81 m".to_string(),
            weight: "210.0 kg".to_string(),
            spawn_chance: Some(0.1),
            multipliers: None,
        },
        Creature {
            id: 144,
            num: "144".to_string(),
            name: "Articuno".to_string(),
            img: "http://www.serebii.net/pokemongo/pokemon/144.png".to_string(),
            types: vec![ElementType::Ice, ElementType::Flying],
            weaknesses: vec![
                ElementType::Fire,
                ElementType::Electric,
                ElementType::Rock,
                ElementType::Steel,
            ],
            height: "1.7 m".to_string(),
            weight: "55.4 kg".to_string(),
            spawn_chance: Some(0.0),
            multipliers: None,
        },
    ]
}
