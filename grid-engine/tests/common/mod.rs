//! FILENAME: grid-engine/tests/common/mod.rs
//! Fixtures for grid-engine integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use catalog::{Record, RecordStore};
use grid_engine::{GridDefinition, GridSession};

/// The 151-entry creature catalog used across integration tests.
pub struct CatalogFixture;

impl CatalogFixture {
    pub const NAMES: [&'static str; 151] = [
        "bulbasaur", "ivysaur", "venusaur", "charmander", "charmeleon", "charizard",
        "squirtle", "wartortle", "blastoise", "caterpie", "metapod", "butterfree",
        "weedle", "kakuna", "beedrill", "pidgey", "pidgeotto", "pidgeot", "rattata",
        "raticate", "spearow", "fearow", "ekans", "arbok", "pikachu", "raichu",
        "sandshrew", "sandslash", "nidoran-f", "nidorina", "nidoqueen", "nidoran-m",
        "nidorino", "nidoking", "clefairy", "clefable", "vulpix", "ninetales",
        "jigglypuff", "wigglytuff", "zubat", "golbat", "oddish", "gloom", "vileplume",
        "paras", "parasect", "venonat", "venomoth", "diglett", "dugtrio", "meowth",
        "persian", "psyduck", "golduck", "mankey", "primeape", "growlithe", "arcanine",
        "poliwag", "poliwhirl", "poliwrath", "abra", "kadabra", "alakazam", "machop",
        "machoke", "machamp", "bellsprout", "weepinbell", "victreebel", "tentacool",
        "tentacruel", "geodude", "graveler", "golem", "ponyta", "rapidash", "slowpoke",
        "slowbro", "magnemite", "magneton", "farfetchd", "doduo", "dodrio", "seel",
        "dewgong", "grimer", "muk", "shellder", "cloyster", "gastly", "haunter",
        "gengar", "onix", "drowzee", "hypno", "krabby", "kingler", "voltorb",
        "electrode", "exeggcute", "exeggutor", "cubone", "marowak", "hitmonlee",
        "hitmonchan", "lickitung", "koffing", "weezing", "rhyhorn", "rhydon",
        "chansey", "tangela", "kangaskhan", "horsea", "seadra", "goldeen", "seaking",
        "staryu", "starmie", "mr-mime", "scyther", "jynx", "electabuzz", "magmar",
        "pinsir", "tauros", "magikarp", "gyarados", "lapras", "ditto", "eevee",
        "vaporeon", "jolteon", "flareon", "porygon", "omanyte", "omastar", "kabuto",
        "kabutops", "aerodactyl", "snorlax", "articuno", "zapdos", "moltres",
        "dratini", "dragonair", "dragonite", "mewtwo", "mew",
    ];

    /// Builds record `id` (1-based). The fire starters carry their real
    /// stats; everything else is derived from the id so ties are common.
    pub fn record(id: u32) -> Record {
        let name = Self::NAMES[(id - 1) as usize];
        let (types, stats, weight, height): (Vec<&str>, [f64; 4], f64, f64) = match id {
            4 => (vec!["fire"], [39.0, 52.0, 43.0, 65.0], 85.0, 6.0),
            5 => (vec!["fire"], [58.0, 64.0, 58.0, 80.0], 190.0, 11.0),
            6 => (vec!["fire", "flying"], [78.0, 84.0, 78.0, 100.0], 905.0, 17.0),
            _ => {
                let vocab = Self::categories();
                let mut types = vec![vocab[(id as usize * 7) % vocab.len()]];
                if id % 4 == 0 {
                    types.push(vocab[(id as usize * 11) % vocab.len()]);
                }
                let stats = [
                    (20 + (id * 37) % 90) as f64,
                    (10 + (id * 53) % 20 * 5) as f64,
                    (15 + (id * 29) % 110) as f64,
                    (15 + (id * 41) % 120) as f64,
                ];
                (types, stats, (1 + (id * 13) % 1000) as f64, (1 + id % 20) as f64)
            }
        };

        Record::new(id, name, types)
            .with_metric("hp", stats[0])
            .with_metric("attack", stats[1])
            .with_metric("defense", stats[2])
            .with_metric("speed", stats[3])
            .with_auxiliary("weight", weight)
            .with_auxiliary("height", height)
            .with_auxiliary("sprite", format!("sprites/{}.png", id))
    }

    pub fn categories() -> Vec<&'static str> {
        vec![
            "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison",
            "ground", "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel",
            "fairy",
        ]
    }

    pub fn records() -> Vec<Record> {
        (1..=151).map(Self::record).collect()
    }

    pub fn store() -> RecordStore {
        RecordStore::from_records(Self::records()).expect("fixture ids are unique")
    }

    pub fn session() -> GridSession {
        GridSession::new(Arc::new(Self::store()), GridDefinition::creature_catalog())
    }
}
