//! Default content set for Gravespin plus JSON loaders for overriding it.
//!
//! Everything the core needs to start a run ships from here: the blueprint
//! registry, the generation ruleset, the symbol pool, the relic catalog.
//! The loaders let a frontend swap any of them for JSON without recompiling.

use gravespin_core::{
    BlueprintRegistry, KindWeight, MapRuleset, MatchPattern, NodeBlueprint, NodeKind, RelicDef,
    RelicEffect, RunConfig, Symbol, SymbolPool, SymbolWeight,
};
use thiserror::Error;

/// Why a JSON override could not be used
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("malformed asset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] gravespin_core::GameError),
}

/// The stock blueprint set: two choices per filler kind plus the boss
pub fn default_registry() -> BlueprintRegistry {
    let mut registry = BlueprintRegistry::new();
    let blueprints = [
        ("Skeleton_Warband", NodeKind::Enemy, "Skeleton Warband", "enemy_skeletons"),
        ("Grave_Rats", NodeKind::Enemy, "Grave Rats", "enemy_rats"),
        ("Restless_Hollow", NodeKind::Enemy, "Restless Hollow", "enemy_hollow"),
        ("Bone_Colossus", NodeKind::MiniBoss, "Bone Colossus", "miniboss_colossus"),
        ("Crypt_Warden", NodeKind::MiniBoss, "Crypt Warden", "miniboss_warden"),
        ("Abandoned_Camp", NodeKind::Encounter, "Abandoned Camp", "encounter_camp"),
        ("Wandering_Spirit", NodeKind::Encounter, "Wandering Spirit", "encounter_spirit"),
        ("Bone_Trader", NodeKind::Shop, "Bone Trader", "shop_trader"),
        ("Gravedigger_Stall", NodeKind::Shop, "Gravedigger's Stall", "shop_stall"),
        ("Necromancer_Boss", NodeKind::Necromancer, "The Necromancer", "boss_necromancer"),
    ];
    for (name, kind, title, art_key) in blueprints {
        registry
            .insert(NodeBlueprint {
                name: name.to_string(),
                kind,
                title: title.to_string(),
                art_key: art_key.to_string(),
            })
            .expect("default blueprint names are unique");
    }
    registry
}

pub fn default_ruleset() -> MapRuleset {
    MapRuleset {
        name: "crypt_standard".to_string(),
        width: 5,
        depth: 9,
        min_row_nodes: 2,
        max_row_nodes: 4,
        branch_factor: 2,
        kind_weights: vec![
            KindWeight {
                kind: NodeKind::Enemy,
                weight: 6,
            },
            KindWeight {
                kind: NodeKind::Encounter,
                weight: 3,
            },
            KindWeight {
                kind: NodeKind::Shop,
                weight: 1,
            },
        ],
        shop_row: None,
        mini_boss_row: None,
        boss_blueprint: "Necromancer_Boss".to_string(),
    }
}

pub fn default_symbol_pool() -> SymbolPool {
    SymbolPool::new(vec![
        SymbolWeight {
            symbol: Symbol::Coin,
            weight: 30,
        },
        SymbolWeight {
            symbol: Symbol::Sword,
            weight: 24,
        },
        SymbolWeight {
            symbol: Symbol::Shield,
            weight: 20,
        },
        SymbolWeight {
            symbol: Symbol::Potion,
            weight: 14,
        },
        SymbolWeight {
            symbol: Symbol::Skull,
            weight: 8,
        },
        SymbolWeight {
            symbol: Symbol::Crown,
            weight: 4,
        },
    ])
    .expect("default pool has drawable weights")
}

pub fn default_relics() -> Vec<RelicDef> {
    vec![
        RelicDef {
            name: "golden_horseshoe".to_string(),
            title: "Golden Horseshoe".to_string(),
            price: 30,
            effect: RelicEffect::PatternMultiplier {
                pattern: MatchPattern::Horizontal,
                factor: 2,
            },
        },
        RelicDef {
            name: "cracked_hourglass".to_string(),
            title: "Cracked Hourglass".to_string(),
            price: 45,
            effect: RelicEffect::SymbolMultiplier {
                symbol: Symbol::Crown,
                factor: 3,
            },
        },
        RelicDef {
            name: "beggars_bowl".to_string(),
            title: "Beggar's Bowl".to_string(),
            price: 20,
            effect: RelicEffect::FlatPerMatch { amount: 2 },
        },
        RelicDef {
            name: "loaded_die".to_string(),
            title: "Loaded Die".to_string(),
            price: 25,
            effect: RelicEffect::StakeDiscount { amount: 3 },
        },
    ]
}

pub fn default_run_config() -> RunConfig {
    RunConfig {
        ruleset: default_ruleset(),
        symbol_pool: default_symbol_pool(),
        relic_catalog: default_relics(),
        starting_gold: 60,
        base_stake: 10,
        encounter_reward: 6,
    }
}

pub fn ruleset_from_json(json: &str) -> Result<MapRuleset, AssetError> {
    Ok(serde_json::from_str(json)?)
}

pub fn relics_from_json(json: &str) -> Result<Vec<RelicDef>, AssetError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses the weight table and rejects one that can never be drawn from
pub fn symbol_pool_from_json(json: &str) -> Result<SymbolPool, AssetError> {
    let entries: Vec<SymbolWeight> = serde_json::from_str(json)?;
    Ok(SymbolPool::new(entries)?)
}

/// Parses a blueprint list and rejects duplicate names
pub fn blueprints_from_json(json: &str) -> Result<BlueprintRegistry, AssetError> {
    let blueprints: Vec<NodeBlueprint> = serde_json::from_str(json)?;
    let mut registry = BlueprintRegistry::new();
    for blueprint in blueprints {
        registry.insert(blueprint)?;
    }
    Ok(registry)
}
