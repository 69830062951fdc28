mod economy;
mod mapgen;
mod patterns;

use crate::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn test_registry() -> BlueprintRegistry {
    let mut registry = BlueprintRegistry::new();
    let blueprints = [
        ("Skeleton_Warband", NodeKind::Enemy),
        ("Grave_Rats", NodeKind::Enemy),
        ("Bone_Colossus", NodeKind::MiniBoss),
        ("Abandoned_Camp", NodeKind::Encounter),
        ("Wandering_Spirit", NodeKind::Encounter),
        ("Bone_Trader", NodeKind::Shop),
        ("Gravedigger_Stall", NodeKind::Shop),
        ("Necromancer_Boss", NodeKind::Necromancer),
    ];
    for (name, kind) in blueprints {
        registry
            .insert(NodeBlueprint {
                name: name.to_string(),
                kind,
                title: name.replace('_', " "),
                art_key: name.to_lowercase(),
            })
            .expect("test blueprint names are unique");
    }
    registry
}

fn test_ruleset() -> MapRuleset {
    MapRuleset {
        name: "test".to_string(),
        width: 5,
        depth: 8,
        min_row_nodes: 2,
        max_row_nodes: 4,
        branch_factor: 2,
        kind_weights: vec![
            KindWeight {
                kind: NodeKind::Enemy,
                weight: 5,
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

/// The five-node chain from the save-compat contract:
/// entry -> enemy -> shop -> enemy -> boss.
fn chain_map() -> Map {
    let points: Vec<GridPoint> = [(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]
        .into_iter()
        .map(GridPoint::from)
        .collect();
    let kinds = [
        NodeKind::Encounter,
        NodeKind::Enemy,
        NodeKind::Shop,
        NodeKind::Enemy,
        NodeKind::Necromancer,
    ];
    let blueprints = [
        "Abandoned_Camp",
        "Skeleton_Warband",
        "Bone_Trader",
        "Grave_Rats",
        "Necromancer_Boss",
    ];
    let mut nodes: Vec<Node> = points
        .iter()
        .zip(kinds.iter().zip(blueprints.iter()))
        .map(|(&point, (&kind, &blueprint))| Node::new(kind, blueprint, point))
        .collect();
    for i in 0..points.len() - 1 {
        nodes[i].outgoing.push(points[i + 1]);
        nodes[i + 1].incoming.push(points[i]);
    }
    Map::new("test", "Necromancer_Boss", nodes, points)
}

fn test_pool() -> SymbolPool {
    SymbolPool::new(vec![SymbolWeight {
        symbol: Symbol::Coin,
        weight: 1,
    }])
    .expect("single-entry pool is drawable")
}

fn test_config() -> RunConfig {
    RunConfig {
        ruleset: test_ruleset(),
        symbol_pool: test_pool(),
        relic_catalog: vec![
            RelicDef {
                name: "beggars_bowl".to_string(),
                title: "Beggar's Bowl".to_string(),
                price: 10,
                effect: RelicEffect::FlatPerMatch { amount: 2 },
            },
            RelicDef {
                name: "loaded_die".to_string(),
                title: "Loaded Die".to_string(),
                price: 5,
                effect: RelicEffect::StakeDiscount { amount: 3 },
            },
        ],
        starting_gold: 50,
        base_stake: 10,
        encounter_reward: 5,
    }
}

/// Engine dropped onto the chain map at the entry with the given gold
fn engine_on_chain(gold: Gold) -> RunEngine {
    let save = RunSave {
        map: chain_map().to_dto(),
        position: [0, 0],
        phase: RunPhase::Traverse,
        round: 0,
        seed: 7,
        armed_stake: None,
        gold,
        relics: Vec::new(),
    };
    RunEngine::from_save(test_config(), save).expect("chain map save loads")
}

fn grid_of(cells: [Symbol; GRID_CELLS]) -> SlotGrid {
    SlotGrid::from_cells(cells)
}

/// A grid where no template matches
fn dead_grid() -> SlotGrid {
    use Symbol::*;
    grid_of([Coin, Sword, Shield, Potion, Skull, Crown, Sword, Coin, Potion])
}
