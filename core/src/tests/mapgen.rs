use super::*;

fn generate(seed: u64) -> Map {
    let registry = test_registry();
    let ruleset = test_ruleset();
    let mut rng = XorShiftRng::seed_from_u64(seed);
    MapGenerator::new(&ruleset, &registry)
        .generate(&mut rng)
        .expect("generation succeeds")
}

#[test]
fn test_generated_maps_validate_across_seeds() {
    for seed in 0..50 {
        let map = generate(seed);
        assert!(
            map.validate().is_ok(),
            "seed {seed} produced an invalid map"
        );
    }
}

#[test]
fn test_same_seed_same_map() {
    assert_eq!(
        generate(42),
        generate(42),
        "One seed must mean one layout"
    );
}

#[test]
fn test_different_seeds_differ() {
    assert_ne!(generate(1), generate(2));
}

#[test]
fn test_path_runs_from_entry_row_to_boss() {
    let map = generate(9);
    let entry = map.entry().expect("entry exists");
    assert_eq!(entry.point.y, 0);
    assert_eq!(entry.kind, NodeKind::Encounter);
    let boss = map.boss().expect("boss exists");
    assert_eq!(boss.blueprint, "Necromancer_Boss");
    assert_eq!(boss.point.y, test_ruleset().depth as i32 - 1);
    assert_eq!(map.path.len(), test_ruleset().depth as usize);
}

#[test]
fn test_shop_and_mini_boss_are_guaranteed() {
    let ruleset = test_ruleset();
    for seed in 0..20 {
        let map = generate(seed);
        assert!(
            map.nodes()
                .any(|n| n.kind == NodeKind::Shop && n.point.y == ruleset.shop_depth() as i32),
            "seed {seed} has no shop on the shop row"
        );
        assert!(
            map.nodes().any(
                |n| n.kind == NodeKind::MiniBoss && n.point.y == ruleset.mini_boss_depth() as i32
            ),
            "seed {seed} has no mini-boss on its row"
        );
    }
}

#[test]
fn test_edges_only_reach_the_next_row() {
    let map = generate(17);
    for node in map.nodes() {
        for out in &node.outgoing {
            assert_eq!(
                out.y,
                node.point.y + 1,
                "edge {} -> {} skips rows",
                node.point,
                out
            );
        }
    }
}

#[test]
fn test_interior_jitter_keeps_entry_and_boss_aligned() {
    let map = generate(23);
    let entry = map.entry().expect("entry exists");
    assert_eq!(
        entry.position,
        (entry.point.x as f32 * LAYOUT_SPACING, 0.0),
        "Entry position has no jitter"
    );
}

#[test]
fn test_ruleset_check_rejects_bad_parameters() {
    let check = |mutate: fn(&mut MapRuleset)| {
        let mut ruleset = test_ruleset();
        mutate(&mut ruleset);
        ruleset.check()
    };

    assert!(check(|r| r.depth = 3).is_err(), "depth below 4");
    assert!(check(|r| r.width = 0).is_err(), "zero width");
    assert!(check(|r| r.min_row_nodes = 0).is_err(), "empty rows");
    assert!(
        check(|r| r.min_row_nodes = 5).is_err(),
        "minimum above maximum"
    );
    assert!(
        check(|r| r.max_row_nodes = 9).is_err(),
        "maximum above width"
    );
    assert!(check(|r| r.branch_factor = 0).is_err(), "zero branching");
    assert!(
        check(|r| r.kind_weights.iter_mut().for_each(|w| w.weight = 0)).is_err(),
        "all-zero weights"
    );
    assert!(check(|r| r.shop_row = Some(0)).is_err(), "shop on entry row");
    assert!(
        check(|r| r.mini_boss_row = Some(7)).is_err(),
        "mini-boss on boss row"
    );
    assert!(test_ruleset().check().is_ok(), "baseline ruleset is fine");
}

#[test]
fn test_colliding_guarantee_rows_need_two_nodes() {
    let mut ruleset = test_ruleset();
    ruleset.shop_row = Some(4);
    ruleset.mini_boss_row = Some(4);
    ruleset.min_row_nodes = 1;
    assert!(ruleset.check().is_err(), "single-node shared row rejected");

    ruleset.min_row_nodes = 2;
    assert!(ruleset.check().is_ok());
    let registry = test_registry();
    let mut rng = XorShiftRng::seed_from_u64(3);
    let map = MapGenerator::new(&ruleset, &registry)
        .generate(&mut rng)
        .expect("shared row generates");
    assert!(map.nodes().any(|n| n.kind == NodeKind::Shop && n.point.y == 4));
    assert!(map.nodes().any(|n| n.kind == NodeKind::MiniBoss && n.point.y == 4));
}

#[test]
fn test_missing_boss_blueprint_is_an_error() {
    let mut ruleset = test_ruleset();
    ruleset.boss_blueprint = "Missing_Boss".to_string();
    let registry = test_registry();
    let mut rng = XorShiftRng::seed_from_u64(1);
    let err = MapGenerator::new(&ruleset, &registry)
        .generate(&mut rng)
        .expect_err("unknown boss must fail");
    assert_eq!(
        err,
        GameError::UnknownBlueprint {
            name: "Missing_Boss".to_string()
        }
    );
}

#[test]
fn test_empty_kind_pool_is_an_error() {
    // registry without any Shop blueprint cannot honor the shop guarantee
    let mut registry = BlueprintRegistry::new();
    for (name, kind) in [
        ("Skeleton_Warband", NodeKind::Enemy),
        ("Abandoned_Camp", NodeKind::Encounter),
        ("Bone_Colossus", NodeKind::MiniBoss),
        ("Necromancer_Boss", NodeKind::Necromancer),
    ] {
        registry
            .insert(NodeBlueprint {
                name: name.to_string(),
                kind,
                title: name.to_string(),
                art_key: name.to_lowercase(),
            })
            .expect("unique names");
    }
    let mut rng = XorShiftRng::seed_from_u64(1);
    let err = MapGenerator::new(&test_ruleset(), &registry)
        .generate(&mut rng)
        .expect_err("missing shop pool must fail");
    assert_eq!(
        err,
        GameError::EmptyBlueprintPool {
            kind: NodeKind::Shop
        }
    );
}

#[test]
fn test_ruleset_round_trips_through_json() {
    let ruleset = test_ruleset();
    let json = serde_json::to_string(&ruleset).expect("ruleset serializes");
    assert!(json.contains("\"minRowNodes\""));
    assert!(json.contains("\"bossBlueprint\""));
    let parsed: MapRuleset = serde_json::from_str(&json).expect("ruleset parses back");
    assert_eq!(parsed, ruleset);
}
