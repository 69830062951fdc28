use super::*;
use Symbol::*;

#[test]
fn test_empty_pool_is_rejected() {
    assert_eq!(
        SymbolPool::new(Vec::new()).expect_err("empty pool"),
        GameError::EmptySymbolPool
    );
    let all_zero = vec![SymbolWeight {
        symbol: Coin,
        weight: 0,
    }];
    assert_eq!(
        SymbolPool::new(all_zero).expect_err("undrawable pool"),
        GameError::EmptySymbolPool
    );
}

#[test]
fn test_pool_draw_respects_weights() {
    let pool = SymbolPool::new(vec![
        SymbolWeight {
            symbol: Coin,
            weight: 0,
        },
        SymbolWeight {
            symbol: Crown,
            weight: 1,
        },
    ])
    .expect("drawable pool");
    let mut rng = XorShiftRng::seed_from_u64(8);
    for _ in 0..50 {
        assert_eq!(pool.draw(&mut rng), Crown, "Zero-weight entries never win");
    }
}

#[test]
fn test_spin_is_deterministic_per_seed() {
    let pool = SymbolPool::new(
        Symbol::ALL
            .iter()
            .map(|&symbol| SymbolWeight { symbol, weight: 1 })
            .collect(),
    )
    .expect("drawable pool");
    let a = SlotGrid::spin(&pool, &mut XorShiftRng::seed_from_u64(5));
    let b = SlotGrid::spin(&pool, &mut XorShiftRng::seed_from_u64(5));
    assert_eq!(a, b, "Same seed must fill the same grid");
}

#[test]
fn test_no_matches_on_a_dead_grid() {
    assert!(detect_matches(&dead_grid()).is_empty());
}

#[test]
fn test_horizontal_rows_detected() {
    let grid = grid_of([Coin, Coin, Coin, Sword, Skull, Crown, Skull, Sword, Potion]);
    let hits = detect_matches(&grid);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].pattern, MatchPattern::Horizontal);
    assert_eq!(hits[0].symbol, Coin);
    assert_eq!(hits[0].cells, vec![0, 1, 2]);
}

#[test]
fn test_diagonal_detected() {
    let grid = grid_of([Skull, Coin, Sword, Coin, Skull, Crown, Sword, Crown, Skull]);
    let hits = detect_matches(&grid);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].pattern, MatchPattern::Diagonal);
    assert_eq!(hits[0].cells, vec![0, 4, 8]);
}

#[test]
fn test_zigzag_v_detected() {
    // V across the columns: top, middle, top
    let grid = grid_of([Crown, Sword, Crown, Potion, Crown, Skull, Sword, Potion, Skull]);
    let hits = detect_matches(&grid);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].pattern, MatchPattern::Zigzag);
    assert_eq!(hits[0].cells, vec![0, 4, 2]);
}

#[test]
fn test_cross_implies_both_diagonals() {
    let grid = grid_of([Skull, Coin, Skull, Sword, Skull, Potion, Skull, Crown, Skull]);
    let hits = detect_matches(&grid);
    let patterns: Vec<MatchPattern> = hits.iter().map(|h| h.pattern).collect();
    // the corner-to-corner zigzags share the cross's cells and ride along
    assert_eq!(
        patterns,
        vec![
            MatchPattern::Diagonal,
            MatchPattern::Diagonal,
            MatchPattern::Zigzag,
            MatchPattern::Zigzag,
            MatchPattern::Cross
        ],
        "A cross always pays its two diagonals too"
    );
}

#[test]
fn test_full_grid_is_a_jackpot_by_accumulation() {
    let grid = grid_of([Coin; GRID_CELLS]);
    let hits = detect_matches(&grid);
    // 3 rows + 2 diagonals + 4 zigzags + cross + full grid
    assert_eq!(hits.len(), 11);
    assert_eq!(
        hits.last().map(|h| h.pattern),
        Some(MatchPattern::FullGrid),
        "Scan order puts the jackpot last"
    );
}

#[test]
fn test_scoring_multiplies_base_value_by_pattern() {
    let grid = grid_of([Crown, Sword, Shield, Potion, Crown, Skull, Sword, Coin, Crown]);
    let scored = score_hits(&detect_matches(&grid));
    assert_eq!(scored.len(), 1);
    assert_eq!(scored[0].hit.pattern, MatchPattern::Diagonal);
    assert_eq!(
        scored[0].gold,
        Crown.base_value() * MatchPattern::Diagonal.multiplier()
    );
}

#[test]
fn test_detection_order_is_stable() {
    let grid = grid_of([Coin; GRID_CELLS]);
    let first = detect_matches(&grid);
    let second = detect_matches(&grid);
    assert_eq!(first, second, "Detection must be deterministic");
}
