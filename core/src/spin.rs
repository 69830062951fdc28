//! Spin resolution: one armed node turned into a typed event list.

use serde::{Deserialize, Serialize};

use crate::effects::EffectEngine;
use crate::patterns::{detect_matches, score_hits, MatchPattern};
use crate::rng::GameRng;
use crate::slots::{SlotGrid, Symbol, SymbolPool};
use crate::types::Gold;

/// Events generated by a spin, in playback order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum SpinEvent {
    #[serde(rename_all = "camelCase")]
    GridRevealed { grid: SlotGrid },
    #[serde(rename_all = "camelCase")]
    MatchFound {
        pattern: MatchPattern,
        symbol: Symbol,
        cells: Vec<usize>,
        gold: Gold,
    },
    #[serde(rename_all = "camelCase")]
    EffectTriggered { relic: String, bonus: Gold },
    #[serde(rename_all = "camelCase")]
    SpinSettled { stake: Gold, payout: Gold, net: i64 },
}

/// Everything one spin produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinOutcome {
    pub events: Vec<SpinEvent>,
    pub grid: SlotGrid,
    pub payout: Gold,
    /// Payout minus stake; negative on a losing spin
    pub net: i64,
}

/// Fill a grid, detect and score hits, apply relic effects.
///
/// Pure function of its inputs; wallet handling belongs to the engine.
pub fn resolve_spin(
    pool: &SymbolPool,
    effects: &EffectEngine,
    stake: Gold,
    rng: &mut impl GameRng,
) -> SpinOutcome {
    let grid = SlotGrid::spin(pool, rng);
    let mut events = vec![SpinEvent::GridRevealed { grid }];

    let hits = detect_matches(&grid);
    let applied = effects.apply(&score_hits(&hits));
    for scored in &applied.hits {
        events.push(SpinEvent::MatchFound {
            pattern: scored.hit.pattern,
            symbol: scored.hit.symbol,
            cells: scored.hit.cells.clone(),
            gold: scored.gold,
        });
    }
    for trigger in &applied.triggers {
        events.push(SpinEvent::EffectTriggered {
            relic: trigger.relic.clone(),
            bonus: trigger.bonus,
        });
    }

    let payout = applied.total;
    let net = payout as i64 - stake as i64;
    events.push(SpinEvent::SpinSettled {
        stake,
        payout,
        net,
    });
    tracing::debug!(hits = applied.hits.len(), payout, net, "spin resolved");

    SpinOutcome {
        events,
        grid,
        payout,
        net,
    }
}
