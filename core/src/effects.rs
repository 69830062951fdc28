//! Relics and the payout adjustments they apply to scored hits.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::patterns::{MatchPattern, ScoredHit};
use crate::slots::Symbol;
use crate::types::Gold;

/// What a relic does to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RelicEffect {
    /// Scales every hit of one pattern
    #[serde(rename_all = "camelCase")]
    PatternMultiplier { pattern: MatchPattern, factor: Gold },
    /// Scales every hit of one symbol
    #[serde(rename_all = "camelCase")]
    SymbolMultiplier { symbol: Symbol, factor: Gold },
    /// Flat bonus gold per hit, applied after every multiplier
    #[serde(rename_all = "camelCase")]
    FlatPerMatch { amount: Gold },
    /// Reduces the per-spin stake, floored at zero
    #[serde(rename_all = "camelCase")]
    StakeDiscount { amount: Gold },
}

/// A purchasable relic definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelicDef {
    pub name: String,
    pub title: String,
    pub price: Gold,
    pub effect: RelicEffect,
}

/// One relic's contribution to a spin, for UI playback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectTrigger {
    pub relic: String,
    pub bonus: Gold,
}

/// Hits after every relic effect, plus who contributed what
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedEffects {
    pub hits: Vec<ScoredHit>,
    pub triggers: Vec<EffectTrigger>,
    pub total: Gold,
}

/// Owns the relics acquired this run.
///
/// Explicitly constructed and passed by reference to the spin resolver;
/// there is no global instance.
#[derive(Debug, Clone, Default)]
pub struct EffectEngine {
    relics: Vec<RelicDef>,
}

impl EffectEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, relic: RelicDef) -> GameResult<()> {
        if self.owns(&relic.name) {
            return Err(GameError::RelicAlreadyOwned { name: relic.name });
        }
        self.relics.push(relic);
        Ok(())
    }

    pub fn owns(&self, name: &str) -> bool {
        self.relics.iter().any(|r| r.name == name)
    }

    pub fn relics(&self) -> &[RelicDef] {
        &self.relics
    }

    pub fn relic_names(&self) -> Vec<String> {
        self.relics.iter().map(|r| r.name.clone()).collect()
    }

    /// Combined stake reduction from every owned discount relic
    pub fn stake_discount(&self) -> Gold {
        self.relics
            .iter()
            .map(|r| match r.effect {
                RelicEffect::StakeDiscount { amount } => amount,
                _ => 0,
            })
            .sum()
    }

    /// Apply every owned relic to the scored hits.
    ///
    /// Multipliers stack multiplicatively in acquisition order; flat
    /// bonuses land after all multipliers. A relic that changed nothing
    /// this spin emits no trigger.
    pub fn apply(&self, base: &[ScoredHit]) -> AppliedEffects {
        let mut hits = base.to_vec();
        let mut triggers = Vec::new();

        for relic in &self.relics {
            let before: Gold = hits.iter().map(|h| h.gold).sum();
            match relic.effect {
                RelicEffect::PatternMultiplier { pattern, factor } => {
                    for hit in hits.iter_mut().filter(|h| h.hit.pattern == pattern) {
                        hit.gold *= factor;
                    }
                }
                RelicEffect::SymbolMultiplier { symbol, factor } => {
                    for hit in hits.iter_mut().filter(|h| h.hit.symbol == symbol) {
                        hit.gold *= factor;
                    }
                }
                _ => continue,
            }
            let after: Gold = hits.iter().map(|h| h.gold).sum();
            if after > before {
                triggers.push(EffectTrigger {
                    relic: relic.name.clone(),
                    bonus: after - before,
                });
            }
        }

        for relic in &self.relics {
            if let RelicEffect::FlatPerMatch { amount } = relic.effect {
                if hits.is_empty() || amount == 0 {
                    continue;
                }
                for hit in hits.iter_mut() {
                    hit.gold += amount;
                }
                triggers.push(EffectTrigger {
                    relic: relic.name.clone(),
                    bonus: amount * hits.len() as Gold,
                });
            }
        }

        let total = hits.iter().map(|h| h.gold).sum();
        AppliedEffects {
            hits,
            triggers,
            total,
        }
    }
}
