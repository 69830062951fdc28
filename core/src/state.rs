//! Run state, phases, and the save shape that crosses the persistence boundary.

use serde::{Deserialize, Serialize};

use crate::dto::MapDto;
use crate::effects::RelicDef;
use crate::map::Map;
use crate::mapgen::MapRuleset;
use crate::slots::SymbolPool;
use crate::types::{Gold, GridPoint, NodeKind};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunPhase {
    Traverse,
    Spinning,
    Victory,
    Defeat,
}

/// Stake scaling for the node kinds that arm a spin
pub fn stake_multiplier(kind: NodeKind) -> Gold {
    match kind {
        NodeKind::Enemy => 1,
        NodeKind::MiniBoss => 2,
        NodeKind::MajorBoss | NodeKind::Necromancer => 4,
        _ => 0,
    }
}

/// Content and tuning a run is started from
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub ruleset: MapRuleset,
    pub symbol_pool: SymbolPool,
    /// Relics shops sell, in display order
    pub relic_catalog: Vec<RelicDef>,
    pub starting_gold: Gold,
    pub base_stake: Gold,
    /// Gold paid out for entering an encounter node
    pub encounter_reward: Gold,
}

/// Everything a run tracks beyond the wallet and relic services
#[derive(Debug, Clone)]
pub struct RunState {
    pub map: Map,
    pub position: GridPoint,
    pub phase: RunPhase,
    /// Spins resolved so far; also salts the per-spin RNG stream
    pub round: u32,
    /// Seed the map was generated from; per-spin streams derive from it
    pub seed: u64,
    /// Stake owed by the pending spin while in [`RunPhase::Spinning`]
    pub armed_stake: Option<Gold>,
}

/// Flat save shape; the map crosses as its DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSave {
    pub map: MapDto,
    pub position: [i32; 2],
    pub phase: RunPhase,
    pub round: u32,
    pub seed: u64,
    pub armed_stake: Option<Gold>,
    pub gold: Gold,
    pub relics: Vec<String>,
}
