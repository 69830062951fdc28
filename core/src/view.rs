//! View types for UI serialization
//!
//! Flat structs a frontend renders from; the map view also gates which
//! nodes the traversal UI should let the player select.

use serde::{Deserialize, Serialize};

use crate::economy::GoldWallet;
use crate::effects::{EffectEngine, RelicDef};
use crate::map::Map;
use crate::state::{RunPhase, RunState};
use crate::types::{Gold, GridPoint};

/// View of one map node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    pub point: [i32; 2],
    pub kind: String,
    pub blueprint: String,
    pub position: [f32; 2],
    pub outgoing: Vec<[i32; 2]>,
    /// Whether the traversal UI should let the player pick this node now
    pub selectable: bool,
}

/// View of the whole board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub config_name: String,
    pub boss_blueprint: String,
    pub nodes: Vec<NodeView>,
    pub path: Vec<[i32; 2]>,
}

impl MapView {
    pub fn from_map(map: &Map, selectable: &[GridPoint]) -> Self {
        Self {
            config_name: map.config_name.clone(),
            boss_blueprint: map.boss_blueprint.clone(),
            nodes: map
                .nodes()
                .map(|n| NodeView {
                    point: [n.point.x, n.point.y],
                    kind: n.kind.as_str().to_string(),
                    blueprint: n.blueprint.clone(),
                    position: [n.position.0, n.position.1],
                    outgoing: n.outgoing.iter().map(|p| [p.x, p.y]).collect(),
                    selectable: selectable.contains(&n.point),
                })
                .collect(),
            path: map.path.iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

/// One shop offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelicView {
    pub name: String,
    pub title: String,
    pub price: Gold,
    pub can_afford: bool,
}

/// The complete run view sent to the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunView {
    pub map: MapView,
    pub position: [i32; 2],
    pub phase: String,
    pub round: u32,
    pub gold: Gold,
    /// Stake owed by the pending spin, when one is armed
    pub stake: Option<Gold>,
    pub relics: Vec<String>,
    pub moves: Vec<[i32; 2]>,
    pub shop: Vec<RelicView>,
}

impl RunView {
    /// Construct a RunView from state plus the engine's derived data
    pub fn from_run(
        state: &RunState,
        wallet: &GoldWallet,
        effects: &EffectEngine,
        shop: &[&RelicDef],
        moves: &[GridPoint],
    ) -> Self {
        Self {
            map: MapView::from_map(&state.map, moves),
            position: [state.position.x, state.position.y],
            phase: match state.phase {
                RunPhase::Traverse => String::from("traverse"),
                RunPhase::Spinning => String::from("spinning"),
                RunPhase::Victory => String::from("victory"),
                RunPhase::Defeat => String::from("defeat"),
            },
            round: state.round,
            gold: wallet.balance(),
            stake: state.armed_stake,
            relics: effects.relic_names(),
            moves: moves.iter().map(|p| [p.x, p.y]).collect(),
            shop: shop
                .iter()
                .map(|r| RelicView {
                    name: r.name.clone(),
                    title: r.title.clone(),
                    price: r.price,
                    can_afford: wallet.can_afford(r.price),
                })
                .collect(),
        }
    }
}
