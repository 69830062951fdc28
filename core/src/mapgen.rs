//! Layered map generation.
//!
//! Maps are layered DAGs: each row holds a handful of nodes and edges only
//! run from a row to the one below it. The entry and the boss are single
//! nodes on the first and last rows, a shop and a mini-boss are guaranteed
//! at configurable depths, and everything else draws its kind from a weight
//! table. All randomness comes from the caller's RNG, so one seed is one map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::blueprint::BlueprintRegistry;
use crate::error::{GameError, GameResult};
use crate::map::{Map, Node, LAYOUT_SPACING};
use crate::rng::GameRng;
use crate::types::{GridPoint, NodeKind};

/// One entry of a ruleset's filler-kind weight table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindWeight {
    pub kind: NodeKind,
    pub weight: u32,
}

/// Parameters a map is generated from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRuleset {
    pub name: String,
    /// Number of columns nodes may occupy
    pub width: u32,
    /// Number of rows including the entry and boss rows
    pub depth: u32,
    pub min_row_nodes: u32,
    pub max_row_nodes: u32,
    /// Maximum outgoing edges drawn per node
    pub branch_factor: u32,
    /// Weight table for rows without a guaranteed placement
    pub kind_weights: Vec<KindWeight>,
    /// Explicit shop row, or `depth / 2` when absent
    pub shop_row: Option<u32>,
    /// Explicit mini-boss row, or `depth - 2` when absent
    pub mini_boss_row: Option<u32>,
    pub boss_blueprint: String,
}

impl MapRuleset {
    /// Depth of the guaranteed shop row
    pub fn shop_depth(&self) -> u32 {
        self.shop_row.unwrap_or(self.depth / 2)
    }

    /// Depth of the guaranteed mini-boss row
    pub fn mini_boss_depth(&self) -> u32 {
        self.mini_boss_row.unwrap_or(self.depth.saturating_sub(2))
    }

    /// Reject parameter sets that cannot produce a valid map
    pub fn check(&self) -> GameResult<()> {
        if self.depth < 4 {
            return Err(invalid("depth must be at least 4"));
        }
        if self.width == 0 {
            return Err(invalid("width must be positive"));
        }
        if self.min_row_nodes == 0 {
            return Err(invalid("rows need at least one node"));
        }
        if self.min_row_nodes > self.max_row_nodes {
            return Err(invalid("row minimum exceeds row maximum"));
        }
        if self.max_row_nodes > self.width {
            return Err(invalid("row maximum exceeds the map width"));
        }
        if self.branch_factor == 0 {
            return Err(invalid("branch factor must be at least 1"));
        }
        if self.kind_weights.iter().map(|w| w.weight).sum::<u32>() == 0 {
            return Err(invalid("kind weights sum to zero"));
        }
        for (label, row) in [
            ("shop", self.shop_depth()),
            ("mini-boss", self.mini_boss_depth()),
        ] {
            if row == 0 || row >= self.depth - 1 {
                return Err(GameError::InvalidRuleset {
                    reason: format!("{label} row {row} is not an interior row"),
                });
            }
        }
        if self.shop_depth() == self.mini_boss_depth() && self.min_row_nodes < 2 {
            return Err(invalid(
                "shop and mini-boss share a row that may hold a single node",
            ));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> GameError {
    GameError::InvalidRuleset {
        reason: reason.to_string(),
    }
}

/// Builds maps from a ruleset and a blueprint registry
pub struct MapGenerator<'a> {
    ruleset: &'a MapRuleset,
    registry: &'a BlueprintRegistry,
}

impl<'a> MapGenerator<'a> {
    pub fn new(ruleset: &'a MapRuleset, registry: &'a BlueprintRegistry) -> Self {
        Self { ruleset, registry }
    }

    /// Build, type, path-pick, and lay out a map; returns it validated.
    pub fn generate(&self, rng: &mut impl GameRng) -> GameResult<Map> {
        self.ruleset.check()?;
        let boss = self.registry.require(&self.ruleset.boss_blueprint)?.clone();

        let depth = self.ruleset.depth as usize;
        let width = self.ruleset.width as i32;
        let mid = width / 2;
        let last = (depth - 1) as i32;
        let entry_point = GridPoint::new(mid, 0);
        let boss_point = GridPoint::new(mid, last);

        // Row occupancy: single entry, random interior counts, single boss.
        let columns: Vec<i32> = (0..width).collect();
        let mut rows: Vec<Vec<i32>> = Vec::with_capacity(depth);
        rows.push(vec![mid]);
        for _ in 1..depth - 1 {
            let span = (self.ruleset.max_row_nodes - self.ruleset.min_row_nodes) as usize;
            let count = self.ruleset.min_row_nodes as usize + rng.gen_range(span + 1);
            let mut cols = rng.pick_many(&columns, count);
            cols.sort_unstable();
            rows.push(cols);
        }
        rows.push(vec![mid]);

        let mut nodes: BTreeMap<GridPoint, Node> = BTreeMap::new();
        for (y, cols) in rows.iter().enumerate() {
            for &x in cols {
                let point = GridPoint::new(x, y as i32);
                nodes.insert(point, Node::new(NodeKind::Undefined, "", point));
            }
        }

        // Edges run only to the next row, nearest successors first.
        for y in 0..depth - 1 {
            for &x in &rows[y] {
                let from = GridPoint::new(x, y as i32);
                let mut targets = rows[y + 1].clone();
                targets.sort_by_key(|&t| ((t - x).abs(), t));
                let links = 1 + rng.gen_range(self.ruleset.branch_factor as usize);
                for &t in targets.iter().take(links.min(targets.len())) {
                    link(&mut nodes, from, GridPoint::new(t, y as i32 + 1));
                }
            }
            // Nobody in the next row may start without an incoming edge.
            for &t in &rows[y + 1] {
                let to = GridPoint::new(t, y as i32 + 1);
                let orphaned = nodes
                    .get(&to)
                    .map(|n| n.incoming.is_empty())
                    .unwrap_or(false);
                if orphaned {
                    if let Some(&x) = rows[y].iter().min_by_key(|&&f| ((f - t).abs(), f)) {
                        link(&mut nodes, GridPoint::new(x, y as i32), to);
                    }
                }
            }
        }

        // Guaranteed placements first, weighted filler afterwards.
        let shop_y = self.ruleset.shop_depth() as usize;
        let mini_y = self.ruleset.mini_boss_depth() as usize;
        let mut fixed: BTreeMap<GridPoint, NodeKind> = BTreeMap::new();
        fixed.insert(entry_point, NodeKind::Encounter);
        fixed.insert(boss_point, boss.kind);
        if let Some(&x) = rng.pick(&rows[mini_y]) {
            fixed.insert(GridPoint::new(x, mini_y as i32), NodeKind::MiniBoss);
        }
        let shop_choices: Vec<i32> = rows[shop_y]
            .iter()
            .copied()
            .filter(|&x| !fixed.contains_key(&GridPoint::new(x, shop_y as i32)))
            .collect();
        if let Some(&x) = rng.pick(&shop_choices) {
            fixed.insert(GridPoint::new(x, shop_y as i32), NodeKind::Shop);
        }

        let kinds: Vec<NodeKind> = self.ruleset.kind_weights.iter().map(|w| w.kind).collect();
        let weights: Vec<u32> = self.ruleset.kind_weights.iter().map(|w| w.weight).collect();
        for node in nodes.values_mut() {
            node.kind = match fixed.get(&node.point) {
                Some(&kind) => kind,
                // check() guarantees a positive total weight
                None => rng
                    .weighted_index(&weights)
                    .map(|i| kinds[i])
                    .unwrap_or(NodeKind::Enemy),
            };
            node.blueprint = if node.point == boss_point {
                boss.name.clone()
            } else {
                let pool = self.registry.pool_for(node.kind);
                match rng.pick(&pool) {
                    Some(chosen) => chosen.name.clone(),
                    None => return Err(GameError::EmptyBlueprintPool { kind: node.kind }),
                }
            };
        }

        // Critical path: uniform walk along outgoing edges down to the boss.
        let mut path = vec![entry_point];
        let mut current = entry_point;
        while current != boss_point {
            let next = match nodes.get(&current).and_then(|n| rng.pick(&n.outgoing)) {
                Some(&p) => p,
                // every non-terminal node keeps an outgoing edge; if this
                // trips, validation below reports the broken graph
                None => break,
            };
            path.push(next);
            current = next;
        }

        // Cosmetic layout: grid spacing plus a little interior jitter.
        for node in nodes.values_mut() {
            let mut position = (
                node.point.x as f32 * LAYOUT_SPACING,
                node.point.y as f32 * LAYOUT_SPACING,
            );
            if node.point.y != 0 && node.point.y != last {
                position.0 += (rng.gen_range(9) as f32 - 4.0) * 0.08;
                position.1 += (rng.gen_range(9) as f32 - 4.0) * 0.08;
            }
            node.position = position;
        }

        let map = Map::new(
            self.ruleset.name.clone(),
            self.ruleset.boss_blueprint.clone(),
            nodes.into_values().collect(),
            path,
        );
        map.validate()?;
        tracing::debug!(
            config = %map.config_name,
            nodes = map.node_count(),
            path_len = map.path.len(),
            "map generated"
        );
        Ok(map)
    }
}

/// Record `from -> to` on both endpoints; duplicates are ignored.
fn link(nodes: &mut BTreeMap<GridPoint, Node>, from: GridPoint, to: GridPoint) {
    let Some(source) = nodes.get_mut(&from) else {
        return;
    };
    if source.outgoing.contains(&to) {
        return;
    }
    source.outgoing.push(to);
    if let Some(target) = nodes.get_mut(&to) {
        target.incoming.push(from);
    }
}
