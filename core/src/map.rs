//! Map graph: nodes, directed edges, and the critical path.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::error::{GameError, GameResult};
use crate::types::{GridPoint, NodeKind};

/// Horizontal/vertical spacing between rendered nodes
pub const LAYOUT_SPACING: f32 = 1.6;

/// One vertex of the map graph.
///
/// Plain data holder; `Map` enforces every invariant. `incoming`/`outgoing`
/// start empty and are populated by the map builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Grid coordinate, unique per map; node identity
    pub point: GridPoint,
    pub kind: NodeKind,
    /// Key into the blueprint registry
    pub blueprint: String,
    /// Display-space coordinate derived from `point`; rendering only
    pub position: (f32, f32),
    /// Points with an edge into this node
    pub incoming: Vec<GridPoint>,
    /// Points this node has an edge to
    pub outgoing: Vec<GridPoint>,
}

impl Node {
    pub fn new(kind: NodeKind, blueprint: impl Into<String>, point: GridPoint) -> Self {
        Self {
            point,
            kind,
            blueprint: blueprint.into(),
            position: (0.0, 0.0),
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }
}

/// The full node set plus the critical path from entry to boss.
///
/// Owns every node; the unit that gets persisted (through the DTO layer)
/// and loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    /// Name of the ruleset that generated this map
    pub config_name: String,
    /// Blueprint name of the terminal boss node
    pub boss_blueprint: String,
    nodes: BTreeMap<GridPoint, Node>,
    /// Ordered walk from entry to boss
    pub path: Vec<GridPoint>,
}

impl Map {
    /// Takes ownership of the supplied nodes and path.
    ///
    /// Does not validate; generation calls [`Map::validate`] after building,
    /// and loaders decide for themselves how strict to be.
    pub fn new(
        config_name: impl Into<String>,
        boss_blueprint: impl Into<String>,
        nodes: Vec<Node>,
        path: Vec<GridPoint>,
    ) -> Self {
        let nodes = nodes.into_iter().map(|n| (n.point, n)).collect();
        Self {
            config_name: config_name.into(),
            boss_blueprint: boss_blueprint.into(),
            nodes,
            path,
        }
    }

    pub fn node(&self, point: GridPoint) -> Option<&Node> {
        self.nodes.get(&point)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The designated entry node: first point of the path
    pub fn entry(&self) -> Option<&Node> {
        self.path.first().and_then(|&p| self.node(p))
    }

    /// The terminal boss node: last point of the path
    pub fn boss(&self) -> Option<&Node> {
        self.path.last().and_then(|&p| self.node(p))
    }

    pub fn has_edge(&self, from: GridPoint, to: GridPoint) -> bool {
        self.node(from)
            .map(|n| n.outgoing.contains(&to))
            .unwrap_or(false)
    }

    /// Check every structural invariant of the finalized graph.
    ///
    /// - all edge endpoints name nodes in this map
    /// - edges are consistent: `A -> B` in `A.outgoing` iff `A` in `B.incoming`
    /// - the path is non-empty, starts at depth 0, ends at the node whose
    ///   blueprint matches `boss_blueprint`, and follows existing edges
    /// - every node is reachable from the entry
    pub fn validate(&self) -> GameResult<()> {
        for node in self.nodes.values() {
            for &out in &node.outgoing {
                let target = self.node(out).ok_or_else(|| GameError::InvalidMap {
                    reason: format!("edge {} -> {} points outside the map", node.point, out),
                })?;
                if !target.incoming.contains(&node.point) {
                    return Err(GameError::InvalidMap {
                        reason: format!(
                            "edge {} -> {} missing from the target's incoming list",
                            node.point, out
                        ),
                    });
                }
            }
            for &inc in &node.incoming {
                let source = self.node(inc).ok_or_else(|| GameError::InvalidMap {
                    reason: format!("incoming {} -> {} points outside the map", inc, node.point),
                })?;
                if !source.outgoing.contains(&node.point) {
                    return Err(GameError::InvalidMap {
                        reason: format!(
                            "incoming {} -> {} missing from the source's outgoing list",
                            inc, node.point
                        ),
                    });
                }
            }
        }

        let &entry = self.path.first().ok_or_else(|| GameError::InvalidMap {
            reason: "path is empty".into(),
        })?;
        let entry_node = self.node(entry).ok_or_else(|| GameError::InvalidMap {
            reason: format!("path entry {} is not a node", entry),
        })?;
        if entry_node.point.y != 0 {
            return Err(GameError::InvalidMap {
                reason: format!("path entry {} is not on the entry row", entry),
            });
        }

        for pair in self.path.windows(2) {
            if !self.has_edge(pair[0], pair[1]) {
                return Err(GameError::InvalidMap {
                    reason: format!("path step {} -> {} is not an edge", pair[0], pair[1]),
                });
            }
        }

        let terminal = self.path.last().and_then(|&p| self.node(p));
        match terminal {
            Some(node) if node.blueprint == self.boss_blueprint => {}
            Some(node) => {
                return Err(GameError::InvalidMap {
                    reason: format!(
                        "path ends at blueprint `{}`, expected `{}`",
                        node.blueprint, self.boss_blueprint
                    ),
                });
            }
            None => {
                return Err(GameError::InvalidMap {
                    reason: "path terminal is not a node".into(),
                });
            }
        }

        let mut seen: BTreeSet<GridPoint> = BTreeSet::new();
        let mut queue: VecDeque<GridPoint> = VecDeque::new();
        seen.insert(entry);
        queue.push_back(entry);
        while let Some(point) = queue.pop_front() {
            if let Some(node) = self.node(point) {
                for &out in &node.outgoing {
                    if seen.insert(out) {
                        queue.push_back(out);
                    }
                }
            }
        }
        if seen.len() != self.nodes.len() {
            let stranded = self
                .nodes
                .keys()
                .find(|p| !seen.contains(p))
                .copied()
                .unwrap_or(entry);
            return Err(GameError::InvalidMap {
                reason: format!("node {} is unreachable from the entry", stranded),
            });
        }

        Ok(())
    }

    /// Cosmetic layout pass: re-derive display positions from grid points.
    ///
    /// The only mutation allowed on a finalized graph.
    pub fn relayout(&mut self, spacing: f32) {
        for node in self.nodes.values_mut() {
            node.position = (node.point.x as f32 * spacing, node.point.y as f32 * spacing);
        }
    }
}
