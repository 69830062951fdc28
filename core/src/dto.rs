//! Persistence mirrors for the map graph.
//!
//! The DTO shapes are flat and engine-serialization friendly: kinds as
//! strings, coordinates as plain integer pairs. Rebuilding a map from a DTO
//! is total; nothing in a save file can make it fail.

use serde::{Deserialize, Serialize};

use crate::map::{Map, Node};
use crate::types::{GridPoint, NodeKind};

/// Flat mirror of a [`Node`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDto {
    pub point: [i32; 2],
    pub node_type: String,
    pub blueprint_name: String,
    pub position: [f32; 2],
    pub incoming: Vec<[i32; 2]>,
    pub outgoing: Vec<[i32; 2]>,
}

impl From<&Node> for NodeDto {
    fn from(node: &Node) -> Self {
        Self {
            point: [node.point.x, node.point.y],
            node_type: node.kind.as_str().to_string(),
            blueprint_name: node.blueprint.clone(),
            position: [node.position.0, node.position.1],
            incoming: node.incoming.iter().map(|p| [p.x, p.y]).collect(),
            outgoing: node.outgoing.iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

impl NodeDto {
    /// Rebuild the node. An unrecognized `nodeType` string becomes
    /// [`NodeKind::Undefined`] so stale saves keep loading.
    pub fn into_node(self) -> Node {
        let mut node = Node::new(
            NodeKind::parse(&self.node_type),
            self.blueprint_name,
            GridPoint::new(self.point[0], self.point[1]),
        );
        node.position = (self.position[0], self.position[1]);
        node.incoming = self
            .incoming
            .into_iter()
            .map(|p| GridPoint::new(p[0], p[1]))
            .collect();
        node.outgoing = self
            .outgoing
            .into_iter()
            .map(|p| GridPoint::new(p[0], p[1]))
            .collect();
        node
    }
}

/// Flat mirror of a [`Map`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDto {
    pub config_name: String,
    pub boss_node_name: String,
    pub nodes: Vec<NodeDto>,
    pub path: Vec<[i32; 2]>,
}

impl MapDto {
    /// Rebuild the map. Total: every input produces a `Map`, including one
    /// with unknown kinds or dangling edges. Callers who care run
    /// [`Map::validate`] afterwards.
    pub fn into_map(self) -> Map {
        let nodes = self.nodes.into_iter().map(NodeDto::into_node).collect();
        let path = self
            .path
            .into_iter()
            .map(|p| GridPoint::new(p[0], p[1]))
            .collect();
        Map::new(self.config_name, self.boss_node_name, nodes, path)
    }
}

impl Map {
    /// Copy every field into the persistence shape
    pub fn to_dto(&self) -> MapDto {
        MapDto {
            config_name: self.config_name.clone(),
            boss_node_name: self.boss_blueprint.clone(),
            nodes: self.nodes().map(NodeDto::from).collect(),
            path: self.path.iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}
