//! Named node templates and the registry consulted during generation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::types::NodeKind;

/// A named template binding a node to its kind and visual metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBlueprint {
    pub name: String,
    pub kind: NodeKind,
    /// Display title shown on the node
    pub title: String,
    /// Key the renderer uses to look up this node's art
    pub art_key: String,
}

/// Insert-once blueprint collection, looked up by name or by kind.
///
/// Generation treats a missing name as an error; a loaded map referencing a
/// name that is no longer registered still renders, the same way an unknown
/// kind string degrades to `Undefined`.
#[derive(Debug, Clone, Default)]
pub struct BlueprintRegistry {
    blueprints: BTreeMap<String, NodeBlueprint>,
}

impl BlueprintRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, blueprint: NodeBlueprint) -> GameResult<()> {
        if self.blueprints.contains_key(&blueprint.name) {
            return Err(GameError::DuplicateBlueprint {
                name: blueprint.name,
            });
        }
        self.blueprints.insert(blueprint.name.clone(), blueprint);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&NodeBlueprint> {
        self.blueprints.get(name)
    }

    /// Lookup that generation relies on; a missing name is an error here
    pub fn require(&self, name: &str) -> GameResult<&NodeBlueprint> {
        self.get(name).ok_or_else(|| GameError::UnknownBlueprint {
            name: name.to_string(),
        })
    }

    /// Every blueprint registered for a kind, in name order
    pub fn pool_for(&self, kind: NodeKind) -> Vec<&NodeBlueprint> {
        self.blueprints.values().filter(|b| b.kind == kind).collect()
    }

    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }
}
