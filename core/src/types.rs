use core::fmt;

use serde::{Deserialize, Serialize};

/// Gold amounts
pub type Gold = u32;

/// Integer grid coordinate, unique per map; `y` is depth, row 0 is the entry row
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<GridPoint> for (i32, i32) {
    fn from(p: GridPoint) -> Self {
        (p.x, p.y)
    }
}

/// What a map node holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Undefined,
    Enemy,
    MiniBoss,
    Encounter,
    Shop,
    MajorBoss,
    Necromancer,
}

impl NodeKind {
    /// Canonical string form used by the persistence layer
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Undefined => "Undefined",
            NodeKind::Enemy => "Enemy",
            NodeKind::MiniBoss => "MiniBoss",
            NodeKind::Encounter => "Encounter",
            NodeKind::Shop => "Shop",
            NodeKind::MajorBoss => "MajorBoss",
            NodeKind::Necromancer => "Necromancer",
        }
    }

    /// Parse the canonical string form.
    ///
    /// Unrecognized input maps to `Undefined` without error; stale or corrupt
    /// saves must keep loading, and `Undefined` is a valid, renderable state.
    pub fn parse(s: &str) -> Self {
        match s {
            "Enemy" => NodeKind::Enemy,
            "MiniBoss" => NodeKind::MiniBoss,
            "Encounter" => NodeKind::Encounter,
            "Shop" => NodeKind::Shop,
            "MajorBoss" => NodeKind::MajorBoss,
            "Necromancer" => NodeKind::Necromancer,
            _ => NodeKind::Undefined,
        }
    }

    /// Kinds that arm a spin when the player lands on them
    pub fn arms_spin(&self) -> bool {
        matches!(
            self,
            NodeKind::Enemy | NodeKind::MiniBoss | NodeKind::MajorBoss | NodeKind::Necromancer
        )
    }

    /// Kinds that terminate a run when cleared
    pub fn is_boss(&self) -> bool {
        matches!(self, NodeKind::MajorBoss | NodeKind::Necromancer)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
