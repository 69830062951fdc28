//! Error types for map generation and run operations.

use thiserror::Error;

use crate::types::{Gold, GridPoint, NodeKind};

/// Errors that can occur while generating a map or driving a run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Not enough gold to cover a cost
    #[error("not enough gold: have {have}, need {need}")]
    NotEnoughGold { have: Gold, need: Gold },
    /// Tried to move along an edge that does not exist
    #[error("no edge from {from} to {to}")]
    InvalidMove { from: GridPoint, to: GridPoint },
    /// Action not allowed in the current phase
    #[error("action not allowed in the current phase")]
    WrongPhase,
    /// Blueprint name missing from the registry
    #[error("unknown blueprint `{name}`")]
    UnknownBlueprint { name: String },
    /// Blueprint registered twice under the same name
    #[error("duplicate blueprint `{name}`")]
    DuplicateBlueprint { name: String },
    /// No blueprint registered for a kind the generator needs
    #[error("no blueprint registered for kind `{kind}`")]
    EmptyBlueprintPool { kind: NodeKind },
    /// Relic name missing from the catalog
    #[error("unknown relic `{name}`")]
    UnknownRelic { name: String },
    /// Relic already owned
    #[error("relic `{name}` already owned")]
    RelicAlreadyOwned { name: String },
    /// Current node is not a shop
    #[error("no shop at the current node")]
    NotAtShop,
    /// Ruleset parameters that cannot produce a map
    #[error("invalid ruleset: {reason}")]
    InvalidRuleset { reason: String },
    /// A finished map failed validation
    #[error("invalid map: {reason}")]
    InvalidMap { reason: String },
    /// Symbol pool with no drawable entries
    #[error("symbol pool has no drawable entries")]
    EmptySymbolPool,
}

/// Result type alias for map and run operations
pub type GameResult<T> = Result<T, GameError>;
