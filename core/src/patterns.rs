//! Geometric match templates over the slot grid and the reward scorer.

use serde::{Deserialize, Serialize};

use crate::slots::{SlotGrid, Symbol};
use crate::types::Gold;

/// Named arrangement that triggers a reward when all its cells match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchPattern {
    Horizontal,
    Diagonal,
    Zigzag,
    Cross,
    FullGrid,
}

impl MatchPattern {
    /// Payout multiplier applied to the matched symbol's base value
    pub fn multiplier(&self) -> Gold {
        match self {
            MatchPattern::Horizontal => 1,
            MatchPattern::Diagonal => 2,
            MatchPattern::Zigzag => 3,
            MatchPattern::Cross => 5,
            MatchPattern::FullGrid => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPattern::Horizontal => "Horizontal",
            MatchPattern::Diagonal => "Diagonal",
            MatchPattern::Zigzag => "Zigzag",
            MatchPattern::Cross => "Cross",
            MatchPattern::FullGrid => "FullGrid",
        }
    }
}

/// One concrete cell arrangement, row-major indices
#[derive(Debug, Clone, Copy)]
pub struct PatternTemplate {
    pub pattern: MatchPattern,
    pub cells: &'static [usize],
}

/// Every template, in the stable order detection scans them.
///
/// The zigzags are the V and inverted-V triples read across the three
/// columns; the cross is both diagonals plus the center.
pub const TEMPLATES: &[PatternTemplate] = &[
    PatternTemplate {
        pattern: MatchPattern::Horizontal,
        cells: &[0, 1, 2],
    },
    PatternTemplate {
        pattern: MatchPattern::Horizontal,
        cells: &[3, 4, 5],
    },
    PatternTemplate {
        pattern: MatchPattern::Horizontal,
        cells: &[6, 7, 8],
    },
    PatternTemplate {
        pattern: MatchPattern::Diagonal,
        cells: &[0, 4, 8],
    },
    PatternTemplate {
        pattern: MatchPattern::Diagonal,
        cells: &[2, 4, 6],
    },
    PatternTemplate {
        pattern: MatchPattern::Zigzag,
        cells: &[0, 4, 2],
    },
    PatternTemplate {
        pattern: MatchPattern::Zigzag,
        cells: &[3, 1, 5],
    },
    PatternTemplate {
        pattern: MatchPattern::Zigzag,
        cells: &[3, 7, 5],
    },
    PatternTemplate {
        pattern: MatchPattern::Zigzag,
        cells: &[6, 4, 8],
    },
    PatternTemplate {
        pattern: MatchPattern::Cross,
        cells: &[0, 2, 4, 6, 8],
    },
    PatternTemplate {
        pattern: MatchPattern::FullGrid,
        cells: &[0, 1, 2, 3, 4, 5, 6, 7, 8],
    },
];

/// One matched template on a concrete grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchHit {
    pub pattern: MatchPattern,
    pub symbol: Symbol,
    pub cells: Vec<usize>,
}

/// Find every template whose cells hold one symbol.
///
/// Overlapping templates all score: a full grid pays its rows, diagonals,
/// zigzags and cross on top of the jackpot.
pub fn detect_matches(grid: &SlotGrid) -> Vec<MatchHit> {
    let mut hits = Vec::new();
    for template in TEMPLATES {
        let symbol = grid.cell(template.cells[0]);
        if template.cells[1..].iter().all(|&c| grid.cell(c) == symbol) {
            hits.push(MatchHit {
                pattern: template.pattern,
                symbol,
                cells: template.cells.to_vec(),
            });
        }
    }
    hits
}

/// A hit priced in gold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredHit {
    pub hit: MatchHit,
    pub gold: Gold,
}

/// Price each hit: symbol base value times the pattern multiplier
pub fn score_hits(hits: &[MatchHit]) -> Vec<ScoredHit> {
    hits.iter()
        .map(|hit| ScoredHit {
            hit: hit.clone(),
            gold: hit.symbol.base_value() * hit.pattern.multiplier(),
        })
        .collect()
}
