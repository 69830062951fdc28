//! The 3x3 slot grid and the weighted symbol pool that fills it.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::rng::GameRng;
use crate::types::Gold;

/// Cells per side of the grid
pub const GRID_SIDE: usize = 3;
/// Total cells, row-major
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// What a grid cell can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Coin,
    Sword,
    Shield,
    Potion,
    Skull,
    Crown,
}

impl Symbol {
    pub const ALL: [Symbol; 6] = [
        Symbol::Coin,
        Symbol::Sword,
        Symbol::Shield,
        Symbol::Potion,
        Symbol::Skull,
        Symbol::Crown,
    ];

    /// Gold paid per matched cell set before pattern multipliers
    pub fn base_value(&self) -> Gold {
        match self {
            Symbol::Coin => 2,
            Symbol::Sword => 3,
            Symbol::Shield => 4,
            Symbol::Potion => 5,
            Symbol::Skull => 8,
            Symbol::Crown => 15,
        }
    }
}

/// One entry of a symbol pool's weight table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolWeight {
    pub symbol: Symbol,
    pub weight: u32,
}

/// Weighted symbol distribution grid fills draw from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolPool {
    entries: Vec<SymbolWeight>,
}

impl SymbolPool {
    /// Fails when no entry can ever be drawn
    pub fn new(entries: Vec<SymbolWeight>) -> GameResult<Self> {
        let total: u32 = entries.iter().map(|e| e.weight).sum();
        if total == 0 {
            return Err(GameError::EmptySymbolPool);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SymbolWeight] {
        &self.entries
    }

    pub fn draw(&self, rng: &mut impl GameRng) -> Symbol {
        let weights: Vec<u32> = self.entries.iter().map(|e| e.weight).collect();
        match rng.weighted_index(&weights) {
            Some(i) => self.entries[i].symbol,
            // construction guarantees a positive total weight
            None => self.entries[0].symbol,
        }
    }
}

/// 3x3 grid of symbols, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGrid {
    cells: [Symbol; GRID_CELLS],
}

impl SlotGrid {
    pub fn from_cells(cells: [Symbol; GRID_CELLS]) -> Self {
        Self { cells }
    }

    /// Fill every cell from the pool; deterministic for a fixed RNG seed
    pub fn spin(pool: &SymbolPool, rng: &mut impl GameRng) -> Self {
        let mut cells = [Symbol::Coin; GRID_CELLS];
        for cell in cells.iter_mut() {
            *cell = pool.draw(rng);
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[Symbol; GRID_CELLS] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Symbol {
        self.cells[index]
    }

    pub fn at(&self, row: usize, col: usize) -> Symbol {
        self.cells[row * GRID_SIDE + col]
    }
}
