//! Gold wallet with an inspectable mutation ledger.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::types::Gold;

/// Oldest ledger entries are dropped past this length
pub const LEDGER_CAP: usize = 64;

/// One recorded wallet mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldEvent {
    pub delta: i64,
    pub balance_after: Gold,
    pub reason: String,
}

/// Explicitly constructed gold service.
///
/// Callers hold a reference handed down from the composition root; there is
/// no global instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldWallet {
    balance: Gold,
    ledger: VecDeque<GoldEvent>,
}

impl GoldWallet {
    pub fn new(starting: Gold) -> Self {
        Self {
            balance: starting,
            ledger: VecDeque::new(),
        }
    }

    pub fn balance(&self) -> Gold {
        self.balance
    }

    pub fn can_afford(&self, cost: Gold) -> bool {
        self.balance >= cost
    }

    pub fn earn(&mut self, amount: Gold, reason: &str) {
        self.balance = self.balance.saturating_add(amount);
        self.record(amount as i64, reason);
    }

    pub fn spend(&mut self, amount: Gold, reason: &str) -> GameResult<()> {
        if self.balance < amount {
            return Err(GameError::NotEnoughGold {
                have: self.balance,
                need: amount,
            });
        }
        self.balance -= amount;
        self.record(-(amount as i64), reason);
        Ok(())
    }

    /// Recorded mutations, oldest first
    pub fn ledger(&self) -> impl Iterator<Item = &GoldEvent> {
        self.ledger.iter()
    }

    fn record(&mut self, delta: i64, reason: &str) {
        self.ledger.push_back(GoldEvent {
            delta,
            balance_after: self.balance,
            reason: reason.to_string(),
        });
        while self.ledger.len() > LEDGER_CAP {
            self.ledger.pop_front();
        }
    }
}
