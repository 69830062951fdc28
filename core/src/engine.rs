//! The run engine: composition root that owns the state and every service.
//!
//! The wallet, the relic effects, and the RNG streams are constructor-built
//! members handed to the code that needs them; nothing reaches for a global.

use crate::blueprint::BlueprintRegistry;
use crate::economy::GoldWallet;
use crate::effects::{EffectEngine, RelicDef};
use crate::error::{GameError, GameResult};
use crate::map::Map;
use crate::mapgen::MapGenerator;
use crate::rng::XorShiftRng;
use crate::spin::{resolve_spin, SpinOutcome};
use crate::state::{stake_multiplier, RunConfig, RunPhase, RunSave, RunState};
use crate::types::{GridPoint, NodeKind};
use crate::view::RunView;

/// Drives one run from the entry node to victory or defeat
pub struct RunEngine {
    config: RunConfig,
    state: RunState,
    wallet: GoldWallet,
    effects: EffectEngine,
}

impl RunEngine {
    /// Generate a fresh map and start at its entry node
    pub fn new(config: RunConfig, registry: &BlueprintRegistry, seed: u64) -> GameResult<Self> {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let map = MapGenerator::new(&config.ruleset, registry).generate(&mut rng)?;
        let position = map.path.first().copied().ok_or_else(|| GameError::InvalidMap {
            reason: "generated map has an empty path".to_string(),
        })?;
        tracing::info!(seed, nodes = map.node_count(), "new run started");
        let wallet = GoldWallet::new(config.starting_gold);
        Ok(Self {
            state: RunState {
                map,
                position,
                phase: RunPhase::Traverse,
                round: 0,
                seed,
                armed_stake: None,
            },
            wallet,
            effects: EffectEngine::new(),
            config,
        })
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn map(&self) -> &Map {
        &self.state.map
    }

    pub fn phase(&self) -> RunPhase {
        self.state.phase
    }

    pub fn position(&self) -> GridPoint {
        self.state.position
    }

    pub fn wallet(&self) -> &GoldWallet {
        &self.wallet
    }

    pub fn effects(&self) -> &EffectEngine {
        &self.effects
    }

    /// Outgoing edges of the current node; empty outside [`RunPhase::Traverse`]
    pub fn available_moves(&self) -> Vec<GridPoint> {
        if self.state.phase != RunPhase::Traverse {
            return Vec::new();
        }
        self.state
            .map
            .node(self.state.position)
            .map(|n| n.outgoing.clone())
            .unwrap_or_default()
    }

    /// Follow an outgoing edge.
    ///
    /// Combat kinds arm a spin with a kind-scaled stake, encounters pay a
    /// small scouted reward, shops and undefined nodes are inert.
    pub fn travel_to(&mut self, point: GridPoint) -> GameResult<()> {
        if self.state.phase != RunPhase::Traverse {
            return Err(GameError::WrongPhase);
        }
        if !self.state.map.has_edge(self.state.position, point) {
            return Err(GameError::InvalidMove {
                from: self.state.position,
                to: point,
            });
        }
        self.state.position = point;
        let kind = self
            .state
            .map
            .node(point)
            .map(|n| n.kind)
            .unwrap_or(NodeKind::Undefined);
        tracing::debug!(%point, %kind, "traveled");

        if kind.arms_spin() {
            let stake = (self.config.base_stake * stake_multiplier(kind))
                .saturating_sub(self.effects.stake_discount());
            self.state.armed_stake = Some(stake);
            self.state.phase = RunPhase::Spinning;
        } else if kind == NodeKind::Encounter {
            self.wallet.earn(self.config.encounter_reward, "encounter scouted");
        }
        Ok(())
    }

    /// Resolve the armed spin.
    ///
    /// The stake is spent up front; failing to afford it loses the run.
    /// Clearing a boss node wins it.
    pub fn spin(&mut self) -> GameResult<SpinOutcome> {
        if self.state.phase != RunPhase::Spinning {
            return Err(GameError::WrongPhase);
        }
        let stake = self.state.armed_stake.take().ok_or(GameError::WrongPhase)?;
        if let Err(err) = self.wallet.spend(stake, "spin stake") {
            tracing::info!(stake, have = self.wallet.balance(), "cannot cover the stake, run lost");
            self.state.phase = RunPhase::Defeat;
            return Err(err);
        }

        let mut rng = self.spin_rng();
        let outcome = resolve_spin(&self.config.symbol_pool, &self.effects, stake, &mut rng);
        self.wallet.earn(outcome.payout, "spin payout");
        self.state.round += 1;

        let beat_boss = self
            .state
            .map
            .node(self.state.position)
            .map(|n| n.kind.is_boss())
            .unwrap_or(false);
        self.state.phase = if beat_boss {
            RunPhase::Victory
        } else {
            RunPhase::Traverse
        };
        tracing::debug!(round = self.state.round, payout = outcome.payout, "spin settled");
        Ok(outcome)
    }

    /// Relics purchasable right now; empty unless standing on a shop
    pub fn shop_stock(&self) -> Vec<&RelicDef> {
        if !self.at_shop() {
            return Vec::new();
        }
        self.config
            .relic_catalog
            .iter()
            .filter(|r| !self.effects.owns(&r.name))
            .collect()
    }

    pub fn buy_relic(&mut self, name: &str) -> GameResult<()> {
        if !self.at_shop() {
            return Err(GameError::NotAtShop);
        }
        let relic = self
            .config
            .relic_catalog
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .ok_or_else(|| GameError::UnknownRelic {
                name: name.to_string(),
            })?;
        if self.effects.owns(name) {
            return Err(GameError::RelicAlreadyOwned {
                name: name.to_string(),
            });
        }
        self.wallet.spend(relic.price, &format!("relic {name}"))?;
        tracing::debug!(relic = name, "relic bought");
        self.effects.add(relic)
    }

    /// Serializable snapshot for the frontend
    pub fn view(&self) -> RunView {
        let moves = self.available_moves();
        let shop = self.shop_stock();
        RunView::from_run(&self.state, &self.wallet, &self.effects, &shop, &moves)
    }

    pub fn to_save(&self) -> RunSave {
        RunSave {
            map: self.state.map.to_dto(),
            position: [self.state.position.x, self.state.position.y],
            phase: self.state.phase,
            round: self.state.round,
            seed: self.state.seed,
            armed_stake: self.state.armed_stake,
            gold: self.wallet.balance(),
            relics: self.effects.relic_names(),
        }
    }

    /// Rebuild a run from a save.
    ///
    /// The map DTO itself loads anything, but a structurally broken graph is
    /// rejected here rather than crashing mid-run later. Relic names the
    /// catalog no longer carries are skipped, matching the `Undefined`
    /// philosophy of the kind parser.
    pub fn from_save(config: RunConfig, save: RunSave) -> GameResult<Self> {
        let map = save.map.into_map();
        map.validate()?;
        let position = GridPoint::new(save.position[0], save.position[1]);
        if map.node(position).is_none() {
            return Err(GameError::InvalidMap {
                reason: format!("saved position {} is not a node", position),
            });
        }

        let mut effects = EffectEngine::new();
        for name in &save.relics {
            match config.relic_catalog.iter().find(|r| r.name == *name) {
                Some(relic) => effects.add(relic.clone())?,
                None => tracing::warn!(relic = %name, "save references an unknown relic, skipping"),
            }
        }

        tracing::info!(round = save.round, "run restored from save");
        Ok(Self {
            state: RunState {
                map,
                position,
                phase: save.phase,
                round: save.round,
                seed: save.seed,
                armed_stake: save.armed_stake,
            },
            wallet: GoldWallet::new(save.gold),
            effects,
            config,
        })
    }

    /// Per-spin stream: run seed salted by the spin counter
    fn spin_rng(&self) -> XorShiftRng {
        XorShiftRng::seed_from_u64(self.state.seed ^ (self.state.round as u64 + 1).wrapping_mul(999))
    }

    fn at_shop(&self) -> bool {
        self.state.phase == RunPhase::Traverse
            && self
                .state
                .map
                .node(self.state.position)
                .map(|n| n.kind == NodeKind::Shop)
                .unwrap_or(false)
    }
}
