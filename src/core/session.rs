//! Game session facade.
//!
//! A session owns the player, the single random generator and the pacing
//! state between encounters. One encounter is active at a time:
//!
//! 1. [`GameSession::next_encounter`] spawns a threat (every
//!    `boss_interval`-th one is a boss).
//! 2. [`GameSession::resolve_turn`] is called until the encounter is over.
//! 3. [`GameSession::finish_encounter`] pays out rewards, applies level-ups
//!    and the passive heal, then decides whether a merchant visits.
//!
//! Boss upgrade candidates and shop stock stay open until the caller picks
//! from them or moves on to the next encounter.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use crate::character::{poll_level_ups, Ability, LevelUpEvent, Player};
use crate::combat::{self, CombatAction, CombatStatus, TurnDriver, TurnOutcome};
use crate::economy::{
    self, generate_stock, grant_boss_reward, grant_victory_reward, post_combat_heal, BossReward,
    Purchase, ShopStock, VictoryReward,
};
use crate::error::{GameError, Result};
use crate::threats::{generate_encounter, Threat};
use crate::weapons::WeaponUpgrade;

/// Everything that happened after an encounter ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterSummary {
    pub encounter: u32,
    pub threat_name: String,
    pub boss: bool,
    pub status: CombatStatus,
    pub victory_reward: Option<VictoryReward>,
    pub boss_reward: Option<BossReward>,
    pub level_ups: Vec<LevelUpEvent>,
    pub healed: u32,
    pub shop_visit: bool,
}

pub struct GameSession<R: Rng = ChaCha8Rng> {
    config: GameConfig,
    rng: R,
    player: Player,
    encounter_count: u32,
    threat: Option<Threat>,
    shop: Option<ShopStock>,
    upgrade_choices: Vec<WeaponUpgrade>,
}

impl GameSession<ChaCha8Rng> {
    /// Starts a fresh game. A configured seed makes the whole session replayable.
    pub fn new_game(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new_game(GameConfig::with_seed(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Zero intervals are raised to 1 so pacing never divides by zero.
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let config = GameConfig {
            boss_interval: config.boss_interval.max(1),
            shop_interval: config.shop_interval.max(1),
            ..config
        };
        Self {
            config,
            rng,
            player: Player::new(),
            encounter_count: 0,
            threat: None,
            shop: None,
            upgrade_choices: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn encounter_count(&self) -> u32 {
        self.encounter_count
    }

    pub fn threat(&self) -> Option<&Threat> {
        self.threat.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.player.is_defeated()
    }

    fn is_boss_encounter(&self, count: u32) -> bool {
        count % self.config.boss_interval == 0
    }

    /// Spawns the next threat. Any open shop or unclaimed upgrade choice is
    /// dropped. A defeated player cannot start another encounter.
    pub fn next_encounter(&mut self) -> Result<&Threat> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if let Some(threat) = &self.threat {
            if !combat::encounter_status(&self.player, threat).is_over() {
                return Err(GameError::EncounterInProgress);
            }
        }

        self.encounter_count += 1;
        self.shop = None;
        self.upgrade_choices.clear();

        let is_boss = self.is_boss_encounter(self.encounter_count);
        let threat = generate_encounter(self.player.level(), is_boss, &mut self.rng);
        tracing::debug!(
            encounter = self.encounter_count,
            threat = %threat.name,
            boss = is_boss,
            "encounter started"
        );
        Ok(&*self.threat.insert(threat))
    }

    pub fn resolve_turn(&mut self, action: CombatAction) -> Result<TurnOutcome> {
        let threat = self.threat.as_mut().ok_or(GameError::NoActiveEncounter)?;
        combat::resolve_turn(&mut self.player, threat, action)
    }

    pub fn status(&self) -> Option<CombatStatus> {
        self.threat
            .as_ref()
            .map(|threat| combat::encounter_status(&self.player, threat))
    }

    pub fn list_available_abilities(&self) -> Vec<&Ability> {
        combat::list_available_abilities(&self.player)
    }

    /// Applies any level-ups the player has banked.
    pub fn poll_level_ups(&mut self) -> Vec<LevelUpEvent> {
        poll_level_ups(&mut self.player)
    }

    /// Settles the finished encounter: rewards, level-ups, heal, then the
    /// merchant roll. A defeat settles with no payout.
    pub fn finish_encounter(&mut self) -> Result<EncounterSummary> {
        let status = self.status().ok_or(GameError::NoActiveEncounter)?;
        if !status.is_over() {
            return Err(GameError::EncounterInProgress);
        }
        let threat = self.threat.take().ok_or(GameError::NoActiveEncounter)?;

        let mut summary = EncounterSummary {
            encounter: self.encounter_count,
            threat_name: threat.name.clone(),
            boss: threat.boss,
            status,
            victory_reward: None,
            boss_reward: None,
            level_ups: Vec::new(),
            healed: 0,
            shop_visit: false,
        };

        if status == CombatStatus::PlayerDefeated {
            tracing::info!(encounter = self.encounter_count, threat = %threat.name, "player defeated");
            return Ok(summary);
        }

        if threat.boss {
            let reward = grant_boss_reward(&mut self.player, &threat, &mut self.rng);
            self.upgrade_choices = reward.upgrade_choices.to_vec();
            summary.boss_reward = Some(reward);
        } else {
            summary.victory_reward =
                Some(grant_victory_reward(&mut self.player, &threat, &mut self.rng));
        }

        summary.level_ups = poll_level_ups(&mut self.player);
        summary.healed = post_combat_heal(&mut self.player, &mut self.rng);

        summary.shop_visit = self.roll_shop_visit(threat.boss);
        if summary.shop_visit {
            self.shop = Some(generate_stock(self.player.level(), &mut self.rng));
        }

        Ok(summary)
    }

    fn roll_shop_visit(&mut self, boss: bool) -> bool {
        let scheduled = self.encounter_count % self.config.shop_interval == 0 && !boss;
        scheduled || self.rng.gen_range(0..100) < self.config.random_shop_chance_percent
    }

    /// Runs a whole encounter through `driver` and settles it.
    pub fn play_encounter(&mut self, driver: &mut impl TurnDriver) -> Result<EncounterSummary> {
        self.next_encounter()?;
        let threat = self.threat.as_mut().ok_or(GameError::NoActiveEncounter)?;
        combat::run_encounter(&mut self.player, threat, driver);
        self.finish_encounter()
    }

    pub fn shop(&self) -> Option<&ShopStock> {
        self.shop.as_ref()
    }

    /// Buys the entry at `index` in the flat shop listing.
    pub fn purchase(&mut self, index: usize) -> Result<Purchase> {
        let stock = self
            .shop
            .as_ref()
            .ok_or_else(|| GameError::invalid_selection(index, 0))?;
        let selection = stock.selection(index)?;
        economy::purchase(&mut self.player, stock, selection)
    }

    pub fn leave_shop(&mut self) {
        self.shop = None;
    }

    /// Upgrade candidates from the last boss, until one is chosen.
    pub fn upgrade_choices(&self) -> &[WeaponUpgrade] {
        &self.upgrade_choices
    }

    pub fn choose_upgrade(&mut self, index: usize) -> Result<WeaponUpgrade> {
        let upgrade = economy::choose_upgrade(&mut self.player, &self.upgrade_choices, index)?;
        self.upgrade_choices.clear();
        Ok(upgrade)
    }

    /// Passes on the boss upgrade.
    pub fn skip_upgrade(&mut self) {
        self.upgrade_choices.clear();
    }
}
