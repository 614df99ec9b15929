use serde::{Deserialize, Serialize};

use crate::character::{AbilityKind, Player, PlayerReport};
use crate::error::GameError;
use crate::items::ItemEffect;
use crate::threats::{Threat, ThreatReport};

/// One player decision for a combat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatAction {
    Attack,
    /// Use the inventory item at `index`.
    UseItem { index: usize },
    Block,
    Inspect,
    /// Use the `index`th entry of [`Player::available_abilities`].
    UseAbility { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatStatus {
    InProgress,
    PlayerVictory,
    PlayerDefeated,
}

impl CombatStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, CombatStatus::InProgress)
    }
}

/// Snapshot of both combatants returned by [`CombatAction::Inspect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    pub player: PlayerReport,
    pub threat: ThreatReport,
}

/// Result of a single resolved turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub action: CombatAction,
    pub damage_dealt: u32,
    pub damage_taken: u32,
    pub threat_defeated: bool,
    pub player_defeated: bool,
    pub item_effect: Option<ItemEffect>,
    pub ability_used: Option<AbilityKind>,
    pub inspection: Option<Inspection>,
}

impl TurnOutcome {
    pub(crate) fn new(action: CombatAction) -> Self {
        Self {
            action,
            damage_dealt: 0,
            damage_taken: 0,
            threat_defeated: false,
            player_defeated: false,
            item_effect: None,
            ability_used: None,
            inspection: None,
        }
    }

    pub fn status(&self) -> CombatStatus {
        if self.threat_defeated {
            CombatStatus::PlayerVictory
        } else if self.player_defeated {
            CombatStatus::PlayerDefeated
        } else {
            CombatStatus::InProgress
        }
    }
}

/// Totals for a finished encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterResult {
    pub status: CombatStatus,
    pub turns: u32,
    pub damage_dealt: u32,
    pub damage_taken: u32,
    pub rejected_actions: u32,
}

/// Points where a presentation layer may pause for pacing. The engine never
/// waits on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    EncounterStart,
    TurnResolved,
    EncounterEnd,
}

/// Supplies actions for an encounter and observes its progress.
pub trait TurnDriver {
    fn choose_action(&mut self, player: &Player, threat: &Threat) -> CombatAction;

    fn on_turn(&mut self, _outcome: &TurnOutcome) {}

    /// Called when an action was rejected; the next call to `choose_action` is the re-prompt.
    fn on_rejected(&mut self, _action: CombatAction, _error: &GameError) {}

    fn pause(&mut self, _pacing: Pacing) {}
}

/// Plays a fixed list of actions, then attacks.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDriver {
    script: std::collections::VecDeque<CombatAction>,
    pub outcomes: Vec<TurnOutcome>,
    pub rejections: Vec<GameError>,
}

impl ScriptedDriver {
    pub fn new(actions: impl IntoIterator<Item = CombatAction>) -> Self {
        Self {
            script: actions.into_iter().collect(),
            outcomes: Vec::new(),
            rejections: Vec::new(),
        }
    }
}

impl TurnDriver for ScriptedDriver {
    fn choose_action(&mut self, _player: &Player, _threat: &Threat) -> CombatAction {
        self.script.pop_front().unwrap_or(CombatAction::Attack)
    }

    fn on_turn(&mut self, outcome: &TurnOutcome) {
        self.outcomes.push(outcome.clone());
    }

    fn on_rejected(&mut self, _action: CombatAction, error: &GameError) {
        self.rejections.push(error.clone());
    }
}
