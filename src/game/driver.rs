//! The seam between the engine and whoever plays it
//!
//! A [`Driver`] makes the hero's choices and gets told what happened. The
//! terminal front end implements it for a human; tests implement it with
//! scripted choices.

use crate::entities::Unit;
use crate::items::{Item, Potion};
use crate::progression::Upgrade;

use super::battle::{Action, BattleOutcome, TurnReport};
use super::turn::{CoinFace, CoinToss};

pub trait Driver {
    /// Call heads or tails before a stage
    fn call_coin(&mut self, stage: u32) -> CoinFace;

    /// Pick the hero's action for this turn
    fn choose_action(&mut self, hero: &Unit, boss: &Unit) -> Action;

    /// Pick one permanent upgrade after a stage
    fn choose_upgrade(&mut self, hero: &Unit) -> Upgrade;

    /// Pick one of the offered items by index
    fn choose_item(&mut self, hero: &Unit, offer: &[Item]) -> usize;

    fn stage_started(&mut self, _stage: u32, _hero: &Unit, _boss: &Unit) {}

    fn coin_tossed(&mut self, _toss: &CoinToss) {}

    /// Called after every turn; the report carries the events it produced
    fn turn_resolved(&mut self, _report: &TurnReport, _hero: &Unit, _boss: &Unit) {}

    fn battle_finished(&mut self, _stage: u32, _outcome: BattleOutcome, _hero: &Unit, _boss: &Unit) {}

    /// Called with the potions a defeated boss dropped, and any other
    /// reward messages
    fn loot_received(&mut self, _hero: &Unit, _potions: &[Potion], _events: &[String]) {}

    /// Called once the upgrade and the chosen item have been applied
    fn rewards_claimed(&mut self, _hero: &Unit, _upgrade: Upgrade, _item: &Item, _events: &[String]) {}
}
