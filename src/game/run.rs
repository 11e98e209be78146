//! A full run: five boss stages in sequence
//!
//! Owns the hero between battles and hands out rewards after each win.

use rand::Rng;

use crate::entities::{Pickup, Unit, BOSSES, STAGE_COUNT};
use crate::items::{generate_item_offer, generate_potion_drop, Potion};

use super::battle::{Battle, BattleOutcome};
use super::driver::Driver;
use super::error::{GameError, Result};
use super::turn::coin_flip;

/// How a run ended
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// Every boss fell
    Victory { hero: Unit },
    /// The hero fell on `stage`
    Defeat { stage: u32, hero: Unit },
}

impl RunOutcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, RunOutcome::Victory { .. })
    }

    pub fn hero(&self) -> &Unit {
        match self {
            RunOutcome::Victory { hero } | RunOutcome::Defeat { hero, .. } => hero,
        }
    }

    /// Number of bosses beaten
    pub fn stages_cleared(&self) -> u32 {
        match self {
            RunOutcome::Victory { .. } => STAGE_COUNT,
            RunOutcome::Defeat { stage, .. } => stage - 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Run {
    hero: Unit,
}

impl Run {
    pub fn new(hero: Unit) -> Self {
        Self { hero }
    }

    pub fn hero(&self) -> &Unit {
        &self.hero
    }

    /// Play every stage in order until the hero falls or the last boss does.
    ///
    /// Bosses are only built when their stage begins.
    pub fn play(mut self, driver: &mut impl Driver, rng: &mut impl Rng) -> Result<RunOutcome> {
        log::info!("{} enters the gauntlet as a {:?}", self.hero.name(), self.hero.archetype());

        for (index, template) in BOSSES.iter().enumerate() {
            let stage = index as u32 + 1;
            let boss = template.spawn(stage);
            driver.stage_started(stage, &self.hero, &boss);

            let toss = coin_flip(driver.call_coin(stage), rng);
            log::debug!("Coin toss for stage {}: {:?}", stage, toss);
            driver.coin_tossed(&toss);

            let mut battle = Battle::new(stage, boss, toss.first);
            let outcome = battle.run(&mut self.hero, driver, rng);
            driver.battle_finished(stage, outcome, &self.hero, battle.boss());

            if outcome == BattleOutcome::HeroDefeated {
                log::info!("{} fell on stage {}", self.hero.name(), stage);
                return Ok(RunOutcome::Defeat { stage, hero: self.hero });
            }

            self.claim_rewards(stage, driver, rng)?;
        }

        log::info!("{} cleared all {} stages", self.hero.name(), STAGE_COUNT);
        Ok(RunOutcome::Victory { hero: self.hero })
    }

    /// Potions after every win; an upgrade and an item between stages
    fn claim_rewards(&mut self, stage: u32, driver: &mut impl Driver, rng: &mut impl Rng) -> Result<()> {
        let drop = generate_potion_drop(rng);
        let mut potions: Vec<Potion> = Vec::new();
        for item in drop {
            if let Pickup::Stored { slot } = self.hero.add_item(item) {
                potions.extend(self.hero.potions().get(slot).cloned());
            }
        }
        log::info!("Stage {} dropped {} potions", stage, potions.len());
        let events = self.hero.take_battle_log();
        driver.loot_received(&self.hero, &potions, &events);

        if stage >= STAGE_COUNT {
            return Ok(());
        }

        let upgrade = driver.choose_upgrade(&self.hero);
        upgrade.apply(&mut self.hero);

        let offer = generate_item_offer(rng);
        let options = offer.len();
        let index = driver.choose_item(&self.hero, &offer);
        let item = offer
            .into_iter()
            .nth(index)
            .ok_or(GameError::InvalidItemChoice { index, options })?;
        log::info!("Stage {} reward: {:?} and {}", stage, upgrade, item.name);

        self.hero.add_item(item.clone());
        let events = self.hero.take_battle_log();
        driver.rewards_claimed(&self.hero, upgrade, &item, &events);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{create_unit, HeroClass};
    use crate::game::battle::Action;
    use crate::game::turn::{CoinFace, CoinToss};
    use crate::items::Item;
    use crate::progression::Upgrade;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Always attacks, takes attack upgrades and the first item
    struct Bruiser {
        item_choice: usize,
        stages: Vec<u32>,
        tosses: usize,
    }

    impl Bruiser {
        fn new(item_choice: usize) -> Self {
            Self { item_choice, stages: Vec::new(), tosses: 0 }
        }
    }

    impl Driver for Bruiser {
        fn call_coin(&mut self, _stage: u32) -> CoinFace {
            CoinFace::Heads
        }

        fn choose_action(&mut self, _hero: &Unit, _boss: &Unit) -> Action {
            Action::Attack
        }

        fn choose_upgrade(&mut self, _hero: &Unit) -> Upgrade {
            Upgrade::Attack
        }

        fn choose_item(&mut self, _hero: &Unit, _offer: &[Item]) -> usize {
            self.item_choice
        }

        fn stage_started(&mut self, stage: u32, _hero: &Unit, _boss: &Unit) {
            self.stages.push(stage);
        }

        fn coin_tossed(&mut self, _toss: &CoinToss) {
            self.tosses += 1;
        }
    }

    fn strong_hero() -> Unit {
        let mut hero = create_unit(HeroClass::Warrior, "Conan");
        hero.increase_max_health(5000);
        hero.increase_attack(500);
        hero
    }

    #[test]
    fn test_victory_after_five_stages() {
        let mut driver = Bruiser::new(0);
        let mut rng = StdRng::seed_from_u64(7);
        let outcome = Run::new(strong_hero()).play(&mut driver, &mut rng).unwrap();

        assert!(outcome.is_victory());
        assert_eq!(outcome.stages_cleared(), 5);
        assert_eq!(driver.stages, vec![1, 2, 3, 4, 5]);
        assert_eq!(driver.tosses, 5);
        // Four upgrades and four items
        assert_eq!(outcome.hero().equipment().len(), 4);
        assert!(outcome.hero().base_attack() >= 520 + 4 * 5);
        assert!(!outcome.hero().potions().is_empty());
    }

    #[test]
    fn test_defeat_stops_the_run() {
        let mut hero = create_unit(HeroClass::Mage, "Merlin");
        hero.take_damage(69, None);
        let mut driver = Bruiser::new(0);
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = Run::new(hero).play(&mut driver, &mut rng).unwrap();

        match outcome {
            RunOutcome::Defeat { stage, ref hero } => {
                assert_eq!(stage, 1);
                assert!(!hero.is_alive());
            }
            RunOutcome::Victory { .. } => panic!("a 1 HP mage should not win"),
        }
        assert_eq!(driver.stages, vec![1]);
        assert_eq!(outcome.stages_cleared(), 0);
    }

    #[test]
    fn test_invalid_item_choice_is_an_error() {
        let mut driver = Bruiser::new(7);
        let mut rng = StdRng::seed_from_u64(11);
        let err = Run::new(strong_hero()).play(&mut driver, &mut rng).unwrap_err();
        assert_eq!(err, GameError::InvalidItemChoice { index: 7, options: 3 });
        assert_eq!(driver.stages, vec![1]);
    }
}
