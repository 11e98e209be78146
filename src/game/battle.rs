//! Battle resolution
//!
//! One boss fight. Both sides go through the same turn function; the only
//! difference between them is who picks the action.

use rand::Rng;

use crate::combat::StatusKind;
use crate::entities::Unit;
use crate::items::PotionUse;
use crate::progression::SkillSlot;

use super::driver::Driver;
use super::turn::{Side, TurnManager};

/// What the acting side does with its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Attack,
    Skill(SkillSlot),
    /// Drink the potion at this inventory index (a free action)
    UsePotion(usize),
    Pass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    BossDefeated,
    HeroDefeated,
}

impl BattleOutcome {
    pub fn hero_won(&self) -> bool {
        matches!(self, BattleOutcome::BossDefeated)
    }

    /// The outcome in which `side` has fallen
    fn defeat_of(side: Side) -> Self {
        match side {
            Side::Hero => BattleOutcome::HeroDefeated,
            Side::Boss => BattleOutcome::BossDefeated,
        }
    }
}

/// How a turn actually played out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The actor was stunned and lost the turn
    Stunned,
    Attacked { damage: i32 },
    SkillUsed(SkillSlot),
    /// Not enough mana; a basic attack happened instead
    SkillFellBack { slot: SkillSlot, damage: i32 },
    PotionUsed(PotionUse),
    /// No potion at that index; the turn is wasted
    NoSuchPotion(usize),
    Passed,
}

/// Everything the front end needs to render one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub round: u32,
    pub resolution: Resolution,
    /// The same side acts again
    pub free_action: bool,
    /// Battle log lines produced this turn, in order
    pub events: Vec<String>,
    /// Set when this turn ended the battle
    pub outcome: Option<BattleOutcome>,
}

/// Boss policy: each skill and the basic attack are equally likely
pub fn choose_boss_action(rng: &mut impl Rng) -> Action {
    match rng.gen_range(0..4) {
        0 => Action::Skill(SkillSlot::First),
        1 => Action::Skill(SkillSlot::Second),
        2 => Action::Skill(SkillSlot::Third),
        _ => Action::Attack,
    }
}

/// A fight between the hero and one boss
#[derive(Debug)]
pub struct Battle {
    stage: u32,
    boss: Unit,
    turns: TurnManager,
    outcome: Option<BattleOutcome>,
}

impl Battle {
    pub fn new(stage: u32, boss: Unit, first: Side) -> Self {
        Self {
            stage,
            boss,
            turns: TurnManager::new(first),
            outcome: None,
        }
    }

    pub fn stage(&self) -> u32 {
        self.stage
    }

    pub fn boss(&self) -> &Unit {
        &self.boss
    }

    /// Side whose turn it is
    pub fn current_side(&self) -> Side {
        self.turns.current()
    }

    pub fn round(&self) -> u32 {
        self.turns.round()
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Resolve one turn for the side whose turn it is.
    ///
    /// A stunned actor loses the turn whatever `action` says. Statuses of
    /// the actor tick afterwards. A successful potion keeps the turn with
    /// the same side. Returns `None` once the battle is over.
    pub fn take_turn(&mut self, hero: &mut Unit, action: Action) -> Option<TurnReport> {
        if self.outcome.is_none() {
            if !hero.is_alive() {
                self.outcome = Some(BattleOutcome::HeroDefeated);
            } else if !self.boss.is_alive() {
                self.outcome = Some(BattleOutcome::BossDefeated);
            }
        }
        if self.outcome.is_some() {
            return None;
        }

        let side = self.turns.current();
        let round = self.turns.round();
        let (actor, target) = match side {
            Side::Hero => (&mut *hero, &mut self.boss),
            Side::Boss => (&mut self.boss, &mut *hero),
        };

        let mut events = vec![format!("=== {}'s TURN ===", actor.name())];
        let mut free_action = false;

        let resolution = if actor.has_status(StatusKind::Stun) {
            actor.clear_status(StatusKind::Stun);
            events.push(format!("{} is stunned and skips the turn!", actor.name()));
            Resolution::Stunned
        } else {
            match action {
                Action::Attack => Resolution::Attacked {
                    damage: actor.attack(target),
                },
                Action::Skill(slot) => {
                    if actor.use_skill(slot, target) {
                        Resolution::SkillUsed(slot)
                    } else {
                        let msg = format!("{} uses a basic attack instead.", actor.name());
                        actor.add_to_battle_log(msg);
                        Resolution::SkillFellBack {
                            slot,
                            damage: actor.attack(target),
                        }
                    }
                }
                Action::UsePotion(index) => match actor.use_potion(index) {
                    Some(used) => {
                        free_action = true;
                        Resolution::PotionUsed(used)
                    }
                    None => {
                        let msg = format!("{} reaches for a potion that isn't there.", actor.name());
                        actor.add_to_battle_log(msg);
                        Resolution::NoSuchPotion(index)
                    }
                },
                Action::Pass => {
                    let msg = format!("{} passes the turn.", actor.name());
                    actor.add_to_battle_log(msg);
                    Resolution::Passed
                }
            }
        };
        events.extend(actor.take_battle_log());
        events.extend(target.take_battle_log());

        // Tick even when the action ended the fight
        actor.process_status_effects();
        events.extend(actor.take_battle_log());

        let outcome = if !target.is_alive() {
            Some(BattleOutcome::defeat_of(side.opponent()))
        } else if !actor.is_alive() {
            Some(BattleOutcome::defeat_of(side))
        } else {
            None
        };

        log::debug!(
            "Stage {} round {}: {:?} -> {:?}",
            self.stage, round, side, resolution
        );

        match outcome {
            Some(result) => {
                log::info!("Stage {} battle over after {} rounds: {:?}", self.stage, round, result);
                self.outcome = Some(result);
            }
            None if !free_action => self.turns.next_turn(),
            None => {}
        }

        Some(TurnReport {
            side,
            round,
            resolution,
            free_action,
            events,
            outcome,
        })
    }

    /// Fight until one side falls, asking `driver` for the hero's actions
    /// and `rng` for the boss's.
    pub fn run(
        &mut self,
        hero: &mut Unit,
        driver: &mut impl Driver,
        rng: &mut impl Rng,
    ) -> BattleOutcome {
        log::info!(
            "Stage {}: {} vs {} ({:?} first)",
            self.stage,
            hero.name(),
            self.boss.name(),
            self.turns.first()
        );

        loop {
            if let Some(outcome) = self.outcome {
                return outcome;
            }

            let action = match self.turns.current() {
                Side::Hero if hero.has_status(StatusKind::Stun) => Action::Pass,
                Side::Hero => driver.choose_action(hero, &self.boss),
                Side::Boss if self.boss.has_status(StatusKind::Stun) => Action::Pass,
                Side::Boss => choose_boss_action(rng),
            };

            if let Some(report) = self.take_turn(hero, action) {
                driver.turn_resolved(&report, hero, &self.boss);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{create_boss, create_unit, HeroClass};
    use crate::items::templates;

    fn setup(first: Side) -> (Unit, Battle) {
        let hero = create_unit(HeroClass::Warrior, "Conan");
        let boss = create_boss(1).unwrap();
        (hero, Battle::new(1, boss, first))
    }

    #[test]
    fn test_turns_alternate_between_sides() {
        let (mut hero, mut battle) = setup(Side::Hero);
        let report = battle.take_turn(&mut hero, Action::Attack).unwrap();
        assert_eq!(report.side, Side::Hero);
        assert_eq!(report.resolution, Resolution::Attacked { damage: 20 });
        assert_eq!(battle.boss().health(), 70);
        assert_eq!(battle.current_side(), Side::Boss);

        let report = battle.take_turn(&mut hero, Action::Attack).unwrap();
        assert_eq!(report.side, Side::Boss);
        assert_eq!(hero.health(), 120 - 13);
        assert_eq!(battle.current_side(), Side::Hero);
        assert_eq!(battle.round(), 2);
    }

    #[test]
    fn test_potion_is_free_action() {
        let (mut hero, mut battle) = setup(Side::Hero);
        hero.add_item(templates::health_potion());
        hero.take_damage(42, None);

        let report = battle.take_turn(&mut hero, Action::UsePotion(0)).unwrap();
        assert!(report.free_action);
        assert!(matches!(report.resolution, Resolution::PotionUsed(_)));
        assert_eq!(hero.health(), 110);
        assert_eq!(battle.current_side(), Side::Hero);
    }

    #[test]
    fn test_missing_potion_wastes_turn() {
        let (mut hero, mut battle) = setup(Side::Hero);
        let report = battle.take_turn(&mut hero, Action::UsePotion(2)).unwrap();
        assert_eq!(report.resolution, Resolution::NoSuchPotion(2));
        assert!(!report.free_action);
        assert_eq!(battle.current_side(), Side::Boss);
    }

    #[test]
    fn test_failed_skill_falls_back_to_attack() {
        let (mut hero, mut battle) = setup(Side::Boss);
        // Boss opens by passing, then the hero spends mana down to 5
        battle.take_turn(&mut hero, Action::Pass).unwrap();
        let mut dummy = create_unit(HeroClass::Mage, "Dummy");
        assert!(hero.use_skill3(&mut dummy));
        assert!(hero.use_skill1(&mut dummy));
        assert!(hero.use_skill2(&mut dummy));
        hero.clear_battle_log();
        assert_eq!(hero.mana(), 5);

        let report = battle.take_turn(&mut hero, Action::Skill(SkillSlot::First)).unwrap();
        assert!(matches!(
            report.resolution,
            Resolution::SkillFellBack { slot: SkillSlot::First, .. }
        ));
        assert_eq!(hero.mana(), 5);
        assert!(battle.boss().health() < 90);
    }

    #[test]
    fn test_stunned_side_skips_once() {
        let (mut hero, mut battle) = setup(Side::Hero);
        hero.add_status(StatusKind::Stun, 1, "Goblin King");
        let report = battle.take_turn(&mut hero, Action::Attack).unwrap();
        assert_eq!(report.resolution, Resolution::Stunned);
        assert!(!hero.has_status(StatusKind::Stun));
        assert_eq!(battle.boss().health(), 90);
        assert_eq!(battle.current_side(), Side::Boss);
    }

    #[test]
    fn test_killing_blow_ends_battle() {
        let (mut hero, mut battle) = setup(Side::Hero);
        hero.increase_attack(100);
        let report = battle.take_turn(&mut hero, Action::Attack).unwrap();
        assert_eq!(report.outcome, Some(BattleOutcome::BossDefeated));
        assert!(battle.is_over());
        assert!(battle.take_turn(&mut hero, Action::Attack).is_none());
    }

    #[test]
    fn test_killing_blow_still_ticks_actor() {
        let (mut hero, mut battle) = setup(Side::Hero);
        hero.increase_attack(100);
        hero.add_status(StatusKind::Poison, 3, "Goblin King");

        let report = battle.take_turn(&mut hero, Action::Attack).unwrap();
        assert_eq!(report.outcome, Some(BattleOutcome::BossDefeated));
        assert_eq!(hero.health(), 120 - 5);
        assert_eq!(hero.status_duration(StatusKind::Poison), 2);
    }

    #[test]
    fn test_stunned_and_poisoned_actor_still_ticks() {
        let (mut hero, mut battle) = setup(Side::Hero);
        hero.add_status(StatusKind::Poison, 3, "Goblin King");
        hero.add_status(StatusKind::Stun, 1, "Goblin King");

        let report = battle.take_turn(&mut hero, Action::Attack).unwrap();
        assert_eq!(report.resolution, Resolution::Stunned);
        assert!(!hero.has_status(StatusKind::Stun));
        assert_eq!(hero.health(), 115);
        assert_eq!(hero.status_duration(StatusKind::Poison), 2);
        assert_eq!(battle.boss().health(), 90);
        assert_eq!(battle.current_side(), Side::Boss);
    }

    #[test]
    fn test_boss_opening_blow_defeats_hero() {
        let (mut hero, mut battle) = setup(Side::Boss);
        hero.take_damage(117, None);
        assert_eq!(hero.health(), 5);

        let report = battle.take_turn(&mut hero, Action::Attack).unwrap();
        assert_eq!(report.side, Side::Boss);
        assert_eq!(report.outcome, Some(BattleOutcome::HeroDefeated));
        assert_eq!(hero.health(), 0);
        assert!(battle.take_turn(&mut hero, Action::Attack).is_none());
        assert_eq!(battle.boss().health(), 90);
    }

    #[test]
    fn test_status_tick_can_end_battle() {
        let (mut hero, mut battle) = setup(Side::Hero);
        hero.add_status(StatusKind::Poison, 3, "Goblin King");
        hero.take_damage(116, None);
        assert_eq!(hero.health(), 6);

        let report = battle.take_turn(&mut hero, Action::Pass).unwrap();
        assert_eq!(hero.health(), 1);
        assert!(report.outcome.is_none());

        battle.take_turn(&mut hero, Action::Pass).unwrap();
        let report = battle.take_turn(&mut hero, Action::Pass).unwrap();
        assert_eq!(report.outcome, Some(BattleOutcome::HeroDefeated));
    }

    #[test]
    fn test_boss_policy_covers_all_actions() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(8);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(format!("{:?}", choose_boss_action(&mut rng)));
        }
        assert_eq!(seen.len(), 4);
    }
}
