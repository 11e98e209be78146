//! Combatant state
//!
//! A [`Unit`] is one side of a fight: the hero or a boss. It owns its
//! resources, statuses, inventory and battle log, and resolves its own
//! attacks and skills against a target.

use crate::combat::{self, Pool, StatusEffects, StatusKind};
use crate::items::{Inventory, Item, Potion, PotionUse, Resource};
use crate::progression::{Recovery, Skill, SkillSlot, SkillTable};

use super::classes::Archetype;

/// Starting numbers for a new combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    pub max_health: i32,
    pub max_mana: i32,
    pub attack: i32,
    pub defense: i32,
}

impl BaseStats {
    pub const fn new(max_health: i32, max_mana: i32, attack: i32, defense: i32) -> Self {
        Self { max_health, max_mana, attack, defense }
    }
}

/// Where [`Unit::add_item`] put an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pickup {
    /// A potion, stored at this index of the potion list
    Stored { slot: usize },
    /// Equipment, applied at once
    Equipped,
}

/// A combatant
#[derive(Debug, Clone)]
pub struct Unit {
    name: String,
    archetype: Archetype,
    health: Pool,
    mana: Pool,
    base_attack: i32,
    defense: i32,
    statuses: StatusEffects,
    skills: SkillTable,
    inventory: Inventory,
    battle_log: Vec<String>,
}

impl Unit {
    pub fn new(
        name: impl Into<String>,
        archetype: Archetype,
        stats: BaseStats,
        skills: SkillTable,
    ) -> Self {
        Self {
            name: name.into(),
            archetype,
            health: Pool::new(stats.max_health),
            mana: Pool::new(stats.max_mana),
            base_attack: stats.attack,
            defense: stats.defense.max(0),
            statuses: StatusEffects::new(),
            skills,
            inventory: Inventory::new(),
            battle_log: Vec::new(),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn health(&self) -> i32 {
        self.health.current
    }

    pub fn max_health(&self) -> i32 {
        self.health.max
    }

    pub fn mana(&self) -> i32 {
        self.mana.current
    }

    pub fn max_mana(&self) -> i32 {
        self.mana.max
    }

    /// Current attack: base attack with active status modifiers applied
    pub fn attack_power(&self) -> i32 {
        self.statuses.modified_attack(self.base_attack)
    }

    /// Permanent attack, ignoring statuses
    pub fn base_attack(&self) -> i32 {
        self.base_attack
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }

    pub fn health_pool(&self) -> &Pool {
        &self.health
    }

    pub fn statuses(&self) -> &StatusEffects {
        &self.statuses
    }

    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.statuses.has(kind)
    }

    pub fn status_duration(&self, kind: StatusKind) -> u32 {
        self.statuses.duration(kind)
    }

    pub fn skills(&self) -> &SkillTable {
        &self.skills
    }

    pub fn skill(&self, slot: SkillSlot) -> &Skill {
        self.skills.get(slot)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn equipment(&self) -> &[Item] {
        self.inventory.equipment()
    }

    pub fn potions(&self) -> &[Potion] {
        self.inventory.potions()
    }

    // ========================================================================
    // Battle log
    // ========================================================================

    pub fn battle_log(&self) -> &[String] {
        &self.battle_log
    }

    pub fn add_to_battle_log(&mut self, message: impl Into<String>) {
        self.battle_log.push(message.into());
    }

    /// Drain the log, leaving it empty
    pub fn take_battle_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.battle_log)
    }

    pub fn clear_battle_log(&mut self) {
        self.battle_log.clear();
    }

    // ========================================================================
    // Resources and stats
    // ========================================================================

    /// Take a hit after defense. Returns the health actually lost.
    ///
    /// `source` names where a non-attack hit came from; attack hits (no
    /// source) also report how much defense blocked.
    pub fn take_damage(&mut self, raw: i32, source: Option<&str>) -> i32 {
        let mitigated = combat::mitigate(raw, self.defense);
        let before = self.health.current;
        let lost = self.health.drain(mitigated);

        let mut msg = format!("{} took {} damage", self.name, mitigated);
        if let Some(source) = source {
            msg.push_str(&format!(" from {}", source));
        }
        msg.push_str(&format!(
            "! [{} -> {}/{} HP]",
            before, self.health.current, self.health.max
        ));
        self.battle_log.push(msg);

        let blocked = combat::blocked(raw, mitigated);
        if source.is_none() && self.defense > 0 && blocked > 0 {
            self.battle_log.push(format!("{} blocked {} damage!", self.name, blocked));
        }

        log::debug!("{} took {} damage ({} raw), {} HP left", self.name, lost, raw, self.health.current);
        lost
    }

    /// Returns the amount actually healed
    pub fn heal(&mut self, amount: i32) -> i32 {
        let healed = self.health.restore(amount);
        self.battle_log.push(format!(
            "{} healed {} HP! ({}/{})",
            self.name, healed, self.health.current, self.health.max
        ));
        healed
    }

    /// Returns the amount actually restored
    pub fn restore_mana(&mut self, amount: i32) -> i32 {
        let restored = self.mana.restore(amount);
        self.battle_log.push(format!(
            "{} restored {} MP! ({}/{})",
            self.name, restored, self.mana.current, self.mana.max
        ));
        restored
    }

    pub fn increase_max_health(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        self.health.grow(amount);
        self.battle_log.push(format!("{}'s max HP increased by {}!", self.name, amount));
    }

    pub fn increase_max_mana(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        self.mana.grow(amount);
        self.battle_log.push(format!("{}'s max MP increased by {}!", self.name, amount));
    }

    pub fn increase_attack(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        self.base_attack += amount;
        self.battle_log.push(format!("{}'s attack increased by {}!", self.name, amount));
    }

    pub fn increase_defense(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        self.defense += amount;
        self.battle_log.push(format!("{}'s defense increased by {}!", self.name, amount));
    }

    // ========================================================================
    // Status effects
    // ========================================================================

    /// Apply a status, replacing any remaining duration of the same kind
    /// A zero duration just clears the status.
    pub fn add_status(&mut self, kind: StatusKind, duration: u32, source: &str) {
        self.statuses.apply(kind, duration);
        if duration == 0 {
            return;
        }
        self.battle_log.push(format!("{} applied {} to {}!", source, kind.name(), self.name));
    }

    pub fn clear_status(&mut self, kind: StatusKind) {
        self.statuses.remove(kind);
    }

    /// Tick every active status once.
    ///
    /// Damage-over-time ignores defense. Attack modifiers need no work here:
    /// attack is derived from the statuses still active.
    pub fn process_status_effects(&mut self) {
        if !self.is_alive() {
            return;
        }

        let result = self.statuses.tick();
        for tick in result.ticks {
            if tick.damage > 0 {
                let before = self.health.current;
                self.health.drain(tick.damage);
                self.battle_log.push(format!(
                    "{} took {} damage from {}! [{} -> {}/{} HP]",
                    self.name,
                    tick.damage,
                    tick.kind.name(),
                    before,
                    self.health.current,
                    self.health.max
                ));
            }
            if tick.expired {
                self.battle_log.push(format!("{}'s {} wore off!", self.name, tick.kind.name()));
            }
            if !self.is_alive() {
                log::debug!("{} succumbed to {}", self.name, tick.kind.name());
                break;
            }
        }
    }

    // ========================================================================
    // Items
    // ========================================================================

    /// Take ownership of a looted item.
    ///
    /// Potions are stored for later; equipment is applied immediately and
    /// kept as a record.
    pub fn add_item(&mut self, item: Item) -> Pickup {
        match Potion::from_item(&item) {
            Some(potion) => {
                self.battle_log.push(format!("{} picked up {}!", self.name, potion.name()));
                self.inventory.add_potion(potion);
                Pickup::Stored {
                    slot: self.inventory.potions().len() - 1,
                }
            }
            None => {
                item.apply_effect(self);
                self.battle_log.push(format!("{} equipped {}!", self.name, item.name));
                self.inventory.push_equipment(item);
                Pickup::Equipped
            }
        }
    }

    /// Drink the potion at `index`. Returns `None` (and changes nothing)
    /// when there is no such potion.
    pub fn use_potion(&mut self, index: usize) -> Option<PotionUse> {
        let potion = self.inventory.take_potion(index)?;
        let (before, after) = match potion.resource() {
            Resource::Health => {
                let before = self.health.current;
                self.heal(potion.amount());
                (before, self.health.current)
            }
            Resource::Mana => {
                let before = self.mana.current;
                self.restore_mana(potion.amount());
                (before, self.mana.current)
            }
        };
        self.battle_log.push(format!("{} used {}!", self.name, potion.name()));
        Some(PotionUse { potion, before, after })
    }

    // ========================================================================
    // Combat actions
    // ========================================================================

    /// Basic attack for current attack. Returns the health the target lost.
    pub fn attack(&mut self, target: &mut Unit) -> i32 {
        let damage = self.attack_power();
        let before = target.health();
        self.battle_log.push(format!("{} attacks {} for {} damage!", self.name, target.name, damage));
        let lost = target.take_damage(damage, None);
        self.log_health_change(target, before);
        lost
    }

    /// Use a skill. Returns false, changing nothing but the log, when mana is short.
    pub fn use_skill(&mut self, slot: SkillSlot, target: &mut Unit) -> bool {
        let skill = self.skills.get(slot).clone();
        if !self.mana.spend(skill.cost) {
            self.battle_log.push(format!("Not enough MP for {}!", skill.name));
            return false;
        }
        log::debug!("{} uses {} ({} MP left)", self.name, skill.name, self.mana.current);

        let effect = skill.effect;
        let caster = self.name.clone();
        let target_health = target.health();
        let target_attack = target.attack_power();
        let own_health = self.health();
        let own_attack = self.attack_power();

        let mut damage = 0;
        match effect.strike {
            Some(strike) => {
                damage = combat::strike_damage(self.attack_power(), strike.bonus);
                if strike.hits > 1 {
                    self.battle_log.push(format!(
                        "{} uses {} on {}! ({} hits of {} damage)",
                        caster, skill.name, target.name, strike.hits, damage
                    ));
                } else {
                    self.battle_log.push(format!(
                        "{} uses {} on {} for {} damage!",
                        caster, skill.name, target.name, damage
                    ));
                }
                for _ in 0..strike.hits {
                    if !target.is_alive() {
                        break;
                    }
                    target.take_damage(damage, None);
                }
            }
            None if effect.inflict.is_some() => {
                self.battle_log.push(format!("{} uses {} on {}!", caster, skill.name, target.name));
            }
            None => {
                self.battle_log.push(format!("{} uses {}!", caster, skill.name));
            }
        }

        if let Some((kind, duration)) = effect.inflict {
            if target.is_alive() {
                target.add_status(kind, duration, &caster);
            }
        }
        if let Some((kind, duration)) = effect.empower {
            self.add_status(kind, duration, &caster);
        }
        match effect.recovery {
            Recovery::None => {}
            Recovery::HalfOfDamage => {
                self.heal(damage / 2);
            }
            Recovery::Flat(amount) => {
                self.heal(amount);
            }
        }

        if effect.strike.is_some() {
            self.log_health_change(target, target_health);
        }
        if let Some((kind, duration)) = effect.inflict {
            if kind.is_attack_modifier() {
                self.battle_log.push(format!(
                    "{}'s ATK: {} -> {}",
                    target.name, target_attack, target.attack_power()
                ));
            } else if kind == StatusKind::Stun && target.has_status(kind) {
                self.battle_log.push(format!("{} is stunned for {} turn!", target.name, duration));
            } else if kind.is_dot() && target.has_status(kind) {
                self.battle_log.push(format!(
                    "{} is afflicted with {} for {} turns!",
                    target.name, kind.name(), duration
                ));
            }
        }
        if let Some((kind, _)) = effect.empower {
            if kind.is_attack_modifier() {
                self.battle_log.push(format!("{}'s ATK: {} -> {}", caster, own_attack, self.attack_power()));
            }
        }
        if effect.recovery != Recovery::None {
            self.battle_log.push(format!(
                "{}'s HP: {} -> {}/{}",
                caster, own_health, self.health.current, self.health.max
            ));
        }
        true
    }

    pub fn use_skill1(&mut self, target: &mut Unit) -> bool {
        self.use_skill(SkillSlot::First, target)
    }

    pub fn use_skill2(&mut self, target: &mut Unit) -> bool {
        self.use_skill(SkillSlot::Second, target)
    }

    pub fn use_skill3(&mut self, target: &mut Unit) -> bool {
        self.use_skill(SkillSlot::Third, target)
    }

    fn log_health_change(&mut self, target: &Unit, before: i32) {
        self.battle_log.push(format!(
            "{}'s HP: {} -> {}/{}",
            target.name, before, target.health(), target.max_health()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::status::{POISON_TICK_DAMAGE, STRENGTH_UP_BONUS};
    use crate::entities::{create_boss, create_unit, HeroClass};
    use crate::items::templates;

    fn warrior() -> Unit {
        create_unit(HeroClass::Warrior, "Conan")
    }

    fn boss() -> Unit {
        create_boss(1).expect("stage 1 boss")
    }

    fn drain_mana(unit: &mut Unit, keep: i32) {
        let spend = unit.mana() - keep;
        assert!(unit.mana.spend(spend));
    }

    #[test]
    fn test_take_damage_subtracts_defense() {
        let mut unit = warrior();
        assert_eq!(unit.take_damage(20, None), 18);
        assert_eq!(unit.health(), 102);
        assert!(unit.battle_log().iter().any(|m| m == "Conan blocked 2 damage!"));
    }

    #[test]
    fn test_take_damage_at_least_one() {
        let mut unit = warrior();
        unit.increase_defense(50);
        assert_eq!(unit.take_damage(10, None), 1);
        assert_eq!(unit.health(), 119);
    }

    #[test]
    fn test_take_damage_never_below_zero() {
        let mut unit = warrior();
        unit.take_damage(115, None);
        assert_eq!(unit.health(), 7);
        assert_eq!(unit.take_damage(500, None), 7);
        assert_eq!(unit.health(), 0);
        assert!(!unit.is_alive());
    }

    #[test]
    fn test_heal_from_low_health() {
        let mut unit = warrior();
        unit.health.current = 5;
        assert_eq!(unit.heal(30), 30);
        assert_eq!(unit.health(), 35);
        assert_eq!(unit.max_health(), 120);
        assert_eq!(unit.battle_log().last().unwrap(), "Conan healed 30 HP! (35/120)");
    }

    #[test]
    fn test_heal_and_mana_clamp() {
        let mut unit = warrior();
        unit.take_damage(12, None);
        assert_eq!(unit.heal(30), 10);
        assert_eq!(unit.health(), 120);

        drain_mana(&mut unit, 45);
        assert_eq!(unit.restore_mana(20), 5);
        assert_eq!(unit.battle_log().last().unwrap(), "Conan restored 5 MP! (50/50)");
    }

    #[test]
    fn test_increase_max_raises_current() {
        let mut unit = warrior();
        unit.take_damage(42, None);
        unit.increase_max_health(30);
        assert_eq!(unit.max_health(), 150);
        assert_eq!(unit.health(), 110);

        unit.increase_max_mana(10);
        assert_eq!((unit.mana(), unit.max_mana()), (60, 60));
    }

    #[test]
    fn test_poison_tick_then_expires() {
        let mut unit = warrior();
        unit.add_status(StatusKind::Poison, 1, "Goblin King");
        unit.process_status_effects();
        assert_eq!(unit.health(), 120 - POISON_TICK_DAMAGE);
        assert!(!unit.has_status(StatusKind::Poison));
        assert!(unit.battle_log().iter().any(|m| m == "Conan's Poison wore off!"));
    }

    #[test]
    fn test_dot_ignores_defense() {
        let mut unit = warrior();
        unit.increase_defense(40);
        unit.add_status(StatusKind::Bleed, 2, "Robin");
        unit.process_status_effects();
        assert_eq!(unit.health(), 117);
        assert_eq!(unit.status_duration(StatusKind::Bleed), 1);
    }

    #[test]
    fn test_no_processing_when_defeated() {
        let mut unit = warrior();
        unit.add_status(StatusKind::Poison, 3, "Goblin King");
        unit.take_damage(500, None);
        unit.process_status_effects();
        assert_eq!(unit.status_duration(StatusKind::Poison), 3);
        assert_eq!(unit.health(), 0);
    }

    #[test]
    fn test_strength_up_expiry_restores_attack() {
        let mut unit = warrior();
        for _ in 0..3 {
            unit.add_status(StatusKind::StrengthUp, 2, "Conan");
            assert_eq!(unit.attack_power(), 20 + STRENGTH_UP_BONUS);
            unit.process_status_effects();
            unit.process_status_effects();
            assert!(!unit.has_status(StatusKind::StrengthUp));
            assert_eq!(unit.attack_power(), unit.base_attack());
        }
        assert_eq!(unit.attack_power(), 20);
    }

    #[test]
    fn test_warrior_attacks_stage_one_boss() {
        let mut hero = warrior();
        let mut boss = boss();
        assert_eq!(boss.health(), 90);
        assert_eq!(hero.attack(&mut boss), 20);
        assert_eq!(boss.health(), 70);
    }

    #[test]
    fn test_skill_fails_without_mana() {
        let mut hero = warrior();
        let mut boss = boss();
        drain_mana(&mut hero, 10);

        assert!(!hero.use_skill1(&mut boss));
        assert_eq!(hero.mana(), 10);
        assert_eq!(boss.health(), 90);
        assert!(boss.statuses().is_empty());
        assert_eq!(hero.battle_log().last().unwrap(), "Not enough MP for Power Strike!");
    }

    #[test]
    fn test_power_strike() {
        let mut hero = warrior();
        let mut boss = boss();
        assert!(hero.use_skill1(&mut boss));
        assert_eq!(hero.mana(), 35);
        assert_eq!(boss.health(), 90 - 45);
    }

    #[test]
    fn test_demoralizing_shout_weakens_target() {
        let mut hero = warrior();
        let mut boss = boss();
        assert!(hero.use_skill2(&mut boss));
        assert_eq!(boss.status_duration(StatusKind::Weakness), 3);
        assert_eq!(boss.attack_power(), 10);
        assert_eq!(boss.base_attack(), 15);
    }

    #[test]
    fn test_life_drain_heals_half() {
        let mut mage = create_unit(HeroClass::Mage, "Merlin");
        let mut boss = boss();
        mage.take_damage(40, None);
        assert!(mage.use_skill3(&mut boss));
        assert_eq!(boss.health(), 90 - 30);
        assert_eq!(mage.health(), 30 + 15);
    }

    #[test]
    fn test_double_shot_hits_twice() {
        let mut archer = create_unit(HeroClass::Archer, "Robin");
        let mut boss = create_boss(3).expect("stage 3 boss");
        assert!(archer.use_skill3(&mut boss));
        assert_eq!(boss.health(), 130 - 2 * (30 - 2));
    }

    #[test]
    fn test_add_item_routes_potions() {
        let mut hero = warrior();
        hero.add_item(templates::health_potion());
        hero.add_item(templates::fire_sword());
        assert_eq!(hero.potions().len(), 1);
        assert_eq!(hero.equipment().len(), 1);
        assert_eq!(hero.attack_power(), 35);
        assert!(hero.battle_log().iter().any(|m| m == "Conan equipped Fire Sword!"));
    }

    #[test]
    fn test_add_item_reports_pickup() {
        let mut hero = warrior();
        assert_eq!(hero.add_item(templates::health_potion()), Pickup::Stored { slot: 0 });
        assert_eq!(hero.add_item(templates::mana_potion()), Pickup::Stored { slot: 1 });
        assert_eq!(hero.add_item(templates::fire_sword()), Pickup::Equipped);
        assert_eq!(hero.potions()[1].name(), "Mana Potion");
    }

    #[test]
    fn test_zero_duration_status_is_silent() {
        let mut hero = warrior();
        hero.add_status(StatusKind::Poison, 2, "Goblin King");
        hero.clear_battle_log();

        hero.add_status(StatusKind::Poison, 0, "Goblin King");
        assert!(!hero.has_status(StatusKind::Poison));
        assert!(hero.battle_log().is_empty());
    }

    #[test]
    fn test_use_potion() {
        let mut hero = warrior();
        hero.add_item(templates::mana_potion());
        drain_mana(&mut hero, 10);

        let used = hero.use_potion(0).expect("potion");
        assert_eq!((used.before, used.after), (10, 30));
        assert_eq!(used.restored(), 20);
        assert!(hero.potions().is_empty());
    }

    #[test]
    fn test_use_potion_out_of_range() {
        let mut hero = warrior();
        hero.add_item(templates::health_potion());
        hero.clear_battle_log();
        assert!(hero.use_potion(3).is_none());
        assert_eq!(hero.potions().len(), 1);
        assert!(hero.battle_log().is_empty());
    }
}
