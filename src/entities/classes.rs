//! Hero classes
//!
//! Each class is a stat line plus a table of three skills. Adding a class
//! means adding a variant here; the combat engine does not change.

use crate::combat::StatusKind;
use crate::progression::{Recovery, Skill, SkillEffect, SkillTable};

use super::unit::{BaseStats, Unit};

/// Playable classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroClass {
    Warrior,
    Archer,
    Mage,
}

/// What kind of combatant a unit is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Hero(HeroClass),
    /// Boss of the given stage
    Boss(u32),
}

impl Archetype {
    pub fn is_boss(&self) -> bool {
        matches!(self, Archetype::Boss(_))
    }
}

impl HeroClass {
    pub const ALL: [HeroClass; 3] = [HeroClass::Warrior, HeroClass::Archer, HeroClass::Mage];

    pub fn name(&self) -> &'static str {
        match self {
            HeroClass::Warrior => "Warrior",
            HeroClass::Archer => "Archer",
            HeroClass::Mage => "Mage",
        }
    }

    /// Short pitch shown on the class selection screen
    pub fn tagline(&self) -> &'static str {
        match self {
            HeroClass::Warrior => "High HP, Medium MP, Physical skills",
            HeroClass::Archer => "Medium HP, Poison/Bleed skills",
            HeroClass::Mage => "Low HP, High MP, Magic skills",
        }
    }

    pub fn base_stats(&self) -> BaseStats {
        match self {
            HeroClass::Warrior => BaseStats::new(120, 50, 20, 2),
            HeroClass::Archer => BaseStats::new(80, 35, 30, 1),
            HeroClass::Mage => BaseStats::new(70, 80, 25, 0),
        }
    }

    pub fn skills(&self) -> SkillTable {
        match self {
            HeroClass::Warrior => SkillTable::new(
                Skill::new("Power Strike", 15, SkillEffect::strike(25)),
                Skill::new("Demoralizing Shout", 10, SkillEffect::debuff(StatusKind::Weakness, 3)),
                Skill::new("Battle Rage", 20, SkillEffect::buff(StatusKind::StrengthUp, 3)),
            ),
            HeroClass::Archer => SkillTable::new(
                Skill::new("Poison Arrow", 10, SkillEffect::strike(0).inflicts(StatusKind::Poison, 3)),
                Skill::new("Piercing Shot", 15, SkillEffect::strike(10).inflicts(StatusKind::Bleed, 2)),
                Skill::new("Double Shot", 20, SkillEffect::strike(0).hits(2)),
            ),
            HeroClass::Mage => SkillTable::new(
                Skill::new("Fireball", 20, SkillEffect::strike(20)),
                Skill::new("Ice Nova", 15, SkillEffect::debuff(StatusKind::Stun, 1)),
                Skill::new("Life Drain", 25, SkillEffect::strike(5).recovers(Recovery::HalfOfDamage)),
            ),
        }
    }
}

/// Create a fresh hero of the given class
pub fn create_unit(class: HeroClass, name: impl Into<String>) -> Unit {
    Unit::new(name, Archetype::Hero(class), class.base_stats(), class.skills())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::SkillSlot;

    #[test]
    fn test_warrior_stats() {
        let unit = create_unit(HeroClass::Warrior, "Conan");
        assert_eq!(unit.health(), 120);
        assert_eq!(unit.max_mana(), 50);
        assert_eq!(unit.attack_power(), 20);
        assert_eq!(unit.defense(), 2);
        assert_eq!(unit.archetype(), Archetype::Hero(HeroClass::Warrior));
    }

    #[test]
    fn test_skill_tables() {
        let costs: Vec<Vec<i32>> = HeroClass::ALL
            .iter()
            .map(|class| class.skills().iter().map(|(_, s)| s.cost).collect())
            .collect();
        assert_eq!(costs, vec![vec![15, 10, 20], vec![10, 15, 20], vec![20, 15, 25]]);

        let mage = HeroClass::Mage.skills();
        assert_eq!(mage.get(SkillSlot::Second).name, "Ice Nova");
    }

    #[test]
    fn test_ice_nova_stuns() {
        let mut mage = create_unit(HeroClass::Mage, "Merlin");
        let mut target = create_unit(HeroClass::Warrior, "Dummy");
        assert!(mage.use_skill2(&mut target));
        assert!(target.has_status(StatusKind::Stun));
        assert_eq!(target.health(), 120);
        assert_eq!(mage.mana(), 65);
    }

    #[test]
    fn test_battle_rage_buffs_self() {
        let mut warrior = create_unit(HeroClass::Warrior, "Conan");
        let mut target = create_unit(HeroClass::Mage, "Dummy");
        assert!(warrior.use_skill3(&mut target));
        assert_eq!(warrior.attack_power(), 30);
        assert!(target.statuses().is_empty());
    }

    #[test]
    fn test_poison_arrow() {
        let mut archer = create_unit(HeroClass::Archer, "Robin");
        let mut target = create_unit(HeroClass::Mage, "Dummy");
        assert!(archer.use_skill1(&mut target));
        assert_eq!(target.health(), 40);
        assert_eq!(target.status_duration(StatusKind::Poison), 3);
    }
}
