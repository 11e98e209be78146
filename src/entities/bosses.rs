//! Boss creation
//!
//! One boss guards each of the five stages. All bosses share the same skill
//! formulas; only their names and stage-scaled stats differ.

use crate::combat::StatusKind;
use crate::progression::{Recovery, Skill, SkillEffect, SkillTable};

use super::classes::Archetype;
use super::unit::{BaseStats, Unit};

/// Number of stages in a run
pub const STAGE_COUNT: u32 = 5;
/// Every boss starts with this much mana
pub const BOSS_MANA: i32 = 60;

/// Names that make a boss distinct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossTemplate {
    pub name: &'static str,
    pub skill_names: [&'static str; 3],
}

/// Bosses in stage order
pub const BOSSES: [BossTemplate; STAGE_COUNT as usize] = [
    BossTemplate {
        name: "Goblin King",
        skill_names: ["Goblin Smash", "Poison Cloud", "Stunning Roar"],
    },
    BossTemplate {
        name: "Shadow Knight",
        skill_names: ["Shadow Blade", "Dark Mist", "Shadow Bind"],
    },
    BossTemplate {
        name: "Crimson Wraith",
        skill_names: ["Crimson Slash", "Blood Curse", "Crimson Howl"],
    },
    BossTemplate {
        name: "Lich Queen",
        skill_names: ["Necroflame", "Soul Drain", "Necrotic Heal"],
    },
    BossTemplate {
        name: "Doom Reaper",
        skill_names: ["Void Strike", "Void Corruption", "Void Stasis"],
    },
];

impl BossTemplate {
    /// Template for a 1-based stage
    pub fn for_stage(stage: u32) -> Option<&'static BossTemplate> {
        let index = stage.checked_sub(1)? as usize;
        BOSSES.get(index)
    }

    pub fn skills(&self) -> SkillTable {
        let [first, second, third] = self.skill_names;
        SkillTable::new(
            Skill::new(first, 15, SkillEffect::strike(20)),
            Skill::new(second, 20, SkillEffect::strike(15).inflicts(StatusKind::Poison, 3)),
            Skill::new(
                third,
                25,
                SkillEffect::strike(10)
                    .inflicts(StatusKind::Stun, 1)
                    .recovers(Recovery::Flat(20)),
            ),
        )
    }

    /// Build this boss scaled for `stage`
    pub fn spawn(&self, stage: u32) -> Unit {
        log::info!("Spawning {} for stage {}", self.name, stage);
        Unit::new(self.name, Archetype::Boss(stage), boss_stats(stage), self.skills())
    }
}

/// Stage scaling: attack 10+5s, health 70+20s, defense s-1
pub fn boss_stats(stage: u32) -> BaseStats {
    let stage = stage as i32;
    BaseStats::new(70 + 20 * stage, BOSS_MANA, 10 + 5 * stage, (stage - 1).max(0))
}

/// Create the boss for a 1-based stage
pub fn create_boss(stage: u32) -> Option<Unit> {
    BossTemplate::for_stage(stage).map(|template| template.spawn(stage))
}
