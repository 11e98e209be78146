//! Progression systems

pub mod skills;
pub mod upgrades;

pub use skills::{Skill, SkillSlot, SkillTable, SkillEffect, Strike, Recovery};
pub use upgrades::Upgrade;
