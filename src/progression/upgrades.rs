//! Stage upgrades
//!
//! One permanent boost chosen after each of the first four boss kills.

use crate::entities::Unit;

pub const HEAL_AMOUNT: i32 = 30;
pub const MANA_AMOUNT: i32 = 20;
pub const ATTACK_AMOUNT: i32 = 5;
pub const DEFENSE_AMOUNT: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upgrade {
    Heal,
    RestoreMana,
    Attack,
    Defense,
}

impl Upgrade {
    pub const ALL: [Upgrade; 4] = [
        Upgrade::Heal,
        Upgrade::RestoreMana,
        Upgrade::Attack,
        Upgrade::Defense,
    ];

    /// Menu label
    pub fn label(&self) -> String {
        match self {
            Upgrade::Heal => format!("Heal (+{} HP)", HEAL_AMOUNT),
            Upgrade::RestoreMana => format!("Restore Mana (+{} MP)", MANA_AMOUNT),
            Upgrade::Attack => format!("Increase Attack (+{} ATK)", ATTACK_AMOUNT),
            Upgrade::Defense => format!("Increase Defense (+{} DEF)", DEFENSE_AMOUNT),
        }
    }

    pub fn apply(&self, unit: &mut Unit) {
        log::debug!("{} takes upgrade {:?}", unit.name(), self);
        match self {
            Upgrade::Heal => {
                unit.heal(HEAL_AMOUNT);
            }
            Upgrade::RestoreMana => {
                unit.restore_mana(MANA_AMOUNT);
            }
            Upgrade::Attack => unit.increase_attack(ATTACK_AMOUNT),
            Upgrade::Defense => unit.increase_defense(DEFENSE_AMOUNT),
        }
    }
}
