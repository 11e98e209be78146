//! Skill system
//!
//! Every combatant carries a fixed table of three mana-gated skills. A skill
//! is pure data: a name, a cost and a closed formula over the caster's
//! current attack. Resolution lives on [`Unit::use_skill`].
//!
//! [`Unit::use_skill`]: crate::entities::Unit::use_skill

use crate::combat::StatusKind;

/// Which of the three skills to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillSlot {
    First,
    Second,
    Third,
}

impl SkillSlot {
    pub const ALL: [SkillSlot; 3] = [SkillSlot::First, SkillSlot::Second, SkillSlot::Third];

    /// Zero-based position in the table
    pub fn index(&self) -> usize {
        match self {
            SkillSlot::First => 0,
            SkillSlot::Second => 1,
            SkillSlot::Third => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Direct damage part of a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    /// Added to the caster's current attack
    pub bonus: i32,
    /// Number of separate hits
    pub hits: u32,
}

/// Self-healing part of a skill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Recovery {
    #[default]
    None,
    /// Heal half of the strike's raw damage
    HalfOfDamage,
    /// Heal a fixed amount
    Flat(i32),
}

/// Effect type of the skill.
///
/// Parts resolve in field order: strike, target status, caster status,
/// caster heal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillEffect {
    pub strike: Option<Strike>,
    /// Status put on the target
    pub inflict: Option<(StatusKind, u32)>,
    /// Status put on the caster
    pub empower: Option<(StatusKind, u32)>,
    pub recovery: Recovery,
}

impl SkillEffect {
    /// A single hit of current attack plus `bonus`
    pub const fn strike(bonus: i32) -> Self {
        Self {
            strike: Some(Strike { bonus, hits: 1 }),
            inflict: None,
            empower: None,
            recovery: Recovery::None,
        }
    }

    /// No damage, only a status on the target
    pub const fn debuff(kind: StatusKind, duration: u32) -> Self {
        Self {
            strike: None,
            inflict: Some((kind, duration)),
            empower: None,
            recovery: Recovery::None,
        }
    }

    /// No damage, only a status on the caster
    pub const fn buff(kind: StatusKind, duration: u32) -> Self {
        Self {
            strike: None,
            inflict: None,
            empower: Some((kind, duration)),
            recovery: Recovery::None,
        }
    }

    pub fn hits(mut self, hits: u32) -> Self {
        if let Some(strike) = self.strike.as_mut() {
            strike.hits = hits;
        }
        self
    }

    pub fn inflicts(mut self, kind: StatusKind, duration: u32) -> Self {
        self.inflict = Some((kind, duration));
        self
    }

    pub fn recovers(mut self, recovery: Recovery) -> Self {
        self.recovery = recovery;
        self
    }
}

/// A named, mana-gated special action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    /// Mana cost
    pub cost: i32,
    pub effect: SkillEffect,
}

impl Skill {
    pub fn new(name: impl Into<String>, cost: i32, effect: SkillEffect) -> Self {
        Self {
            name: name.into(),
            cost,
            effect,
        }
    }

    /// Short rules text for menus
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        let e = &self.effect;
        if let Some(strike) = e.strike {
            let hit = if strike.bonus > 0 {
                format!("ATK+{} damage", strike.bonus)
            } else {
                "ATK damage".to_string()
            };
            if strike.hits > 1 {
                parts.push(format!("{} x{}", hit, strike.hits));
            } else {
                parts.push(hit);
            }
        }
        if let Some((kind, duration)) = e.inflict {
            parts.push(format!("{} {} on target", kind.name(), duration));
        }
        if let Some((kind, duration)) = e.empower {
            parts.push(format!("{} {} on self", kind.name(), duration));
        }
        match e.recovery {
            Recovery::None => {}
            Recovery::HalfOfDamage => parts.push("heal half the damage".to_string()),
            Recovery::Flat(amount) => parts.push(format!("heal {}", amount)),
        }
        parts.join(", ")
    }
}

/// The three skills of one combatant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTable([Skill; 3]);

impl SkillTable {
    pub fn new(first: Skill, second: Skill, third: Skill) -> Self {
        Self([first, second, third])
    }

    pub fn get(&self, slot: SkillSlot) -> &Skill {
        &self.0[slot.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkillSlot, &Skill)> {
        SkillSlot::ALL.into_iter().zip(self.0.iter())
    }
}
