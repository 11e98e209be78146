//! Status effects system
//!
//! Timed modifiers (poison, bleed, stun, strength up, weakness) and their
//! per-tick behavior. The kind table below is fixed at compile time and
//! never changes while the game runs.

use std::collections::BTreeMap;

/// Damage dealt by one poison tick
pub const POISON_TICK_DAMAGE: i32 = 5;
/// Damage dealt by one bleed tick
pub const BLEED_TICK_DAMAGE: i32 = 3;
/// Attack bonus while Strength Up is active
pub const STRENGTH_UP_BONUS: i32 = 10;
/// Attack penalty while Weakness is active
pub const WEAKNESS_PENALTY: i32 = 5;
/// Weakness never drops attack below this
pub const MIN_ATTACK: i32 = 1;

/// Kinds of status effect.
///
/// Declaration order is also processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusKind {
    /// Takes damage every turn
    Poison,
    /// Takes lighter damage every turn
    Bleed,
    /// Skips the next turn
    Stun,
    /// Increased attack
    StrengthUp,
    /// Decreased attack
    Weakness,
}

impl StatusKind {
    pub const ALL: [StatusKind; 5] = [
        StatusKind::Poison,
        StatusKind::Bleed,
        StatusKind::Stun,
        StatusKind::StrengthUp,
        StatusKind::Weakness,
    ];

    /// Get display name for this effect
    pub fn name(&self) -> &'static str {
        match self {
            StatusKind::Poison => "Poison",
            StatusKind::Bleed => "Bleed",
            StatusKind::Stun => "Stun",
            StatusKind::StrengthUp => "Strength Up",
            StatusKind::Weakness => "Weakness",
        }
    }

    /// Get display color for this effect (RGB)
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            StatusKind::Poison => (100, 200, 100),
            StatusKind::Bleed => (200, 50, 50),
            StatusKind::Stun => (200, 100, 255),
            StatusKind::StrengthUp => (255, 150, 100),
            StatusKind::Weakness => (150, 100, 150),
        }
    }

    /// Unmitigated damage dealt each tick (0 for non-damaging effects)
    pub fn tick_damage(&self) -> i32 {
        match self {
            StatusKind::Poison => POISON_TICK_DAMAGE,
            StatusKind::Bleed => BLEED_TICK_DAMAGE,
            _ => 0,
        }
    }

    /// Is this a DoT effect?
    pub fn is_dot(&self) -> bool {
        matches!(self, StatusKind::Poison | StatusKind::Bleed)
    }

    /// Does this effect change the bearer's attack?
    pub fn is_attack_modifier(&self) -> bool {
        matches!(self, StatusKind::StrengthUp | StatusKind::Weakness)
    }
}

/// One status advancing by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTick {
    pub kind: StatusKind,
    /// Unmitigated damage this tick deals to the bearer
    pub damage: i32,
    /// The status ran out and has been removed
    pub expired: bool,
}

/// Result of ticking status effects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTickResult {
    /// Every active status, in processing order
    pub ticks: Vec<StatusTick>,
}

/// Active status effects on one combatant, keyed by kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusEffects {
    effects: BTreeMap<StatusKind, u32>,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a status, replacing any remaining duration of the same kind.
    /// A zero duration removes the status.
    pub fn apply(&mut self, kind: StatusKind, duration: u32) {
        if duration == 0 {
            self.effects.remove(&kind);
        } else {
            self.effects.insert(kind, duration);
        }
    }

    /// Remove a status, returns whether it was active
    pub fn remove(&mut self, kind: StatusKind) -> bool {
        self.effects.remove(&kind).is_some()
    }

    /// Check if an effect is active
    pub fn has(&self, kind: StatusKind) -> bool {
        self.duration(kind) > 0
    }

    /// Remaining duration (0 if not present)
    pub fn duration(&self, kind: StatusKind) -> u32 {
        self.effects.get(&kind).copied().unwrap_or(0)
    }

    /// Active effects with their remaining durations, in processing order
    pub fn iter(&self) -> impl Iterator<Item = (StatusKind, u32)> + '_ {
        self.effects.iter().map(|(kind, duration)| (*kind, *duration))
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Attack after the active modifiers are applied to `base`
    pub fn modified_attack(&self, base: i32) -> i32 {
        let mut attack = base;
        if self.has(StatusKind::StrengthUp) {
            attack += STRENGTH_UP_BONUS;
        }
        if self.has(StatusKind::Weakness) {
            attack = (attack - WEAKNESS_PENALTY).max(MIN_ATTACK);
        }
        attack
    }

    /// Advance every active effect by one tick.
    ///
    /// Durations are decremented and expired entries removed; the caller
    /// applies the reported damage to the bearer.
    pub fn tick(&mut self) -> StatusTickResult {
        let mut result = StatusTickResult::default();

        for (kind, duration) in self.effects.iter_mut() {
            *duration = duration.saturating_sub(1);
            result.ticks.push(StatusTick {
                kind: *kind,
                damage: kind.tick_damage(),
                expired: *duration == 0,
            });
        }

        self.effects.retain(|_, duration| *duration > 0);
        result
    }
}
