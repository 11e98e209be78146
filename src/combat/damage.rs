//! Damage calculation
//!
//! Flat defense mitigation with a guaranteed minimum hit.

/// Every hit that lands deals at least this much
pub const MIN_DAMAGE: i32 = 1;

/// Damage left after defense soaks its share of a raw hit
pub fn mitigate(raw: i32, defense: i32) -> i32 {
    (raw - defense.max(0)).max(MIN_DAMAGE)
}

/// How much of a raw hit defense absorbed
pub fn blocked(raw: i32, mitigated: i32) -> i32 {
    (raw - mitigated).max(0)
}

/// Raw damage of a strike: the attacker's current attack plus a flat skill bonus
pub fn strike_damage(attack: i32, bonus: i32) -> i32 {
    (attack + bonus).max(0)
}
