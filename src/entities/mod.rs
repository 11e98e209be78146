//! Combatants: the hero classes, the bosses, and the unit they share

pub mod unit;
pub mod classes;
pub mod bosses;

pub use unit::{Unit, BaseStats, Pickup};
pub use classes::{HeroClass, Archetype, create_unit};
pub use bosses::{BossTemplate, BOSSES, STAGE_COUNT, create_boss, boss_stats};
