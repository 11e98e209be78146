//! Combat system

pub mod stats;
pub mod damage;
pub mod status;

pub use stats::Pool;
pub use damage::{mitigate, blocked, strike_damage, MIN_DAMAGE};
pub use status::{StatusKind, StatusEffects, StatusTick, StatusTickResult};
