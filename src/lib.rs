//! Gauntlet - A turn-based boss rush
//!
//! Pick a class, face five bosses one after another, and grow stronger
//! with every victory.

pub mod combat;
pub mod data;
pub mod entities;
pub mod game;
pub mod items;
pub mod progression;
pub mod ui;

// Re-export commonly used types
pub use entities::{create_boss, create_unit, HeroClass, Unit};
pub use game::{Action, Battle, Driver, GameError, Run, RunOutcome};
