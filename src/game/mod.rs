//! Game module - stage loop, battles and turn order

pub mod battle;
pub mod driver;
pub mod error;
pub mod run;
pub mod turn;

pub use battle::{choose_boss_action, Action, Battle, BattleOutcome, Resolution, TurnReport};
pub use driver::Driver;
pub use error::GameError;
pub use run::{Run, RunOutcome};
pub use turn::{coin_flip, flip_coin, CoinFace, CoinToss, Side, TurnManager};
