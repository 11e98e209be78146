//! Errors raised while playing a run

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("item choice {index} is out of range ({options} items offered)")]
    InvalidItemChoice { index: usize, options: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
