//! Error types for the memory game.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid set count: {requested} (expected 1..={max})")]
    InvalidSetCount { requested: usize, max: usize },

    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
