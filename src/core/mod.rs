//! Core types: card identity and state, errors, RNG, configuration.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use card::{Card, CardIndex, CardState, CardValue};
pub use config::{default_set_count, GameConfig, Timing, MAX_SETS};
pub use error::{GameError, Result};
pub use rng::GameRng;
