//! Game controller: the two-click turn protocol.
//!
//! `GameSession` turns clicks into board transitions and reports what the
//! renderer should do as an `EffectBatch`. It never renders or waits.
//!
//! ## Example
//!
//! ```
//! use memory_game::board::Board;
//! use memory_game::core::{CardIndex, GameConfig};
//! use memory_game::session::{ClickOutcome, GameSession};
//!
//! let board = Board::from_values(&[0, 0]).unwrap();
//! let mut session = GameSession::with_board(board, &GameConfig::new(1)).unwrap();
//!
//! session.select(CardIndex::new(0));
//! let (outcome, _effects) = session.select(CardIndex::new(1));
//!
//! assert!(matches!(outcome, ClickOutcome::Pair(pair) if pair.won));
//! assert_eq!(session.turns(), 1);
//! ```

mod effect;
mod game;

pub use effect::{Effect, EffectBatch};
pub use game::{ClickOutcome, GameSession, IgnoreReason, PairOutcome, TurnPhase};
