//! # memory-game
//!
//! A single-player memory-matching card game.
//!
//! A grid of face-down cards is revealed two at a time. Matched pairs stay
//! face up and are highlighted after a short delay; mismatched pairs flip
//! back. The game is won when every card is face up.
//!
//! ## Design Principles
//!
//! 1. **Renderer-Agnostic**: The core never draws. It emits `Effect`s and a
//!    front end implements `Renderer`.
//!
//! 2. **Explicit State**: Each card is `Hidden`, `Revealed` or `Matched`;
//!    the turn phase and turn count derive from the guess history.
//!
//! 3. **Deterministic**: Decks are shuffled with a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Card identity and state, errors, RNG, configuration
//! - `board`: The board model and grid geometry
//! - `session`: The two-click turn protocol and its effects
//! - `render`: The renderer seam, deferred effects, a text renderer
//! - `app`: The driver wiring a session to a renderer

pub mod core;
pub mod board;
pub mod session;
pub mod render;
pub mod app;

// Re-export commonly used types
pub use crate::core::{
    Card, CardIndex, CardState, CardValue,
    GameConfig, Timing, MAX_SETS,
    GameError, Result,
    GameRng,
};

pub use crate::board::{Board, GridCell, Layout, SurfaceSize};

pub use crate::session::{
    ClickOutcome, Effect, EffectBatch, GameSession, IgnoreReason, PairOutcome, TurnPhase,
};

pub use crate::render::{CardFace, DeferredQueue, Renderer, TextRenderer};

pub use crate::app::MemoryGame;
