//! Application driver tying a session to a renderer and a clock.

mod game;

pub use game::MemoryGame;
