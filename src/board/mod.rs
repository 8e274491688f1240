//! Board model and grid geometry.
//!
//! - `Board`: the shuffled cards, per-card state, and the win check
//! - `Layout`: maps card indices to grid cells and pixels, and clicks back

mod deck;
pub mod layout;

pub use deck::Board;
pub use layout::{GridCell, Layout, SurfaceSize};
