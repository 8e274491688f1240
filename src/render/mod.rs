//! Rendering collaborator.
//!
//! The game core does not draw anything. A front end implements
//! `Renderer`; the driver feeds it the effects the controller emits and
//! runs deferred effects from a `DeferredQueue` on its own clock.
//!
//! ## Key Types
//!
//! - `CardFace`: how a card should look
//! - `Renderer`: the drawing/notification seam
//! - `DeferredQueue`: fire-and-forget delayed effects
//! - `TextRenderer`: a plain-text renderer for terminals

mod schedule;
mod text;

pub use schedule::DeferredQueue;
pub use text::TextRenderer;

use serde::{Deserialize, Serialize};

use crate::board::SurfaceSize;
use crate::core::{CardIndex, CardState, CardValue};

/// Window title used by front ends.
pub const TITLE: &str = "Memory Game";

/// How a card is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Cover visible, value hidden.
    Covered,
    /// Value visible in the normal text color.
    Revealed,
    /// Value visible in the matched-pair color.
    Highlighted,
}

impl From<CardState> for CardFace {
    fn from(state: CardState) -> Self {
        match state {
            CardState::Hidden => CardFace::Covered,
            CardState::Revealed => CardFace::Revealed,
            CardState::Matched => CardFace::Highlighted,
        }
    }
}

/// The end-of-game message.
///
/// ```
/// use memory_game::render::win_message;
///
/// assert_eq!(
///     win_message(3, 4),
///     "Congratulations!\n\nYou've completed 3 card sets in 4 turns"
/// );
/// ```
#[must_use]
pub fn win_message(set_count: usize, turns: u32) -> String {
    format!(
        "Congratulations!\n\nYou've completed {} card sets in {} turns",
        set_count, turns
    )
}

/// Rendering and notification seam.
///
/// Implementations draw whatever the controller asks for; they hold no
/// game rules. All calls arrive on the input-handling thread.
pub trait Renderer {
    /// A new board was dealt; resize the play surface.
    fn render_board_size(&mut self, set_count: usize, surface: SurfaceSize);

    /// Draw a single card.
    fn render_card(&mut self, index: CardIndex, value: CardValue, face: CardFace);

    /// Update the turn counter.
    fn render_turns(&mut self, turns: u32);

    /// The player cleared the board.
    fn notify_win(&mut self, set_count: usize, turns: u32);
}
