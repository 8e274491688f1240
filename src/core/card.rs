//! Card identification and per-card state.
//!
//! ## CardIndex
//!
//! A card's identity is its position on the board: 0-based, row-major.
//!
//! ## CardState
//!
//! Each card is `Hidden`, `Revealed` or `Matched`. The state is decoupled
//! from any rendering primitive; renderers map it onto a `CardFace`.

use serde::{Deserialize, Serialize};

/// Position of a card on the board (0-based, row-major).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardIndex(pub u16);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the raw index as `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all card indices for a board of `card_count` cards.
    ///
    /// Stops at `u16::MAX` indices; larger boards cannot be addressed.
    ///
    /// ```
    /// use memory_game::core::CardIndex;
    ///
    /// let cards: Vec<_> = CardIndex::all(4).collect();
    /// assert_eq!(cards.len(), 4);
    /// assert_eq!(cards[3], CardIndex::new(3));
    /// ```
    pub fn all(card_count: usize) -> impl Iterator<Item = CardIndex> {
        let count = u16::try_from(card_count).unwrap_or(u16::MAX);
        (0..count).map(CardIndex)
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card {}", self.0)
    }
}

/// The face value of a card. Exactly two cards on a board share a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardValue(pub u16);

impl CardValue {
    /// Create a card value.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visibility state of a single card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, not yet part of a matched pair.
    Revealed,
    /// Face up for the rest of the game.
    Matched,
}

impl CardState {
    /// True for `Revealed` and `Matched`.
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        matches!(self, CardState::Revealed | CardState::Matched)
    }
}

/// A card on the board.
///
/// The value is fixed at creation; only the state changes during play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    value: CardValue,
    /// Current visibility state.
    pub state: CardState,
}

impl Card {
    /// Create a hidden card with the given value.
    #[must_use]
    pub const fn new(value: CardValue) -> Self {
        Self {
            value,
            state: CardState::Hidden,
        }
    }

    /// The card's face value.
    #[must_use]
    pub const fn value(&self) -> CardValue {
        self.value
    }
}
