//! The board: a shuffled deck of paired cards and their states.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::{Card, CardIndex, CardState, CardValue, GameRng};

/// An ordered sequence of `2 * set_count` cards.
///
/// ## Invariants
///
/// - The length is even and non-zero.
/// - Every value in `0..set_count` appears on exactly two cards.
/// - Card values never change; only states do.
///
/// Index-taking methods panic on an out-of-range index: the controller
/// filters clicks before reaching the board, so a bad index is a bug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Build and shuffle a board of `set_count` pairs.
    ///
    /// Fails if `set_count` is 0 or larger than `max_sets`.
    pub fn new(set_count: usize, max_sets: usize, rng: &mut GameRng) -> Result<Self> {
        if set_count == 0 || set_count > max_sets {
            return Err(GameError::InvalidSetCount {
                requested: set_count,
                max: max_sets,
            });
        }
        let pairs = u16::try_from(set_count).map_err(|_| GameError::InvalidSetCount {
            requested: set_count,
            max: max_sets,
        })?;

        let mut values: Vec<u16> = (0..pairs).chain(0..pairs).collect();
        rng.shuffle(&mut values);

        Ok(Self::from_checked(&values))
    }

    /// Build a board from an explicit value sequence, in position order.
    ///
    /// The sequence must be non-empty with every value in `0..len/2`
    /// appearing exactly twice.
    ///
    /// ```
    /// use memory_game::board::Board;
    ///
    /// let board = Board::from_values(&[0, 1, 2, 0, 1, 2]).unwrap();
    /// assert_eq!(board.set_count(), 3);
    /// assert!(Board::from_values(&[0, 1]).is_err());
    /// ```
    pub fn from_values(values: &[u16]) -> Result<Self> {
        if values.is_empty() {
            return Err(GameError::InvalidDeck("deck is empty".into()));
        }
        if values.len() % 2 != 0 {
            return Err(GameError::InvalidDeck(format!(
                "deck has odd length {}",
                values.len()
            )));
        }
        if values.len() > usize::from(u16::MAX) {
            return Err(GameError::InvalidDeck(format!(
                "deck of {} cards is too large",
                values.len()
            )));
        }

        let set_count = values.len() / 2;
        let mut counts: FxHashMap<u16, usize> = FxHashMap::default();
        for &value in values {
            if usize::from(value) >= set_count {
                return Err(GameError::InvalidDeck(format!(
                    "value {} outside 0..{}",
                    value, set_count
                )));
            }
            *counts.entry(value).or_insert(0) += 1;
        }
        if let Some((value, count)) = counts.iter().find(|&(_, &count)| count != 2) {
            return Err(GameError::InvalidDeck(format!(
                "value {} appears {} times",
                value, count
            )));
        }

        Ok(Self::from_checked(values))
    }

    fn from_checked(values: &[u16]) -> Self {
        Self {
            cards: values.iter().map(|&v| Card::new(CardValue(v))).collect(),
        }
    }

    /// Number of cards (always `2 * set_count`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the board holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of distinct pairs.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get a card, or `None` if the index is off the board.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.index())
    }

    /// Iterate over `(index, card)` pairs in position order.
    pub fn iter(&self) -> impl Iterator<Item = (CardIndex, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (CardIndex(i as u16), card))
    }

    fn slot(&self, index: CardIndex) -> &Card {
        let len = self.cards.len();
        self.cards
            .get(index.index())
            .unwrap_or_else(|| panic!("{} out of range for a board of {} cards", index, len))
    }

    fn slot_mut(&mut self, index: CardIndex) -> &mut Card {
        let len = self.cards.len();
        self.cards
            .get_mut(index.index())
            .unwrap_or_else(|| panic!("{} out of range for a board of {} cards", index, len))
    }

    /// Value of a card.
    #[must_use]
    pub fn value(&self, index: CardIndex) -> CardValue {
        self.slot(index).value()
    }

    /// State of a card.
    #[must_use]
    pub fn state(&self, index: CardIndex) -> CardState {
        self.slot(index).state
    }

    /// True if the card is `Revealed` or `Matched`.
    #[must_use]
    pub fn is_revealed(&self, index: CardIndex) -> bool {
        self.slot(index).state.is_face_up()
    }

    /// Turn a hidden card face up.
    ///
    /// Returns true if the card was hidden; face-up cards are left alone.
    pub fn reveal(&mut self, index: CardIndex) -> bool {
        let card = self.slot_mut(index);
        if card.state == CardState::Hidden {
            card.state = CardState::Revealed;
            true
        } else {
            false
        }
    }

    /// Lock a revealed card face up for the rest of the game.
    ///
    /// # Panics
    ///
    /// Panics if the card is hidden.
    pub fn mark_matched(&mut self, index: CardIndex) {
        let card = self.slot_mut(index);
        assert!(
            card.state != CardState::Hidden,
            "{} must be revealed before it can be matched",
            index
        );
        card.state = CardState::Matched;
    }

    /// Turn a revealed card face down again.
    ///
    /// # Panics
    ///
    /// Panics if the card is matched.
    pub fn conceal(&mut self, index: CardIndex) {
        let card = self.slot_mut(index);
        assert!(
            card.state != CardState::Matched,
            "{} is matched and cannot be concealed",
            index
        );
        card.state = CardState::Hidden;
    }

    /// Number of cards in the `Matched` state.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.state == CardState::Matched)
            .count()
    }

    /// The win condition: every card is face up.
    #[must_use]
    pub fn all_revealed_or_matched(&self) -> bool {
        self.cards.iter().all(|c| c.state.is_face_up())
    }
}
